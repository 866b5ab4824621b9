//! Redraw requests raised whenever the scroll offset changes.
//!
//! The pager never renders. It only tells the host that a new frame is
//! needed, through a [`RedrawScheduler`]. Requests are fire-and-forget and
//! may be coalesced freely.

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// Sink for redraw requests.
pub trait RedrawScheduler: Send + Sync {
    /// Called on the thread that owns the pager.
    fn request_redraw(&self);

    /// Called from any other thread.
    fn request_redraw_from_any_thread(&self);
}

/// A coalescing redraw flag the host's event loop drains once per frame.
///
/// Clones share the same flag.
///
/// ```
/// use swipe_pager::redraw::{RedrawScheduler, RedrawSignal};
///
/// let signal = RedrawSignal::new();
/// signal.request_redraw();
/// signal.request_redraw();
/// assert!(signal.take_pending());
/// assert!(!signal.take_pending());
/// assert_eq!(signal.local_requests(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RedrawSignal {
    inner: Arc<SignalInner>,
}

#[derive(Debug, Default)]
struct SignalInner {
    pending: AtomicBool,
    local: AtomicUsize,
    remote: AtomicUsize,
}

impl RedrawSignal {
    /// Creates a signal with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a redraw was requested since the last call, and
    /// clears the flag.
    pub fn take_pending(&self) -> bool {
        self.inner.pending.swap(false, Ordering::AcqRel)
    }

    /// Returns whether a redraw is pending without clearing it.
    pub fn is_pending(&self) -> bool {
        self.inner.pending.load(Ordering::Acquire)
    }

    /// Number of requests made from the owning thread.
    pub fn local_requests(&self) -> usize {
        self.inner.local.load(Ordering::Relaxed)
    }

    /// Number of requests made from other threads.
    pub fn remote_requests(&self) -> usize {
        self.inner.remote.load(Ordering::Relaxed)
    }
}

impl RedrawScheduler for RedrawSignal {
    fn request_redraw(&self) {
        self.inner.local.fetch_add(1, Ordering::Relaxed);
        self.inner.pending.store(true, Ordering::Release);
    }

    fn request_redraw_from_any_thread(&self) {
        self.inner.remote.fetch_add(1, Ordering::Relaxed);
        self.inner.pending.store(true, Ordering::Release);
    }
}

/// Discards every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRedraw;

impl RedrawScheduler for NoopRedraw {
    fn request_redraw(&self) {}

    fn request_redraw_from_any_thread(&self) {}
}
