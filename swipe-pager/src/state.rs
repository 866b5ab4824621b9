//! A pager handle that can be shared with a frame thread.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::controller::PagerController;

/// Shared ownership of a [`PagerController`].
///
/// Clones point at the same controller. Input handling and frame ticks may
/// then run on different threads without racing on the scroll offset.
///
/// ```
/// use std::sync::Arc;
/// use swipe_pager::{PagerConfig, PagerController, SharedPager, redraw::NoopRedraw};
///
/// let controller = PagerController::new(PagerConfig::default(), Arc::new(NoopRedraw))?;
/// let pager = SharedPager::new(controller);
/// let frames = pager.clone();
/// let settling = std::thread::spawn(move || frames.with(|pager| pager.is_settling()))
///     .join()
///     .expect("frame thread panicked");
/// assert!(!settling);
/// # Ok::<(), swipe_pager::PagerError>(())
/// ```
#[derive(Clone)]
pub struct SharedPager {
    inner: Arc<RwLock<PagerController>>,
}

impl SharedPager {
    /// Wraps a controller.
    pub fn new(controller: PagerController) -> Self {
        Self {
            inner: Arc::new(RwLock::new(controller)),
        }
    }

    /// Execute a closure with a shared reference to the controller.
    pub fn with<R>(&self, f: impl FnOnce(&PagerController) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Execute a closure with a mutable reference to the controller.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut PagerController) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }
}

impl From<PagerController> for SharedPager {
    fn from(controller: PagerController) -> Self {
        Self::new(controller)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        HeightConstraint, Panel, PagerConfig, PointerEvent, Px, PxSize,
        redraw::{RedrawScheduler, RedrawSignal},
    };

    #[test]
    fn frames_from_another_thread_use_the_remote_path() {
        let signal = RedrawSignal::new();
        let scheduler: Arc<dyn RedrawScheduler> = Arc::new(signal.clone());
        let mut controller =
            PagerController::new(PagerConfig::default(), scheduler).expect("valid config");
        controller
            .set_layout(
                PxSize::new(Px(1080), Px(1920)),
                &[Panel::visible(Px(900)); 3],
                HeightConstraint::Fixed(Px(1920)),
            )
            .expect("valid layout");
        let pager = SharedPager::new(controller);

        pager.with_mut(|pager| {
            pager.on_touch(PointerEvent::down(900.0, 10.0));
            pager.on_touch(PointerEvent::moved(300.0, 10.0));
            pager.on_touch(PointerEvent::up(300.0, 10.0));
        });
        let local_before = signal.local_requests();

        let frames = pager.clone();
        std::thread::spawn(move || {
            while frames.with_mut(|pager| pager.compute_frame(Duration::from_millis(16))) {}
        })
        .join()
        .expect("frame thread panicked");

        assert_eq!(pager.with(|pager| pager.scroll_offset()), Px(1080));
        assert!(signal.remote_requests() > 0);
        assert_eq!(signal.local_requests(), local_before);
    }
}
