//! Time-driven scroll animation.
//!
//! The animator never schedules anything itself. The host's frame loop asks
//! it where the scroll position should be after a given amount of time and
//! the animator answers with a [`Frame`].

use std::time::Duration;

use crate::{easing::Easing, px::PxPosition};

/// The position an animation produced for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    /// The animation is still in flight at this position.
    Running(PxPosition),
    /// The animation reached its destination, which is this position.
    Finished(PxPosition),
}

impl Frame {
    /// The position carried by the frame.
    pub fn position(&self) -> PxPosition {
        match *self {
            Frame::Running(position) | Frame::Finished(position) => position,
        }
    }

    /// Returns whether this was the last frame.
    pub fn is_finished(&self) -> bool {
        matches!(self, Frame::Finished(_))
    }
}

#[derive(Clone, Copy, Debug)]
struct Run {
    origin: PxPosition,
    delta: PxPosition,
    duration: Duration,
    easing: Easing,
    current: PxPosition,
}

impl Run {
    fn destination(&self) -> PxPosition {
        self.origin + self.delta
    }

    fn position_at(&self, elapsed: Duration) -> PxPosition {
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(progress);
        PxPosition::new(
            self.origin.x + self.delta.x.fraction(eased),
            self.origin.y + self.delta.y.fraction(eased),
        )
    }
}

/// Interpolates from a start position by a fixed delta over a fixed duration.
///
/// ```
/// use std::time::Duration;
/// use swipe_pager::{
///     animator::{Frame, SnapAnimator},
///     easing::Easing,
///     px::{Px, PxPosition},
/// };
///
/// let mut animator = SnapAnimator::new();
/// animator.start(
///     PxPosition::new(Px::new(500), Px::ZERO),
///     PxPosition::new(Px::new(580), Px::ZERO),
///     Duration::from_millis(200),
///     Easing::Linear,
/// );
/// assert_eq!(
///     animator.tick(Duration::from_millis(100)),
///     Some(Frame::Running(PxPosition::new(Px::new(790), Px::ZERO)))
/// );
/// assert!(animator.tick(Duration::from_millis(200)).is_some_and(|f| f.is_finished()));
/// assert!(animator.is_finished());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SnapAnimator {
    run: Option<Run>,
}

impl SnapAnimator {
    /// Creates an idle animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new animation, replacing any animation in flight.
    pub fn start(
        &mut self,
        origin: PxPosition,
        delta: PxPosition,
        duration: Duration,
        easing: Easing,
    ) {
        self.run = Some(Run {
            origin,
            delta,
            duration,
            easing,
            current: origin,
        });
    }

    /// Returns whether no animation is in flight.
    pub fn is_finished(&self) -> bool {
        self.run.is_none()
    }

    /// Where the running animation will end, if one is running.
    pub fn destination(&self) -> Option<PxPosition> {
        self.run.as_ref().map(Run::destination)
    }

    /// The most recently produced position, if an animation is running.
    pub fn current(&self) -> Option<PxPosition> {
        self.run.as_ref().map(|run| run.current)
    }

    /// Computes the position `elapsed` after the animation started.
    ///
    /// Returns `None` when idle. Once a [`Frame::Finished`] is returned the
    /// animator goes idle.
    pub fn tick(&mut self, elapsed: Duration) -> Option<Frame> {
        let run = self.run.as_mut()?;
        if elapsed >= run.duration {
            let destination = run.destination();
            self.run = None;
            return Some(Frame::Finished(destination));
        }
        run.current = run.position_at(elapsed);
        Some(Frame::Running(run.current))
    }

    /// Stops the animation where it currently is.
    ///
    /// Returns the frozen position, or `None` if nothing was running. Safe to
    /// call at any time.
    pub fn abort(&mut self) -> Option<PxPosition> {
        self.run.take().map(|run| run.current)
    }
}
