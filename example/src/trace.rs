//! Touch traces replayed by the demo.

use serde::{Deserialize, Serialize};
use swipe_pager::PointerEvent;

/// One recorded gesture session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trace {
    pub name: String,
    /// Offer events to the pager's interception hook first, the way a host
    /// with a vertically scrolling child would.
    #[serde(default)]
    pub nested: bool,
    /// Page to start on.
    #[serde(default)]
    pub start_page: usize,
    pub steps: Vec<Step>,
}

/// Either a pointer event or a number of frames to run on the input thread
/// before the next event.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Event(PointerEvent),
    Frames { frames: u32 },
}

fn swipe(from: f32, through: f32, to: f32) -> Vec<Step> {
    vec![
        Step::Event(PointerEvent::down(from, 600.0)),
        Step::Event(PointerEvent::moved(through, 605.0)),
        Step::Event(PointerEvent::up(to, 605.0)),
    ]
}

/// The scenarios replayed when no trace file is given, scaled to `width`.
pub fn builtin(width: f32) -> Vec<Trace> {
    let mut interrupted = swipe(width * 0.85, width * 0.35, width * 0.25);
    interrupted.push(Step::Frames { frames: 2 });
    interrupted.extend([
        Step::Event(PointerEvent::down(width * 0.5, 600.0)),
        Step::Event(PointerEvent::up(width * 0.5, 600.0)),
    ]);

    vec![
        Trace {
            name: "swipe forward".to_owned(),
            nested: false,
            start_page: 0,
            steps: swipe(width * 0.85, width * 0.35, width * 0.25),
        },
        Trace {
            name: "short swipe back".to_owned(),
            nested: false,
            start_page: 1,
            steps: swipe(width * 0.2, width * 0.45, width * 0.45),
        },
        Trace {
            name: "overscroll first page".to_owned(),
            nested: false,
            start_page: 0,
            steps: swipe(width * 0.1, width * 0.8, width * 0.8),
        },
        Trace {
            name: "vertical scroll in child".to_owned(),
            nested: true,
            start_page: 1,
            steps: vec![
                Step::Event(PointerEvent::down(width * 0.5, 400.0)),
                Step::Event(PointerEvent::moved(width * 0.5 + 6.0, 700.0)),
                Step::Event(PointerEvent::moved(width * 0.5 - 30.0, 1100.0)),
                Step::Event(PointerEvent::up(width * 0.5 - 30.0, 1200.0)),
            ],
        },
        Trace {
            name: "horizontal swipe over child".to_owned(),
            nested: true,
            start_page: 1,
            steps: vec![
                Step::Event(PointerEvent::down(width * 0.7, 400.0)),
                Step::Event(PointerEvent::moved(width * 0.6, 410.0)),
                Step::Event(PointerEvent::moved(width * 0.3, 420.0)),
                Step::Event(PointerEvent::up(width * 0.1, 420.0)),
            ],
        },
        Trace {
            name: "press while settling".to_owned(),
            nested: false,
            start_page: 0,
            steps: interrupted,
        },
    ]
}
