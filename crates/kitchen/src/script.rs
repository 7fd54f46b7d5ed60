//! Scripted walkthrough
//!
//! A fixed timeline of intents that tours every station from the spawn
//! point, pressing E at each stop.

use kitchen_engine::foundation::time::Millis;
use kitchen_engine::input::{InputFrame, InputIntents, InputSource};

/// One stretch of held intents
#[derive(Debug, Clone, Copy)]
struct Segment {
    duration: Millis,
    intents: InputIntents,
    label: &'static str,
}

impl Segment {
    const fn hold(duration: Millis, intents: InputIntents, label: &'static str) -> Self {
        Self {
            duration,
            intents,
            label,
        }
    }

    const fn wait(duration: Millis, label: &'static str) -> Self {
        Self::hold(duration, InputIntents::empty(), label)
    }
}

const TOUR: &[Segment] = &[
    Segment::wait(500, "look around"),
    Segment::hold(400, InputIntents::MOVE_LEFT, "line up with the stove"),
    Segment::hold(2_000, InputIntents::MOVE_FORWARD, "walk to the counter"),
    Segment::hold(1, InputIntents::INTERACT, "light the stove"),
    Segment::wait(1_500, "watch the pan"),
    Segment::hold(1_000, InputIntents::MOVE_RIGHT, "slide to the sink"),
    Segment::hold(1, InputIntents::INTERACT, "wash hands"),
    Segment::wait(1_000, "watch the tap"),
    Segment::hold(1_600, InputIntents::MOVE_LEFT, "slide to the cutting board"),
    Segment::hold(1, InputIntents::INTERACT, "chop vegetables"),
    Segment::wait(1_500, "watch the knife"),
    Segment::hold(1, InputIntents::TOGGLE_LIGHTS, "freeze the lights"),
    Segment::hold(2_400, InputIntents::MOVE_RIGHT, "slide to the breakfast"),
    Segment::hold(1, InputIntents::INTERACT, "enjoy breakfast"),
    Segment::wait(1_000, "admire breakfast"),
    Segment::hold(1, InputIntents::TOGGLE_LIGHTS, "restart the lights"),
    Segment::hold(2_800, InputIntents::MOVE_LEFT, "head for the fridge"),
    Segment::hold(230, InputIntents::MOVE_FORWARD, "step up to the fridge"),
    Segment::hold(1, InputIntents::INTERACT, "open the fridge"),
    Segment::wait(6_000, "let everything settle"),
];

/// Replays the tour against the clock
///
/// Momentary intents (interact, light toggle) fire on exactly one sample
/// however short their segment is.
#[derive(Debug, Default)]
pub struct WalkScript {
    started_at: Option<Millis>,
    fired: usize,
}

impl WalkScript {
    /// Script that starts on its first sample
    pub fn new() -> Self {
        Self::default()
    }

    /// Total script length
    pub fn duration() -> Millis {
        TOUR.iter().map(|segment| segment.duration).sum()
    }

    /// Whether the tour has run its course at `now`
    pub fn is_finished(&self, now: Millis) -> bool {
        self.started_at
            .is_some_and(|start| now.saturating_sub(start) >= Self::duration())
    }

    fn segment_at(elapsed: Millis) -> Option<usize> {
        let mut end = 0;
        TOUR.iter().position(|segment| {
            end += segment.duration;
            elapsed < end
        })
    }
}

const MOMENTARY: InputIntents = InputIntents::INTERACT.union(InputIntents::TOGGLE_LIGHTS);

impl InputSource for WalkScript {
    fn sample(&mut self, now: Millis) -> InputFrame {
        let start = *self.started_at.get_or_insert(now);
        let current = Self::segment_at(now.saturating_sub(start));
        let reached = current.unwrap_or(TOUR.len());

        // Presses whose segment ended between two samples still fire.
        let mut intents = InputIntents::empty();
        for segment in TOUR.get(self.fired..reached).unwrap_or_default() {
            if segment.intents.intersects(MOMENTARY) {
                log::info!("Script: {}", segment.label);
                intents |= segment.intents & MOMENTARY;
            }
        }

        if let Some(index) = current {
            let segment = &TOUR[index];
            if self.fired <= index {
                log::info!("Script: {}", segment.label);
                intents |= segment.intents;
                self.fired = index + 1;
            } else {
                intents |= segment.intents - MOMENTARY;
            }
        } else {
            self.fired = TOUR.len();
        }
        InputFrame::captured(intents)
    }
}
