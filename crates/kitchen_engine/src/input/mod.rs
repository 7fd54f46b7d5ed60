//! Input intents
//!
//! Key and pointer plumbing live in the host. The engine only sees the
//! boolean intents sampled once per tick. Debouncing is the host's job:
//! `INTERACT`, `JUMP` and `TOGGLE_LIGHTS` should be set on the press frame
//! only.

use crate::foundation::time::Millis;
use bitflags::bitflags;

bitflags! {
    /// Boolean intents for one tick
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InputIntents: u16 {
        /// Walk toward the view direction
        const MOVE_FORWARD = 1 << 0;
        /// Walk away from the view direction
        const MOVE_BACK = 1 << 1;
        /// Strafe left
        const MOVE_LEFT = 1 << 2;
        /// Strafe right
        const MOVE_RIGHT = 1 << 3;
        /// Move faster while held
        const SPRINT = 1 << 4;
        /// Jump if grounded
        const JUMP = 1 << 5;
        /// Activate the nearby station
        const INTERACT = 1 << 6;
        /// Flip light animation on or off
        const TOGGLE_LIGHTS = 1 << 7;

        /// Any walking direction
        const MOVEMENT = Self::MOVE_FORWARD.bits()
            | Self::MOVE_BACK.bits()
            | Self::MOVE_LEFT.bits()
            | Self::MOVE_RIGHT.bits();
    }
}

/// Everything the engine reads from input in one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    /// Intents held or pressed this tick
    pub intents: InputIntents,
    /// Whether the pointer is captured; movement and interaction need it
    pub captured: bool,
    /// Change in view yaw since the last tick, in radians
    pub yaw_delta: f32,
}

impl InputFrame {
    /// A captured frame with the given intents
    pub fn captured(intents: InputIntents) -> Self {
        Self {
            intents,
            captured: true,
            yaw_delta: 0.0,
        }
    }

    /// Whether any walking intent is held
    pub fn is_moving(&self) -> bool {
        self.intents.intersects(InputIntents::MOVEMENT)
    }
}

/// Source of per-tick input, polled by the host loop
pub trait InputSource {
    /// Sample intents for the tick at `now`
    fn sample(&mut self, now: Millis) -> InputFrame;
}
