//! Frames-per-second counter

use crate::foundation::time::Millis;

const WINDOW_MS: Millis = 1_000;

/// Counts frames and publishes a rate once per second
#[derive(Debug, Default, Clone)]
pub struct FpsCounter {
    window_start: Option<Millis>,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    /// Record a frame; returns the new rate when a second has elapsed
    pub fn frame(&mut self, now: Millis) -> Option<u32> {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;
        let elapsed = now.saturating_sub(start);
        if elapsed < WINDOW_MS {
            return None;
        }
        let rate = (u64::from(self.frames) * 1_000 / elapsed) as u32;
        self.fps = rate;
        self.frames = 0;
        self.window_start = Some(now);
        Some(rate)
    }

    /// Last published rate
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
