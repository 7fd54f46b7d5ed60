//! Lifetime tracking for transient entities

use crate::foundation::time::Millis;

/// Creation time and lifespan of a transient entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifetime {
    /// Clock time at creation
    pub created_at: Millis,
    /// How long the entity lives
    pub duration: Millis,
}

impl Lifetime {
    /// Create a new lifetime
    pub fn new(created_at: Millis, duration: Millis) -> Self {
        Self {
            created_at,
            duration,
        }
    }

    /// Time since creation
    pub fn age(&self, now: Millis) -> Millis {
        now.saturating_sub(self.created_at)
    }

    /// Expired once the age strictly exceeds the duration
    pub fn is_expired(&self, now: Millis) -> bool {
        self.age(now) > self.duration
    }

    /// Remaining lifetime
    pub fn remaining(&self, now: Millis) -> Millis {
        self.duration.saturating_sub(self.age(now))
    }

    /// Age as a fraction of the duration, clamped to `0.0..=1.0`
    pub fn progress(&self, now: Millis) -> f32 {
        if self.duration == 0 {
            return 1.0;
        }
        (self.age(now) as f32 / self.duration as f32).clamp(0.0, 1.0)
    }
}
