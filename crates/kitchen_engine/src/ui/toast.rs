//! Toast notifications
//!
//! A toast fades in, holds, and fades out over its lifetime. Showing a new
//! toast force-fades whatever is still on screen.

use crate::foundation::time::Millis;

/// One message on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Text shown
    pub message: String,
    /// When it appeared
    pub shown_at: Millis,
    /// When a newer toast pushed it out
    pub dismissed_at: Option<Millis>,
}

/// Queue of on-screen toasts, oldest first
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    duration: Millis,
    fade: Millis,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(5_000, 500)
    }
}

impl ToastQueue {
    /// Toasts living `duration` with `fade` ramps at either end
    pub fn new(duration: Millis, fade: Millis) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
            fade: fade.max(1),
        }
    }

    /// Show `message` and start fading out the previous ones
    pub fn show(&mut self, message: impl Into<String>, now: Millis) {
        for toast in &mut self.toasts {
            toast.dismissed_at.get_or_insert(now);
        }
        self.toasts.push(Toast {
            message: message.into(),
            shown_at: now,
            dismissed_at: None,
        });
    }

    /// Opacity of `toast` at `now`, 0.0 once gone
    pub fn opacity(&self, toast: &Toast, now: Millis) -> f32 {
        let fade = self.fade as f32;
        let age = now.saturating_sub(toast.shown_at);
        if age >= self.duration {
            return 0.0;
        }
        let fade_in = age as f32 / fade;
        let fade_out = (self.duration - age) as f32 / fade;
        let forced = toast.dismissed_at.map_or(1.0, |dismissed| {
            1.0 - now.saturating_sub(dismissed) as f32 / fade
        });
        fade_in.min(fade_out).min(forced).clamp(0.0, 1.0)
    }

    /// Drop toasts that have fully faded
    pub fn prune(&mut self, now: Millis) {
        let (duration, fade) = (self.duration, self.fade);
        self.toasts.retain(|toast| {
            now.saturating_sub(toast.shown_at) < duration
                && toast
                    .dismissed_at
                    .map_or(true, |dismissed| now.saturating_sub(dismissed) < fade)
        });
    }

    /// Visible messages with their opacity
    pub fn visible(&self, now: Millis) -> Vec<(&str, f32)> {
        self.toasts
            .iter()
            .map(|toast| (toast.message.as_str(), self.opacity(toast, now)))
            .filter(|(_, opacity)| *opacity > 0.0)
            .collect()
    }

    /// Most recent message
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    /// Number of toasts not yet pruned
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether no toast is queued
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fade_in_hold_fade_out() {
        let mut queue = ToastQueue::new(5_000, 500);
        queue.show("Chopping vegetables...", 1_000);
        let toast = queue.latest().unwrap().clone();

        assert_relative_eq!(queue.opacity(&toast, 1_000), 0.0);
        assert_relative_eq!(queue.opacity(&toast, 1_250), 0.5);
        assert_relative_eq!(queue.opacity(&toast, 3_000), 1.0);
        assert_relative_eq!(queue.opacity(&toast, 5_750), 0.5);
        assert_relative_eq!(queue.opacity(&toast, 6_000), 0.0);

        queue.prune(5_999);
        assert_eq!(queue.len(), 1);
        queue.prune(6_000);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_new_toast_force_fades_previous() {
        let mut queue = ToastQueue::new(5_000, 500);
        queue.show("first", 0);
        queue.show("second", 2_000);

        let visible = queue.visible(2_250);
        assert_eq!(visible.len(), 2);
        assert_relative_eq!(visible[0].1, 0.5);

        queue.prune(2_500);
        let visible = queue.visible(2_500);
        assert_eq!(visible, vec![("second", 1.0)]);
    }
}
