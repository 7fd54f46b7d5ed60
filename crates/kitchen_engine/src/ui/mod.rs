//! Heads-up display state
//!
//! Only the state lives here; drawing is the renderer's business.
//!
//! - `prompt`: the "Press E" hint for the nearby station
//! - `toast`: short-lived activation messages
//! - `debug_panel`: per-frame diagnostics snapshot
//! - `fps`: frames-per-second counter

pub mod debug_panel;
pub mod fps;
pub mod prompt;
pub mod toast;

pub use debug_panel::DebugPanel;
pub use fps::FpsCounter;
pub use prompt::InteractionPrompt;
pub use toast::{Toast, ToastQueue};

use crate::config::UiConfig;

/// Everything shown over the 3D view
#[derive(Debug, Default)]
pub struct Hud {
    /// Interaction hint
    pub prompt: InteractionPrompt,
    /// Activation messages
    pub toasts: ToastQueue,
    /// Frame rate
    pub fps: FpsCounter,
}

impl Hud {
    /// HUD using the configured toast timings
    pub fn new(config: &UiConfig) -> Self {
        Self {
            prompt: InteractionPrompt::default(),
            toasts: ToastQueue::new(config.toast_duration_ms, config.toast_fade_ms),
            fps: FpsCounter::default(),
        }
    }
}
