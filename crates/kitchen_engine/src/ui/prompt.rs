//! Interaction prompt

/// Hint shown while a station is in reach
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InteractionPrompt {
    text: Option<String>,
}

impl InteractionPrompt {
    /// Show `text`, replacing any current hint
    pub fn show(&mut self, text: String) {
        self.text = Some(text);
    }

    /// Hide the hint
    pub fn hide(&mut self) {
        self.text = None;
    }

    /// Current hint, if shown
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Whether a hint is shown
    pub fn is_visible(&self) -> bool {
        self.text.is_some()
    }
}
