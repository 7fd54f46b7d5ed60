//! Render port
//!
//! The engine hands the finished scene to a [`Renderer`] once per tick.

use crate::scene::{Camera, Scene};
use thiserror::Error;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// The backend lost its surface or device
    #[error("Render backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Any other backend failure
    #[error("Render failed: {0}")]
    Failed(String),
}

/// Draws one frame
pub trait Renderer {
    /// Draw `scene` from `camera`
    fn render_frame(&mut self, scene: &Scene, camera: &Camera) -> Result<(), RenderError>;
}

/// Renderer that draws nothing and counts frames
#[derive(Debug, Default)]
pub struct NullRenderer {
    frames: u64,
    last_node_count: usize,
}

impl NullRenderer {
    /// Create a null renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Scene size at the last frame
    pub fn last_node_count(&self) -> usize {
        self.last_node_count
    }
}

impl Renderer for NullRenderer {
    fn render_frame(&mut self, scene: &Scene, _camera: &Camera) -> Result<(), RenderError> {
        self.frames += 1;
        self.last_node_count = scene.len();
        Ok(())
    }
}
