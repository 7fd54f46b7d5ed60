//! Headless renderer that reports what it would draw

use kitchen_engine::scene::{Camera, RenderError, Renderer, Scene};

/// Counts visible nodes each frame and traces the camera
#[derive(Debug, Default)]
pub struct LoggingRenderer {
    frames: u64,
    visible_nodes: usize,
}

impl LoggingRenderer {
    /// Create a renderer with no frames drawn
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Visible nodes in the last frame
    pub fn visible_nodes(&self) -> usize {
        self.visible_nodes
    }
}

impl Renderer for LoggingRenderer {
    fn render_frame(&mut self, scene: &Scene, camera: &Camera) -> Result<(), RenderError> {
        self.frames += 1;
        self.visible_nodes = scene
            .iter()
            .filter(|(id, _)| scene.is_effectively_visible(*id))
            .count();
        log::trace!(
            "Frame {}: {} visible nodes, eye at ({:.2}, {:.2}, {:.2})",
            self.frames,
            self.visible_nodes,
            camera.position.x,
            camera.position.y,
            camera.position.z
        );
        Ok(())
    }
}
