//! First-person camera

use crate::foundation::math::Vec3;

/// Perspective camera at the player's eye
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position
    pub position: Vec3,
    /// View yaw in radians; zero looks down -Z
    pub yaw: f32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
}

impl Camera {
    /// Camera at `position` with the scene's lens settings
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Snap to the player's eye
    pub fn follow(&mut self, position: Vec3, yaw: f32) {
        self.position = position;
        self.yaw = yaw;
    }
}
