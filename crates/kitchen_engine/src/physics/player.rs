//! First-person player kinematics
//!
//! Horizontal motion follows the view yaw; vertical motion is gravity plus
//! jumping against a flat floor at eye height.

use crate::config::PlayerConfig;
use crate::foundation::math::Vec3;
use crate::input::{InputFrame, InputIntents};
use crate::physics::collider::SpatialCollider;

/// Kinematic state of the player's eye point
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Eye position in world space
    pub position: Vec3,
    /// Vertical velocity in units per second
    pub vertical_velocity: f32,
    /// Standing on the floor
    pub grounded: bool,
    /// Sprint held this tick
    pub sprinting: bool,
    /// View yaw in radians; zero looks down -Z
    pub yaw: f32,
    head_bob_timer: f32,
}

impl PlayerState {
    /// Player standing at the configured spawn point
    pub fn spawn(config: &PlayerConfig) -> Self {
        Self {
            position: config.spawn,
            vertical_velocity: 0.0,
            grounded: true,
            sprinting: false,
            yaw: 0.0,
            head_bob_timer: 0.0,
        }
    }

    /// Unit forward vector on the floor plane
    pub fn forward(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Unit right vector on the floor plane
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    /// Advance one tick of movement and push out of static geometry
    pub fn integrate(
        &mut self,
        input: &InputFrame,
        delta_time: f32,
        config: &PlayerConfig,
        collider: &SpatialCollider,
    ) {
        let intents = input.intents;
        self.yaw += input.yaw_delta;
        self.sprinting = intents.contains(InputIntents::SPRINT);

        let axis = |positive: InputIntents, negative: InputIntents| {
            f32::from(u8::from(intents.contains(positive)))
                - f32::from(u8::from(intents.contains(negative)))
        };
        let forward_amount = axis(InputIntents::MOVE_FORWARD, InputIntents::MOVE_BACK);
        let right_amount = axis(InputIntents::MOVE_RIGHT, InputIntents::MOVE_LEFT);

        let mut wish = Vec3::new(right_amount, 0.0, forward_amount);
        if wish.norm_squared() > 0.0 {
            wish.normalize_mut();
        }

        let multiplier = if self.sprinting {
            config.sprint_multiplier
        } else {
            1.0
        };
        let step = config.speed * multiplier * delta_time;
        self.position += (self.forward() * wish.z + self.right() * wish.x) * step;

        if intents.contains(InputIntents::JUMP) && self.grounded {
            self.vertical_velocity = config.jump_velocity;
            self.grounded = false;
        }

        self.vertical_velocity -= config.gravity * delta_time;
        self.position.y += self.vertical_velocity * delta_time;

        if self.position.y < config.height {
            self.vertical_velocity = 0.0;
            self.position.y = config.height;
            self.grounded = true;
        }

        if input.is_moving() && self.grounded {
            self.head_bob_timer += delta_time * config.head_bob_frequency;
            self.position.y = config.height + self.head_bob_timer.sin() * config.head_bob_height;
        }

        self.position = collider.resolve(self.position, config.collision_radius);
    }
}
