//! Breakfast display: the late-loaded model floats and sways

use std::f32::consts::FRAC_PI_4;

use crate::foundation::math::Vec3;
use crate::scene::{NodeId, Scene, SceneAttach};
use crate::stations::animation::{Animatable, AnimationContext};

/// Resting yaw of the model
pub const BASE_YAW: f32 = -FRAC_PI_4;

#[derive(Debug, Clone, Copy)]
struct Part {
    node: NodeId,
    phase: f32,
    rest_height: f32,
    rest_rotation: Vec3,
}

/// Floating, rotating and bobbing of the model and its named parts
pub struct BreakfastAnimator {
    root: NodeId,
    base: Vec3,
    parts: Vec<Part>,
}

impl BreakfastAnimator {
    /// Animate `root` around `base`, plus each named child of it
    pub fn new(scene: &Scene, root: NodeId, base: Vec3) -> Self {
        let parts = scene
            .children(root)
            .into_iter()
            .filter_map(|id| {
                let node = scene.node(id)?;
                let first = node.name.chars().next()?;
                Some(Part {
                    node: id,
                    phase: (u32::from(first) % 10) as f32 * 0.1,
                    rest_height: node.transform.position.y,
                    rest_rotation: node.transform.rotation,
                })
            })
            .collect();
        Self { root, base, parts }
    }
}

impl Animatable for BreakfastAnimator {
    fn update(&mut self, ctx: &mut AnimationContext<'_>, _delta_time: f32) {
        let time = ctx.wall_seconds();

        if let Some(root) = ctx.scene.node_mut(self.root) {
            let transform = &mut root.transform;
            // Never dip below the counter top.
            transform.position.y = (self.base.y + (time * 0.6).sin() * 0.08).max(self.base.y);
            transform.position.x = self.base.x + (time * 0.2).sin() * 0.05;
            transform.position.z = self.base.z + (time * 0.3).cos() * 0.05;
            transform.rotation.x = (time * 0.3).sin() * 0.03;
            transform.rotation.y = BASE_YAW + (time * 0.4).sin() * 0.1;
            transform.rotation.z = (time * 0.5).cos() * 0.03;
        }

        for part in &self.parts {
            if let Some(node) = ctx.scene.node_mut(part.node) {
                node.transform.position.y =
                    part.rest_height + (time * 0.8 + part.phase).sin() * 0.02;
                node.transform.rotation.x =
                    part.rest_rotation.x + (time * 0.5 + part.phase).sin() * 0.05;
                node.transform.rotation.z =
                    part.rest_rotation.z + (time * 0.4 + part.phase).cos() * 0.05;
            }
        }
    }
}
