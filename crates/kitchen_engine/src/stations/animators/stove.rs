//! Stove: glowing burner, a gently rocking pan, flames and sizzle

use crate::foundation::math::{Color, Vec3};
use crate::particles::manager::upward;
use crate::particles::{ParticleKind, ParticleSpawn};
use crate::scene::{Material, NodeId, Scene, SceneAttach};
use crate::stations::animation::{Animatable, AnimationContext};
use rand::Rng;

const BURNER_HUE: f32 = 0.05;
const BURNER_SATURATION: f32 = 0.8;

/// Per-frame chance of a flame under the pan
pub const FLAME_CHANCE: f64 = 0.05;

/// Per-frame chance of sizzle vapour in the pan
pub const STEAM_CHANCE: f64 = 0.02;

/// Flame lifetime
pub const FLAME_LIFETIME_MS: u64 = 500;

/// Steam lifetime
pub const STEAM_LIFETIME_MS: u64 = 600;

/// Burner glow, pan motion and cooking particles
pub struct StoveAnimator {
    burner: NodeId,
    pan: NodeId,
    burner_material: Option<Material>,
    pan_rest_height: f32,
    center: Vec3,
}

impl StoveAnimator {
    /// Animate `burner` and `pan`; particles appear around `center`
    pub fn new(scene: &Scene, burner: NodeId, pan: NodeId, center: Vec3) -> Self {
        Self {
            burner,
            pan,
            burner_material: scene.node(burner).map(|node| node.material),
            pan_rest_height: scene
                .node(pan)
                .map_or(center.y, |node| node.transform.position.y),
            center,
        }
    }

    /// Burner lightness at `time` seconds
    pub fn glow_at(time: f32) -> f32 {
        0.5 + (time * 1.5).sin() * 0.15
    }
}

impl Animatable for StoveAnimator {
    fn update(&mut self, ctx: &mut AnimationContext<'_>, _delta_time: f32) {
        let time = ctx.wall_seconds();
        let glow = Self::glow_at(time);

        if let Some(burner) = ctx.scene.node_mut(self.burner) {
            burner.material.color = Color::from_hsl(BURNER_HUE, BURNER_SATURATION, glow);
            burner.material.emissive = Color::from_hsl(BURNER_HUE, BURNER_SATURATION, glow * 0.3);
        }
        if let Some(pan) = ctx.scene.node_mut(self.pan) {
            pan.transform.rotation.z = (time * 0.5).sin() * 0.02;
            pan.transform.position.y = self.pan_rest_height + time.sin() * 0.005;
        }

        if ctx.rng.gen_bool(FLAME_CHANCE) {
            let position = Vec3::new(
                self.center.x + ctx.rng.gen_range(-0.1..0.1),
                self.center.y + 0.01,
                self.center.z + ctx.rng.gen_range(-0.1..0.1),
            );
            ctx.spawn(ParticleSpawn::new(
                ParticleKind::Flame,
                position,
                upward(1.8),
                FLAME_LIFETIME_MS,
            ));
        }

        if ctx.rng.gen_bool(STEAM_CHANCE) {
            let position = Vec3::new(
                self.center.x + ctx.rng.gen_range(-0.15..0.15),
                self.center.y + 0.14,
                self.center.z + ctx.rng.gen_range(-0.15..0.15),
            );
            ctx.spawn(ParticleSpawn::new(
                ParticleKind::Steam,
                position,
                upward(0.6),
                STEAM_LIFETIME_MS,
            ));
        }
    }

    fn deactivate(&mut self, scene: &mut Scene) {
        if let (Some(original), Some(burner)) = (self.burner_material, scene.node_mut(self.burner)) {
            burner.material = original;
        }
        if let Some(pan) = scene.node_mut(self.pan) {
            pan.transform.rotation.z = 0.0;
            pan.transform.position.y = self.pan_rest_height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_stays_in_calm_band() {
        for step in 0..100 {
            let glow = StoveAnimator::glow_at(step as f32 * 0.37);
            assert!((0.35..=0.65).contains(&glow));
        }
    }
}
