//! Sink: dripping tap over a static pool

use std::f32::consts::FRAC_PI_2;

use crate::foundation::math::{Transform, Vec3};
use crate::particles::{ParticleKind, ParticleSpawn};
use crate::scene::{Material, NodeId, SceneAttach, SceneNode, Shape};
use crate::stations::animation::{Animatable, AnimationContext};
use rand::Rng;

/// Per-frame chance of a new drop
pub const DROP_CHANCE: f64 = 0.2;

/// Drop lifetime
pub const DROP_LIFETIME_MS: u64 = 1_000;

/// Drop fall speed, units per second
pub const DROP_SPEED: f32 = 4.2;

/// Drops falling from the spout, plus a pool created on first use
pub struct SinkAnimator {
    spout: Vec3,
    pool_center: Vec3,
    pool: Option<NodeId>,
}

impl SinkAnimator {
    /// Drops start at `spout`; the pool sits at `pool_center`
    pub fn new(spout: Vec3, pool_center: Vec3) -> Self {
        Self {
            spout,
            pool_center,
            pool: None,
        }
    }

    /// The pool node, once created
    pub fn pool(&self) -> Option<NodeId> {
        self.pool
    }
}

impl Animatable for SinkAnimator {
    fn update(&mut self, ctx: &mut AnimationContext<'_>, _delta_time: f32) {
        if ctx.rng.gen_bool(DROP_CHANCE) {
            ctx.spawn(ParticleSpawn::new(
                ParticleKind::Water,
                self.spout,
                Vec3::new(0.0, -DROP_SPEED, 0.0),
                DROP_LIFETIME_MS,
            ));
        }

        if self.pool.is_none() {
            let pool = SceneNode::new("sink pool", Shape::Disc { radius: 0.5 })
                .with_transform(
                    Transform::from_position(self.pool_center)
                        .with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
                )
                .with_material(Material::translucent(0x66_CC_FF, 0.3));
            self.pool = Some(ctx.scene.attach(pool));
            log::debug!("Created sink pool");
        }
    }
}

/// Keeps the tap nozzle turned toward the basin
pub struct TapAnimator {
    nozzle: NodeId,
}

impl TapAnimator {
    /// Animate `nozzle`
    pub fn new(nozzle: NodeId) -> Self {
        Self { nozzle }
    }
}

impl Animatable for TapAnimator {
    fn update(&mut self, ctx: &mut AnimationContext<'_>, _delta_time: f32) {
        if let Some(nozzle) = ctx.scene.node_mut(self.nozzle) {
            nozzle.transform.rotation.z = FRAC_PI_2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::ParticleManager;
    use crate::scene::Scene;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pool_is_created_once() {
        let mut scene = Scene::new();
        let mut particles = ParticleManager::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut sink = SinkAnimator::new(Vec3::new(3.0, 1.7, -4.7), Vec3::new(3.0, 1.1, -4.5));

        let mut pools = Vec::new();
        for frame in 0..50 {
            let mut ctx = AnimationContext {
                scene: &mut scene,
                particles: &mut particles,
                rng: &mut rng,
                now: frame * 16,
            };
            sink.update(&mut ctx, 0.016);
            pools.push(sink.pool());
        }

        assert!(pools.iter().all(|pool| *pool == pools[0] && pool.is_some()));
        assert_eq!(scene.len(), 1 + particles.count(ParticleKind::Water));
        assert!(particles.count(ParticleKind::Water) > 0);
    }

    #[test]
    fn test_drops_fall_from_spout_and_reach_the_floor() {
        let mut scene = Scene::new();
        let mut particles = ParticleManager::default();
        let mut rng = StdRng::seed_from_u64(3);
        let spout = Vec3::new(3.0, 1.7, -4.7);
        let mut sink = SinkAnimator::new(spout, Vec3::new(3.0, 1.1, -4.5));

        let mut frame = 0;
        while particles.count(ParticleKind::Water) == 0 {
            let mut ctx = AnimationContext {
                scene: &mut scene,
                particles: &mut particles,
                rng: &mut rng,
                now: frame * 16,
            };
            sink.update(&mut ctx, 0.016);
            frame += 1;
        }

        let (_, drop) = particles.iter_kind(ParticleKind::Water).next().unwrap();
        assert_eq!(drop.velocity, Vec3::new(0.0, -DROP_SPEED, 0.0));
        assert_eq!(scene.node(drop.node).unwrap().transform.position, spout);

        // 0.7 units above the floor: gone well inside the drop lifetime
        let now = frame * 16;
        for step in 1..=15 {
            particles.tick(&mut scene, 0.016, now + step * 16);
        }
        assert_eq!(particles.count(ParticleKind::Water), 0);
    }
}
