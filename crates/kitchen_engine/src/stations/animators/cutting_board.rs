//! Cutting board: a chopping knife and vegetables that shed offcuts

use std::f32::consts::TAU;

use crate::foundation::math::{Color, Vec3};
use crate::particles::{ParticleKind, ParticleSpawn};
use crate::scene::{NodeId, Scene, SceneAttach};
use crate::stations::animation::{Animatable, AnimationContext};
use rand::Rng;

/// Lift of the knife above its resting height at the top of a stroke
const KNIFE_LIFT: f32 = 0.15;

/// Tilt of the knife at the top of a stroke, radians
const KNIFE_TILT: f32 = 0.1;

/// Fraction of the down-stroke spent actually falling
const CHOP_FALL_FRACTION: f32 = 0.1;

/// Part of the one-second cycle in which the blade meets the board
const IMPACT_WINDOW: (f32, f32) = (0.5, 0.6);

/// Each cut keeps this much of a vegetable's height
const CUT_SHRINK: f32 = 0.95;

/// Vegetables stop shrinking at this fraction of their original height
const MIN_HEIGHT_FRACTION: f32 = 0.7;

/// How long an offcut stays around
const DEBRIS_LIFETIME_MS: u64 = 2_000;

/// Knife cycle: raise and tilt for half a second, chop fast, then hold
pub struct KnifeAnimator {
    knife: NodeId,
    rest_height: f32,
}

impl KnifeAnimator {
    /// Animate `knife`, which rests at `rest_height`
    pub fn new(knife: NodeId, rest_height: f32) -> Self {
        Self { knife, rest_height }
    }

    /// Knife height and tilt at `time` seconds
    pub fn pose_at(&self, time: f32) -> (f32, f32) {
        let phase = time.rem_euclid(1.0);
        if phase < 0.5 {
            let swing = (time * TAU).sin();
            (self.rest_height + swing * KNIFE_LIFT, swing * KNIFE_TILT)
        } else {
            let chop = (phase - 0.5) * 2.0;
            if chop < CHOP_FALL_FRACTION {
                let remaining = 1.0 - chop / CHOP_FALL_FRACTION;
                (
                    self.rest_height + KNIFE_LIFT * remaining,
                    KNIFE_TILT * remaining,
                )
            } else {
                (self.rest_height, 0.0)
            }
        }
    }
}

impl Animatable for KnifeAnimator {
    fn update(&mut self, ctx: &mut AnimationContext<'_>, _delta_time: f32) {
        let (height, tilt) = self.pose_at(ctx.wall_seconds());
        if let Some(node) = ctx.scene.node_mut(self.knife) {
            node.transform.position.y = height;
            node.transform.rotation.z = tilt;
        }
    }

    fn deactivate(&mut self, scene: &mut Scene) {
        if let Some(node) = scene.node_mut(self.knife) {
            node.transform.position.y = self.rest_height;
            node.transform.rotation.z = 0.0;
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Vegetable {
    node: NodeId,
    original_height: f32,
    color: Color,
}

/// Vegetables that get shorter with each cut and drop offcuts
pub struct CuttingBoardAnimator {
    vegetables: Vec<Vegetable>,
}

impl CuttingBoardAnimator {
    /// Animate the given vegetable nodes, remembering their current height
    pub fn new(scene: &Scene, vegetables: &[NodeId]) -> Self {
        let vegetables = vegetables
            .iter()
            .filter_map(|&id| {
                scene.node(id).map(|node| Vegetable {
                    node: id,
                    original_height: node.transform.scale.y,
                    color: node.material.color,
                })
            })
            .collect();
        Self { vegetables }
    }

    fn in_impact_window(time: f32) -> bool {
        let phase = time.rem_euclid(1.0);
        phase > IMPACT_WINDOW.0 && phase < IMPACT_WINDOW.1
    }
}

impl Animatable for CuttingBoardAnimator {
    fn update(&mut self, ctx: &mut AnimationContext<'_>, _delta_time: f32) {
        if self.vegetables.is_empty() || !Self::in_impact_window(ctx.wall_seconds()) {
            return;
        }

        let vegetable = self.vegetables[ctx.rng.gen_range(0..self.vegetables.len())];
        let Some(node) = ctx.scene.node_mut(vegetable.node) else {
            return;
        };
        if node.transform.scale.y <= vegetable.original_height * MIN_HEIGHT_FRACTION {
            return;
        }
        node.transform.scale.y *= CUT_SHRINK;
        let origin = node.transform.position;

        let rng = &mut *ctx.rng;
        let position = origin
            + Vec3::new(
                rng.gen_range(-0.05..0.05),
                0.05,
                rng.gen_range(-0.05..0.05),
            );
        let velocity = Vec3::new(
            rng.gen_range(-1.5..1.5),
            rng.gen_range(1.2..4.2),
            rng.gen_range(-1.5..1.5),
        );
        let spawn = ParticleSpawn::new(ParticleKind::Debris, position, velocity, DEBRIS_LIFETIME_MS)
            .tinted(vegetable.color);
        ctx.spawn(spawn);
        log::trace!("Chop!");
    }
}
