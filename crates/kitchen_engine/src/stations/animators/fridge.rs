//! Fridge: door snaps open while active, revealing lazily built contents

use std::f32::consts::PI;

use crate::foundation::math::{Color, Transform, Vec3};
use crate::particles::{ParticleKind, ParticleSpawn};
use crate::scene::{Material, NodeId, Scene, SceneAttach, SceneNode, Shape};
use crate::stations::animation::{Animatable, AnimationContext};
use rand::rngs::StdRng;
use rand::Rng;

/// Door angle while open, radians
pub const DOOR_OPEN_ANGLE: f32 = PI * 0.4;

/// Distance from the hinge to the handle
const HANDLE_ARM: f32 = 1.0;

/// Per-frame chance of cold mist while open
pub const MIST_CHANCE: f64 = 0.05;

/// Mist lifetime
pub const MIST_LIFETIME_MS: u64 = 1_000;

/// Door, handle and interior of the fridge
pub struct FridgeAnimator {
    door: NodeId,
    handle: NodeId,
    handle_rest: Vec3,
    interior_anchor: Vec3,
    contents: Option<NodeId>,
}

impl FridgeAnimator {
    /// Animate `door` and `handle`; contents are placed at `interior_anchor`
    pub fn new(scene: &Scene, door: NodeId, handle: NodeId, interior_anchor: Vec3) -> Self {
        Self {
            door,
            handle,
            handle_rest: scene
                .node(handle)
                .map_or(interior_anchor, |node| node.transform.position),
            interior_anchor,
            contents: None,
        }
    }

    /// Interior group, once the fridge has been opened
    pub fn contents(&self) -> Option<NodeId> {
        self.contents
    }

    fn set_door_angle(&self, scene: &mut Scene, angle: f32) {
        if let Some(door) = scene.node_mut(self.door) {
            door.transform.rotation.y = angle;
        }
        if let Some(handle) = scene.node_mut(self.handle) {
            handle.transform.position.x = self.handle_rest.x + angle.sin() * HANDLE_ARM;
            handle.transform.position.z = self.handle_rest.z + (1.0 - angle.cos()) * HANDLE_ARM;
            handle.transform.rotation.y = angle;
        }
    }

    fn set_contents_visible(&self, scene: &mut Scene, visible: bool) {
        if let Some(node) = self.contents.and_then(|id| scene.node_mut(id)) {
            node.visible = visible;
        }
    }
}

impl Animatable for FridgeAnimator {
    fn update(&mut self, ctx: &mut AnimationContext<'_>, _delta_time: f32) {
        self.set_door_angle(ctx.scene, DOOR_OPEN_ANGLE);

        if self.contents.is_none() {
            self.contents = Some(build_contents(ctx.scene, ctx.rng, self.interior_anchor));
            log::debug!("Stocked the fridge");
        }
        self.set_contents_visible(ctx.scene, true);

        if ctx.rng.gen_bool(MIST_CHANCE) {
            let position = Vec3::new(
                self.interior_anchor.x + 1.2,
                1.0 + ctx.rng.gen::<f32>(),
                self.interior_anchor.z + 1.2,
            );
            ctx.spawn(ParticleSpawn::new(
                ParticleKind::Mist,
                position,
                Vec3::new(0.3, 0.6, 0.3),
                MIST_LIFETIME_MS,
            ));
        }
    }

    fn deactivate(&mut self, scene: &mut Scene) {
        self.set_door_angle(scene, 0.0);
        self.set_contents_visible(scene, false);
    }
}

/// Shelves of random groceries, door shelves with condiments and a light
fn build_contents(scene: &mut Scene, rng: &mut StdRng, anchor: Vec3) -> NodeId {
    let group = scene.attach(SceneNode::new("fridge contents", Shape::Group).at(anchor));
    let shelf_material = Material::solid(0xEE_EE_EE);

    for shelf_index in 0..3 {
        let shelf_y = -0.5 + shelf_index as f32 * 1.2;
        scene.attach(
            SceneNode::new(
                "fridge shelf",
                Shape::Cuboid {
                    size: Vec3::new(1.8, 0.05, 1.3),
                },
            )
            .at(Vec3::new(0.0, shelf_y, 0.0))
            .with_material(shelf_material)
            .with_parent(group),
        );

        for _ in 0..rng.gen_range(3..6) {
            let (name, shape, material, lift) = grocery(rng.gen_range(0..4));
            let position = Vec3::new(
                rng.gen_range(-0.7..0.7),
                shelf_y + 0.2 + lift,
                rng.gen_range(-0.45..0.45),
            );
            let transform = Transform::from_position(position)
                .with_rotation(Vec3::new(0.0, rng.gen_range(0.0..PI), 0.0));
            scene.attach(
                SceneNode::new(name, shape)
                    .with_transform(transform)
                    .with_material(material)
                    .with_parent(group),
            );
        }
    }

    for door_shelf in 0..2 {
        let shelf_y = door_shelf as f32 * 1.2;
        scene.attach(
            SceneNode::new(
                "fridge door shelf",
                Shape::Cuboid {
                    size: Vec3::new(0.3, 0.05, 1.2),
                },
            )
            .at(Vec3::new(0.7, shelf_y, 0.0))
            .with_material(shelf_material)
            .with_parent(group),
        );
        for _ in 0..rng.gen_range(2..4) {
            let mut material = Material::translucent(0xFF_FF_FF, 0.9);
            material.color = Color::from_hsl(rng.gen(), 0.8, 0.6);
            scene.attach(
                SceneNode::new(
                    "condiment",
                    Shape::Cylinder {
                        radius_top: 0.05,
                        radius_bottom: 0.05,
                        height: 0.3,
                    },
                )
                .at(Vec3::new(0.7, shelf_y + 0.2, rng.gen_range(-0.4..0.4)))
                .with_material(material)
                .with_parent(group),
            );
        }
    }

    scene.attach(
        SceneNode::new(
            "fridge bulb",
            Shape::Cuboid {
                size: Vec3::new(0.1, 0.1, 0.1),
            },
        )
        .at(Vec3::new(-0.8, 1.5, 0.0))
        .with_material(Material::solid(0xFF_FF_FF).with_emissive(0xFF_FF_FF, 1.0))
        .with_parent(group),
    );
    scene.attach(
        SceneNode::new(
            "fridge light",
            Shape::PointLight {
                intensity: 0.8,
                range: 2.0,
            },
        )
        .at(Vec3::new(-0.5, 1.5, 0.0))
        .with_parent(group),
    );

    group
}

fn grocery(kind: u32) -> (&'static str, Shape, Material, f32) {
    match kind {
        0 => (
            "milk carton",
            Shape::Cuboid {
                size: Vec3::new(0.3, 0.5, 0.3),
            },
            Material::solid(0xFF_FF_FF),
            0.1,
        ),
        1 => (
            "juice bottle",
            Shape::Cylinder {
                radius_top: 0.1,
                radius_bottom: 0.1,
                height: 0.4,
            },
            Material::translucent(0xFF_A5_00, 0.8),
            0.0,
        ),
        2 => (
            "round container",
            Shape::Cylinder {
                radius_top: 0.15,
                radius_bottom: 0.15,
                height: 0.2,
            },
            Material::solid(0x66_CC_FF),
            0.0,
        ),
        _ => (
            "small box",
            Shape::Cuboid {
                size: Vec3::new(0.2, 0.15, 0.2),
            },
            Material::solid(0xCC_FF_66),
            0.0,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::ParticleManager;
    use rand::SeedableRng;

    #[test]
    fn test_door_snaps_and_contents_toggle() {
        let mut scene = Scene::new();
        let door = scene.attach(SceneNode::new("fridge", Shape::Group));
        let handle = scene.attach(SceneNode::new("handle", Shape::Group).at(Vec3::new(-7.5, 2.0, -4.2)));
        let mut fridge = FridgeAnimator::new(&scene, door, handle, Vec3::new(-8.5, 2.0, -5.0));
        let mut particles = ParticleManager::default();
        let mut rng = StdRng::seed_from_u64(5);

        let mut ctx = AnimationContext {
            scene: &mut scene,
            particles: &mut particles,
            rng: &mut rng,
            now: 0,
        };
        fridge.update(&mut ctx, 0.016);

        let contents = fridge.contents().unwrap();
        assert_eq!(scene.node(door).unwrap().transform.rotation.y, DOOR_OPEN_ANGLE);
        assert!(scene.node(contents).unwrap().visible);
        assert!(scene.children(contents).len() >= 3 + 9 + 2 + 4 + 2);
        let handle_x = scene.node(handle).unwrap().transform.position.x;
        assert!((handle_x - (-7.5 + DOOR_OPEN_ANGLE.sin())).abs() < 1e-5);

        fridge.deactivate(&mut scene);
        assert_eq!(scene.node(door).unwrap().transform.rotation.y, 0.0);
        assert_eq!(scene.node(handle).unwrap().transform.position, Vec3::new(-7.5, 2.0, -4.2));
        assert!(!scene.node(contents).unwrap().visible);
    }
}
