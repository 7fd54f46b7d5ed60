//! The kitchen layout: collision boxes, station props and stations
//!
//! Purely declarative. Props that no animator touches are left to the
//! renderer's own scene description.

use std::f32::consts::FRAC_PI_4;

use crate::assets::ModelDescriptor;
use crate::foundation::math::{Color, Transform, Vec3};
use crate::physics::SpatialCollider;
use crate::scene::{Material, NodeId, Scene, SceneAttach, SceneNode, Shape};
use crate::stations::animators::{
    BreakfastAnimator, CuttingBoardAnimator, FridgeAnimator, KnifeAnimator, SinkAnimator,
    StoveAnimator, TapAnimator,
};
use crate::stations::animators::breakfast::BASE_YAW;
use crate::stations::registry::{StationError, StationRegistry};
use crate::stations::station::{Station, StationObject};

/// Trigger radius of the built-in stations
pub const STATION_RADIUS: f32 = 1.5;

/// Trigger radius of the fridge; its collision footprint keeps the player
/// at least 1.5 from the station centre
pub const FRIDGE_RADIUS: f32 = 2.0;

/// Trigger radius of the breakfast display
pub const BREAKFAST_RADIUS: f32 = 2.0;

/// Where the breakfast model sits on the counter
pub const BREAKFAST_BASE: Vec3 = Vec3::new(7.0, 1.05, -4.5);

/// Scale applied to the loaded breakfast model
const BREAKFAST_SCALE: f32 = 0.15;

/// Walls, counter run, fridge and breakfast corner
pub fn build_collision(collider: &mut SpatialCollider) {
    collider.add([-10.0, 0.0, -6.0], [10.0, 4.0, -5.9]); // back wall
    collider.add([-10.1, 0.0, -6.0], [-9.9, 4.0, 6.0]); // left wall
    collider.add([9.9, 0.0, -6.0], [10.1, 4.0, 6.0]); // right wall
    collider.add([-6.0, 0.0, -5.5], [8.0, 1.5, -3.5]); // counter
    collider.add([-9.5, 0.0, -5.7], [-7.5, 4.0, -4.0]); // fridge
    collider.add([6.0, 0.0, -5.5], [8.0, 1.5, -3.5]); // breakfast corner
}

/// Attach station props and register the four built-in stations
pub fn build_stations(scene: &mut Scene, registry: &mut StationRegistry) -> Result<(), StationError> {
    registry.register(cutting_board(scene))?;
    registry.register(stove(scene))?;
    registry.register(sink(scene))?;
    registry.register(fridge(scene))?;
    Ok(())
}

fn prop(scene: &mut Scene, name: &str, shape: Shape, position: Vec3, material: Material) -> NodeId {
    scene.attach(SceneNode::new(name, shape).at(position).with_material(material))
}

fn cutting_board(scene: &mut Scene) -> Station {
    prop(
        scene,
        "cutting board",
        Shape::Cuboid {
            size: Vec3::new(1.5, 0.1, 1.0),
        },
        Vec3::new(-5.0, 1.05, -4.5),
        Material::solid(0xFF_FF_FF),
    );

    let knife_height = 1.15;
    let knife = scene.attach(
        SceneNode::new("chef knife", Shape::Group).with_transform(
            Transform::from_position(Vec3::new(-5.2, knife_height, -4.5))
                .with_rotation(Vec3::new(0.0, FRAC_PI_4, 0.0)),
        ),
    );

    let vegetables = [
        ("tomato", Shape::Sphere { radius: 0.15 }, -4.7, -4.3, 0xE6_39_46),
        (
            "cucumber",
            Shape::Cylinder {
                radius_top: 0.05,
                radius_bottom: 0.05,
                height: 0.4,
            },
            -5.0,
            -4.7,
            0x2A_9D_8F,
        ),
        (
            "carrot",
            Shape::Cylinder {
                radius_top: 0.045,
                radius_bottom: 0.018,
                height: 0.36,
            },
            -5.3,
            -4.5,
            0xF7_7F_00,
        ),
        ("onion", Shape::Sphere { radius: 0.12 }, -4.8, -4.6, 0x9D_4E_DD),
    ]
    .map(|(name, shape, x, z, color)| {
        prop(scene, name, shape, Vec3::new(x, 1.15, z), Material::solid(color))
    });

    let chopper = CuttingBoardAnimator::new(scene, &vegetables);
    Station::new("Cutting Board", Vec3::new(-5.0, 0.0, -4.5), STATION_RADIUS)
        .with_object(
            StationObject::new("knife", KnifeAnimator::new(knife, knife_height)).with_node(scene, knife),
        )
        .with_object(StationObject::new("vegetables", chopper))
}

fn stove(scene: &mut Scene) -> Station {
    let burner = prop(
        scene,
        "burner",
        Shape::Cylinder {
            radius_top: 0.3,
            radius_bottom: 0.3,
            height: 0.02,
        },
        Vec3::new(-2.0, 1.51, -4.5),
        Material::solid(0x33_33_33),
    );
    let pan = prop(
        scene,
        "pan",
        Shape::Cylinder {
            radius_top: 0.4,
            radius_bottom: 0.35,
            height: 0.1,
        },
        Vec3::new(-2.0, 1.6, -4.5),
        Material::solid(0x22_22_22),
    );

    let animator = StoveAnimator::new(scene, burner, pan, Vec3::new(-2.0, 1.51, -4.5));
    Station::new("Stove", Vec3::new(-2.0, 0.0, -4.5), STATION_RADIUS)
        .with_object(StationObject::new("burner", animator).with_node(scene, burner))
}

fn sink(scene: &mut Scene) -> Station {
    let nozzle = prop(
        scene,
        "tap nozzle",
        Shape::Cylinder {
            radius_top: 0.03,
            radius_bottom: 0.03,
            height: 0.3,
        },
        Vec3::new(3.0, 1.7, -4.8),
        Material::solid(0xC0_C0_C0),
    );

    Station::new("Sink", Vec3::new(3.0, 0.0, -4.5), STATION_RADIUS)
        .with_object(StationObject::new(
            "water",
            SinkAnimator::new(Vec3::new(3.0, 1.7, -4.7), Vec3::new(3.0, 1.1, -4.5)),
        ))
        .with_object(StationObject::new("tap", TapAnimator::new(nozzle)).with_node(scene, nozzle))
}

fn fridge(scene: &mut Scene) -> Station {
    let door = prop(
        scene,
        "fridge",
        Shape::Cuboid {
            size: Vec3::new(2.0, 4.0, 1.5),
        },
        Vec3::new(-8.5, 2.0, -5.0),
        Material::solid(0xF5_F5_F5),
    );
    let handle = prop(
        scene,
        "fridge handle",
        Shape::Cuboid {
            size: Vec3::new(0.05, 0.8, 0.05),
        },
        Vec3::new(-7.5, 2.0, -4.2),
        Material::solid(0xC0_C0_C0),
    );

    let animator = FridgeAnimator::new(scene, door, handle, Vec3::new(-8.5, 2.0, -5.0));
    Station::new("Fridge", Vec3::new(-8.5, 0.0, -5.0), FRIDGE_RADIUS)
        .with_object(StationObject::new("door", animator).with_node(scene, door))
}

/// Attach a loaded breakfast model and build its station
pub fn breakfast_station(scene: &mut Scene, model: &ModelDescriptor) -> Station {
    let root = scene.attach(
        SceneNode::new(model.name.clone(), Shape::Model).with_transform(
            Transform::from_position(BREAKFAST_BASE)
                .with_rotation(Vec3::new(0.0, BASE_YAW, 0.0))
                .with_scale(Vec3::repeat(BREAKFAST_SCALE)),
        ),
    );
    for part in &model.parts {
        let mut material = Material::solid(part.color);
        if part.color == 0 {
            material.color = Color::WHITE;
        }
        scene.attach(
            SceneNode::new(part.name.clone(), Shape::Model)
                .at(Vec3::from(part.offset))
                .with_material(material)
                .with_parent(root),
        );
    }

    let animator = BreakfastAnimator::new(scene, root, BREAKFAST_BASE);
    Station::new(
        "Breakfast",
        Vec3::new(BREAKFAST_BASE.x, 0.0, BREAKFAST_BASE.z),
        BREAKFAST_RADIUS,
    )
    .with_object(StationObject::new("food", animator).with_node(scene, root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitchen_registers_four_stations() {
        let mut scene = Scene::new();
        let mut registry = StationRegistry::new();
        build_stations(&mut scene, &mut registry).unwrap();

        let names: Vec<&str> = registry.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Cutting Board", "Stove", "Sink", "Fridge"]);
        assert!(registry.get("Cutting Board").unwrap().object("knife").unwrap().rest_pose.is_some());
        assert!(build_stations(&mut scene, &mut registry).is_err());
    }

    #[test]
    fn test_every_station_reachable_from_open_floor() {
        let mut scene = Scene::new();
        let mut registry = StationRegistry::new();
        let mut collider = SpatialCollider::new();
        build_stations(&mut scene, &mut registry).unwrap();
        build_collision(&mut collider);

        for station in registry.iter() {
            let approach = if station.name == "Fridge" {
                Vec3::new(-7.2, 1.7, -4.2)
            } else {
                Vec3::new(station.position.x, 1.7, -3.2)
            };
            let standing = collider.resolve(approach, 0.5);
            assert!(standing != approach);
            assert!(station.is_within_reach(&standing), "{} out of reach", station.name);
        }
    }
}
