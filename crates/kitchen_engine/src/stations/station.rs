//! Station definitions

use crate::foundation::math::{planar_distance, Transform, Vec3};
use crate::scene::{NodeId, Scene, SceneAttach};
use crate::stations::animation::{Animatable, AnimationContext};

/// One animatable sub-part of a station
pub struct StationObject {
    /// Key within the station, e.g. `"knife"`
    pub key: String,
    /// Primary scene node, if the part has one
    pub node: Option<NodeId>,
    /// Transform the node had when the station was built
    pub rest_pose: Option<Transform>,
    animator: Box<dyn Animatable>,
}

impl StationObject {
    /// Sub-part without a primary node
    pub fn new(key: impl Into<String>, animator: impl Animatable + 'static) -> Self {
        Self {
            key: key.into(),
            node: None,
            rest_pose: None,
            animator: Box::new(animator),
        }
    }

    /// Builder-style primary node; its current transform becomes the rest pose
    pub fn with_node(mut self, scene: &Scene, node: NodeId) -> Self {
        self.node = Some(node);
        self.rest_pose = scene.node(node).map(|n| n.transform);
        self
    }
}

impl std::fmt::Debug for StationObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StationObject")
            .field("key", &self.key)
            .field("node", &self.node)
            .finish_non_exhaustive()
    }
}

/// A named interactive hotspot
#[derive(Debug)]
pub struct Station {
    /// Unique name
    pub name: String,
    /// Centre; Y is ignored for proximity
    pub position: Vec3,
    /// Trigger radius on the floor plane
    pub radius: f32,
    objects: Vec<StationObject>,
}

impl Station {
    /// Station with no sub-parts yet
    pub fn new(name: impl Into<String>, position: Vec3, radius: f32) -> Self {
        Self {
            name: name.into(),
            position,
            radius,
            objects: Vec::new(),
        }
    }

    /// Builder-style sub-part; the set is fixed once the station is registered
    pub fn with_object(mut self, object: StationObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Sub-parts in insertion order
    pub fn objects(&self) -> &[StationObject] {
        &self.objects
    }

    /// Sub-part by key
    pub fn object(&self, key: &str) -> Option<&StationObject> {
        self.objects.iter().find(|object| object.key == key)
    }

    /// Floor-plane distance to `point`
    pub fn planar_distance_to(&self, point: &Vec3) -> f32 {
        planar_distance(&self.position, point)
    }

    /// Whether `point` is strictly inside the trigger radius
    pub fn is_within_reach(&self, point: &Vec3) -> bool {
        self.planar_distance_to(point) < self.radius
    }

    /// Run every sub-part's animator for one frame
    pub fn animate(&mut self, ctx: &mut AnimationContext<'_>, delta_time: f32) {
        for object in &mut self.objects {
            object.animator.update(ctx, delta_time);
        }
    }

    /// Tell every sub-part the activation ended
    pub fn deactivate(&mut self, scene: &mut Scene) {
        for object in &mut self.objects {
            object.animator.deactivate(scene);
        }
    }
}
