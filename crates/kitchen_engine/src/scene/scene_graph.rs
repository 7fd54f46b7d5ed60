//! Scene node store
//!
//! The renderer owns real geometry; the engine only needs named nodes with a
//! transform, a simple material and visibility. Nodes live in a slotmap so a
//! detached node's id never aliases a later one.

use crate::foundation::math::{Color, Mat4, Transform, Vec3};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a node attached to a [`Scene`]
    pub struct NodeId;
}

/// Geometry hint passed through to the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Transform-only grouping node
    Group,
    /// Sphere of the given radius
    Sphere {
        /// Radius
        radius: f32,
    },
    /// Box with full edge lengths
    Cuboid {
        /// Edge lengths
        size: Vec3,
    },
    /// Cylinder or cone frustum
    Cylinder {
        /// Top radius
        radius_top: f32,
        /// Bottom radius
        radius_bottom: f32,
        /// Height
        height: f32,
    },
    /// Flat disc facing +Y once rotated
    Disc {
        /// Radius
        radius: f32,
    },
    /// Point light source
    PointLight {
        /// Light intensity
        intensity: f32,
        /// Falloff distance
        range: f32,
    },
    /// Loaded model part, drawn by whatever the asset resolved to
    Model,
}

/// Minimal surface description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base colour
    pub color: Color,
    /// Emitted colour
    pub emissive: Color,
    /// Multiplier on `emissive`
    pub emissive_intensity: f32,
    /// 1.0 is opaque
    pub opacity: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            emissive: Color::BLACK,
            emissive_intensity: 1.0,
            opacity: 1.0,
        }
    }
}

impl Material {
    /// Opaque material of a single colour
    pub fn solid(hex: u32) -> Self {
        Self {
            color: Color::from_hex(hex),
            ..Default::default()
        }
    }

    /// Translucent material of a single colour
    pub fn translucent(hex: u32, opacity: f32) -> Self {
        Self {
            color: Color::from_hex(hex),
            opacity,
            ..Default::default()
        }
    }

    /// Builder-style emission
    pub fn with_emissive(mut self, hex: u32, intensity: f32) -> Self {
        self.emissive = Color::from_hex(hex);
        self.emissive_intensity = intensity;
        self
    }
}

/// One entity in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Name for lookups and debugging
    pub name: String,
    /// Geometry hint
    pub shape: Shape,
    /// Transform relative to `parent`, or world space without one
    pub transform: Transform,
    /// Surface
    pub material: Material,
    /// Hidden nodes and their children are not drawn
    pub visible: bool,
    /// Parent node
    pub parent: Option<NodeId>,
}

impl SceneNode {
    /// Visible node at the origin
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
            transform: Transform::default(),
            material: Material::default(),
            visible: true,
            parent: None,
        }
    }

    /// Builder-style position
    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    /// Builder-style transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Builder-style material
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Builder-style parent
    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Builder-style visibility
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Attach/detach port used by particles and station setup
pub trait SceneAttach {
    /// Add a node and return its handle
    fn attach(&mut self, node: SceneNode) -> NodeId;

    /// Remove a node (and its children); `None` if already gone
    fn detach(&mut self, id: NodeId) -> Option<SceneNode>;

    /// Look up a node
    fn node(&self, id: NodeId) -> Option<&SceneNode>;

    /// Look up a node mutably
    fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode>;
}

/// Slotmap-backed scene
#[derive(Debug, Default)]
pub struct Scene {
    nodes: SlotMap<NodeId, SceneNode>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attached nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` is still attached
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// All nodes
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter()
    }

    /// Direct children of `parent`
    pub fn children(&self, parent: NodeId) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.parent == Some(parent))
            .map(|(id, _)| id)
            .collect()
    }

    /// First node with the given name
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.name == name)
            .map(|(id, _)| id)
    }

    /// Visible unless it or an ancestor is hidden
    pub fn is_effectively_visible(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current.and_then(|id| self.nodes.get(id)) {
            if !node.visible {
                return false;
            }
            current = node.parent;
        }
        current.is_none()
    }

    /// Node-to-world matrix, composed through every ancestor
    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        let mut node = self.nodes.get(id)?;
        let mut matrix = node.transform.to_matrix();
        while let Some(parent) = node.parent.and_then(|p| self.nodes.get(p)) {
            matrix = parent.transform.to_matrix() * matrix;
            node = parent;
        }
        Some(matrix)
    }
}

impl SceneAttach for Scene {
    fn attach(&mut self, node: SceneNode) -> NodeId {
        self.nodes.insert(node)
    }

    fn detach(&mut self, id: NodeId) -> Option<SceneNode> {
        for child in self.children(id) {
            self.detach(child);
        }
        self.nodes.remove(id)
    }

    fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detach_removes_children() {
        let mut scene = Scene::new();
        let group = scene.attach(SceneNode::new("group", Shape::Group));
        let child = scene.attach(SceneNode::new("child", Shape::Sphere { radius: 0.1 }).with_parent(group));
        let other = scene.attach(SceneNode::new("other", Shape::Group));

        assert_eq!(scene.children(group), vec![child]);
        assert!(scene.detach(group).is_some());
        assert!(!scene.contains(child));
        assert!(scene.contains(other));
        assert!(scene.detach(group).is_none());
    }

    #[test]
    fn test_visibility_inherits_from_parent() {
        let mut scene = Scene::new();
        let group = scene.attach(SceneNode::new("group", Shape::Group).hidden());
        let child = scene.attach(SceneNode::new("child", Shape::Group).with_parent(group));
        assert!(!scene.is_effectively_visible(child));

        scene.node_mut(group).unwrap().visible = true;
        assert!(scene.is_effectively_visible(child));
        assert_eq!(scene.find_by_name("child"), Some(child));
    }

    #[test]
    fn test_world_matrix_composes_parents() {
        let mut scene = Scene::new();
        let group = scene.attach(
            SceneNode::new("group", Shape::Group)
                .with_transform(Transform::from_position(Vec3::new(1.0, 0.0, 0.0)).with_scale(Vec3::new(2.0, 2.0, 2.0))),
        );
        let child = scene.attach(SceneNode::new("child", Shape::Group).at(Vec3::new(0.0, 1.0, 0.0)).with_parent(group));

        let origin = scene
            .world_matrix(child)
            .unwrap()
            .transform_point(&nalgebra::Point3::origin());
        assert_eq!(origin, nalgebra::Point3::new(1.0, 2.0, 0.0));

        scene.detach(child);
        assert!(scene.world_matrix(child).is_none());
    }
}
