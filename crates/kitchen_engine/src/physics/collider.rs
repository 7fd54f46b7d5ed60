//! Static world collision
//!
//! The player is treated as a sphere and pushed out of axis-aligned boxes.
//! There is no broad phase; the kitchen has a handful of boxes.

use crate::foundation::math::Vec3;

/// Axis-aligned bounding box of static world geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAlignedBox {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl AxisAlignedBox {
    /// Create a new box from min and max corners
    ///
    /// `min` must not exceed `max` on any axis.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y && min.z <= max.z,
            "degenerate box: min {min:?} max {max:?}"
        );
        Self { min, max }
    }

    /// Closest point inside the box to `point` (per-axis clamp)
    pub fn closest_point(&self, point: &Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
            point.z.clamp(self.min.z, self.max.z),
        )
    }

    /// Check if this box contains a point
    pub fn contains_point(&self, point: &Vec3) -> bool {
        *point == self.closest_point(point)
    }

    /// Distance from `point` to the box surface, zero inside
    pub fn distance_to(&self, point: &Vec3) -> f32 {
        (point - self.closest_point(point)).norm()
    }
}

/// Registry of static boxes the player collides with
#[derive(Debug, Default)]
pub struct SpatialCollider {
    boxes: Vec<AxisAlignedBox>,
}

impl SpatialCollider {
    /// Create an empty collider
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a box; boxes are resolved in registration order
    pub fn add_box(&mut self, aabb: AxisAlignedBox) {
        self.boxes.push(aabb);
    }

    /// Register a box from raw corner coordinates
    pub fn add(&mut self, min: [f32; 3], max: [f32; 3]) {
        self.add_box(AxisAlignedBox::new(Vec3::from(min), Vec3::from(max)));
    }

    /// Registered boxes
    pub fn boxes(&self) -> &[AxisAlignedBox] {
        &self.boxes
    }

    /// Push a sphere at `position` out of every box it penetrates
    ///
    /// Each box sees the position already corrected by the boxes before it.
    /// A centre inside a box has no separation vector; it leaves through the
    /// nearest face instead.
    pub fn resolve(&self, position: Vec3, radius: f32) -> Vec3 {
        let mut resolved = position;
        for aabb in &self.boxes {
            let closest = aabb.closest_point(&resolved);
            let separation = resolved - closest;
            let distance = separation.norm();
            if distance >= radius {
                continue;
            }
            if distance > f32::EPSILON {
                resolved += separation / distance * (radius - distance);
            } else {
                resolved = exit_nearest_face(aabb, resolved, radius);
            }
        }
        resolved
    }
}

fn exit_nearest_face(aabb: &AxisAlignedBox, position: Vec3, radius: f32) -> Vec3 {
    let mut best_axis = 0;
    let mut best_depth = f32::INFINITY;
    let mut best_target = 0.0;
    for axis in 0..3 {
        let to_min = position[axis] - aabb.min[axis];
        let to_max = aabb.max[axis] - position[axis];
        if to_min < best_depth {
            best_axis = axis;
            best_depth = to_min;
            best_target = aabb.min[axis] - radius;
        }
        if to_max < best_depth {
            best_axis = axis;
            best_depth = to_max;
            best_target = aabb.max[axis] + radius;
        }
    }
    let mut exited = position;
    exited[best_axis] = best_target;
    exited
}
