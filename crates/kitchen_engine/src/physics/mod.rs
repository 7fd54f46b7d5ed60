//! Physics module: static AABB push-out and player kinematics

pub mod collider;
pub mod player;

pub use collider::{AxisAlignedBox, SpatialCollider};
pub use player::PlayerState;
