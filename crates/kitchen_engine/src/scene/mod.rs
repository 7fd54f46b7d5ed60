//! Scene module: node store, camera and the render port

pub mod camera;
pub mod renderer;
pub mod scene_graph;

pub use camera::Camera;
pub use renderer::{NullRenderer, RenderError, Renderer};
pub use scene_graph::{Material, NodeId, Scene, SceneAttach, SceneNode, Shape};
