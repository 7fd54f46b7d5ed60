//! Stations: interactive hotspots, their activation state and animators

pub mod activation;
pub mod animation;
pub mod animators;
pub mod kitchen;
pub mod registry;
pub mod station;

pub use activation::{ActivationTable, ActiveAnimation};
pub use animation::{Animatable, AnimationContext};
pub use registry::{activation_message, prompt_for, StationError, StationRegistry};
pub use station::{Station, StationObject};
