//! # Kitchen Engine
//!
//! Runtime coordination for a first-person kitchen scene: the player walks
//! up to stations and triggers short animated vignettes.
//!
//! ## Features
//!
//! - **Proximity interaction**: per-frame scan for the station in reach
//! - **Timed activations**: one vignette per station, self-expiring
//! - **Particle lifecycle**: debris, water, mist, flame and steam in one pool
//! - **AABB collision**: push-out against static kitchen geometry
//! - **Late-bound assets**: the breakfast display joins once its model loads
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kitchen_engine::prelude::*;
//!
//! fn main() -> Result<(), EngineError> {
//!     let mut engine = KitchenEngine::new(KitchenConfig::default(), Box::new(MonotonicClock::new()))?;
//!     let mut loader = RonModelLoader::new();
//!     let mut renderer = NullRenderer::new();
//!     engine.begin_asset_load(&mut loader);
//!
//!     loop {
//!         let input = InputFrame::captured(InputIntents::MOVE_FORWARD);
//!         engine.step(&input, &mut renderer, &mut loader)?;
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod foundation;
pub mod config;
pub mod input;
pub mod physics;
pub mod scene;
pub mod particles;
pub mod stations;
pub mod lighting;
pub mod ui;
pub mod assets;

mod engine;

#[cfg(test)]
mod tests;

pub use engine::{EngineError, FrameReport, KitchenEngine};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, AssetEvent, AssetLoader, ModelDescriptor, RonModelLoader},
        config::{Config, KitchenConfig},
        foundation::{
            math::{Color, Transform, Vec3},
            time::{Clock, ManualClock, Millis, MonotonicClock},
        },
        input::{InputFrame, InputIntents, InputSource},
        particles::{ParticleKind, ParticleManager},
        scene::{Camera, NullRenderer, RenderError, Renderer, Scene},
        stations::{Station, StationRegistry},
        EngineError, FrameReport, KitchenEngine,
    };
}
