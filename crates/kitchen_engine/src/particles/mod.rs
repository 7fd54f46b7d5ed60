//! Particle lifecycle: spawn, integrate, fade, reap

pub mod lifetime;
pub mod manager;
pub mod particle;

pub use lifetime::Lifetime;
pub use manager::{ParticleId, ParticleManager};
pub use particle::{Particle, ParticleKind, ParticleSpawn};
