//! Animatable capability shared by every station sub-part

use crate::foundation::time::Millis;
use crate::particles::{ParticleId, ParticleManager, ParticleSpawn};
use crate::scene::Scene;
use rand::rngs::StdRng;

/// What an animator may touch during one dispatch
pub struct AnimationContext<'a> {
    /// Scene nodes, including the ones the animator owns
    pub scene: &'a mut Scene,
    /// Shared particle pool; animators spawn but never sweep
    pub particles: &'a mut ParticleManager,
    /// Effect randomness
    pub rng: &'a mut StdRng,
    /// Clock time sampled for this tick
    pub now: Millis,
}

impl AnimationContext<'_> {
    /// Clock time in seconds; periodic motion is a function of this
    pub fn wall_seconds(&self) -> f32 {
        // Phase only needs to be continuous, not precise over days.
        (self.now as f64 / 1000.0) as f32
    }

    /// Spawn into the shared pool at the current time
    pub fn spawn(&mut self, spawn: ParticleSpawn) -> ParticleId {
        self.particles.spawn(&mut *self.scene, spawn, self.now)
    }
}

/// A station sub-part that animates while its station is active
pub trait Animatable {
    /// Called every frame while the owning station is active
    fn update(&mut self, ctx: &mut AnimationContext<'_>, delta_time: f32);

    /// Called once when the owning station's activation expires
    fn deactivate(&mut self, _scene: &mut Scene) {}
}
