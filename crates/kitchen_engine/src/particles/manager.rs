//! Shared particle pool
//!
//! Stations only spawn. One sweep per frame, after station dispatch, moves,
//! fades and reaps every live particle regardless of who created it.

use crate::foundation::math::Vec3;
use crate::foundation::time::Millis;
use crate::particles::lifetime::Lifetime;
use crate::particles::particle::{Particle, ParticleKind, ParticleSpawn};
use crate::scene::SceneAttach;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a live particle
    pub struct ParticleId;
}

/// Downward acceleration on debris, units per second squared
pub const DEBRIS_GRAVITY: f32 = 3.6;

/// Debris tumble rate around X and Z, radians per second
pub const DEBRIS_SPIN: f32 = 3.0;

/// Height of the cutting board surface debris settles on
pub const DEBRIS_REST_Y: f32 = 1.1;

/// Horizontal velocity kept per frame by resting debris
pub const DEBRIS_REST_DAMPING: f32 = 0.9;

/// Water below this height has drained into the sink
pub const WATER_FLOOR_Y: f32 = 1.0;

/// Live pool of transient effects
#[derive(Debug)]
pub struct ParticleManager {
    particles: SlotMap<ParticleId, Particle>,
    water_ceiling: usize,
    next_sequence: u64,
}

impl ParticleManager {
    /// Create an empty pool with the given water ceiling
    pub fn new(water_ceiling: usize) -> Self {
        Self {
            particles: SlotMap::with_key(),
            water_ceiling,
            next_sequence: 0,
        }
    }

    /// Attach a particle to the scene and start tracking it
    pub fn spawn(
        &mut self,
        scene: &mut impl SceneAttach,
        spawn: ParticleSpawn,
        now: Millis,
    ) -> ParticleId {
        let node = scene.attach(spawn.scene_node());
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        log::trace!(
            "Spawned {} particle at ({:.2}, {:.2}, {:.2})",
            spawn.kind.label(),
            spawn.position.x,
            spawn.position.y,
            spawn.position.z
        );
        self.particles.insert(Particle {
            kind: spawn.kind,
            node,
            velocity: spawn.velocity,
            lifetime: Lifetime::new(now, spawn.lifetime_ms),
            initial_opacity: spawn.kind.initial_opacity(),
            sequence,
        })
    }

    /// Advance, fade and reap every live particle
    pub fn tick(&mut self, scene: &mut impl SceneAttach, delta_time: f32, now: Millis) {
        let mut reaped = Vec::new();

        for (id, particle) in &mut self.particles {
            if particle.lifetime.is_expired(now) {
                reaped.push(id);
                continue;
            }
            let Some(node) = scene.node_mut(particle.node) else {
                // Detached behind our back; forget it.
                reaped.push(id);
                continue;
            };

            match particle.kind {
                ParticleKind::Debris => {
                    particle.velocity.y -= DEBRIS_GRAVITY * delta_time;
                    node.transform.position += particle.velocity * delta_time;
                    node.transform.rotation.x += DEBRIS_SPIN * delta_time;
                    node.transform.rotation.z += DEBRIS_SPIN * delta_time;
                    if node.transform.position.y < DEBRIS_REST_Y {
                        node.transform.position.y = DEBRIS_REST_Y;
                        particle.velocity.y = 0.0;
                        particle.velocity.x *= DEBRIS_REST_DAMPING;
                        particle.velocity.z *= DEBRIS_REST_DAMPING;
                    }
                }
                ParticleKind::Water => {
                    node.transform.position += particle.velocity * delta_time;
                    if node.transform.position.y < WATER_FLOOR_Y {
                        reaped.push(id);
                        continue;
                    }
                }
                ParticleKind::Mist | ParticleKind::Flame | ParticleKind::Steam => {
                    node.transform.position += particle.velocity * delta_time;
                }
            }

            if particle.kind.fades() {
                node.material.opacity =
                    particle.initial_opacity * (1.0 - particle.lifetime.progress(now));
            }
        }

        for id in reaped {
            self.remove(scene, id);
        }

        self.enforce_water_ceiling(scene);
    }

    /// Evict the oldest water drops above the ceiling
    fn enforce_water_ceiling(&mut self, scene: &mut impl SceneAttach) {
        let mut water: Vec<(Millis, u64, ParticleId)> = self
            .particles
            .iter()
            .filter(|(_, particle)| particle.kind == ParticleKind::Water)
            .map(|(id, particle)| (particle.lifetime.created_at, particle.sequence, id))
            .collect();
        if water.len() <= self.water_ceiling {
            return;
        }

        water.sort_unstable();
        let excess = water.len() - self.water_ceiling;
        log::trace!("Evicting {excess} water particles over the ceiling");
        for (_, _, id) in water.into_iter().take(excess) {
            self.remove(scene, id);
        }
    }

    /// Stop tracking a particle and detach its node
    pub fn remove(&mut self, scene: &mut impl SceneAttach, id: ParticleId) -> bool {
        match self.particles.remove(id) {
            Some(particle) => {
                scene.detach(particle.node);
                true
            }
            None => false,
        }
    }

    /// Remove every particle
    pub fn clear(&mut self, scene: &mut impl SceneAttach) {
        for (_, particle) in self.particles.drain() {
            scene.detach(particle.node);
        }
    }

    /// Look up a live particle
    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id)
    }

    /// Whether `id` is still live
    pub fn contains(&self, id: ParticleId) -> bool {
        self.particles.contains_key(id)
    }

    /// Live particles of one kind
    pub fn count(&self, kind: ParticleKind) -> usize {
        self.iter_kind(kind).count()
    }

    /// Iterate live particles of one kind
    pub fn iter_kind(&self, kind: ParticleKind) -> impl Iterator<Item = (ParticleId, &Particle)> {
        self.particles
            .iter()
            .filter(move |(_, particle)| particle.kind == kind)
    }

    /// Iterate every live particle
    pub fn iter(&self) -> impl Iterator<Item = (ParticleId, &Particle)> {
        self.particles.iter()
    }

    /// Total live particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether nothing is live
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Configured water ceiling
    pub fn water_ceiling(&self) -> usize {
        self.water_ceiling
    }
}

impl Default for ParticleManager {
    fn default() -> Self {
        Self::new(20)
    }
}

/// Velocity pointing straight up
pub fn upward(speed: f32) -> Vec3 {
    Vec3::new(0.0, speed, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use approx::assert_relative_eq;

    fn float_spawn(kind: ParticleKind, lifetime_ms: Millis) -> ParticleSpawn {
        ParticleSpawn::new(kind, Vec3::new(0.0, 2.0, 0.0), Vec3::zeros(), lifetime_ms)
    }

    #[test]
    fn test_reap_after_lifetime() {
        let mut scene = Scene::new();
        let mut manager = ParticleManager::default();
        let id = manager.spawn(&mut scene, float_spawn(ParticleKind::Mist, 1_000), 0);

        manager.tick(&mut scene, 0.016, 999);
        assert!(manager.contains(id));

        manager.tick(&mut scene, 0.016, 1_001);
        assert!(!manager.contains(id));
        assert!(scene.is_empty());
    }

    #[test]
    fn test_fading_kinds_lose_opacity() {
        let mut scene = Scene::new();
        let mut manager = ParticleManager::default();
        let flame = manager.spawn(&mut scene, float_spawn(ParticleKind::Flame, 500), 0);
        let water = manager.spawn(&mut scene, float_spawn(ParticleKind::Water, 1_000), 0);

        manager.tick(&mut scene, 0.016, 250);

        let flame_node = manager.get(flame).unwrap().node;
        let water_node = manager.get(water).unwrap().node;
        assert_relative_eq!(scene.node(flame_node).unwrap().material.opacity, 0.25);
        assert_relative_eq!(scene.node(water_node).unwrap().material.opacity, 0.7);
    }

    #[test]
    fn test_constant_velocity_integration() {
        let mut scene = Scene::new();
        let mut manager = ParticleManager::default();
        let spawn = ParticleSpawn::new(
            ParticleKind::Steam,
            Vec3::new(0.0, 1.65, 0.0),
            upward(0.6),
            600,
        );
        let id = manager.spawn(&mut scene, spawn, 0);
        manager.tick(&mut scene, 0.5, 100);
        let node = manager.get(id).unwrap().node;
        assert_relative_eq!(scene.node(node).unwrap().transform.position.y, 1.95, epsilon = 1e-5);
    }

    #[test]
    fn test_debris_comes_to_rest() {
        let mut scene = Scene::new();
        let mut manager = ParticleManager::default();
        let spawn = ParticleSpawn::new(
            ParticleKind::Debris,
            Vec3::new(0.0, 1.2, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            2_000,
        );
        let id = manager.spawn(&mut scene, spawn, 0);
        for frame in 1..=60 {
            manager.tick(&mut scene, 1.0 / 60.0, frame * 16);
        }

        let particle = manager.get(id).unwrap();
        let node = scene.node(particle.node).unwrap();
        assert_relative_eq!(node.transform.position.y, DEBRIS_REST_Y);
        assert_eq!(particle.velocity.y, 0.0);
        assert!(particle.velocity.x < 1.0);
    }

    #[test]
    fn test_water_below_floor_is_removed() {
        let mut scene = Scene::new();
        let mut manager = ParticleManager::default();
        let spawn = ParticleSpawn::new(
            ParticleKind::Water,
            Vec3::new(0.0, 1.01, 0.0),
            Vec3::new(0.0, -1.2, 0.0),
            1_000,
        );
        let id = manager.spawn(&mut scene, spawn, 0);
        manager.tick(&mut scene, 0.1, 100);
        assert!(!manager.contains(id));
    }

    #[test]
    fn test_water_ceiling_evicts_oldest() {
        let mut scene = Scene::new();
        let mut manager = ParticleManager::new(20);
        let mut ids = Vec::new();
        for i in 0..30 {
            ids.push(manager.spawn(&mut scene, float_spawn(ParticleKind::Water, 1_000), i));
        }
        let mist = manager.spawn(&mut scene, float_spawn(ParticleKind::Mist, 1_000), 0);

        manager.tick(&mut scene, 0.0, 30);

        assert_eq!(manager.count(ParticleKind::Water), 20);
        assert!(ids[..10].iter().all(|id| !manager.contains(*id)));
        assert!(ids[10..].iter().all(|id| manager.contains(*id)));
        assert!(manager.contains(mist));
        assert_eq!(scene.len(), 21);
    }

    #[test]
    fn test_clear_detaches_everything() {
        let mut scene = Scene::new();
        let mut manager = ParticleManager::default();
        for kind in ParticleKind::ALL {
            manager.spawn(&mut scene, float_spawn(kind, 1_000), 0);
        }
        assert_eq!(manager.len(), 5);
        manager.clear(&mut scene);
        assert!(manager.is_empty());
        assert!(scene.is_empty());
    }
}
