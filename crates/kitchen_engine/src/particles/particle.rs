//! Particle kinds and per-particle state

use crate::foundation::math::{Color, Vec3};
use crate::foundation::time::Millis;
use crate::particles::lifetime::Lifetime;
use crate::scene::{Material, NodeId, SceneNode, Shape};

/// Visual role of a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    /// Vegetable offcuts from the cutting board
    Debris,
    /// Drops from the sink tap
    Water,
    /// Cold air from the open fridge
    Mist,
    /// Burner flames under the pan
    Flame,
    /// Sizzle vapour from the pan
    Steam,
}

impl ParticleKind {
    /// Every kind, in a fixed order
    pub const ALL: [Self; 5] = [
        Self::Debris,
        Self::Water,
        Self::Mist,
        Self::Flame,
        Self::Steam,
    ];

    /// Radius of the sphere drawn for this kind
    pub fn radius(self) -> f32 {
        match self {
            Self::Debris | Self::Water => 0.03,
            Self::Mist => 0.1,
            Self::Flame => 0.05,
            Self::Steam => 0.02,
        }
    }

    /// Default colour
    pub fn color_hex(self) -> u32 {
        match self {
            Self::Debris => 0xE6_39_46,
            Self::Water => 0x66_CC_FF,
            Self::Mist => 0xCC_CC_FF,
            Self::Flame => 0xFF_66_00,
            Self::Steam => 0xCC_CC_CC,
        }
    }

    /// Opacity at spawn
    pub fn initial_opacity(self) -> f32 {
        match self {
            Self::Debris => 1.0,
            Self::Water => 0.7,
            Self::Mist | Self::Steam => 0.2,
            Self::Flame => 0.5,
        }
    }

    /// Whether opacity ramps to zero over the lifetime
    pub fn fades(self) -> bool {
        matches!(self, Self::Mist | Self::Flame | Self::Steam)
    }

    /// Short lowercase label
    pub fn label(self) -> &'static str {
        match self {
            Self::Debris => "debris",
            Self::Water => "water",
            Self::Mist => "mist",
            Self::Flame => "flame",
            Self::Steam => "steam",
        }
    }
}

/// Request to create a particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpawn {
    /// Visual role
    pub kind: ParticleKind,
    /// World position
    pub position: Vec3,
    /// Units per second
    pub velocity: Vec3,
    /// How long it lives
    pub lifetime_ms: Millis,
    /// Colour override; the kind's colour otherwise
    pub tint: Option<Color>,
}

impl ParticleSpawn {
    /// Spawn request with the kind's default colour
    pub fn new(kind: ParticleKind, position: Vec3, velocity: Vec3, lifetime_ms: Millis) -> Self {
        Self {
            kind,
            position,
            velocity,
            lifetime_ms,
            tint: None,
        }
    }

    /// Builder-style colour override
    pub fn tinted(mut self, color: Color) -> Self {
        self.tint = Some(color);
        self
    }

    pub(crate) fn scene_node(&self) -> SceneNode {
        let mut material = Material::translucent(self.kind.color_hex(), self.kind.initial_opacity());
        if let Some(tint) = self.tint {
            material.color = tint;
        }
        SceneNode::new(
            format!("particle:{}", self.kind.label()),
            Shape::Sphere {
                radius: self.kind.radius(),
            },
        )
        .at(self.position)
        .with_material(material)
    }
}

/// A live particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Visual role
    pub kind: ParticleKind,
    /// Scene node drawn for it
    pub node: NodeId,
    /// Units per second
    pub velocity: Vec3,
    /// Creation time and lifespan
    pub lifetime: Lifetime,
    /// Opacity at spawn, the start of the fade
    pub initial_opacity: f32,
    /// Spawn order, breaks ties between equal creation times
    pub(crate) sequence: u64,
}
