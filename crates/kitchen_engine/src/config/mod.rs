//! Configuration system
//!
//! All tunables default to the values the kitchen scene was authored with.
//! A config file only needs the fields it overrides.

use crate::foundation::math::Vec3;
use crate::foundation::time::Millis;
pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_str_with_format(&contents, path)
    }

    /// Parse configuration text, picking the format from `path`'s extension
    fn from_str_with_format(contents: &str, path: &str) -> Result<Self, ConfigError> {
        if path.ends_with(".toml") {
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Top-level configuration for the kitchen scene
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenConfig {
    /// Fixed seed for the effect RNG; entropy-seeded when absent
    pub rng_seed: Option<u64>,

    /// First-person movement
    pub player: PlayerConfig,

    /// Station activation
    pub interaction: InteractionConfig,

    /// Particle pool limits
    pub particles: ParticleConfig,

    /// Light animation
    pub lighting: LightingConfig,

    /// On-screen messages
    pub ui: UiConfig,

    /// Late-bound assets
    pub assets: AssetConfig,
}

impl Config for KitchenConfig {}

/// Player movement settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Eye height above the floor
    pub height: f32,
    /// Spawn position
    pub spawn: Vec3,
    /// Walking speed in units per second
    pub speed: f32,
    /// Speed multiplier while sprinting
    pub sprint_multiplier: f32,
    /// Downward acceleration
    pub gravity: f32,
    /// Initial upward velocity of a jump
    pub jump_velocity: f32,
    /// Head bob phase speed
    pub head_bob_frequency: f32,
    /// Head bob amplitude
    pub head_bob_height: f32,
    /// Radius used against collision boxes
    pub collision_radius: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            height: 1.7,
            spawn: Vec3::new(0.0, 1.7, 5.0),
            speed: 5.0,
            sprint_multiplier: 1.5,
            gravity: 9.8,
            jump_velocity: 5.0,
            head_bob_frequency: 10.0,
            head_bob_height: 0.05,
            collision_radius: 0.5,
        }
    }
}

/// Station activation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// How long a station stays active
    pub activation_ms: Millis,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            activation_ms: 5_000,
        }
    }
}

/// Particle pool settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Live water drops allowed after a sweep
    pub water_ceiling: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self { water_ceiling: 20 }
    }
}

/// Light animation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Whether lamps pulse and swing at startup
    pub animation_enabled: bool,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            animation_enabled: true,
        }
    }
}

/// On-screen message settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Total lifetime of a toast
    pub toast_duration_ms: Millis,
    /// Fade in/out time of a toast
    pub toast_fade_ms: Millis,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 5_000,
            toast_fade_ms: 500,
        }
    }
}

/// Late-bound asset settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Model descriptor for the breakfast display
    pub breakfast_model: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            breakfast_model: "assets/models/cute_breakfast.ron".to_string(),
        }
    }
}
