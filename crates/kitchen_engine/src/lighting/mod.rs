//! Kitchen lighting rig
//!
//! Ambient and directional lights are global; the three pendant lamps hang
//! from the ceiling as scene nodes. While animation is enabled the
//! directional hue drifts, two pendants pulse and all three sway.

use crate::foundation::math::{Color, Vec3};
use crate::scene::{Material, NodeId, Scene, SceneAttach, SceneNode, Shape};

/// Light types held outside the scene graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightType {
    /// Uniform fill light
    Ambient,
    /// Directional light (like sunlight)
    Directional,
}

/// Global light source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Light type
    pub light_type: LightType,
    /// Light color
    pub color: Color,
    /// Light intensity
    pub intensity: f32,
}

/// Intensity over time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pulse {
    /// Constant value
    Steady(f32),
    /// `base + amplitude * sin(frequency * t)`
    Sine {
        /// Resting value
        base: f32,
        /// Peak deviation
        amplitude: f32,
        /// Angular frequency in rad/s
        frequency: f32,
    },
}

impl Pulse {
    /// Value at `time` seconds
    pub fn value_at(&self, time: f32) -> f32 {
        match *self {
            Self::Steady(value) => value,
            Self::Sine {
                base,
                amplitude,
                frequency,
            } => base + amplitude * (frequency * time).sin(),
        }
    }
}

/// Pendulum sway about the lamp's hanging point, around Z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swing {
    /// Peak angle in radians
    pub amplitude: f32,
    /// Angular frequency in rad/s
    pub frequency: f32,
    /// Phase offset in radians
    pub phase: f32,
}

impl Swing {
    /// Rotation about Z at `time` seconds
    pub fn angle_at(&self, time: f32) -> f32 {
        self.amplitude * (self.frequency * time + self.phase).sin()
    }
}

/// A ceiling pendant: cord group, bulb and point light
#[derive(Debug, Clone)]
pub struct PendantLamp {
    /// Display name
    pub name: String,
    /// Swinging group the bulb and light hang from
    pub mount: NodeId,
    /// Point light node
    pub light: NodeId,
    /// Emissive bulb node
    pub bulb: NodeId,
    light_pulse: Pulse,
    bulb_pulse: Pulse,
    swing: Swing,
}

impl PendantLamp {
    fn hang(
        scene: &mut Scene,
        name: &str,
        x: f32,
        z: f32,
        hex: u32,
        (light_pulse, bulb_pulse): (Pulse, Pulse),
        swing: Swing,
    ) -> Self {
        let mount = scene.attach(
            SceneNode::new(format!("{name} pendant"), Shape::Group)
                .at(Vec3::new(x, CEILING_HEIGHT, z)),
        );
        let drop = Vec3::new(0.0, -CORD_LENGTH, 0.0);
        let bulb = scene.attach(
            SceneNode::new(format!("{name} bulb"), Shape::Sphere { radius: 0.1 })
                .at(drop)
                .with_material(Material::solid(hex).with_emissive(hex, bulb_pulse.value_at(0.0)))
                .with_parent(mount),
        );
        let light = scene.attach(
            SceneNode::new(
                format!("{name} light"),
                Shape::PointLight {
                    intensity: light_pulse.value_at(0.0),
                    range: 8.0,
                },
            )
            .at(drop)
            .with_material(Material::solid(hex))
            .with_parent(mount),
        );
        Self {
            name: name.to_string(),
            mount,
            light,
            bulb,
            light_pulse,
            bulb_pulse,
            swing,
        }
    }

    /// Current point light intensity
    pub fn intensity(&self, scene: &Scene) -> f32 {
        match scene.node(self.light).map(|node| &node.shape) {
            Some(Shape::PointLight { intensity, .. }) => *intensity,
            _ => 0.0,
        }
    }

    fn animate(&self, scene: &mut Scene, time: f32) {
        if let Some(Shape::PointLight { intensity, .. }) =
            scene.node_mut(self.light).map(|node| &mut node.shape)
        {
            *intensity = self.light_pulse.value_at(time);
        }
        if let Some(bulb) = scene.node_mut(self.bulb) {
            bulb.material.emissive_intensity = self.bulb_pulse.value_at(time);
        }
        if let Some(mount) = scene.node_mut(self.mount) {
            mount.transform.rotation.z = self.swing.angle_at(time);
        }
    }
}

const CEILING_HEIGHT: f32 = 4.0;
const CORD_LENGTH: f32 = 1.2;
const WARM_WHITE: u32 = 0xFF_DD_99;
const ACCENT_VIOLET: u32 = 0x99_66_FF;

/// Every light in the kitchen
#[derive(Debug, Clone)]
pub struct KitchenLights {
    /// Fill light
    pub ambient: Light,
    /// Sun-like light whose hue drifts
    pub directional: Light,
    /// Ceiling pendants, centre first
    pub pendants: Vec<PendantLamp>,
    animation_enabled: bool,
}

impl KitchenLights {
    /// Hang the pendants in `scene`
    pub fn build(scene: &mut Scene, animation_enabled: bool) -> Self {
        let pendants = vec![
            PendantLamp::hang(
                scene,
                "Center",
                0.0,
                -4.5,
                WARM_WHITE,
                (
                    Pulse::Sine {
                        base: 2.0,
                        amplitude: 0.5,
                        frequency: 1.5,
                    },
                    Pulse::Sine {
                        base: 0.7,
                        amplitude: 0.3,
                        frequency: 1.5,
                    },
                ),
                Swing {
                    amplitude: 0.05,
                    frequency: 0.8,
                    phase: 0.0,
                },
            ),
            PendantLamp::hang(
                scene,
                "Cutting Board",
                -5.0,
                -4.5,
                WARM_WHITE,
                (Pulse::Steady(1.5), Pulse::Steady(0.8)),
                Swing {
                    amplitude: 0.03,
                    frequency: 0.6,
                    phase: 1.0,
                },
            ),
            PendantLamp::hang(
                scene,
                "Accent",
                5.0,
                -4.5,
                ACCENT_VIOLET,
                (
                    Pulse::Sine {
                        base: 1.2,
                        amplitude: 0.5,
                        frequency: 2.0,
                    },
                    Pulse::Sine {
                        base: 0.8,
                        amplitude: 0.4,
                        frequency: 2.0,
                    },
                ),
                Swing {
                    amplitude: 0.04,
                    frequency: 0.7,
                    phase: 2.0,
                },
            ),
        ];

        Self {
            ambient: Light {
                light_type: LightType::Ambient,
                color: Color::WHITE,
                intensity: 0.4,
            },
            directional: Light {
                light_type: LightType::Directional,
                color: Color::WHITE,
                intensity: 0.6,
            },
            pendants,
            animation_enabled,
        }
    }

    /// Advance every animated light to `time` seconds
    ///
    /// Does nothing while animation is disabled; lights hold their last
    /// values.
    pub fn animate(&mut self, scene: &mut Scene, time: f32) {
        if !self.animation_enabled {
            return;
        }
        self.directional.color = Color::from_hsl((time * 0.05).rem_euclid(1.0), 0.1, 0.9);
        for pendant in &self.pendants {
            pendant.animate(scene, time);
        }
    }

    /// Flip light animation; returns the new state
    pub fn toggle_animation(&mut self) -> bool {
        self.animation_enabled = !self.animation_enabled;
        log::info!(
            "Light animation {}",
            if self.animation_enabled { "enabled" } else { "disabled" }
        );
        self.animation_enabled
    }

    /// Whether lights are animating
    pub fn is_animating(&self) -> bool {
        self.animation_enabled
    }

    /// Name and intensity of every light, for the debug panel
    pub fn intensities(&self, scene: &Scene) -> Vec<(String, f32)> {
        let mut out = vec![
            ("Ambient".to_string(), self.ambient.intensity),
            ("Directional".to_string(), self.directional.intensity),
        ];
        out.extend(
            self.pendants
                .iter()
                .map(|pendant| (pendant.name.clone(), pendant.intensity(scene))),
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pendants_pulse_and_sway() {
        let mut scene = Scene::new();
        let mut lights = KitchenLights::build(&mut scene, true);
        let t = std::f32::consts::PI / 3.0; // sin(1.5t) = 1
        lights.animate(&mut scene, t);

        let center = &lights.pendants[0];
        assert_relative_eq!(center.intensity(&scene), 2.5, epsilon = 1e-5);
        let bulb = scene.node(center.bulb).unwrap();
        assert_relative_eq!(bulb.material.emissive_intensity, 1.0, epsilon = 1e-5);
        let mount = scene.node(center.mount).unwrap();
        assert_relative_eq!(mount.transform.rotation.z, 0.05 * (0.8 * t).sin(), epsilon = 1e-6);

        assert_relative_eq!(lights.pendants[1].intensity(&scene), 1.5);
    }

    #[test]
    fn test_directional_hue_cycles() {
        let mut scene = Scene::new();
        let mut lights = KitchenLights::build(&mut scene, true);
        lights.animate(&mut scene, 0.0);
        let start = lights.directional.color;
        lights.animate(&mut scene, 20.0);
        let end = lights.directional.color;
        assert_relative_eq!(end.r, start.r, epsilon = 1e-4);
        assert_relative_eq!(end.g, start.g, epsilon = 1e-4);
        assert_relative_eq!(end.b, start.b, epsilon = 1e-4);
        assert_relative_eq!(lights.directional.intensity, 0.6);
    }

    #[test]
    fn test_toggle_freezes_lights() {
        let mut scene = Scene::new();
        let mut lights = KitchenLights::build(&mut scene, true);
        lights.animate(&mut scene, 1.0);
        let frozen = lights.intensities(&scene);

        assert!(!lights.toggle_animation());
        lights.animate(&mut scene, 2.0);
        assert_eq!(lights.intensities(&scene), frozen);
        assert!(lights.toggle_animation());
    }

    #[test]
    fn test_intensities_cover_every_light() {
        let mut scene = Scene::new();
        let lights = KitchenLights::build(&mut scene, false);
        let names: Vec<String> = lights.intensities(&scene).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Ambient", "Directional", "Center", "Cutting Board", "Accent"]);
    }
}
