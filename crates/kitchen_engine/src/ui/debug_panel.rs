//! Debug panel snapshot

use std::fmt;

use crate::foundation::math::Vec3;

/// Diagnostics captured once per frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebugPanel {
    /// Light names with current intensity
    pub lights: Vec<(String, f32)>,
    /// Whether lights animate
    pub light_animation: bool,
    /// Whether the breakfast model finished loading
    pub breakfast_loaded: bool,
    /// Stations currently animating
    pub active_stations: Vec<String>,
    /// Live particles
    pub particles: usize,
    /// Player position
    pub position: Vec3,
    /// Player on the floor
    pub grounded: bool,
    /// Pointer captured
    pub captured: bool,
    /// Last published frame rate
    pub fps: u32,
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "ON"
    } else {
        "OFF"
    }
}

impl fmt::Display for DebugPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FPS: {}", self.fps)?;
        for (name, intensity) in &self.lights {
            writeln!(f, "{name}: {intensity:.2}")?;
        }
        writeln!(f, "Light animation: {}", on_off(self.light_animation))?;
        writeln!(
            f,
            "Breakfast: {}",
            if self.breakfast_loaded { "loaded" } else { "loading" }
        )?;
        if self.active_stations.is_empty() {
            writeln!(f, "Active: none")?;
        } else {
            writeln!(f, "Active: {}", self.active_stations.join(", "))?;
        }
        writeln!(f, "Particles: {}", self.particles)?;
        writeln!(
            f,
            "Position: ({:.2}, {:.2}, {:.2})",
            self.position.x, self.position.y, self.position.z
        )?;
        writeln!(f, "Grounded: {}", on_off(self.grounded))?;
        write!(f, "Captured: {}", on_off(self.captured))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_active_stations() {
        let panel = DebugPanel {
            lights: vec![("Ambient".into(), 0.4)],
            active_stations: vec!["Stove".into(), "Sink".into()],
            position: Vec3::new(0.0, 1.7, 5.0),
            fps: 60,
            ..Default::default()
        };
        let text = panel.to_string();
        assert!(text.starts_with("FPS: 60"));
        assert!(text.contains("Ambient: 0.40"));
        assert!(text.contains("Active: Stove, Sink"));
        assert!(text.contains("Position: (0.00, 1.70, 5.00)"));
        assert!(text.ends_with("Captured: OFF"));
    }
}
