//! Station registry and proximity scan

use crate::foundation::math::Vec3;
use crate::stations::station::Station;
use thiserror::Error;

/// Station registration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StationError {
    /// A station with this name is already registered
    #[error("Station already registered: {0}")]
    DuplicateName(String),
}

/// All stations, in registration order
///
/// Stations are registered while the world is built. The one exception is
/// [`StationRegistry::register_late`], used when an asynchronously loaded
/// model completes; the host only calls it between ticks.
#[derive(Debug, Default)]
pub struct StationRegistry {
    stations: Vec<Station>,
}

impl StationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station at world-build time
    pub fn register(&mut self, station: Station) -> Result<(), StationError> {
        if self.get(&station.name).is_some() {
            return Err(StationError::DuplicateName(station.name));
        }
        self.stations.push(station);
        Ok(())
    }

    /// Register a station after the world is running
    pub fn register_late(&mut self, station: Station) -> Result<(), StationError> {
        log::info!("Late-registering station '{}'", station.name);
        self.register(station)
    }

    /// First station, in registration order, whose radius reaches `player`
    ///
    /// Overlapping radii resolve to the earlier station even when a later one
    /// is closer.
    pub fn find_nearest(&self, player: &Vec3) -> Option<&Station> {
        self.stations
            .iter()
            .find(|station| station.is_within_reach(player))
    }

    /// Station by name
    pub fn get(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|station| station.name == name)
    }

    /// Station by name, mutably
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Station> {
        self.stations.iter_mut().find(|station| station.name == name)
    }

    /// Iterate stations in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    /// Number of stations
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether no station is registered
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Prompt shown while the player is in reach of `station`
pub fn prompt_for(station: &str) -> String {
    match station {
        "Cutting Board" => "Press E to chop vegetables".to_string(),
        "Stove" => "Press E to cook on stove".to_string(),
        "Sink" => "Press E to wash hands".to_string(),
        "Fridge" => "Press E to open fridge".to_string(),
        "Breakfast" => "Press E to enjoy breakfast".to_string(),
        other => format!("Press E to use {other}"),
    }
}

/// Toast shown when `station` is activated
pub fn activation_message(station: &str) -> String {
    match station {
        "Cutting Board" => "Chopping vegetables...".to_string(),
        "Stove" => "Firing up the stove...".to_string(),
        "Sink" => "Washing your hands...".to_string(),
        "Fridge" => "Looking for ingredients...".to_string(),
        "Breakfast" => "Enjoying a delicious breakfast!".to_string(),
        other => format!("Using the {other}..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StationRegistry {
        let mut registry = StationRegistry::new();
        registry
            .register(Station::new("Stove", Vec3::new(-2.0, 0.0, -4.5), 1.5))
            .unwrap();
        registry
            .register(Station::new("Sink", Vec3::new(-0.5, 0.0, -4.5), 1.5))
            .unwrap();
        registry
    }

    #[test]
    fn test_player_in_reach_finds_station() {
        let registry = registry();
        let player = Vec3::new(-2.0, 1.7, -3.5);
        let station = registry.find_nearest(&player).unwrap();
        assert_eq!(station.name, "Stove");
        assert_eq!(prompt_for(&station.name), "Press E to cook on stove");
    }

    #[test]
    fn test_radius_is_exclusive() {
        let registry = registry();
        assert!(registry.find_nearest(&Vec3::new(-3.5, 0.0, -4.5)).is_none());
        assert!(registry.find_nearest(&Vec3::new(10.0, 0.0, 10.0)).is_none());
    }

    #[test]
    fn test_overlap_prefers_registration_order_over_distance() {
        let registry = registry();
        // 1.4 from the stove, 0.1 from the sink: the stove was registered first.
        let player = Vec3::new(-0.6, 0.0, -4.5);
        assert_eq!(registry.find_nearest(&player).unwrap().name, "Stove");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut registry = registry();
        let err = registry
            .register_late(Station::new("Sink", Vec3::zeros(), 1.0))
            .unwrap_err();
        assert_eq!(err, StationError::DuplicateName("Sink".to_string()));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_unknown_names_use_generic_text() {
        assert_eq!(prompt_for("Toaster"), "Press E to use Toaster");
        assert_eq!(activation_message("Toaster"), "Using the Toaster...");
        assert_eq!(activation_message("Fridge"), "Looking for ingredients...");
    }
}
