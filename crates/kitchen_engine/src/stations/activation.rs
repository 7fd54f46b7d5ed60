//! Per-station activation state machine
//!
//! Each station is either idle or active. Activation lasts a fixed duration
//! and ends through a one-shot timer; nothing cancels it early and repeated
//! requests while active are ignored.

use crate::foundation::time::{Millis, TimerQueue};

/// A running station vignette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveAnimation {
    /// Station name
    pub station: String,
    /// Activation time
    pub started_at: Millis,
    /// How long it runs
    pub duration: Millis,
}

impl ActiveAnimation {
    /// When the expiry timer fires
    pub fn ends_at(&self) -> Millis {
        self.started_at + self.duration
    }
}

/// Active vignettes keyed by station name
#[derive(Default)]
pub struct ActivationTable {
    active: Vec<ActiveAnimation>,
    expiries: TimerQueue<(String, Millis)>,
    duration: Millis,
}

impl ActivationTable {
    /// Table whose activations last `duration`
    pub fn new(duration: Millis) -> Self {
        Self {
            active: Vec::new(),
            expiries: TimerQueue::new(),
            duration,
        }
    }

    /// Activate `station` unless it is already active
    ///
    /// Returns whether a new activation started.
    pub fn activate(&mut self, station: &str, now: Millis) -> bool {
        if self.is_active(station) {
            log::trace!("Ignoring repeat activation of '{station}'");
            return false;
        }
        let entry = ActiveAnimation {
            station: station.to_string(),
            started_at: now,
            duration: self.duration,
        };
        self.expiries
            .schedule(entry.ends_at(), (entry.station.clone(), entry.started_at));
        self.active.push(entry);
        log::debug!("Activated '{station}' until {}", now + self.duration);
        true
    }

    /// Fire due expiry timers; returns the stations that went idle
    pub fn expire_due(&mut self, now: Millis) -> Vec<String> {
        let mut expired = Vec::new();
        for (station, started_at) in self.expiries.drain_due(now) {
            let before = self.active.len();
            self.active
                .retain(|entry| !(entry.station == station && entry.started_at == started_at));
            if self.active.len() < before {
                log::debug!("Activation of '{station}' expired");
                expired.push(station);
            }
        }
        expired
    }

    /// Whether `station` is active
    pub fn is_active(&self, station: &str) -> bool {
        self.get(station).is_some()
    }

    /// Entry for `station`
    pub fn get(&self, station: &str) -> Option<&ActiveAnimation> {
        self.active.iter().find(|entry| entry.station == station)
    }

    /// Active station names, oldest activation first
    pub fn active_names(&self) -> Vec<String> {
        self.active.iter().map(|entry| entry.station.clone()).collect()
    }

    /// Number of active stations
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether every station is idle
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Configured activation length
    pub fn duration(&self) -> Millis {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_activation_is_ignored() {
        let mut table = ActivationTable::new(5_000);
        assert!(table.activate("Stove", 1_000));
        assert!(!table.activate("Stove", 3_000));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Stove").unwrap().started_at, 1_000);
    }

    #[test]
    fn test_self_expiry() {
        let mut table = ActivationTable::new(5_000);
        table.activate("Sink", 0);

        assert!(table.expire_due(4_999).is_empty());
        assert!(table.is_active("Sink"));

        assert_eq!(table.expire_due(5_001), vec!["Sink".to_string()]);
        assert!(!table.is_active("Sink"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_reactivation_after_expiry_gets_fresh_timer() {
        let mut table = ActivationTable::new(5_000);
        table.activate("Fridge", 0);
        table.expire_due(5_000);
        assert!(table.activate("Fridge", 6_000));

        assert!(table.expire_due(10_999).is_empty());
        assert_eq!(table.expire_due(11_000), vec!["Fridge".to_string()]);
    }

    #[test]
    fn test_independent_stations() {
        let mut table = ActivationTable::new(5_000);
        table.activate("Stove", 0);
        table.activate("Sink", 2_000);
        assert_eq!(table.active_names(), vec!["Stove", "Sink"]);

        table.expire_due(6_000);
        assert_eq!(table.active_names(), vec!["Sink"]);
    }
}
