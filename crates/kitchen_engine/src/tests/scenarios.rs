//! Station interaction scenarios

use super::{Harness, FRAME_MS};
use crate::foundation::math::Vec3;
use crate::input::{InputFrame, InputIntents};
use crate::particles::ParticleKind;
use crate::scene::SceneAttach;
use crate::stations::prompt_for;

#[test]
fn test_station_in_reach_shows_its_prompt() {
    let mut harness = Harness::new();
    // 1.0 from the cutting board, inside its 1.5 radius.
    let player = Vec3::new(-5.0, 1.7, -3.5);
    let station = harness.engine.stations().find_nearest(&player).unwrap();
    assert_eq!(station.name, "Cutting Board");

    harness.engine.player_mut().position = player;
    harness.frame(&InputFrame::default());
    assert_eq!(harness.engine.nearby_station(), Some("Cutting Board"));
    assert_eq!(
        harness.engine.hud().prompt.text(),
        Some(prompt_for("Cutting Board").as_str())
    );

    harness.engine.player_mut().position = Vec3::new(0.0, 1.7, 5.0);
    harness.advance(&InputFrame::default());
    assert!(!harness.engine.hud().prompt.is_visible());
}

#[test]
fn test_walk_into_counter_and_cook() {
    let mut harness = Harness::new();
    harness.engine.player_mut().position = Vec3::new(-2.0, 1.7, 0.0);

    let walk = InputFrame::captured(InputIntents::MOVE_FORWARD);
    harness.frame(&walk);
    harness.run_until(2_000, &walk);

    let position = harness.engine.player().position;
    assert!(position.z > -3.5, "walked into the counter: {position:?}");
    assert_eq!(harness.engine.nearby_station(), Some("Stove"));

    let report = harness.advance(&InputFrame::captured(InputIntents::INTERACT));
    assert_eq!(report.activated.as_deref(), Some("Stove"));
    assert!(harness.engine.activations().is_active("Stove"));
}

#[test]
fn test_repeat_interaction_keeps_single_activation() {
    let mut harness = Harness::new();
    harness.frame(&InputFrame::default());
    assert!(harness.engine.activate_station("Sink"));

    harness.run_until(2_000, &InputFrame::default());
    assert!(!harness.engine.activate_station("Sink"));

    let activations = harness.engine.activations();
    assert_eq!(activations.len(), 1);
    assert_eq!(activations.get("Sink").unwrap().started_at, 0);
}

#[test]
fn test_activation_expires_after_duration() {
    let mut harness = Harness::new();
    harness.frame(&InputFrame::default());
    harness.engine.activate_station("Cutting Board");

    harness.clock.set(4_999);
    assert!(harness.engine.pump_timers().is_empty());
    assert!(harness.engine.activations().is_active("Cutting Board"));

    harness.clock.set(5_000);
    assert_eq!(harness.engine.pump_timers(), vec!["Cutting Board"]);
    assert!(harness.engine.activations().is_empty());

    // A fresh activation is accepted once idle.
    assert!(harness.engine.activate_station("Cutting Board"));
}

#[test]
fn test_knife_returns_to_rest_after_expiry() {
    let mut harness = Harness::new();
    let knife = harness.engine.scene().find_by_name("chef knife").unwrap();
    let rest = harness.engine.scene().node(knife).unwrap().transform;

    harness.frame(&InputFrame::default());
    harness.engine.activate_station("Cutting Board");
    // Mid-lift: a quarter of the way through the knife cycle.
    harness.run_until(240, &InputFrame::default());
    assert_ne!(harness.engine.scene().node(knife).unwrap().transform, rest);

    harness.run_until(5_100, &InputFrame::default());
    assert_eq!(harness.engine.scene().node(knife).unwrap().transform, rest);
}

#[test]
fn test_stove_particles_drain_after_expiry() {
    let mut harness = Harness::new();
    harness.frame(&InputFrame::default());
    harness.engine.activate_station("Stove");

    let mut peak = 0;
    while harness.engine.now() + FRAME_MS <= 5_000 {
        harness.advance(&InputFrame::default());
        let particles = harness.engine.particles();
        assert_eq!(
            particles.len(),
            particles.count(ParticleKind::Flame) + particles.count(ParticleKind::Steam)
        );
        peak = peak.max(particles.len());
    }
    assert!(peak > 0, "stove never spawned flames or steam");

    harness.run_until(5_700, &InputFrame::default());
    assert!(!harness.engine.activations().is_active("Stove"));
    assert_eq!(harness.engine.particles().count(ParticleKind::Flame), 0);
    assert_eq!(harness.engine.particles().count(ParticleKind::Steam), 0);
    assert!(harness.engine.particles().is_empty());
}

#[test]
fn test_sink_water_never_exceeds_ceiling() {
    let mut harness = Harness::new();
    harness.frame(&InputFrame::default());
    harness.engine.activate_station("Sink");

    while harness.engine.now() + FRAME_MS <= 5_000 {
        harness.advance(&InputFrame::default());
        assert!(harness.engine.particles().count(ParticleKind::Water) <= 20);
    }
}

#[test]
fn test_fridge_contents_built_once() {
    let mut harness = Harness::new();
    harness.frame(&InputFrame::default());
    assert!(harness.engine.scene().find_by_name("fridge contents").is_none());

    harness.engine.activate_station("Fridge");
    harness.advance(&InputFrame::default());
    let contents = harness.engine.scene().find_by_name("fridge contents").unwrap();
    let nodes_after_first = harness.engine.scene().len();

    harness.run_until(5_200, &InputFrame::default());
    assert!(!harness.engine.activations().is_active("Fridge"));
    assert!(!harness.engine.scene().node(contents).unwrap().visible);

    assert!(harness.engine.activate_station("Fridge"));
    harness.advance(&InputFrame::default());
    assert_eq!(
        harness.engine.scene().find_by_name("fridge contents"),
        Some(contents)
    );
    assert!(harness.engine.scene().node(contents).unwrap().visible);

    let named_contents = harness
        .engine
        .scene()
        .iter()
        .filter(|(_, node)| node.name == "fridge contents")
        .count();
    assert_eq!(named_contents, 1);
    // Only mist particles come and go between the two activations.
    let particle_nodes = harness.engine.particles().len();
    assert!(harness.engine.scene().len() <= nodes_after_first + particle_nodes);
}

#[test]
fn test_debug_panel_tracks_frame_state() {
    let mut harness = Harness::new();
    harness.frame(&InputFrame::captured(InputIntents::empty()));
    harness.engine.activate_station("Stove");
    harness.run_until(1_100, &InputFrame::captured(InputIntents::empty()));

    let panel = harness.engine.debug_panel();
    assert!(panel.captured);
    assert!(panel.grounded);
    assert_eq!(panel.active_stations, vec!["Stove"]);
    assert!(panel.fps > 0);
    assert_eq!(panel.lights.len(), 5);
    assert!(panel.to_string().contains("Breakfast: loading"));
}
