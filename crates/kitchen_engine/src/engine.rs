//! Frame orchestrator
//!
//! [`KitchenEngine`] owns every subsystem and runs them in a fixed order
//! once per tick. The host loop calls [`KitchenEngine::pump`] between ticks
//! to fire activation expiries and apply finished asset loads, so neither
//! ever lands in the middle of a frame.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::assets::{AssetEvent, AssetLoader, ModelDescriptor};
use crate::config::{Config, ConfigError, KitchenConfig};
use crate::foundation::time::{Clock, Millis, Timer};
use crate::input::{InputFrame, InputIntents};
use crate::lighting::KitchenLights;
use crate::particles::ParticleManager;
use crate::physics::{PlayerState, SpatialCollider};
use crate::scene::{Camera, RenderError, Renderer, Scene};
use crate::stations::kitchen::{breakfast_station, build_collision, build_stations};
use crate::stations::{
    activation_message, prompt_for, ActivationTable, AnimationContext, StationError,
    StationRegistry,
};
use crate::ui::{DebugPanel, Hud};

/// Engine errors
///
/// Only rendering can fail a running tick. The rest surface while the
/// engine is built.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The renderer failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The kitchen layout is inconsistent
    #[error("World build error: {0}")]
    World(#[from] StationError),
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Frame number, starting at 1
    pub frame: u64,
    /// Seconds since the previous tick
    pub delta_time: f32,
    /// Station in reach after movement
    pub nearby: Option<String>,
    /// Station activated by this tick's interact intent
    pub activated: Option<String>,
    /// Live particles after the sweep
    pub particles: usize,
}

/// The kitchen scene runtime
pub struct KitchenEngine {
    config: KitchenConfig,
    clock: Box<dyn Clock>,
    timer: Timer,
    scene: Scene,
    collider: SpatialCollider,
    player: PlayerState,
    camera: Camera,
    stations: StationRegistry,
    activations: ActivationTable,
    particles: ParticleManager,
    lights: KitchenLights,
    hud: Hud,
    debug_panel: DebugPanel,
    rng: StdRng,
    nearby: Option<String>,
    captured: bool,
    breakfast_loaded: bool,
}

impl KitchenEngine {
    /// Build the kitchen world
    pub fn new(config: KitchenConfig, clock: Box<dyn Clock>) -> Result<Self, EngineError> {
        log::info!("Building kitchen scene...");

        let mut scene = Scene::new();
        let mut collider = SpatialCollider::new();
        let mut stations = StationRegistry::new();
        build_collision(&mut collider);
        build_stations(&mut scene, &mut stations)?;
        let lights = KitchenLights::build(&mut scene, config.lighting.animation_enabled);

        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let player = PlayerState::spawn(&config.player);
        let camera = Camera::new(player.position);

        log::info!(
            "Kitchen ready: {} stations, {} collision boxes, {} scene nodes",
            stations.len(),
            collider.boxes().len(),
            scene.len()
        );

        Ok(Self {
            timer: Timer::new(),
            activations: ActivationTable::new(config.interaction.activation_ms),
            particles: ParticleManager::new(config.particles.water_ceiling),
            hud: Hud::new(&config.ui),
            debug_panel: DebugPanel::default(),
            nearby: None,
            captured: false,
            breakfast_loaded: false,
            config,
            clock,
            scene,
            collider,
            player,
            camera,
            stations,
            lights,
            rng,
        })
    }

    /// Build the kitchen from a TOML or RON configuration file
    pub fn from_config_file(path: &Path, clock: Box<dyn Clock>) -> Result<Self, EngineError> {
        let config = KitchenConfig::load_from_file(&path.to_string_lossy())?;
        Self::new(config, clock)
    }

    /// Request the breakfast model from `loader`
    ///
    /// A refused request is logged; the kitchen runs without the station.
    pub fn begin_asset_load(&mut self, loader: &mut dyn AssetLoader) {
        let path = Path::new(&self.config.assets.breakfast_model);
        log::info!("Loading breakfast model from {}", path.display());
        if let Err(e) = loader.request(path) {
            log::error!("Could not request breakfast model: {e}");
        }
    }

    /// Host-loop step between ticks: fire expiries and apply asset events
    pub fn pump(&mut self, loader: &mut dyn AssetLoader) {
        self.pump_timers();
        for event in loader.poll() {
            self.apply_asset_event(event);
        }
    }

    /// Fire due activation expiries; returns the stations that went idle
    pub fn pump_timers(&mut self) -> Vec<String> {
        let now = self.clock.now_ms();
        let expired = self.activations.expire_due(now);
        for name in &expired {
            if let Some(station) = self.stations.get_mut(name) {
                station.deactivate(&mut self.scene);
            }
        }
        expired
    }

    /// Apply one loader event
    pub fn apply_asset_event(&mut self, event: AssetEvent) {
        match event {
            AssetEvent::Progress(fraction) => {
                log::debug!("Breakfast model {:.0}% loaded", fraction * 100.0);
            }
            AssetEvent::Loaded(model) => self.install_breakfast(&model),
            AssetEvent::Failed(e) => {
                log::error!("Failed to load breakfast model: {e}");
            }
        }
    }

    fn install_breakfast(&mut self, model: &ModelDescriptor) {
        if self.breakfast_loaded {
            log::warn!("Ignoring second breakfast model '{}'", model.name);
            return;
        }
        let station = breakfast_station(&mut self.scene, model);
        match self.stations.register_late(station) {
            Ok(()) => {
                self.breakfast_loaded = true;
                log::info!("Breakfast model '{}' loaded", model.name);
            }
            Err(e) => log::warn!("Breakfast station not registered: {e}"),
        }
    }

    /// Run one frame
    ///
    /// Activation expiries and asset loads only advance through [`pump`],
    /// which the host calls between ticks. [`step`] does both.
    ///
    /// [`pump`]: KitchenEngine::pump
    /// [`step`]: KitchenEngine::step
    pub fn tick(
        &mut self,
        input: &InputFrame,
        renderer: &mut dyn Renderer,
    ) -> Result<FrameReport, EngineError> {
        let now = self.clock.now_ms();
        let delta_time = self.timer.update(now);
        self.captured = input.captured;

        if input.intents.contains(InputIntents::TOGGLE_LIGHTS) {
            self.lights.toggle_animation();
        }
        self.lights
            .animate(&mut self.scene, self.clock.wall_seconds() as f32);

        if self.captured {
            self.player
                .integrate(input, delta_time, &self.config.player, &self.collider);
        }
        self.camera.follow(self.player.position, self.player.yaw);

        self.nearby = self
            .stations
            .find_nearest(&self.player.position)
            .map(|station| station.name.clone());
        match &self.nearby {
            Some(name) => self.hud.prompt.show(prompt_for(name)),
            None => self.hud.prompt.hide(),
        }
        let activated = if input.intents.contains(InputIntents::INTERACT) {
            self.interact()
        } else {
            None
        };

        self.animate_stations(now, delta_time);
        self.particles.tick(&mut self.scene, delta_time, now);

        self.hud.toasts.prune(now);
        if let Some(fps) = self.hud.fps.frame(now) {
            log::trace!("{fps} FPS");
        }
        self.debug_panel = self.snapshot();

        renderer.render_frame(&self.scene, &self.camera)?;

        Ok(FrameReport {
            frame: self.timer.frame_count(),
            delta_time,
            nearby: self.nearby.clone(),
            activated,
            particles: self.particles.len(),
        })
    }

    /// Pump then tick, as a host loop would
    pub fn step(
        &mut self,
        input: &InputFrame,
        renderer: &mut dyn Renderer,
        loader: &mut dyn AssetLoader,
    ) -> Result<FrameReport, EngineError> {
        self.pump(loader);
        self.tick(input, renderer)
    }

    fn animate_stations(&mut self, now: Millis, delta_time: f32) {
        let mut ctx = AnimationContext {
            scene: &mut self.scene,
            particles: &mut self.particles,
            rng: &mut self.rng,
            now,
        };
        for name in self.activations.active_names() {
            if let Some(station) = self.stations.get_mut(&name) {
                station.animate(&mut ctx, delta_time);
            }
        }
    }

    /// Activate the station in reach; only works while captured
    pub fn interact(&mut self) -> Option<String> {
        if !self.captured {
            return None;
        }
        let name = self.nearby.clone()?;
        self.activate_station(&name).then_some(name)
    }

    /// Activate `name` directly, ignoring reach
    ///
    /// Returns whether a new activation started.
    pub fn activate_station(&mut self, name: &str) -> bool {
        if self.stations.get(name).is_none() {
            log::warn!("No station named '{name}'");
            return false;
        }
        let now = self.clock.now_ms();
        if !self.activations.activate(name, now) {
            return false;
        }
        self.hud.toasts.show(activation_message(name), now);
        true
    }

    fn snapshot(&self) -> DebugPanel {
        DebugPanel {
            lights: self.lights.intensities(&self.scene),
            light_animation: self.lights.is_animating(),
            breakfast_loaded: self.breakfast_loaded,
            active_stations: self.activations.active_names(),
            particles: self.particles.len(),
            position: self.player.position,
            grounded: self.player.grounded,
            captured: self.captured,
            fps: self.hud.fps.fps(),
        }
    }

    /// Current clock time
    pub fn now(&self) -> Millis {
        self.clock.now_ms()
    }

    /// Active configuration
    pub fn config(&self) -> &KitchenConfig {
        &self.config
    }

    /// Scene nodes
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Static collision geometry
    pub fn collider(&self) -> &SpatialCollider {
        &self.collider
    }

    /// Player kinematics
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Player kinematics, mutably; used to teleport in demos and tests
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// Camera used for the last frame
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Registered stations
    pub fn stations(&self) -> &StationRegistry {
        &self.stations
    }

    /// Activation state
    pub fn activations(&self) -> &ActivationTable {
        &self.activations
    }

    /// Shared particle pool
    pub fn particles(&self) -> &ParticleManager {
        &self.particles
    }

    /// Lighting rig
    pub fn lights(&self) -> &KitchenLights {
        &self.lights
    }

    /// Prompt, toasts and frame rate
    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    /// Diagnostics from the last tick
    pub fn debug_panel(&self) -> &DebugPanel {
        &self.debug_panel
    }

    /// Station in reach at the last tick
    pub fn nearby_station(&self) -> Option<&str> {
        self.nearby.as_deref()
    }

    /// Whether the breakfast station has been registered
    pub fn is_breakfast_loaded(&self) -> bool {
        self.breakfast_loaded
    }

    /// Frames ticked so far
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }

    /// Seconds of frame time accumulated since the first tick
    pub fn elapsed_seconds(&self) -> f32 {
        self.timer.total_time()
    }
}
