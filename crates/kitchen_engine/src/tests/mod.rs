//! End-to-end kitchen scenarios driven through the frame orchestrator

mod scenarios;

use std::collections::VecDeque;
use std::path::Path;

use crate::assets::{AssetError, AssetEvent, AssetLoader};
use crate::config::KitchenConfig;
use crate::foundation::time::{Clock, ManualClock, Millis};
use crate::input::InputFrame;
use crate::scene::NullRenderer;
use crate::KitchenEngine;

/// Frame length used by every scenario
pub(crate) const FRAME_MS: Millis = 16;

/// Loader that hands out pre-scripted events, one batch per poll
#[derive(Default)]
pub(crate) struct ScriptedLoader {
    pub requested: Vec<String>,
    pub batches: VecDeque<Vec<AssetEvent>>,
}

impl AssetLoader for ScriptedLoader {
    fn request(&mut self, path: &Path) -> Result<(), AssetError> {
        self.requested.push(path.display().to_string());
        Ok(())
    }

    fn poll(&mut self) -> Vec<AssetEvent> {
        self.batches.pop_front().unwrap_or_default()
    }
}

/// Engine on a manual clock with a fixed RNG seed
pub(crate) struct Harness {
    pub engine: KitchenEngine,
    pub clock: ManualClock,
    pub renderer: NullRenderer,
    pub loader: ScriptedLoader,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(KitchenConfig {
            rng_seed: Some(42),
            ..Default::default()
        })
    }

    pub fn with_config(config: KitchenConfig) -> Self {
        let clock = ManualClock::starting_at(0);
        Self {
            engine: KitchenEngine::new(config, Box::new(clock.clone())).unwrap(),
            clock,
            renderer: NullRenderer::new(),
            loader: ScriptedLoader::default(),
        }
    }

    /// Pump and tick once at the current time
    pub fn frame(&mut self, input: &InputFrame) -> crate::FrameReport {
        self.engine
            .step(input, &mut self.renderer, &mut self.loader)
            .unwrap()
    }

    /// Advance a frame length and run one frame
    pub fn advance(&mut self, input: &InputFrame) -> crate::FrameReport {
        self.clock.advance(FRAME_MS);
        self.frame(input)
    }

    /// Run frames until the clock reaches `until`
    pub fn run_until(&mut self, until: Millis, input: &InputFrame) {
        while self.clock.now_ms() + FRAME_MS <= until {
            self.advance(input);
        }
    }
}
