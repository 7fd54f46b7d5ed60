//! Headless kitchen walkthrough
//!
//! Builds the kitchen, starts loading the breakfast model and tours every
//! station with a scripted player.
//!
//! ```text
//! kitchen [CONFIG.toml|CONFIG.ron] [--realtime]
//! ```

mod renderer;
mod script;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use kitchen_engine::assets::RonModelLoader;
use kitchen_engine::config::KitchenConfig;
use kitchen_engine::foundation::logging;
use kitchen_engine::foundation::time::{Clock, ManualClock, Millis, MonotonicClock};
use kitchen_engine::input::InputSource;
use kitchen_engine::{EngineError, KitchenEngine};
use thiserror::Error;

use renderer::LoggingRenderer;
use script::WalkScript;

const FRAME_MS: Millis = 16;

/// Application errors
#[derive(Error, Debug)]
enum AppError {
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Tours the kitchen with a scripted player
#[derive(Parser, Debug)]
#[command(name = "kitchen", about = "Headless kitchen walkthrough")]
struct Options {
    /// Configuration file (.toml or .ron)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Pace frames against the wall clock instead of stepping a manual clock
    #[arg(long)]
    realtime: bool,
}

fn main() {
    logging::init();
    let options = Options::parse();
    if let Err(e) = run(&options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), AppError> {
    // The manual clock steps exactly one frame per tick so headless runs
    // are reproducible for a given seed.
    let manual = ManualClock::starting_at(0);
    let clock: Box<dyn Clock> = if options.realtime {
        Box::new(MonotonicClock::new())
    } else {
        Box::new(manual.clone())
    };

    let mut engine = match &options.config {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            KitchenEngine::from_config_file(path, clock)?
        }
        None => KitchenEngine::new(KitchenConfig::default(), clock)?,
    };
    let mut loader = RonModelLoader::new();
    let mut renderer = LoggingRenderer::new();
    let mut script = WalkScript::new();
    engine.begin_asset_load(&mut loader);

    log::info!(
        "Touring the kitchen for {:.1}s",
        WalkScript::duration() as f64 / 1000.0
    );
    let mut last_fps = 0;
    loop {
        let now = engine.now();
        if script.is_finished(now) {
            break;
        }
        let input = script.sample(now);
        let report = engine.step(&input, &mut renderer, &mut loader)?;
        if let Some(station) = &report.activated {
            log::info!("Activated {station}");
        }

        let panel = engine.debug_panel();
        if panel.fps != last_fps || report.frame % 60 == 0 {
            last_fps = panel.fps;
            log::debug!("\n{panel}");
        }

        if options.realtime {
            std::thread::sleep(Duration::from_millis(FRAME_MS));
        } else {
            manual.advance(FRAME_MS);
        }
    }

    log::info!(
        "Tour finished after {} frames over {:.1}s ({} visible nodes in the last); breakfast {}",
        renderer.frames(),
        engine.elapsed_seconds(),
        renderer.visible_nodes(),
        if engine.is_breakfast_loaded() {
            "served"
        } else {
            "never arrived"
        }
    );
    log::info!("Final state:\n{}", engine.debug_panel());
    Ok(())
}
