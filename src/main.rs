//! Nutrunner demo entry point.
//!
//! A sequence-validation interaction trainer built on:
//! - **bevy_ecs** for entity-component-system architecture
//! - **crossbeam-channel** for the background audio bridge
//! - **configparser**/**serde_json** for settings and scene files
//!
//! This executable replays a scripted pointer session headlessly: it
//! hovers and clicks the scene's nuts (including one deliberate wrong
//! click unless `--flawless`), drives the per-frame schedule with jittered
//! frame deltas, and logs the session outcome.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --scene assets/scenes/wheel.json
//! ```

mod color;
mod components;
mod events;
mod game;
mod math;
mod resources;
mod systems;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::events::progress::observe_sequence_complete;
use crate::game::{NutDef, SceneDef};
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::session::Session;
use crate::resources::trainerconfig::TrainerConfig;
use crate::resources::worldtime::WorldTime;

/// Nutrunner: click the nuts in order.
#[derive(Parser)]
#[command(version, about = "Headless ordered-interaction trainer demo")]
struct Cli {
    /// Scene file (JSON) listing the nuts in required click order.
    /// Defaults to a built-in five-nut wheel layout.
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// Trainer settings file (INI). Defaults are used when omitted.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Replay a perfect session without the scripted wrong click.
    #[arg(long)]
    flawless: bool,
}

/// Five wheel nuts in star-pattern order.
fn default_scene() -> SceneDef {
    let nuts = ["top", "lower_right", "lower_left", "upper_right", "upper_left"]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let angle = std::f32::consts::TAU * (i as f32) / 5.0;
            NutDef {
                name: name.to_string(),
                pos: [angle.sin() * 0.4, angle.cos() * 0.4, 0.0],
            }
        })
        .collect();
    SceneDef { nuts }
}

/// Frame delta around 60 Hz with a little jitter.
fn jittered_dt() -> f32 {
    1.0 / 60.0 + (fastrand::f32() - 0.5) * 0.004
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let scene = match &cli.scene {
        Some(path) => match game::load_scene(path) {
            Ok(scene) => scene,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => default_scene(),
    };

    let config = match &cli.config {
        Some(path) => {
            let mut config = TrainerConfig::with_path(path);
            if let Err(e) = config.load_from_file() {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
            config
        }
        None => TrainerConfig::default(),
    };

    let mut world = World::new();
    world.insert_resource(config);
    setup_audio(&mut world);
    world.add_observer(observe_sequence_complete);

    if let Err(e) = game::setup(&mut world, &scene) {
        eprintln!("setup failed: {}", e);
        shutdown_audio(&mut world);
        return ExitCode::FAILURE;
    }
    let mut schedule = game::build_schedule();

    let targets: Vec<Entity> = world.resource::<Session>().targets().to_vec();
    let mut clicks = targets.clone();
    if !cli.flawless && targets.len() > 1 {
        // Start with the last nut: a guaranteed wrong selection.
        clicks.insert(0, targets[targets.len() - 1]);
    }

    for target in clicks {
        // Hover for a few frames, then press and release.
        for _ in 0..3 {
            game::tick(&mut world, &mut schedule, jittered_dt(), Some(target), false);
        }
        game::tick(&mut world, &mut schedule, jittered_dt(), Some(target), true);
        game::tick(&mut world, &mut schedule, jittered_dt(), Some(target), false);
    }

    // Let the last tighten motion and any pending flash run out.
    let settle = {
        let config = world.resource::<TrainerConfig>();
        config.duration.max(config.flash_delay) + 0.1
    };
    let mut remaining = settle;
    while remaining > 0.0 {
        let dt = jittered_dt();
        remaining -= dt;
        game::tick(&mut world, &mut schedule, dt, None, false);
    }

    let session = world.resource::<Session>();
    let frames = world.resource::<WorldTime>().frame_count;
    info!(
        "session finished: {:?} ({}/{} nuts, {} frames)",
        session.state(),
        session.current_index(),
        session.len(),
        frames
    );

    shutdown_audio(&mut world);
    ExitCode::SUCCESS
}
