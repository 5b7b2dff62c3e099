//! Scene loading, world setup, and the per-frame tick entry point.
//!
//! A scene is a JSON file listing the nuts in required click order:
//!
//! ```json
//! {
//!   "nuts": [
//!     { "name": "front_left",  "pos": [-0.4, 0.4, 0.0] },
//!     { "name": "front_right", "pos": [ 0.4, 0.4, 0.0] }
//!   ]
//! }
//! ```
//!
//! [`setup`] spawns the nuts, builds the [`Session`], and preloads the
//! feedback clips. [`tick`] is the single entry point the host calls once
//! per frame with the clock delta and the pointer sample.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::common_conditions::resource_exists;
use log::{error, info};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::components::nut::Nut;
use crate::components::position::LocalPosition;
use crate::components::rotation::Rotation;
use crate::components::tint::Tint;
use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use crate::resources::pointer::PointerState;
use crate::resources::session::Session;
use crate::resources::trainerconfig::{FX_ERROR, FX_SUCCESS, TrainerConfig};
use crate::resources::worldtime::WorldTime;
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::flash::error_flash_system;
use crate::systems::hover::hover_tracker;
use crate::systems::tighten::tighten_motion_system;
use crate::systems::time::update_world_time;
use crate::systems::validate::selection_validator;

/// One nut entry in a scene file.
#[derive(Debug, Clone, Deserialize)]
pub struct NutDef {
    /// Display name.
    pub name: String,
    /// Local position of the nut.
    pub pos: [f32; 3],
}

/// Ordered nut layout; file order defines the required click order.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneDef {
    pub nuts: Vec<NutDef>,
}

/// Read and parse a scene file.
pub fn load_scene(path: &Path) -> Result<SceneDef, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read scene file {:?}: {}", path, e))?;
    serde_json::from_str(&json).map_err(|e| format!("Failed to parse scene file: {}", e))
}

/// Fatal configuration errors detected at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// The scene contains no nuts; the session halts permanently.
    EmptySequence,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::EmptySequence => write!(f, "scene contains no nuts"),
        }
    }
}

impl std::error::Error for SetupError {}

/// Spawn the scene's nuts and initialize the session resources.
///
/// Each nut gets its own [`Tint`], so feedback colors are per-entity and
/// never touch shared data. On an empty scene the error is logged, a
/// permanently halted [`Session`] is inserted, and no input will ever be
/// processed — even if nuts are spawned afterwards.
pub fn setup(world: &mut World, scene: &SceneDef) -> Result<(), SetupError> {
    let config = world
        .get_resource_or_insert_with(TrainerConfig::default)
        .clone();
    world.init_resource::<PointerState>();
    world.init_resource::<WorldTime>();
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Messages<AudioMessage>>();

    if scene.nuts.is_empty() {
        error!("invalid configuration: scene contains no nuts, halting session");
        world.insert_resource(Session::halted());
        return Err(SetupError::EmptySequence);
    }

    let mut sequence = Vec::with_capacity(scene.nuts.len());
    for def in &scene.nuts {
        let entity = world
            .spawn((
                Nut::new(&def.name),
                LocalPosition {
                    pos: def.pos.into(),
                },
                Rotation::default(),
                Tint::new(config.neutral),
            ))
            .id();
        sequence.push(entity);
    }
    world.insert_resource(Session::new(sequence));

    let mut msgs = world.resource_mut::<Messages<AudioCmd>>();
    msgs.write(AudioCmd::LoadFx {
        id: FX_SUCCESS.to_string(),
        path: config.success_fx.clone(),
    });
    msgs.write(AudioCmd::LoadFx {
        id: FX_ERROR.to_string(),
        path: config.error_fx.clone(),
    });

    info!("session ready: {} nuts in sequence", scene.nuts.len());
    Ok(())
}

/// Build the per-frame schedule.
///
/// Order matters: the hover tracker resolves this frame's highlight before
/// the validator consumes the click, animations run after both, and the
/// audio queues are pumped last. The bridge-facing systems only run when an
/// [`AudioBridge`] has been set up.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            hover_tracker,
            selection_validator,
            tighten_motion_system,
            error_flash_system,
            forward_audio_cmds.run_if(resource_exists::<AudioBridge>),
            poll_audio_messages.run_if(resource_exists::<AudioBridge>),
            update_bevy_audio_cmds,
            update_bevy_audio_messages,
        )
            .chain(),
    );
    schedule
}

/// Advance the trainer by one frame.
///
/// `dt` is the unscaled frame delta in seconds; `hover_hit` is the entity
/// currently under the pointer ray (hit testing stays with the host); and
/// `primary_down` is the raw button state, from which the press edge is
/// derived.
pub fn tick(
    world: &mut World,
    schedule: &mut Schedule,
    dt: f32,
    hover_hit: Option<Entity>,
    primary_down: bool,
) {
    update_world_time(world, dt);
    world
        .resource_mut::<PointerState>()
        .begin_frame(hover_hit, primary_down);
    schedule.run(world);
}
