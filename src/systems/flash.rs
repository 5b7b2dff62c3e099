//! Error-flash system.
//!
//! Counts down every [`ErrorFlash`](crate::components::flash::ErrorFlash)
//! entity and, on expiry, reverts the target nut's tint: back to the hover
//! color if the pointer is still over it, to neutral otherwise, and not at
//! all if the nut has been completed since the flash started. The flash
//! entity despawns either way.
//!
//! Overlapping flashes on the same nut are not deduplicated; each one
//! reverts at its own expiry and the last to finish wins.

use bevy_ecs::prelude::*;

use crate::components::flash::ErrorFlash;
use crate::components::nut::{Nut, NutState};
use crate::components::tint::Tint;
use crate::resources::trainerconfig::TrainerConfig;
use crate::resources::worldtime::WorldTime;

/// Count down pending flashes and revert expired ones.
pub fn error_flash_system(
    world_time: Res<WorldTime>,
    config: Res<TrainerConfig>,
    mut commands: Commands,
    mut flashes: Query<(Entity, &mut ErrorFlash)>,
    mut nuts: Query<(&Nut, &mut Tint)>,
) {
    let dt = world_time.delta;
    for (flash_entity, mut flash) in flashes.iter_mut() {
        flash.remaining -= dt;
        if flash.remaining > 0.0 {
            continue;
        }
        if let Ok((nut, mut tint)) = nuts.get_mut(flash.target) {
            match nut.state {
                NutState::Completed => {}
                NutState::Hovered => tint.color = config.hover,
                NutState::Pending => tint.color = config.neutral,
            }
        }
        commands.entity(flash_entity).try_despawn();
    }
}
