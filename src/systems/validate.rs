//! Sequence validator system.
//!
//! Runs on the press edge of the primary button while the session is
//! active and decides what the selection means:
//! - the expected nut: completed + success feedback + tighten motion,
//!   progress advances, and the session ends after the last one;
//! - any other non-completed nut: transient error feedback, progress
//!   untouched — wrong selections are expected input variance, always
//!   recoverable by trying again;
//! - a completed nut, a non-nut entity, or no hit at all: ignored.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::flash::ErrorFlash;
use crate::components::nut::{Nut, NutState};
use crate::components::position::LocalPosition;
use crate::components::tighten::TightenMotion;
use crate::components::tint::Tint;
use crate::events::audio::AudioCmd;
use crate::events::progress::{NutTightened, SelectionRejected, SequenceComplete};
use crate::resources::pointer::PointerState;
use crate::resources::session::Session;
use crate::resources::trainerconfig::{FX_ERROR, FX_SUCCESS, TrainerConfig};

/// Validate the nut selected this frame, if any.
pub fn selection_validator(
    mut commands: Commands,
    pointer: Res<PointerState>,
    config: Res<TrainerConfig>,
    mut session: ResMut<Session>,
    mut audio: MessageWriter<AudioCmd>,
    mut query: Query<(&mut Nut, &mut Tint, &LocalPosition)>,
) {
    if !session.is_active() || !pointer.primary.just_pressed {
        return;
    }
    let Some(hit) = pointer.hover_hit else {
        return;
    };
    let Ok((mut nut, mut tint, position)) = query.get_mut(hit) else {
        return;
    };
    if nut.is_completed() {
        return;
    }

    if session.expected() == Some(hit) {
        let index = session.current_index();
        debug!("correct selection '{}' (index {})", nut.name, index);

        nut.state = NutState::Completed;
        tint.color = config.success;
        commands.entity(hit).insert(TightenMotion::new(
            position.pos,
            config.axis,
            config.distance,
            config.duration,
            config.spin_rate,
        ));
        audio.write(AudioCmd::PlayFx {
            id: FX_SUCCESS.to_string(),
            vol: config.volume,
        });
        commands.trigger(NutTightened { entity: hit, index });

        if session.advance() {
            commands.trigger(SequenceComplete {
                total: session.len(),
            });
        }
    } else {
        debug!(
            "wrong selection '{}' (expected index {})",
            nut.name,
            session.current_index()
        );

        tint.color = config.error;
        commands.spawn(ErrorFlash::new(hit, config.flash_delay));
        audio.write(AudioCmd::PlayFx {
            id: FX_ERROR.to_string(),
            vol: config.volume,
        });
        commands.trigger(SelectionRejected {
            entity: hit,
            expected_index: session.current_index(),
        });
    }
}
