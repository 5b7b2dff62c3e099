//! Hover tracker system.
//!
//! Maintains the invariant that at most one nut is
//! [`Hovered`](crate::components::nut::NutState::Hovered) at a time. Tint
//! writes happen only on state transitions, so holding the pointer over the
//! same nut mutates nothing, and a completed nut's color is never touched.

use bevy_ecs::prelude::*;

use crate::components::nut::{Nut, NutState};
use crate::components::tint::Tint;
use crate::resources::pointer::PointerState;
use crate::resources::session::Session;
use crate::resources::trainerconfig::TrainerConfig;

/// Apply/clear the hover highlight based on this frame's pointer hit.
///
/// A hit only counts when it lands on a non-completed nut; anything else
/// (no hit, a non-nut entity, a completed nut) clears the current
/// highlight back to the neutral color.
pub fn hover_tracker(
    pointer: Res<PointerState>,
    session: Res<Session>,
    config: Res<TrainerConfig>,
    mut query: Query<(Entity, &mut Nut, &mut Tint)>,
) {
    if !session.is_active() {
        return;
    }

    let hit = pointer.hover_hit.filter(|e| {
        query
            .get(*e)
            .map(|(_, nut, _)| !nut.is_completed())
            .unwrap_or(false)
    });

    for (entity, mut nut, mut tint) in query.iter_mut() {
        match nut.state {
            NutState::Hovered if hit != Some(entity) => {
                nut.state = NutState::Pending;
                tint.color = config.neutral;
            }
            NutState::Pending if hit == Some(entity) => {
                nut.state = NutState::Hovered;
                tint.color = config.hover;
            }
            _ => {}
        }
    }
}
