//! Progress events emitted by the sequence validator.
//!
//! The validator triggers these on the world so host code can react in a
//! decoupled manner (UI, scoring, scene transitions) via observers:
//!
//! ```ignore
//! world.add_observer(|trigger: On<SequenceComplete>| {
//!     println!("done after {} nuts", trigger.event().total);
//! });
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Event fired when a nut is selected in the correct order.
#[derive(Event, Debug, Clone, Copy)]
pub struct NutTightened {
    /// The completed nut.
    pub entity: Entity,
    /// Its position in the sequence (0-based).
    pub index: usize,
}

/// Event fired when a non-completed nut is selected out of order.
#[derive(Event, Debug, Clone, Copy)]
pub struct SelectionRejected {
    /// The wrongly selected nut.
    pub entity: Entity,
    /// Index of the nut that was expected instead.
    pub expected_index: usize,
}

/// Event fired once when the last nut of the sequence is completed.
#[derive(Event, Debug, Clone, Copy)]
pub struct SequenceComplete {
    /// Number of nuts in the sequence.
    pub total: usize,
}

/// Global observer that logs the end of a run.
pub fn observe_sequence_complete(trigger: On<SequenceComplete>) {
    info!(
        "sequence complete: all {} nuts tightened",
        trigger.event().total
    );
}
