//! The interactive target ("nut") component and its state machine.
//!
//! Each nut is in exactly one of three states:
//! - [`NutState::Pending`] – waiting to be clicked
//! - [`NutState::Hovered`] – the pointer is currently over it
//! - [`NutState::Completed`] – clicked in the right order; terminal
//!
//! `Completed` overrides `Hovered` and is never left for the rest of the
//! session.

use bevy_ecs::prelude::Component;

/// State of a single nut in the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NutState {
    /// Waiting to be selected.
    #[default]
    Pending,
    /// The pointer is over the nut and it is not completed.
    Hovered,
    /// Selected in the correct order. Terminal.
    Completed,
}

/// One interactive target in the ordered sequence.
#[derive(Component, Clone, Debug)]
pub struct Nut {
    /// Display name, taken from the scene file.
    pub name: String,
    /// Current interaction state.
    pub state: NutState,
}

impl Nut {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: NutState::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state == NutState::Completed
    }
}
