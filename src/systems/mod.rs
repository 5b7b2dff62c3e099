//! Trainer systems.
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread (forward/poll message queues)
//! - [`flash`] – count down error flashes and revert tints
//! - [`hover`] – apply/clear the single hover highlight
//! - [`tighten`] – animate the success motion (travel + spin over time)
//! - [`time`] – update simulation time and delta
//! - [`validate`] – validate the nut selected on a press edge

pub mod audio;
pub mod flash;
pub mod hover;
pub mod tighten;
pub mod time;
pub mod validate;
