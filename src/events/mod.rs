//! Event types exchanged across systems.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`progress`] – validator progress notifications (observer-based)

pub mod audio;
pub mod progress;
