//! ECS resources made available to systems.
//!
//! Overview
//! - [`audio`] – bridge and channels for the background audio thread
//! - [`pointer`] – per-frame pointer sample with button edges
//! - [`session`] – the ordered sequence and its progress pointer
//! - [`trainerconfig`] – motion, feedback, and audio settings
//! - [`worldtime`] – simulation time and delta

pub mod audio;
pub mod pointer;
pub mod session;
pub mod trainerconfig;
pub mod worldtime;
