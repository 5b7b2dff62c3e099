//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! in the trainer world.
//!
//! Submodules overview:
//! - [`nut`] – an interactive target and its Pending/Hovered/Completed state
//! - [`position`] – local-space offset driven by the tighten motion
//! - [`rotation`] – accumulated spin about the tighten axis
//! - [`tint`] – per-entity mutable color, the owned material stand-in
//! - [`tighten`] – success-motion task state (travel + spin over time)
//! - [`flash`] – pending error-color revert, spawned as its own entity

pub mod flash;
pub mod nut;
pub mod position;
pub mod rotation;
pub mod tighten;
pub mod tint;
