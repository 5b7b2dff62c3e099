//! Nutrunner library.
//!
//! A headless ordered-interaction trainer: click a set of nuts in a
//! prescribed order, with hover highlighting, success/error color and
//! sound feedback, and an animated tightening motion on success.
//!
//! This module exposes the trainer's ECS components, resources, systems,
//! and events for use in integration tests and as a reusable library.

pub mod color;
pub mod components;
pub mod events;
pub mod game;
pub mod math;
pub mod resources;
pub mod systems;
