//! Error-flash task.
//!
//! A wrong selection paints the clicked nut with the error color and spawns
//! a separate entity carrying an [`ErrorFlash`] countdown. When the
//! countdown expires, [`crate::systems::flash`] reverts the nut's tint and
//! despawns the flash entity.
//!
//! Flashes are deliberately not deduplicated: clicking the same wrong nut
//! twice in quick succession spawns two flashes, each reverting the tint at
//! its own expiry. The last one to finish wins.

use bevy_ecs::prelude::{Component, Entity};

/// Pending color revert for a wrongly selected nut.
#[derive(Component, Clone, Copy, Debug)]
pub struct ErrorFlash {
    /// The nut whose tint will be reverted.
    pub target: Entity,
    /// Seconds until the revert.
    pub remaining: f32,
}

impl ErrorFlash {
    pub fn new(target: Entity, delay: f32) -> Self {
        Self {
            target,
            remaining: delay,
        }
    }
}
