use bevy_ecs::prelude::Component;

use crate::math::Vec3;

/// Local-space offset of an entity, mutated by the tighten motion.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct LocalPosition {
    pub pos: Vec3,
}

impl LocalPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
        }
    }
}
