//! Per-entity color tint.
//!
//! Every nut gets its own [`Tint`] at spawn time, playing the role of a
//! cloned material handle: hover, success, and error feedback mutate this
//! component in place and never touch shared data. A rendering backend
//! reads it; nothing else in this crate does beyond the feedback systems.

use bevy_ecs::prelude::Component;

use crate::color::Color;

/// Mutable color owned by a single entity.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let t = Tint::new(Color::rgb(10, 20, 30));
        assert_eq!(t.color, Color::rgb(10, 20, 30));
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(Tint::default().color, Color::WHITE);
    }
}
