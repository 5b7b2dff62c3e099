//! Per-frame pointer state resource.
//!
//! The host supplies a raw sample once per tick — which entity (if any) the
//! pointer ray currently hits, and whether the primary button is down — and
//! [`PointerState::begin_frame`] folds it into edge-triggered button state.
//! Ray-vs-geometry testing itself stays with the host; this crate only
//! consumes hit identities.

use bevy_ecs::prelude::{Entity, Resource};

/// Boolean button state with press/release edges derived per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    /// Whether the button is currently down.
    pub down: bool,
    /// Whether the button went down this frame.
    pub just_pressed: bool,
    /// Whether the button went up this frame.
    pub just_released: bool,
}

impl ButtonState {
    fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.down;
        self.just_released = !down && self.down;
        self.down = down;
    }
}

/// Resource capturing the pointer sample for the current frame.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PointerState {
    /// Entity currently under the pointer ray, if any.
    pub hover_hit: Option<Entity>,
    /// Primary button state with edges.
    pub primary: ButtonState,
}

impl PointerState {
    /// Fold the host's raw sample for this frame into the resource.
    pub fn begin_frame(&mut self, hover_hit: Option<Entity>, primary_down: bool) {
        self.hover_hit = hover_hit;
        self.primary.update(primary_down);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let p = PointerState::default();
        assert!(p.hover_hit.is_none());
        assert!(!p.primary.down);
        assert!(!p.primary.just_pressed);
        assert!(!p.primary.just_released);
    }

    #[test]
    fn test_press_edge_fires_once() {
        let mut p = PointerState::default();
        p.begin_frame(None, true);
        assert!(p.primary.down);
        assert!(p.primary.just_pressed);

        // Held down: no new edge.
        p.begin_frame(None, true);
        assert!(p.primary.down);
        assert!(!p.primary.just_pressed);
    }

    #[test]
    fn test_release_edge() {
        let mut p = PointerState::default();
        p.begin_frame(None, true);
        p.begin_frame(None, false);
        assert!(!p.primary.down);
        assert!(p.primary.just_released);
        assert!(!p.primary.just_pressed);

        p.begin_frame(None, false);
        assert!(!p.primary.just_released);
    }

    #[test]
    fn test_hover_hit_is_replaced_each_frame() {
        let mut world = bevy_ecs::prelude::World::new();
        let e = world.spawn_empty().id();
        let mut p = PointerState::default();
        p.begin_frame(Some(e), false);
        assert_eq!(p.hover_hit, Some(e));
        p.begin_frame(None, false);
        assert!(p.hover_hit.is_none());
    }
}
