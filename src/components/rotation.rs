use bevy_ecs::prelude::Component;

/// Accumulated rotation about the tighten axis, in degrees.
///
/// The tighten motion only ever adds to this; it is never normalized or
/// snapped, so the final orientation is whatever the per-frame increments
/// produced.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Rotation {
    pub degrees: f32,
}
