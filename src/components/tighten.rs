//! Success-motion task state.
//!
//! When a nut is clicked in the right order, the validator attaches a
//! [`TightenMotion`] that drives the nut's
//! [`LocalPosition`](super::position::LocalPosition) and
//! [`Rotation`](super::rotation::Rotation) over a fixed duration. See
//! [`crate::systems::tighten`] for the update system.

use bevy_ecs::prelude::Component;

use crate::math::Vec3;

/// Animates a nut being screwed in: linear travel along one local axis
/// combined with a constant spin about it.
///
/// The position interpolates from `start` to `start + axis * distance`
/// over `duration` seconds and snaps to the exact end value on completion.
/// The spin accumulates `spin_rate` degrees per second and is left wherever
/// the last increment put it.
#[derive(Component, Clone, Debug)]
pub struct TightenMotion {
    /// Local position captured when the motion started.
    pub start: Vec3,
    /// Unit travel/spin axis in local space.
    pub axis: Vec3,
    /// Total travel distance along `axis`.
    pub distance: f32,
    /// Duration in seconds.
    pub duration: f32,
    /// Spin rate in degrees per second.
    pub spin_rate: f32,
    /// Time accumulated so far.
    pub elapsed: f32,
    /// Whether the motion is still running.
    pub playing: bool,
}

impl TightenMotion {
    pub fn new(start: Vec3, axis: Vec3, distance: f32, duration: f32, spin_rate: f32) -> Self {
        Self {
            start,
            axis: axis.normalized(),
            distance,
            duration,
            spin_rate,
            elapsed: 0.0,
            playing: true,
        }
    }

    /// Exact end position, used for the completion snap.
    pub fn end(&self) -> Vec3 {
        self.start + self.axis * self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_normalizes_axis() {
        let m = TightenMotion::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0), 0.5, 1.0, 360.0);
        assert!(approx_eq(m.axis.length(), 1.0));
        assert!(m.playing);
        assert!(approx_eq(m.elapsed, 0.0));
    }

    #[test]
    fn test_end_is_start_plus_travel() {
        let m = TightenMotion::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Z, 0.25, 1.5, 540.0);
        let end = m.end();
        assert!(approx_eq(end.x, 1.0));
        assert!(approx_eq(end.y, 2.0));
        assert!(approx_eq(end.z, 3.25));
    }

    #[test]
    fn test_negative_distance_travels_backwards() {
        let m = TightenMotion::new(Vec3::ZERO, Vec3::Y, -0.5, 1.0, 360.0);
        assert!(approx_eq(m.end().y, -0.5));
    }
}
