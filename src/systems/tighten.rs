//! Tighten-motion system.
//!
//! Advances every running
//! [`TightenMotion`](crate::components::tighten::TightenMotion): the nut's
//! [`LocalPosition`](crate::components::position::LocalPosition) travels
//! linearly along the motion axis while its
//! [`Rotation`](crate::components::rotation::Rotation) accumulates spin.
//!
//! On the frame the duration elapses, the position snaps to the exact end
//! value so the final offset is independent of how the duration was split
//! into frame deltas. The rotation is not snapped: it stays wherever the
//! accumulated increments left it.

use bevy_ecs::prelude::*;

use crate::components::position::LocalPosition;
use crate::components::rotation::Rotation;
use crate::components::tighten::TightenMotion;
use crate::resources::worldtime::WorldTime;

/// Animate nuts being screwed in.
pub fn tighten_motion_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut LocalPosition, &mut Rotation, &mut TightenMotion)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut position, mut rotation, mut motion) in query.iter_mut() {
        if !motion.playing {
            continue;
        }
        motion.elapsed += dt;
        rotation.degrees += motion.spin_rate * dt;

        if motion.elapsed >= motion.duration {
            position.pos = motion.end();
            motion.playing = false;
        } else {
            let t = motion.elapsed / motion.duration;
            position.pos = motion.start.lerp(motion.end(), t);
        }
    }
}
