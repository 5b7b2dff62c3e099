//! Session resource: the ordered sequence and its progress pointer.
//!
//! The session owns the fixed, ordered list of nut entities and the index
//! of the next expected one. It gates all input processing through
//! [`Session::active`]: once the sequence is exhausted (or setup failed
//! validation) the flag drops permanently and the validator never runs
//! again.

use bevy_ecs::prelude::{Entity, Resource};
use smallvec::SmallVec;

/// Overall state of a run, derived from the session fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Input is processed; at least one nut remains.
    Running,
    /// Every nut was selected in order. Terminal.
    Complete,
    /// Setup validation failed; input is never processed. Terminal.
    Halted,
}

/// The ordered-interaction session.
#[derive(Resource, Debug)]
pub struct Session {
    /// Nut entities in required click order. Fixed at setup.
    sequence: SmallVec<[Entity; 8]>,
    /// Index of the next expected nut, in `[0, len]`.
    current: usize,
    /// Gates all input processing. Drops permanently on completion or halt.
    active: bool,
}

impl Session {
    /// Build a session over an ordered, non-empty target list.
    pub fn new(sequence: impl IntoIterator<Item = Entity>) -> Self {
        let sequence: SmallVec<[Entity; 8]> = sequence.into_iter().collect();
        let active = !sequence.is_empty();
        Self {
            sequence,
            current: 0,
            active,
        }
    }

    /// A permanently inactive session, inserted when setup validation fails.
    pub fn halted() -> Self {
        Self {
            sequence: SmallVec::new(),
            current: 0,
            active: false,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.current == self.sequence.len() && !self.sequence.is_empty() {
            SessionState::Complete
        } else if self.active {
            SessionState::Running
        } else {
            SessionState::Halted
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The next expected nut, or `None` once the sequence is exhausted.
    pub fn expected(&self) -> Option<Entity> {
        self.sequence.get(self.current).copied()
    }

    /// Index of the next expected nut.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The full sequence in required click order.
    pub fn targets(&self) -> &[Entity] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Advance past a correct selection. Returns `true` when the sequence
    /// is now complete; the session deactivates itself in that case.
    pub fn advance(&mut self) -> bool {
        debug_assert!(self.current < self.sequence.len());
        self.current += 1;
        if self.current == self.sequence.len() {
            self.active = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::World;

    fn entities(world: &mut World, n: usize) -> Vec<Entity> {
        (0..n).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn test_new_session_runs() {
        let mut world = World::new();
        let nuts = entities(&mut world, 3);
        let session = Session::new(nuts.clone());
        assert_eq!(session.state(), SessionState::Running);
        assert!(session.is_active());
        assert_eq!(session.expected(), Some(nuts[0]));
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_empty_sequence_halts() {
        let session = Session::new(std::iter::empty());
        assert_eq!(session.state(), SessionState::Halted);
        assert!(!session.is_active());
        assert_eq!(session.expected(), None);
    }

    #[test]
    fn test_halted_constructor() {
        let session = Session::halted();
        assert_eq!(session.state(), SessionState::Halted);
        assert!(!session.is_active());
    }

    #[test]
    fn test_advance_to_completion() {
        let mut world = World::new();
        let nuts = entities(&mut world, 2);
        let mut session = Session::new(nuts.clone());

        assert!(!session.advance());
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.expected(), Some(nuts[1]));

        assert!(session.advance());
        assert_eq!(session.state(), SessionState::Complete);
        assert!(!session.is_active());
        assert_eq!(session.expected(), None);
    }

    #[test]
    fn test_single_nut_completes_after_one_advance() {
        let mut world = World::new();
        let nuts = entities(&mut world, 1);
        let mut session = Session::new(nuts);
        assert!(session.advance());
        assert_eq!(session.state(), SessionState::Complete);
    }
}
