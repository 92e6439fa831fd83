//! Game Session
//!
//! The only mutable game data: current state, drawn sequence and difficulty.

use super::GameState;
use crate::sequence::SequenceStore;

/// State, sequence and difficulty of one running game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(super) state: GameState,
    pub(super) sequence: SequenceStore,
    pub(super) difficulty: usize,
}

impl GameSession {
    /// Fresh session on the welcome screen
    pub fn new(capacity: usize) -> Self {
        GameSession {
            state: GameState::Welcome,
            sequence: SequenceStore::new(capacity),
            difficulty: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Symbols drawn so far this game
    pub fn sequence(&self) -> &SequenceStore {
        &self.sequence
    }

    /// Index of the next symbol to draw
    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    /// Level shown to the player (1-based length of the round being played)
    pub fn level(&self) -> usize {
        self.difficulty + 1
    }

    /// Forget the current game after a win or a loss
    pub(super) fn reset_round(&mut self) {
        self.difficulty = 0;
        self.sequence.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    #[test]
    fn test_new_session() {
        let session = GameSession::new(64);
        assert_eq!(session.state(), GameState::Welcome);
        assert_eq!(session.difficulty(), 0);
        assert!(session.sequence().is_empty());
        assert_eq!(session.sequence().capacity(), 64);
    }

    #[test]
    fn test_reset_round() {
        let mut session = GameSession::new(8);
        session.sequence.append(Symbol::Circle).unwrap();
        session.sequence.append(Symbol::X).unwrap();
        session.difficulty = 2;
        session.reset_round();
        assert_eq!(session.difficulty(), 0);
        assert!(session.sequence().is_empty());
        session.reset_round();
        assert!(session.sequence().is_empty());
    }
}
