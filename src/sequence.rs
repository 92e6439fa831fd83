//! Sequence Store
//!
//! Append-only, bounded list of the symbols drawn during the current game.
//! Errors from this module mean the state machine produced an index outside
//! the valid range; they are never a user-facing outcome.

use crate::symbol::Symbol;

/// Default maximum sequence length
pub const DEFAULT_CAPACITY: usize = 64;

/// Sequence store invariant violations
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// Append attempted on a full store
    #[error("Sequence capacity {capacity} exceeded")]
    CapacityExceeded {
        /// Store capacity
        capacity: usize,
    },

    /// Read past the stored length
    #[error("Sequence index {index} out of range (length {len})")]
    OutOfRange {
        /// Requested index
        index: usize,
        /// Current length
        len: usize,
    },
}

/// Bounded append-only symbol sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceStore {
    symbols: Vec<Symbol>,
    capacity: usize,
}

impl SequenceStore {
    /// Create an empty store holding at most `capacity` symbols
    pub fn new(capacity: usize) -> Self {
        SequenceStore {
            symbols: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a symbol at the end
    pub fn append(&mut self, symbol: Symbol) -> Result<(), SequenceError> {
        if self.is_full() {
            return Err(SequenceError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.symbols.push(symbol);
        Ok(())
    }

    /// Symbol at position `index`
    pub fn get(&self, index: usize) -> Result<Symbol, SequenceError> {
        self.symbols
            .get(index)
            .copied()
            .ok_or(SequenceError::OutOfRange {
                index,
                len: self.symbols.len(),
            })
    }

    /// Clear to empty
    pub fn reset(&mut self) {
        self.symbols.clear();
    }

    /// Number of stored symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether no symbols are stored
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Maximum number of symbols
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether another append would fail
    pub fn is_full(&self) -> bool {
        self.symbols.len() >= self.capacity
    }

    /// Stored symbols in order
    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Iterate stored symbols in order
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }
}

impl Default for SequenceStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
