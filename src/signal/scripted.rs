//! Scripted Signal Source
//!
//! Replays a fixed list of symbols, wrapping around at the end.

use super::SignalSource;
use crate::symbol::Symbol;

/// Deterministic source replaying a fixed symbol list
#[derive(Debug, Clone)]
pub struct ScriptedSignal {
    script: Vec<Symbol>,
    position: usize,
    drawn: usize,
}

impl ScriptedSignal {
    /// Create a source replaying `script`. An empty script always yields [`Symbol::X`].
    pub fn new(script: impl Into<Vec<Symbol>>) -> Self {
        ScriptedSignal {
            script: script.into(),
            position: 0,
            drawn: 0,
        }
    }

    /// Number of symbols drawn so far
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// Rewind to the first scripted symbol
    pub fn rewind(&mut self) {
        self.position = 0;
    }
}

impl SignalSource for ScriptedSignal {
    fn next_symbol(&mut self) -> Symbol {
        self.drawn += 1;
        let Some(&symbol) = self.script.get(self.position) else {
            return Symbol::X;
        };
        self.position = (self.position + 1) % self.script.len();
        symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_and_wraps() {
        let mut source = ScriptedSignal::new([Symbol::Square, Symbol::Circle]);
        assert_eq!(source.next_symbol(), Symbol::Square);
        assert_eq!(source.next_symbol(), Symbol::Circle);
        assert_eq!(source.next_symbol(), Symbol::Square);
        assert_eq!(source.drawn(), 3);
    }

    #[test]
    fn test_empty_script() {
        let mut source = ScriptedSignal::new(Vec::new());
        assert_eq!(source.next_symbol(), Symbol::X);
    }

    #[test]
    fn test_rewind() {
        let mut source = ScriptedSignal::new([Symbol::Octagon, Symbol::Triangle]);
        source.next_symbol();
        source.rewind();
        assert_eq!(source.next_symbol(), Symbol::Octagon);
    }
}
