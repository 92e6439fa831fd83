//! Headless Adapter
//!
//! [`ScriptedIo`] answers polls from a prepared queue, records every call it
//! receives and never sleeps. Once the queue is empty it fails the next poll,
//! so a simulated game always terminates.

use super::{GameIo, TextLine};
use crate::speed::SpeedTier;
use crate::symbol::Symbol;
use crate::{Result, SimonError};
use std::collections::VecDeque;
use std::time::Duration;

/// One recorded adapter call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoEvent {
    /// `display_text`
    Display(Vec<TextLine>),
    /// `highlight_symbol`
    Highlight(Symbol, SpeedTier),
    /// `poll_input` and what it returned
    Poll(Option<Symbol>),
    /// `show_pressed`
    Pressed(Symbol),
    /// `hold`
    Hold(Duration),
}

/// Adapter driven by a fixed input script
#[derive(Debug, Clone, Default)]
pub struct ScriptedIo {
    inputs: VecDeque<Option<Symbol>>,
    events: Vec<IoEvent>,
}

impl ScriptedIo {
    /// Create an adapter answering polls from `inputs` in order
    pub fn new(inputs: impl IntoIterator<Item = Option<Symbol>>) -> Self {
        ScriptedIo {
            inputs: inputs.into_iter().collect(),
            events: Vec::new(),
        }
    }

    /// Create an adapter whose every poll returns the next of `presses`
    pub fn with_presses(presses: impl IntoIterator<Item = Symbol>) -> Self {
        Self::new(presses.into_iter().map(Some))
    }

    /// Queue more poll results
    pub fn push_inputs(&mut self, inputs: impl IntoIterator<Item = Option<Symbol>>) {
        self.inputs.extend(inputs);
    }

    /// Every call received so far
    pub fn events(&self) -> &[IoEvent] {
        &self.events
    }

    /// Drop the recorded calls
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Poll results not consumed yet
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Number of polls answered
    pub fn polls(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, IoEvent::Poll(_)))
            .count()
    }

    /// Symbols highlighted, in order
    pub fn highlighted(&self) -> Vec<Symbol> {
        self.events
            .iter()
            .filter_map(|event| match event {
                IoEvent::Highlight(symbol, _) => Some(*symbol),
                _ => None,
            })
            .collect()
    }

    /// Text of every screen drawn, one `Vec` per `display_text` call
    pub fn screens(&self) -> Vec<Vec<String>> {
        self.events
            .iter()
            .filter_map(|event| match event {
                IoEvent::Display(lines) => {
                    Some(lines.iter().map(|line| line.text.clone()).collect())
                }
                _ => None,
            })
            .collect()
    }
}

impl GameIo for ScriptedIo {
    fn display_text(&mut self, lines: &[TextLine]) -> Result<()> {
        self.events.push(IoEvent::Display(lines.to_vec()));
        Ok(())
    }

    fn highlight_symbol(&mut self, symbol: Symbol, tier: SpeedTier) -> Result<()> {
        self.events.push(IoEvent::Highlight(symbol, tier));
        Ok(())
    }

    fn poll_input(&mut self) -> Result<Option<Symbol>> {
        let next = self
            .inputs
            .pop_front()
            .ok_or_else(|| SimonError::Adapter("input script exhausted".to_string()))?;
        self.events.push(IoEvent::Poll(next));
        Ok(next)
    }

    fn show_pressed(&mut self, symbol: Symbol) -> Result<()> {
        self.events.push(IoEvent::Pressed(symbol));
        Ok(())
    }

    fn hold(&mut self, duration: Duration) -> Result<()> {
        self.events.push(IoEvent::Hold(duration));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls() {
        let mut io = ScriptedIo::with_presses([Symbol::Circle]);
        io.display_text(&[TextLine::centered("Go!", 32)]).unwrap();
        io.highlight_symbol(Symbol::Square, SpeedTier::Medium).unwrap();
        assert_eq!(io.poll_input().unwrap(), Some(Symbol::Circle));
        io.show_pressed(Symbol::Circle).unwrap();
        io.hold(Duration::from_millis(5)).unwrap();

        assert_eq!(io.events().len(), 5);
        assert_eq!(io.highlighted(), vec![Symbol::Square]);
        assert_eq!(io.screens(), vec![vec!["Go!".to_string()]]);
        assert_eq!(io.polls(), 1);
    }

    #[test]
    fn test_exhausted_script_is_an_adapter_error() {
        let mut io = ScriptedIo::default();
        assert!(matches!(io.poll_input(), Err(SimonError::Adapter(_))));
    }

    #[test]
    fn test_push_inputs() {
        let mut io = ScriptedIo::default();
        io.push_inputs([None, Some(Symbol::X)]);
        assert_eq!(io.remaining_inputs(), 2);
        assert_eq!(io.poll_input().unwrap(), None);
    }
}
