//! Pad/LCD Adapter Boundary
//!
//! Everything the game needs from the board: draw text, flash a pad, read a
//! pad, acknowledge a press and wait. Hardware, terminal and headless
//! adapters implement [`GameIo`]; the state machine only ever talks to this
//! trait.
//!
//! Polling is non-blocking. The blocking "wait for a pad" loop lives in the
//! core ([`wait_for_input`]) so the suspension point stays visible.

pub mod scripted;

pub use scripted::{IoEvent, ScriptedIo};

use crate::speed::SpeedTier;
use crate::symbol::Symbol;
use crate::Result;
use std::time::Duration;

/// LCD width in pixels
pub const LCD_WIDTH: u16 = 102;
/// LCD height in pixels
pub const LCD_HEIGHT: u16 = 64;
/// Horizontal centre of the LCD
pub const LCD_CENTER_X: u16 = 51;

/// One line of text, centred on `(x, y)` of the LCD canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    /// Text to draw
    pub text: String,
    /// Horizontal centre in pixels
    pub x: u16,
    /// Vertical centre in pixels
    pub y: u16,
}

impl TextLine {
    /// Text centred at `(x, y)`
    pub fn new(text: impl Into<String>, x: u16, y: u16) -> Self {
        TextLine {
            text: text.into(),
            x,
            y,
        }
    }

    /// Text centred horizontally on row `y`
    pub fn centered(text: impl Into<String>, y: u16) -> Self {
        Self::new(text, LCD_CENTER_X, y)
    }
}

/// Board capabilities consumed by the game
pub trait GameIo {
    /// Clear the screen and draw `lines`
    fn display_text(&mut self, lines: &[TextLine]) -> Result<()>;

    /// Light `symbol` for the tier's delay, then leave it dark for the same delay
    fn highlight_symbol(&mut self, symbol: Symbol, tier: SpeedTier) -> Result<()>;

    /// Single non-blocking check of the pads
    fn poll_input(&mut self) -> Result<Option<Symbol>>;

    /// Feedback for a recognized press
    fn show_pressed(&mut self, symbol: Symbol) -> Result<()>;

    /// Block for `duration`
    fn hold(&mut self, duration: Duration) -> Result<()>;
}

impl<T: GameIo + ?Sized> GameIo for &mut T {
    fn display_text(&mut self, lines: &[TextLine]) -> Result<()> {
        (**self).display_text(lines)
    }

    fn highlight_symbol(&mut self, symbol: Symbol, tier: SpeedTier) -> Result<()> {
        (**self).highlight_symbol(symbol, tier)
    }

    fn poll_input(&mut self) -> Result<Option<Symbol>> {
        (**self).poll_input()
    }

    fn show_pressed(&mut self, symbol: Symbol) -> Result<()> {
        (**self).show_pressed(symbol)
    }

    fn hold(&mut self, duration: Duration) -> Result<()> {
        (**self).hold(duration)
    }
}

/// Poll until some pad is pressed. There is no timeout.
pub fn wait_for_input<I: GameIo + ?Sized>(io: &mut I) -> Result<Symbol> {
    loop {
        if let Some(symbol) = io.poll_input()? {
            return Ok(symbol);
        }
    }
}

/// Poll until `wanted` is pressed, discarding every other pad
pub fn wait_for_symbol<I: GameIo + ?Sized>(io: &mut I, wanted: Symbol) -> Result<Symbol> {
    loop {
        let symbol = wait_for_input(io)?;
        if symbol == wanted {
            return Ok(symbol);
        }
        tracing::trace!(%symbol, %wanted, "ignoring pad");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_for_input_skips_empty_polls() {
        let mut io = ScriptedIo::new([None, None, Some(Symbol::Triangle)]);
        assert_eq!(wait_for_input(&mut io).unwrap(), Symbol::Triangle);
        assert_eq!(io.polls(), 3);
    }

    #[test]
    fn test_wait_for_symbol_discards_others() {
        let mut io = ScriptedIo::new([
            Some(Symbol::Square),
            None,
            Some(Symbol::Circle),
            Some(Symbol::X),
            Some(Symbol::Square),
        ]);
        assert_eq!(wait_for_symbol(&mut io, Symbol::X).unwrap(), Symbol::X);
        assert_eq!(io.remaining_inputs(), 1);
    }

    #[test]
    fn test_wait_fails_when_script_runs_out() {
        let mut io = ScriptedIo::new([None]);
        assert!(wait_for_input(&mut io).is_err());
    }

    #[test]
    fn test_centered_line() {
        let line = TextLine::centered("Go!", 32);
        assert_eq!(line, TextLine::new("Go!", LCD_CENTER_X, 32));
    }
}
