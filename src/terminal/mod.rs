//! Terminal Pad/LCD Adapter
//!
//! Plays the game in a raw-mode terminal. The 102×64 LCD is drawn as a
//! 17×8 character grid (one cell per 6×8 font glyph) inside a frame, with the
//! five pads underneath. Keys `1`–`5` touch the pads, `q` or `Esc` quits.

use crate::config::TimingConfig;
use crate::io::{GameIo, TextLine, LCD_HEIGHT, LCD_WIDTH};
use crate::speed::SpeedTier;
use crate::symbol::{LedMask, Symbol, SYMBOL_TABLE};
use crate::{Result, SimonError};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

/// Font cell width in LCD pixels
const GLYPH_WIDTH: u16 = 6;
/// Font cell height in LCD pixels
const GLYPH_HEIGHT: u16 = 8;
/// LCD width in character cells
pub const GRID_COLS: u16 = LCD_WIDTH / GLYPH_WIDTH;
/// LCD height in character cells
pub const GRID_ROWS: u16 = LCD_HEIGHT / GLYPH_HEIGHT;
/// How long a single poll waits for a key event
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Grid cell of the first character of a centred line
pub fn grid_position(line: &TextLine) -> (u16, u16) {
    let width = line.text.chars().count() as u16;
    let center = line.x / GLYPH_WIDTH;
    let col = center
        .saturating_sub(width / 2)
        .min(GRID_COLS.saturating_sub(width));
    let row = (line.y / GLYPH_HEIGHT).min(GRID_ROWS - 1);
    (col, row)
}

/// Pad touched by a key, if any
pub fn key_to_symbol(code: KeyCode) -> Option<Symbol> {
    match code {
        KeyCode::Char(c @ '1'..='5') => Symbol::from_index(c as usize - '1' as usize),
        _ => None,
    }
}

fn is_quit(code: KeyCode) -> bool {
    matches!(code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
}

/// Raw-mode terminal board
pub struct TerminalIo {
    out: Stdout,
    timing: TimingConfig,
    screen: Vec<TextLine>,
    lit: LedMask,
}

impl TerminalIo {
    /// Switch the terminal to raw mode on the alternate screen
    pub fn new(timing: TimingConfig) -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, cursor::Hide)?;
        let mut board = TerminalIo {
            out,
            timing,
            screen: Vec::new(),
            lit: LedMask::empty(),
        };
        board.render()?;
        Ok(board)
    }

    fn render(&mut self) -> Result<()> {
        let border = format!("+{}+", "-".repeat(GRID_COLS as usize));
        queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0), Print(&border))?;
        for row in 0..GRID_ROWS {
            queue!(
                self.out,
                cursor::MoveTo(0, row + 1),
                Print("|"),
                cursor::MoveTo(GRID_COLS + 1, row + 1),
                Print("|")
            )?;
        }
        queue!(self.out, cursor::MoveTo(0, GRID_ROWS + 1), Print(&border))?;

        for line in &self.screen {
            let (col, row) = grid_position(line);
            let text: String = line.text.chars().take(GRID_COLS as usize).collect();
            queue!(self.out, cursor::MoveTo(col + 1, row + 1), Print(text))?;
        }

        let pad_row = GRID_ROWS + 3;
        for info in &SYMBOL_TABLE {
            let col = info.column / GLYPH_WIDTH;
            queue!(self.out, cursor::MoveTo(col, pad_row))?;
            if self.lit.contains(info.led) {
                queue!(
                    self.out,
                    SetAttribute(Attribute::Reverse),
                    Print(format!("[{}]", info.label)),
                    SetAttribute(Attribute::Reset)
                )?;
            } else {
                queue!(self.out, Print(format!("[{}]", info.label)))?;
            }
        }
        queue!(
            self.out,
            cursor::MoveTo(0, pad_row + 2),
            Print("pads: 1-5   quit: q")
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn set_leds(&mut self, lit: LedMask) -> Result<()> {
        self.lit = lit;
        self.render()
    }

    /// Sleep, then drop keys pressed meanwhile; only a quit key survives
    fn pause(&mut self, duration: Duration) -> Result<()> {
        thread::sleep(duration);
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && is_quit(key.code) {
                    return Err(SimonError::Interrupted);
                }
            }
        }
        Ok(())
    }
}

impl GameIo for TerminalIo {
    fn display_text(&mut self, lines: &[TextLine]) -> Result<()> {
        self.screen = lines.to_vec();
        self.render()
    }

    fn highlight_symbol(&mut self, symbol: Symbol, tier: SpeedTier) -> Result<()> {
        let delay = self.timing.tier_delay(tier);
        self.set_leds(symbol.led())?;
        self.pause(delay)?;
        self.set_leds(LedMask::empty())?;
        self.pause(delay)
    }

    fn poll_input(&mut self) -> Result<Option<Symbol>> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_quit(key.code) {
                    return Err(SimonError::Interrupted);
                }
                Ok(key_to_symbol(key.code))
            }
            Event::Resize(_, _) => {
                self.render()?;
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn show_pressed(&mut self, symbol: Symbol) -> Result<()> {
        self.set_leds(symbol.led())?;
        self.pause(self.timing.press_feedback())?;
        self.set_leds(LedMask::empty())
    }

    fn hold(&mut self, duration: Duration) -> Result<()> {
        self.pause(duration)
    }
}

impl Drop for TerminalIo {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_is_seventeen_by_eight() {
        assert_eq!(GRID_COLS, 17);
        assert_eq!(GRID_ROWS, 8);
    }

    #[test]
    fn test_centred_line_position() {
        let line = TextLine::centered("Simon Says", 24);
        assert_eq!(grid_position(&line), (3, 3));
    }

    #[test]
    fn test_pad_label_position() {
        assert_eq!(grid_position(&TextLine::new("1", 10, 40)), (1, 5));
        assert_eq!(grid_position(&TextLine::new("5", 90, 40)), (15, 5));
    }

    #[test]
    fn test_long_line_is_clamped() {
        let line = TextLine::new("a very long line of text", 100, 200);
        let (col, row) = grid_position(&line);
        assert_eq!(col, 0);
        assert_eq!(row, GRID_ROWS - 1);
    }

    #[test]
    fn test_keys() {
        assert_eq!(key_to_symbol(KeyCode::Char('1')), Some(Symbol::X));
        assert_eq!(key_to_symbol(KeyCode::Char('5')), Some(Symbol::Circle));
        assert_eq!(key_to_symbol(KeyCode::Char('6')), None);
        assert!(is_quit(KeyCode::Esc));
        assert!(!is_quit(KeyCode::Enter));
    }
}
