//! Pad Symbols
//!
//! The five capacitive pads of the game board. Each pad is identified by a
//! stable index and carries its display label, LCD column and LED bit in a
//! single lookup table so that the state machine never branches on hardware
//! constants.

use bitflags::bitflags;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of pads on the board
pub const SYMBOL_COUNT: usize = 5;

bitflags! {
    /// Port 1 output bits driving the pad LEDs (LED4..LED8 on P1.5..P1.1)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LedMask: u8 {
        /// LED8 on P1.1
        const LED8 = 1 << 1;
        /// LED7 on P1.2
        const LED7 = 1 << 2;
        /// LED6 on P1.3
        const LED6 = 1 << 3;
        /// LED5 on P1.4
        const LED5 = 1 << 4;
        /// LED4 on P1.5
        const LED4 = 1 << 5;
    }
}

impl LedMask {
    /// All five pad LEDs
    pub const PADS: LedMask = LedMask::LED4
        .union(LedMask::LED5)
        .union(LedMask::LED6)
        .union(LedMask::LED7)
        .union(LedMask::LED8);
}

/// A single pad symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    FromPrimitive,
    ToPrimitive,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    /// Pad 1
    X = 0,
    /// Pad 2
    Square = 1,
    /// Pad 3
    Octagon = 2,
    /// Pad 4
    Triangle = 3,
    /// Pad 5
    Circle = 4,
}

/// Static per-pad data: what to print and which LED to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolInfo {
    /// Symbol this row describes
    pub symbol: Symbol,
    /// Human-readable pad name
    pub name: &'static str,
    /// Label drawn on the LCD when the pad is pressed
    pub label: &'static str,
    /// LCD x position (pixel centre) of the pressed label
    pub column: u16,
    /// LED bit lit while the pad is highlighted
    pub led: LedMask,
}

/// Pad lookup table, indexed by [`Symbol::index`].
pub const SYMBOL_TABLE: [SymbolInfo; SYMBOL_COUNT] = [
    SymbolInfo {
        symbol: Symbol::X,
        name: "X",
        label: "1",
        column: 10,
        led: LedMask::LED8,
    },
    SymbolInfo {
        symbol: Symbol::Square,
        name: "Square",
        label: "2",
        column: 30,
        led: LedMask::LED7,
    },
    SymbolInfo {
        symbol: Symbol::Octagon,
        name: "Octagon",
        label: "3",
        column: 50,
        led: LedMask::LED6,
    },
    SymbolInfo {
        symbol: Symbol::Triangle,
        name: "Triangle",
        label: "4",
        column: 70,
        led: LedMask::LED5,
    },
    SymbolInfo {
        symbol: Symbol::Circle,
        name: "Circle",
        label: "5",
        column: 90,
        led: LedMask::LED4,
    },
];

impl Symbol {
    /// All symbols in index order
    pub const ALL: [Symbol; SYMBOL_COUNT] = [
        Symbol::X,
        Symbol::Square,
        Symbol::Octagon,
        Symbol::Triangle,
        Symbol::Circle,
    ];

    /// Look up a symbol by its pad index
    pub fn from_index(index: usize) -> Option<Symbol> {
        Symbol::from_usize(index)
    }

    /// Stable pad index (0..SYMBOL_COUNT)
    pub fn index(self) -> usize {
        // Discriminants are 0..=4, always representable
        self.to_usize().unwrap_or_default()
    }

    /// Table row for this pad
    pub fn info(self) -> &'static SymbolInfo {
        &SYMBOL_TABLE[self.index()]
    }

    /// LCD label for this pad
    pub fn label(self) -> &'static str {
        self.info().label
    }

    /// LED bit for this pad
    pub fn led(self) -> LedMask {
        self.info().led
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows_match_indices() {
        for (index, info) in SYMBOL_TABLE.iter().enumerate() {
            assert_eq!(info.symbol.index(), index);
            assert_eq!(Symbol::from_index(index), Some(info.symbol));
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Symbol::from_index(SYMBOL_COUNT), None);
    }

    #[test]
    fn test_leds_are_distinct_and_cover_pads() {
        let mut all = LedMask::empty();
        for symbol in Symbol::ALL {
            assert!(!all.intersects(symbol.led()));
            all |= symbol.led();
        }
        assert_eq!(all, LedMask::PADS);
        assert_eq!(LedMask::PADS.bits(), 0b0011_1110);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Symbol::X.label(), "1");
        assert_eq!(Symbol::Circle.label(), "5");
        assert_eq!(Symbol::Octagon.to_string(), "Octagon");
    }

    #[test]
    fn test_serde_lowercase_names() {
        let json = serde_json::to_string(&Symbol::Triangle).unwrap();
        assert_eq!(json, "\"triangle\"");
        let parsed: Symbol = serde_json::from_str("\"x\"").unwrap();
        assert_eq!(parsed, Symbol::X);
    }
}
