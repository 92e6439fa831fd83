//! Simon Says memory-game controller
//!
//! Five capacitive pads with LEDs and a small LCD. The game lights a growing
//! pseudo-random sequence of pads; the player repeats it by touching the pads
//! in order. Every correct repetition adds one pad and, past fixed
//! breakpoints, speeds up playback. A wrong pad ends the game; repeating a
//! sequence of the maximum length wins it.
//!
//! # Features
//! - Explicit state machine (`Welcome → Countdown → PlaySequence →
//!   CheckSequence → Error | Congrats → Welcome`)
//! - Seedable, injectable signal source
//! - Bounded sequence store with checked access
//! - Configurable difficulty breakpoints, capacity and pacing (JSON)
//! - Board access through a single adapter trait ([`GameIo`])
//!
//! # Crate feature flags
//! - `terminal` (opt-in): crossterm pad/LCD adapter and the interactive `simon` binary
//!
//! # Quick start
//! ```no_run
//! use simon_says::{Game, GameConfig, RandomSignal, ScriptedIo, Symbol};
//!
//! let io = ScriptedIo::with_presses([Symbol::X]);
//! let mut game = Game::new(GameConfig::default(), RandomSignal::seeded(42), io).unwrap();
//! // Runs until the adapter fails; the scripted adapter fails once its input runs out
//! let _ = game.run();
//! ```

#![warn(missing_docs)]

pub mod config; // Tunables and JSON loading
pub mod io; // Pad/LCD adapter boundary
pub mod machine; // Game state machine
pub mod sequence; // Bounded sequence store
pub mod signal; // Symbol generation
pub mod speed; // Difficulty to pacing
pub mod symbol; // Pads and lookup table
#[cfg(feature = "terminal")]
pub mod terminal; // Terminal adapter

/// Error types for game operations
#[derive(thiserror::Error, Debug)]
pub enum SimonError {
    /// Sequence store invariant violated by the state machine
    #[error("Sequence invariant violated: {0}")]
    Sequence(#[from] sequence::SequenceError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// IO error from filesystem or terminal
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Board adapter failure
    #[error("Adapter error: {0}")]
    Adapter(String),

    /// Player asked to quit
    #[error("Interrupted by user")]
    Interrupted,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<String> for SimonError {
    fn from(msg: String) -> Self {
        SimonError::Other(msg)
    }
}

impl From<&str> for SimonError {
    fn from(msg: &str) -> Self {
        SimonError::Other(msg.to_string())
    }
}

/// Result type for game operations
pub type Result<T> = std::result::Result<T, SimonError>;

// Public API exports
pub use config::{loader::load_config, ConfigLoader, GameConfig, TimingConfig};
pub use io::{wait_for_input, wait_for_symbol, GameIo, IoEvent, ScriptedIo, TextLine};
pub use machine::{Game, GameSession, GameState, Transition};
pub use sequence::{SequenceError, SequenceStore, DEFAULT_CAPACITY};
pub use signal::{RandomSignal, ScriptedSignal, SignalSource};
pub use speed::{speed_for, SpeedPolicy, SpeedTier};
pub use symbol::{LedMask, Symbol, SymbolInfo, SYMBOL_COUNT, SYMBOL_TABLE};
#[cfg(feature = "terminal")]
pub use terminal::TerminalIo;
