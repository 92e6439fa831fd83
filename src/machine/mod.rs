//! Game State Machine
//!
//! Welcome → Countdown → PlaySequence → CheckSequence → (Error | Congrats) →
//! Welcome, forever. [`Game`] owns the configuration, the signal source, the
//! board adapter and the [`GameSession`]; [`Game::step`] runs exactly one
//! state to completion.
//!
//! Losing a round is an ordinary transition to [`GameState::Error`]. An `Err`
//! out of [`Game::step`] means either the adapter failed or the session broke
//! a sequence invariant; both end the run.
//!
//! # Example
//!
//! ```
//! use simon_says::{Game, GameConfig, GameState, ScriptedIo, ScriptedSignal, Symbol};
//!
//! let io = ScriptedIo::with_presses([Symbol::X, Symbol::Circle]);
//! let source = ScriptedSignal::new([Symbol::Circle]);
//! let mut game = Game::new(GameConfig::with_capacity(1), source, io).unwrap();
//!
//! assert_eq!(game.step().unwrap().to, GameState::Countdown);
//! assert_eq!(game.step().unwrap().to, GameState::PlaySequence);
//! assert_eq!(game.step().unwrap().to, GameState::CheckSequence);
//! assert_eq!(game.step().unwrap().to, GameState::Congrats);
//! assert_eq!(game.step().unwrap().to, GameState::Welcome);
//! ```

mod screens;
pub mod session;
mod transitions;

pub use screens::COUNTDOWN_FRAMES;
pub use session::GameSession;

use crate::config::GameConfig;
use crate::io::GameIo;
use crate::signal::SignalSource;
use crate::Result;
use std::fmt;

/// Game state tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Waiting for the start pad
    #[default]
    Welcome,
    /// 3-2-1-Go
    Countdown,
    /// Drawing one symbol and playing the sequence back
    PlaySequence,
    /// Reading the player's reproduction
    CheckSequence,
    /// Round lost
    Error,
    /// Maximum level reached
    Congrats,
}

impl GameState {
    /// Short name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::Welcome => "welcome",
            GameState::Countdown => "countdown",
            GameState::PlaySequence => "play-sequence",
            GameState::CheckSequence => "check-sequence",
            GameState::Error => "error",
            GameState::Congrats => "congrats",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State whose action just ran
    pub from: GameState,
    /// State that runs next
    pub to: GameState,
}

/// Game driver
pub struct Game<S, I> {
    config: GameConfig,
    source: S,
    io: I,
    session: GameSession,
}

impl<S: SignalSource, I: GameIo> Game<S, I> {
    /// Create a game on the welcome screen. Fails if `config` does not validate.
    pub fn new(config: GameConfig, source: S, io: I) -> Result<Self> {
        config.validate()?;
        Ok(Game {
            session: GameSession::new(config.capacity),
            config,
            source,
            io,
        })
    }

    /// Run the current state's action and move to the next state
    pub fn step(&mut self) -> Result<Transition> {
        let from = self.session.state;
        let config = &self.config;
        let session = &mut self.session;
        let io = &mut self.io;

        let to = match from {
            GameState::Welcome => transitions::welcome(io, config)?,
            GameState::Countdown => transitions::countdown(io, config)?,
            GameState::PlaySequence => {
                transitions::play_sequence(session, &mut self.source, io, config)?
            }
            GameState::CheckSequence => transitions::check_sequence(session, io)?,
            GameState::Error => transitions::error(session, io, config)?,
            GameState::Congrats => transitions::congrats(session, io, config)?,
        };

        session.state = to;
        tracing::debug!(%from, %to, difficulty = session.difficulty, "state transition");
        Ok(Transition { from, to })
    }

    /// Step until a transition into `target`, giving up after `max_steps`
    pub fn run_until(&mut self, target: GameState, max_steps: usize) -> Result<Option<Transition>> {
        for _ in 0..max_steps {
            let transition = self.step()?;
            if transition.to == target {
                return Ok(Some(transition));
            }
        }
        Ok(None)
    }

    /// Run forever. Returns only when a step fails.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(capacity = self.config.capacity, "game started");
        loop {
            self.step()?;
        }
    }

    /// Current state
    pub fn state(&self) -> GameState {
        self.session.state
    }

    /// Session data
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Active configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Board adapter
    pub fn io(&self) -> &I {
        &self.io
    }

    /// Mutable board adapter
    pub fn io_mut(&mut self) -> &mut I {
        &mut self.io
    }

    /// Signal source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Take the game apart
    pub fn into_parts(self) -> (GameConfig, S, I, GameSession) {
        (self.config, self.source, self.io, self.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{IoEvent, ScriptedIo};
    use crate::sequence::SequenceError;
    use crate::signal::ScriptedSignal;
    use crate::speed::SpeedTier;
    use crate::symbol::Symbol;
    use crate::SimonError;

    fn game(
        capacity: usize,
        draws: &[Symbol],
        presses: &[Symbol],
    ) -> Game<ScriptedSignal, ScriptedIo> {
        Game::new(
            GameConfig::with_capacity(capacity),
            ScriptedSignal::new(draws.to_vec()),
            ScriptedIo::with_presses(presses.iter().copied()),
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Game::new(
            GameConfig::with_capacity(0),
            ScriptedSignal::new(Vec::new()),
            ScriptedIo::default(),
        );
        assert!(matches!(result, Err(SimonError::ConfigError(_))));
    }

    #[test]
    fn test_welcome_ignores_other_pads() {
        let mut game = Game::new(
            GameConfig::default(),
            ScriptedSignal::new(vec![Symbol::Square]),
            ScriptedIo::new([None, Some(Symbol::Circle), None, Some(Symbol::X)]),
        )
        .unwrap();
        let transition = game.step().unwrap();
        assert_eq!(
            transition,
            Transition {
                from: GameState::Welcome,
                to: GameState::Countdown
            }
        );
        assert_eq!(game.io().polls(), 4);
        assert_eq!(game.io().remaining_inputs(), 0);
    }

    #[test]
    fn test_countdown_frames_and_holds() {
        let mut game = game(4, &[Symbol::X], &[Symbol::X]);
        game.step().unwrap();
        game.io_mut().clear_events();
        assert_eq!(game.step().unwrap().to, GameState::PlaySequence);

        let screens = game.io().screens();
        assert_eq!(screens, vec![vec!["3"], vec!["2"], vec!["1"], vec!["Go!"]]);
        let holds = game
            .io()
            .events()
            .iter()
            .filter(|event| matches!(event, IoEvent::Hold(_)))
            .count();
        assert_eq!(holds, 4);
    }

    #[test]
    fn test_play_sequence_appends_at_difficulty() {
        let mut game = game(8, &[Symbol::Octagon], &[]);
        game.session.state = GameState::PlaySequence;
        assert_eq!(game.step().unwrap().to, GameState::CheckSequence);
        assert_eq!(game.session().sequence().as_slice(), &[Symbol::Octagon]);
        assert_eq!(game.io().highlighted(), vec![Symbol::Octagon]);
    }

    #[test]
    fn test_playback_uses_tier_of_difficulty() {
        let mut game = game(64, &[Symbol::Circle], &[]);
        for _ in 0..13 {
            game.session.sequence.append(Symbol::X).unwrap();
        }
        game.session.difficulty = 13;
        game.session.state = GameState::PlaySequence;
        game.step().unwrap();

        let tiers: Vec<SpeedTier> = game
            .io()
            .events()
            .iter()
            .filter_map(|event| match event {
                IoEvent::Highlight(_, tier) => Some(*tier),
                _ => None,
            })
            .collect();
        assert_eq!(tiers.len(), 14);
        assert!(tiers.iter().all(|&tier| tier == SpeedTier::Medium));
    }

    #[test]
    fn test_mismatch_short_circuits() {
        let mut game = game(8, &[], &[Symbol::X, Symbol::Circle, Symbol::Octagon]);
        for symbol in [Symbol::X, Symbol::Square, Symbol::Octagon] {
            game.session.sequence.append(symbol).unwrap();
        }
        game.session.difficulty = 2;
        game.session.state = GameState::CheckSequence;

        assert_eq!(game.step().unwrap().to, GameState::Error);
        assert_eq!(game.io().polls(), 2);
        assert_eq!(game.io().remaining_inputs(), 1);
        assert_eq!(game.session().difficulty(), 2);
    }

    #[test]
    fn test_capacity_boundary_wins() {
        let mut game = game(3, &[], &[Symbol::X, Symbol::Square, Symbol::Circle]);
        for symbol in [Symbol::X, Symbol::Square, Symbol::Circle] {
            game.session.sequence.append(symbol).unwrap();
        }
        game.session.difficulty = 2;
        game.session.state = GameState::CheckSequence;

        assert_eq!(game.step().unwrap().to, GameState::Congrats);
        assert_eq!(game.session().difficulty(), 2);
    }

    #[test]
    fn test_end_screens_reset_session() {
        for end in [GameState::Error, GameState::Congrats] {
            let mut game = game(8, &[], &[]);
            for _ in 0..5 {
                game.session.sequence.append(Symbol::Triangle).unwrap();
            }
            game.session.difficulty = 5;
            game.session.state = end;

            assert_eq!(game.step().unwrap().to, GameState::Welcome);
            assert_eq!(game.session().difficulty(), 0);
            assert!(game.session().sequence().is_empty());
        }
    }

    #[test]
    fn test_broken_invariant_is_an_error() {
        // Difficulty ahead of the stored sequence
        let mut game = game(4, &[], &[Symbol::X, Symbol::X]);
        game.session.sequence.append(Symbol::X).unwrap();
        game.session.difficulty = 1;
        game.session.state = GameState::CheckSequence;

        let result = game.step();
        assert!(matches!(
            result,
            Err(SimonError::Sequence(SequenceError::OutOfRange { index: 1, len: 1 }))
        ));
    }

    #[test]
    fn test_run_stops_on_adapter_error() {
        let mut game = game(4, &[Symbol::X], &[Symbol::Square]);
        assert!(matches!(game.run(), Err(SimonError::Adapter(_))));
        assert_eq!(game.state(), GameState::Welcome);
    }

    #[test]
    fn test_run_until() {
        let mut game = game(4, &[Symbol::Circle], &[Symbol::X]);
        let transition = game.run_until(GameState::CheckSequence, 10).unwrap();
        assert_eq!(
            transition,
            Some(Transition {
                from: GameState::PlaySequence,
                to: GameState::CheckSequence
            })
        );
        assert_eq!(game.run_until(GameState::Congrats, 0).unwrap(), None);
    }
}
