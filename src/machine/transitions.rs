//! State handlers
//!
//! One function per [`GameState`]. Each runs the state's entry action to
//! completion and returns the next state; only [`play_sequence`],
//! [`check_sequence`] and the two end screens touch the session.

use super::{screens, GameSession, GameState};
use crate::config::GameConfig;
use crate::io::{wait_for_input, wait_for_symbol, GameIo};
use crate::signal::SignalSource;
use crate::Result;

pub(super) fn welcome<I: GameIo + ?Sized>(io: &mut I, config: &GameConfig) -> Result<GameState> {
    io.display_text(&screens::welcome())?;
    let start = wait_for_symbol(io, config.start_symbol)?;
    io.show_pressed(start)?;
    Ok(GameState::Countdown)
}

pub(super) fn countdown<I: GameIo + ?Sized>(io: &mut I, config: &GameConfig) -> Result<GameState> {
    for frame in screens::COUNTDOWN_FRAMES {
        io.display_text(&screens::countdown(frame))?;
        io.hold(config.timing.countdown_step())?;
    }
    Ok(GameState::PlaySequence)
}

pub(super) fn play_sequence<S, I>(
    session: &mut GameSession,
    source: &mut S,
    io: &mut I,
    config: &GameConfig,
) -> Result<GameState>
where
    S: SignalSource + ?Sized,
    I: GameIo + ?Sized,
{
    let level = session.difficulty;
    debug_assert_eq!(
        session.sequence.len(),
        level,
        "sequence length must equal difficulty before a draw"
    );

    io.display_text(&screens::playing())?;

    let symbol = source.next_symbol();
    session.sequence.append(symbol)?;

    let tier = config.speed.speed_for(level);
    tracing::debug!(
        level = level + 1,
        %symbol,
        ?tier,
        duration = ?config.timing.playback_duration(level + 1, tier),
        "playing sequence"
    );

    for index in 0..=level {
        io.highlight_symbol(session.sequence.get(index)?, tier)?;
    }
    Ok(GameState::CheckSequence)
}

pub(super) fn check_sequence<I: GameIo + ?Sized>(
    session: &mut GameSession,
    io: &mut I,
) -> Result<GameState> {
    let level = session.difficulty;
    io.display_text(&screens::checking())?;

    for index in 0..=level {
        let pressed = wait_for_input(io)?;
        io.show_pressed(pressed)?;
        io.display_text(&screens::checking_pressed(pressed))?;

        let expected = session.sequence.get(index)?;
        if pressed != expected {
            tracing::info!(
                level = level + 1,
                position = index,
                %expected,
                %pressed,
                "wrong pad"
            );
            return Ok(GameState::Error);
        }
    }

    io.display_text(&screens::good_job())?;

    if level + 1 < session.sequence.capacity() {
        session.difficulty += 1;
        tracing::info!(level = session.difficulty + 1, "sequence correct, level up");
        Ok(GameState::PlaySequence)
    } else {
        tracing::info!(level = level + 1, "maximum level reached");
        Ok(GameState::Congrats)
    }
}

pub(super) fn error<I: GameIo + ?Sized>(
    session: &mut GameSession,
    io: &mut I,
    config: &GameConfig,
) -> Result<GameState> {
    io.display_text(&screens::lost())?;
    io.hold(config.timing.message_hold())?;
    session.reset_round();
    Ok(GameState::Welcome)
}

pub(super) fn congrats<I: GameIo + ?Sized>(
    session: &mut GameSession,
    io: &mut I,
    config: &GameConfig,
) -> Result<GameState> {
    io.display_text(&screens::congrats())?;
    io.hold(config.timing.message_hold())?;
    session.reset_round();
    Ok(GameState::Welcome)
}
