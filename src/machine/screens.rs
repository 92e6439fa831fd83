//! LCD screens drawn by each state

use crate::io::TextLine;
use crate::symbol::Symbol;

/// Row of the pressed-pad label
const PRESSED_LABEL_Y: u16 = 40;

/// Countdown frames, each drawn alone at mid height
pub const COUNTDOWN_FRAMES: [&str; 4] = ["3", "2", "1", "Go!"];

fn rows(texts: &[&str], first_y: u16) -> Vec<TextLine> {
    texts
        .iter()
        .zip((first_y..).step_by(16))
        .map(|(text, y)| TextLine::centered(*text, y))
        .collect()
}

pub(crate) fn welcome() -> Vec<TextLine> {
    rows(&["Welcome to", "Simon Says", "Press X", "to Start"], 8)
}

pub(crate) fn countdown(frame: &str) -> Vec<TextLine> {
    vec![TextLine::centered(frame, 32)]
}

pub(crate) fn playing() -> Vec<TextLine> {
    rows(&["Playing", "Sequence!"], 24)
}

pub(crate) fn checking() -> Vec<TextLine> {
    rows(&["Checking", "Sequence!"], 8)
}

pub(crate) fn checking_pressed(symbol: Symbol) -> Vec<TextLine> {
    let info = symbol.info();
    let mut lines = checking();
    lines.push(TextLine::new(info.label, info.column, PRESSED_LABEL_Y));
    lines
}

pub(crate) fn good_job() -> Vec<TextLine> {
    vec![TextLine::centered("GOOD JOB!", 32)]
}

pub(crate) fn lost() -> Vec<TextLine> {
    rows(&["You Lost!", "Sorry,", "Thanks for", "Playing!"], 8)
}

pub(crate) fn congrats() -> Vec<TextLine> {
    rows(&["CONGRATS,!", "YOU WON!", "Thanks for", "Playing!"], 8)
}
