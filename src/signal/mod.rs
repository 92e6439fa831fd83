//! Signal Source Domain
//!
//! Produces the symbol appended to the sequence at the start of each round.
//! The source is a trait so the game can run on a seeded generator, an
//! entropy-seeded one, or a fixed script.

pub mod scripted;

pub use scripted::ScriptedSignal;

use crate::symbol::{Symbol, SYMBOL_COUNT};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of new sequence symbols
pub trait SignalSource {
    /// Draw the next symbol, advancing internal state
    fn next_symbol(&mut self) -> Symbol;
}

impl<S: SignalSource + ?Sized> SignalSource for &mut S {
    fn next_symbol(&mut self) -> Symbol {
        (**self).next_symbol()
    }
}

impl<S: SignalSource + ?Sized> SignalSource for Box<S> {
    fn next_symbol(&mut self) -> Symbol {
        (**self).next_symbol()
    }
}

/// Uniform pseudo-random symbol source
#[derive(Debug, Clone)]
pub struct RandomSignal {
    rng: SmallRng,
}

impl RandomSignal {
    /// Reproducible source from an explicit seed
    pub fn seeded(seed: u64) -> Self {
        RandomSignal {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        RandomSignal {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl SignalSource for RandomSignal {
    fn next_symbol(&mut self) -> Symbol {
        let index = self.rng.random_range(0..SYMBOL_COUNT);
        Symbol::from_index(index).unwrap_or(Symbol::X)
    }
}
