#[cfg(not(feature = "terminal"))]
fn main() {
    eprintln!(
        "The simon CLI requires the \"terminal\" feature. Rebuild with `--features terminal` to play."
    );
}

#[cfg(feature = "terminal")]
mod cli {
    use anyhow::{Context, Result};
    use clap::Parser;
    use std::path::PathBuf;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    use simon_says::{load_config, Game, GameConfig, RandomSignal, SimonError, TerminalIo};

    #[derive(Parser, Debug)]
    #[command(name = "simon")]
    #[command(about = "Simon Says memory game on five terminal pads")]
    struct Args {
        /// Seed for the pad sequence (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum sequence length, overrides the configuration file
        #[arg(long)]
        capacity: Option<usize>,
    }

    fn init_logging() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }

    fn build_config(args: &Args) -> Result<GameConfig> {
        let mut config = match &args.config {
            Some(path) => load_config(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(capacity) = args.capacity {
            config.capacity = capacity;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();
        init_logging();

        let config = build_config(&args)?;
        let source = match args.seed {
            Some(seed) => RandomSignal::seeded(seed),
            None => RandomSignal::from_entropy(),
        };
        tracing::info!(seed = ?args.seed, capacity = config.capacity, "starting simon");

        let io = TerminalIo::new(config.timing)?;
        let mut game = Game::new(config, source, io)?;
        match game.run() {
            Err(SimonError::Interrupted) => Ok(()),
            Err(err) => Err(err.into()),
            Ok(()) => Ok(()),
        }
    }
}

#[cfg(feature = "terminal")]
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
