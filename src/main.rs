//! Rock-Paper-Scissors-Lizard-Spock in the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Play with dramatic pauses and ASCII art
//! cargo run
//!
//! # Reproducible opponent, no pauses, no art
//! cargo run -- --seed 42 --fast --plain
//! ```
//!
//! Game output goes to stdout; logs go to stderr.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rpsls::session::{Session, SessionConfig};

#[derive(Parser)]
#[command(name = "rpsls")]
#[command(about = "Play Rock-Paper-Scissors-Lizard-Spock against the computer")]
#[command(version)]
struct Cli {
    /// Seed for the computer's choices and commentary
    #[arg(long)]
    seed: Option<u64>,

    /// Base pause between countdown lines, in seconds
    #[arg(long, default_value = "1.0")]
    delay: f64,

    /// Skip all pauses
    #[arg(long, conflicts_with = "delay")]
    fast: bool,

    /// Text only, no ASCII art
    #[arg(long)]
    plain: bool,

    /// Enable verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> SessionConfig {
        let mut config = SessionConfig::default()
            .with_delay(if self.fast { 0.0 } else { self.delay })
            .with_art(!self.plain);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let outcome = Session::new(&config, stdin.lock(), stdout.lock()).and_then(|mut s| s.run());
    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "game aborted");
            ExitCode::FAILURE
        }
    }
}
