mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use leaderboard_core::{Config, ScoreStore};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("leaderboard_core=info".parse()?)
                .add_directive("leaderboard_cli=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let mut config = load_config(&args);
    if let Some(dir) = args.scores_dir.clone() {
        config.scores_dir = dir;
    }
    let store = ScoreStore::from_config(&config);
    debug!("Using leaderboard at {}", store.path().display());

    let output = match &args.command {
        Command::Save { name, score, steps } => commands::save::run(&store, name, *score, *steps)?,
        Command::Board {
            score,
            player,
            format,
        } => commands::board::run(&store, *score, player.as_deref(), *format)?,
        Command::Export { output, format } => {
            commands::export::run(&store, output.as_deref(), *format)?
        }
        Command::History { name } => commands::history::run(&store, name.as_deref())?,
        Command::Replay { name, input, steps } => {
            commands::replay::run(&store, name, input, *steps)?
        }
    };

    print!("{}", output);
    Ok(())
}

fn load_config(args: &Cli) -> Config {
    match Config::load(&args.config) {
        Ok(c) => {
            info!("Loaded config from {:?}", args.config);
            c
        }
        Err(e) if e.is_not_found() => {
            debug!("No config at {:?}, using defaults", args.config);
            Config::default()
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    }
}
