use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use minehunt_core::{CellCount, Coord, GameConfig, GameEngine, Snapshot};

use command::Command;

mod command;
mod view;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// JSON file with `width`, `height`, `mines` and `flags`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board width, overrides the config file
    #[arg(long)]
    width: Option<Coord>,

    /// Board height, overrides the config file
    #[arg(long)]
    height: Option<Coord>,

    /// Number of mines, overrides the config file
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Flag budget, overrides the config file
    #[arg(short, long)]
    flags: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every board as a JSON snapshot
    #[arg(long)]
    json: bool,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Could not read config file {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Could not parse config file {}", path.display()))?
            }
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(mines) = self.mines {
            config.mines = mines;
        }
        if let Some(flags) = self.flags {
            config.flags = flags;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = args.game_config()?;
    log::debug!("config: {:?}, seed: {:?}", config, args.seed);
    let mut engine = match args.seed {
        Some(seed) => GameEngine::with_seed(config, seed)?,
        None => GameEngine::new(config)?,
    };

    let mut out = io::stdout().lock();
    view::write_snapshot(&mut out, &Snapshot::from_engine(&engine), args.json)?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read from stdin")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        let updated = match command {
            Command::Reveal(coords) => engine.reveal(coords).map(|outcome| outcome.has_update()),
            Command::Flag(coords) => engine.toggle_flag(coords).map(|outcome| outcome.has_update()),
            Command::Quit => break,
        };

        match updated {
            Ok(true) => {
                view::write_snapshot(&mut out, &Snapshot::from_engine(&engine), args.json)?
            }
            Ok(false) => log::info!("{:?} changed nothing", command),
            Err(err) => writeln!(out, "{err}")?,
        }
        out.flush()?;

        if engine.is_finished() {
            break;
        }
    }

    view::write_result(&mut out, &Snapshot::from_engine(&engine))?;
    Ok(())
}
