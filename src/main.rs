//! Headless simulator (default binary).
//!
//! Runs one session frame by frame at a fixed timestep: scripted actions
//! first, then random play. Logs go to stderr; stdout carries the optional
//! event stream and the final snapshot as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use blockfall::core::{FieldEvent, Listener, Session, SimpleRng};
use blockfall::settings;
use blockfall::types::{GameAction, TICK_MS};

/// Frames between random actions once the script runs out.
const RANDOM_ACTION_EVERY: u32 = 8;

#[derive(Debug, Parser)]
#[command(name = "blockfall-sim", about = "Run a headless blockfall session")]
struct Cli {
    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase verbosity level (default INFO, -v = DEBUG, -vv = TRACE)")]
    verbose: u8,

    #[arg(long, help = "TOML config file")]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 3600, help = "Number of frames to simulate")]
    frames: u32,

    #[arg(long, help = "Spawn sequence seed (overrides config)")]
    seed: Option<u32>,

    #[arg(
        long,
        value_delimiter = ',',
        value_parser = parse_action,
        help = "Actions applied one per frame before random play, e.g. moveLeft,rotateCw"
    )]
    actions: Vec<GameAction>,

    #[arg(long, help = "Print every field event as a JSON line")]
    events: bool,
}

fn parse_action(s: &str) -> Result<GameAction, String> {
    GameAction::from_str(s).ok_or_else(|| format!("unknown action '{}'", s))
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_logging(verbose: u8) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(level_filter(verbose))
        .init();
}

fn event_printer() -> Listener {
    Box::new(|event: &FieldEvent| match serde_json::to_string(event) {
        Ok(line) => println!("{}", line),
        Err(err) => warn!(%err, "failed to encode event"),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = settings::load(cli.config.as_deref()).context("failed to load settings")?;
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    info!(?config, frames = cli.frames, "starting simulation");

    let listeners = if cli.events {
        vec![event_printer()]
    } else {
        Vec::new()
    };
    let mut rng = SimpleRng::new(config.seed ^ 0x9E37_79B9);
    let mut session = Session::new(config, listeners).context("invalid game config")?;
    session.start();

    let mut script = cli.actions.iter().copied();
    let mut frames_run = 0;
    for frame in 0..cli.frames {
        if session.game_over() {
            break;
        }
        frames_run = frame + 1;

        let action = match script.next() {
            Some(action) => Some(action),
            None if frame % RANDOM_ACTION_EVERY == 0 => Some(random_action(&mut rng)),
            None => None,
        };
        if let Some(action) = action {
            session.apply_action(action);
        }
        session.tick(TICK_MS);
    }

    info!(
        frames = frames_run,
        score = session.score(),
        rows = session.rows_cleared(),
        blocks = session.blocks_placed(),
        game_over = session.game_over(),
        "simulation finished"
    );

    let snapshot = serde_json::to_string_pretty(&session.snapshot())
        .context("failed to encode snapshot")?;
    println!("{}", snapshot);
    Ok(())
}

/// Random play never pauses, so a run always reaches its frame budget or game over.
fn random_action(rng: &mut SimpleRng) -> GameAction {
    const PLAYABLE: [GameAction; 7] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::RotateCw,
        GameAction::RotateCcw,
        GameAction::Stash,
        GameAction::InstantPlace,
    ];
    PLAYABLE[rng.below(PLAYABLE.len() as u32) as usize]
}
