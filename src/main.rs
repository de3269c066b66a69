//! TETRS engine runner
//!
//! A headless host: plays a key script or lets a seeded autoplayer mash
//! buttons, then prints what happened as JSON.

use anyhow::Context;
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::PathBuf;
use tetrs_engine::{Command, Game, KeyMap, Outcome, Settings, Snapshot};

/// Headless runner for the TETRS engine
#[derive(Debug, Parser)]
#[command(name = "tetrs-engine", version, about = "Play the TETRS engine headless and print a JSON summary")]
struct Args {
    /// Piece sequence seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,
    /// Whitespace-separated key names to play, e.g. "left up space"
    #[arg(long)]
    keys: Option<String>,
    /// Settings file to use instead of the platform config directory
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write the current settings to the config directory and exit
    #[arg(long)]
    write_config: bool,
}

/// How one game went
#[derive(Debug, Serialize)]
struct GameSummary {
    score: u64,
    lines: u32,
    pieces: u32,
    ticks: u64,
    defeated: bool,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    games: Vec<GameSummary>,
    final_state: Snapshot,
}

/// Picks commands at random; roughly half the frames it leaves the piece alone
struct Autoplayer {
    rng: ChaCha8Rng,
}

impl Autoplayer {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed ^ 0x5EED),
        }
    }

    fn next_command(&mut self) -> Option<Command> {
        if self.rng.gen_bool(0.5) {
            return None;
        }
        let commands = Command::all();
        Some(commands[self.rng.gen_range(0..commands.len())])
    }
}

fn summarize(game: &Game, ticks: u64) -> GameSummary {
    let score = game.score();
    GameSummary {
        score: score.points,
        lines: score.lines,
        pieces: score.pieces,
        ticks,
        defeated: game.is_game_over(),
    }
}

/// Feed each scripted command followed by one tick
fn run_script(game: &mut Game, commands: &[Command]) -> GameSummary {
    let mut ticks = 0;
    for &command in commands {
        if game.handle_input(command) == Outcome::Defeat {
            break;
        }
        ticks += 1;
        if game.tick() == Outcome::Defeat {
            break;
        }
    }
    tracing::info!("Script finished after {} commands", commands.len());
    summarize(game, ticks)
}

/// Play until defeat or the tick cap, restarting between games
fn run_autoplay(game: &mut Game, seed: u64, games: u32, max_ticks: u64) -> Vec<GameSummary> {
    let mut player = Autoplayer::new(seed);
    let mut summaries = Vec::new();

    for index in 0..games.max(1) {
        if index > 0 {
            game.start();
        }
        let mut ticks = 0;
        while ticks < max_ticks && !game.is_game_over() {
            if let Some(command) = player.next_command() {
                game.handle_input(command);
            }
            if !game.is_game_over() {
                game.tick();
                ticks += 1;
            }
        }
        if !game.is_game_over() {
            tracing::warn!("Game {} hit the {} tick cap", index + 1, max_ticks);
        }
        let summary = summarize(game, ticks);
        tracing::info!(
            "Game {} over: score={} lines={} pieces={}",
            index + 1,
            summary.score,
            summary.lines,
            summary.pieces
        );
        summaries.push(summary);
    }

    summaries
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Generate session ID for this instance
    let session_id: u32 = rand::random();

    // Setup tracing to a log file in the temp directory
    let log_dir = std::env::temp_dir().join("tetrs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;
    let log_file = format!("{:08x}.log", session_id);
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tetrs_engine=debug".parse()?),
        )
        .with_ansi(false)
        .init();

    tracing::info!(
        "TETRS engine starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    let settings = match &args.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load(),
    };
    settings.validate()?;

    if args.write_config {
        let path = settings.save()?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let seed = args
        .seed
        .or(settings.gameplay.seed)
        .unwrap_or_else(rand::random);
    let mut game = Game::with_seed(settings.board.width, settings.board.height, seed);
    tracing::info!("Playing with seed {}", seed);

    let games = match &args.keys {
        Some(script) => {
            let commands = KeyMap::from_settings(&settings).parse_script(script)?;
            vec![run_script(&mut game, &commands)]
        }
        None => run_autoplay(
            &mut game,
            seed,
            settings.gameplay.games,
            settings.gameplay.max_ticks,
        ),
    };

    let summary = RunSummary {
        seed,
        games,
        final_state: game.snapshot(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
