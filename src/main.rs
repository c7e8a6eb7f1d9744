use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use retro_snake::config::{BOARD_SIZE, DEFAULT_TICK_INTERVAL_MS, GameConfig};
use retro_snake::input::{GameInput, poll_input};
use retro_snake::renderer;
use retro_snake::session::GameSession;
use retro_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use retro_snake::theme::THEME_RETRO;
use retro_snake::ui::hud::HudInfo;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

/// Longest wait for input between redraws.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Cells per board side.
    #[arg(long = "board-size", default_value_t = BOARD_SIZE)]
    board_size: u16,

    /// Milliseconds between snake moves.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file; logging is off without it.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Include per-tick debug events in the log.
    #[arg(long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let config = match GameConfig::validate(cli.board_size, cli.tick_ms, cli.seed) {
        Ok(config) => config,
        Err(error) => Cli::command()
            .error(ErrorKind::ValueValidation, error)
            .exit(),
    };

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path, cli.verbose)?;
    }

    install_panic_hook();
    info!(
        board = config.bounds.width,
        tick_ms = cli.tick_ms,
        seed = ?config.seed,
        "starting"
    );

    run(&config)
}

fn run(config: &GameConfig) -> io::Result<()> {
    let mut terminal_session = TerminalSession::enter()?;
    let terminal = terminal_session.terminal_mut();
    let mut session = GameSession::new(config);

    loop {
        terminal.draw(|frame| {
            renderer::render(
                frame,
                session.state(),
                HudInfo {
                    best_score: session.best_score(),
                    theme: &THEME_RETRO,
                },
            )
        })?;

        let wait = session
            .timer()
            .time_until_fire(Instant::now())
            .map_or(FRAME_INTERVAL, |left| left.min(FRAME_INTERVAL));

        if let Some(game_input) = poll_input(wait)? {
            if game_input == GameInput::Quit {
                break;
            }

            session.handle_input(game_input, Instant::now());
        }

        session.update(Instant::now());
    }

    info!(best_score = session.best_score(), "quitting");
    Ok(())
}

fn init_logging(path: &Path, verbose: bool) -> io::Result<()> {
    let file = File::create(path)?;
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();

    Ok(())
}
