//! Terminal puzzle shell (default binary).
//!
//! Runs either 2048 or Mastermind in the terminal. Input arrives through
//! crossterm, the kernels own all game state, and each frame is drawn from a
//! fresh snapshot.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use arcade_puzzles::config::{AppConfig, GameKind};
use arcade_puzzles::core::{CodeBreaker, SimpleRng, TileMergeGame};
use arcade_puzzles::input::{
    map_code_key, map_mouse_event, map_tile_key, should_quit, EntryKey, GuessEntry, SwipeTracker,
    MIN_TERMINAL_SWIPE,
};
use arcade_puzzles::store::{BestScore, JsonFileStore};
use arcade_puzzles::term::{CodeView, TerminalRenderer, TileView};
use arcade_puzzles::types::{TileCommand, CODE_LENGTH};

const ENTER_PROMPT: &str = "Type 4 digits and press Enter.";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::from_env().with_args(&args)?;

    let _log_guard = match &config.log_dir {
        Some(dir) => Some(setup_logging(dir)?),
        None => None,
    };

    let seed = config.seed.unwrap_or_else(clock_seed);
    info!(game = config.game.as_str(), seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = match config.game {
        GameKind::TileMerge => run_tile_merge(&mut term, &config, seed),
        GameKind::CodeBreaker => run_code_breaker(&mut term, seed),
    };

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file only; the terminal belongs to the game.
fn setup_logging(dir: &std::path::Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, "arcade-puzzles.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    info!("Log file: {}/arcade-puzzles.log", dir.display());
    Ok(guard)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run_tile_merge(term: &mut TerminalRenderer, config: &AppConfig, seed: u32) -> Result<()> {
    let store = JsonFileStore::new(&config.best_score_path);
    let mut best = BestScore::load(store).with_context(|| {
        format!(
            "reading best score from {}",
            config.best_score_path.display()
        )
    })?;

    let mut game = TileMergeGame::new(SimpleRng::new(seed));
    let view = TileView::default();
    let mut swipe = SwipeTracker::new(MIN_TERMINAL_SWIPE);

    loop {
        let fb = view.render(&game.snapshot(), best.best());
        term.draw(&fb)?;

        let command = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                map_tile_key(key)
            }
            Event::Mouse(mouse) => map_mouse_event(&mut swipe, mouse),
            Event::Resize(_, _) => {
                // Coordinates from before the resize no longer line up.
                swipe.cancel();
                term.invalidate();
                None
            }
            _ => None,
        };

        let Some(command) = command else { continue };
        if game.apply_command(command) && matches!(command, TileCommand::Move(_)) {
            if let Err(e) = best.record(game.score()) {
                warn!("failed to save best score: {:#}", e);
            }
        }
    }
}

fn run_code_breaker(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut game = CodeBreaker::new(SimpleRng::new(seed));
    let mut entry = GuessEntry::new();
    let mut message = String::from(ENTER_PROMPT);

    loop {
        let fb = CodeView.render(&game.snapshot(), entry.slots(), entry.cursor(), &message);
        term.draw(&fb)?;

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                map_code_key(key)
            }
            Event::Resize(_, _) => {
                term.invalidate();
                None
            }
            _ => None,
        };

        match key {
            Some(EntryKey::Restart) => {
                game.reset();
                entry.clear();
                message = String::from(ENTER_PROMPT);
            }
            Some(_) if game.status().is_terminal() => {}
            Some(EntryKey::Digit(d)) => {
                entry.input_digit(d);
            }
            Some(EntryKey::Erase) => entry.erase(),
            Some(EntryKey::Submit) => match entry.guess() {
                Some(code) => {
                    let outcome = game.score_guess(&code)?;
                    entry.clear();
                    message = format!(
                        "{} exact, {} misplaced",
                        outcome.feedback.exact, outcome.feedback.partial
                    );
                }
                None => {
                    message = format!("Please enter all {} digits!", CODE_LENGTH);
                }
            },
            None => {}
        }
    }
}
