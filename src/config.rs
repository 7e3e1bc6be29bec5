//! Runtime configuration for the terminal shell.
//!
//! Environment variables provide defaults, command-line arguments override them.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

/// Which puzzle the shell runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameKind {
    #[default]
    TileMerge,
    CodeBreaker,
}

impl GameKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "2048" => Some(GameKind::TileMerge),
            "mastermind" => Some(GameKind::CodeBreaker),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::TileMerge => "2048",
            GameKind::CodeBreaker => "mastermind",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub game: GameKind,
    /// Fixed RNG seed; `None` seeds from the clock.
    pub seed: Option<u32>,
    pub best_score_path: PathBuf,
    /// Log file directory; `None` disables logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameKind::default(),
            seed: None,
            best_score_path: default_best_score_path(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Defaults from `ARCADE_SEED`, `ARCADE_BEST_SCORE_PATH` and `ARCADE_LOG_DIR`.
    pub fn from_env() -> Self {
        let seed = env::var("ARCADE_SEED").ok().and_then(|s| s.trim().parse().ok());

        let best_score_path = non_empty_var("ARCADE_BEST_SCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_best_score_path);

        let log_dir = non_empty_var("ARCADE_LOG_DIR").map(PathBuf::from);

        Self {
            game: GameKind::default(),
            seed,
            best_score_path,
            log_dir,
        }
    }

    /// Apply `[2048|mastermind] [--seed N] [--best-score-file PATH]` on top of `self`.
    ///
    /// `args` excludes the program name.
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    let seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                    self.seed = Some(seed);
                }
                "--best-score-file" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --best-score-file"))?;
                    self.best_score_path = PathBuf::from(v);
                }
                other => match GameKind::from_str(other) {
                    Some(game) if i == 0 => self.game = game,
                    _ => return Err(anyhow!("unknown argument: {}", other)),
                },
            }
            i += 1;
        }
        Ok(self)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn default_best_score_path() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("arcade-puzzles")
            .join("best-score.json"),
        None => PathBuf::from("arcade-puzzles-best-score.json"),
    }
}
