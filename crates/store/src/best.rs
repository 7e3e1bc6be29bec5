//! In-session best score tracking on top of a [`ScoreStore`].

use anyhow::Result;
use tracing::info;

use crate::file::ScoreStore;
use crate::types::BEST_SCORE_KEY;

#[derive(Debug, Clone)]
pub struct BestScore<S> {
    store: S,
    key: String,
    best: u64,
}

impl<S: ScoreStore> BestScore<S> {
    /// Read the stored best score under [`BEST_SCORE_KEY`]
    pub fn load(store: S) -> Result<Self> {
        Self::load_key(store, BEST_SCORE_KEY)
    }

    pub fn load_key(store: S, key: &str) -> Result<Self> {
        let best = store.load(key)?.unwrap_or(0);
        Ok(Self {
            store,
            key: key.to_string(),
            best,
        })
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Offer the current score; persists and returns true when it is a new best
    pub fn record(&mut self, score: u64) -> Result<bool> {
        if score <= self.best {
            return Ok(false);
        }
        self.store.save(&self.key, score)?;
        info!(previous = self.best, best = score, "new best score");
        self.best = score;
        Ok(true)
    }
}
