//! Tile merge module - the 2048 game state machine
//!
//! Ties together the board, the score and move counters, the pause flag and an
//! injected random source for tile spawns. All state changes happen inside
//! [`TileMergeGame::apply_move`] and [`TileMergeGame::reset`]; the presentation
//! layer reads [`TileMergeGame::snapshot`] afterwards and never mutates the kernel.
//!
//! # Status
//!
//! ```text
//! in_progress --(a 2048 tile appears)--------------> won
//! in_progress --(board full, no adjacent pair)-----> lost
//! won         --(continued play locks the board)---> lost
//! ```
//!
//! Moves are still accepted after `won`; a `lost` board ignores moves until
//! [`TileMergeGame::reset`].

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::board::Board;
use crate::error::InvalidInput;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::TileMergeSnapshot;
use crate::types::{
    Direction, GameStatus, Grid, Tile, TileCommand, SEED_TILES, SPAWN_FOUR_PERCENT, WIN_TILE,
};

/// A tile placed by the game after a move or at setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// What a single `apply_move` did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Whether the grid changed. When false nothing else happened.
    pub moved: bool,
    /// Score gained from merges
    pub points: u64,
    /// Tile spawned after the slide
    pub spawned: Option<SpawnedTile>,
}

impl MoveOutcome {
    /// Outcome of a move that changed nothing
    pub const NONE: MoveOutcome = MoveOutcome {
        moved: false,
        points: 0,
        spawned: None,
    };
}

/// Complete 2048 game state
#[derive(Debug, Clone)]
pub struct TileMergeGame<R = SimpleRng> {
    board: Board,
    score: u64,
    moves: u32,
    status: GameStatus,
    paused: bool,
    rng: R,
}

impl<R: RandomSource> TileMergeGame<R> {
    /// Create a new game with two seed tiles drawn from `rng`
    pub fn new(rng: R) -> Self {
        let mut game = Self {
            board: Board::new(),
            score: 0,
            moves: 0,
            status: GameStatus::InProgress,
            paused: false,
            rng,
        };
        game.seed_tiles();
        game
    }

    /// Create a game from a hand-built grid (no seed tiles are added)
    ///
    /// The status is evaluated from the grid: a 2048 tile means `won`, a
    /// locked board means `lost`.
    pub fn from_grid(grid: Grid, rng: R) -> Result<Self, InvalidInput> {
        let board = Board::from_rows(grid)?;
        let status = if board.contains(WIN_TILE) {
            GameStatus::Won
        } else if board.is_locked() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        Ok(Self {
            board,
            score: 0,
            moves: 0,
            status,
            paused: false,
            rng,
        })
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid(&self) -> &Grid {
        self.board.rows()
    }

    /// True iff any cell holds the winning tile
    pub fn has_won(&self) -> bool {
        self.board.contains(WIN_TILE)
    }

    /// True iff the board is full and no two adjacent cells are equal
    pub fn is_game_over(&self) -> bool {
        self.board.is_locked()
    }

    /// Whether a move in `direction` would currently be accepted and change the grid
    pub fn can_move(&self, direction: Direction) -> bool {
        self.accepts_moves() && self.board.can_slide(direction)
    }

    /// Directions that would change the grid right now
    pub fn available_moves(&self) -> ArrayVec<Direction, 4> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.can_move(dir))
            .collect()
    }

    /// Slide, merge and spawn
    ///
    /// Returns [`MoveOutcome::NONE`] without touching any state when the board
    /// is lost, the game is paused, or the slide changes nothing.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if !self.accepts_moves() {
            debug!(
                direction = direction.as_str(),
                status = self.status.as_str(),
                paused = self.paused,
                "move ignored"
            );
            return MoveOutcome::NONE;
        }

        let slide = self.board.slide(direction);
        if !slide.moved {
            debug!(direction = direction.as_str(), "move did not change the board");
            return MoveOutcome::NONE;
        }

        self.score += slide.points;
        self.moves += 1;
        let spawned = self.spawn_tile();
        self.update_status();

        debug!(
            direction = direction.as_str(),
            points = slide.points,
            merges = slide.merges,
            score = self.score,
            moves = self.moves,
            "move applied"
        );

        MoveOutcome {
            moved: true,
            points: slide.points,
            spawned,
        }
    }

    /// Apply a command from the input layer
    ///
    /// Returns whether the command changed the game.
    pub fn apply_command(&mut self, command: TileCommand) -> bool {
        match command {
            TileCommand::Move(direction) => self.apply_move(direction).moved,
            TileCommand::Pause => {
                self.toggle_pause();
                true
            }
            TileCommand::Restart => {
                self.reset();
                true
            }
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
    }

    /// Start over: empty grid, zero counters, two fresh seed tiles
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.moves = 0;
        self.status = GameStatus::InProgress;
        self.paused = false;
        self.seed_tiles();
        info!("tile merge game reset");
    }

    pub fn snapshot(&self) -> TileMergeSnapshot {
        let mut out = TileMergeSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    pub fn snapshot_into(&self, out: &mut TileMergeSnapshot) {
        out.grid = *self.board.rows();
        out.score = self.score;
        out.moves = self.moves;
        out.status = self.status;
        out.paused = self.paused;
        out.max_tile = self.board.max_tile();
        out.locked = self.board.is_locked();
    }

    fn accepts_moves(&self) -> bool {
        self.status != GameStatus::Lost && !self.paused
    }

    fn seed_tiles(&mut self) {
        for _ in 0..SEED_TILES {
            self.spawn_tile();
        }
    }

    /// Place a 2 (or a 4, 10% of the time) on a uniformly chosen empty cell
    fn spawn_tile(&mut self) -> Option<SpawnedTile> {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let (row, col) = empty[self.rng.next_range(empty.len() as u32) as usize];
        let value = if self.rng.chance_percent(SPAWN_FOUR_PERCENT) {
            4
        } else {
            2
        };
        self.board.set(row, col, value);
        Some(SpawnedTile { row, col, value })
    }

    /// Win is checked before loss; a won game can still be lost later
    fn update_status(&mut self) {
        let next = if self.status == GameStatus::InProgress && self.has_won() {
            GameStatus::Won
        } else if self.is_game_over() {
            GameStatus::Lost
        } else {
            self.status
        };

        if next != self.status {
            info!(
                from = self.status.as_str(),
                to = next.as_str(),
                score = self.score,
                moves = self.moves,
                "tile merge status changed"
            );
            self.status = next;
        }
    }
}

impl Default for TileMergeGame {
    fn default() -> Self {
        Self::new(SimpleRng::default())
    }
}
