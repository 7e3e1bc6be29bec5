//! Board module - manages the 2048 grid
//!
//! The board is a 4x4 grid of tiles where `0` means empty. Uses a fixed-size
//! array, so slides and queries never allocate.
//! Coordinates: (row, col), row 0 is the top edge, col 0 is the left edge.
//!
//! A slide works one line at a time: each row (left/right) or column (up/down)
//! is read with the target edge first, compacted, merged in a single scan,
//! padded back to full length and written back in board orientation.

use arrayvec::ArrayVec;

use crate::error::InvalidInput;
use crate::types::{Direction, Grid, Tile, BOARD_SIZE, CELL_COUNT, MAX_TILE};

/// One row or column, ordered with the target edge first
pub type Line = [Tile; BOARD_SIZE];

/// Result of sliding the whole board in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideResult {
    /// Whether any cell changed
    pub moved: bool,
    /// Sum of the values produced by merges
    pub points: u64,
    /// Number of merges performed
    pub merges: u32,
}

/// The 2048 board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[0; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from rows, checking every cell is 0 or a power of two in `2..=MAX_TILE`
    pub fn from_rows(rows: Grid) -> Result<Self, InvalidInput> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(InvalidInput::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Get tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get(row).and_then(|line| line.get(col)).copied()
    }

    /// Set tile at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        match self.cells.get_mut(row).and_then(|line| line.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Get a reference to the rows
    pub fn rows(&self) -> &Grid {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [[0; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value == 0 {
                    out.push((row, col));
                }
            }
        }
        out
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    pub fn tile_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn contains(&self, value: Tile) -> bool {
        self.cells.iter().flatten().any(|&v| v == value)
    }

    /// Check whether two horizontally or vertically adjacent cells hold the same tile
    pub fn has_adjacent_pair(&self) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let current = self.cells[row][col];
                if current == 0 {
                    continue;
                }
                if row + 1 < BOARD_SIZE && self.cells[row + 1][col] == current {
                    return true;
                }
                if col + 1 < BOARD_SIZE && self.cells[row][col + 1] == current {
                    return true;
                }
            }
        }
        false
    }

    /// Full board with no merge available
    pub fn is_locked(&self) -> bool {
        self.empty_count() == 0 && !self.has_adjacent_pair()
    }

    /// Read line `index` with the target edge of `direction` first
    pub fn read_line(&self, direction: Direction, index: usize) -> Line {
        let mut line = [0; BOARD_SIZE];
        for (i, slot) in line.iter_mut().enumerate() {
            let (row, col) = line_position(direction, index, i);
            *slot = self.cells[row][col];
        }
        line
    }

    /// Write `line` back (target edge first) into board orientation
    pub fn write_line(&mut self, direction: Direction, index: usize, line: &Line) {
        for (i, &value) in line.iter().enumerate() {
            let (row, col) = line_position(direction, index, i);
            self.cells[row][col] = value;
        }
    }

    /// Slide every line toward the edge named by `direction`
    pub fn slide(&mut self, direction: Direction) -> SlideResult {
        let mut result = SlideResult::default();
        for index in 0..BOARD_SIZE {
            let before = self.read_line(direction, index);
            let (after, points, merges) = slide_line(before);
            if after != before {
                result.moved = true;
                self.write_line(direction, index, &after);
            }
            result.points += points;
            result.merges += merges;
        }
        result
    }

    /// Check whether sliding in `direction` would change the board
    pub fn can_slide(&self, direction: Direction) -> bool {
        (0..BOARD_SIZE).any(|index| {
            let line = self.read_line(direction, index);
            slide_line(line).0 != line
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact, merge and pad a single line (target edge at index 0)
///
/// Returns the new line, the points gained and the merge count. Each tile
/// merges at most once: after a merge the scan continues past the new tile.
pub fn slide_line(line: Line) -> (Line, u64, u32) {
    let compacted: ArrayVec<Tile, BOARD_SIZE> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut out = [0; BOARD_SIZE];
    let mut points = 0u64;
    let mut merges = 0u32;
    let mut write = 0usize;
    let mut i = 0usize;
    while i < compacted.len() {
        let value = compacted[i];
        if i + 1 < compacted.len() && compacted[i + 1] == value {
            let merged = value * 2;
            out[write] = merged;
            points += merged as u64;
            merges += 1;
            i += 2;
        } else {
            out[write] = value;
            i += 1;
        }
        write += 1;
    }

    (out, points, merges)
}

fn is_valid_tile(value: Tile) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}

/// Board coordinates of position `i` along line `index`
#[inline(always)]
fn line_position(direction: Direction, index: usize, i: usize) -> (usize, usize) {
    let along = if direction.is_reversed() {
        BOARD_SIZE - 1 - i
    } else {
        i
    };
    if direction.is_horizontal() {
        (index, along)
    } else {
        (along, index)
    }
}
