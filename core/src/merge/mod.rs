use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;
pub use slide::*;

mod slide;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Probability that a spawned tile is a 4 instead of a 2.
    pub four_probability: f64,
    /// Tiles placed on the empty board at start.
    pub starting_tiles: u8,
}

impl MergeConfig {
    pub const CLASSIC: Self = Self {
        four_probability: 0.1,
        starting_tiles: 2,
    };
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SlideOutcome {
    /// The game already ended.
    Ignored,
    /// Nothing could move in that direction; no tile was spawned.
    NoChange,
    Moved,
    GameOver,
}

impl SlideOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Moved | Self::GameOver)
    }
}

/// 4×4 sliding-tile merge puzzle.
#[derive(Clone, Debug)]
pub struct MergeBoard<R> {
    config: MergeConfig,
    cells: Array2<Tile>,
    score: u32,
    active: bool,
    rng: R,
}

impl<R: RandomSource> MergeBoard<R> {
    pub fn new(config: MergeConfig, rng: R) -> Self {
        let mut board = Self::from_rows([[0; BOARD_WIDTH]; BOARD_WIDTH], config, rng);
        for _ in 0..config.starting_tiles {
            board.add_new_tile();
        }
        board
    }

    /// Starts from an explicit layout, e.g. to replay a position.
    pub fn from_rows(rows: [[Tile; BOARD_WIDTH]; BOARD_WIDTH], config: MergeConfig, rng: R) -> Self {
        debug_assert!(
            rows.iter().flatten().all(|&tile| tile == 0 || (tile >= 2 && tile.is_power_of_two())),
            "tiles must be zero or a power of two"
        );
        Self {
            config,
            cells: Array2::from_shape_fn((BOARD_WIDTH, BOARD_WIDTH), |(row, col)| rows[row][col]),
            score: 0,
            active: true,
            rng,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn cells(&self) -> &Array2<Tile> {
        &self.cells
    }

    pub fn tile(&self, (row, col): Coord2) -> Option<Tile> {
        self.cells.get([usize::from(row), usize::from(col)]).copied()
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Slides every tile towards `direction`, spawning a tile if anything moved.
    pub fn slide(&mut self, direction: Direction) -> SlideOutcome {
        if !self.active {
            return SlideOutcome::Ignored;
        }

        let (slid, gained) = slide(&self.cells, direction);
        if slid == self.cells {
            log::trace!("slide {:?} changed nothing", direction);
            return SlideOutcome::NoChange;
        }

        self.cells = slid;
        self.score += gained;
        self.add_new_tile();

        if self.is_game_over() {
            log::debug!("merge board stuck, final score {}", self.score);
            self.active = false;
            SlideOutcome::GameOver
        } else {
            SlideOutcome::Moved
        }
    }

    /// Writes a 2 (or rarely a 4) into a uniformly chosen empty cell.
    pub fn add_new_tile(&mut self) -> Option<Coord2> {
        let empty: Vec<_> = self
            .cells
            .indexed_iter()
            .filter(|&(_, &tile)| tile == 0)
            .map(|(pos, _)| pos)
            .collect();
        if empty.is_empty() {
            return None;
        }

        let (row, col) = empty[self.rng.below(empty.len() as u32) as usize];
        let value = if self.rng.chance(1.0 - self.config.four_probability) {
            2
        } else {
            4
        };
        self.cells[[row, col]] = value;
        Some((row as Coord, col as Coord))
    }

    /// Full board with no horizontally or vertically adjacent equal tiles.
    pub fn is_game_over(&self) -> bool {
        if self.cells.iter().any(|&tile| tile == 0) {
            return false;
        }

        let (rows, cols) = self.cells.dim();
        for row in 0..rows {
            for col in 0..cols {
                let tile = self.cells[[row, col]];
                if col + 1 < cols && tile == self.cells[[row, col + 1]] {
                    return false;
                }
                if row + 1 < rows && tile == self.cells[[row + 1, col]] {
                    return false;
                }
            }
        }
        true
    }
}
