use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinefieldConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl MinefieldConfig {
    pub const CLASSIC: Self = Self::new_unchecked((10, 10), 15);

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Rejects an empty board and a mine count that leaves no safe cell.
    pub fn checked(size: Coord2, mines: CellCount) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidCoords);
        }
        if mines >= mult(size.0, size.1) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for MinefieldConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Immutable mine placement for one game.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_indices(size: Coord2, mine_indices: &[CellIndex]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &index in mine_indices {
            let coords = index_to_coords(index, size).ok_or(GameError::InvalidCoords)?;
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    /// Places `config.mines` mines uniformly at random without replacement.
    pub fn random(config: MinefieldConfig, rng: &mut impl RandomSource) -> Self {
        let total_cells = config.total_cells();
        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());

        if config.mines >= total_cells {
            log::warn!(
                "Minefield already full, requested {} but only fits {}",
                config.mines,
                total_cells
            );
            mine_mask.fill(true);
            return Self::from_mine_mask(mine_mask);
        }

        let mut free_cells = total_cells;
        if let Some(cells) = mine_mask.as_slice_mut() {
            for _ in 0..config.mines {
                // pick the n-th free cell so no draw is ever wasted on a duplicate
                let mut place = rng.below(free_cells.into());
                for cell in cells.iter_mut().filter(|cell| !**cell) {
                    if place == 0 {
                        *cell = true;
                        break;
                    }
                    place -= 1;
                }
                free_cells -= 1;
            }
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<Coord2> {
        index_to_coords(index, self.size()).ok_or(GameError::InvalidCoords)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (
            rows.try_into().unwrap_or(Coord::MAX),
            cols.try_into().unwrap_or(Coord::MAX),
        )
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len().try_into().unwrap_or(CellCount::MAX)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbours, always fits
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}
