use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::Array2;

use crate::*;
pub use cell::*;
pub use layout::*;

mod cell;
mod layout;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum FieldState {
    #[default]
    Active,
    Won,
    Lost,
}

impl FieldState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Grid-reveal puzzle: reveal safe cells, flag suspected mines.
#[derive(Clone, Debug, PartialEq)]
pub struct MineField {
    mine_layout: MineLayout,
    board: Array2<MineCell>,
    revealed: Vec<CellIndex>,
    flagged_count: Saturating<CellCount>,
    state: FieldState,
    triggered_mine: Option<Coord2>,
}

impl MineField {
    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        Self {
            mine_layout,
            board: Array2::default(size.to_nd_index()),
            revealed: Vec::new(),
            flagged_count: Saturating(0),
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn random(config: MinefieldConfig, rng: &mut impl RandomSource) -> Self {
        Self::new(MineLayout::random(config, rng))
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn mines_left(&self) -> isize {
        (self.mine_layout.mine_count() as isize) - (self.flagged_count.0 as isize)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Revealed cells in the order they were uncovered.
    pub fn revealed(&self) -> &[CellIndex] {
        &self.revealed
    }

    pub fn is_flagged(&self, index: CellIndex) -> bool {
        self.index_coords(index)
            .is_some_and(|coords| self.board[coords.to_nd_index()] == MineCell::Flagged)
    }

    pub fn cell(&self, index: CellIndex) -> Result<MineCell> {
        let coords = self.mine_layout.validate_index(index)?;
        Ok(self.board[coords.to_nd_index()])
    }

    pub fn adjacent_mine_count(&self, index: CellIndex) -> Result<u8> {
        let coords = self.mine_layout.validate_index(index)?;
        Ok(self.mine_layout.adjacent_mine_count(coords))
    }

    pub fn cell_view(&self, index: CellIndex) -> Result<CellView> {
        let coords = self.mine_layout.validate_index(index)?;
        let cell = self.board[coords.to_nd_index()];
        let has_mine = self.mine_layout.contains_mine(coords);

        Ok(match (self.state, cell, has_mine) {
            (FieldState::Lost, _, true) if self.triggered_mine == Some(coords) => {
                CellView::TriggeredMine
            }
            (FieldState::Lost, MineCell::Flagged, false) => CellView::Misflagged,
            (FieldState::Lost, MineCell::Flagged, true) => CellView::Flagged,
            (FieldState::Lost, _, true) => CellView::Mine,
            (FieldState::Won, _, true) => CellView::Flagged,
            (_, MineCell::Hidden, _) => CellView::Hidden,
            (_, MineCell::Flagged, _) => CellView::Flagged,
            (_, MineCell::Revealed(count), _) => CellView::Revealed(count),
        })
    }

    /// Toggles a flag on an unrevealed cell.
    pub fn flag(&mut self, index: CellIndex) -> Result<MarkOutcome> {
        use MarkOutcome::*;
        use MineCell::*;

        let coords = self.mine_layout.validate_index(index)?;
        if self.state.is_finished() {
            return Ok(NoChange);
        }

        let cell = &mut self.board[coords.to_nd_index()];
        Ok(match *cell {
            Hidden => {
                *cell = Flagged;
                self.flagged_count += 1;
                Changed
            }
            Flagged => {
                *cell = Hidden;
                self.flagged_count -= 1;
                Changed
            }
            Revealed(_) => NoChange,
        })
    }

    /// Uncovers a cell, flooding outwards from cells with no adjacent mines.
    pub fn reveal(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        let coords = self.mine_layout.validate_index(index)?;
        if self.state.is_finished() {
            return Ok(RevealOutcome::NoChange);
        }

        if !matches!(self.board[coords.to_nd_index()], MineCell::Hidden) {
            log::trace!("reveal ignored on {:?}", coords);
            return Ok(RevealOutcome::NoChange);
        }

        if self.mine_layout.contains_mine(coords) {
            log::debug!("mine hit at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.state = FieldState::Lost;
            return Ok(RevealOutcome::HitMine);
        }

        let mut to_visit = VecDeque::from([coords]);
        while let Some(visit_coords) = to_visit.pop_front() {
            // a cell may be queued by several zero neighbours, only the first visit counts
            if !matches!(self.board[visit_coords.to_nd_index()], MineCell::Hidden) {
                continue;
            }

            let adjacent_mines = self.mine_layout.adjacent_mine_count(visit_coords);
            self.board[visit_coords.to_nd_index()] = MineCell::Revealed(adjacent_mines);
            self.revealed
                .push(coords_to_index(visit_coords, self.mine_layout.size()));

            if adjacent_mines == 0 {
                let board = &self.board;
                to_visit.extend(
                    self.mine_layout
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| matches!(board[pos.to_nd_index()], MineCell::Hidden)),
                );
            }
        }

        if self.has_won() {
            log::debug!("mine field cleared");
            self.state = FieldState::Won;
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Win when revealed and mined cells together cover the grid.
    fn has_won(&self) -> bool {
        self.revealed.len() + usize::from(self.mine_layout.mine_count())
            == usize::from(self.mine_layout.total_cells())
    }

    fn index_coords(&self, index: CellIndex) -> Option<Coord2> {
        index_to_coords(index, self.mine_layout.size())
    }
}
