use ndarray::{Array2, ArrayView2, ArrayViewMut2, s};
use smallvec::SmallVec;

use crate::Direction;

/// Tile value; zero marks an empty cell, anything else is a power of two.
pub type Tile = u32;

/// Row width every move works on.
pub const BOARD_WIDTH: usize = 4;

/// One row after sliding towards its start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedRow {
    pub cells: SmallVec<[Tile; BOARD_WIDTH]>,
    /// Sum of every tile produced by a merge.
    pub gained: u32,
}

/// Slides a row to the left, merging equal neighbours once each.
///
/// Zeros are dropped first, then each surviving pair of equal tiles becomes
/// one tile of double value; a freshly merged tile never merges again in the
/// same pass. The result is padded with zeros back to the input width.
pub fn merge_left(row: impl IntoIterator<Item = Tile>) -> MergedRow {
    let mut cells = SmallVec::new();
    let mut gained = 0;
    let mut width = 0;
    let mut pending: Option<Tile> = None;

    for tile in row {
        width += 1;
        if tile == 0 {
            continue;
        }
        match pending.take() {
            Some(prev) if prev == tile => {
                let merged = prev * 2;
                gained += merged;
                cells.push(merged);
            }
            Some(prev) => {
                cells.push(prev);
                pending = Some(tile);
            }
            None => pending = Some(tile),
        }
    }
    cells.extend(pending);
    cells.resize(width, 0);

    MergedRow { cells, gained }
}

/// Reorients the board so that `direction` becomes "left".
///
/// Up is a transpose, right reverses each row, down is a transpose followed
/// by reversing each row. Applying the same view to the output undoes it.
fn orient(view: ArrayView2<'_, Tile>, direction: Direction) -> ArrayView2<'_, Tile> {
    match direction {
        Direction::Left => view,
        Direction::Right => view.slice_move(s![.., ..;-1]),
        Direction::Up => view.reversed_axes(),
        Direction::Down => view.reversed_axes().slice_move(s![.., ..;-1]),
    }
}

fn orient_mut(view: ArrayViewMut2<'_, Tile>, direction: Direction) -> ArrayViewMut2<'_, Tile> {
    match direction {
        Direction::Left => view,
        Direction::Right => view.slice_move(s![.., ..;-1]),
        Direction::Up => view.reversed_axes(),
        Direction::Down => view.reversed_axes().slice_move(s![.., ..;-1]),
    }
}

/// Applies a directional move to the whole board.
pub fn slide(cells: &Array2<Tile>, direction: Direction) -> (Array2<Tile>, u32) {
    let mut slid = Array2::zeros(cells.raw_dim());
    let mut gained = 0;

    let source = orient(cells.view(), direction);
    let mut target = orient_mut(slid.view_mut(), direction);
    for (src_row, mut dst_row) in source.rows().into_iter().zip(target.rows_mut()) {
        let merged = merge_left(src_row.iter().copied());
        gained += merged.gained;
        for (slot, tile) in dst_row.iter_mut().zip(merged.cells) {
            *slot = tile;
        }
    }

    (slid, gained)
}
