use crate::{Grid, Pos};

/// `(d_row, d_col)` of the 8 cells around a center, row by row
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The 8 toroidal neighbors of `pos`
///
/// Every edge wraps onto the opposite edge, so a corner's diagonal neighbor
/// is the opposite corner. On grids narrower than 3 cells along an axis the
/// wrapped positions repeat, and may include `pos` itself.
pub fn neighbors(pos: Pos, rows: usize, cols: usize) -> impl Iterator<Item = Pos> {
    NEIGHBOR_OFFSETS
        .into_iter()
        .map(move |offset| pos.wrapping_offset(offset, rows, cols))
}

/// Number of alive cells among the 8 toroidal neighbors of `pos`, always `0..=8`
pub fn live_neighbors(grid: &Grid, pos: Pos) -> u8 {
    neighbors(pos, grid.rows(), grid.cols())
        .filter(|&n| grid[n].is_alive())
        .count() as u8
}
