use std::ops::Add;

/// A cell coordinate on the grid, `row` first
///
/// The derived ordering compares `row` and then `col`, which is the
/// row-major order the grid stores its cells in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Moves by `(d_row, d_col)` and wraps the result onto a `rows × cols` torus
    ///
    /// Stepping off the top edge lands on the bottom row, stepping off the
    /// left edge lands on the last column, and so on for every edge and corner.
    #[inline]
    pub fn wrapping_offset(self, (d_row, d_col): (isize, isize), rows: usize, cols: usize) -> Self {
        Self {
            row: wrap(self.row, d_row, rows),
            col: wrap(self.col, d_col, cols),
        }
    }
}

/// `(index + delta) mod len`, never negative
#[inline]
fn wrap(index: usize, delta: isize, len: usize) -> usize {
    debug_assert!(len > 0, "wrapping on an empty axis");
    (index as isize + delta).rem_euclid(len as isize) as usize
}

impl Add for Pos {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            row: self.row + rhs.row,
            col: self.col + rhs.col,
        }
    }
}
