//! Fixed-size cell storage for the simulation.

use crate::Pos;
use std::ops::{Index, IndexMut};

/// The state of a single cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// A `rows × cols` grid of cells stored row-major
///
/// Both dimensions are at least one and never change once the grid exists;
/// the constructors return [`None`] instead of building an empty or ragged grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell dead
    pub fn new(rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        Some(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows.checked_mul(cols)?],
        })
    }

    /// Builds a grid from rows of cells
    ///
    /// Returns [`None`] when there are no rows, the first row is empty, or
    /// any row differs in length from the first.
    pub fn from_rows<I, R>(rows: I) -> Option<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Cell>,
    {
        let mut cells = Vec::new();
        let mut n_rows = 0;
        let mut n_cols = 0;
        for row in rows {
            let start = cells.len();
            cells.extend(row);
            let len = cells.len() - start;
            if n_rows == 0 {
                n_cols = len;
            } else if len != n_cols {
                return None;
            }
            n_rows += 1;
        }

        if n_rows == 0 || n_cols == 0 {
            return None;
        }
        Some(Self {
            rows: n_rows,
            cols: n_cols,
            cells,
        })
    }

    /// Creates a grid whose cells are decided by `f(pos)`
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Option<Self>
    where
        F: FnMut(Pos) -> Cell,
    {
        let mut grid = Self::new(rows, cols)?;
        for (i, cell) in grid.cells.iter_mut().enumerate() {
            *cell = f(Pos::new(i / cols, i % cols));
        }
        Some(grid)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Sets the cell at `pos`
    ///
    /// # Panics
    /// If `pos` is outside the grid.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self[pos] = cell;
    }

    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Positions of every alive cell in row-major order
    pub fn alive(&self) -> impl Iterator<Item = Pos> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(i, _)| Pos::new(i / cols, i % cols))
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Row-major backing storage, for writing a whole generation at once
    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    #[inline]
    fn offset(&self, pos: Pos) -> usize {
        pos.row * self.cols + pos.col
    }
}

impl Index<Pos> for Grid {
    type Output = Cell;

    #[inline]
    fn index(&self, pos: Pos) -> &Self::Output {
        assert!(
            pos.row < self.rows && pos.col < self.cols,
            "{:?} is outside a {}x{} grid",
            pos,
            self.rows,
            self.cols
        );
        &self.cells[self.offset(pos)]
    }
}

impl IndexMut<Pos> for Grid {
    #[inline]
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        assert!(
            pos.row < self.rows && pos.col < self.cols,
            "{:?} is outside a {}x{} grid",
            pos,
            self.rows,
            self.cols
        );
        let offset = self.offset(pos);
        &mut self.cells[offset]
    }
}
