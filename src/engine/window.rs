use crate::{Grid, Pos};

/// A rectangular view of the grid starting at `origin`, wrapping around the torus
///
/// The view is never larger than the grid itself, so no cell is shown twice.
pub struct GridWindow<'a> {
    grid: &'a Grid,
    origin: Pos,
    rows: usize,
    cols: usize,
}
impl<'a> GridWindow<'a> {
    pub fn new(grid: &'a Grid, origin: Pos, rows: usize, cols: usize) -> Self {
        Self {
            grid,
            origin: Pos::new(origin.row % grid.rows(), origin.col % grid.cols()),
            rows: rows.min(grid.rows()),
            cols: cols.min(grid.cols()),
        }
    }

    /// Window-relative positions of the alive cells, row-major
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| Pos::new(row, col)))
            .filter(move |&pos| self.grid[self.to_grid(pos)].is_alive())
    }

    fn to_grid(&self, pos: Pos) -> Pos {
        let pos = self.origin + pos;
        Pos::new(pos.row % self.grid.rows(), pos.col % self.grid.cols())
    }
}

impl std::fmt::Display for GridWindow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut last: Option<Pos> = None;
        for alive in self.iter() {
            // newlines to reach the row, then spaces to reach the column
            let (lines, padding) = match last {
                Some(last) if last.row == alive.row => (0, alive.col - last.col - 1),
                Some(last) => (alive.row - last.row, alive.col),
                None => (alive.row, alive.col),
            };
            write!(f, "{0:\n<1$}{0: <2$}█", "", lines, padding)?;
            last = Some(alive);
        }
        Ok(())
    }
}
