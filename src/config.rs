/// Parameters of a single run: the grid size and how many generations to advance
///
/// Built once (by the decoder or from command line options) and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    rows: usize,
    cols: usize,
    generations: usize,
}

impl RunConfig {
    /// Returns [`None`] if either dimension is zero
    pub fn new(rows: usize, cols: usize, generations: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        Some(Self {
            rows,
            cols,
            generations,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }
    #[inline]
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// The same grid size with a different generation count
    pub fn with_generations(self, generations: usize) -> Self {
        Self {
            generations,
            ..self
        }
    }
}
