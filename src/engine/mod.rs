mod neighbors;
mod rule;
mod window;

pub use self::neighbors::{NEIGHBOR_OFFSETS, live_neighbors, neighbors};
pub use self::window::GridWindow;
use crate::{Cell, Grid, Pos};
use rayon::prelude::*;

/// Owns the current generation and a second buffer the next one is written into
///
/// Each step reads only from the current grid, writes every cell of the
/// buffer, and then swaps the two. The storage of both grids is reused for
/// the whole run.
#[derive(Debug, Clone)]
pub struct LifeEngine {
    current: Grid,
    next: Grid,
    generation: usize,
}

impl LifeEngine {
    pub fn new(grid: Grid) -> Self {
        let next = grid.clone();
        Self {
            current: grid,
            next,
            generation: 0,
        }
    }

    pub fn next_generation(&mut self) {
        write_generation(&self.current, self.next.cells_mut());
        self.swap();
    }

    /// Same result as [`LifeEngine::next_generation`], with rows computed on the rayon pool
    pub fn next_generation_parallel(&mut self) {
        let cols = self.current.cols();
        let current = &self.current;
        self.next
            .cells_mut()
            .par_chunks_exact_mut(cols)
            .enumerate()
            .for_each(|(row, cells)| write_row(current, row, cells));
        self.swap();
    }

    /// Runs `generations` steps
    pub fn advance(&mut self, generations: usize) {
        for _ in 0..generations {
            self.next_generation();
        }
        log::trace!("advanced {} generations to {}", generations, self.generation);
    }

    pub fn window(&self, origin: Pos, rows: usize, cols: usize) -> GridWindow<'_> {
        GridWindow::new(&self.current, origin, rows, cols)
    }

    /// Number of steps computed since the engine was created
    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.current.alive_count()
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    #[inline]
    pub fn take(self) -> Grid {
        self.current
    }

    fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }
}

/// Computes the generation after `current`
pub fn step(current: &Grid) -> Grid {
    let mut next = current.clone();
    write_generation(current, next.cells_mut());
    next
}

/// Applies [`step`] `generations` times; zero generations returns `initial` unchanged
pub fn run(initial: Grid, generations: usize) -> Grid {
    let mut engine = LifeEngine::new(initial);
    engine.advance(generations);
    engine.take()
}

fn write_generation(current: &Grid, next: &mut [Cell]) {
    debug_assert_eq!(next.len(), current.rows() * current.cols());
    for (row, cells) in next.chunks_exact_mut(current.cols()).enumerate() {
        write_row(current, row, cells);
    }
}

fn write_row(current: &Grid, row: usize, next: &mut [Cell]) {
    for (col, cell) in next.iter_mut().enumerate() {
        let pos = Pos::new(row, col);
        *cell = rule::next_state(current[pos], live_neighbors(current, pos));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enc;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn grid(rows: &[&str]) -> Grid {
        let cols = rows[0].split_whitespace().count();
        let header = format!("{},{},0", rows.len(), cols);
        let lines = std::iter::once(header).chain(rows.iter().map(|row| row.to_string()));
        enc::decode(lines).expect("valid grid").1
    }

    fn random_grid(rng: &mut StdRng) -> Grid {
        let rows = rng.random_range(1..=24);
        let cols = rng.random_range(1..=24);
        Grid::from_fn(rows, cols, |_| Cell::from(rng.random_bool(0.35))).expect("grid")
    }

    #[test]
    fn zero_generations_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..16 {
            let initial = random_grid(&mut rng);
            assert_eq!(run(initial.clone(), 0), initial);
        }
    }

    #[test]
    fn block_is_still_life() {
        let block = grid(&[
            "O O O O",
            "O X X O",
            "O X X O",
            "O O O O",
        ]);

        for generations in [1, 2, 7, 50] {
            assert_eq!(run(block.clone(), generations), block);
        }
    }

    #[test]
    fn blinker_alternates_orientation() {
        let horizontal = grid(&[
            "O O O O O",
            "O O O O O",
            "O X X X O",
            "O O O O O",
            "O O O O O",
        ]);
        let vertical = grid(&[
            "O O O O O",
            "O O X O O",
            "O O X O O",
            "O O X O O",
            "O O O O O",
        ]);

        let mut engine = LifeEngine::new(horizontal.clone());
        for generation in 1..=6 {
            engine.next_generation();
            let expected = if generation % 2 == 1 { &vertical } else { &horizontal };
            assert_eq!(engine.grid(), expected, "generation {generation}");
        }
        assert_eq!(engine.generation(), 6);
        assert_eq!(run(horizontal.clone(), 2), horizontal);
    }

    #[test]
    fn blinker_on_edge_wraps() {
        // the vertical arms wrap over the top and bottom edges
        let wrapped = grid(&[
            "O O X O O",
            "O O X O O",
            "O O O O O",
            "O O O O O",
            "O O X O O",
        ]);
        let horizontal = grid(&[
            "O X X X O",
            "O O O O O",
            "O O O O O",
            "O O O O O",
            "O O O O O",
        ]);

        assert_eq!(step(&wrapped), horizontal);
        assert_eq!(step(&horizontal), wrapped);
    }

    #[test]
    fn line_on_three_by_three_torus() {
        // every cell neighbors every other cell on a 3x3 torus: the three live
        // cells see 2 neighbors and survive, the six dead ones see 3 and are born
        let line = grid(&["O X O", "O X O", "O X O"]);

        let next = step(&line);
        assert_eq!(enc::render(&next), "X X X\nX X X\nX X X\n");
        // then all 9 cells see 8 neighbors
        assert_eq!(step(&next).alive_count(), 0);
    }

    #[test]
    fn glider_returns_home_on_torus() {
        let glider = grid(&[
            "O X O O O O O O",
            "O O X O O O O O",
            "X X X O O O O O",
            "O O O O O O O O",
            "O O O O O O O O",
            "O O O O O O O O",
            "O O O O O O O O",
            "O O O O O O O O",
        ]);

        // one diagonal cell every 4 generations, 8 cells around the torus
        assert_ne!(run(glider.clone(), 4), glider);
        assert_eq!(run(glider.clone(), 32), glider);
    }

    #[test]
    fn step_leaves_source_untouched() {
        let line = grid(&["O X O O", "O X O O", "O X O O", "O O O O"]);
        let before = line.clone();

        let _ = step(&line);
        assert_eq!(line, before);
    }

    #[test]
    fn runs_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..16 {
            let initial = random_grid(&mut rng);
            assert_eq!(run(initial.clone(), 25), run(initial, 25));
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..16 {
            let initial = random_grid(&mut rng);
            let mut serial = LifeEngine::new(initial.clone());
            let mut parallel = LifeEngine::new(initial);

            for _ in 0..10 {
                serial.next_generation();
                parallel.next_generation_parallel();
                assert_eq!(serial.grid(), parallel.grid());
            }
            assert_eq!(serial.generation(), parallel.generation());
        }
    }

    #[test]
    fn step_and_run_agree() {
        let mut rng = StdRng::seed_from_u64(4);
        let initial = random_grid(&mut rng);

        let stepped = (0..5).fold(initial.clone(), |grid, _| step(&grid));
        assert_eq!(run(initial, 5), stepped);
    }
}
