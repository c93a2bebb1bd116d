use std::{path::PathBuf, str::FromStr, time::Duration};

use displaydoc::Display;
use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;
use torlife::{Cell, Grid, Pos};

const DEFAULT_GRID_SIZE: (usize, usize) = (64, 64);
const DEFAULT_GENERATIONS: usize = 100;
const CONSOLE_SLEEP: Duration = Duration::from_millis(100);

/// Invalid command line arguments.
#[derive(Debug, Display, Error)]
pub enum ArgsError {
    /// {0}
    Getopts(#[from] getopts::Fail),
    /// Invalid value for `--{opt}`: {value:?}.
    InvalidValue { opt: &'static str, value: String },
}

/// Command line options, parsed and validated once at startup
pub struct Args {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    stats: Option<PathBuf>,
    generations: Option<usize>,
    rows: Option<usize>,
    cols: Option<usize>,
    fill: FillMode,
    seed: Option<u64>,
    threads: usize,
    console: bool,
    sleep: Option<Duration>,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "render every generation in the terminal");
        opts.optopt("i", "input", "input grid file", "FILE");
        opts.optopt("o", "output", "write the final grid to a file", "FILE");
        opts.optopt("g", "gens", "number of generations, overrides the input header", "COUNT");
        opts.optopt("", "rows", "grid rows when no input file is given", "ROWS");
        opts.optopt("", "cols", "grid columns when no input file is given", "COLS");
        opts.optopt("f", "fill", "fill for generated grids: random, alternating, all, empty", "TYPE");
        opts.optopt("", "seed", "seed for the random fill", "SEED");
        opts.optopt("t", "threads", "compute generations on COUNT threads", "COUNT");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("", "stats", "write stats csv to file", "FILE");
        opts
    }

    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, ArgsError> {
        let opts = Self::options();
        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: torlife [options] [FILE]"));
            return Ok(None);
        }

        let console = matches.opt_present("console");
        let sleep = match parse_opt::<u64>(&matches, "sleep")? {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if console => Some(CONSOLE_SLEEP),
            None => None,
        };
        let fill = match matches.opt_str("fill") {
            Some(value) => FillMode::new(&value).ok_or(ArgsError::InvalidValue { opt: "fill", value })?,
            None => FillMode::Random,
        };
        let threads = match parse_opt::<usize>(&matches, "threads")? {
            Some(0) => {
                return Err(ArgsError::InvalidValue {
                    opt: "threads",
                    value: "0".to_owned(),
                });
            }
            Some(n) => n,
            None => 1,
        };

        Ok(Some(Self {
            // the first free argument doubles as the input file
            input: matches
                .opt_str("input")
                .or_else(|| matches.free.first().cloned())
                .map(PathBuf::from),
            output: matches.opt_str("output").map(PathBuf::from),
            stats: matches.opt_str("stats").map(PathBuf::from),
            generations: parse_opt(&matches, "gens")?,
            rows: parse_opt(&matches, "rows")?,
            cols: parse_opt(&matches, "cols")?,
            fill,
            seed: parse_opt(&matches, "seed")?,
            threads,
            console,
            sleep,
        }))
    }

    /// Returns `Ok(None)` when only the help text was requested
    pub fn from_env() -> Result<Option<Self>, ArgsError> {
        let env = std::env::args().skip(1).collect::<Vec<_>>();
        Self::new(&env)
    }

    pub fn console(&self) -> bool {
        self.console
    }
    pub fn threads(&self) -> usize {
        self.threads
    }
    pub fn sleep(&self) -> Option<Duration> {
        self.sleep
    }

    /// The generation count given on the command line, if any
    pub fn generations(&self) -> Option<usize> {
        self.generations
    }
    pub fn default_generations(&self) -> usize {
        DEFAULT_GENERATIONS
    }

    /// `(rows, cols)` for a generated grid
    pub fn grid_size(&self) -> (usize, usize) {
        let default = if self.console {
            // keep the last terminal line for the report
            match crossterm::terminal::size() {
                Ok((cols, rows)) => ((rows as usize).saturating_sub(1).max(1), (cols as usize).max(1)),
                Err(_) => DEFAULT_GRID_SIZE,
            }
        } else {
            DEFAULT_GRID_SIZE
        };

        (self.rows.unwrap_or(default.0), self.cols.unwrap_or(default.1))
    }
    pub fn fill_mode(&self) -> FillMode {
        self.fill
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn input_file(&self) -> Option<&PathBuf> {
        self.input.as_ref()
    }
    pub fn output_file(&self) -> Option<&PathBuf> {
        self.output.as_ref()
    }
    pub fn stats_file(&self) -> Option<&PathBuf> {
        self.stats.as_ref()
    }
}

fn parse_opt<T: FromStr>(matches: &getopts::Matches, opt: &'static str) -> Result<Option<T>, ArgsError> {
    matches.opt_get(opt).map_err(|_| ArgsError::InvalidValue {
        opt,
        value: matches.opt_str(opt).unwrap_or_default(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    fn fill_cell<R: Rng>(&self, pos: Pos, rng: &mut R) -> bool {
        match self {
            Self::Random => rng.random_bool(0.5),
            Self::Alternating => (pos.row + pos.col) % 2 == 0,
            Self::All => true,
            Self::Empty => false,
        }
    }

    /// Returns [`None`] if either dimension is zero
    pub fn create_grid(self, rows: usize, cols: usize, seed: Option<u64>) -> Option<Grid> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Grid::from_fn(rows, cols, |pos| Cell::from(self.fill_cell(pos, &mut rng)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Args {
        Args::new(args).expect("valid args").expect("not a help request")
    }

    fn pos(row: usize, col: usize) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn fill_mode_parses() {
        let args = args(&["--fill", "alternating"]);

        assert_eq!(args.fill_mode(), FillMode::Alternating);
    }

    #[test]
    fn unknown_fill_mode_is_rejected() {
        let err = Args::new(&["--fill", "checkers"]).err().expect("invalid fill");

        assert!(matches!(err, ArgsError::InvalidValue { opt: "fill", .. }));
    }

    #[test]
    fn non_numeric_option_is_rejected() {
        let err = Args::new(&["--gens", "many"]).err().expect("invalid gens");

        assert!(matches!(err, ArgsError::InvalidValue { opt: "gens", .. }));
    }

    #[test]
    fn zero_threads_is_rejected() {
        assert!(Args::new(&["-t", "0"]).is_err());
    }

    #[test]
    fn help_returns_none() {
        assert!(Args::new(&["--help"]).expect("help").is_none());
    }

    #[test]
    fn free_argument_is_input() {
        let args = args(&["grid.txt", "-o", "out.txt"]);

        assert_eq!(args.input_file(), Some(&PathBuf::from("grid.txt")));
        assert_eq!(args.output_file(), Some(&PathBuf::from("out.txt")));
    }

    #[test]
    fn defaults() {
        let args = args(&[]);

        assert_eq!(args.grid_size(), DEFAULT_GRID_SIZE);
        assert_eq!(args.generations(), None);
        assert_eq!(args.threads(), 1);
        assert_eq!(args.sleep(), None);
        assert_eq!(args.fill_mode(), FillMode::Random);
    }

    #[test]
    fn console_sleeps_by_default() {
        let args = args(&["-c", "--rows", "10", "--cols", "20"]);

        assert_eq!(args.sleep(), Some(CONSOLE_SLEEP));
        assert_eq!(args.grid_size(), (10, 20));
    }

    #[test]
    fn create_grid_all_fills_grid() {
        let grid = FillMode::All.create_grid(2, 3, None).expect("grid");

        let expected = vec![pos(0, 0), pos(0, 1), pos(0, 2), pos(1, 0), pos(1, 1), pos(1, 2)];
        assert_eq!(grid.alive().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn create_grid_empty_is_empty() {
        let grid = FillMode::Empty.create_grid(4, 5, None).expect("grid");

        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn create_grid_alternating_uses_parity() {
        let grid = FillMode::Alternating.create_grid(3, 3, None).expect("grid");

        let expected = vec![pos(0, 0), pos(0, 2), pos(1, 1), pos(2, 0), pos(2, 2)];
        assert_eq!(grid.alive().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn create_grid_random_is_reproducible_with_seed() {
        let a = FillMode::Random.create_grid(16, 16, Some(42));
        let b = FillMode::Random.create_grid(16, 16, Some(42));

        assert_eq!(a, b);
    }

    #[test]
    fn create_grid_zero_size_is_none() {
        assert!(FillMode::All.create_grid(0, 4, None).is_none());
    }
}
