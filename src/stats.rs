use std::{
    fs,
    io::{self, Write},
    path::Path,
    time::{Duration, Instant},
};

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

pub trait Recorder {
    /// Called once after every computed generation
    fn record(&mut self, alive: usize);

    fn has_report(&self) -> bool;
    fn report(&mut self) -> String;
}

/// Generation rate, population, and population change over each report window
pub struct RateRecord {
    generation: usize,
    population: usize,
    peak: usize,
    window_start: Instant,
    window_generation: usize,
    window_population: usize,
}
impl RateRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            generation: 0,
            population: alive,
            peak: alive,
            window_start: Instant::now(),
            window_generation: 0,
            window_population: alive,
        }
    }
}
impl Recorder for RateRecord {
    fn record(&mut self, alive: usize) {
        self.generation += 1;
        self.population = alive;
        self.peak = self.peak.max(alive);
    }

    fn has_report(&self) -> bool {
        self.window_start.elapsed() >= REPORT_INTERVAL
    }
    fn report(&mut self) -> String {
        let secs = self.window_start.elapsed().as_secs_f64().max(f64::EPSILON);
        let rate = (self.generation - self.window_generation) as f64 / secs;
        let change = self.population as i64 - self.window_population as i64;

        self.window_start = Instant::now();
        self.window_generation = self.generation;
        self.window_population = self.population;

        format!(
            "generation {} | {:.1} gen/s | {} alive ({:+}) | peak {}",
            self.generation, rate, self.population, change, self.peak
        )
    }
}

/// A [`RateRecord`] that also keeps the step time and population of every generation
pub struct CsvRecord {
    inner: RateRecord,
    initial_alive: usize,
    data: Vec<(u128, usize)>,
    last: Instant,
}
impl CsvRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            inner: RateRecord::new(alive),
            initial_alive: alive,
            data: Vec::new(),
            last: Instant::now(),
        }
    }

    /// Writes `generation,micros,alive` rows, starting with the initial grid as generation 0
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(b"generation,micros,alive\n")?;
        writeln!(out, "0,0,{}", self.initial_alive)?;
        for (i, (micros, alive)) in self.data.iter().enumerate() {
            writeln!(out, "{},{},{}", i + 1, micros, alive)?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = fs::File::create(path)?;
        self.write_to(io::BufWriter::new(file))
    }
}
impl Recorder for CsvRecord {
    fn record(&mut self, alive: usize) {
        let micros = self.last.elapsed().as_micros();
        self.last = Instant::now();

        self.data.push((micros, alive));
        self.inner.record(alive);
    }

    fn has_report(&self) -> bool {
        self.inner.has_report()
    }
    fn report(&mut self) -> String {
        self.inner.report()
    }
}
