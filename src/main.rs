use std::{error::Error, fs, io, path::Path, thread};

use torlife::{Grid, LifeEngine, RunConfig};

mod console;
mod options;
mod stats;

use options::Args;
use stats::{CsvRecord, RateRecord, Recorder};

/// How a run ended, comparing the generations computed with the ones asked for
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Finished,
    Stopped { after: usize, planned: usize },
}
impl Outcome {
    fn new(computed: usize, planned: usize) -> Self {
        if computed < planned {
            Self::Stopped {
                after: computed,
                planned,
            }
        } else {
            Self::Finished
        }
    }
}

/// Reads the input file, or generates a grid from the fill options
fn load(args: &Args) -> Result<(RunConfig, Grid), Box<dyn Error>> {
    if let Some(path) = args.input_file() {
        let text = fs::read_to_string(path)
            .inspect_err(|e| log::error!("cannot read {}: {}", path.display(), e))?;
        let (config, grid) = torlife::decode(text.lines())
            .inspect_err(|e| log::error!("{}: {}", path.display(), e))?;
        log::info!(
            "loaded {}x{} grid from {} ({} generations)",
            config.rows(),
            config.cols(),
            path.display(),
            config.generations()
        );
        return Ok((config, grid));
    }

    let (rows, cols) = args.grid_size();
    let fill = args.fill_mode();
    let grid = fill
        .create_grid(rows, cols, args.seed())
        .ok_or("grid rows and cols must be positive")?;
    let config = RunConfig::new(rows, cols, args.default_generations())
        .ok_or("grid rows and cols must be positive")?;
    log::info!("generated {}x{} grid with {:?} fill", rows, cols, fill);
    Ok((config, grid))
}

fn simulate<R: Recorder>(
    engine: &mut LifeEngine,
    generations: usize,
    args: &Args,
    recorder: &mut R,
) -> io::Result<()> {
    let grid = engine.grid();
    let mut console = if args.console() {
        Some(console::ConsoleRender::new(grid.rows(), grid.cols())?)
    } else {
        None
    };

    'generations: for _ in 0..generations {
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                if let console::ConsoleCommand::Exit = cmd {
                    break 'generations;
                }
            }
            console.render(engine)?;
        }

        if recorder.has_report() {
            let report = recorder.report();
            match console {
                Some(ref mut console) => console.set_report(report),
                None => log::info!("{}", report),
            }
        }

        if args.threads() > 1 {
            engine.next_generation_parallel();
        } else {
            engine.next_generation();
        }
        recorder.record(engine.alive_count());
        log::debug!(
            "generation {}: {} alive",
            engine.generation(),
            engine.alive_count()
        );

        if let Some(time) = args.sleep() {
            thread::sleep(time);
        }
    }
    Ok(())
}

fn write_output(path: &Path, text: &str) -> io::Result<()> {
    fs::write(path, text).inspect_err(|e| log::error!("cannot write {}: {}", path.display(), e))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(args) = Args::from_env()? else {
        return Ok(());
    };

    let (config, grid) = load(&args)?;
    let config = match args.generations() {
        Some(generations) => config.with_generations(generations),
        None => config,
    };

    if args.threads() > 1 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads())
            .build_global()?;
        log::info!("computing generations on {} threads", args.threads());
    }

    let mut engine = LifeEngine::new(grid);
    let alive = engine.alive_count();
    match args.stats_file() {
        Some(path) => {
            let mut stats = CsvRecord::new(alive);
            simulate(&mut engine, config.generations(), &args, &mut stats)?;
            stats
                .save(path)
                .inspect_err(|e| log::error!("cannot write {}: {}", path.display(), e))?;
            log::info!("wrote stats to {}", path.display());
        }
        None => {
            let mut stats = RateRecord::new(alive);
            simulate(&mut engine, config.generations(), &args, &mut stats)?;
        }
    }
    match Outcome::new(engine.generation(), config.generations()) {
        Outcome::Finished => log::info!(
            "finished after {} generations with {} alive",
            engine.generation(),
            engine.alive_count()
        ),
        // a partial grid is not the result of the run
        Outcome::Stopped { after, planned } => {
            log::warn!(
                "stopped after {} of {} generations, not writing the final grid",
                after,
                planned
            );
            return Ok(());
        }
    }

    let text = torlife::render(engine.grid());
    match args.output_file() {
        Some(path) => {
            write_output(path, &text)?;
            log::info!("wrote final grid to {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}
