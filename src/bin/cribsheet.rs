use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use cribsheet::experiment::Experiment;
use cribsheet::file::{ReadJsonFile, WriteJsonFile};
use cribsheet::print;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// JSON file describing the experiment; the built-in experiment is used if omitted
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// number of trials per strategy and distribution
    #[clap(short = 'i', long)]
    iterations: Option<u64>,

    /// seed for the random source; derived from the clock if omitted
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// number of worker threads per assessment
    #[clap(short = 'w', long, default_value_t = 1)]
    workers: usize,

    /// file to write the JSON report to
    #[clap(short = 'o', long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    debug!("args: {args:?}");

    let mut experiment = match &args.config {
        Some(path) => {
            debug!("loading experiment from {path:?}");
            Experiment::read_json_file(path)?
        }
        None => Experiment::default(),
    };
    if let Some(iterations) = args.iterations {
        experiment.iterations = iterations;
    }
    let seed = match args.seed {
        Some(seed) => seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64,
    };
    info!(
        "running {} strategies over {} distributions, {} iterations each, seed {seed}",
        experiment.strategies.len(),
        experiment.distributions.len(),
        experiment.iterations
    );

    let start_time = Instant::now();
    let outcomes = experiment.run(seed, args.workers)?;
    let elapsed = start_time.elapsed();
    info!(
        "assessed {} distributions in {}s",
        outcomes.len(),
        elapsed.as_millis() as f64 / 1_000.
    );

    let table = print::tabulate(&outcomes);
    info!("assessments:\n{}", Console::default().render(&table));

    if let Some(out) = args.out {
        outcomes.write_json_file(&out)?;
        info!("wrote report to {out:?}");
    }

    Ok(())
}
