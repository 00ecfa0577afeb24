//! schelling — run the Schelling segregation model from the command line.
//!
//! Prints one statistics line per step and the final grid.  The seed comes
//! from `--seed`, else `ABM_SEED`, else the clock.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use abm_core::{RunConfig, RunState, Step, StepObserver};
use abm_output::{CsvWriter, OutputWriter, StatsObserver};
use abm_schelling::{DEFAULT_SIMILARITY_THRESHOLD, GridModelBuilder, SchellingStats};

#[derive(Parser, Debug)]
#[command(name = "schelling", about = "Schelling residential-segregation model")]
struct Args {
    #[arg(long, default_value_t = 20)]
    width: usize,

    #[arg(long, default_value_t = 20)]
    height: usize,

    /// Probability that a cell is occupied at seeding.
    #[arg(long, default_value_t = GridModelBuilder::DEFAULT_DENSITY)]
    density: f64,

    /// Probability that an occupied cell holds a type-1 agent.
    #[arg(long, default_value_t = GridModelBuilder::DEFAULT_MINORITY_FRACTION)]
    minority_fraction: f64,

    /// Similarity an agent must strictly exceed to stay put.
    #[arg(long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
    threshold: f64,

    #[arg(long, default_value_t = RunConfig::DEFAULT_MAX_STEPS)]
    max_steps: u64,

    /// RNG seed (overrides ABM_SEED).
    #[arg(long)]
    seed: Option<u64>,

    /// Also write per-step statistics to <DIR>/schelling.csv.
    #[arg(long, value_name = "DIR")]
    csv: Option<PathBuf>,
}

/// Prints each step's statistics and forwards them to an optional CSV sink.
struct Report<W: OutputWriter<SchellingStats>> {
    csv: Option<StatsObserver<W, SchellingStats>>,
}

impl<W: OutputWriter<SchellingStats>> StepObserver<SchellingStats> for Report<W> {
    fn on_step_end(&mut self, step: Step, stats: &SchellingStats) {
        println!(
            "{:<6} happy {:>4}/{:<4} moved {:>4}  mean similarity {:.3}",
            step.to_string(),
            stats.happy,
            stats.agents,
            stats.moved,
            stats.mean_similarity,
        );
        if let Some(csv) = self.csv.as_mut() {
            csv.on_step_end(step, stats);
        }
    }

    fn on_run_end(&mut self, final_step: Step, state: RunState) {
        if let Some(csv) = self.csv.as_mut() {
            csv.on_run_end(final_step, state);
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let run = RunConfig::resolve(args.seed, args.max_steps)?;

    let mut model = GridModelBuilder::new(args.width, args.height)
        .density(args.density)
        .minority_fraction(args.minority_fraction)
        .similarity_threshold(args.threshold)
        .seed(run.seed)
        .build()?;
    info!(
        width = args.width,
        height = args.height,
        agents = model.agents().len(),
        seed = run.seed,
        "model seeded"
    );

    println!("=== schelling — {}x{} grid, seed {} ===", args.width, args.height, run.seed);
    print!("{model}");
    println!();

    let csv = match &args.csv {
        Some(dir) => Some(StatsObserver::<_, SchellingStats>::new(CsvWriter::<SchellingStats>::create(dir, "schelling")?)),
        None => None,
    };
    let mut report = Report { csv };
    let state = model.run(run.max_steps, &mut report)?;

    if let Some(err) = report.csv.as_mut().and_then(|c| c.take_error()) {
        warn!(error = %err, "CSV output incomplete");
    }

    println!();
    println!("Finished: {state} after {} steps", model.step_count().0);
    print!("{model}");
    Ok(())
}
