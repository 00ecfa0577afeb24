//! petrie — run the bystander-intervention population model.
//!
//! Prints, per step, the share of each cohort that has made a hostile
//! comment, has received one, and has dropped out.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use abm_core::{RunConfig, RunState, Step, StepObserver};
use abm_output::{CsvWriter, OutputWriter, StatsObserver};
use abm_petrie::{CohortStats, DEFAULT_DROP_THRESHOLD, PetrieStats, PopulationConfig, PopulationModel};

#[derive(Parser, Debug)]
#[command(name = "petrie", about = "Petrie bystander-intervention population model")]
struct Args {
    #[arg(long, default_value_t = 100)]
    people: usize,

    #[arg(long, default_value_t = 0.5)]
    fraction_female: f64,

    #[arg(long, default_value_t = 0.1)]
    fraction_hostile: f64,

    /// Hostile comments an actor takes before dropping out.
    #[arg(long, default_value_t = DEFAULT_DROP_THRESHOLD)]
    drop_threshold: u32,

    #[arg(long, default_value_t = RunConfig::DEFAULT_MAX_STEPS)]
    max_steps: u64,

    /// RNG seed (overrides ABM_SEED).
    #[arg(long)]
    seed: Option<u64>,

    /// Also write per-step statistics to <DIR>/petrie.csv.
    #[arg(long, value_name = "DIR")]
    csv: Option<PathBuf>,
}

struct Report<W: OutputWriter<PetrieStats>> {
    csv: Option<StatsObserver<W, PetrieStats>>,
}

fn cohort_line(label: &str, c: &CohortStats) -> String {
    format!(
        "{label} {:>4}: emitting {:.2}  received {:.2}  dropped out {:.2}",
        c.size, c.emitting, c.received, c.dropped_out
    )
}

impl<W: OutputWriter<PetrieStats>> StepObserver<PetrieStats> for Report<W> {
    fn on_step_end(&mut self, step: Step, stats: &PetrieStats) {
        println!("{step}: {} exchanges ({} total)", stats.exchanges, stats.total_exchanges);
        println!("  {}", cohort_line("men  ", &stats.men));
        println!("  {}", cohort_line("women", &stats.women));
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

    let config = PopulationConfig::new(args.people, args.fraction_female, args.fraction_hostile)
        .drop_threshold(args.drop_threshold)
        .seed(run.seed);
    let mut model = PopulationModel::new(config)?;
    info!(
        men = model.men().len(),
        women = model.women().len(),
        seed = run.seed,
        "population seeded"
    );

    println!("=== petrie — {} people, seed {} ===", args.people, run.seed);

    let csv = match &args.csv {
        Some(dir) => Some(StatsObserver::<_, PetrieStats>::new(CsvWriter::<PetrieStats>::create(dir, "petrie")?)),
        None => None,
    };
    let mut report = Report { csv };
    let state = model.run(run.max_steps, &mut report);

    if let Some(err) = report.csv.as_mut().and_then(|c| c.take_error()) {
        warn!(error = %err, "CSV output incomplete");
    }

    let summary = model.stats();
    println!();
    println!("Finished: {state} after {} steps, {} exchanges", model.step_count().0, model.exchanges());
    println!("  {}", cohort_line("men  ", &summary.men));
    println!("  {}", cohort_line("women", &summary.women));
    Ok(())
}
