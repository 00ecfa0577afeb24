//! build_road — build a road, wait, repave it, and print both timestamps.
//!
//! Exits with status 2 when `<LANES>` is missing or not an integer, and 1
//! when the lane count is rejected.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use abm_transport::Road;

#[derive(Parser, Debug)]
#[command(name = "build_road", about = "Build and repave a road")]
struct Args {
    /// Number of lanes (at least 1).
    #[arg(allow_negative_numbers = true)]
    lanes: i64,

    /// Pause between construction and repaving; 0 skips it.
    #[arg(long, default_value_t = 3)]
    delay_secs: u64,
}

fn unix_stamp(t: SystemTime) -> String {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => format!("{}.{:03}", d.as_secs(), d.subsec_millis()),
        Err(_) => "before 1970".to_owned(),
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

    let mut road = Road::new(args.lanes)?;
    info!(lanes = road.lanes(), width = road.width(), units = Road::LENGTH_UNITS, "road built");
    println!("paved at   {}", unix_stamp(road.repaved_at()));

    if args.delay_secs > 0 {
        thread::sleep(Duration::from_secs(args.delay_secs));
    }

    road.repave();
    println!("repaved at {}", unix_stamp(road.repaved_at()));
    Ok(())
}
