//! drive_car — ask for a color, drive a fixed route, print the final pose.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use clap::Parser;
use tracing::debug;

use abm_transport::{Car, Mode};

#[derive(Parser, Debug)]
#[command(name = "drive_car", about = "Drive a car along a fixed route")]
struct Args {
    /// Car color; prompted for on stdin when omitted.
    #[arg(long)]
    color: Option<String>,
}

fn prompt_color() -> Result<String> {
    print!("please enter car color: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let color = line.trim();
    if color.is_empty() {
        bail!("no color entered");
    }
    Ok(color.to_owned())
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
    let color = match args.color {
        Some(c) => c,
        None => prompt_color()?,
    };

    let mut car = Car::new(color);
    car.go(3, Mode::Forward);
    car.turn_right();
    car.go(2, Mode::Forward);
    car.turn_left();
    car.go(3, Mode::Forward);

    let (color, x, y, heading) = car.describe();
    debug!(color, x, y, %heading, "route complete");
    println!("{x}");
    println!("{y}");
    println!("{heading}");
    Ok(())
}
