#![deny(clippy::all, clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use pointmass::{app, cli::Args};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let report = app::run(&args)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
