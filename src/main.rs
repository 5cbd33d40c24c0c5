mod aggregate;
mod cli;
mod extract;
mod identity;
mod metrics;
mod model;
mod orchestrator;
mod render;
mod text_summary;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Cli::parse();
    cli::run(args)
}
