mod arff;
mod bayes;
mod config;
mod dataset;
mod discretize;
mod error;
mod loader;
mod persistence;
mod pipeline;

use anyhow::Result;
use clap::Parser;
use config::{Cli, Config};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from(Cli::parse());
    let stdout = std::io::stdout();
    pipeline::run(&config, &mut stdout.lock())?;

    println!("Done");

    Ok(())
}
