use std::error::Error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    check::{self, CheckArgs},
    model::{self, ModelArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "braid-sim", about = "Markov-move braidrep sampler CLI")]
struct Cli {
    /// Log debug events (overridden by RUST_LOG).
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate braidreps and write them with a manifest.
    Model(ModelArgs),
    /// Validate a braid word against bounds and print its statistics.
    Check(CheckArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Command::Model(args) => model::run(&args),
        Command::Check(args) => check::run(&args),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
