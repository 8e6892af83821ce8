use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    count::{self, CountArgs},
    export_tree::{self, ExportTreeArgs},
    generate::{self, GenerateArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "msched", about = "VLBI multi-scheduling parameter space generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the sampled parameter sets and write one job directory per set.
    Generate(GenerateArgs),
    /// Print the dimensions of the parameter space and its total size.
    Count(CountArgs),
    /// Write the catalog as a configuration tree.
    ExportTree(ExportTreeArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => generate::run(&args),
        Command::Count(args) => count::run(&args),
        Command::ExportTree(args) => export_tree::run(&args),
    }
}
