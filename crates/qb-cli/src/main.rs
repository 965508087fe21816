//! CLI frontend for the Questbote session engine.

mod commands;
mod console;
mod oracle;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;

#[derive(Parser)]
#[command(
    name = "qb",
    about = "Questbote — a conversational role-playing session engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive console session
    Play {
        /// Directory for player data (created if missing)
        #[arg(short, long, default_value = "qb-data")]
        data: PathBuf,

        /// RNG seed for deterministic rolls and offline generation
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// List active player profiles
    Roster {
        /// Directory holding player data
        #[arg(short, long, default_value = "qb-data")]
        data: PathBuf,
    },

    /// List archived (deleted) player profiles
    Archive {
        /// Directory holding player data
        #[arg(short, long, default_value = "qb-data")]
        data: PathBuf,
    },

    /// Show the tail of the decision log
    Log {
        /// Directory holding player data
        #[arg(short, long, default_value = "qb-data")]
        data: PathBuf,

        /// How many records to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { data, seed } => commands::play::run(&data, seed),
        Commands::Roster { data } => commands::roster::run(&data),
        Commands::Archive { data } => commands::archive::run(&data),
        Commands::Log { data, count } => commands::log::run(&data, count),
    };

    if let Err(message) = result {
        eprintln!("{} {message}", "error:".red().bold());
        process::exit(1);
    }
}
