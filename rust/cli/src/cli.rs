//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fleadevil",
    version,
    about = "Flea Devil Solitaire in the terminal"
)]
pub struct FleadevilCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play rounds interactively until the strikes run out
    Play {
        /// Deck seed; overrides FLEADEVIL_SEED and the config file
        #[arg(long)]
        seed: Option<u64>,
        /// Append every finished round to this JSONL file
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Print the opening Market of one round
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the rules summary
    Rules,
    /// Show the resolved configuration and where each value came from
    Cfg,
}
