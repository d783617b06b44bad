//! # fleadevil CLI library
//!
//! Command-line front end for the Flea Devil Solitaire engine. The primary
//! entry point is [`run`], which parses arguments and dispatches to a
//! subcommand while writing to caller-supplied streams.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = fleadevil_cli::run(["fleadevil", "deal", "--seed", "42"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Market (56 cards):"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play [--seed N] [--log FILE]`: play rounds interactively on stdin
//! - `deal [--seed N]`: print the opening Market of one round
//! - `rules`: print the rules summary
//! - `cfg`: display the resolved configuration and its sources

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, FleadevilCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_rules_command,
};

pub use error::CliError;

/// Installs the `tracing` subscriber used by the binary: `RUST_LOG` filter,
/// `warn` by default, written to stderr so it never mixes with game output.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Main entry point for the CLI application.
///
/// Returns the process exit code: `0` on success, `2` on any error.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "deal", "rules", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FleadevilCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: fleadevil <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: fleadevil --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play { seed, log } => match config::load_with_sources() {
            Ok(resolved) => {
                let mut cfg = resolved.config;
                if seed.is_some() {
                    cfg.seed = seed;
                }
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                handle_play_command(&cfg, log.as_deref(), out, err, &mut stdin_lock)
            }
            Err(e) => Err(e.into()),
        },
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Rules => handle_rules_command(out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_command_parses() {
        let commands = vec![
            vec!["fleadevil", "play"],
            vec!["fleadevil", "play", "--seed", "1", "--log", "x.jsonl"],
            vec!["fleadevil", "deal"],
            vec!["fleadevil", "deal", "--seed", "9"],
            vec!["fleadevil", "rules"],
            vec!["fleadevil", "cfg"],
        ];
        for cmd_args in commands {
            let result = FleadevilCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
    }

    #[test]
    fn test_bad_seed_is_a_usage_error() {
        assert!(FleadevilCli::try_parse_from(["fleadevil", "deal", "--seed", "-1"]).is_err());
    }

    #[test]
    fn test_command_list_matches_clap() {
        use clap::CommandFactory;
        let cmd = FleadevilCli::command();
        let names: Vec<&str> = cmd.get_subcommands().map(|c| c.get_name()).collect();
        for expected in ["play", "deal", "rules", "cfg"] {
            assert!(names.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging();
        init_logging();
    }
}
