//! # Play Command
//!
//! Interactive Flea Devil Solitaire over stdin/stdout.
//!
//! Each round deals a fresh Market and reads one command per line until the
//! Market is cleared or no legal move is left. Rounds keep coming until the
//! strikes reach `max_strikes`, the player types `q`, or stdin closes.
//! Rejected moves are reported on the error stream and the prompt returns;
//! nothing about the round changes.

use crate::commands::rules::RULES_TEXT;
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_market, format_report, format_status};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{
    ParseResult, PlayInput, describe_request, parse_play_input, resolve_positions,
};
use fleadevil_engine::errors::GameError;
use fleadevil_engine::game::RoundOutcome;
use fleadevil_engine::logger::RoundLogger;
use fleadevil_engine::round::RoundController;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

/// Most moves `hint` lists before summarising the rest.
const HINT_LIMIT: usize = 12;

/// Handle the play command.
///
/// # Arguments
///
/// * `config` - Resolved settings; `config.seed` already includes `--seed`
/// * `log` - Optional JSONL file every finished round is appended to
/// * `out` - Output stream for the game display
/// * `err` - Error stream for rejected input
/// * `stdin` - Input stream for player commands
///
/// # Errors
///
/// `CliError::Io` when the log file or the output streams fail.
pub fn handle_play_command(
    config: &Config,
    log: Option<&Path>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut logger = match log {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "play: seed={} money={} max_strikes={}",
        seed, config.starting_money, config.max_strikes
    )?;
    info!(seed, max_strikes = config.max_strikes, "game started");

    let mut ctl = RoundController::new(Some(seed)).with_starting_money(config.starting_money);
    let mut quit = false;

    while !quit && !ctl.scoreboard().is_over(config.max_strikes) {
        ctl.start_round()?;
        writeln!(out, "\nRound {}", ctl.round_number())?;
        writeln!(out, "{}", format_market(ctl.market()))?;
        writeln!(out, "{}", format_status(&ctl, config.max_strikes))?;

        quit = play_round(&mut ctl, config.max_strikes, out, err, stdin)?;

        if let Some(outcome) = ctl.outcome() {
            match outcome {
                RoundOutcome::Won => writeln!(out, "Round won! The Market is clear.")?,
                RoundOutcome::Lost => writeln!(
                    out,
                    "Round lost with {} cards left in the Market.",
                    ctl.market().len()
                )?,
            }
            writeln!(out, "{}", format_status(&ctl, config.max_strikes))?;
            if let Some(logger) = logger.as_mut() {
                let id = logger.next_id();
                logger.write(&ctl.record(id))?;
            }
        }
    }

    if ctl.scoreboard().is_over(config.max_strikes) {
        writeln!(out, "Game over.")?;
    }
    writeln!(
        out,
        "Final score: {} (rounds played: {})",
        ctl.scoreboard().score(),
        ctl.round_number()
    )?;
    Ok(())
}

/// Reads commands until the round finishes. Returns `true` when the player
/// asked to stop.
fn play_round(
    ctl: &mut RoundController,
    max_strikes: u32,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    while !ctl.state().is_finished() {
        ui::prompt(out, "> ")?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(true);
        };
        let input = match parse_play_input(&line) {
            ParseResult::Input(input) => input,
            ParseResult::Quit => return Ok(true),
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };

        match input {
            PlayInput::Market => {
                writeln!(out, "{}", format_market(ctl.market()))?;
                writeln!(out, "{}", format_status(ctl, max_strikes))?;
            }
            PlayInput::Hint => {
                let moves = ctl.legal_moves();
                writeln!(out, "{} legal moves", moves.len())?;
                for request in moves.iter().take(HINT_LIMIT) {
                    writeln!(out, "  {}", describe_request(ctl.market(), request))?;
                }
                if moves.len() > HINT_LIMIT {
                    writeln!(out, "  ... and {} more", moves.len() - HINT_LIMIT)?;
                }
            }
            PlayInput::Forfeit => ctl.forfeit()?,
            PlayInput::Rules => write!(out, "{}", RULES_TEXT)?,
            PlayInput::Move {
                kind,
                positions,
                target,
            } => {
                let request = match resolve_positions(ctl.market(), kind, &positions, target) {
                    Ok(request) => request,
                    Err(msg) => {
                        ui::write_error(err, &msg)?;
                        continue;
                    }
                };
                match ctl.apply(&request) {
                    Ok(report) => {
                        writeln!(out, "{}", format_report(&report))?;
                        if !report.state.is_finished() {
                            writeln!(out, "{}", format_market(ctl.market()))?;
                            writeln!(out, "{}", format_status(ctl, max_strikes))?;
                        }
                    }
                    Err(GameError::Move(e)) => {
                        ui::write_error(err, &format!("Invalid {}: {}", kind, e))?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }
    Ok(false)
}
