//! Deal command handler: shows the opening Market of a round.

use crate::error::CliError;
use crate::formatters::format_market;
use fleadevil_engine::round::RoundController;
use std::io::Write;

/// Deals one round and prints the seed plus the seated Market.
///
/// Without a seed a random one is drawn and printed, so the deal can be
/// replayed with `play --seed`.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut ctl = RoundController::new(Some(seed));
    ctl.start_round()?;
    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "{}", format_market(ctl.market()))?;
    Ok(())
}
