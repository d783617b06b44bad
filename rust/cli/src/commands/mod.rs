//! Command handler modules for the fleadevil CLI.
//!
//! Every subcommand lives in its own file and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`, taking its
//! output streams as `&mut dyn Write` so tests can capture them.

mod cfg;
mod deal;
mod play;
mod rules;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use rules::{RULES_TEXT, handle_rules_command};
