//! Rules command handler.

use crate::error::CliError;
use std::io::Write;

/// Summary printed by `fleadevil rules` and by `rules` at the play prompt.
pub const RULES_TEXT: &str = "\
Flea Devil Solitaire

All 56 cards (52 standard, 2 Zonkers, 2 Parking Lots) are dealt face up in
one line, the Market. Position 1 is the top, next to the Bankroll; the last
position is the bottom, next to the Easy Go. A Parking Lot is seated at the
bottom and no card may move below it. Clear the Market to win the round.

Moves (positions are the numbers shown next to each card):
  haul P P [P P]        Haul: remove 2-4 adjacent cards of one rank to the Bankroll
  bargain P P           Bargain ($1): swap two adjacent cards
  flea P P              Flea Hop: move the first card next to the second, same suit;
                        a Zonker between them blocks the hop
  devil P P P P to P    Devil Hop ($3): move four adjacent cards, one of each suit,
                        next to the target card
  walky P P P [to P]    Walky Talky ($3): move the middle card of a three-card run
                        next to a card sharing its rank or suit (nearest if omitted)
  zonk P P              Zonk Out: remove two adjacent Zonkers, or a Zonker next to
                        a Parking Lot, to the Easy Go
  hangout P P [..]      Hangout: remove a Parking Lot and the adjacent cards beside
                        it that share one rank or one suit, to the Easy Go
  easygo P P            Easy Go ($1): remove two adjacent cards of one suit

Every round starts with $10. When no legal move is left the round is lost
and counts as a strike; the game ends when the strikes run out.

Other commands: market, hint, forfeit, rules, q
";

pub fn handle_rules_command(out: &mut dyn Write) -> Result<(), CliError> {
    write!(out, "{}", RULES_TEXT)?;
    Ok(())
}
