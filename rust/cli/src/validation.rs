//! Input parsing and validation for the interactive `play` command.
//!
//! Players name cards by their 1-based position in the Market as printed.
//! Parsing only checks the shape of a line; positions are translated into
//! card ids by [`resolve_positions`] against the Market currently on screen,
//! and every rule check is left to the engine.

use fleadevil_engine::market::Market;
use fleadevil_engine::moves::{MoveKind, MoveRequest, Selection};

/// One parsed line of `play` input.
#[derive(Debug, PartialEq, Eq)]
pub enum PlayInput {
    /// A move with 1-based Market positions and an optional `to P` target
    Move {
        kind: MoveKind,
        positions: Vec<usize>,
        target: Option<usize>,
    },
    /// Print the Market again
    Market,
    /// List the legal moves
    Hint,
    /// Give up the current round
    Forfeit,
    /// Print the rules summary
    Rules,
}

/// Result type for parsing a line of player input.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    Input(PlayInput),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// The command word for each move, as typed at the prompt and printed by `hint`.
pub fn move_word(kind: MoveKind) -> &'static str {
    match kind {
        MoveKind::Haul => "haul",
        MoveKind::Bargain => "bargain",
        MoveKind::FleaHop => "flea",
        MoveKind::DevilHop => "devil",
        MoveKind::WalkyTalky => "walky",
        MoveKind::ZonkOut => "zonk",
        MoveKind::Hangout => "hangout",
        MoveKind::EasyGo => "easygo",
    }
}

fn move_kind(word: &str) -> Option<MoveKind> {
    let kind = match word {
        "haul" => MoveKind::Haul,
        "bargain" => MoveKind::Bargain,
        "flea" | "fleahop" => MoveKind::FleaHop,
        "devil" | "devilhop" => MoveKind::DevilHop,
        "walky" | "walkytalky" => MoveKind::WalkyTalky,
        "zonk" | "zonkout" => MoveKind::ZonkOut,
        "hangout" => MoveKind::Hangout,
        "easygo" | "easy" => MoveKind::EasyGo,
        _ => return None,
    };
    Some(kind)
}

/// Parse one line typed at the `play` prompt (case-insensitive).
///
/// # Example
///
/// ```rust
/// # use fleadevil_cli::validation::{parse_play_input, ParseResult, PlayInput};
/// use fleadevil_engine::moves::MoveKind;
///
/// assert_eq!(
///     parse_play_input("devil 1 2 3 4 to 9"),
///     ParseResult::Input(PlayInput::Move {
///         kind: MoveKind::DevilHop,
///         positions: vec![1, 2, 3, 4],
///         target: Some(9),
///     })
/// );
/// assert_eq!(parse_play_input("q"), ParseResult::Quit);
///
/// match parse_play_input("shuffle") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_play_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match parts[0] {
        "q" | "quit" => return ParseResult::Quit,
        "market" | "m" => return ParseResult::Input(PlayInput::Market),
        "hint" | "h" => return ParseResult::Input(PlayInput::Hint),
        "forfeit" => return ParseResult::Input(PlayInput::Forfeit),
        "rules" => return ParseResult::Input(PlayInput::Rules),
        _ => {}
    }

    let Some(kind) = move_kind(parts[0]) else {
        return ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Valid commands: haul, bargain, flea, devil, walky, zonk, hangout, easygo, market, hint, forfeit, rules, q",
            parts[0]
        ));
    };

    let mut positions = Vec::new();
    let mut target = None;
    let mut rest = parts[1..].iter();
    while let Some(&word) = rest.next() {
        if word == "to" {
            if !matches!(kind, MoveKind::DevilHop | MoveKind::WalkyTalky) {
                return ParseResult::Invalid(format!("{} does not take a target", kind));
            }
            let Some(&pos) = rest.next() else {
                return ParseResult::Invalid("'to' needs a position".to_string());
            };
            match parse_position(pos) {
                Ok(p) => target = Some(p),
                Err(msg) => return ParseResult::Invalid(msg),
            }
            if let Some(extra) = rest.next() {
                return ParseResult::Invalid(format!("Unexpected '{}' after the target", extra));
            }
            break;
        }
        match parse_position(word) {
            Ok(p) => positions.push(p),
            Err(msg) => return ParseResult::Invalid(msg),
        }
    }

    if positions.is_empty() {
        return ParseResult::Invalid(format!(
            "{} needs card positions (e.g., '{} 1 2')",
            kind,
            move_word(kind)
        ));
    }

    ParseResult::Input(PlayInput::Move {
        kind,
        positions,
        target,
    })
}

fn parse_position(word: &str) -> Result<usize, String> {
    match word.parse::<usize>() {
        Ok(0) => Err("Positions start at 1".to_string()),
        Ok(p) => Ok(p),
        Err(_) => Err(format!("Invalid position '{}'", word)),
    }
}

/// Translate 1-based positions into a [`MoveRequest`] naming cards by id.
///
/// # Example
///
/// ```rust
/// # use fleadevil_cli::validation::resolve_positions;
/// use fleadevil_engine::cards::{Card, CardId};
/// use fleadevil_engine::market::Market;
/// use fleadevil_engine::moves::MoveKind;
///
/// let market = Market::new(vec![Card::zonker(CardId(52)), Card::zonker(CardId(53))]);
/// let req = resolve_positions(&market, MoveKind::ZonkOut, &[2, 1], None).unwrap();
/// assert_eq!(req.selection.cards, vec![CardId(53), CardId(52)]);
/// assert!(resolve_positions(&market, MoveKind::ZonkOut, &[1, 3], None).is_err());
/// ```
pub fn resolve_positions(
    market: &Market,
    kind: MoveKind,
    positions: &[usize],
    target: Option<usize>,
) -> Result<MoveRequest, String> {
    let lookup = |pos: usize| {
        pos.checked_sub(1)
            .and_then(|i| market.get(i))
            .map(|c| c.id)
            .ok_or_else(|| {
                format!(
                    "Position {} is out of range (market has {} cards)",
                    pos,
                    market.len()
                )
            })
    };
    let cards = positions
        .iter()
        .map(|&p| lookup(p))
        .collect::<Result<Vec<_>, _>>()?;
    let mut selection = Selection::of(cards);
    if let Some(t) = target {
        selection = selection.with_target(lookup(t)?);
    }
    Ok(MoveRequest::new(kind, selection))
}

/// Inverse of [`resolve_positions`]: the line a player would type for `request`.
pub fn describe_request(market: &Market, request: &MoveRequest) -> String {
    let pos = |id| {
        market
            .index_of(id)
            .map(|i| (i + 1).to_string())
            .unwrap_or_else(|| "?".to_string())
    };
    let mut line = move_word(request.kind).to_string();
    for &id in &request.selection.cards {
        line.push(' ');
        line.push_str(&pos(id));
    }
    if let Some(t) = request.selection.target {
        line.push_str(" to ");
        line.push_str(&pos(t));
    }
    line
}
