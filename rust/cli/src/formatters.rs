//! Card, Market and move formatters for terminal display.
//!
//! Suits print as ♥ ♦ ♣ ♠ where the terminal can show them and as h d c s
//! otherwise. On Windows the symbols are used only when `WT_SESSION`,
//! `TERM_PROGRAM` or `VSCODE_INJECTION` is set; every other platform gets
//! them. Zonkers print as `ZK` and Parking
//! Lots as `PL`.
//!
//! ## Example
//!
//! ```rust
//! use fleadevil_engine::cards::{Card, CardId, Rank, Suit};
//! use fleadevil_cli::formatters::{format_card, format_cards};
//!
//! let seven = Card::standard(CardId(45), Rank::Seven, Suit::Spades);
//! assert!(format_card(&seven) == "7♠" || format_card(&seven) == "7s");
//! assert_eq!(format_cards(&[Card::zonker(CardId(52))]), "[ZK]");
//! ```

use fleadevil_engine::cards::{Card, Face, Suit};
use fleadevil_engine::market::Market;
use fleadevil_engine::round::{MoveReport, RoundController};

/// Cards per row when printing the Market.
const ROW: usize = 8;

/// Check if the terminal supports Unicode card symbols.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    match card.face {
        Face::Standard { rank, suit } => format!("{}{}", rank.label(), format_suit(suit)),
        Face::Zonker => "ZK".to_string(),
        Face::ParkingLot => "PL".to_string(),
    }
}

/// Format a pile of cards in bracket notation, `[]` when empty.
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Format the Market as numbered rows, top first.
///
/// Positions are 1-based, the numbers players type. The seated Parking Lot
/// boundary is marked with `*`.
pub fn format_market(market: &Market) -> String {
    if market.is_empty() {
        return "Market: (empty)".to_string();
    }
    let mut out = format!("Market ({} cards):", market.len());
    for (i, card) in market.cards().iter().enumerate() {
        if i % ROW == 0 {
            out.push('\n');
        } else {
            out.push(' ');
        }
        let mark = if market.is_boundary(i) { "*" } else { "" };
        let label = format!("{}{}", format_card(card), mark);
        out.push_str(&format!("{:>2}:{:<4}", i + 1, label));
    }
    out.trim_end().to_string()
}

/// One line describing what a move did.
pub fn format_report(report: &MoveReport) -> String {
    let mut line = report.kind.name().to_string();
    if report.cost > 0 {
        line.push_str(&format!(" (-${})", report.cost));
    }
    if !report.to_bankroll.is_empty() {
        line.push_str(&format!(
            ": {} to the Bankroll",
            format_cards(&report.to_bankroll)
        ));
    }
    if !report.to_easy_go.is_empty() {
        line.push_str(&format!(
            ": {} to the Easy Go",
            format_cards(&report.to_easy_go)
        ));
    }
    line
}

/// Money, pile sizes and the running score.
pub fn format_status(ctl: &RoundController, max_strikes: u32) -> String {
    format!(
        "Money: ${}  Bankroll: {}  Easy Go: {}  Score: {}  Strikes: {}/{}",
        ctl.money(),
        ctl.bankroll().len(),
        ctl.easy_go().len(),
        ctl.scoreboard().score(),
        ctl.scoreboard().strikes(),
        max_strikes
    )
}
