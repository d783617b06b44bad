//! The eight moves of Flea Devil Solitaire and their executors.
//!
//! Every move is a validate-then-execute pair. Validation lives in
//! [`crate::rules`]; this module turns a [`ValidatedMove`] into the next
//! Market plus whatever left it. Both halves are pure: they never touch the
//! input Market, which lets the round controller swap state in one step.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{Card, CardId};
use crate::errors::MoveError;
use crate::market::Market;
use crate::rules::{validate, Pile, Plan, ValidatedMove};

/// The named moves a player can request.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Remove adjacent cards of the same rank to the Bankroll
    Haul,
    /// Swap two adjacent cards ($1)
    Bargain,
    /// Move a card next to another card of its suit
    FleaHop,
    /// Move a block of four, one of each suit ($3)
    DevilHop,
    /// Move the middle card of a run next to a matching card ($3)
    WalkyTalky,
    /// Remove adjacent Zonkers, or a Zonker next to a Parking Lot
    ZonkOut,
    /// Remove a Parking Lot and the matching cards next to it
    Hangout,
    /// Remove two adjacent cards of the same suit ($1)
    EasyGo,
}

impl MoveKind {
    pub const ALL: [MoveKind; 8] = [
        MoveKind::Haul,
        MoveKind::Bargain,
        MoveKind::FleaHop,
        MoveKind::DevilHop,
        MoveKind::WalkyTalky,
        MoveKind::ZonkOut,
        MoveKind::Hangout,
        MoveKind::EasyGo,
    ];

    pub fn cost(self) -> u32 {
        match self {
            MoveKind::Bargain | MoveKind::EasyGo => 1,
            MoveKind::DevilHop | MoveKind::WalkyTalky => 3,
            MoveKind::Haul | MoveKind::FleaHop | MoveKind::ZonkOut | MoveKind::Hangout => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MoveKind::Haul => "Haul",
            MoveKind::Bargain => "Bargain",
            MoveKind::FleaHop => "Flea Hop",
            MoveKind::DevilHop => "Devil Hop",
            MoveKind::WalkyTalky => "Walky Talky",
            MoveKind::ZonkOut => "Zonk Out",
            MoveKind::Hangout => "Hangout",
            MoveKind::EasyGo => "Easy Go",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cards picked by the player, by identity, in the order they were picked.
///
/// `target` is the extra anchor card used by Devil Hop (required) and
/// Walky Talky (optional, the nearest match is used when absent).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub cards: Vec<CardId>,
    #[serde(default)]
    pub target: Option<CardId>,
}

impl Selection {
    pub fn of<I: IntoIterator<Item = CardId>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            target: None,
        }
    }

    pub fn with_target(mut self, target: CardId) -> Self {
        self.target = Some(target);
        self
    }
}

/// A move kind paired with the selection it should act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub kind: MoveKind,
    pub selection: Selection,
}

impl MoveRequest {
    pub fn new(kind: MoveKind, selection: Selection) -> Self {
        Self { kind, selection }
    }
}

/// Result of executing a validated move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The Market after the move
    pub market: Market,
    /// Cards to append to the Bankroll, in former Market order
    pub bankroll: Vec<Card>,
    /// Cards to append to the Easy Go, in former Market order
    pub easy_go: Vec<Card>,
    /// Money spent on the move
    pub cost: u32,
}

impl MoveOutcome {
    pub fn removed(&self) -> usize {
        self.bankroll.len() + self.easy_go.len()
    }
}

/// Applies a move that [`validate`] accepted against this same `market`.
pub fn execute(market: &Market, mv: &ValidatedMove) -> MoveOutcome {
    let mut bankroll = Vec::new();
    let mut easy_go = Vec::new();
    let next = match &mv.plan {
        Plan::Remove { block, to } => {
            let (rest, removed) = market.remove_block(block.clone());
            match to {
                Pile::Bankroll => bankroll = removed,
                Pile::EasyGo => easy_go = removed,
            }
            rest
        }
        Plan::Swap { upper } => market.swap_down(*upper),
        Plan::Relocate { block, anchor } => market.relocate(block.clone(), *anchor),
    };
    debug_assert!(next.boundary_holds(), "{} moved a card past the boundary", mv.kind());
    debug_assert_eq!(
        next.len() + bankroll.len() + easy_go.len(),
        market.len(),
        "{} changed the number of cards",
        mv.kind()
    );
    MoveOutcome {
        market: next,
        bankroll,
        easy_go,
        cost: mv.cost(),
    }
}

/// Validates `request` against the current `market` and `money`, then executes it.
///
/// # Examples
///
/// ```
/// use fleadevil_engine::cards::{Card, CardId, Rank, Suit};
/// use fleadevil_engine::market::Market;
/// use fleadevil_engine::moves::{apply, MoveKind, MoveRequest, Selection};
///
/// let market = Market::new(vec![
///     Card::standard(CardId(0), Rank::Seven, Suit::Spades),
///     Card::standard(CardId(1), Rank::Seven, Suit::Hearts),
///     Card::standard(CardId(2), Rank::Two, Suit::Clubs),
/// ]);
/// let request = MoveRequest::new(MoveKind::Haul, Selection::of([CardId(1), CardId(0)]));
/// let outcome = apply(&market, &request, 0).unwrap();
/// assert_eq!(outcome.market.len(), 1);
/// assert_eq!(outcome.bankroll.len(), 2);
/// ```
pub fn apply(market: &Market, request: &MoveRequest, money: u32) -> Result<MoveOutcome, MoveError> {
    let mv = validate(market, request, money)?;
    Ok(execute(market, &mv))
}

fn run(
    kind: MoveKind,
    market: &Market,
    selection: &Selection,
    money: u32,
) -> Result<MoveOutcome, MoveError> {
    apply(market, &MoveRequest::new(kind, selection.clone()), money)
}

pub fn haul(market: &Market, selection: &Selection) -> Result<MoveOutcome, MoveError> {
    run(MoveKind::Haul, market, selection, 0)
}

pub fn bargain(
    market: &Market,
    selection: &Selection,
    money: u32,
) -> Result<MoveOutcome, MoveError> {
    run(MoveKind::Bargain, market, selection, money)
}

pub fn flea_hop(market: &Market, selection: &Selection) -> Result<MoveOutcome, MoveError> {
    run(MoveKind::FleaHop, market, selection, 0)
}

pub fn devil_hop(
    market: &Market,
    selection: &Selection,
    money: u32,
) -> Result<MoveOutcome, MoveError> {
    run(MoveKind::DevilHop, market, selection, money)
}

pub fn walky_talky(
    market: &Market,
    selection: &Selection,
    money: u32,
) -> Result<MoveOutcome, MoveError> {
    run(MoveKind::WalkyTalky, market, selection, money)
}

pub fn zonk_out(market: &Market, selection: &Selection) -> Result<MoveOutcome, MoveError> {
    run(MoveKind::ZonkOut, market, selection, 0)
}

pub fn hangout(market: &Market, selection: &Selection) -> Result<MoveOutcome, MoveError> {
    run(MoveKind::Hangout, market, selection, 0)
}

pub fn easy_go(
    market: &Market,
    selection: &Selection,
    money: u32,
) -> Result<MoveOutcome, MoveError> {
    run(MoveKind::EasyGo, market, selection, money)
}
