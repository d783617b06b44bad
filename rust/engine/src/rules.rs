//! Move validation and legal-move enumeration.
//!
//! [`validate`] guards every request in the same order: selected cards must be
//! present and distinct, a target is only accepted by Devil Hop and Walky
//! Talky, the selection size must fit the move, the move must be affordable,
//! and only then is the move's own rule checked. [`legal_moves`] walks every
//! candidate selection through the same checks, which is how a round detects
//! that nothing is left to play.

use std::collections::HashSet;
use std::ops::Range;

use crate::cards::{Card, CardId, CardKind};
use crate::errors::MoveError;
use crate::market::Market;
use crate::moves::{MoveKind, MoveRequest, Selection};

/// A move request that passed validation, with its selection resolved to
/// Market positions. Only [`validate`] can build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedMove {
    kind: MoveKind,
    pub(crate) plan: Plan,
}

impl ValidatedMove {
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    pub fn cost(&self) -> u32 {
        self.kind.cost()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Plan {
    Remove { block: Range<usize>, to: Pile },
    Swap { upper: usize },
    Relocate { block: Range<usize>, anchor: usize },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Pile {
    Bankroll,
    EasyGo,
}

/// Decides whether `request` is legal against the current `market` with
/// `money` available.
///
/// Checks run in a fixed order: every selected card must still be in the
/// Market, only Devil Hop and Walky Talky may name a target and that target
/// must still be in the Market, the selection must have the right size, the move
/// must be affordable, and finally the move's own rule must hold.
///
/// # Errors
///
/// - [`MoveError::StaleReference`] / [`MoveError::DuplicateSelection`] for a bad selection
/// - [`MoveError::UnexpectedTarget`] when a move that takes no target names one
/// - [`MoveError::SelectionSize`] when too few or too many cards are picked
/// - [`MoveError::InsufficientFunds`] when `money` is below the move's cost
/// - any structural reason when the cards don't satisfy the move
///
/// # Examples
///
/// ```
/// use fleadevil_engine::cards::{Card, CardId, Rank, Suit};
/// use fleadevil_engine::errors::{ErrorClass, MoveError};
/// use fleadevil_engine::market::Market;
/// use fleadevil_engine::moves::{MoveKind, MoveRequest, Selection};
/// use fleadevil_engine::rules::validate;
///
/// let market = Market::new(vec![
///     Card::standard(CardId(0), Rank::Three, Suit::Spades),
///     Card::standard(CardId(1), Rank::Five, Suit::Hearts),
/// ]);
///
/// let bargain = MoveRequest::new(MoveKind::Bargain, Selection::of([CardId(0), CardId(1)]));
/// assert!(validate(&market, &bargain, 1).is_ok());
/// let err = validate(&market, &bargain, 0).unwrap_err();
/// assert_eq!(err.class(), ErrorClass::Affordability);
///
/// let hop = MoveRequest::new(MoveKind::FleaHop, Selection::of([CardId(0), CardId(1)]));
/// assert_eq!(validate(&market, &hop, 10), Err(MoveError::SuitMismatch));
/// ```
pub fn validate(
    market: &Market,
    request: &MoveRequest,
    money: u32,
) -> Result<ValidatedMove, MoveError> {
    let kind = request.kind;
    let picked = resolve(market, &request.selection)?;
    let target = match request.selection.target {
        Some(_) if !takes_target(kind) => return Err(MoveError::UnexpectedTarget(kind)),
        Some(id) => Some(market.index_of(id).ok_or(MoveError::StaleReference(id))?),
        None => None,
    };
    check_size(kind, picked.len())?;
    let cost = kind.cost();
    if money < cost {
        return Err(MoveError::InsufficientFunds {
            kind,
            cost,
            available: money,
        });
    }

    let plan = match kind {
        MoveKind::Haul => haul(market, &picked)?,
        MoveKind::Bargain => bargain(market, &picked)?,
        MoveKind::FleaHop => flea_hop(market, &picked)?,
        MoveKind::DevilHop => devil_hop(market, &picked, target)?,
        MoveKind::WalkyTalky => walky_talky(market, &picked, target)?,
        MoveKind::ZonkOut => zonk_out(market, &picked)?,
        MoveKind::Hangout => hangout(market, &picked)?,
        MoveKind::EasyGo => easy_go(market, &picked)?,
    };
    Ok(ValidatedMove { kind, plan })
}

fn takes_target(kind: MoveKind) -> bool {
    matches!(kind, MoveKind::DevilHop | MoveKind::WalkyTalky)
}

/// Market positions of the selected cards, in selection order.
fn resolve(market: &Market, selection: &Selection) -> Result<Vec<usize>, MoveError> {
    let mut seen = HashSet::with_capacity(selection.cards.len());
    let mut positions = Vec::with_capacity(selection.cards.len());
    for &id in &selection.cards {
        let pos = market.index_of(id).ok_or(MoveError::StaleReference(id))?;
        if !seen.insert(id) {
            return Err(MoveError::DuplicateSelection(id));
        }
        positions.push(pos);
    }
    Ok(positions)
}

fn check_size(kind: MoveKind, actual: usize) -> Result<(), MoveError> {
    let (ok, expected) = match kind {
        MoveKind::Haul => ((2..=4).contains(&actual), "2 to 4"),
        MoveKind::Hangout => (actual >= 2, "at least 2"),
        MoveKind::DevilHop => (actual == 4, "exactly 4"),
        MoveKind::WalkyTalky => (actual == 3, "exactly 3"),
        MoveKind::Bargain | MoveKind::FleaHop | MoveKind::ZonkOut | MoveKind::EasyGo => {
            (actual == 2, "exactly 2")
        }
    };
    if ok {
        Ok(())
    } else {
        Err(MoveError::SelectionSize {
            kind,
            expected,
            actual,
        })
    }
}

fn at(market: &Market, pos: usize) -> &Card {
    &market.cards()[pos]
}

fn sorted(picked: &[usize]) -> Vec<usize> {
    let mut v = picked.to_vec();
    v.sort_unstable();
    v
}

/// The half-open range covered by `sorted` positions, if they have no gaps.
fn contiguous(sorted: &[usize]) -> Option<Range<usize>> {
    let first = *sorted.first()?;
    let last = *sorted.last()?;
    if sorted.windows(2).all(|w| w[1] == w[0] + 1) {
        Some(first..last + 1)
    } else {
        None
    }
}

fn pair(picked: &[usize]) -> Result<usize, MoveError> {
    let (a, b) = (picked[0], picked[1]);
    if a.abs_diff(b) == 1 {
        Ok(a.min(b))
    } else {
        Err(MoveError::NotAdjacent)
    }
}

fn haul(market: &Market, picked: &[usize]) -> Result<Plan, MoveError> {
    let sorted = sorted(picked);
    let mut rank = None;
    for &pos in &sorted {
        let card = at(market, pos);
        let r = card.rank().ok_or(MoveError::Faceless(card.id))?;
        match rank {
            None => rank = Some(r),
            Some(first) if first != r => return Err(MoveError::RankMismatch),
            Some(_) => {}
        }
    }
    let block = contiguous(&sorted).ok_or(MoveError::NotAdjacent)?;
    Ok(Plan::Remove {
        block,
        to: Pile::Bankroll,
    })
}

fn bargain(market: &Market, picked: &[usize]) -> Result<Plan, MoveError> {
    let upper = pair(picked)?;
    // the boundary card stays last, so it can never trade places
    if market.is_boundary(upper) || market.is_boundary(upper + 1) {
        return Err(MoveError::CrossesBoundary);
    }
    Ok(Plan::Swap { upper })
}

fn flea_hop(market: &Market, picked: &[usize]) -> Result<Plan, MoveError> {
    let (from, anchor) = (picked[0], picked[1]);
    let mover = at(market, from);
    let host = at(market, anchor);
    let s1 = mover.suit().ok_or(MoveError::Faceless(mover.id))?;
    let s2 = host.suit().ok_or(MoveError::Faceless(host.id))?;
    if s1 != s2 {
        return Err(MoveError::SuitMismatch);
    }
    let between = from.min(anchor) + 1..from.max(anchor);
    if market.cards()[between].iter().any(Card::is_zonker) {
        return Err(MoveError::BlockedByZonker);
    }
    let block = from..from + 1;
    if Market::is_beside(&block, anchor) {
        return Err(MoveError::AlreadyAdjacent);
    }
    Ok(Plan::Relocate { block, anchor })
}

fn devil_hop(market: &Market, picked: &[usize], target: Option<usize>) -> Result<Plan, MoveError> {
    let mut suits = HashSet::with_capacity(4);
    for &pos in picked {
        let card = at(market, pos);
        let suit = card.suit().ok_or(MoveError::Faceless(card.id))?;
        suits.insert(suit);
    }
    if suits.len() != 4 {
        return Err(MoveError::SuitsNotDistinct);
    }
    let block = contiguous(&sorted(picked)).ok_or(MoveError::NotAdjacent)?;
    let anchor = target.ok_or(MoveError::MissingTarget(MoveKind::DevilHop))?;
    if block.contains(&anchor) {
        return Err(MoveError::TargetInSelection(at(market, anchor).id));
    }
    if Market::is_beside(&block, anchor) {
        return Err(MoveError::AlreadyAdjacent);
    }
    Ok(Plan::Relocate { block, anchor })
}

fn walky_talky(
    market: &Market,
    picked: &[usize],
    target: Option<usize>,
) -> Result<Plan, MoveError> {
    let sorted = sorted(picked);
    let mut values = Vec::with_capacity(3);
    for &pos in &sorted {
        let card = at(market, pos);
        let rank = card.rank().ok_or(MoveError::Faceless(card.id))?;
        values.push(i16::from(rank.value()));
    }
    let block = contiguous(&sorted).ok_or(MoveError::NotAdjacent)?;
    let step = values[1] - values[0];
    if step.abs() != 1 || values[2] - values[1] != step {
        return Err(MoveError::NotARun);
    }

    let middle = sorted[1];
    let pivot = at(market, middle);
    let anchor = match target {
        Some(t) => {
            let host = at(market, t);
            if block.contains(&t) {
                return Err(MoveError::TargetInSelection(host.id));
            }
            if !pivot.matches(host) {
                return Err(MoveError::TargetMismatch(host.id));
            }
            t
        }
        None => nearest_match(market, pivot, middle, &block).ok_or(MoveError::NoMatch)?,
    };
    Ok(Plan::Relocate {
        block: middle..middle + 1,
        anchor,
    })
}

/// Closest card outside `block` sharing a rank or suit with `pivot`; ties go
/// to the upper card.
fn nearest_match(
    market: &Market,
    pivot: &Card,
    from: usize,
    block: &Range<usize>,
) -> Option<usize> {
    market
        .cards()
        .iter()
        .enumerate()
        .filter(|(i, c)| !block.contains(i) && pivot.matches(c))
        .map(|(i, _)| i)
        .min_by_key(|&i| (i.abs_diff(from), i))
}

fn zonk_out(market: &Market, picked: &[usize]) -> Result<Plan, MoveError> {
    let kinds = (at(market, picked[0]).kind(), at(market, picked[1]).kind());
    match kinds {
        (CardKind::Zonker, CardKind::Zonker)
        | (CardKind::Zonker, CardKind::ParkingLot)
        | (CardKind::ParkingLot, CardKind::Zonker) => {}
        _ => return Err(MoveError::NotAZonkPair),
    }
    let upper = pair(picked)?;
    Ok(Plan::Remove {
        block: upper..upper + 2,
        to: Pile::EasyGo,
    })
}

fn hangout(market: &Market, picked: &[usize]) -> Result<Plan, MoveError> {
    let sorted = sorted(picked);
    let lots: Vec<usize> = sorted
        .iter()
        .copied()
        .filter(|&p| at(market, p).is_parking_lot())
        .collect();
    if lots.len() != 1 {
        return Err(MoveError::ParkingLotCount(lots.len()));
    }
    let block = contiguous(&sorted).ok_or(MoveError::NotAdjacent)?;
    let lot = lots[0];
    let run = if lot == block.start {
        block.start + 1..block.end
    } else if lot + 1 == block.end {
        block.start..block.end - 1
    } else {
        return Err(MoveError::ParkingLotNotAtEnd);
    };

    let mut faces = Vec::with_capacity(run.len());
    for pos in run {
        let card = at(market, pos);
        match (card.rank(), card.suit()) {
            (Some(r), Some(s)) => faces.push((r, s)),
            _ => return Err(MoveError::Faceless(card.id)),
        }
    }
    let (r0, s0) = faces[0];
    let same_rank = faces.iter().all(|&(r, _)| r == r0);
    let same_suit = faces.iter().all(|&(_, s)| s == s0);
    if !same_rank && !same_suit {
        return Err(MoveError::HangoutMismatch);
    }
    Ok(Plan::Remove {
        block,
        to: Pile::EasyGo,
    })
}

fn easy_go(market: &Market, picked: &[usize]) -> Result<Plan, MoveError> {
    let upper = pair(picked)?;
    let a = at(market, upper);
    let b = at(market, upper + 1);
    let s1 = a.suit().ok_or(MoveError::Faceless(a.id))?;
    let s2 = b.suit().ok_or(MoveError::Faceless(b.id))?;
    if s1 != s2 {
        return Err(MoveError::SuitMismatch);
    }
    Ok(Plan::Remove {
        block: upper..upper + 2,
        to: Pile::EasyGo,
    })
}

/// Every request that would currently be accepted.
///
/// Walky Talky requests carry an explicit target for each possible match.
/// The Market holds at most 56 cards, so a plain sweep over candidate
/// selections is quick enough to run after every move.
pub fn legal_moves(market: &Market, money: u32) -> Vec<MoveRequest> {
    candidates(market)
        .into_iter()
        .filter(|req| validate(market, req, money).is_ok())
        .collect()
}

pub fn has_legal_move(market: &Market, money: u32) -> bool {
    candidates(market)
        .iter()
        .any(|req| validate(market, req, money).is_ok())
}

fn candidates(market: &Market) -> Vec<MoveRequest> {
    let cards = market.cards();
    let ids: Vec<CardId> = cards.iter().map(|c| c.id).collect();
    let n = ids.len();
    let window = |start: usize, len: usize| Selection::of(ids[start..start + len].iter().copied());
    let mut out = Vec::new();

    for len in 2..=4 {
        for start in 0..n.saturating_sub(len - 1) {
            out.push(MoveRequest::new(MoveKind::Haul, window(start, len)));
        }
    }
    for start in 0..n.saturating_sub(1) {
        for kind in [MoveKind::Bargain, MoveKind::ZonkOut, MoveKind::EasyGo] {
            out.push(MoveRequest::new(kind, window(start, 2)));
        }
    }
    for (from, mover) in cards.iter().enumerate() {
        let Some(suit) = mover.suit() else { continue };
        for (to, host) in cards.iter().enumerate() {
            if from != to && host.suit() == Some(suit) {
                out.push(MoveRequest::new(
                    MoveKind::FleaHop,
                    Selection::of([ids[from], ids[to]]),
                ));
            }
        }
    }
    for start in 0..n.saturating_sub(3) {
        let suits: HashSet<_> = cards[start..start + 4].iter().filter_map(Card::suit).collect();
        if suits.len() != 4 {
            continue;
        }
        for &anchor in &ids {
            out.push(MoveRequest::new(
                MoveKind::DevilHop,
                window(start, 4).with_target(anchor),
            ));
        }
    }
    for start in 0..n.saturating_sub(2) {
        let pivot = &cards[start + 1];
        for host in cards.iter().filter(|c| pivot.matches(c)) {
            out.push(MoveRequest::new(
                MoveKind::WalkyTalky,
                window(start, 3).with_target(host.id),
            ));
        }
    }
    for (lot, card) in cards.iter().enumerate() {
        if !card.is_parking_lot() {
            continue;
        }
        for len in 2..=lot + 1 {
            out.push(MoveRequest::new(MoveKind::Hangout, window(lot + 1 - len, len)));
        }
        for len in 2..=n - lot {
            out.push(MoveRequest::new(MoveKind::Hangout, window(lot, len)));
        }
    }
    out
}
