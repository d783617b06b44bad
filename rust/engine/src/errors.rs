use thiserror::Error;

use crate::cards::CardId;
use crate::moves::MoveKind;
use crate::round::RoundState;

/// Broad family of a rejected move, so callers can tell "can't afford it"
/// apart from "not allowed" without matching every reason.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorClass {
    /// The selection does not satisfy the move's positional or face rule
    Structural,
    /// The move is allowed but costs more than the available money
    Affordability,
    /// A selected card is no longer in the Market
    StaleReference,
}

/// Why a move request was rejected. The `Display` text is the reason shown to
/// the player; the Market is never touched when one of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("card {0} is not in the market")]
    StaleReference(CardId),
    #[error("card {0} was selected more than once")]
    DuplicateSelection(CardId),
    #[error("insufficient funds: {kind} costs ${cost}, you have ${available}")]
    InsufficientFunds {
        kind: MoveKind,
        cost: u32,
        available: u32,
    },
    #[error("{kind} needs {expected} selected cards, got {actual}")]
    SelectionSize {
        kind: MoveKind,
        expected: &'static str,
        actual: usize,
    },
    #[error("selected cards are not adjacent")]
    NotAdjacent,
    #[error("selected cards must share a rank")]
    RankMismatch,
    #[error("selected cards must share a suit")]
    SuitMismatch,
    #[error("{0} has no rank or suit")]
    Faceless(CardId),
    #[error("devil hop needs one card of each suit")]
    SuitsNotDistinct,
    #[error("selected cards do not form a run of consecutive ranks")]
    NotARun,
    #[error("{0} needs a target card")]
    MissingTarget(MoveKind),
    #[error("{0} does not take a target card")]
    UnexpectedTarget(MoveKind),
    #[error("target card {0} is part of the selection")]
    TargetInSelection(CardId),
    #[error("no card matching the middle of the run is in the market")]
    NoMatch,
    #[error("target card {0} does not share a rank or suit with the middle of the run")]
    TargetMismatch(CardId),
    #[error("a zonker between the cards blocks the flea hop")]
    BlockedByZonker,
    #[error("the cards are already next to each other; nothing would move")]
    AlreadyAdjacent,
    #[error("no card may move below the parking lot boundary")]
    CrossesBoundary,
    #[error("zonk out needs two zonkers, or a zonker and a parking lot")]
    NotAZonkPair,
    #[error("hangout needs exactly one parking lot, found {0}")]
    ParkingLotCount(usize),
    #[error("the parking lot must sit at one end of the selected cards")]
    ParkingLotNotAtEnd,
    #[error("cards next to the parking lot must all share a rank or all share a suit")]
    HangoutMismatch,
}

impl MoveError {
    pub fn class(&self) -> ErrorClass {
        match self {
            MoveError::StaleReference(_) => ErrorClass::StaleReference,
            MoveError::InsufficientFunds { .. } => ErrorClass::Affordability,
            _ => ErrorClass::Structural,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("No round in progress (state: {0:?})")]
    RoundNotActive(RoundState),
    #[error("A round is already in progress")]
    RoundInProgress,
    #[error(transparent)]
    Move(#[from] MoveError),
}
