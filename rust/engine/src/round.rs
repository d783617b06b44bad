use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{RoundOutcome, Scoreboard};
use crate::logger::{MoveRecord, RoundRecord};
use crate::market::Market;
use crate::moves::{self, MoveKind, MoveRequest};
use crate::rules;

/// Money every round starts with.
pub const STARTING_MONEY: u32 = 10;

/// Lifecycle of a single round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundState {
    /// No round has been dealt yet
    Init,
    /// Moves are being accepted
    Active,
    /// The Market was cleared
    Won,
    /// The round was lost; no legal move remained or the player forfeited
    Lost,
}

impl RoundState {
    pub fn is_finished(self) -> bool {
        matches!(self, RoundState::Won | RoundState::Lost)
    }
}

/// What a successful move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub kind: MoveKind,
    /// Money spent
    pub cost: u32,
    /// Cards that went face-down to the Bankroll
    pub to_bankroll: Vec<Card>,
    /// Cards that went to the Easy Go
    pub to_easy_go: Vec<Card>,
    /// Money left after the move
    pub money: u32,
    /// Round state after the move
    pub state: RoundState,
}

/// Owns the authoritative round state and runs every move through
/// validate-then-execute.
///
/// # Examples
///
/// ```
/// use fleadevil_engine::round::{RoundController, RoundState};
///
/// let mut ctl = RoundController::new(Some(7));
/// assert_eq!(ctl.state(), RoundState::Init);
/// ctl.start_round().unwrap();
/// assert_eq!(ctl.state(), RoundState::Active);
/// assert_eq!(ctl.market().len(), 56);
/// assert_eq!(ctl.money(), 10);
/// assert!(ctl.market().cards().last().unwrap().is_parking_lot());
/// ```
#[derive(Debug)]
pub struct RoundController {
    /// Shuffle source, only drawn from when a round starts
    deck: Deck,
    /// Money granted at the start of each round
    starting_money: u32,
    state: RoundState,
    /// 1-based number of the current round, 0 before the first deal
    round_no: u32,
    market: Market,
    /// Market as it was when the round started
    opening: Vec<Card>,
    bankroll: Vec<Card>,
    easy_go: Vec<Card>,
    money: u32,
    /// Moves applied during the current round
    history: Vec<MoveRecord>,
    scoreboard: Scoreboard,
}

impl RoundController {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            deck: Deck::new_with_seed(seed),
            starting_money: STARTING_MONEY,
            state: RoundState::Init,
            round_no: 0,
            market: Market::default(),
            opening: Vec::new(),
            bankroll: Vec::new(),
            easy_go: Vec::new(),
            money: 0,
            history: Vec::new(),
            scoreboard: Scoreboard::new(),
        }
    }

    pub fn with_starting_money(mut self, money: u32) -> Self {
        self.starting_money = money;
        self
    }

    /// Shuffles a fresh deck, seats the Parking Lot boundary and resets the
    /// per-round piles and money. Score and strikes carry over.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        if self.state == RoundState::Active {
            return Err(GameError::RoundInProgress);
        }
        let market = Market::seated(self.deck.shuffled());
        self.begin(market);
        Ok(())
    }

    /// Starts a round from a prepared Market instead of a shuffle. A Market
    /// that is already empty or stuck finishes the round straight away.
    pub fn start_with_market(&mut self, market: Market) -> Result<(), GameError> {
        if self.state == RoundState::Active {
            return Err(GameError::RoundInProgress);
        }
        self.begin(market);
        Ok(())
    }

    fn begin(&mut self, market: Market) {
        self.round_no += 1;
        self.opening = market.cards().to_vec();
        self.market = market;
        self.bankroll.clear();
        self.easy_go.clear();
        self.history.clear();
        self.money = self.starting_money;
        self.state = RoundState::Active;
        info!(
            round = self.round_no,
            cards = self.market.len(),
            money = self.money,
            "round started"
        );
        self.settle();
    }

    /// Ends the round if the Market is empty or nothing can be played.
    fn settle(&mut self) {
        if self.market.is_empty() {
            self.finish(RoundOutcome::Won);
        } else if !rules::has_legal_move(&self.market, self.money) {
            self.finish(RoundOutcome::Lost);
        }
    }

    /// Validates and, if legal, executes `request`.
    ///
    /// # Errors
    ///
    /// - [`GameError::RoundNotActive`] outside an active round
    /// - [`GameError::Move`] with the rejection reason; nothing changes
    pub fn apply(&mut self, request: &MoveRequest) -> Result<MoveReport, GameError> {
        if self.state != RoundState::Active {
            return Err(GameError::RoundNotActive(self.state));
        }
        let outcome = match moves::apply(&self.market, request, self.money) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(kind = %request.kind, reason = %e, "move rejected");
                return Err(e.into());
            }
        };

        let record = MoveRecord::capture(&self.market, request, outcome.cost);
        self.money -= outcome.cost;
        self.bankroll.extend_from_slice(&outcome.bankroll);
        self.easy_go.extend_from_slice(&outcome.easy_go);
        self.market = outcome.market;
        self.history.push(record);
        debug!(
            kind = %request.kind,
            cost = outcome.cost,
            money = self.money,
            market = self.market.len(),
            "move applied"
        );

        self.settle();

        Ok(MoveReport {
            kind: request.kind,
            cost: outcome.cost,
            to_bankroll: outcome.bankroll,
            to_easy_go: outcome.easy_go,
            money: self.money,
            state: self.state,
        })
    }

    /// Gives up the active round, which counts as a loss.
    pub fn forfeit(&mut self) -> Result<(), GameError> {
        if self.state != RoundState::Active {
            return Err(GameError::RoundNotActive(self.state));
        }
        self.finish(RoundOutcome::Lost);
        Ok(())
    }

    fn finish(&mut self, outcome: RoundOutcome) {
        self.state = match outcome {
            RoundOutcome::Won => RoundState::Won,
            RoundOutcome::Lost => RoundState::Lost,
        };
        self.scoreboard.record(outcome);
        info!(
            round = self.round_no,
            outcome = ?outcome,
            remaining = self.market.len(),
            score = self.scoreboard.score(),
            strikes = self.scoreboard.strikes(),
            "round finished"
        );
    }

    /// Every move the player could make right now; empty outside an active round.
    pub fn legal_moves(&self) -> Vec<MoveRequest> {
        if self.state != RoundState::Active {
            return Vec::new();
        }
        rules::legal_moves(&self.market, self.money)
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.state {
            RoundState::Won => Some(RoundOutcome::Won),
            RoundState::Lost => Some(RoundOutcome::Lost),
            RoundState::Init | RoundState::Active => None,
        }
    }

    /// Snapshot of the current round for the JSONL log.
    pub fn record(&self, round_id: String) -> RoundRecord {
        RoundRecord {
            round_id,
            seed: Some(self.deck.seed()),
            round: self.round_no,
            opening: self.opening.clone(),
            moves: self.history.clone(),
            outcome: self.outcome(),
            money: self.money,
            ts: None,
            meta: None,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }
    pub fn market(&self) -> &Market {
        &self.market
    }
    pub fn bankroll(&self) -> &[Card] {
        &self.bankroll
    }
    pub fn easy_go(&self) -> &[Card] {
        &self.easy_go
    }
    pub fn money(&self) -> u32 {
        self.money
    }
    pub fn round_number(&self) -> u32 {
        self.round_no
    }
    pub fn seed(&self) -> u64 {
        self.deck.seed()
    }
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
}
