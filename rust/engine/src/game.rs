use serde::{Deserialize, Serialize};

/// A game ends once this many rounds have been lost.
pub const MAX_STRIKES: u32 = 3;

/// How a finished round went.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The Market was cleared
    Won,
    /// No legal move was left, or the player gave up
    Lost,
}

/// Running totals across the rounds of one game.
/// Wins add to the score, losses add a strike; neither is ever reset by a new round.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds won
    score: u32,
    /// Rounds lost
    strikes: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn strikes(&self) -> u32 {
        self.strikes
    }

    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Won => self.score = self.score.saturating_add(1),
            RoundOutcome::Lost => self.strikes = self.strikes.saturating_add(1),
        }
    }

    pub fn is_over(&self, max_strikes: u32) -> bool {
        self.strikes >= max_strikes
    }
}
