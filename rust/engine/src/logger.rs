use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::RoundOutcome;
use crate::market::Market;
use crate::moves::{MoveKind, MoveRequest};

/// Records one applied move with the faces of the cards involved.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move that was applied
    pub kind: MoveKind,
    /// Selected cards, in selection order
    pub cards: Vec<Card>,
    /// Anchor card for Devil Hop / Walky Talky
    #[serde(default)]
    pub target: Option<Card>,
    /// Money spent on the move
    pub cost: u32,
}

impl MoveRecord {
    /// Builds the record from the Market the request was validated against.
    pub fn capture(market: &Market, request: &MoveRequest, cost: u32) -> Self {
        Self {
            kind: request.kind,
            cards: request
                .selection
                .cards
                .iter()
                .filter_map(|&id| market.card(id).copied())
                .collect(),
            target: request.selection.target.and_then(|id| market.card(id).copied()),
            cost,
        }
    }
}

/// Complete record of one round: the opening Market, every move and the result.
/// Serialized to JSONL, one round per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Deck seed the game was started with
    pub seed: Option<u64>,
    /// 1-based round number within the game
    pub round: u32,
    /// Market after the boundary was seated
    pub opening: Vec<Card>,
    /// Chronological list of applied moves
    pub moves: Vec<MoveRecord>,
    /// Result, absent while the round is still running
    pub outcome: Option<RoundOutcome>,
    /// Money left when the record was taken
    pub money: u32,
    /// Timestamp (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`RoundRecord`]s to a JSONL file.
pub struct RoundLogger {
    writer: Option<BufWriter<std::fs::File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
