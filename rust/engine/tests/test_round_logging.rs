use std::fs;

use fleadevil_engine::cards::{Card, CardId, Rank as R, Suit as S};
use fleadevil_engine::game::RoundOutcome;
use fleadevil_engine::logger::{MoveRecord, RoundLogger, RoundRecord};
use fleadevil_engine::moves::MoveKind;
use fleadevil_engine::round::RoundController;

fn sample(round_id: &str) -> RoundRecord {
    let seven = Card::standard(CardId(6), R::Seven, S::Clubs);
    let other = Card::standard(CardId(19), R::Seven, S::Diamonds);
    RoundRecord {
        round_id: round_id.to_string(),
        seed: Some(1),
        round: 1,
        opening: vec![seven, other],
        moves: vec![MoveRecord {
            kind: MoveKind::Haul,
            cards: vec![seven, other],
            target: None,
            cost: 0,
        }],
        outcome: Some(RoundOutcome::Won),
        money: 10,
        ts: None,
        meta: None,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rounds.jsonl");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    logger.write(&sample("20260102-000001")).expect("write");
    logger.write(&sample("20260102-000002")).expect("write");

    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    let text = String::from_utf8(bytes).expect("utf8");
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("logs").join("rounds.jsonl");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    logger.write(&sample("20260102-000001")).expect("write");
    assert!(path.exists());
}

#[test]
fn sequential_ids_increment() {
    let mut logger = RoundLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rounds_ts.jsonl");
    let mut logger = RoundLogger::create(&path).expect("create logger");

    let rec = sample("20260102-000010");
    logger.write(&rec).expect("write");
    let line = fs::read_to_string(&path).unwrap();
    let parsed: RoundRecord = serde_json::from_str(line.trim_end()).unwrap();
    assert!(parsed.ts.is_some(), "ts should be injected");

    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec2 = RoundRecord {
        ts: Some(preset.clone()),
        ..rec
    };
    logger.write(&rec2).expect("write2");
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(&preset), "preset ts must be kept");
}

#[test]
fn controller_record_survives_a_json_round_trip() {
    let mut ctl = RoundController::new(Some(31));
    ctl.start_round().expect("start");
    let first = ctl.legal_moves().into_iter().next().expect("a legal move");
    ctl.apply(&first).expect("apply");
    ctl.forfeit().expect("forfeit");

    let rec = ctl.record("20260102-000003".to_string());
    let json = serde_json::to_string(&rec).unwrap();
    let back: RoundRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rec);
    assert_eq!(back.outcome, Some(RoundOutcome::Lost));
    assert_eq!(back.opening.len(), 56);
    assert_eq!(back.moves.len(), 1);
}
