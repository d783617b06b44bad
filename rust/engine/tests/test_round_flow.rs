mod common;

use common::{card, ids, sel, zk};
use fleadevil_engine::cards::{Rank as R, Suit as S, DECK_SIZE};
use fleadevil_engine::errors::{GameError, MoveError};
use fleadevil_engine::game::RoundOutcome;
use fleadevil_engine::market::Market;
use fleadevil_engine::moves::{MoveKind, MoveRequest};
use fleadevil_engine::round::{RoundController, RoundState, STARTING_MONEY};

fn request(kind: MoveKind, picked: &[u8]) -> MoveRequest {
    MoveRequest::new(kind, sel(picked))
}

fn winnable() -> Market {
    Market::new(vec![
        card(0, R::Seven, S::Spades),
        card(1, R::Seven, S::Hearts),
        zk(52),
        zk(53),
    ])
}

#[test]
fn start_round_deals_a_seated_market() {
    let mut ctl = RoundController::new(Some(42));
    assert_eq!(ctl.state(), RoundState::Init);
    assert!(!ctl.state().is_finished());
    assert_eq!(ctl.round_number(), 0);

    ctl.start_round().expect("start");
    assert_eq!(ctl.state(), RoundState::Active);
    assert_eq!(ctl.round_number(), 1);
    assert_eq!(ctl.market().len(), DECK_SIZE);
    assert_eq!(ctl.money(), STARTING_MONEY);
    assert!(ctl.bankroll().is_empty());
    assert!(ctl.easy_go().is_empty());

    let last = ctl.market().cards().last().expect("non-empty");
    assert!(last.is_parking_lot());
    assert_eq!(ctl.market().boundary(), Some(last.id));
}

#[test]
fn moves_before_the_first_deal_are_refused() {
    let mut ctl = RoundController::new(Some(1));
    let err = ctl.apply(&request(MoveKind::Haul, &[0, 1])).unwrap_err();
    assert_eq!(err, GameError::RoundNotActive(RoundState::Init));
    assert_eq!(ctl.forfeit(), Err(GameError::RoundNotActive(RoundState::Init)));
    assert!(ctl.legal_moves().is_empty());
}

#[test]
fn cannot_start_while_a_round_is_running() {
    let mut ctl = RoundController::new(Some(1));
    ctl.start_round().expect("start");
    let before = ctl.market().clone();
    assert_eq!(ctl.start_round(), Err(GameError::RoundInProgress));
    assert_eq!(ctl.start_with_market(winnable()), Err(GameError::RoundInProgress));
    assert_eq!(ctl.market(), &before);
    assert_eq!(ctl.round_number(), 1);
}

#[test]
fn clearing_the_market_wins_the_round() {
    let mut ctl = RoundController::new(Some(5));
    ctl.start_with_market(winnable()).expect("start");

    let report = ctl.apply(&request(MoveKind::Haul, &[0, 1])).expect("haul");
    assert_eq!(report.state, RoundState::Active);
    assert_eq!(report.to_bankroll.len(), 2);
    assert_eq!(ids(ctl.market()), vec![52, 53]);

    let report = ctl.apply(&request(MoveKind::ZonkOut, &[52, 53])).expect("zonk out");
    assert_eq!(report.state, RoundState::Won);
    assert!(report.state.is_finished());
    assert_eq!(report.to_easy_go.len(), 2);
    assert!(ctl.market().is_empty());
    assert_eq!(ctl.outcome(), Some(RoundOutcome::Won));
    assert_eq!(ctl.scoreboard().score(), 1);
    assert_eq!(ctl.scoreboard().strikes(), 0);

    let err = ctl.apply(&request(MoveKind::Haul, &[0, 1])).unwrap_err();
    assert_eq!(err, GameError::RoundNotActive(RoundState::Won));
}

#[test]
fn next_round_resets_money_but_keeps_the_score() {
    let mut ctl = RoundController::new(Some(5));
    ctl.start_with_market(winnable()).expect("start");
    ctl.apply(&request(MoveKind::Haul, &[0, 1])).expect("haul");
    ctl.apply(&request(MoveKind::ZonkOut, &[52, 53])).expect("zonk out");

    ctl.start_round().expect("second round");
    assert_eq!(ctl.state(), RoundState::Active);
    assert_eq!(ctl.round_number(), 2);
    assert_eq!(ctl.money(), STARTING_MONEY);
    assert!(ctl.bankroll().is_empty());
    assert!(ctl.easy_go().is_empty());
    assert!(ctl.history().is_empty());
    assert_eq!(ctl.scoreboard().score(), 1);
}

#[test]
fn running_out_of_moves_loses_the_round() {
    let mut ctl = RoundController::new(Some(5)).with_starting_money(0);
    ctl.start_with_market(Market::new(vec![
        card(0, R::Seven, S::Spades),
        card(1, R::Seven, S::Hearts),
        card(2, R::Ace, S::Clubs),
        card(3, R::Five, S::Hearts),
    ]))
    .expect("start");

    let report = ctl.apply(&request(MoveKind::Haul, &[0, 1])).expect("haul");
    assert_eq!(report.state, RoundState::Lost);
    assert_eq!(ctl.outcome(), Some(RoundOutcome::Lost));
    assert_eq!(ctl.scoreboard().strikes(), 1);
    assert_eq!(ids(ctl.market()), vec![2, 3]);
}

#[test]
fn rejected_move_changes_nothing() {
    let mut ctl = RoundController::new(Some(5));
    ctl.start_with_market(winnable()).expect("start");
    let market = ctl.market().clone();

    let err = ctl.apply(&request(MoveKind::FleaHop, &[52, 1])).unwrap_err();
    assert!(matches!(err, GameError::Move(MoveError::Faceless(_))));
    let err = ctl.apply(&request(MoveKind::Haul, &[0, 9])).unwrap_err();
    assert!(matches!(err, GameError::Move(MoveError::StaleReference(_))));

    assert_eq!(ctl.state(), RoundState::Active);
    assert_eq!(ctl.market(), &market);
    assert_eq!(ctl.money(), STARTING_MONEY);
    assert!(ctl.history().is_empty());
}

#[test]
fn paid_moves_spend_money() {
    let mut ctl = RoundController::new(Some(5));
    ctl.start_with_market(winnable()).expect("start");
    let report = ctl.apply(&request(MoveKind::Bargain, &[1, 52])).expect("bargain");
    assert_eq!(report.cost, 1);
    assert_eq!(report.money, STARTING_MONEY - 1);
    assert_eq!(ids(ctl.market()), vec![0, 52, 1, 53]);
}

#[test]
fn forfeit_counts_as_a_loss_once() {
    let mut ctl = RoundController::new(Some(9));
    ctl.start_round().expect("start");
    ctl.forfeit().expect("forfeit");
    assert_eq!(ctl.state(), RoundState::Lost);
    assert!(ctl.state().is_finished());
    assert_eq!(ctl.scoreboard().strikes(), 1);
    assert_eq!(ctl.forfeit(), Err(GameError::RoundNotActive(RoundState::Lost)));
    assert_eq!(ctl.scoreboard().strikes(), 1);
}

#[test]
fn every_listed_move_is_accepted() {
    let mut ctl = RoundController::new(Some(11));
    ctl.start_round().expect("start");
    let moves = ctl.legal_moves();
    assert!(!moves.is_empty(), "a fresh deal with $10 always allows a Bargain");
    for req in moves {
        let mut probe = RoundController::new(Some(11));
        probe.start_round().expect("start");
        assert!(probe.apply(&req).is_ok(), "{:?} should be legal", req);
    }
}

#[test]
fn same_seed_deals_the_same_rounds() {
    let mut a = RoundController::new(Some(2024));
    let mut b = RoundController::new(Some(2024));
    a.start_round().expect("start");
    b.start_round().expect("start");
    assert_eq!(a.market(), b.market());
    a.forfeit().expect("forfeit");
    b.forfeit().expect("forfeit");
    a.start_round().expect("start");
    b.start_round().expect("start");
    assert_eq!(a.market(), b.market());
}

#[test]
fn cards_are_conserved_while_playing() {
    let mut ctl = RoundController::new(Some(3));
    ctl.start_round().expect("start");
    for _ in 0..40 {
        let Some(req) = ctl.legal_moves().into_iter().next() else {
            break;
        };
        ctl.apply(&req).expect("listed move");
        let total = ctl.market().len() + ctl.bankroll().len() + ctl.easy_go().len();
        assert_eq!(total, DECK_SIZE);
        assert!(ctl.money() <= STARTING_MONEY);
        if ctl.state() != RoundState::Active {
            break;
        }
    }
}

#[test]
fn round_record_lists_applied_moves() {
    let mut ctl = RoundController::new(Some(5));
    ctl.start_with_market(winnable()).expect("start");
    ctl.apply(&request(MoveKind::Haul, &[0, 1])).expect("haul");

    let rec = ctl.record("20260101-000001".to_string());
    assert_eq!(rec.round, 1);
    assert_eq!(rec.seed, Some(5));
    assert_eq!(rec.opening.len(), 4);
    assert_eq!(rec.moves.len(), 1);
    assert_eq!(rec.moves[0].kind, MoveKind::Haul);
    assert_eq!(rec.moves[0].cards.len(), 2);
    assert_eq!(rec.outcome, None);
    assert_eq!(rec.money, STARTING_MONEY);
}

#[test]
fn a_stuck_deal_is_lost_immediately() {
    let mut ctl = RoundController::new(Some(5)).with_starting_money(0);
    ctl.start_with_market(Market::new(vec![
        card(0, R::Ace, S::Clubs),
        card(1, R::Five, S::Hearts),
    ]))
    .expect("start");
    assert_eq!(ctl.state(), RoundState::Lost);
    assert_eq!(ctl.scoreboard().strikes(), 1);

    ctl.start_with_market(Market::default()).expect("start");
    assert_eq!(ctl.state(), RoundState::Won);
    assert_eq!(ctl.scoreboard().score(), 1);
}
