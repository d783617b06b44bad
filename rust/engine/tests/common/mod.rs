#![allow(dead_code)]

use fleadevil_engine::cards::{Card, CardId, Rank, Suit};
use fleadevil_engine::market::Market;
use fleadevil_engine::moves::Selection;

pub fn card(id: u8, rank: Rank, suit: Suit) -> Card {
    Card::standard(CardId(id), rank, suit)
}

pub fn zk(id: u8) -> Card {
    Card::zonker(CardId(id))
}

pub fn pl(id: u8) -> Card {
    Card::parking_lot(CardId(id))
}

pub fn sel(ids: &[u8]) -> Selection {
    Selection::of(ids.iter().map(|&i| CardId(i)))
}

pub fn ids(market: &Market) -> Vec<u8> {
    market.cards().iter().map(|c| c.id.0).collect()
}

pub fn pile_ids(cards: &[Card]) -> Vec<u8> {
    cards.iter().map(|c| c.id.0).collect()
}
