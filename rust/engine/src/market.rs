use std::ops::Range;

use crate::cards::{Card, CardId};

/// The face-up line of cards every move operates on.
///
/// Index 0 is the top (next to the Bankroll), the last index is the bottom
/// (next to the Easy Go). Adjacency is purely positional and is recomputed
/// from the current order every time it is asked for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Market {
    /// Cards in Market order
    cards: Vec<Card>,
    /// Parking Lot that marks the bottom, once seated
    boundary: Option<CardId>,
}

impl Market {
    /// A Market with no boundary seated yet.
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            boundary: None,
        }
    }

    /// Builds a Market from a freshly shuffled deck and seats the boundary.
    ///
    /// A Parking Lot already at the bottom stays there; otherwise the Parking
    /// Lot closest to the bottom is moved down. Without any Parking Lot the
    /// Market simply has no boundary.
    ///
    /// ```
    /// use fleadevil_engine::cards::initialize_deck;
    /// use fleadevil_engine::market::Market;
    ///
    /// let market = Market::seated(initialize_deck());
    /// let last = market.cards().last().unwrap();
    /// assert!(last.is_parking_lot());
    /// assert_eq!(market.boundary(), Some(last.id));
    /// ```
    pub fn seated(mut cards: Vec<Card>) -> Self {
        let boundary = match cards.iter().rposition(Card::is_parking_lot) {
            Some(pos) => {
                let lot = cards.remove(pos);
                cards.push(lot);
                Some(lot.id)
            }
            None => None,
        };
        Self { cards, boundary }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn boundary(&self) -> Option<CardId> {
        self.boundary
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.index_of(id).is_some()
    }

    /// True iff both cards are present and their indices differ by exactly one.
    pub fn adjacent(&self, a: CardId, b: CardId) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => i.abs_diff(j) == 1,
            _ => false,
        }
    }

    pub fn is_boundary(&self, index: usize) -> bool {
        match (self.boundary, self.cards.get(index)) {
            (Some(b), Some(card)) => card.id == b,
            _ => false,
        }
    }

    /// Takes the cards in `block` out of the line, returning the rest and the
    /// removed cards in Market order.
    pub(crate) fn remove_block(&self, block: Range<usize>) -> (Market, Vec<Card>) {
        let mut cards = self.cards.clone();
        let removed: Vec<Card> = cards.drain(block).collect();
        let boundary = self
            .boundary
            .filter(|b| !removed.iter().any(|c| c.id == *b));
        (Market { cards, boundary }, removed)
    }

    /// Swaps the card at `upper` with the one directly below it.
    pub(crate) fn swap_down(&self, upper: usize) -> Market {
        let mut cards = self.cards.clone();
        cards.swap(upper, upper + 1);
        Market {
            cards,
            boundary: self.boundary,
        }
    }

    /// Moves `block` next to the card at `anchor`, on the side facing where the
    /// block came from. Cards in between close the gap.
    pub(crate) fn relocate(&self, block: Range<usize>, anchor: usize) -> Market {
        let mut cards = self.cards.clone();
        let len = block.len();
        let moved: Vec<Card> = cards.drain(block.clone()).collect();
        let at = if block.end <= anchor {
            anchor - len
        } else {
            anchor + 1
        };
        cards.splice(at..at, moved);
        Market {
            cards,
            boundary: self.boundary,
        }
    }

    /// Whether `block` already sits on the near side of `anchor`.
    pub(crate) fn is_beside(block: &Range<usize>, anchor: usize) -> bool {
        block.end == anchor || block.start == anchor + 1
    }

    /// Boundary card, if any, is still the last card.
    pub(crate) fn boundary_holds(&self) -> bool {
        match self.boundary {
            Some(b) => self.cards.last().map(|c| c.id) == Some(b),
            None => true,
        }
    }
}
