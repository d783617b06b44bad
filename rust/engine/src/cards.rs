use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents one of the four suits of the standard part of the deck.
/// Zonkers and Parking Lots carry no suit at all.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

/// Represents the rank of a standard card from Ace (1) through King (13).
/// Runs are built from consecutive numeric values and never wrap around.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Opaque handle for one physical card, assigned once when the deck is built.
///
/// Two Zonkers (or two Parking Lots) have identical faces; only the id tells
/// them apart, so selections always refer to cards by id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The three families of cards in the 56-card deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Standard,
    Zonker,
    ParkingLot,
}

/// What is printed on a card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// One of the 52 ranked and suited cards
    Standard { rank: Rank, suit: Suit },
    /// Joker stand-in: no rank, no suit, blocks Flea Hops
    Zonker,
    /// Blank extra card; one of them marks the bottom of the Market
    ParkingLot,
}

/// A single physical card: a stable identity plus its face.
/// Equality includes the id, so two Zonkers never compare equal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Identity assigned at deck construction
    pub id: CardId,
    /// Rank/suit, or one of the two special faces
    pub face: Face,
}

impl Card {
    pub fn standard(id: CardId, rank: Rank, suit: Suit) -> Self {
        Self {
            id,
            face: Face::Standard { rank, suit },
        }
    }

    pub fn zonker(id: CardId) -> Self {
        Self {
            id,
            face: Face::Zonker,
        }
    }

    pub fn parking_lot(id: CardId) -> Self {
        Self {
            id,
            face: Face::ParkingLot,
        }
    }

    pub fn kind(&self) -> CardKind {
        match self.face {
            Face::Standard { .. } => CardKind::Standard,
            Face::Zonker => CardKind::Zonker,
            Face::ParkingLot => CardKind::ParkingLot,
        }
    }

    pub fn rank(&self) -> Option<Rank> {
        match self.face {
            Face::Standard { rank, .. } => Some(rank),
            _ => None,
        }
    }

    pub fn suit(&self) -> Option<Suit> {
        match self.face {
            Face::Standard { suit, .. } => Some(suit),
            _ => None,
        }
    }

    pub fn is_zonker(&self) -> bool {
        self.face == Face::Zonker
    }

    pub fn is_parking_lot(&self) -> bool {
        self.face == Face::ParkingLot
    }

    /// Value comparison that ignores identity.
    pub fn same_face(&self, other: &Card) -> bool {
        self.face == other.face
    }

    /// True when both cards are standard and share a rank or a suit.
    pub fn matches(&self, other: &Card) -> bool {
        match (self.face, other.face) {
            (
                Face::Standard { rank: r1, suit: s1 },
                Face::Standard { rank: r2, suit: s2 },
            ) => r1 == r2 || s1 == s2,
            _ => false,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face {
            Face::Standard { rank, suit } => write!(f, "{}{}", rank.label(), suit.symbol()),
            Face::Zonker => write!(f, "ZK"),
            Face::ParkingLot => write!(f, "PL"),
        }
    }
}

pub const DECK_SIZE: usize = 56;

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// Builds the canonical 56-card sequence: the 52 standard cards suit by suit,
/// then two Zonkers, then two Parking Lots. Ids follow that order.
pub fn initialize_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    let mut next = 0u8;
    let mut id = || {
        let current = CardId(next);
        next += 1;
        current
    };
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card::standard(id(), r, s));
        }
    }
    v.push(Card::zonker(id()));
    v.push(Card::zonker(id()));
    v.push(Card::parking_lot(id()));
    v.push(Card::parking_lot(id()));
    v
}
