use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{initialize_deck, Card};

/// Returns a uniformly shuffled copy of `deck`; the input is left untouched.
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Seeded source of shuffled decks, one per round.
///
/// # Examples
///
/// ```
/// use fleadevil_engine::deck::Deck;
///
/// let mut a = Deck::new_with_seed(42);
/// let mut b = Deck::new_with_seed(42);
/// assert_eq!(a.shuffled(), b.shuffled());
/// ```
#[derive(Debug)]
pub struct Deck {
    seed: u64,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A freshly built and shuffled 56-card sequence.
    pub fn shuffled(&mut self) -> Vec<Card> {
        shuffle_deck(&initialize_deck(), &mut self.rng)
    }
}
