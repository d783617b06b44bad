//! # fleadevil-engine: Flea Devil Solitaire rule engine
//!
//! A deterministic rule engine for Flea Devil Solitaire, a single-player game
//! played with the whole deck in hand: 52 standard cards, two Zonkers and two
//! Parking Lots laid out as one face-up line, the Market. Moves remove cards
//! to the Bankroll or the Easy Go, or shuffle them around inside the Market;
//! a round is won when the Market is empty.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card identity and faces (Suit, Rank, Zonker, Parking Lot), deck construction
//! - [`deck`] - Seeded ChaCha20 shuffling
//! - [`market`] - The Market sequence, positional adjacency and the Parking Lot boundary
//! - [`rules`] - Move validation and legal-move enumeration
//! - [`moves`] - Move kinds, selections and executors
//! - [`round`] - Round controller state machine
//! - [`game`] - Score and strikes across rounds
//! - [`logger`] - RoundRecord JSONL serialization
//! - [`errors`] - Rejection reasons and controller errors
//!
//! ## Quick Start
//!
//! ```rust
//! use fleadevil_engine::moves::{MoveKind, MoveRequest, Selection};
//! use fleadevil_engine::round::RoundController;
//!
//! let mut ctl = RoundController::new(Some(42));
//! ctl.start_round().unwrap();
//!
//! // Swap the two top cards for $1
//! let top: Vec<_> = ctl.market().cards()[..2].iter().map(|c| c.id).collect();
//! let report = ctl
//!     .apply(&MoveRequest::new(MoveKind::Bargain, Selection::of(top)))
//!     .unwrap();
//! assert_eq!(report.money, 9);
//! ```
//!
//! ## Rejections are values
//!
//! Illegal requests never panic and never change state; the reason comes back
//! as a [`errors::MoveError`] whose `Display` text is meant for the player:
//!
//! ```rust
//! use fleadevil_engine::cards::{Card, CardId, Rank, Suit};
//! use fleadevil_engine::market::Market;
//! use fleadevil_engine::moves::{flea_hop, Selection};
//!
//! let market = Market::new(vec![
//!     Card::standard(CardId(0), Rank::Three, Suit::Spades),
//!     Card::standard(CardId(1), Rank::Five, Suit::Hearts),
//! ]);
//! match flea_hop(&market, &Selection::of([CardId(0), CardId(1)])) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => println!("Invalid Flea Hop: {}", e),
//! }
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod logger;
pub mod market;
pub mod moves;
pub mod round;
pub mod rules;
