// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. For each hand the evaluator
//! finds the best five cards, their category and a tie-break vector used to
//! totally order hands, two hands that compare equal split the pot.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use showdown_eval::*;
//! let hole = Card::parse_many("AhKh", 2).unwrap();
//! let board = Card::parse_many("QhJhTh7s8s", 5).unwrap();
//!
//! let hv = HandValue::eval(&hole, &board).unwrap();
//! assert_eq!(hv.rank(), HandRank::StraightFlush);
//! assert_eq!(hv.to_string(), "Royal Flush (Ah Kh Qh Jh Th)");
//!
//! let other = Card::parse_many("5s6s", 2).unwrap();
//! assert!(hv > HandValue::eval(&other, &board).unwrap());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{BOARD_CARDS, EvalError, HOLE_CARDS, HandRank, HandValue};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseCardError, Rank, Suit};
