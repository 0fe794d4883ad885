// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown core types for evaluating and settling Hold'em hands.
//!
//! ```
//! use std::collections::BTreeMap;
//! use showdown_core::{PlayerId, evaluate_hand, settle};
//!
//! let p1 = evaluate_hand("6h7s", "8h9cTdJsQh").unwrap();
//! let p2 = evaluate_hand("AhAd", "8h9cTdJsQh").unwrap();
//! assert_eq!(p1.to_string(), "Straight, Queen high (Qh Js Td 9c 8h)");
//!
//! let evals = BTreeMap::from([(PlayerId::new(1), p1), (PlayerId::new(2), p2)]);
//! let settlement = settle(&evals, 300).unwrap();
//! assert_eq!(settlement.winners(), &[PlayerId::new(1), PlayerId::new(2)]);
//! assert_eq!(settlement.winnings()[&PlayerId::new(1)], 150);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod error;
pub use error::{Error, Result};

pub mod hand;
pub use hand::{
    ActionKind, HandOutcome, HandRequest, MAX_PLAYERS, MIN_PLAYERS, PlayerAction, PlayerData,
    Street,
};

pub mod history;
pub use history::HandHistoryEntry;

pub mod poker;
pub use poker::{Card, Chips, HandRank, HandValue, PlayerId, Rank, Suit};

pub mod settle;
pub use settle::{Ledger, Settlement, settle};

/// Evaluates the best hand for two hole cards and five board cards.
///
/// The cards are concatenated tokens, as in "AhKs" and "8h9cTdJsQh".
pub fn evaluate_hand(hole: &str, board: &str) -> Result<HandValue> {
    let hole = Card::parse_many(hole, 2)?;
    let board = Card::parse_many(board, 5)?;
    Ok(HandValue::eval(&hole, &board)?)
}
