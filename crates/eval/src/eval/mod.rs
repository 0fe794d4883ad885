// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator searches all five cards subsets of a 5, 6 or 7 cards hand and
//! keeps the best one. A five cards hand is ranked by counting rank
//! multiplicities and checking for straights (the ace plays both high and low)
//! and flushes, it yields a category and the five ranks in significance order
//! so that [HandValue]s compare with a plain lexicographic ordering.
//!
//! [HandValue::eval] is the entry point for a Hold'em player at showdown, it
//! takes the two hole cards and the five board cards.

#[allow(clippy::module_inception)]
mod eval;
pub use eval::{BOARD_CARDS, EvalError, HOLE_CARDS, HandRank, HandValue};

mod eval5;
