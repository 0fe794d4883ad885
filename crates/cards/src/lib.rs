// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! or to parse them from their two characters tokens, a rank `2`-`9`, `T`, `J`,
//! `Q`, `K`, `A` followed by a suit `h`, `d`, `c`, `s`:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah: Card = "Ah".parse().unwrap();
//! assert_eq!(ah, Card::new(Rank::Ace, Suit::Hearts));
//!
//! let board = Card::parse_many("8h9cTdJsQh", 5).unwrap();
//! assert_eq!(board[4].to_string(), "Qh");
//! ```
//!
//! and a [Deck] type for iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use showdown_cards::{Card, Deck, Rank, Suit};
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
