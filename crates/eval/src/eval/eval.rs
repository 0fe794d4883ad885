// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand value type and best hand search.
use ahash::AHashSet;
use std::{cmp::Ordering, fmt};
use thiserror::Error;

use showdown_cards::{Card, ParseCardError, Rank};

use super::eval5::rank_five;

/// The number of hole cards for a player.
pub const HOLE_CARDS: usize = 2;

/// The number of board cards at showdown.
pub const BOARD_CARDS: usize = 5;

/// Evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Wrong number of cards, duplicated or malformed cards.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A broken evaluator invariant.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ParseCardError> for EvalError {
    fn from(e: ParseCardError) -> Self {
        EvalError::InvalidInput(e.to_string())
    }
}

/// The hand category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// A straight.
    Straight,
    /// A flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush, the ace high one is a royal flush.
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        f.write_str(name)
    }
}

/// The value of the best five cards hand.
///
/// Values are totally ordered by category and then by the five ranks in
/// significance order, suits never take part in a comparison so two hands
/// with the same ranks compare equal and split a pot.
#[derive(Debug, Clone, Copy)]
pub struct HandValue {
    rank: HandRank,
    ranks: [Rank; 5],
    hand: [Card; 5],
}

impl HandValue {
    /// Evaluates the best hand for a player's hole cards and the board.
    ///
    /// Requires exactly two hole cards and five board cards with no card
    /// repeated across the seven.
    pub fn eval(hole: &[Card], board: &[Card]) -> Result<HandValue, EvalError> {
        if hole.len() != HOLE_CARDS {
            return Err(EvalError::InvalidInput(format!(
                "expected {HOLE_CARDS} hole cards, got {}",
                hole.len()
            )));
        }

        if board.len() != BOARD_CARDS {
            return Err(EvalError::InvalidInput(format!(
                "expected {BOARD_CARDS} board cards, got {}",
                board.len()
            )));
        }

        let mut cards = [hole[0]; HOLE_CARDS + BOARD_CARDS];
        cards[..HOLE_CARDS].copy_from_slice(hole);
        cards[HOLE_CARDS..].copy_from_slice(board);

        Self::eval_cards(&cards)
    }

    /// Evaluates the best five cards hand out of 5, 6 or 7 distinct cards.
    pub fn eval_cards(cards: &[Card]) -> Result<HandValue, EvalError> {
        let n = cards.len();
        if !(5..=7).contains(&n) {
            return Err(EvalError::InvalidInput(format!(
                "expected 5 to 7 cards, got {n}"
            )));
        }

        let mut seen = AHashSet::with_capacity(n);
        for card in cards {
            if !seen.insert(card) {
                return Err(EvalError::InvalidInput(format!("duplicate card {card}")));
            }
        }

        let mut best: Option<HandValue> = None;

        for a in 0..n {
            for b in (a + 1)..n {
                for c in (b + 1)..n {
                    for d in (c + 1)..n {
                        for e in (d + 1)..n {
                            let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                            let value = Self::from_five(five);
                            if best.is_none_or(|best| value > best) {
                                best = Some(value);
                            }
                        }
                    }
                }
            }
        }

        best.ok_or_else(|| EvalError::Internal(format!("no five cards hand in {cards:?}")))
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The hand ranks in significance order.
    pub fn ranks(&self) -> &[Rank; 5] {
        &self.ranks
    }

    /// The five cards making this hand, in the same order as [Self::ranks].
    pub fn hand(&self) -> &[Card; 5] {
        &self.hand
    }

    /// Checks if this hand is an ace high straight flush.
    pub fn is_royal(&self) -> bool {
        self.rank == HandRank::StraightFlush && self.ranks[0] == Rank::Ace
    }

    /// A human readable description, as in "Full House, Kings full of Aces".
    pub fn description(&self) -> String {
        let r = &self.ranks;
        match self.rank {
            HandRank::HighCard => format!("High Card, {} high", r[0].name()),
            HandRank::OnePair => format!("Pair of {}", r[0].plural()),
            HandRank::TwoPair => format!("Two Pair, {} and {}", r[0].plural(), r[2].plural()),
            HandRank::ThreeOfAKind => format!("Three of a Kind, {}", r[0].plural()),
            HandRank::Straight => format!("Straight, {} high", r[0].name()),
            HandRank::Flush => format!("Flush, {} high", r[0].name()),
            HandRank::FullHouse => {
                format!("Full House, {} full of {}", r[0].plural(), r[3].plural())
            }
            HandRank::FourOfAKind => format!("Four of a Kind, {}", r[0].plural()),
            HandRank::StraightFlush if self.is_royal() => "Royal Flush".to_string(),
            HandRank::StraightFlush => format!("Straight Flush, {} high", r[0].name()),
        }
    }

    fn from_five(cards: [Card; 5]) -> HandValue {
        let (rank, ranks) = rank_five(&cards);

        // Order the cards like the ranks, a card is used at most once.
        let mut hand = cards;
        let mut used = [false; 5];
        for (slot, rank) in ranks.iter().enumerate() {
            if let Some(idx) = (0..5).find(|&i| !used[i] && cards[i].rank() == *rank) {
                used[idx] = true;
                hand[slot] = cards[idx];
            }
        }

        HandValue { rank, ranks, hand }
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.ranks.cmp(&other.ranks))
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c1, c2, c3, c4, c5] = self.hand;
        write!(f, "{} ({c1} {c2} {c3} {c4} {c5})", self.description())
    }
}
