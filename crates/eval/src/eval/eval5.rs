// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand ranking.
use showdown_cards::{Card, Rank};

use super::HandRank;

/// Rank bits for the A-2-3-4-5 straight.
const WHEEL: u16 = (1 << Rank::Ace as u16) | 0b1111;

/// Ranks a five cards hand.
///
/// Returns the hand category and the five card ranks in significance order:
/// groups with more cards first, higher ranks first within the same count, so
/// that two hands of the same category compare lexicographically.
pub(crate) fn rank_five(cards: &[Card; 5]) -> (HandRank, [Rank; 5]) {
    let suit = cards[0].suit_bits();
    let is_flush = cards.iter().all(|c| c.suit_bits() == suit);
    let mask = cards.iter().fold(0u16, |m, c| m | c.rank_bit());

    let mut counts = [0u8; 13];
    for card in cards {
        counts[card.rank_bits() as usize] += 1;
    }

    // (count, rank) groups, sort is stable so ranks stay descending.
    let mut groups = [(0u8, Rank::Deuce); 5];
    let mut len = 0;
    for rank in Rank::ranks().rev() {
        let count = counts[rank as usize];
        if count > 0 {
            groups[len] = (count, rank);
            len += 1;
        }
    }

    let groups = &mut groups[..len];
    groups.sort_by(|a, b| b.0.cmp(&a.0));

    let mut ranks = [Rank::Deuce; 5];
    let mut idx = 0;
    for &(count, rank) in groups.iter() {
        for _ in 0..count {
            ranks[idx] = rank;
            idx += 1;
        }
    }

    if len == 5 {
        let is_wheel = mask == WHEEL;
        let is_straight = is_wheel || mask >> mask.trailing_zeros() == 0b11111;

        if is_wheel {
            // The ace plays low.
            ranks = [Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce, Rank::Ace];
        }

        let rank = match (is_straight, is_flush) {
            (true, true) => HandRank::StraightFlush,
            (false, true) => HandRank::Flush,
            (true, false) => HandRank::Straight,
            (false, false) => HandRank::HighCard,
        };

        return (rank, ranks);
    }

    let rank = match (groups[0].0, groups[1].0) {
        (4, _) => HandRank::FourOfAKind,
        (3, 2) => HandRank::FullHouse,
        (3, _) => HandRank::ThreeOfAKind,
        (2, 2) => HandRank::TwoPair,
        _ => HandRank::OnePair,
    };

    (rank, ranks)
}
