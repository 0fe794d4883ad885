// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types used in a Poker hand.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

pub use showdown_eval::{Card, HandRank, HandValue, Rank, Suit};

/// A player identifier, ordering breaks odd chip ties in favor of lower ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Creates a player id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The integer id.
    pub fn id(&self) -> u32 {
        self.0
    }
}

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        PlayerId(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chips amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chips(u32);

impl Chips {
    /// The zero chips.
    pub const ZERO: Chips = Chips(0);

    /// Creates chips with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> u32 {
        self.0
    }

    /// The amount as a signed chips delta, negated.
    pub fn as_loss(&self) -> i64 {
        -i64::from(self.0)
    }
}

impl From<u32> for Chips {
    fn from(val: u32) -> Self {
        Chips(val)
    }
}

impl From<Chips> for u32 {
    fn from(val: Chips) -> Self {
        val.0
    }
}

impl ops::Add for Chips {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl ops::AddAssign for Chips {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl std::iter::Sum for Chips {
    fn sum<I: Iterator<Item = Chips>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_arithmetic() {
        let mut c = Chips::new(40);
        c += Chips::new(60);
        assert_eq!(c, Chips::new(100));
        assert_eq!(Chips::new(u32::MAX) + Chips::new(1), Chips::new(u32::MAX));
        assert_eq!(c.as_loss(), -100);

        let total = [Chips::new(20), Chips::new(40), Chips::new(80)]
            .into_iter()
            .sum::<Chips>();
        assert_eq!(total, Chips::new(140));
    }

    #[test]
    fn ids_serialize_as_numbers() {
        assert_eq!(serde_json::to_string(&PlayerId::new(7)).unwrap(), "7");
        assert_eq!(serde_json::from_str::<Chips>("250").unwrap(), Chips::new(250));
        assert!(PlayerId::new(1) < PlayerId::new(2));
    }
}
