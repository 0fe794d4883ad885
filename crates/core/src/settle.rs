// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pot settlement.
//!
//! [settle] reduces the evaluated hands of the players still in the hand to the
//! winners and their share of the pot. Ties split the pot evenly, the odd chips
//! go one each to the winners with the lowest ids so that the winners' shares
//! always add up to the pot.
//!
//! Losses are not part of the settlement itself, a [Ledger] of the chips each
//! player put in the pot can be charged to a settlement to report them.
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{
    error::{Error, Result},
    poker::{Chips, HandValue, PlayerId},
};

/// The result of settling a pot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    winners: Vec<PlayerId>,
    winnings: BTreeMap<PlayerId, i64>,
    descriptions: BTreeMap<PlayerId, String>,
}

impl Settlement {
    /// The players with the best hand in ascending id order.
    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }

    /// The pot share of each winner, the other players get zero or their
    /// charged loss.
    pub fn winnings(&self) -> &BTreeMap<PlayerId, i64> {
        &self.winnings
    }

    /// The hand description for each evaluated player.
    pub fn descriptions(&self) -> &BTreeMap<PlayerId, String> {
        &self.descriptions
    }

    /// Checks if a player won a share of the pot.
    pub fn is_winner(&self, player_id: PlayerId) -> bool {
        self.winners.binary_search(&player_id).is_ok()
    }

    /// Reports the losses recorded in a ledger.
    ///
    /// Every ledger player that is not a winner, folded players included, gets
    /// minus the chips they put in the pot. Winners keep their share.
    pub fn charge(mut self, ledger: &Ledger) -> Settlement {
        for (player_id, chips) in ledger.iter() {
            if !self.is_winner(player_id) {
                self.winnings.insert(player_id, chips.as_loss());
            }
        }

        self
    }

    /// Splits this settlement into winners, winnings and descriptions.
    pub fn into_parts(
        self,
    ) -> (
        Vec<PlayerId>,
        BTreeMap<PlayerId, i64>,
        BTreeMap<PlayerId, String>,
    ) {
        (self.winners, self.winnings, self.descriptions)
    }
}

/// Settles a pot among the players that didn't fold.
///
/// Folded players must not have an entry in `evaluations`. Fails if the pot is
/// negative, an empty `evaluations` yields an empty settlement.
pub fn settle(evaluations: &BTreeMap<PlayerId, HandValue>, pot: i64) -> Result<Settlement> {
    if pot < 0 {
        return Err(Error::InvalidInput(format!("negative pot {pot}")));
    }

    let Some(best) = evaluations.values().max() else {
        return Ok(Settlement::default());
    };

    // BTreeMap iteration gives ascending ids.
    let winners = evaluations
        .iter()
        .filter(|(_, hv)| *hv == best)
        .map(|(player_id, _)| *player_id)
        .collect::<Vec<_>>();

    let count = winners.len() as i64;
    let (share, remainder) = (pot / count, pot % count);

    let mut winnings = evaluations
        .keys()
        .map(|player_id| (*player_id, 0))
        .collect::<BTreeMap<_, _>>();

    for (idx, player_id) in winners.iter().enumerate() {
        let odd_chip = i64::from((idx as i64) < remainder);
        winnings.insert(*player_id, share + odd_chip);
    }

    let descriptions = evaluations
        .iter()
        .map(|(player_id, hv)| (*player_id, hv.to_string()))
        .collect();

    debug!("Pot {pot} settled to {winners:?} with {best}");

    Ok(Settlement {
        winners,
        winnings,
        descriptions,
    })
}

/// The chips each player put in the pot during a hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    contributions: BTreeMap<PlayerId, Chips>,
}

impl Ledger {
    /// Records chips a player put in the pot.
    pub fn post(&mut self, player_id: PlayerId, chips: Chips) {
        *self.contributions.entry(player_id).or_default() += chips;
    }

    /// The chips a player put in the pot.
    pub fn contributed(&self, player_id: PlayerId) -> Chips {
        self.contributions
            .get(&player_id)
            .copied()
            .unwrap_or_default()
    }

    /// The chips put in the pot by all players.
    pub fn total(&self) -> Chips {
        self.contributions.values().copied().sum()
    }

    /// Iterates players contributions in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, Chips)> + '_ {
        self.contributions.iter().map(|(id, chips)| (*id, *chips))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poker::Card;

    fn eval(hole: &str, board: &str) -> HandValue {
        let hole = Card::parse_many(hole, 2).unwrap();
        let board = Card::parse_many(board, 5).unwrap();
        HandValue::eval(&hole, &board).unwrap()
    }

    fn evaluations(hands: &[(u32, &str)], board: &str) -> BTreeMap<PlayerId, HandValue> {
        hands
            .iter()
            .map(|(id, hole)| (PlayerId::new(*id), eval(hole, board)))
            .collect()
    }

    #[test]
    fn single_winner_takes_pot() {
        let evals = evaluations(&[(1, "AhKs"), (2, "2c2d")], "3h7s9cJdQh");
        let s = settle(&evals, 200).unwrap();

        assert_eq!(s.winners(), &[PlayerId::new(2)]);
        assert_eq!(s.winnings()[&PlayerId::new(2)], 200);
        assert_eq!(s.winnings()[&PlayerId::new(1)], 0);
        assert_eq!(
            s.descriptions()[&PlayerId::new(2)],
            "Pair of Deuces (2c 2d Qh Jd 9c)"
        );
    }

    #[test]
    fn split_pot_odd_chip_to_lower_id() {
        let evals = evaluations(&[(2, "6c7d"), (1, "6h7s")], "8h9cTdJsQh");
        let s = settle(&evals, 201).unwrap();

        assert_eq!(s.winners(), &[PlayerId::new(1), PlayerId::new(2)]);
        assert_eq!(s.winnings()[&PlayerId::new(1)], 101);
        assert_eq!(s.winnings()[&PlayerId::new(2)], 100);
        assert_eq!(s.winnings().values().sum::<i64>(), 201);
    }

    #[test]
    fn three_way_split_remainder() {
        // The board plays for everybody.
        let evals = evaluations(
            &[(5, "2c3d"), (3, "2d3c"), (9, "2h3h"), (4, "KsKc")],
            "AhAsAdAcQs",
        );
        let s = settle(&evals, 100).unwrap();

        // Quad aces with a king kicker wins outright.
        assert_eq!(s.winners(), &[PlayerId::new(4)]);

        let evals = evaluations(&[(5, "2c3d"), (3, "2d3c"), (9, "2h3h")], "AhAsAdAcQs");
        let s = settle(&evals, 100).unwrap();
        assert_eq!(
            s.winners(),
            &[PlayerId::new(3), PlayerId::new(5), PlayerId::new(9)]
        );
        assert_eq!(s.winnings()[&PlayerId::new(3)], 34);
        assert_eq!(s.winnings()[&PlayerId::new(5)], 33);
        assert_eq!(s.winnings()[&PlayerId::new(9)], 33);
    }

    #[test]
    fn folded_players_never_win() {
        // Player 1 folded pocket aces, only player 2 is evaluated.
        let evals = evaluations(&[(2, "2c3d")], "4h5s6c7h8d");
        let s = settle(&evals, 100).unwrap();

        assert_eq!(s.winners(), &[PlayerId::new(2)]);
        assert!(!s.is_winner(PlayerId::new(1)));
        assert!(!s.winnings().contains_key(&PlayerId::new(1)));
        assert_eq!(s.winnings()[&PlayerId::new(2)], 100);
    }

    #[test]
    fn empty_and_invalid() {
        let s = settle(&BTreeMap::new(), 300).unwrap();
        assert!(s.winners().is_empty());
        assert!(s.winnings().is_empty());

        let evals = evaluations(&[(1, "AhKs")], "3h7s9cJdQh");
        assert!(matches!(settle(&evals, -1), Err(Error::InvalidInput(_))));

        let s = settle(&evals, 0).unwrap();
        assert_eq!(s.winnings()[&PlayerId::new(1)], 0);
    }

    #[test]
    fn settle_is_deterministic() {
        let evals = evaluations(&[(1, "6h7s"), (2, "6c7d"), (3, "AhAd")], "8h9cTdJsQh");
        let s1 = settle(&evals, 999).unwrap();
        let s2 = settle(&evals, 999).unwrap();
        assert_eq!(s1, s2);
    }

    #[test]
    fn ledger_charges_losers() {
        let evals = evaluations(&[(1, "7h8h"), (2, "AsAc")], "4s5d6h9cTd");

        let mut ledger = Ledger::default();
        ledger.post(PlayerId::new(1), Chips::new(40));
        ledger.post(PlayerId::new(2), Chips::new(20));
        ledger.post(PlayerId::new(2), Chips::new(20));
        ledger.post(PlayerId::new(3), Chips::new(10));
        assert_eq!(ledger.total(), Chips::new(90));
        assert_eq!(ledger.contributed(PlayerId::new(2)), Chips::new(40));
        assert_eq!(ledger.contributed(PlayerId::new(4)), Chips::ZERO);

        let s = settle(&evals, 90).unwrap().charge(&ledger);
        assert_eq!(s.winners(), &[PlayerId::new(1)]);
        assert_eq!(s.winnings()[&PlayerId::new(1)], 90);
        assert_eq!(s.winnings()[&PlayerId::new(2)], -40);
        // Folded player 3 appears with its loss.
        assert_eq!(s.winnings()[&PlayerId::new(3)], -10);
        assert!(s.winnings().values().all(|&w| w <= 0 || w == 90));
    }
}
