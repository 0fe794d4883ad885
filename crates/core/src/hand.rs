// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Completed hand types.
//!
//! A [HandRequest] describes a finished Hold'em hand as submitted by a client:
//! the players with their hole cards and actions, the board and the pot. Once
//! validated it is resolved to a [HandOutcome] by evaluating the players that
//! didn't fold and settling the pot.
use ahash::AHashSet;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{
    error::{Error, Result},
    poker::{Card, Chips, HandValue, PlayerId},
    settle::{Ledger, Settlement, settle},
};

/// The minimum number of players in a hand.
pub const MIN_PLAYERS: usize = 2;

/// The maximum number of players in a hand.
pub const MAX_PLAYERS: usize = 10;

/// A player action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Fold.
    Fold,
    /// Check.
    Check,
    /// Call.
    Call,
    /// Bet.
    Bet,
    /// Raise.
    Raise,
    /// All-in.
    AllIn,
}

/// A betting street.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// Before the flop.
    #[default]
    Preflop,
    /// After the flop.
    Flop,
    /// After the turn.
    Turn,
    /// After the river.
    River,
}

/// A player action, the amount is the chips put in the pot by the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAction {
    /// The action kind.
    pub action: ActionKind,
    /// The chips put in the pot.
    #[serde(default)]
    pub amount: Chips,
    /// The street the action was taken on.
    #[serde(default)]
    pub street: Street,
}

/// A player in a completed hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerData {
    /// The player id.
    pub player_id: PlayerId,
    /// The seat position relative to the dealer, 0 is the dealer.
    pub position: u32,
    /// The hole cards, two concatenated tokens as in "AhKs".
    pub hole_cards: String,
    /// The player stack at the start of the hand.
    pub stack_size: Chips,
    /// The player actions in order.
    #[serde(default)]
    pub actions: Vec<PlayerAction>,
    /// The player folded.
    #[serde(default)]
    pub folded: bool,
    /// The total chips this player put in the pot, blinds included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_bet: Option<Chips>,
}

impl PlayerData {
    /// The chips this player put in the pot.
    ///
    /// This is `total_bet` when given, the sum of the actions amounts otherwise.
    pub fn contributed(&self) -> Chips {
        self.total_bet
            .unwrap_or_else(|| self.actions.iter().map(|a| a.amount).sum())
    }
}

/// A completed hand to be settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRequest {
    /// The players in the hand, folded ones included.
    pub players: Vec<PlayerData>,
    /// The five board cards as in "8h9cTdJsQh".
    pub board_cards: String,
    /// The pot to settle.
    pub pot_size: i64,
    /// The small blind.
    #[serde(default = "default_small_blind")]
    pub small_blind: Chips,
    /// The big blind.
    #[serde(default = "default_big_blind")]
    pub big_blind: Chips,
}

fn default_small_blind() -> Chips {
    Chips::new(20)
}

fn default_big_blind() -> Chips {
    Chips::new(40)
}

/// The resolved hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandOutcome {
    /// The players with the best hand in ascending id order.
    pub winners: Vec<PlayerId>,
    /// The pot share of each winner and minus the chips each other player put
    /// in the pot. Winners' shares are gross, they add up to the pot.
    pub winnings_by_player: BTreeMap<PlayerId, i64>,
    /// The best hand of each player that went to showdown.
    pub best_hands: BTreeMap<PlayerId, String>,
}

impl From<Settlement> for HandOutcome {
    fn from(settlement: Settlement) -> Self {
        let (winners, winnings_by_player, best_hands) = settlement.into_parts();
        Self {
            winners,
            winnings_by_player,
            best_hands,
        }
    }
}

/// A player seat with parsed cards.
#[derive(Debug)]
struct Seat {
    player_id: PlayerId,
    hole: Vec<Card>,
    folded: bool,
}

impl HandRequest {
    /// Checks the request is well formed.
    pub fn validate(&self) -> Result<()> {
        self.parse().map(|_| ())
    }

    /// The chips each player put in the pot.
    pub fn ledger(&self) -> Ledger {
        let mut ledger = Ledger::default();
        for player in &self.players {
            ledger.post(player.player_id, player.contributed());
        }

        ledger
    }

    /// Evaluates the players still in the hand and settles the pot.
    pub fn resolve(&self) -> Result<HandOutcome> {
        let (seats, board) = self.parse()?;

        let mut evaluations = BTreeMap::new();
        for seat in seats.iter().filter(|s| !s.folded) {
            let hv = HandValue::eval(&seat.hole, &board)?;
            debug!("Player {} has {hv}", seat.player_id);
            evaluations.insert(seat.player_id, hv);
        }

        let settlement = settle(&evaluations, self.pot_size)?.charge(&self.ledger());
        Ok(settlement.into())
    }

    fn parse(&self) -> Result<(Vec<Seat>, Vec<Card>)> {
        let count = self.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(Error::InvalidInput(format!(
                "expected {MIN_PLAYERS} to {MAX_PLAYERS} players, got {count}"
            )));
        }

        if self.pot_size < 0 {
            return Err(Error::InvalidInput(format!(
                "negative pot {}",
                self.pot_size
            )));
        }

        let board = Card::parse_many(&self.board_cards, 5)?;

        let mut ids = AHashSet::with_capacity(count);
        let mut seats = Vec::with_capacity(count);
        for player in &self.players {
            if !ids.insert(player.player_id) {
                return Err(Error::InvalidInput(format!(
                    "duplicate player {}",
                    player.player_id
                )));
            }

            let hole = Card::parse_many(&player.hole_cards, 2).map_err(|e| {
                Error::InvalidInput(format!("player {} {e}", player.player_id))
            })?;

            seats.push(Seat {
                player_id: player.player_id,
                hole,
                folded: player.folded,
            });
        }

        // Cards are dealt from one deck, folded hands included.
        let mut seen = AHashSet::with_capacity(count * 2 + board.len());
        let all_cards = board.iter().chain(seats.iter().flat_map(|s| s.hole.iter()));
        for card in all_cards {
            if !seen.insert(*card) {
                return Err(Error::InvalidInput(format!("duplicate card {card}")));
            }
        }

        Ok((seats, board))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn player(id: u32, position: u32, hole: &str) -> PlayerData {
        PlayerData {
            player_id: PlayerId::new(id),
            position,
            hole_cards: hole.to_string(),
            stack_size: Chips::new(1_000),
            actions: Vec::new(),
            folded: false,
            total_bet: None,
        }
    }

    pub(crate) fn action(action: ActionKind, amount: u32, street: Street) -> PlayerAction {
        PlayerAction {
            action,
            amount: Chips::new(amount),
            street,
        }
    }

    fn request(players: Vec<PlayerData>, board: &str, pot: i64) -> HandRequest {
        HandRequest {
            players,
            board_cards: board.to_string(),
            pot_size: pot,
            small_blind: Chips::new(20),
            big_blind: Chips::new(40),
        }
    }

    fn ids(ids: &[u32]) -> Vec<PlayerId> {
        ids.iter().copied().map(PlayerId::new).collect()
    }

    #[test]
    fn pair_beats_high_card() {
        let req = request(
            vec![player(1, 0, "AhKs"), player(2, 1, "2c2d")],
            "3h7s9cJdQh",
            200,
        );
        let outcome = req.resolve().unwrap();
        assert_eq!(outcome.winners, ids(&[2]));
        assert_eq!(outcome.winnings_by_player[&PlayerId::new(2)], 200);
        assert_eq!(outcome.winnings_by_player[&PlayerId::new(1)], 0);
        assert_eq!(outcome.best_hands.len(), 2);
    }

    #[test]
    fn straight_beats_trips() {
        let req = request(
            vec![player(1, 0, "AhAs"), player(2, 1, "6h7s")],
            "Ac8h9cTdJh",
            300,
        );
        assert_eq!(req.resolve().unwrap().winners, ids(&[2]));
    }

    #[test]
    fn split_pot() {
        let req = request(
            vec![player(1, 0, "6h7s"), player(2, 1, "6c7d")],
            "8h9cTdJsQh",
            201,
        );
        let outcome = req.resolve().unwrap();
        assert_eq!(outcome.winners, ids(&[1, 2]));
        assert_eq!(outcome.winnings_by_player[&PlayerId::new(1)], 101);
        assert_eq!(outcome.winnings_by_player[&PlayerId::new(2)], 100);
    }

    #[test]
    fn folded_player_loses_contribution() {
        let mut p1 = player(1, 0, "AhAs");
        p1.folded = true;
        p1.actions = vec![
            action(ActionKind::Call, 40, Street::Preflop),
            action(ActionKind::Fold, 0, Street::Flop),
        ];

        let mut p2 = player(2, 1, "2c3d");
        p2.total_bet = Some(Chips::new(60));

        let req = request(vec![p1, p2], "4h5s6c7h8d", 100);
        let outcome = req.resolve().unwrap();
        assert_eq!(outcome.winners, ids(&[2]));
        assert_eq!(outcome.winnings_by_player[&PlayerId::new(1)], -40);
        assert_eq!(outcome.winnings_by_player[&PlayerId::new(2)], 100);
        assert!(!outcome.best_hands.contains_key(&PlayerId::new(1)));
    }

    #[test]
    fn everybody_folded() {
        let mut p1 = player(1, 0, "AhAs");
        p1.folded = true;
        p1.actions = vec![
            action(ActionKind::Call, 40, Street::Preflop),
            action(ActionKind::Fold, 0, Street::Flop),
        ];

        let mut p2 = player(2, 1, "2c3d");
        p2.folded = true;
        p2.total_bet = Some(Chips::new(60));

        let req = request(vec![p1, p2], "4h5s6c7h8d", 100);
        let outcome = req.resolve().unwrap();
        assert!(outcome.winners.is_empty());
        assert!(outcome.best_hands.is_empty());
        assert_eq!(outcome.winnings_by_player[&PlayerId::new(1)], -40);
        assert_eq!(outcome.winnings_by_player[&PlayerId::new(2)], -60);
        assert_eq!(outcome.winnings_by_player.len(), 2);
    }

    #[test]
    fn loser_charged_from_actions() {
        let mut p1 = player(1, 0, "7h8h");
        p1.actions = vec![action(ActionKind::Call, 40, Street::Preflop)];
        let mut p2 = player(2, 1, "AsAc");
        p2.actions = vec![
            action(ActionKind::Bet, 40, Street::Preflop),
            action(ActionKind::Check, 0, Street::Flop),
        ];

        let req = request(vec![p1, p2], "4s5d6h9cTd", 80);
        assert_eq!(req.ledger().total(), Chips::new(80));

        let outcome = req.resolve().unwrap();
        assert_eq!(outcome.winners, ids(&[1]));
        assert_eq!(outcome.winnings_by_player[&PlayerId::new(1)], 80);
        assert_eq!(outcome.winnings_by_player[&PlayerId::new(2)], -40);
    }

    #[test]
    fn three_players() {
        let req = request(
            vec![
                player(1, 0, "AsKs"),
                player(2, 1, "QcQd"),
                player(3, 2, "7h8h"),
            ],
            "2h4h9hJhTs",
            300,
        );
        let outcome = req.resolve().unwrap();
        assert_eq!(outcome.winners, ids(&[3]));
        assert!(outcome.best_hands[&PlayerId::new(3)].starts_with("Flush, Jack high"));
    }

    #[test]
    fn invalid_requests() {
        let is_invalid = |req: HandRequest| matches!(req.validate(), Err(Error::InvalidInput(_)));

        // Not enough players.
        assert!(is_invalid(request(vec![player(1, 0, "AhKs")], "2h3d4c5s6h", 100)));

        // Malformed hole cards.
        assert!(is_invalid(request(
            vec![player(1, 0, "INVALID"), player(2, 1, "KdKc")],
            "2h3d4c5s6h",
            100
        )));

        // Short board.
        assert!(is_invalid(request(
            vec![player(1, 0, "AhKs"), player(2, 1, "KdKc")],
            "2h3d4c5s",
            100
        )));

        // Card repeated across players.
        assert!(is_invalid(request(
            vec![player(1, 0, "AhKs"), player(2, 1, "AhKc")],
            "2h3d4c5s6h",
            100
        )));

        // Card repeated on the board by a folded player.
        let mut folded = player(2, 1, "2hKc");
        folded.folded = true;
        assert!(is_invalid(request(
            vec![player(1, 0, "AhKs"), folded],
            "2h3d4c5s6h",
            100
        )));

        // Duplicate player ids.
        assert!(is_invalid(request(
            vec![player(1, 0, "AhKs"), player(1, 1, "KdKc")],
            "2h3d4c5s6h",
            100
        )));

        // Negative pot.
        assert!(is_invalid(request(
            vec![player(1, 0, "AhKs"), player(2, 1, "KdKc")],
            "2h3d4c5s6h",
            -5
        )));

        let ok = request(
            vec![player(1, 0, "AhKs"), player(2, 1, "KdKc")],
            "2h3d4c5s6h",
            100,
        );
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn request_json_defaults() {
        let json = r#"{
            "players": [
                {"player_id": 1, "position": 0, "hole_cards": "AhKs", "stack_size": 1000,
                 "actions": [{"action": "all_in", "amount": 1000}]},
                {"player_id": 2, "position": 1, "hole_cards": "2c2d", "stack_size": 980,
                 "folded": true}
            ],
            "board_cards": "3h7s9cJdQh",
            "pot_size": 1040
        }"#;

        let req: HandRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.small_blind, Chips::new(20));
        assert_eq!(req.big_blind, Chips::new(40));
        assert_eq!(req.players[0].actions[0].action, ActionKind::AllIn);
        assert_eq!(req.players[0].actions[0].street, Street::Preflop);
        assert!(req.players[1].folded);
        assert!(req.players[1].actions.is_empty());

        let outcome = req.resolve().unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["winners"], serde_json::json!([1]));
        assert_eq!(json["winnings_by_player"]["1"], 1040);
        assert_eq!(json["winnings_by_player"]["2"], 0);
    }
}
