// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand history log entries.
//!
//! Each stored hand is shown as five lines:
//!
//! ```text
//! 0b6a6d3e-...
//! Stack 1000: Dealer: Player 1, Small blind: Player 2, Big blind: Player 3
//! Players: Player 1: Ah Ks, Player 2: 7c 7h, Player 3: Qs Jd
//! Actions: f c40 x 3hKdQs x b100 c Ac x x Th b80 r160 c
//! Winnings: Player 1: 0, Player 2: -380, Player 3: +760
//! ```
//!
//! Winnings show the gross pot share of the winners and the net loss of the
//! other players, so a winner that put 380 chips in a 760 pot shows +760.
use serde::{Deserialize, Serialize};

use crate::hand::{ActionKind, HandOutcome, HandRequest, PlayerAction, Street};

/// A hand history log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandHistoryEntry {
    /// The hand id.
    pub uuid: String,
    /// The starting stack and the players with the button and the blinds.
    pub stack_info: String,
    /// The players hole cards.
    pub hole_cards: String,
    /// The actions interleaved with the board cards.
    pub action_sequence: String,
    /// The winners pot shares and the other players losses.
    pub winnings: String,
}

impl HandHistoryEntry {
    /// Creates the history entry for a resolved hand.
    pub fn new(uuid: &str, request: &HandRequest, outcome: &HandOutcome) -> Self {
        Self {
            uuid: uuid.to_string(),
            stack_info: stack_info(request),
            hole_cards: hole_cards(request),
            action_sequence: action_sequence(request),
            winnings: winnings(outcome),
        }
    }
}

fn stack_info(request: &HandRequest) -> String {
    let stack = request
        .players
        .iter()
        .map(|p| p.stack_size)
        .max()
        .unwrap_or_default();

    let at = |position: u32| {
        request
            .players
            .iter()
            .find(|p| p.position == position)
            .map(|p| format!("Player {}", p.player_id))
    };

    // Heads up the dealer posts the small blind.
    let (sb, bb) = if request.players.len() == 2 {
        (at(0), at(1))
    } else {
        (at(1), at(2))
    };

    let roles = [("Dealer", at(0)), ("Small blind", sb), ("Big blind", bb)]
        .into_iter()
        .filter_map(|(role, player)| player.map(|p| format!("{role}: {p}")))
        .collect::<Vec<_>>();

    if roles.is_empty() {
        format!("Stack {}", stack.amount())
    } else {
        format!("Stack {}: {}", stack.amount(), roles.join(", "))
    }
}

fn hole_cards(request: &HandRequest) -> String {
    let cards = request
        .players
        .iter()
        .filter_map(|p| {
            let (c1, c2) = (p.hole_cards.get(0..2)?, p.hole_cards.get(2..4)?);
            Some(format!("Player {}: {c1} {c2}", p.player_id))
        })
        .collect::<Vec<_>>();

    if cards.is_empty() {
        "Players: none".to_string()
    } else {
        format!("Players: {}", cards.join(", "))
    }
}

fn action_sequence(request: &HandRequest) -> String {
    let board = &request.board_cards;
    let streets = [
        (Street::Preflop, None),
        (Street::Flop, board.get(0..6)),
        (Street::Turn, board.get(6..8)),
        (Street::River, board.get(8..10)),
    ];

    let mut tokens = Vec::new();
    for (street, cards) in streets {
        if let Some(cards) = cards {
            tokens.push(cards.to_string());
        }

        tokens.extend(
            request
                .players
                .iter()
                .flat_map(|p| p.actions.iter())
                .filter(|a| a.street == street)
                .map(action_token),
        );
    }

    if tokens.is_empty() {
        "Actions: none".to_string()
    } else {
        format!("Actions: {}", tokens.join(" "))
    }
}

fn action_token(action: &PlayerAction) -> String {
    let amount = action.amount.amount();
    match (action.action, amount) {
        (ActionKind::Fold, _) => "f".to_string(),
        (ActionKind::Check, _) => "x".to_string(),
        (ActionKind::Call, 0) => "c".to_string(),
        (ActionKind::Call, n) => format!("c{n}"),
        (ActionKind::Bet, n) => format!("b{n}"),
        (ActionKind::Raise, n) => format!("r{n}"),
        (ActionKind::AllIn, 0) => "allin".to_string(),
        (ActionKind::AllIn, n) => format!("allin{n}"),
    }
}

fn winnings(outcome: &HandOutcome) -> String {
    if outcome.winnings_by_player.is_empty() {
        return "Winnings: none".to_string();
    }

    let winnings = outcome
        .winnings_by_player
        .iter()
        .map(|(player_id, chips)| {
            if *chips > 0 {
                format!("Player {player_id}: +{chips}")
            } else {
                format!("Player {player_id}: {chips}")
            }
        })
        .collect::<Vec<_>>();

    format!("Winnings: {}", winnings.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        hand::tests::{action, player},
        poker::{Chips, PlayerId},
    };
    use std::collections::BTreeMap;

    fn three_handed() -> HandRequest {
        let mut p1 = player(1, 0, "AhKs");
        p1.folded = true;
        p1.actions = vec![action(ActionKind::Fold, 0, Street::Preflop)];

        let mut p2 = player(2, 1, "7c7h");
        p2.actions = vec![
            action(ActionKind::Call, 40, Street::Preflop),
            action(ActionKind::Check, 0, Street::Flop),
            action(ActionKind::Call, 100, Street::Turn),
        ];

        let mut p3 = player(3, 2, "QsJd");
        p3.stack_size = Chips::new(1_500);
        p3.actions = vec![
            action(ActionKind::Check, 0, Street::Preflop),
            action(ActionKind::Check, 0, Street::Flop),
            action(ActionKind::Bet, 100, Street::Turn),
            action(ActionKind::AllIn, 0, Street::River),
        ];

        HandRequest {
            players: vec![p1, p2, p3],
            board_cards: "3hKdQcAcTh".to_string(),
            pot_size: 280,
            small_blind: Chips::new(20),
            big_blind: Chips::new(40),
        }
    }

    #[test]
    fn history_lines() {
        let req = three_handed();
        let outcome = req.resolve().unwrap();
        let entry = HandHistoryEntry::new("hand-1", &req, &outcome);

        assert_eq!(entry.uuid, "hand-1");
        assert_eq!(
            entry.stack_info,
            "Stack 1500: Dealer: Player 1, Small blind: Player 2, Big blind: Player 3"
        );
        assert_eq!(
            entry.hole_cards,
            "Players: Player 1: Ah Ks, Player 2: 7c 7h, Player 3: Qs Jd"
        );
        assert_eq!(
            entry.action_sequence,
            "Actions: f c40 x 3hKdQc x x Ac c100 b100 Th allin"
        );
        assert_eq!(
            entry.winnings,
            "Winnings: Player 1: 0, Player 2: -140, Player 3: +280"
        );
    }

    #[test]
    fn heads_up_dealer_posts_small_blind() {
        let req = HandRequest {
            players: vec![player(4, 0, "AhKs"), player(9, 1, "2c2d")],
            board_cards: "3h7s9cJdQh".to_string(),
            pot_size: 80,
            small_blind: Chips::new(20),
            big_blind: Chips::new(40),
        };

        assert_eq!(
            stack_info(&req),
            "Stack 1000: Dealer: Player 4, Small blind: Player 4, Big blind: Player 9"
        );
        assert_eq!(action_sequence(&req), "Actions: 3h7s9c Jd Qh");
    }

    #[test]
    fn missing_roles_are_omitted() {
        let req = HandRequest {
            players: vec![
                player(1, 5, "AhKs"),
                player(2, 6, "2c2d"),
                player(3, 7, "4c4d"),
            ],
            board_cards: "3h7s9cJdQh".to_string(),
            pot_size: 0,
            small_blind: Chips::new(20),
            big_blind: Chips::new(40),
        };

        assert_eq!(stack_info(&req), "Stack 1000");
    }

    #[test]
    fn empty_winnings() {
        let outcome = HandOutcome::default();
        assert_eq!(winnings(&outcome), "Winnings: none");

        let outcome = HandOutcome {
            winnings_by_player: BTreeMap::from([(PlayerId::new(2), 0)]),
            ..Default::default()
        };
        assert_eq!(winnings(&outcome), "Winnings: Player 2: 0");
    }
}
