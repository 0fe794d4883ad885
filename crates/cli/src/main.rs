// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI for evaluating and settling hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, anyhow, bail};
use clap::{Parser, Subcommand};
use log::debug;

use showdown_core::{Chips, HandOutcome, HandRequest, PlayerData, PlayerId, evaluate_hand};

#[derive(Debug, Parser)]
#[clap(name = "showdown", version)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates the best hand for hole and board cards.
    Eval {
        /// The two hole cards, as in AhKs.
        #[clap(long)]
        hole: String,
        /// The five board cards, as in 3h7s9cJdQh.
        #[clap(long)]
        board: String,
    },
    /// Settles a pot among the seats at showdown.
    Settle {
        /// The five board cards.
        #[clap(long)]
        board: String,
        /// The pot to settle.
        #[clap(long, allow_negative_numbers = true)]
        pot: i64,
        /// The ids of the players that folded.
        #[clap(long = "fold")]
        folded: Vec<u32>,
        /// The seats as id=cards, as in 1=6h7s.
        #[clap(required = true, value_parser = parse_seat)]
        seats: Vec<(u32, String)>,
    },
}

fn parse_seat(s: &str) -> Result<(u32, String)> {
    let (id, cards) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("expected id=cards, got {s}"))?;
    let id = id
        .trim()
        .parse::<u32>()
        .map_err(|e| anyhow!("invalid player id {id}: {e}"))?;
    Ok((id, cards.trim().to_string()))
}

fn settle_request(
    board: String,
    pot: i64,
    seats: Vec<(u32, String)>,
    folded: &[u32],
) -> Result<HandRequest> {
    if let Some(id) = folded.iter().find(|id| !seats.iter().any(|(s, _)| s == *id)) {
        bail!("folded player {id} has no seat");
    }

    let players = seats
        .into_iter()
        .enumerate()
        .map(|(position, (id, hole_cards))| PlayerData {
            player_id: PlayerId::new(id),
            position: position as u32,
            hole_cards,
            stack_size: Chips::ZERO,
            actions: Vec::new(),
            folded: folded.contains(&id),
            total_bet: None,
        })
        .collect();

    Ok(HandRequest {
        players,
        board_cards: board,
        pot_size: pot,
        small_blind: Chips::new(20),
        big_blind: Chips::new(40),
    })
}

fn print_outcome(outcome: &HandOutcome) {
    for (player_id, hand) in &outcome.best_hands {
        println!("Player {player_id}: {hand}");
    }

    let winners = outcome
        .winners
        .iter()
        .map(|id| format!("Player {id}"))
        .collect::<Vec<_>>();
    println!("Winners: {}", winners.join(", "));

    for (player_id, chips) in &outcome.winnings_by_player {
        if *chips > 0 {
            println!("Player {player_id}: +{chips}");
        } else {
            println!("Player {player_id}: {chips}");
        }
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    debug!("{cli:?}");

    match cli.command {
        Command::Eval { hole, board } => {
            let hv = evaluate_hand(&hole, &board)?;
            println!("{hv}");
        }
        Command::Settle {
            board,
            pot,
            folded,
            seats,
        } => {
            let request = settle_request(board, pot, seats, &folded)?;
            let outcome = request.resolve()?;
            print_outcome(&outcome);
        }
    }

    Ok(())
}
