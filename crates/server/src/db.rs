// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Database types for persisting hands.
use anyhow::Result;
use parking_lot::Mutex;
use rusqlite::{Connection, params};
use serde::Serialize;
use std::{path::Path, sync::Arc};

use showdown_core::{HandOutcome, HandRequest};

/// A database hand row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredHand {
    /// The hand id.
    pub uuid: String,
    /// The hand as submitted.
    pub request: HandRequest,
    /// The settled hand.
    pub outcome: HandOutcome,
    /// When the hand was saved.
    pub completed_at: String,
}

/// Database for persisting settled hands.
#[derive(Debug, Clone)]
pub struct Db {
    db: Arc<Mutex<Connection>>,
}

impl Db {
    /// Open a database.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::init(Connection::open(path)?)
    }

    /// Open an in memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        // Create tables
        conn.execute(
            "CREATE TABLE IF NOT EXISTS hands (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               uuid TEXT NOT NULL UNIQUE,
               request TEXT NOT NULL,
               outcome TEXT NOT NULL,
               completed_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            (),
        )?;

        Ok(Db {
            db: Arc::new(Mutex::new(conn)),
        })
    }

    /// Saves a settled hand.
    pub async fn save_hand(
        &self,
        uuid: String,
        request: &HandRequest,
        outcome: &HandOutcome,
    ) -> Result<()> {
        let request = serde_json::to_string(request)?;
        let outcome = serde_json::to_string(outcome)?;

        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let db = db.lock();
            db.execute(
                "INSERT INTO hands (uuid, request, outcome, completed_at)
                 VALUES (?1, ?2, ?3, CURRENT_TIMESTAMP)",
                params![uuid, request, outcome],
            )?;

            Ok(())
        })
        .await?
    }

    /// Gets the most recent hands, newest first.
    pub async fn recent_hands(&self, limit: usize) -> Result<Vec<StoredHand>> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let db = db.lock();

            let mut stmt = db.prepare(
                "SELECT uuid, request, outcome, completed_at
                 FROM hands
                 ORDER BY id DESC
                 LIMIT ?1",
            )?;

            let rows = stmt.query_map(params![limit as i64], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })?;

            let mut hands = Vec::new();
            for row in rows {
                hands.push(hand_from_row(row?)?);
            }

            Ok(hands)
        })
        .await?
    }

    /// Gets a hand by id.
    pub async fn get_hand(&self, uuid: String) -> Result<Option<StoredHand>> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let db = db.lock();

            let mut stmt = db.prepare(
                "SELECT uuid, request, outcome, completed_at
                 FROM hands
                 WHERE uuid = ?1",
            )?;

            let res = stmt.query_row(params![uuid], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            });

            match res {
                Ok(row) => Ok(Some(hand_from_row(row)?)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await?
    }

    /// Checks the database connection.
    pub async fn ping(&self) -> Result<()> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let db = db.lock();
            db.query_row("SELECT 1", (), |row| row.get::<usize, i64>(0))?;
            Ok(())
        })
        .await?
    }
}

type HandRow = (String, String, String, Option<String>);

fn hand_from_row((uuid, request, outcome, completed_at): HandRow) -> Result<StoredHand> {
    Ok(StoredHand {
        uuid,
        request: serde_json::from_str(&request)?,
        outcome: serde_json::from_str(&outcome)?,
        completed_at: completed_at.unwrap_or_default(),
    })
}
