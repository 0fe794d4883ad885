// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown hand settlement server.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod db;
pub mod error;
pub mod routes;
pub mod server;
pub use server::{Config, run};
