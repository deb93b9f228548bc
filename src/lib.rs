// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Nebula Notary - Evidence Notarization Service
//!
//! This crate fronts the on-chain Evidence contract on Ethereum Sepolia:
//! files are fingerprinted with keccak-256, notarized as contract records,
//! and looked up or browsed through a REST API.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `chain` - Evidence contract gateway and submitter (Alloy)
//! - `flows` - Submission, lookup, and feed logic
//! - `wallet` - Signing account session
//! - `prefs` - Persisted display preferences
//! - `drive` - Google Drive import stub

pub mod api;
pub mod chain;
pub mod config;
pub mod drive;
pub mod error;
pub mod flows;
pub mod prefs;
pub mod state;
pub mod wallet;
