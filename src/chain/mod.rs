// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Chain integration module for the Evidence contract on Sepolia.
//!
//! This module provides functionality for:
//! - Reading the record count and individual evidence records
//! - Submitting signed `addEvidence` transactions
//! - Recovering the assigned record ID from the `EvidenceAdded` event

pub mod contract;
pub mod gateway;
pub mod submitter;
pub mod types;

pub use gateway::EvidenceGateway;
pub use submitter::RecordSubmitter;
pub use types::*;
