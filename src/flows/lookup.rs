// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Evidence lookup flow.
//!
//! Stateless per call. A missing record and a transient network failure are
//! distinct outcomes: collapsing them loses the only diagnostic signal a
//! user gets when the RPC endpoint is having a bad day.

use super::ChainReader;
use crate::chain::{ChainError, EvidenceRecord};

/// Errors surfaced by a lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Record not found")]
    NotFound,

    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// Look up a record by ID.
pub async fn lookup_record<R: ChainReader>(
    chain: &R,
    id: u64,
) -> Result<EvidenceRecord, LookupError> {
    match chain.record_by_id(id).await? {
        Some(record) => Ok(record),
        None => Err(LookupError::NotFound),
    }
}
