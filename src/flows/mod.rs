// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Evidence flows: submission, lookup, and the recent-activity feed.
//!
//! Each flow takes its chain access as an explicit capability ([`ChainReader`]
//! or [`ChainWriter`]) rather than reaching for a global client, so the flow
//! logic is exercised against an in-memory chain in tests.

pub mod feed;
pub mod lookup;
pub mod submission;

use std::future::Future;

use crate::chain::{ChainError, EvidenceRecord, PendingSubmission};

/// Read access to the Evidence contract.
pub trait ChainReader {
    /// Total number of records stored by the contract.
    fn record_count(&self) -> impl Future<Output = Result<u64, ChainError>> + Send;

    /// Fetch a record by ID; `None` when the slot was never written.
    fn record_by_id(
        &self,
        id: u64,
    ) -> impl Future<Output = Result<Option<EvidenceRecord>, ChainError>> + Send;
}

/// Write access to the Evidence contract via the active signing account.
pub trait ChainWriter {
    /// Sign and send an `addEvidence` transaction.
    fn send_record(
        &self,
        file_hash: &str,
        file_name: &str,
        file_type: u8,
    ) -> impl Future<Output = Result<PendingSubmission, ChainError>> + Send;

    /// Wait (bounded) for confirmation and return the assigned record ID.
    fn confirm(
        &self,
        pending: &PendingSubmission,
    ) -> impl Future<Output = Result<u64, ChainError>> + Send;
}
