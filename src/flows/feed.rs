// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Recent activity feed.
//!
//! Fetches the total record count, then the most recent IDs as one parallel
//! batch. Each entry carries its own status so one failed lookup does not
//! discard the rest of the batch.

use futures::future::join_all;
use serde::Serialize;
use utoipa::ToSchema;

use super::ChainReader;
use crate::chain::{ChainError, EvidenceRecord};

/// Default number of entries in the feed.
pub const FEED_LIMIT: u64 = 5;

/// Outcome of fetching one feed entry.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FeedEntryStatus {
    /// Record decoded successfully.
    Available { record: EvidenceRecord },
    /// The slot read back empty. Should not happen for IDs at or below the
    /// count unless the chain reorged under us.
    Missing,
    /// The individual lookup failed; the rest of the batch is unaffected.
    Unavailable { reason: String },
}

/// One feed entry with its per-item outcome.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct FeedEntry {
    /// Record ID this entry was fetched for.
    pub id: u64,
    #[serde(flatten)]
    pub status: FeedEntryStatus,
}

/// The assembled feed.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActivityFeed {
    /// Total number of records on chain at fetch time.
    pub total_records: u64,
    /// Most recent entries, newest first.
    pub entries: Vec<FeedEntry>,
}

/// The IDs to fetch for a feed page: at most `limit` of the most recently
/// assigned IDs, descending. IDs are 1-based, so a count of zero yields
/// nothing.
pub fn recent_ids(count: u64, limit: u64) -> Vec<u64> {
    let lowest = count.saturating_sub(limit) + 1;
    (lowest..=count).rev().collect()
}

/// Fetch the recent activity feed.
///
/// The count query failing fails the whole feed (there is nothing to show
/// without it); individual record lookups degrade per entry.
pub async fn recent_activity<R: ChainReader>(
    chain: &R,
    limit: u64,
) -> Result<ActivityFeed, ChainError> {
    let total_records = chain.record_count().await?;
    let ids = recent_ids(total_records, limit);

    let fetches = ids.iter().map(|&id| async move {
        let status = match chain.record_by_id(id).await {
            Ok(Some(record)) => FeedEntryStatus::Available { record },
            Ok(None) => FeedEntryStatus::Missing,
            Err(e) => FeedEntryStatus::Unavailable {
                reason: e.to_string(),
            },
        };
        FeedEntry { id, status }
    });

    let entries = join_all(fetches).await;

    Ok(ActivityFeed {
        total_records,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::testing::MemoryChain;

    #[test]
    fn recent_ids_caps_at_limit_and_floor() {
        assert_eq!(recent_ids(0, 5), Vec::<u64>::new());
        assert_eq!(recent_ids(3, 5), vec![3, 2, 1]);
        assert_eq!(recent_ids(5, 5), vec![5, 4, 3, 2, 1]);
        assert_eq!(recent_ids(10, 5), vec![10, 9, 8, 7, 6]);
        assert_eq!(recent_ids(10, 1), vec![10]);
    }

    #[tokio::test]
    async fn feed_returns_newest_first() {
        let chain = MemoryChain::new();
        for i in 1..=7 {
            chain.seed(&format!("0xhash{i}"), &format!("file{i}.txt"), 0);
        }

        let feed = recent_activity(&chain, FEED_LIMIT).await.unwrap();
        assert_eq!(feed.total_records, 7);
        assert_eq!(feed.entries.len(), 5);
        assert_eq!(
            feed.entries.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![7, 6, 5, 4, 3]
        );
        for entry in &feed.entries {
            match &entry.status {
                FeedEntryStatus::Available { record } => assert_eq!(record.id, entry.id),
                other => panic!("expected available entry, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn feed_smaller_than_limit_returns_all() {
        let chain = MemoryChain::new();
        chain.seed("0xonly", "one.txt", 0);

        let feed = recent_activity(&chain, FEED_LIMIT).await.unwrap();
        assert_eq!(feed.total_records, 1);
        assert_eq!(feed.entries.len(), 1);
        assert_eq!(feed.entries[0].id, 1);
    }

    #[tokio::test]
    async fn one_failed_lookup_degrades_only_that_entry() {
        let chain = MemoryChain::new();
        for i in 1..=3 {
            chain.seed(&format!("0xhash{i}"), &format!("file{i}.txt"), 0);
        }
        *chain.fail_read_id.lock().unwrap() = Some(2);

        let feed = recent_activity(&chain, FEED_LIMIT).await.unwrap();
        assert_eq!(feed.total_records, 3);
        assert_eq!(feed.entries.len(), 3);

        assert!(matches!(
            feed.entries[0].status,
            FeedEntryStatus::Available { .. }
        ));
        assert!(matches!(
            feed.entries[1].status,
            FeedEntryStatus::Unavailable { .. }
        ));
        assert!(matches!(
            feed.entries[2].status,
            FeedEntryStatus::Available { .. }
        ));
    }

    #[tokio::test]
    async fn count_failure_fails_the_feed() {
        let chain = MemoryChain::new();
        *chain.fail_read.lock().unwrap() = Some(ChainError::Network("rpc down".into()));
        let err = recent_activity(&chain, FEED_LIMIT).await.unwrap_err();
        assert!(matches!(err, ChainError::Network(_)));
    }
}
