// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Evidence submission flow.
//!
//! Drives a file from selection through hashing, signing, and confirmation:
//!
//! `Idle -> Hashing -> ReadyToSubmit -> AwaitingSignature ->
//! AwaitingConfirmation -> Confirmed | Failed`
//!
//! `Failed` is not terminal: the prepared fingerprint is retained so the
//! submission can be retried without re-hashing the file.

use std::path::Path;

use alloy::primitives::keccak256;

use super::ChainWriter;
use crate::chain::ChainError;

/// Compute the content fingerprint for a byte slice.
///
/// Keccak-256 over the raw bytes, 0x-prefixed hex. The algorithm is fixed;
/// fingerprints must stay comparable across every record ever submitted.
pub fn fingerprint(bytes: &[u8]) -> String {
    format!("{:?}", keccak256(bytes))
}

/// A hashed file waiting for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedFile {
    /// Content fingerprint (keccak-256, 0x-prefixed hex)
    pub file_hash: String,
    /// Display label for the record
    pub file_name: String,
}

/// Submission flow states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// No file selected.
    Idle,
    /// Fingerprint being computed.
    Hashing { file_name: String },
    /// Fingerprint computed; waiting for the user to submit.
    ReadyToSubmit { prepared: PreparedFile },
    /// Transaction handed to the signer.
    AwaitingSignature { prepared: PreparedFile },
    /// Transaction sent; waiting for network confirmation.
    AwaitingConfirmation {
        prepared: PreparedFile,
        tx_hash: String,
    },
    /// Record stored; carries the contract-assigned ID.
    Confirmed { record_id: u64, tx_hash: String },
    /// Submission failed; `prepared` is kept for retry when the fingerprint
    /// was already computed.
    Failed {
        reason: String,
        prepared: Option<PreparedFile>,
    },
}

/// Errors surfaced by the submission flow.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("No prepared file to submit")]
    NothingPrepared,

    #[error("Failed to read file: {0}")]
    Read(String),

    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// The submission state machine.
#[derive(Debug)]
pub struct SubmissionFlow {
    state: SubmissionState,
}

impl Default for SubmissionFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Select a file by its raw bytes. Any previous state, including
    /// `Confirmed`, is discarded and the flow restarts from hashing.
    pub fn select_file(&mut self, file_name: &str, bytes: &[u8]) -> PreparedFile {
        self.state = SubmissionState::Hashing {
            file_name: file_name.to_string(),
        };

        let prepared = PreparedFile {
            file_hash: fingerprint(bytes),
            file_name: file_name.to_string(),
        };
        self.state = SubmissionState::ReadyToSubmit {
            prepared: prepared.clone(),
        };
        prepared
    }

    /// Select a file from disk. A read error moves the flow to `Failed`.
    pub fn select_path(&mut self, path: &Path) -> Result<PreparedFile, SubmissionError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.state = SubmissionState::Hashing {
            file_name: file_name.clone(),
        };

        match std::fs::read(path) {
            Ok(bytes) => Ok(self.select_file(&file_name, &bytes)),
            Err(e) => {
                let reason = e.to_string();
                self.state = SubmissionState::Failed {
                    reason: reason.clone(),
                    prepared: None,
                };
                Err(SubmissionError::Read(reason))
            }
        }
    }

    /// Start the flow from an externally computed fingerprint.
    pub fn with_prepared(file_hash: &str, file_name: &str) -> Self {
        Self {
            state: SubmissionState::ReadyToSubmit {
                prepared: PreparedFile {
                    file_hash: file_hash.to_string(),
                    file_name: file_name.to_string(),
                },
            },
        }
    }

    /// Sign, send, and confirm the prepared submission.
    ///
    /// Valid from `ReadyToSubmit`, or from `Failed` when a prepared
    /// fingerprint was retained (retry without re-hashing).
    pub async fn submit<W: ChainWriter>(
        &mut self,
        chain: &W,
        file_type: u8,
    ) -> Result<u64, SubmissionError> {
        let prepared = match &self.state {
            SubmissionState::ReadyToSubmit { prepared } => prepared.clone(),
            SubmissionState::Failed {
                prepared: Some(prepared),
                ..
            } => prepared.clone(),
            _ => return Err(SubmissionError::NothingPrepared),
        };

        self.state = SubmissionState::AwaitingSignature {
            prepared: prepared.clone(),
        };

        let pending = match chain
            .send_record(&prepared.file_hash, &prepared.file_name, file_type)
            .await
        {
            Ok(pending) => pending,
            Err(e) => {
                self.state = SubmissionState::Failed {
                    reason: e.to_string(),
                    prepared: Some(prepared),
                };
                return Err(e.into());
            }
        };

        self.state = SubmissionState::AwaitingConfirmation {
            prepared: prepared.clone(),
            tx_hash: pending.tx_hash.clone(),
        };

        match chain.confirm(&pending).await {
            Ok(record_id) => {
                self.state = SubmissionState::Confirmed {
                    record_id,
                    tx_hash: pending.tx_hash,
                };
                Ok(record_id)
            }
            Err(e) => {
                self.state = SubmissionState::Failed {
                    reason: e.to_string(),
                    prepared: Some(prepared),
                };
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::testing::MemoryChain;
    use crate::flows::ChainReader;

    #[test]
    fn fingerprint_is_deterministic() {
        let a = fingerprint(b"same bytes");
        let b = fingerprint(b"same bytes");
        assert_eq!(a, b);
        assert_ne!(a, fingerprint(b"other bytes"));
        assert!(a.starts_with("0x"));
        assert_eq!(a.len(), 66);
    }

    #[test]
    fn select_file_prepares_and_resets() {
        let mut flow = SubmissionFlow::new();
        assert_eq!(*flow.state(), SubmissionState::Idle);

        let prepared = flow.select_file("report.pdf", b"contents");
        assert_eq!(prepared.file_name, "report.pdf");
        assert!(matches!(flow.state(), SubmissionState::ReadyToSubmit { .. }));

        // Selecting another file discards the previous preparation.
        let second = flow.select_file("other.png", b"different");
        assert_ne!(prepared.file_hash, second.file_hash);
    }

    #[test]
    fn select_path_read_error_fails_flow() {
        let mut flow = SubmissionFlow::new();
        let err = flow
            .select_path(Path::new("/definitely/not/here.bin"))
            .unwrap_err();
        assert!(matches!(err, SubmissionError::Read(_)));
        assert!(matches!(
            flow.state(),
            SubmissionState::Failed { prepared: None, .. }
        ));
    }

    #[tokio::test]
    async fn happy_path_reaches_confirmed_with_id() {
        let chain = MemoryChain::new();
        let mut flow = SubmissionFlow::new();
        flow.select_file("case-789.jpg", b"photo bytes");

        let id = flow.submit(&chain, 0).await.unwrap();
        assert_eq!(id, 1);
        assert!(matches!(
            flow.state(),
            SubmissionState::Confirmed { record_id: 1, .. }
        ));

        // The record landed with what was submitted.
        let stored = chain.record_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.file_hash, fingerprint(b"photo bytes"));
        assert_eq!(stored.file_name, "case-789.jpg");
        assert_eq!(stored.uploader, chain.uploader);
    }

    #[tokio::test]
    async fn submit_without_preparation_is_rejected() {
        let chain = MemoryChain::new();
        let mut flow = SubmissionFlow::new();
        let err = flow.submit(&chain, 0).await.unwrap_err();
        assert!(matches!(err, SubmissionError::NothingPrepared));
        assert_eq!(*flow.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn send_failure_retains_prepared_and_retry_succeeds() {
        let chain = MemoryChain::new();
        *chain.fail_send.lock().unwrap() =
            Some(ChainError::RateLimited("Too Many Requests".into()));

        let mut flow = SubmissionFlow::new();
        let prepared = flow.select_file("doc.txt", b"payload");

        let err = flow.submit(&chain, 2).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Chain(ChainError::RateLimited(_))));
        match flow.state() {
            SubmissionState::Failed {
                prepared: Some(kept),
                ..
            } => assert_eq!(*kept, prepared),
            other => panic!("expected Failed with retained file, got {other:?}"),
        }

        // Retry with the same already-computed hash.
        let id = flow.submit(&chain, 2).await.unwrap();
        assert_eq!(id, 1);
        let stored = chain.record_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.file_hash, prepared.file_hash);
        assert_eq!(stored.file_type, 2);
    }

    #[tokio::test]
    async fn confirmation_failure_is_retryable_too() {
        let chain = MemoryChain::new();
        *chain.fail_confirm.lock().unwrap() =
            Some(ChainError::Unconfirmed("no receipt".into()));

        let mut flow = SubmissionFlow::new();
        flow.select_file("doc.txt", b"payload");

        let err = flow.submit(&chain, 0).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Chain(ChainError::Unconfirmed(_))));
        assert!(matches!(
            flow.state(),
            SubmissionState::Failed {
                prepared: Some(_),
                ..
            }
        ));
    }
}
