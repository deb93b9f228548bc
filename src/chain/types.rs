// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Chain types and constants.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ethereum network configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: &'static str,
    /// Chain ID
    pub chain_id: u64,
    /// RPC endpoint URL
    pub rpc_url: &'static str,
    /// Block explorer URL
    pub explorer_url: &'static str,
}

/// Ethereum Sepolia testnet configuration.
///
/// This deployment is pinned to Sepolia; there is no runtime network
/// switching.
pub const SEPOLIA: NetworkConfig = NetworkConfig {
    name: "Sepolia Testnet",
    chain_id: 11_155_111,
    rpc_url: "https://ethereum-sepolia-rpc.publicnode.com",
    explorer_url: "https://sepolia.etherscan.io",
};

/// Evidence contract deployment on Sepolia.
pub const EVIDENCE_CONTRACT: &str = "0x39F7FAd97c0cDEAfa0b354dFe7305d8f6CDDf71a";

/// Supported network identifier for this build.
pub const NETWORK_SEPOLIA: &str = "sepolia";

/// Validate network input for the Sepolia-only runtime.
pub fn ensure_sepolia_network(raw: Option<&str>) -> Result<(), String> {
    let value = raw.unwrap_or(NETWORK_SEPOLIA).trim().to_ascii_lowercase();
    if value == NETWORK_SEPOLIA {
        Ok(())
    } else {
        Err(format!(
            "Only `{NETWORK_SEPOLIA}` network is supported in this deployment."
        ))
    }
}

/// An on-chain evidence record, decoded from the contract's storage tuple.
///
/// Records are write-once: the contract assigns `id` and `timestamp` at
/// insertion and nothing in this service ever mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct EvidenceRecord {
    /// Record ID assigned by the contract (1-based, monotonically increasing).
    pub id: u64,
    /// Content fingerprint supplied by the client at submission time.
    pub file_hash: String,
    /// Display label supplied by the client.
    pub file_name: String,
    /// Small integer file-type tag; opaque to this service.
    pub file_type: u8,
    /// Seconds since epoch, assigned by the contract.
    pub timestamp: u64,
    /// Account address of the submitting wallet (checksummed).
    pub uploader: String,
}

impl EvidenceRecord {
    /// The contract timestamp as a UTC datetime, if representable.
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.timestamp as i64, 0).single()
    }
}

/// A transaction that has been sent but not yet confirmed.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    /// Transaction hash
    pub tx_hash: String,
    /// Explorer URL for the transaction
    pub explorer_url: String,
}

/// Errors that can occur during chain operations.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate limited by RPC provider: {0}")]
    RateLimited(String),

    #[error("Submission rejected by signer: {0}")]
    SubmissionRejected(String),

    #[error("Transaction sent but not confirmed: {0}")]
    Unconfirmed(String),

    #[error("Malformed record tuple for id {0}")]
    MalformedRecord(u64),
}

impl ChainError {
    /// Classify a raw send/RPC error message into the submission taxonomy.
    ///
    /// Providers surface backpressure as HTTP 429 ("Too Many Requests") and
    /// signer refusal as a rejection message; everything else is a plain
    /// network failure.
    pub fn classify_send(message: String) -> Self {
        let lower = message.to_ascii_lowercase();
        if lower.contains("too many requests") || lower.contains("429") || lower.contains("rate limit") {
            ChainError::RateLimited(message)
        } else if lower.contains("rejected") || lower.contains("denied") || lower.contains("declined") {
            ChainError::SubmissionRejected(message)
        } else {
            ChainError::Network(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_sepolia_accepts_default_and_exact() {
        assert!(ensure_sepolia_network(None).is_ok());
        assert!(ensure_sepolia_network(Some("sepolia")).is_ok());
        assert!(ensure_sepolia_network(Some(" SEPOLIA ")).is_ok());
        assert!(ensure_sepolia_network(Some("mainnet")).is_err());
    }

    #[test]
    fn classify_send_buckets_errors() {
        assert!(matches!(
            ChainError::classify_send("HTTP 429 Too Many Requests".into()),
            ChainError::RateLimited(_)
        ));
        assert!(matches!(
            ChainError::classify_send("user rejected transaction".into()),
            ChainError::SubmissionRejected(_)
        ));
        assert!(matches!(
            ChainError::classify_send("connection reset by peer".into()),
            ChainError::Network(_)
        ));
    }

    #[test]
    fn recorded_at_converts_epoch_seconds() {
        let record = EvidenceRecord {
            id: 1,
            file_hash: "0xabc".into(),
            file_name: "doc.pdf".into(),
            file_type: 0,
            timestamp: 1_700_000_000,
            uploader: "0x0000000000000000000000000000000000000001".into(),
        };
        let at = record.recorded_at().unwrap();
        assert_eq!(at.timestamp(), 1_700_000_000);
    }
}
