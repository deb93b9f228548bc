// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `DATA_DIR` | Root directory for persisted preferences | `./data` |
//! | `EVIDENCE_RPC_URL` | Sepolia RPC endpoint | public Sepolia RPC |
//! | `EVIDENCE_CONTRACT` | Evidence contract address | pinned deployment |
//! | `EVIDENCE_SIGNER_KEY` | Hex private key for the signing account | Required for submissions |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use crate::chain::{EVIDENCE_CONTRACT, SEPOLIA};

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable name for the data directory path.
///
/// Holds the preferences file; nothing security-sensitive lives here.
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Environment variable name for the Sepolia RPC endpoint override.
pub const RPC_URL_ENV: &str = "EVIDENCE_RPC_URL";

/// Environment variable name for the Evidence contract address override.
pub const CONTRACT_ENV: &str = "EVIDENCE_CONTRACT";

/// Environment variable name for the signing account's private key.
///
/// Without it the service runs read-only: lookups and the feed work, record
/// submission reports the wallet provider as unavailable.
pub const SIGNER_KEY_ENV: &str = "EVIDENCE_SIGNER_KEY";

/// Environment variable name for the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// The RPC endpoint to use, from the environment or the network default.
pub fn rpc_url() -> String {
    std::env::var(RPC_URL_ENV).unwrap_or_else(|_| SEPOLIA.rpc_url.to_string())
}

/// The Evidence contract address, from the environment or the pinned
/// deployment.
pub fn contract_address() -> String {
    std::env::var(CONTRACT_ENV).unwrap_or_else(|_| EVIDENCE_CONTRACT.to_string())
}

/// The data directory, from the environment or `./data`.
pub fn data_dir() -> std::path::PathBuf {
    std::env::var(DATA_DIR_ENV)
        .unwrap_or_else(|_| "./data".to_string())
        .into()
}
