// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Google Drive import stub.
//!
//! Downloads file bytes from the Drive v3 API with a caller-supplied access
//! token, then fabricates a placeholder content hash. This is explicitly a
//! stub: nothing is hashed or stored, and the returned value carries no
//! functional guarantee.

/// Google Drive v3 API base URL.
pub const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Errors from the drive client.
#[derive(Debug, thiserror::Error)]
pub enum DriveError {
    #[error("Drive request failed: {0}")]
    Request(String),

    #[error("Drive returned status {0}")]
    Status(u16),
}

/// Thin client for fetching file bytes from Google Drive.
pub struct DriveClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for DriveClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DriveClient {
    pub fn new() -> Self {
        Self::with_base_url(DRIVE_API_BASE)
    }

    /// Point the client at a different base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Download a file's raw bytes.
    pub async fn fetch_file(
        &self,
        file_id: &str,
        access_token: &str,
    ) -> Result<Vec<u8>, DriveError> {
        let url = format!("{}/files/{}?alt=media", self.base_url, file_id);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| DriveError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DriveError::Status(response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DriveError::Request(e.to_string()))?;

        tracing::info!(file_id, size = bytes.len(), "drive file downloaded");
        Ok(bytes.to_vec())
    }
}

/// Fabricate the placeholder IPFS-style hash for a drive file.
///
/// A real integration would pin the bytes and return the CID; the stub
/// derives a stable-looking marker from the file ID instead.
pub fn placeholder_ipfs_hash(file_id: &str) -> String {
    let prefix: String = file_id.chars().take(10).collect();
    format!("QmSimulatedHash_{prefix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_hash_uses_file_id_prefix() {
        assert_eq!(
            placeholder_ipfs_hash("1a2b3c4d5e6f7g8h"),
            "QmSimulatedHash_1a2b3c4d5e"
        );
        // Short IDs are taken whole.
        assert_eq!(placeholder_ipfs_hash("xyz"), "QmSimulatedHash_xyz");
        assert!(!placeholder_ipfs_hash("any").is_empty());
    }
}
