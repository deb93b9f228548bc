// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet session management.
//!
//! At most one signing account is connected per service instance. The signer
//! is built from a configured private key; there is no interactive provider
//! in a headless deployment. Disconnecting clears local session state only —
//! it is a sign-out, not a security boundary.

use alloy::{network::EthereumWallet, primitives::Address, signers::local::PrivateKeySigner};

use crate::config::SIGNER_KEY_ENV;

/// Errors that can occur while establishing a wallet session.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("No wallet provider available: {0}")]
    ProviderUnavailable(String),

    #[error("Invalid signer key: {0}")]
    InvalidKey(String),
}

/// A connected signing account.
#[derive(Debug, Clone)]
pub struct ConnectedAccount {
    /// Account address derived from the signer key.
    pub address: Address,
    wallet: EthereumWallet,
}

impl ConnectedAccount {
    /// A wallet handle for building a signing provider.
    pub fn wallet(&self) -> EthereumWallet {
        self.wallet.clone()
    }
}

/// The active wallet session, if any.
#[derive(Debug, Default)]
pub struct WalletSession {
    active: Option<ConnectedAccount>,
}

impl WalletSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect using the key configured in the environment.
    ///
    /// Fails with [`WalletError::ProviderUnavailable`] when no key is
    /// configured at all.
    pub fn connect_from_env(&mut self) -> Result<Address, WalletError> {
        let key = std::env::var(SIGNER_KEY_ENV).map_err(|_| {
            WalletError::ProviderUnavailable(format!("{SIGNER_KEY_ENV} is not set"))
        })?;
        self.connect_with_key(key.trim())
    }

    /// Connect using a hex-encoded private key (with or without 0x prefix).
    pub fn connect_with_key(&mut self, key_hex: &str) -> Result<Address, WalletError> {
        let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);
        let key_bytes = alloy::hex::decode(key_hex)
            .map_err(|e| WalletError::InvalidKey(e.to_string()))?;
        let signer = PrivateKeySigner::from_slice(&key_bytes)
            .map_err(|e| WalletError::InvalidKey(e.to_string()))?;

        let address = signer.address();
        self.active = Some(ConnectedAccount {
            address,
            wallet: EthereumWallet::from(signer),
        });

        tracing::info!(%address, "wallet session connected");
        Ok(address)
    }

    /// Local sign-out. Does not and cannot revoke anything at the provider.
    pub fn disconnect(&mut self) {
        if let Some(account) = self.active.take() {
            tracing::info!(address = %account.address, "wallet session disconnected");
        }
    }

    /// The active account address, or none when signed out.
    pub fn address(&self) -> Option<Address> {
        self.active.as_ref().map(|a| a.address)
    }

    /// The active account, or none when signed out.
    pub fn account(&self) -> Option<&ConnectedAccount> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known hardhat test key; never holds real funds.
    const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn connect_derives_expected_address() {
        let mut session = WalletSession::new();
        assert!(session.address().is_none());

        let address = session.connect_with_key(TEST_KEY).unwrap();
        assert_eq!(address.to_string(), TEST_ADDRESS);
        assert_eq!(session.address(), Some(address));
    }

    #[test]
    fn connect_accepts_0x_prefix() {
        let mut session = WalletSession::new();
        let plain = session.connect_with_key(TEST_KEY).unwrap();
        let prefixed = session
            .connect_with_key(&format!("0x{TEST_KEY}"))
            .unwrap();
        assert_eq!(plain, prefixed);
    }

    #[test]
    fn malformed_key_is_rejected() {
        let mut session = WalletSession::new();
        assert!(matches!(
            session.connect_with_key("zz not hex"),
            Err(WalletError::InvalidKey(_))
        ));
        assert!(matches!(
            session.connect_with_key("abcd"),
            Err(WalletError::InvalidKey(_))
        ));
        assert!(session.address().is_none());
    }

    #[test]
    fn disconnect_clears_session() {
        let mut session = WalletSession::new();
        session.connect_with_key(TEST_KEY).unwrap();
        session.disconnect();
        assert!(session.address().is_none());
        assert!(session.account().is_none());
    }
}
