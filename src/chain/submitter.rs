// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Record submission: signed `addEvidence` transactions and confirmation
//! polling for the assigned record ID.

use std::str::FromStr;
use std::time::Duration;

use alloy::{
    network::EthereumWallet,
    primitives::{Address, TxHash},
    providers::{Provider, ProviderBuilder},
};

use super::contract::IEvidence;
use super::types::{ChainError, NetworkConfig, PendingSubmission};
use crate::flows::ChainWriter;

/// How often to poll for a transaction receipt.
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// How many polls before giving up and reporting the submission unconfirmed.
/// Sepolia blocks land every ~12s; 40 polls is a two-minute bound.
const RECEIPT_POLL_ATTEMPTS: u32 = 40;

/// Signing provider type (read fillers plus a wallet filler).
type SignedProvider = alloy::providers::fillers::FillProvider<
    alloy::providers::fillers::JoinFill<
        alloy::providers::fillers::JoinFill<
            alloy::providers::Identity,
            alloy::providers::fillers::JoinFill<
                alloy::providers::fillers::GasFiller,
                alloy::providers::fillers::JoinFill<
                    alloy::providers::fillers::BlobGasFiller,
                    alloy::providers::fillers::JoinFill<
                        alloy::providers::fillers::NonceFiller,
                        alloy::providers::fillers::ChainIdFiller,
                    >,
                >,
            >,
        >,
        alloy::providers::fillers::WalletFiller<EthereumWallet>,
    >,
    alloy::providers::RootProvider<alloy::network::Ethereum>,
>;

/// Write façade over the Evidence contract for the active signing account.
pub struct RecordSubmitter {
    network: NetworkConfig,
    contract_address: Address,
    provider: SignedProvider,
}

impl RecordSubmitter {
    /// Create a submitter bound to the given contract with signing capability.
    pub fn connect(
        network: NetworkConfig,
        rpc_url: &str,
        contract_address: &str,
        wallet: EthereumWallet,
    ) -> Result<Self, ChainError> {
        let url: url::Url = rpc_url
            .parse()
            .map_err(|e: url::ParseError| ChainError::InvalidRpcUrl(e.to_string()))?;

        let contract_address = Address::from_str(contract_address)
            .map_err(|e| ChainError::InvalidAddress(e.to_string()))?;

        let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);

        Ok(Self {
            network,
            contract_address,
            provider,
        })
    }

    /// Get the network configuration.
    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }
}

impl ChainWriter for RecordSubmitter {
    async fn send_record(
        &self,
        file_hash: &str,
        file_name: &str,
        file_type: u8,
    ) -> Result<PendingSubmission, ChainError> {
        let contract = IEvidence::new(self.contract_address, self.provider.clone());

        let pending = contract
            .addEvidence(file_hash.to_string(), file_name.to_string(), file_type)
            .send()
            .await
            .map_err(|e| ChainError::classify_send(e.to_string()))?;

        let tx_hash = format!("{:?}", pending.tx_hash());
        let explorer_url = format!("{}/tx/{}", self.network.explorer_url, tx_hash);

        tracing::info!(%tx_hash, "addEvidence transaction sent");

        Ok(PendingSubmission {
            tx_hash,
            explorer_url,
        })
    }

    async fn confirm(&self, pending: &PendingSubmission) -> Result<u64, ChainError> {
        let hash: TxHash = pending
            .tx_hash
            .parse()
            .map_err(|_| ChainError::Unconfirmed(format!("invalid tx hash {}", pending.tx_hash)))?;

        for _ in 0..RECEIPT_POLL_ATTEMPTS {
            let receipt = self
                .provider
                .get_transaction_receipt(hash)
                .await
                .map_err(|e| ChainError::Network(e.to_string()))?;

            if let Some(receipt) = receipt {
                if !receipt.status() {
                    return Err(ChainError::Unconfirmed("transaction reverted".into()));
                }

                for log in receipt.logs() {
                    if let Ok(decoded) = log.log_decode::<IEvidence::EvidenceAdded>() {
                        let id = u64::try_from(decoded.inner.data.evidenceId)
                            .map_err(|_| ChainError::Unconfirmed("event id out of range".into()))?;
                        tracing::info!(id, tx_hash = %pending.tx_hash, "submission confirmed");
                        return Ok(id);
                    }
                }

                return Err(ChainError::Unconfirmed(
                    "no EvidenceAdded event in receipt".into(),
                ));
            }

            tokio::time::sleep(RECEIPT_POLL_INTERVAL).await;
        }

        Err(ChainError::Unconfirmed(format!(
            "no receipt for {} after {} polls",
            pending.tx_hash, RECEIPT_POLL_ATTEMPTS
        )))
    }
}
