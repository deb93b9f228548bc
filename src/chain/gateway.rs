// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Read-only gateway over the deployed Evidence contract.

use std::str::FromStr;

use alloy::{
    network::Ethereum,
    primitives::{Address, U256},
    providers::{
        fillers::{BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller},
        Identity, ProviderBuilder, RootProvider,
    },
};

use super::contract::IEvidence;
use super::types::{ChainError, EvidenceRecord, NetworkConfig};
use crate::flows::ChainReader;

/// HTTP provider type for read-only calls (with all fillers).
type HttpProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider<Ethereum>,
>;

/// Read façade over the fixed Evidence contract deployment.
///
/// All results are decoded into [`EvidenceRecord`] at this boundary; a tuple
/// that does not match the expected shape is rejected rather than trusted.
pub struct EvidenceGateway {
    /// Network configuration
    network: NetworkConfig,
    /// Evidence contract address
    contract_address: Address,
    /// Alloy HTTP provider
    provider: HttpProvider,
}

impl EvidenceGateway {
    /// Create a gateway for the given network, RPC endpoint, and contract.
    pub fn connect(
        network: NetworkConfig,
        rpc_url: &str,
        contract_address: &str,
    ) -> Result<Self, ChainError> {
        let url: url::Url = rpc_url
            .parse()
            .map_err(|e: url::ParseError| ChainError::InvalidRpcUrl(e.to_string()))?;

        let contract_address = Address::from_str(contract_address)
            .map_err(|e| ChainError::InvalidAddress(e.to_string()))?;

        let provider = ProviderBuilder::new().connect_http(url);

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

    /// Get the contract address this gateway is bound to.
    pub fn contract_address(&self) -> Address {
        self.contract_address
    }

    async fn fetch_count(&self) -> Result<u64, ChainError> {
        let contract = IEvidence::new(self.contract_address, self.provider.clone());
        let count: U256 = contract
            .getRecordCount()
            .call()
            .await
            .map_err(|e| ChainError::Network(e.to_string()))?;

        u64::try_from(count).map_err(|_| ChainError::Network("record count out of range".into()))
    }

    async fn fetch_record(&self, id: u64) -> Result<Option<EvidenceRecord>, ChainError> {
        let contract = IEvidence::new(self.contract_address, self.provider.clone());
        let raw = contract
            .evidenceRecords(U256::from(id))
            .call()
            .await
            .map_err(|e| ChainError::Network(e.to_string()))?;

        // The contract returns an all-zero tuple for a never-written slot; an
        // empty fileHash is the "not found" marker.
        if raw.fileHash.is_empty() {
            return Ok(None);
        }

        let stored_id =
            u64::try_from(raw.id).map_err(|_| ChainError::MalformedRecord(id))?;
        if stored_id != id {
            return Err(ChainError::MalformedRecord(id));
        }
        let timestamp =
            u64::try_from(raw.timestamp).map_err(|_| ChainError::MalformedRecord(id))?;

        Ok(Some(EvidenceRecord {
            id: stored_id,
            file_hash: raw.fileHash,
            file_name: raw.fileName,
            file_type: raw.fileType,
            timestamp,
            uploader: raw.uploader.to_string(),
        }))
    }
}

impl ChainReader for EvidenceGateway {
    async fn record_count(&self) -> Result<u64, ChainError> {
        self.fetch_count().await
    }

    async fn record_by_id(&self, id: u64) -> Result<Option<EvidenceRecord>, ChainError> {
        self.fetch_record(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::types::{EVIDENCE_CONTRACT, SEPOLIA};

    #[test]
    fn connect_validates_inputs() {
        let ok = EvidenceGateway::connect(SEPOLIA, SEPOLIA.rpc_url, EVIDENCE_CONTRACT);
        assert!(ok.is_ok());

        let bad_url = EvidenceGateway::connect(SEPOLIA, "not a url", EVIDENCE_CONTRACT);
        assert!(matches!(bad_url, Err(ChainError::InvalidRpcUrl(_))));

        let bad_addr = EvidenceGateway::connect(SEPOLIA, SEPOLIA.rpc_url, "0x1234");
        assert!(matches!(bad_addr, Err(ChainError::InvalidAddress(_))));
    }

    #[test]
    fn gateway_exposes_network_and_contract() {
        let gateway =
            EvidenceGateway::connect(SEPOLIA, SEPOLIA.rpc_url, EVIDENCE_CONTRACT).unwrap();
        assert_eq!(gateway.network().chain_id, 11_155_111);
        assert_eq!(
            gateway.contract_address(),
            Address::from_str(EVIDENCE_CONTRACT).unwrap()
        );
    }
}
