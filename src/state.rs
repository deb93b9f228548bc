// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::chain::EvidenceGateway;
use crate::drive::DriveClient;
use crate::prefs::PreferenceStore;
use crate::wallet::WalletSession;

/// Shared application state.
///
/// The gateway is read-only and freely shared; the wallet session and the
/// preference store are mutated through handlers and sit behind locks. The
/// RPC URL is retained so submissions can build a signing provider against
/// the same endpoint the gateway reads from.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<EvidenceGateway>,
    pub session: Arc<RwLock<WalletSession>>,
    pub prefs: Arc<RwLock<PreferenceStore>>,
    pub drive: Arc<DriveClient>,
    pub rpc_url: Arc<str>,
}

impl AppState {
    pub fn new(
        gateway: EvidenceGateway,
        prefs: PreferenceStore,
        drive: DriveClient,
        rpc_url: String,
    ) -> Self {
        Self {
            gateway: Arc::new(gateway),
            session: Arc::new(RwLock::new(WalletSession::new())),
            prefs: Arc::new(RwLock::new(prefs)),
            drive: Arc::new(drive),
            rpc_url: rpc_url.into(),
        }
    }
}
