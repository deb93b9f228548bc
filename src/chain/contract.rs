// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Evidence contract interface.

use alloy::sol;

// Define the Evidence interface using alloy's sol! macro. The output names
// on `evidenceRecords` match the deployed contract's storage tuple layout;
// the input name is free-form and only the types are ABI-relevant.
sol! {
    #[sol(rpc)]
    interface IEvidence {
        function getRecordCount() external view returns (uint256);
        function evidenceRecords(uint256 recordId) external view returns (
            uint256 id,
            string fileHash,
            uint256 timestamp,
            address uploader,
            uint8 fileType,
            string fileName
        );
        function addEvidence(string fileHash, string fileName, uint8 fileType) external;
        event EvidenceAdded(uint256 indexed evidenceId, address indexed uploader, string fileHash);
    }
}
