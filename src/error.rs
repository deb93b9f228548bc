// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! API error type and conversions from the flow error taxonomy.
//!
//! Every flow error is converted to a short user-facing status at the API
//! boundary; nothing propagates to a crash. The JSON body shape
//! `{"success": false, "message": ...}` matches what the dashboard expects
//! from the original backend.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::chain::ChainError;
use crate::drive::DriveError;
use crate::flows::lookup::LookupError;
use crate::flows::submission::SubmissionError;
use crate::prefs::PrefsError;
use crate::wallet::WalletError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            success: false,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ChainError> for ApiError {
    fn from(e: ChainError) -> Self {
        let status = match e {
            ChainError::Network(_) => StatusCode::SERVICE_UNAVAILABLE,
            ChainError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            ChainError::SubmissionRejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ChainError::Unconfirmed(_) => StatusCode::BAD_GATEWAY,
            ChainError::InvalidRpcUrl(_)
            | ChainError::InvalidAddress(_)
            | ChainError::MalformedRecord(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, e.to_string())
    }
}

impl From<LookupError> for ApiError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotFound => Self::not_found("Record not found."),
            LookupError::Chain(inner) => inner.into(),
        }
    }
}

impl From<SubmissionError> for ApiError {
    fn from(e: SubmissionError) -> Self {
        match e {
            SubmissionError::NothingPrepared => Self::bad_request(e.to_string()),
            SubmissionError::Read(_) => Self::bad_request(e.to_string()),
            SubmissionError::Chain(inner) => inner.into(),
        }
    }
}

impl From<WalletError> for ApiError {
    fn from(e: WalletError) -> Self {
        match e {
            WalletError::ProviderUnavailable(_) => Self::service_unavailable(e.to_string()),
            WalletError::InvalidKey(_) => Self::internal(e.to_string()),
        }
    }
}

impl From<PrefsError> for ApiError {
    fn from(e: PrefsError) -> Self {
        Self::internal(e.to_string())
    }
}

impl From<DriveError> for ApiError {
    fn from(_: DriveError) -> Self {
        Self::internal("Failed to process file from Google Drive.")
    }
}
