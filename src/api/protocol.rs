//! JSON wire types for the conversion endpoint.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::case::Case;
use crate::domain::validate::ValidationError;

pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

// ─── Bodies ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionBody {
    pub original_case: Option<Case>,
    pub target_case: Case,
    pub original_text: String,
    pub converted_text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl From<ValidationError> for ErrorMessage {
    fn from(err: ValidationError) -> Self {
        Self {
            message: err.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub errors: Vec<ErrorMessage>,
}

impl ErrorBody {
    pub fn validation(errors: Vec<ValidationError>) -> Self {
        Self {
            errors: errors.into_iter().map(ErrorMessage::from).collect(),
        }
    }

    /// Generic body for faults after validation; never carries the cause.
    pub fn internal() -> Self {
        Self {
            errors: vec![ErrorMessage {
                message: INTERNAL_ERROR_MESSAGE.into(),
            }],
        }
    }
}

// ─── Response ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ConversionResponse {
    Success(ConversionBody),
    BadRequest(ErrorBody),
    Internal(ErrorBody),
}

impl ConversionResponse {
    pub fn status(&self) -> StatusCode {
        match self {
            ConversionResponse::Success(_) => StatusCode::OK,
            ConversionResponse::BadRequest(_) => StatusCode::BAD_REQUEST,
            ConversionResponse::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        match self {
            ConversionResponse::Success(body) => serde_json::to_string(body),
            ConversionResponse::BadRequest(body) | ConversionResponse::Internal(body) => {
                serde_json::to_string(body)
            }
        }
    }
}

impl IntoResponse for ConversionResponse {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ConversionResponse::Success(body) => (status, Json(body)).into_response(),
            ConversionResponse::BadRequest(body) | ConversionResponse::Internal(body) => {
                (status, Json(body)).into_response()
            }
        }
    }
}
