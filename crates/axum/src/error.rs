//! Rejection types for temporal field binding.

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;
use serde_json::json;
use tempora_core::RegistryError;
use thiserror::Error;

/// A single field that failed to bind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending request field.
    pub field: String,
    /// The raw value as received, absent when the field was missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Machine-stable failure code, e.g. `invalid-local-date`.
    pub code: &'static str,
    /// Human-readable description of what the field expected.
    pub message: String,
}

/// Why a bind pass failed as a whole.
#[derive(Debug, Error)]
pub enum BindRejection {
    /// One or more fields failed validation. The request is rejected with
    /// every accumulated field error, not just the first.
    #[error("request validation failed: {} invalid field(s)", .errors.len())]
    Validation {
        /// Field errors in the order the fields were bound.
        errors: Vec<FieldError>,
    },

    /// The binder asked for a type the registry does not know. This is a
    /// wiring bug in the host application, not a client error.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl BindRejection {
    /// Field errors carried by a validation rejection.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation { errors } => errors,
            Self::Registry(_) => &[],
        }
    }
}

impl IntoResponse for BindRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { errors } => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            Self::Registry(err) => {
                tracing::error!(error = %err, code = err.code(), "temporal binder misconfigured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal configuration error" })),
                )
                    .into_response()
            }
        }
    }
}
