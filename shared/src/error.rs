use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    EntityNotFound(String),

    #[error("booking form validation failed")]
    ValidationFailed(FieldErrors),

    #[error("{0}")]
    InvalidRequest(#[from] garde::Report),

    #[error("x-toolnext-client header is required")]
    MissingClientKey,

    #[error("requested range overlaps an existing booking from {start} to {end}")]
    BookingConflict { start: NaiveDate, end: NaiveDate },

    #[error("a booking submission for this client is already in flight")]
    SubmissionInFlight,

    #[error("{message}")]
    UpstreamRejected { status: u16, message: String },

    #[error("could not reach the ToolNext backend")]
    UpstreamUnreachable(#[source] reqwest::Error),

    #[error("malformed backend payload: {0}")]
    MalformedUpstreamPayload(String),

    #[error("key value store operation failed")]
    KeyValueStoreError(#[from] redis::RedisError),

    #[error("serialization failed")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    ConversionEntityError(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Per-field validation messages keyed by the client-facing field name.
/// An empty mapping means the form is valid. Only the first message reported
/// for a field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.insert(field, message);
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let status_code = match &self {
            AppError::ValidationFailed(_)
            | AppError::InvalidRequest(_)
            | AppError::MissingClientKey => StatusCode::BAD_REQUEST,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::BookingConflict { .. } | AppError::SubmissionInFlight => {
                StatusCode::CONFLICT
            }
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            // backend 4xx verdicts pass through; anything else reads as a bad gateway
            AppError::UpstreamRejected { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(StatusCode::is_client_error)
                .unwrap_or(StatusCode::BAD_GATEWAY),
            AppError::UpstreamUnreachable(_) | AppError::MalformedUpstreamPayload(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::KeyValueStoreError(_)
            | AppError::SerializationError(_)
            | AppError::ConversionEntityError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self, error.message = %self,
                "unexpected error happened"
            );
        }

        let body = match self {
            AppError::ValidationFailed(errors) => {
                serde_json::json!({ "error": message, "errors": errors })
            }
            AppError::BookingConflict { start, end } => serde_json::json!({
                "error": message,
                "conflict": { "startDate": start, "endDate": end },
            }),
            _ => serde_json::json!({ "error": message }),
        };

        (status_code, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_keep_first_message_per_field() {
        let mut errors = FieldErrors::new();
        errors.insert("phone", "must be 10 to 15 digits");
        errors.insert("phone", "something else");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({ "phone": "must be 10 to 15 digits" })
        );
    }

    #[test]
    fn upstream_rejection_passes_client_statuses_through() {
        let rejected = AppError::UpstreamRejected {
            status: 409,
            message: "already booked".into(),
        };
        assert_eq!(rejected.into_response().status(), StatusCode::CONFLICT);

        let faulted = AppError::UpstreamRejected {
            status: 500,
            message: "server fault".into(),
        };
        assert_eq!(faulted.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
