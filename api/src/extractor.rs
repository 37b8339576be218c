use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use shared::error::AppError;

pub const CLIENT_KEY_HEADER: &str = "x-toolnext-client";

/// Addresses the caller's booking draft. This is draft storage keying only,
/// not authentication; identity stays with the backend.
pub struct ClientKey(String);

impl ClientKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ClientKey
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(CLIENT_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| Self(value.to_string()))
            .ok_or(AppError::MissingClientKey)
    }
}
