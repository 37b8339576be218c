use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::booking::BookingDraft;

/// Persisted unsubmitted form state, one draft per client key.
#[async_trait]
pub trait DraftRepository: Send + Sync {
    async fn store(&self, client_key: &str, draft: &BookingDraft) -> AppResult<()>;
    async fn load(&self, client_key: &str) -> AppResult<Option<BookingDraft>>;
    async fn clear(&self, client_key: &str) -> AppResult<()>;
}
