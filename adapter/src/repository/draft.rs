use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::booking::BookingDraft;
use kernel::repository::draft::DraftRepository;
use shared::error::AppResult;

use crate::redis::RedisClient;

/// Drafts live under one well-known key per client and expire after the
/// configured TTL unless cleared by a successful submission or a reset.
#[derive(new)]
pub struct DraftRepositoryImpl {
    kv: Arc<RedisClient>,
    ttl: u64,
}

impl DraftRepositoryImpl {
    fn key(client_key: &str) -> String {
        format!("booking-draft:{client_key}")
    }
}

#[async_trait]
impl DraftRepository for DraftRepositoryImpl {
    async fn store(&self, client_key: &str, draft: &BookingDraft) -> AppResult<()> {
        let serialized = serde_json::to_string(draft)?;
        self.kv
            .set_ex(&Self::key(client_key), &serialized, self.ttl)
            .await
    }

    async fn load(&self, client_key: &str) -> AppResult<Option<BookingDraft>> {
        match self.kv.get(&Self::key(client_key)).await? {
            Some(serialized) => Ok(Some(serde_json::from_str(&serialized)?)),
            None => Ok(None),
        }
    }

    async fn clear(&self, client_key: &str) -> AppResult<()> {
        self.kv.delete(&Self::key(client_key)).await
    }
}
