use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{feedback::event::CreateFeedback, id::FeedbackId};
use kernel::repository::feedback::FeedbackRepository;
use shared::error::AppResult;

use crate::backend::BackendClient;

#[derive(new)]
pub struct FeedbackRepositoryImpl {
    client: Arc<BackendClient>,
}

#[async_trait]
impl FeedbackRepository for FeedbackRepositoryImpl {
    async fn create(&self, event: CreateFeedback) -> AppResult<FeedbackId> {
        self.client.create_feedback(event).await
    }
}
