use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{feedback::event::CreateFeedback, id::FeedbackId};

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn create(&self, event: CreateFeedback) -> AppResult<FeedbackId>;
}
