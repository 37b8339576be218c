use kernel::model::{feedback::event::CreateFeedback, id::FeedbackId};
use serde::{Deserialize, Serialize};

/// Body of `POST /tools/{id}/feedbacks`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackPayload {
    pub name: String,
    pub description: String,
    pub rate: i32,
}

impl From<CreateFeedback> for CreateFeedbackPayload {
    fn from(value: CreateFeedback) -> Self {
        let CreateFeedback {
            tool_id: _,
            name,
            description,
            rate,
        } = value;
        Self {
            name,
            description,
            rate,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FeedbackCreatedPayload {
    pub id: FeedbackId,
}
