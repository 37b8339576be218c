use derive_new::new;
use garde::Validate;
use kernel::model::{
    feedback::event::CreateFeedback,
    id::{FeedbackId, ToolId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub description: String,
    #[garde(range(min = 0, max = 5))]
    pub rate: i32,
}

#[derive(new)]
pub struct CreateFeedbackRequestWithToolId(ToolId, CreateFeedbackRequest);

impl From<CreateFeedbackRequestWithToolId> for CreateFeedback {
    fn from(value: CreateFeedbackRequestWithToolId) -> Self {
        let CreateFeedbackRequestWithToolId(
            tool_id,
            CreateFeedbackRequest {
                name,
                description,
                rate,
            },
        ) = value;
        CreateFeedback {
            tool_id,
            name,
            description,
            rate,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackCreatedResponse {
    pub id: FeedbackId,
}
