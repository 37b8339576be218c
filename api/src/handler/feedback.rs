use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::id::ToolId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::feedback::{
    CreateFeedbackRequest, CreateFeedbackRequestWithToolId, FeedbackCreatedResponse,
};

pub async fn post_feedback(
    Path(tool_id): Path<ToolId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateFeedbackRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let create_feedback = CreateFeedbackRequestWithToolId::new(tool_id, req);
    registry
        .feedback_repository()
        .create(create_feedback.into())
        .await
        .map(|id| (StatusCode::CREATED, Json(FeedbackCreatedResponse { id })))
}
