use axum::{extract::State, http::StatusCode, Json};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::ClientKey,
    model::draft::{DraftResponse, StoreDraftRequest},
};

pub async fn show_draft(
    client: ClientKey,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DraftResponse>> {
    registry
        .draft_repository()
        .load(client.as_str())
        .await
        .and_then(|draft| match draft {
            Some(draft) => Ok(Json(draft.into())),
            None => Err(AppError::EntityNotFound(
                "no booking draft is stored".into(),
            )),
        })
}

pub async fn store_draft(
    client: ClientKey,
    State(registry): State<AppRegistry>,
    Json(req): Json<StoreDraftRequest>,
) -> AppResult<StatusCode> {
    registry
        .draft_repository()
        .store(client.as_str(), &req.into())
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn reset_draft(
    client: ClientKey,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .draft_repository()
        .clear(client.as_str())
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
