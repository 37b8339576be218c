use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{id::ToolId, tool::event::DeleteTool};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::tool::{
    CreateToolRequest, PaginatedToolResponse, ToolCreatedResponse, ToolListQuery, ToolResponse,
    UpdateToolRequest, UpdateToolRequestWithId,
};

pub async fn register_tool(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateToolRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    registry
        .tool_repository()
        .create(req.into())
        .await
        .map(|id| (StatusCode::CREATED, Json(ToolCreatedResponse { id })))
}

pub async fn show_tool_list(
    Query(query): Query<ToolListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PaginatedToolResponse>> {
    query.validate(&())?;

    registry
        .tool_repository()
        .find_all(query.into())
        .await
        .map(PaginatedToolResponse::from)
        .map(Json)
}

pub async fn show_tool(
    Path(tool_id): Path<ToolId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ToolResponse>> {
    registry
        .tool_repository()
        .find_by_id(tool_id)
        .await
        .and_then(|tool| match tool {
            Some(tool) => Ok(Json(tool.into())),
            None => Err(AppError::EntityNotFound(format!(
                "tool {tool_id} was not found"
            ))),
        })
}

pub async fn update_tool(
    Path(tool_id): Path<ToolId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateToolRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update_tool = UpdateToolRequestWithId::new(tool_id, req);
    registry
        .tool_repository()
        .update(update_tool.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_tool(
    Path(tool_id): Path<ToolId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let delete_tool = DeleteTool { tool_id };
    registry
        .tool_repository()
        .delete(delete_tool)
        .await
        .map(|_| StatusCode::OK)
}
