use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::ToolId,
    tool::{
        event::{CreateTool, DeleteTool, UpdateTool},
        PaginatedToolList, Tool, ToolListOptions,
    },
};

/// Catalog access backed by the authoritative ToolNext backend.
#[async_trait]
pub trait ToolRepository: Send + Sync {
    async fn find_all(&self, options: ToolListOptions) -> AppResult<PaginatedToolList>;
    async fn find_by_id(&self, tool_id: ToolId) -> AppResult<Option<Tool>>;
    async fn create(&self, event: CreateTool) -> AppResult<ToolId>;
    async fn update(&self, event: UpdateTool) -> AppResult<()>;
    async fn delete(&self, event: DeleteTool) -> AppResult<()>;
}
