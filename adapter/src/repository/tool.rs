use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::ToolId,
    tool::{
        event::{CreateTool, DeleteTool, UpdateTool},
        PaginatedToolList, Tool, ToolListOptions,
    },
};
use kernel::repository::tool::ToolRepository;
use shared::error::AppResult;

use crate::backend::BackendClient;

#[derive(new)]
pub struct ToolRepositoryImpl {
    client: Arc<BackendClient>,
}

#[async_trait]
impl ToolRepository for ToolRepositoryImpl {
    async fn find_all(&self, options: ToolListOptions) -> AppResult<PaginatedToolList> {
        self.client.list_tools(&options).await
    }

    async fn find_by_id(&self, tool_id: ToolId) -> AppResult<Option<Tool>> {
        self.client.fetch_tool(tool_id).await
    }

    async fn create(&self, event: CreateTool) -> AppResult<ToolId> {
        self.client.create_tool(event).await
    }

    async fn update(&self, event: UpdateTool) -> AppResult<()> {
        self.client.update_tool(event).await
    }

    async fn delete(&self, event: DeleteTool) -> AppResult<()> {
        self.client.delete_tool(event.tool_id).await
    }
}
