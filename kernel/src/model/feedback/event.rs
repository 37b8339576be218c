use derive_new::new;

use crate::model::id::ToolId;

#[derive(Debug, new)]
pub struct CreateFeedback {
    pub tool_id: ToolId,
    pub name: String,
    pub description: String,
    pub rate: i32,
}
