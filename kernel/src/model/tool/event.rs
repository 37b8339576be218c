use crate::model::{id::ToolId, tool::Category};

pub struct CreateTool {
    pub name: String,
    pub price_per_day: i64,
    pub description: String,
    pub specifications: String,
    pub rental_terms: String,
    pub images: Vec<String>,
    pub category: Category,
}

#[derive(Debug)]
pub struct UpdateTool {
    pub tool_id: ToolId,
    pub name: Option<String>,
    pub price_per_day: Option<i64>,
    pub description: Option<String>,
    pub specifications: Option<String>,
    pub rental_terms: Option<String>,
    pub images: Option<Vec<String>>,
    pub category: Option<Category>,
}

#[derive(Debug)]
pub struct DeleteTool {
    pub tool_id: ToolId,
}
