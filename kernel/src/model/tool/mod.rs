use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::model::{
    date_range::DateRange,
    id::{OwnerId, ToolId},
};

pub mod event;

/// Snapshot of a rentable tool as served by the backend. The client never
/// mutates it; `booked_dates` only changes through refetch.
#[derive(Debug)]
pub struct Tool {
    pub id: ToolId,
    pub name: String,
    pub price_per_day: i64,
    pub booked_dates: Vec<DateRange>,
    pub owner: ToolOwner,
    pub description: String,
    pub specifications: String,
    pub rental_terms: String,
    pub images: Vec<String>,
    pub rating: f64,
    pub category: Category,
}

#[derive(Debug)]
pub struct ToolOwner {
    pub owner_id: OwnerId,
    pub owner_name: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    PowerTools,
    HandTools,
    Garden,
    Ladders,
    Cleaning,
    Measuring,
    Automotive,
    Other,
}

/// Catalog row; the full snapshot (including `booked_dates`) comes from a
/// tool fetch, not from the listing.
#[derive(Debug)]
pub struct ToolSummary {
    pub id: ToolId,
    pub name: String,
    pub price_per_day: i64,
    pub images: Vec<String>,
    pub rating: f64,
    pub category: Category,
}

#[derive(Debug)]
pub struct ToolListOptions {
    pub page: i64,
    pub per_page: i64,
    pub search: Option<String>,
    pub categories: Vec<Category>,
}

#[derive(Debug)]
pub struct PaginatedToolList {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub items: Vec<ToolSummary>,
}
