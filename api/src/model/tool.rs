use chrono::NaiveDate;
use derive_new::new;
use garde::Validate;
use kernel::model::{
    date_range::DateRange,
    id::{OwnerId, ToolId},
    tool::{
        event::{CreateTool, UpdateTool},
        Category, PaginatedToolList, Tool, ToolListOptions, ToolOwner, ToolSummary,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ToolListQuery {
    #[garde(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: i64,
    #[garde(range(min = 1, max = 100))]
    #[serde(default = "default_per_page")]
    pub per_page: i64,
    #[garde(skip)]
    pub search: Option<String>,
    /// Comma-separated category slugs, e.g. `power-tools,garden`.
    #[garde(inner(custom(known_categories)))]
    pub categories: Option<String>,
}

const fn default_page() -> i64 {
    1
}

const fn default_per_page() -> i64 {
    20
}

fn known_categories(value: &str, _ctx: &()) -> garde::Result {
    for token in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if token.parse::<Category>().is_err() {
            return Err(garde::Error::new(format!("unknown category: {token}")));
        }
    }
    Ok(())
}

impl From<ToolListQuery> for ToolListOptions {
    fn from(value: ToolListQuery) -> Self {
        let ToolListQuery {
            page,
            per_page,
            search,
            categories,
        } = value;
        let categories = categories
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter_map(|token| token.parse().ok())
                    .collect()
            })
            .unwrap_or_default();
        Self {
            page,
            per_page,
            search,
            categories,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateToolRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(range(min = 1))]
    pub price_per_day: i64,
    #[garde(skip)]
    pub description: String,
    #[garde(skip)]
    pub specifications: String,
    #[garde(skip)]
    pub rental_terms: String,
    #[garde(skip)]
    #[serde(default)]
    pub images: Vec<String>,
    #[garde(skip)]
    pub category: Category,
}

impl From<CreateToolRequest> for CreateTool {
    fn from(value: CreateToolRequest) -> Self {
        let CreateToolRequest {
            name,
            price_per_day,
            description,
            specifications,
            rental_terms,
            images,
            category,
        } = value;
        CreateTool {
            name,
            price_per_day,
            description,
            specifications,
            rental_terms,
            images,
            category,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateToolRequest {
    #[garde(length(min = 1))]
    pub name: Option<String>,
    #[garde(range(min = 1))]
    pub price_per_day: Option<i64>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    pub specifications: Option<String>,
    #[garde(skip)]
    pub rental_terms: Option<String>,
    #[garde(skip)]
    pub images: Option<Vec<String>>,
    #[garde(skip)]
    pub category: Option<Category>,
}

#[derive(new)]
pub struct UpdateToolRequestWithId(ToolId, UpdateToolRequest);

impl From<UpdateToolRequestWithId> for UpdateTool {
    fn from(value: UpdateToolRequestWithId) -> Self {
        let UpdateToolRequestWithId(
            tool_id,
            UpdateToolRequest {
                name,
                price_per_day,
                description,
                specifications,
                rental_terms,
                images,
                category,
            },
        ) = value;
        UpdateTool {
            tool_id,
            name,
            price_per_day,
            description,
            specifications,
            rental_terms,
            images,
            category,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCreatedResponse {
    pub id: ToolId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    pub id: ToolId,
    pub name: String,
    pub price_per_day: i64,
    pub booked_dates: Vec<BookedDateResponse>,
    pub owner: ToolOwnerResponse,
    pub description: String,
    pub specifications: String,
    pub rental_terms: String,
    pub images: Vec<String>,
    pub rating: f64,
    pub category: Category,
}

impl From<Tool> for ToolResponse {
    fn from(value: Tool) -> Self {
        let Tool {
            id,
            name,
            price_per_day,
            booked_dates,
            owner,
            description,
            specifications,
            rental_terms,
            images,
            rating,
            category,
        } = value;
        Self {
            id,
            name,
            price_per_day,
            booked_dates: booked_dates.into_iter().map(BookedDateResponse::from).collect(),
            owner: owner.into(),
            description,
            specifications,
            rental_terms,
            images,
            rating,
            category,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedDateResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<DateRange> for BookedDateResponse {
    fn from(value: DateRange) -> Self {
        Self {
            start_date: value.start(),
            end_date: value.end(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolOwnerResponse {
    pub owner_id: OwnerId,
    pub owner_name: String,
}

impl From<ToolOwner> for ToolOwnerResponse {
    fn from(value: ToolOwner) -> Self {
        let ToolOwner {
            owner_id,
            owner_name,
        } = value;
        Self {
            owner_id,
            owner_name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSummaryResponse {
    pub id: ToolId,
    pub name: String,
    pub price_per_day: i64,
    pub images: Vec<String>,
    pub rating: f64,
    pub category: Category,
}

impl From<ToolSummary> for ToolSummaryResponse {
    fn from(value: ToolSummary) -> Self {
        let ToolSummary {
            id,
            name,
            price_per_day,
            images,
            rating,
            category,
        } = value;
        Self {
            id,
            name,
            price_per_day,
            images,
            rating,
            category,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedToolResponse {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub items: Vec<ToolSummaryResponse>,
}

impl From<PaginatedToolList> for PaginatedToolResponse {
    fn from(value: PaginatedToolList) -> Self {
        let PaginatedToolList {
            total,
            page,
            per_page,
            items,
        } = value;
        Self {
            total,
            page,
            per_page,
            items: items.into_iter().map(ToolSummaryResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_filter_splits_and_parses_slugs() {
        let query = ToolListQuery {
            page: 1,
            per_page: 20,
            search: None,
            categories: Some("power-tools, garden".into()),
        };
        let options = ToolListOptions::from(query);
        assert_eq!(options.categories, vec![Category::PowerTools, Category::Garden]);
    }

    #[test]
    fn unknown_category_slug_fails_validation() {
        let query = ToolListQuery {
            page: 1,
            per_page: 20,
            search: None,
            categories: Some("power-tools,chainsaws".into()),
        };
        assert!(query.validate(&()).is_err());
    }
}
