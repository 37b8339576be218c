use chrono::NaiveDate;
use kernel::model::{
    date_range::DateRange,
    id::{OwnerId, ToolId},
    tool::{
        event::{CreateTool, UpdateTool},
        Category, PaginatedToolList, Tool, ToolOwner, ToolSummary,
    },
};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

/// Full tool document as served by `GET /tools/{id}`. Decoded strictly:
/// a payload that cannot form a valid domain snapshot is rejected here
/// instead of leaking half-formed values into the booking core.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolPayload {
    pub id: ToolId,
    pub name: String,
    pub price_per_day: i64,
    #[serde(default)]
    pub booked_dates: Vec<BookedIntervalPayload>,
    pub owner: OwnerPayload,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub specifications: String,
    #[serde(default)]
    pub rental_terms: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    pub category: Category,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedIntervalPayload {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerPayload {
    pub id: OwnerId,
    pub name: String,
}

impl TryFrom<ToolPayload> for Tool {
    type Error = AppError;

    fn try_from(value: ToolPayload) -> Result<Self, Self::Error> {
        let ToolPayload {
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
        check_price(id, price_per_day)?;
        check_rating(id, rating)?;
        let booked_dates = booked_dates
            .into_iter()
            .map(DateRange::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Tool {
            id,
            name,
            price_per_day,
            booked_dates,
            owner: owner.into(),
            description,
            specifications,
            rental_terms,
            images,
            rating,
            category,
        })
    }
}

impl TryFrom<BookedIntervalPayload> for DateRange {
    type Error = AppError;

    fn try_from(value: BookedIntervalPayload) -> Result<Self, Self::Error> {
        DateRange::new(value.start_date, value.end_date).map_err(|_| {
            AppError::MalformedUpstreamPayload(format!(
                "booked interval {}..{} is inverted",
                value.start_date, value.end_date
            ))
        })
    }
}

impl From<OwnerPayload> for ToolOwner {
    fn from(value: OwnerPayload) -> Self {
        let OwnerPayload { id, name } = value;
        Self {
            owner_id: id,
            owner_name: name,
        }
    }
}

/// Catalog page from `GET /tools`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolListPayload {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub items: Vec<ToolSummaryPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSummaryPayload {
    pub id: ToolId,
    pub name: String,
    pub price_per_day: i64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    pub category: Category,
}

impl TryFrom<ToolListPayload> for PaginatedToolList {
    type Error = AppError;

    fn try_from(value: ToolListPayload) -> Result<Self, Self::Error> {
        let ToolListPayload {
            total,
            page,
            per_page,
            items,
        } = value;
        let items = items
            .into_iter()
            .map(ToolSummary::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PaginatedToolList {
            total,
            page,
            per_page,
            items,
        })
    }
}

impl TryFrom<ToolSummaryPayload> for ToolSummary {
    type Error = AppError;

    fn try_from(value: ToolSummaryPayload) -> Result<Self, Self::Error> {
        let ToolSummaryPayload {
            id,
            name,
            price_per_day,
            images,
            rating,
            category,
        } = value;
        check_price(id, price_per_day)?;
        check_rating(id, rating)?;
        Ok(ToolSummary {
            id,
            name,
            price_per_day,
            images,
            rating,
            category,
        })
    }
}

fn check_price(id: ToolId, price_per_day: i64) -> Result<(), AppError> {
    if price_per_day <= 0 {
        return Err(AppError::MalformedUpstreamPayload(format!(
            "tool {id} has a non-positive price per day ({price_per_day})"
        )));
    }
    Ok(())
}

fn check_rating(id: ToolId, rating: f64) -> Result<(), AppError> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(AppError::MalformedUpstreamPayload(format!(
            "tool {id} has a rating outside 0..=5 ({rating})"
        )));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateToolPayload {
    pub name: String,
    pub price_per_day: i64,
    pub description: String,
    pub specifications: String,
    pub rental_terms: String,
    pub images: Vec<String>,
    pub category: Category,
}

impl From<CreateTool> for CreateToolPayload {
    fn from(value: CreateTool) -> Self {
        let CreateTool {
            name,
            price_per_day,
            description,
            specifications,
            rental_terms,
            images,
            category,
        } = value;
        Self {
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
pub struct UpdateToolPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_day: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl From<UpdateTool> for UpdateToolPayload {
    fn from(value: UpdateTool) -> Self {
        let UpdateTool {
            tool_id: _,
            name,
            price_per_day,
            description,
            specifications,
            rental_terms,
            images,
            category,
        } = value;
        Self {
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

#[derive(Debug, Deserialize)]
pub struct ToolCreatedPayload {
    pub id: ToolId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json(price: i64, booked: &str) -> String {
        format!(
            r#"{{
                "id": "0190e5a1-7b3c-7b2a-9c5e-0d9be0a1c001",
                "name": "Cordless hammer drill",
                "pricePerDay": {price},
                "bookedDates": {booked},
                "owner": {{ "id": "0190e5a1-7b3c-7b2a-9c5e-0d9be0a1c002", "name": "Mykola" }},
                "description": "18V, two batteries included",
                "rating": 4.6,
                "category": "power-tools"
            }}"#
        )
    }

    #[test]
    fn well_formed_payload_decodes_into_a_tool() {
        let json = sample_json(200, r#"[{"startDate": "2024-06-12", "endDate": "2024-06-15"}]"#);
        let payload: ToolPayload = serde_json::from_str(&json).unwrap();
        let tool = Tool::try_from(payload).unwrap();
        assert_eq!(tool.price_per_day, 200);
        assert_eq!(tool.booked_dates.len(), 1);
        assert_eq!(tool.booked_dates[0].days(), 3);
        assert_eq!(tool.category, Category::PowerTools);
        // fields the backend omitted default to empty rather than failing
        assert!(tool.specifications.is_empty());
    }

    #[test]
    fn non_positive_price_is_a_decode_error() {
        let json = sample_json(0, "[]");
        let payload: ToolPayload = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            Tool::try_from(payload),
            Err(AppError::MalformedUpstreamPayload(_))
        ));
    }

    #[test]
    fn inverted_booked_interval_is_a_decode_error() {
        let json = sample_json(200, r#"[{"startDate": "2024-06-15", "endDate": "2024-06-12"}]"#);
        let payload: ToolPayload = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            Tool::try_from(payload),
            Err(AppError::MalformedUpstreamPayload(_))
        ));
    }
}
