use chrono::NaiveDate;
use kernel::booking::pricing::Quote;
use kernel::model::{
    booking::{BookingConfirmation, BookingForm},
    id::{BookingId, ToolId},
};
use serde::{Deserialize, Serialize};

/// Booking form exactly as the client submits (and re-loads) it. Field-level
/// validation happens in the kernel, which reports per-field messages rather
/// than rejecting the request shape.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFormRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub start_date: String,
    pub end_date: String,
    pub delivery_city: String,
    pub delivery_branch: String,
}

impl From<BookingFormRequest> for BookingForm {
    fn from(value: BookingFormRequest) -> Self {
        let BookingFormRequest {
            first_name,
            last_name,
            phone,
            start_date,
            end_date,
            delivery_city,
            delivery_branch,
        } = value;
        BookingForm {
            first_name,
            last_name,
            phone,
            start_date,
            end_date,
            delivery_city,
            delivery_branch,
        }
    }
}

impl From<BookingForm> for BookingFormRequest {
    fn from(value: BookingForm) -> Self {
        let BookingForm {
            first_name,
            last_name,
            phone,
            start_date,
            end_date,
            delivery_city,
            delivery_branch,
        } = value;
        Self {
            first_name,
            last_name,
            phone,
            start_date,
            end_date,
            delivery_city,
            delivery_branch,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub days: i64,
    pub price_per_day: i64,
    pub total: i64,
}

impl From<Quote> for QuoteResponse {
    fn from(value: Quote) -> Self {
        let Quote {
            days,
            price_per_day,
            total,
        } = value;
        Self {
            days,
            price_per_day,
            total,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmationResponse {
    pub booking_id: BookingId,
    pub tool_id: ToolId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total: i64,
}

impl From<BookingConfirmation> for BookingConfirmationResponse {
    fn from(value: BookingConfirmation) -> Self {
        let BookingConfirmation {
            booking_id,
            tool_id,
            range,
            total,
        } = value;
        Self {
            booking_id,
            tool_id,
            start_date: range.start(),
            end_date: range.end(),
            total,
        }
    }
}
