use chrono::NaiveDate;
use kernel::model::{
    booking::{BookingConfirmation, ValidatedBooking},
    date_range::DateRange,
    id::{BookingId, ToolId},
};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

/// Body of `POST /bookings/{toolId}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequestPayload {
    pub start_date: String,
    pub end_date: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub delivery_city: String,
    pub delivery_branch: String,
}

impl From<ValidatedBooking> for BookingRequestPayload {
    fn from(value: ValidatedBooking) -> Self {
        let ValidatedBooking {
            range,
            first_name,
            last_name,
            phone,
            delivery_city,
            delivery_branch,
        } = value;
        Self {
            start_date: range.start().to_string(),
            end_date: range.end().to_string(),
            first_name,
            last_name,
            phone,
            delivery_city,
            delivery_branch,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmationPayload {
    pub id: BookingId,
    pub tool_id: ToolId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total: i64,
}

impl TryFrom<BookingConfirmationPayload> for BookingConfirmation {
    type Error = AppError;

    fn try_from(value: BookingConfirmationPayload) -> Result<Self, Self::Error> {
        let BookingConfirmationPayload {
            id,
            tool_id,
            start_date,
            end_date,
            total,
        } = value;
        let range = DateRange::new(start_date, end_date).map_err(|_| {
            AppError::MalformedUpstreamPayload(format!(
                "booking confirmation {id} carries an inverted range {start_date}..{end_date}"
            ))
        })?;
        Ok(BookingConfirmation {
            booking_id: id,
            tool_id,
            range,
            total,
        })
    }
}

/// Structured rejection body the backend attaches to 4xx responses.
#[derive(Debug, Deserialize)]
pub struct BackendErrorBody {
    pub error: String,
    #[serde(default)]
    pub response: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_payload_uses_iso_dates_and_camel_case() {
        let booking = ValidatedBooking {
            range: DateRange::new(
                "2024-06-10".parse().unwrap(),
                "2024-06-13".parse().unwrap(),
            )
            .unwrap(),
            first_name: "Olena".into(),
            last_name: "Kovalenko".into(),
            phone: "+380501234567".into(),
            delivery_city: "Kyiv".into(),
            delivery_branch: "Branch 12".into(),
        };
        let json = serde_json::to_value(BookingRequestPayload::from(booking)).unwrap();
        assert_eq!(json["startDate"], "2024-06-10");
        assert_eq!(json["endDate"], "2024-06-13");
        assert_eq!(json["deliveryBranch"], "Branch 12");
    }

    #[test]
    fn error_body_parses_with_and_without_detail() {
        let with: BackendErrorBody =
            serde_json::from_str(r#"{"error": "range already booked", "response": {"code": 409}}"#)
                .unwrap();
        assert_eq!(with.error, "range already booked");
        assert!(with.response.is_some());

        let without: BackendErrorBody = serde_json::from_str(r#"{"error": "bad input"}"#).unwrap();
        assert!(without.response.is_none());
    }

    #[test]
    fn inverted_confirmation_range_is_a_decode_error() {
        let payload: BookingConfirmationPayload = serde_json::from_str(
            r#"{
                "id": "0190e5a1-7b3c-7b2a-9c5e-0d9be0a1c003",
                "toolId": "0190e5a1-7b3c-7b2a-9c5e-0d9be0a1c001",
                "startDate": "2024-06-13",
                "endDate": "2024-06-10",
                "total": 600
            }"#,
        )
        .unwrap();
        assert!(matches!(
            BookingConfirmation::try_from(payload),
            Err(AppError::MalformedUpstreamPayload(_))
        ));
    }
}
