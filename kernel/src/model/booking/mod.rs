use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::model::{
    date_range::DateRange,
    id::{BookingId, ToolId},
};

pub mod event;

/// Raw booking form as authored by the user. Dates stay strings until
/// validation parses them; a draft may hold a half-filled, invalid form.
///
/// The field rules below are the declarative half of the booking validator;
/// `booking::form::validate_form` evaluates them without short-circuiting and
/// maps the results onto client-facing field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingForm {
    #[garde(length(min = 2))]
    pub first_name: String,
    #[garde(length(min = 2))]
    pub last_name: String,
    #[garde(pattern(r"^\+?[0-9]{10,15}$"))]
    pub phone: String,
    #[garde(custom(calendar_date))]
    pub start_date: String,
    #[garde(custom(calendar_date))]
    pub end_date: String,
    #[garde(length(min = 1))]
    pub delivery_city: String,
    #[garde(length(min = 1))]
    pub delivery_branch: String,
}

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

fn calendar_date(value: &str, _ctx: &()) -> garde::Result {
    chrono::NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| garde::Error::new("must be a calendar date (YYYY-MM-DD)"))
}

/// A form that passed every field rule, with the parsed rental period.
#[derive(Debug, Clone)]
pub struct ValidatedBooking {
    pub range: DateRange,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub delivery_city: String,
    pub delivery_branch: String,
}

/// Accepted booking as confirmed by the backend.
#[derive(Debug)]
pub struct BookingConfirmation {
    pub booking_id: BookingId,
    pub tool_id: ToolId,
    pub range: DateRange,
    pub total: i64,
}

/// Unsubmitted form state persisted between visits; cleared on successful
/// submission or explicit reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub tool_id: ToolId,
    pub form: BookingForm,
}
