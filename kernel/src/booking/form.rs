use chrono::NaiveDate;
use garde::Validate;
use shared::error::FieldErrors;

use crate::model::{
    booking::{BookingForm, ValidatedBooking, DATE_FORMAT},
    date_range::DateRange,
};

/// Evaluate every field rule of a booking form and either hand back the
/// parsed booking or a mapping of field names to messages.
///
/// Rules never short-circuit: a form with a short name, a malformed phone
/// and an inverted date range reports all three at once. Keys are the
/// client-facing camelCase field names.
pub fn validate_form(form: &BookingForm) -> Result<ValidatedBooking, FieldErrors> {
    let mut errors = FieldErrors::new();
    if let Err(report) = form.validate(&()) {
        for (path, error) in report.iter() {
            errors.insert(client_field_name(path.to_string()), error.to_string());
        }
    }

    match validate_range(&form.start_date, &form.end_date) {
        Ok(range) if errors.is_empty() => Ok(ValidatedBooking {
            range,
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            phone: form.phone.clone(),
            delivery_city: form.delivery_city.clone(),
            delivery_branch: form.delivery_branch.clone(),
        }),
        Ok(_) => Err(errors),
        Err(range_errors) => {
            errors.merge(range_errors);
            Err(errors)
        }
    }
}

/// Date-only subset of the form rules, shared with the quote endpoint.
pub fn validate_range(start_date: &str, end_date: &str) -> Result<DateRange, FieldErrors> {
    let mut errors = FieldErrors::new();

    let start = NaiveDate::parse_from_str(start_date, DATE_FORMAT);
    if start.is_err() {
        errors.insert("startDate", "must be a calendar date (YYYY-MM-DD)");
    }
    let end = NaiveDate::parse_from_str(end_date, DATE_FORMAT);
    if end.is_err() {
        errors.insert("endDate", "must be a calendar date (YYYY-MM-DD)");
    }

    let (Ok(start), Ok(end)) = (start, end) else {
        return Err(errors);
    };

    match DateRange::new(start, end) {
        Ok(range) => Ok(range),
        Err(_) => {
            errors.insert("endDate", "must not be before startDate");
            Err(errors)
        }
    }
}

fn client_field_name(path: String) -> String {
    match path.as_str() {
        "first_name" => "firstName".into(),
        "last_name" => "lastName".into(),
        "start_date" => "startDate".into(),
        "end_date" => "endDate".into(),
        "delivery_city" => "deliveryCity".into(),
        "delivery_branch" => "deliveryBranch".into(),
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> BookingForm {
        BookingForm {
            first_name: "Olena".into(),
            last_name: "Kovalenko".into(),
            phone: "+380501234567".into(),
            start_date: "2024-06-10".into(),
            end_date: "2024-06-13".into(),
            delivery_city: "Kyiv".into(),
            delivery_branch: "Branch 12".into(),
        }
    }

    #[test]
    fn valid_form_yields_parsed_booking() {
        let booking = validate_form(&valid_form()).unwrap();
        assert_eq!(booking.range.days(), 3);
        assert_eq!(booking.delivery_branch, "Branch 12");
    }

    #[test]
    fn rules_are_evaluated_without_short_circuiting() {
        let form = BookingForm {
            first_name: "A".into(),
            phone: "123".into(),
            start_date: "2024-06-15".into(),
            end_date: "2024-06-10".into(),
            ..valid_form()
        };
        let errors = validate_form(&form).unwrap_err();
        assert!(errors.contains("firstName"));
        assert!(errors.contains("phone"));
        assert!(errors.contains("endDate"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn phone_accepts_optional_plus_and_10_to_15_digits() {
        for phone in ["0501234567", "+380501234567"] {
            let form = BookingForm {
                phone: phone.into(),
                ..valid_form()
            };
            assert!(validate_form(&form).is_ok(), "{phone} should be accepted");
        }
        for phone in ["", "123456789", "+38 050 123 45 67", "1234567890123456"] {
            let form = BookingForm {
                phone: phone.into(),
                ..valid_form()
            };
            let errors = validate_form(&form).unwrap_err();
            assert!(errors.contains("phone"), "{phone} should be rejected");
        }
    }

    #[test]
    fn unparsable_dates_are_field_errors() {
        let form = BookingForm {
            start_date: "June 10th".into(),
            end_date: "".into(),
            ..valid_form()
        };
        let errors = validate_form(&form).unwrap_err();
        assert!(errors.contains("startDate"));
        assert!(errors.contains("endDate"));
    }

    #[test]
    fn same_day_range_is_valid() {
        let range = validate_range("2024-06-10", "2024-06-10").unwrap();
        assert_eq!(range.days(), 1);
    }

    #[test]
    fn required_delivery_fields_are_reported_per_field() {
        let form = BookingForm {
            delivery_city: "".into(),
            delivery_branch: "".into(),
            ..valid_form()
        };
        let errors = validate_form(&form).unwrap_err();
        assert!(errors.contains("deliveryCity"));
        assert!(errors.contains("deliveryBranch"));
    }
}
