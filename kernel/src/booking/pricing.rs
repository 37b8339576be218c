use serde::Serialize;

use crate::model::date_range::DateRange;

/// Derived cost for a rental period at a tool's daily rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub days: i64,
    pub price_per_day: i64,
    pub total: i64,
}

impl Quote {
    pub fn for_range(range: DateRange, price_per_day: i64) -> Self {
        let days = range.days();
        Self {
            days,
            price_per_day,
            total: days * price_per_day,
        }
    }
}
