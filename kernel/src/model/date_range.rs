use chrono::NaiveDate;
use serde::Serialize;
use shared::error::{AppError, AppResult};

/// A whole-day rental period, inclusive on both ends.
///
/// Calendar dates rather than instants: day arithmetic cannot drift across
/// daylight-saving transitions. Immutable once constructed; `start <= end`
/// always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Rejects inverted input rather than swapping the boundaries.
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::UnprocessableEntity(format!(
                "start date {start} is after end date {end}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive on both boundaries: ranges that share even a single day
    /// conflict, since a day-granularity range occupies whole rented days.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Number of billable days. A same-day range still occupies one day.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days().max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(date(start), date(end)).unwrap()
    }

    #[test]
    fn inverted_range_is_rejected_not_swapped() {
        let res = DateRange::new(date("2024-06-15"), date("2024-06-10"));
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
    }

    #[test]
    fn same_day_range_is_a_valid_one_day_booking() {
        let r = range("2024-06-10", "2024-06-10");
        assert_eq!(r.days(), 1);
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = range("2024-06-10", "2024-06-12");
        let b = range("2024-06-11", "2024-06-15");
        let c = range("2024-06-20", "2024-06-25");
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert_eq!(a.overlaps(&c), c.overlaps(&a));
    }

    #[test]
    fn every_range_overlaps_itself() {
        let a = range("2024-06-10", "2024-06-12");
        assert!(a.overlaps(&a));
    }

    #[test]
    fn shared_boundary_day_counts_as_overlap() {
        let a = range("2024-06-10", "2024-06-12");
        let b = range("2024-06-12", "2024-06-15");
        assert!(a.overlaps(&b));
    }

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        let a = range("2024-06-10", "2024-06-11");
        let b = range("2024-06-12", "2024-06-15");
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn day_count_is_calendar_difference_with_a_floor_of_one() {
        assert_eq!(range("2024-06-10", "2024-06-13").days(), 3);
        assert_eq!(range("2024-06-10", "2024-06-10").days(), 1);
        // spans the late-March DST transition in most of Europe
        assert_eq!(range("2024-03-30", "2024-04-02").days(), 3);
    }
}
