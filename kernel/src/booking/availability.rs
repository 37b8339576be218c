use crate::model::date_range::DateRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Clear,
    /// The first booked interval, in stored order, that the candidate hits.
    Conflict(DateRange),
}

/// Advisory screen of a candidate range against a tool's booked intervals.
///
/// Pure query: absence of a conflict is success, and nothing here is
/// authoritative. The backend re-checks at submission time, so a submission
/// can still lose the race to another renter.
pub fn check_availability(candidate: DateRange, existing: &[DateRange]) -> Availability {
    match existing.iter().find(|booked| candidate.overlaps(booked)) {
        Some(conflict) => Availability::Conflict(*conflict),
        None => Availability::Clear,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(start.parse().unwrap(), end.parse().unwrap()).unwrap()
    }

    #[test]
    fn empty_catalog_is_always_clear() {
        let candidate = range("2024-06-10", "2024-06-12");
        assert_eq!(check_availability(candidate, &[]), Availability::Clear);
    }

    #[test]
    fn shared_boundary_day_is_a_conflict() {
        let candidate = range("2024-06-10", "2024-06-12");
        let booked = range("2024-06-12", "2024-06-15");
        assert_eq!(
            check_availability(candidate, &[booked]),
            Availability::Conflict(booked)
        );
    }

    #[test]
    fn adjacent_non_touching_range_is_clear() {
        let candidate = range("2024-06-10", "2024-06-11");
        let booked = range("2024-06-12", "2024-06-15");
        assert_eq!(check_availability(candidate, &[booked]), Availability::Clear);
    }

    #[test]
    fn first_conflict_in_stored_order_wins() {
        let candidate = range("2024-06-10", "2024-06-20");
        let first = range("2024-06-14", "2024-06-16");
        let second = range("2024-06-18", "2024-06-19");
        assert_eq!(
            check_availability(candidate, &[first, second]),
            Availability::Conflict(first)
        );
    }
}
