use chrono::{Datelike, NaiveDate};

/// A holiday rule that recurs every year it is in force.
///
/// Each rule yields at most one date per year; Polish statutory holidays
/// are never moved to a substitute weekday.
pub trait RecurringHoliday {
    /// Canonical display name, e.g. "Nowy Rok".
    fn name(&self) -> &str;

    /// The date observed in `year`, or `None` when the rule is not in
    /// force for that year.
    fn get_holiday(&self, year: i32) -> Option<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday(d.year()).is_some_and(|h| h == *d)
    }
}
