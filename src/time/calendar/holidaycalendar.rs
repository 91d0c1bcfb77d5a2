use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Days, NaiveDate};

use super::calendarerror::{CalendarError, Result};
use super::holidayset::HolidaySet;

const ONE_DAY: Days = Days::new(1);

/// Business-day arithmetic over a statutory holiday calendar.
///
/// A business day is a weekday that is not a statutory holiday of its
/// year. Implementors provide the holiday data and the weekend rule; the
/// counting and shifting algorithms are shared.
pub trait HolidayCalendar {
    /// All statutory holidays of `year`.
    fn get_holiday_set(&self, year: i32) -> Result<HolidaySet>;

    fn is_weekend(&self, d: NaiveDate) -> bool;

    fn is_holiday(&self, d: NaiveDate) -> Result<bool> {
        Ok(self.get_holiday_set(d.year())?.contains(d))
    }

    fn is_business_day(&self, d: NaiveDate) -> Result<bool> {
        Ok(!self.is_weekend(d) && !self.is_holiday(d)?)
    }

    /// Number of business days in the inclusive range `[start, end]`.
    ///
    /// Fails with `InvalidRange` when `end < start`, and with
    /// `UnsupportedYear` when any year touched by the range has no
    /// holiday data. Holiday sets are resolved once per year up front.
    fn count_business_days(&self, start: NaiveDate, end: NaiveDate) -> Result<u32> {
        if end < start {
            return Err(CalendarError::InvalidRange { start, end });
        }

        let mut holidays: HashSet<NaiveDate> = HashSet::new();
        for year in start.year()..=end.year() {
            holidays.extend(self.get_holiday_set(year)?.dates());
        }

        let mut count = 0;
        let mut current = start;
        while current <= end {
            if !self.is_weekend(current) && !holidays.contains(&current) {
                count += 1;
            }
            current = current + ONE_DAY;
        }
        Ok(count)
    }

    /// The date reached by moving `n` business days from `horizon`.
    ///
    /// Positive `n` moves forward, negative backward; `n == 0` returns
    /// `horizon` unchanged even when it is not itself a business day.
    /// The starting date is never counted as one of the `n` steps.
    /// Fails with `UnsupportedYear` when the walk needs holiday data
    /// for a year outside the supported range.
    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> Result<NaiveDate> {
        if n == 0 {
            return Ok(horizon);
        }

        let step_one_day = if n > 0 {
            |d: NaiveDate| d + ONE_DAY
        } else {
            |d: NaiveDate| d - ONE_DAY
        };

        let mut sets: HashMap<i32, HolidaySet> = HashMap::new();
        let mut remaining = n.unsigned_abs();
        let mut current = horizon;
        while remaining > 0 {
            current = step_one_day(current);
            let year = current.year();
            if !sets.contains_key(&year) {
                sets.insert(year, self.get_holiday_set(year)?);
            }
            if !self.is_weekend(current) && !sets[&year].contains(current) {
                remaining -= 1;
            }
        }
        Ok(current)
    }

    fn next_business_day(&self, d: NaiveDate) -> Result<NaiveDate> {
        self.shift_n_business_day(d, 1)
    }

    fn previous_business_day(&self, d: NaiveDate) -> Result<NaiveDate> {
        self.shift_n_business_day(d, -1)
    }
}
