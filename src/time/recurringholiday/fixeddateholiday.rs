use chrono::NaiveDate;

use super::recurringholiday::RecurringHoliday;

/// A holiday that falls on the same month and day every year.
///
/// `effective_from` gates rules introduced by statute partway through the
/// supported range, such as Christmas Eve becoming a Polish public holiday
/// in 2025. Years before the gate yield no date.
#[derive(Clone)]
pub struct FixedDateHoliday {
    name: &'static str,
    month: u32,
    day: u32,
    effective_from: Option<i32>,
}

impl FixedDateHoliday {
    pub fn new(name: &'static str, month: u32, day: u32) -> FixedDateHoliday {
        FixedDateHoliday {
            name,
            month,
            day,
            effective_from: None,
        }
    }

    pub fn effective_from(
        name: &'static str,
        month: u32,
        day: u32,
        first_year: i32,
    ) -> FixedDateHoliday {
        FixedDateHoliday {
            name,
            month,
            day,
            effective_from: Some(first_year),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn name(&self) -> &str {
        self.name
    }

    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        if self.effective_from.is_some_and(|from| year < from) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}
