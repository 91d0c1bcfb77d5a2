use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

/// A statutory holiday: a calendar date tagged with its canonical name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    date: NaiveDate,
    name: String,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Holiday {
        Holiday {
            date,
            name: name.into(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The complete set of statutory holidays for a single year.
///
/// Holidays are keyed by date, so a fixed and a movable holiday landing on
/// the same date collapse into one entry. Iteration is in date order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidaySet {
    year: i32,
    holidays: BTreeMap<NaiveDate, String>,
}

impl HolidaySet {
    pub fn new(year: i32, holidays: BTreeMap<NaiveDate, String>) -> HolidaySet {
        HolidaySet { year, holidays }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.holidays.contains_key(&d)
    }

    pub fn name_of(&self, d: NaiveDate) -> Option<&str> {
        self.holidays.get(&d).map(String::as_str)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.holidays.keys().copied()
    }

    /// Holidays in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = Holiday> + '_ {
        self.holidays
            .iter()
            .map(|(date, name)| Holiday::new(*date, name.clone()))
    }
}
