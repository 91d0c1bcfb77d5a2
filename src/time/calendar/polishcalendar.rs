use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

use super::calendarerror::{CalendarError, Result};
use super::holidaycalendar::HolidayCalendar;
use super::holidayset::HolidaySet;

/// First year with holiday data.
pub const MIN_YEAR: i32 = 2020;
/// Last year with holiday data.
pub const MAX_YEAR: i32 = 2030;

/// (month, day, canonical name, first year in force).
///
/// Statutory rule changes are rows in this table, not conditionals:
/// Christmas Eve became a public holiday from 2025.
const FIXED_HOLIDAYS: [(u32, u32, &str, Option<i32>); 10] = [
    (1, 1, "Nowy Rok", None),
    (1, 6, "Trzech Króli", None),
    (5, 1, "Święto Pracy", None),
    (5, 3, "Święto Konstytucji 3 Maja", None),
    (8, 15, "Wniebowzięcie NMP", None),
    (11, 1, "Wszystkich Świętych", None),
    (11, 11, "Święto Niepodległości", None),
    (12, 24, "Wigilia Bożego Narodzenia", Some(2025)),
    (12, 25, "Boże Narodzenie (pierwszy dzień)", None),
    (12, 26, "Boże Narodzenie (drugi dzień)", None),
];

/// (days after Easter Sunday, canonical name).
const EASTER_RELATED_HOLIDAYS: [(i64, &str); 4] = [
    (0, "Wielkanoc"),
    (1, "Poniedziałek Wielkanocny"),
    (49, "Zielone Świątki"),
    (60, "Boże Ciało"),
];

/// Statutory holiday calendar for Poland, years 2020-2030.
///
/// Weekends are Saturday and Sunday. Holiday sets are computed on demand
/// from the rule tables above; 13 holidays per year through 2024, 14 from
/// 2025 onward.
pub struct PolishCalendar {
    rules: Vec<Box<dyn RecurringHoliday>>,
}

impl PolishCalendar {
    pub fn new() -> PolishCalendar {
        let mut rules: Vec<Box<dyn RecurringHoliday>> =
            Vec::with_capacity(FIXED_HOLIDAYS.len() + EASTER_RELATED_HOLIDAYS.len());
        for (month, day, name, effective_from) in FIXED_HOLIDAYS {
            rules.push(match effective_from {
                Some(first_year) => {
                    Box::new(FixedDateHoliday::effective_from(name, month, day, first_year))
                }
                None => Box::new(FixedDateHoliday::new(name, month, day)),
            });
        }
        for (shift_days, name) in EASTER_RELATED_HOLIDAYS {
            rules.push(Box::new(EasterRelatedHoliday::new(name, shift_days)));
        }
        PolishCalendar { rules }
    }
}

impl Default for PolishCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl HolidayCalendar for PolishCalendar {
    fn get_holiday_set(&self, year: i32) -> Result<HolidaySet> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::UnsupportedYear {
                year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }

        let mut holidays: BTreeMap<NaiveDate, String> = BTreeMap::new();
        for rule in &self.rules {
            if let Some(date) = rule.get_holiday(year) {
                // Keyed by date: coinciding rules collapse, first name wins.
                holidays.entry(date).or_insert_with(|| rule.name().to_owned());
            }
        }
        Ok(HolidaySet::new(year, holidays))
    }

    fn is_weekend(&self, d: NaiveDate) -> bool {
        matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn thirteen_holidays_before_2025_fourteen_after() {
        let cal = PolishCalendar::new();
        for year in MIN_YEAR..=MAX_YEAR {
            let set = cal.get_holiday_set(year).unwrap();
            let expected = if year < 2025 { 13 } else { 14 };
            assert_eq!(set.len(), expected, "year {year}");
            assert_eq!(set.year(), year);
        }
    }

    #[test]
    fn wigilia_only_from_2025() {
        let cal = PolishCalendar::new();
        assert!(!cal.get_holiday_set(2024).unwrap().contains(date(2024, 12, 24)));
        let set = cal.get_holiday_set(2025).unwrap();
        assert_eq!(
            set.name_of(date(2025, 12, 24)),
            Some("Wigilia Bożego Narodzenia")
        );
    }

    #[test]
    fn holidays_2026_exact_dates() {
        let cal = PolishCalendar::new();
        let set = cal.get_holiday_set(2026).unwrap();
        let expected = [
            (1, 1, "Nowy Rok"),
            (1, 6, "Trzech Króli"),
            (4, 5, "Wielkanoc"),
            (4, 6, "Poniedziałek Wielkanocny"),
            (5, 1, "Święto Pracy"),
            (5, 3, "Święto Konstytucji 3 Maja"),
            (5, 24, "Zielone Świątki"),
            (6, 4, "Boże Ciało"),
            (8, 15, "Wniebowzięcie NMP"),
            (11, 1, "Wszystkich Świętych"),
            (11, 11, "Święto Niepodległości"),
            (12, 24, "Wigilia Bożego Narodzenia"),
            (12, 25, "Boże Narodzenie (pierwszy dzień)"),
            (12, 26, "Boże Narodzenie (drugi dzień)"),
        ];
        assert_eq!(set.len(), expected.len());
        for (month, day, name) in expected {
            assert_eq!(set.name_of(date(2026, month, day)), Some(name), "{name}");
        }
    }

    #[test]
    fn iteration_is_date_ordered() {
        let cal = PolishCalendar::new();
        let set = cal.get_holiday_set(2023).unwrap();
        let dates: Vec<NaiveDate> = set.dates().collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(dates.first(), Some(&date(2023, 1, 1)));
        assert_eq!(dates.last(), Some(&date(2023, 12, 26)));
    }

    #[test]
    fn rejects_years_outside_range() {
        let cal = PolishCalendar::new();
        assert_eq!(
            cal.get_holiday_set(2019),
            Err(CalendarError::UnsupportedYear {
                year: 2019,
                min: MIN_YEAR,
                max: MAX_YEAR,
            })
        );
        assert_eq!(
            cal.get_holiday_set(2031),
            Err(CalendarError::UnsupportedYear {
                year: 2031,
                min: MIN_YEAR,
                max: MAX_YEAR,
            })
        );
    }

    #[test]
    fn weekend_rule() {
        let cal = PolishCalendar::new();
        assert!(cal.is_weekend(date(2026, 1, 31))); // Saturday
        assert!(cal.is_weekend(date(2026, 2, 1))); // Sunday
        assert!(!cal.is_weekend(date(2026, 2, 2))); // Monday
    }
}
