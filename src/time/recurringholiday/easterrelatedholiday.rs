use chrono::{Duration, NaiveDate};

use super::recurringholiday::RecurringHoliday;

/// A movable feast observed a fixed number of days after Easter Sunday,
/// e.g. Corpus Christi at Easter + 60.
#[derive(Clone)]
pub struct EasterRelatedHoliday {
    name: &'static str,
    shift_days: i64,
}

impl EasterRelatedHoliday {
    pub fn new(name: &'static str, shift_days: i64) -> EasterRelatedHoliday {
        EasterRelatedHoliday { name, shift_days }
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }

    /// Gregorian Easter Sunday for `year`, via the anonymous Gregorian
    /// computus. The algorithm is defined for 1583..=4099.
    pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
        if !(1583..=4099).contains(&year) {
            return None;
        }

        let a = year % 19;
        let b = year / 100;
        let c = year % 100;
        let d = b / 4;
        let e = b % 4;
        let f = (b + 8) / 25;
        let g = (b - f + 1) / 3;
        let h = (19 * a + b - d - g + 15) % 30;
        let i = c / 4;
        let k = c % 4;
        let l = (32 + 2 * e + 2 * i - h - k) % 7;
        let m = (a + 11 * h + 22 * l) / 451;
        let month = (h + l - 7 * m + 114) / 31;
        let day = (h + l - 7 * m + 114) % 31 + 1;

        NaiveDate::from_ymd_opt(year, month as u32, day as u32)
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn name(&self) -> &str {
        self.name
    }

    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        Self::easter_sunday(year).map(|easter| easter + Duration::days(self.shift_days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn easter_sunday_matches_published_dates() {
        // Published Gregorian Easter dates for the supported range.
        let expected = [
            (2020, 4, 12),
            (2021, 4, 4),
            (2022, 4, 17),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
            (2026, 4, 5),
            (2027, 3, 28),
            (2028, 4, 16),
            (2029, 4, 1),
            (2030, 4, 21),
        ];
        for (year, month, day) in expected {
            assert_eq!(
                EasterRelatedHoliday::easter_sunday(year),
                Some(date(year, month, day)),
                "easter {year}"
            );
        }
    }

    #[test]
    fn easter_sunday_outside_computus_range() {
        assert_eq!(EasterRelatedHoliday::easter_sunday(1582), None);
        assert_eq!(EasterRelatedHoliday::easter_sunday(4100), None);
    }

    #[test]
    fn shift_is_applied_to_easter() {
        let corpus_christi = EasterRelatedHoliday::new("Boże Ciało", 60);
        assert_eq!(corpus_christi.get_holiday(2026), Some(date(2026, 6, 4)));

        let easter_monday = EasterRelatedHoliday::new("Poniedziałek Wielkanocny", 1);
        assert_eq!(easter_monday.get_holiday(2024), Some(date(2024, 4, 1)));

        let pentecost = EasterRelatedHoliday::new("Zielone Świątki", 49);
        assert_eq!(pentecost.get_holiday(2026), Some(date(2026, 5, 24)));
    }
}
