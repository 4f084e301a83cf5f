use chrono::{Datelike as _, NaiveDate};

/// How many years before the displayed one the year list starts when there is no minimum.
pub const YEARS_BEFORE: i32 = 20;

/// How many years after the current one the year list ends when there is no maximum.
pub const YEARS_AFTER: i32 = 10;

/// The year list never shows more than this many entries.
pub const MAX_YEAR_CELLS: i32 = 80;

/// Optional floor and ceiling for selectable days.
///
/// Only the date part matters: a minimum of `2025-06-10 18:00` still allows
/// picking June 10th.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DateBounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DateBounds {
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }

    /// Is the minimum after the maximum?
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }

    pub fn is_day_disabled(&self, day: NaiveDate) -> bool {
        self.min.is_some_and(|min| day < min) || self.max.is_some_and(|max| day > max)
    }

    pub fn is_year_disabled(&self, year: i32) -> bool {
        self.min.is_some_and(|min| year < min.year()) || self.max.is_some_and(|max| year > max.year())
    }

    /// First entry of the year list while `displayed_year` is shown.
    pub fn year_window_start(&self, displayed_year: i32) -> i32 {
        self.min
            .map(|min| min.year())
            .unwrap_or(displayed_year - YEARS_BEFORE)
    }

    /// Last entry of the year list, given the current year.
    pub fn year_window_end(&self, current_year: i32) -> i32 {
        self.max
            .map(|max| max.year())
            .unwrap_or(current_year + YEARS_AFTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_bounds_are_inclusive() {
        let bounds = DateBounds::new(Some(date(2025, 6, 10)), Some(date(2025, 6, 20)));
        assert!(bounds.is_day_disabled(date(2025, 6, 9)));
        assert!(!bounds.is_day_disabled(date(2025, 6, 10)));
        assert!(!bounds.is_day_disabled(date(2025, 6, 20)));
        assert!(bounds.is_day_disabled(date(2025, 6, 21)));
        assert!(!DateBounds::default().is_day_disabled(date(1, 1, 1)));
    }

    #[test]
    fn test_year_bounds() {
        let bounds = DateBounds::new(Some(date(2025, 6, 10)), None);
        assert!(bounds.is_year_disabled(2024));
        assert!(!bounds.is_year_disabled(2025));
        assert!(!bounds.is_year_disabled(2090));
        assert_eq!(bounds.year_window_start(2030), 2025);
        assert_eq!(DateBounds::default().year_window_start(2030), 2010);
        assert_eq!(DateBounds::default().year_window_end(2025), 2035);
    }

    #[test]
    fn test_inverted() {
        assert!(DateBounds::new(Some(date(2025, 2, 1)), Some(date(2025, 1, 1))).is_inverted());
        assert!(!DateBounds::new(Some(date(2025, 1, 1)), None).is_inverted());
    }
}
