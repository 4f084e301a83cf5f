use chrono::{Datelike as _, Days, NaiveDate};

/// Number of cells in a month grid: six weeks of seven days.
pub const GRID_CELLS: usize = 42;

/// A calendar month, e.g. June 2025.
///
/// `month` is one-based (January is `1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Months outside `1..=12` roll over into the neighbouring years,
    /// so `YearMonth::new(2025, 13)` is January 2026.
    pub fn new(year: i32, month: u32) -> Self {
        Self::from_month_index(Self { year, month }.month_index())
    }

    /// Months since January of year 0.
    fn month_index(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    /// Years beyond the range of `i32` saturate.
    fn from_month_index(index: i64) -> Self {
        let year = index
            .div_euclid(12)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX));
        Self {
            year: year as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month `delta` months away from this one.
    pub fn shifted(self, delta: i32) -> Self {
        Self::from_month_index(self.month_index() + i64::from(delta))
    }

    /// The 1st of the month.
    ///
    /// Falls back to [`NaiveDate::MIN`] for years chrono cannot represent.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(self) -> u32 {
        let first = self.first_day();
        [31, 30, 29]
            .into_iter()
            .find(|&day| first.with_day(day).is_some())
            .unwrap_or(28)
    }

    /// Does `date` fall inside this month?
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// One cell of the month grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CalendarCell {
    pub date: NaiveDate,

    /// `false` for the leading and trailing days borrowed from the
    /// neighbouring months.
    pub in_current_month: bool,
}

/// The 42 days shown for `month`, starting on the Sunday on or before the 1st.
///
/// The grid always spans six weeks, so short months get trailing days from the
/// following month.
pub fn month_cells(month: YearMonth) -> [CalendarCell; GRID_CELLS] {
    let first = month.first_day();
    let offset = u64::from(first.weekday().num_days_from_sunday());
    let start = first.checked_sub_days(Days::new(offset)).unwrap_or(first);

    let mut days = start.iter_days();
    std::array::from_fn(|_| {
        let date = days.next().unwrap_or(start);
        CalendarCell {
            date,
            in_current_month: month.contains(date),
        }
    })
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_year_month_rollover() {
        assert_eq!(YearMonth::new(2025, 13), YearMonth::new(2026, 1));
        assert_eq!(YearMonth::new(2025, 1).shifted(-1), YearMonth::new(2024, 12));
        assert_eq!(YearMonth::new(2025, 6).shifted(-18), YearMonth::new(2023, 12));
        assert_eq!(YearMonth::new(2025, 12).shifted(1).month, 1);
    }

    #[test]
    fn test_year_month_extremes() {
        let far = YearMonth::new(2025, u32::MAX);
        assert!((1..=12).contains(&far.month), "{far:?}");
        assert!(far.year > 2025, "{far:?}");

        let early = YearMonth::new(2025, 6).shifted(i32::MIN);
        assert!((1..=12).contains(&early.month), "{early:?}");
        assert!(early.year < 2025, "{early:?}");

        assert_eq!(YearMonth::new(i32::MAX, 12).shifted(1).year, i32::MAX);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(YearMonth::new(2024, 2).days_in_month(), 29);
        assert_eq!(YearMonth::new(2025, 2).days_in_month(), 28);
        assert_eq!(YearMonth::new(1900, 2).days_in_month(), 28);
        assert_eq!(YearMonth::new(2000, 2).days_in_month(), 29);
        assert_eq!(YearMonth::new(2025, 4).days_in_month(), 30);
        assert_eq!(YearMonth::new(2025, 12).days_in_month(), 31);
    }

    #[test]
    fn test_grid_shape_for_every_month() {
        for year in [1999, 2000, 2024, 2025, 2026] {
            for m in 1..=12 {
                let month = YearMonth::new(year, m);
                let cells = month_cells(month);

                assert_eq!(cells[0].date.weekday(), Weekday::Sun, "{month:?}");
                assert_eq!(cells[GRID_CELLS - 1].date.weekday(), Weekday::Sat, "{month:?}");

                for pair in cells.windows(2) {
                    assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date), "gap in {month:?}");
                }

                let in_month = cells.iter().filter(|c| c.in_current_month).count();
                assert_eq!(in_month as u32, month.days_in_month(), "{month:?}");
            }
        }
    }

    #[test]
    fn test_june_2025() {
        // June 1st 2025 is a Sunday, so nothing is borrowed from May.
        let cells = month_cells(YearMonth::new(2025, 6));
        assert_eq!(cells[0].date, date(2025, 6, 1));
        assert!(cells[0].in_current_month);
        assert_eq!(cells[30].date, date(2025, 7, 1));
        assert!(!cells[30].in_current_month);
        assert_eq!(cells[41].date, date(2025, 7, 12));
    }

    #[test]
    fn test_leading_days() {
        // March 1st 2025 is a Saturday: six days come from February.
        let cells = month_cells(YearMonth::new(2025, 3));
        assert_eq!(cells[0].date, date(2025, 2, 23));
        assert!(cells[..6].iter().all(|c| !c.in_current_month));
        assert_eq!(cells[6].date, date(2025, 3, 1));
    }
}
