use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A value a picker can report: [`NaiveDate`] for the date-only picker,
/// [`NaiveDateTime`] for the date-time picker.
pub trait PickerValue: Copy + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// Does this picker show the time columns?
    const HAS_TIME: bool;

    /// Display pattern used when none is configured.
    const DEFAULT_PATTERN: &'static str;

    fn date(&self) -> NaiveDate;

    fn time(&self) -> Option<NaiveTime>;

    /// Build a value from a picked day and time. Date-only values drop the time.
    fn compose(date: NaiveDate, time: NaiveTime) -> Self;

    fn as_date_time(&self) -> NaiveDateTime {
        self.date().and_time(self.time().unwrap_or(NaiveTime::MIN))
    }
}

impl PickerValue for NaiveDate {
    const HAS_TIME: bool = false;
    const DEFAULT_PATTERN: &'static str = "%Y. %m. %d";

    fn date(&self) -> NaiveDate {
        *self
    }

    fn time(&self) -> Option<NaiveTime> {
        None
    }

    fn compose(date: NaiveDate, _time: NaiveTime) -> Self {
        date
    }
}

impl PickerValue for NaiveDateTime {
    const HAS_TIME: bool = true;
    const DEFAULT_PATTERN: &'static str = "%Y. %m. %d %H:%M";

    fn date(&self) -> NaiveDate {
        NaiveDateTime::date(self)
    }

    fn time(&self) -> Option<NaiveTime> {
        Some(NaiveDateTime::time(self))
    }

    fn compose(date: NaiveDate, time: NaiveTime) -> Self {
        date.and_time(time)
    }
}
