//! Conversion between 24-hour times and the 12-hour parts shown in the time columns.

use chrono::{NaiveTime, Timelike as _};

/// AM or PM.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Meridiem {
    #[default]
    Am,
    Pm,
}

impl Meridiem {
    pub const ALL: [Self; 2] = [Self::Am, Self::Pm];
}

/// A time of day split the way the time columns show it.
///
/// `hour12` is always in `1..=12`: midnight is `(Am, 12)` and noon is `(Pm, 12)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct TimeParts {
    pub meridiem: Meridiem,
    pub hour12: u32,
    pub minute: u32,
}

impl TimeParts {
    pub fn from_time(time: NaiveTime) -> Self {
        to_twelve_hour(time.hour(), time.minute())
    }

    /// Seconds are always zero.
    pub fn to_time(self) -> NaiveTime {
        let (hour, minute) = to_twenty_four_hour(self);
        NaiveTime::from_hms_opt(hour, minute.min(59), 0).unwrap_or(NaiveTime::MIN)
    }
}

/// `(13, 30)` becomes `(Pm, 1, 30)`.
pub fn to_twelve_hour(hour24: u32, minute: u32) -> TimeParts {
    let meridiem = if hour24 < 12 { Meridiem::Am } else { Meridiem::Pm };
    let base = hour24 % 12;
    TimeParts {
        meridiem,
        hour12: if base == 0 { 12 } else { base },
        minute,
    }
}

/// Inverse of [`to_twelve_hour`]: returns `(hour24, minute)`.
pub fn to_twenty_four_hour(parts: TimeParts) -> (u32, u32) {
    let normalized = parts.hour12 % 12;
    let hour24 = match parts.meridiem {
        Meridiem::Am => normalized,
        Meridiem::Pm => normalized + 12,
    };
    (hour24, parts.minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for h in 0..24 {
            for m in 0..60 {
                let parts = to_twelve_hour(h, m);
                assert!((1..=12).contains(&parts.hour12), "hour12 out of range for {h}:{m}");
                assert_eq!(to_twenty_four_hour(parts), (h, m));
            }
        }
    }

    #[test]
    fn test_fixed_points() {
        let parts = |meridiem, hour12, minute| TimeParts {
            meridiem,
            hour12,
            minute,
        };
        assert_eq!(to_twelve_hour(0, 0), parts(Meridiem::Am, 12, 0));
        assert_eq!(to_twelve_hour(12, 0), parts(Meridiem::Pm, 12, 0));
        assert_eq!(to_twelve_hour(13, 30), parts(Meridiem::Pm, 1, 30));
        assert_eq!(to_twelve_hour(11, 59), parts(Meridiem::Am, 11, 59));
    }

    #[test]
    fn test_naive_time() {
        let time = NaiveTime::from_hms_opt(15, 30, 42).unwrap();
        let parts = TimeParts::from_time(time);
        assert_eq!(parts.meridiem, Meridiem::Pm);
        assert_eq!(parts.hour12, 3);
        assert_eq!(parts.to_time(), NaiveTime::from_hms_opt(15, 30, 0).unwrap());
    }
}
