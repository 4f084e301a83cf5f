use chrono::{NaiveDate, NaiveTime};

use crate::format::is_valid_pattern;
use crate::{DateBounds, Locale, PlacementOptions};

/// Used when the configured minute step is unusable.
pub const DEFAULT_MINUTE_STEP: u32 = 10;

/// Time of day the time columns start at when nothing is selected yet.
pub const DEFAULT_TIME: NaiveTime = match NaiveTime::from_hms_opt(9, 0, 0) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

/// A problem with a [`PickerConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("minimum date {min} is after maximum date {max}")]
    InvertedBounds { min: NaiveDate, max: NaiveDate },

    #[error("minute step must be between 1 and 60, got {0}")]
    InvalidMinuteStep(u32),

    #[error("display pattern {0:?} contains an unknown specifier")]
    InvalidPattern(String),
}

/// Everything the host can tune about a picker.
///
/// The time related settings only matter for the date-time picker.
#[derive(Clone, Debug, PartialEq)]
pub struct PickerConfig {
    pub disabled: bool,
    pub bounds: DateBounds,

    /// strftime pattern for the anchor text. `None` picks the variant default.
    pub pattern: Option<String>,

    /// Shown while nothing is selected. `None` uses the locale's placeholder.
    pub placeholder: Option<String>,

    pub show_minute: bool,
    pub minute_step: u32,
    pub default_time: NaiveTime,

    pub locale: Locale,
    pub placement: PlacementOptions,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            bounds: DateBounds::default(),
            pattern: None,
            placeholder: None,
            show_minute: true,
            minute_step: DEFAULT_MINUTE_STEP,
            default_time: DEFAULT_TIME,
            locale: Locale::default(),
            placement: PlacementOptions::default(),
        }
    }
}

impl PickerConfig {
    #[inline]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Days before `min` cannot be picked.
    #[inline]
    pub fn min_date(mut self, min: impl Into<Option<NaiveDate>>) -> Self {
        self.bounds.min = min.into();
        self
    }

    /// Days after `max` cannot be picked.
    #[inline]
    pub fn max_date(mut self, max: impl Into<Option<NaiveDate>>) -> Self {
        self.bounds.max = max.into();
        self
    }

    /// See [`chrono::format::strftime`] for valid patterns.
    #[inline]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    #[inline]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Show the minute column. When hidden, picked times are on the hour. (Default: true)
    #[inline]
    pub fn show_minute(mut self, show_minute: bool) -> Self {
        self.show_minute = show_minute;
        self
    }

    /// Distance between the offered minutes. (Default: 10)
    #[inline]
    pub fn minute_step(mut self, minute_step: u32) -> Self {
        self.minute_step = minute_step;
        self
    }

    #[inline]
    pub fn default_time(mut self, default_time: NaiveTime) -> Self {
        self.default_time = default_time;
        self
    }

    #[inline]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[inline]
    pub fn placement(mut self, placement: PlacementOptions) -> Self {
        self.placement = placement;
        self
    }

    /// Report the first problem with this configuration.
    ///
    /// # Errors
    /// See [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(min), Some(max)) = (self.bounds.min, self.bounds.max)
            && min > max
        {
            return Err(ConfigError::InvertedBounds { min, max });
        }
        if !(1..=60).contains(&self.minute_step) {
            return Err(ConfigError::InvalidMinuteStep(self.minute_step));
        }
        if let Some(pattern) = &self.pattern
            && !is_valid_pattern(pattern)
        {
            return Err(ConfigError::InvalidPattern(pattern.clone()));
        }
        Ok(())
    }

    /// Repair every problem [`Self::validate`] would report, logging a warning for each.
    ///
    /// An inverted range keeps the minimum and drops the maximum.
    pub fn sanitized(mut self) -> Self {
        while let Err(err) = self.validate() {
            log::warn!("Invalid picker configuration: {err}");
            match err {
                ConfigError::InvertedBounds { .. } => self.bounds.max = None,
                ConfigError::InvalidMinuteStep(_) => self.minute_step = DEFAULT_MINUTE_STEP,
                ConfigError::InvalidPattern(_) => self.pattern = None,
            }
        }
        self
    }

    /// The minutes offered by the minute column, empty if it is hidden.
    pub fn minute_options(&self) -> Vec<u32> {
        if !self.show_minute || self.minute_step == 0 {
            return Vec::new();
        }
        (0..60 / self.minute_step).map(|i| i * self.minute_step).collect()
    }

    pub fn is_minute_option(&self, minute: u32) -> bool {
        self.show_minute
            && self.minute_step != 0
            && minute % self.minute_step == 0
            && minute < (60 / self.minute_step) * self.minute_step
    }
}
