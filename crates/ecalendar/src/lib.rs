//! Date and date-time picker logic that does not depend on any GUI toolkit.
//!
//! The pieces, bottom up:
//!
//! * [`month_cells`]: the 6×7 grid for a month, Sunday first.
//! * [`to_twelve_hour`] / [`to_twenty_four_hour`]: the AM/PM codec behind the time columns.
//! * [`compute_placement`]: where a floating panel goes relative to its anchor.
//! * [`Picker`]: the state machine tying them together. Feed it [`PickerEvent`]s
//!   and store whatever it reports back.
//!
//! A picker never owns the selected value. The host keeps it and passes it in:
//!
//! ```
//! use chrono::NaiveDate;
//! use ecalendar::{DatePicker, Outcome, PickerConfig, PickerEvent};
//!
//! let mut value = None;
//! let mut picker = DatePicker::new(PickerConfig::default());
//!
//! let _ = picker.handle(PickerEvent::Activate, value);
//! let day = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
//! if let Outcome::Changed(new_value) = picker.handle(PickerEvent::SelectDay(day), value) {
//!     value = new_value;
//! }
//! assert_eq!(value, Some(day));
//! ```
//!
//! See `egui_datetime` for widgets built on top of this.
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![allow(clippy::float_cmp)]
#![forbid(unsafe_code)]

pub mod bounds;
mod calendar;
mod config;
pub mod format;
mod locale;
mod picker;
pub mod placement;
mod time_parts;
mod value;

pub use crate::{
    bounds::DateBounds,
    calendar::{CalendarCell, GRID_CELLS, YearMonth, month_cells},
    config::{ConfigError, DEFAULT_MINUTE_STEP, DEFAULT_TIME, PickerConfig},
    format::{AnchorText, FORM_VALUE_FORMAT, format_form_value, parse_form_value},
    locale::Locale,
    picker::{
        DATE_HOUR_PANEL_WIDTH, DATE_PANEL_WIDTH, DATE_TIME_PANEL_WIDTH, DatePicker,
        DateTimePicker, DayCell, Outcome, Picker, PickerEvent, PickerState, Session, TimeColumns,
        TimeOption, ViewMode, YearCell,
    },
    placement::{Placement, PlacementOptions, Side, compute_placement},
    time_parts::{Meridiem, TimeParts, to_twelve_hour, to_twenty_four_hour},
    value::PickerValue,
};
