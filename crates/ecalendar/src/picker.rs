//! The picker state machine.
//!
//! A [`Picker`] never stores the selected value. The host passes the current
//! value into every call and gets told about new values through the returned
//! [`Outcome`] (or the callback given to [`Picker::dispatch`]).

use std::marker::PhantomData;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use emath::{Rect, Vec2, vec2};

use crate::calendar::{GRID_CELLS, month_cells};
use crate::format::{AnchorText, format_with};
use crate::placement::{ESTIMATED_PANEL_HEIGHT, Placement, compute_placement};
use crate::{Meridiem, PickerConfig, PickerValue, TimeParts, YearMonth, bounds};

/// Width of the date-only panel.
pub const DATE_PANEL_WIDTH: f32 = 256.0;

/// Width of the date-time panel with a minute column.
pub const DATE_TIME_PANEL_WIDTH: f32 = 520.0;

/// Width of the date-time panel without a minute column.
pub const DATE_HOUR_PANEL_WIDTH: f32 = 440.0;

/// Measured sizes closer than this to the previous measurement are ignored.
const MEASURE_TOLERANCE: f32 = 0.5;

/// The externally visible state of a picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PickerState {
    Closed,
    OpenMonth,
    OpenYear,
}

/// What the open panel is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ViewMode {
    #[default]
    Month,
    Year,
}

/// Everything a user can do to a picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerEvent {
    /// The anchor was clicked or focused.
    Activate,

    /// The month/year header was clicked.
    ToggleMode,

    PrevMonth,
    NextMonth,
    SelectDay(NaiveDate),
    SelectYear(i32),
    SelectMeridiem(Meridiem),

    /// `1..=12`.
    SelectHour(u32),
    SelectMinute(u32),

    /// A pointer was pressed somewhere. `inside` is true if it hit the anchor or the panel.
    PointerDown { inside: bool },

    Escape,

    /// Report "nothing selected" and close.
    Clear,
}

/// The result of [`Picker::handle`].
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome<V> {
    Unchanged,

    /// The host should store this as its new value.
    Changed(Option<V>),
}

impl<V> Outcome<V> {
    pub fn changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}

/// Navigation state that only exists while the panel is open.
///
/// Closing the panel drops it, so the next open starts again from the
/// host's value.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub mode: ViewMode,

    /// The month shown in the grid.
    pub view: YearMonth,

    /// First entry of the year list.
    pub year_start: i32,

    /// Time columns selection (date-time picker only).
    pub time: TimeParts,

    pub panel_size: Option<Vec2>,
    pub placement: Option<Placement>,
}

/// One day of the rendered month grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub selected: bool,
    pub disabled: bool,
    pub today: bool,
}

/// One entry of the rendered year list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearCell {
    pub year: i32,

    /// This is the year of the displayed month.
    pub current: bool,
    pub disabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeOption<T> {
    pub value: T,
    pub selected: bool,
}

/// The three time columns of the date-time panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeColumns {
    pub meridiems: Vec<TimeOption<Meridiem>>,
    pub hours: Vec<TimeOption<u32>>,

    /// Empty when the minute column is hidden.
    pub minutes: Vec<TimeOption<u32>>,
}

fn system_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Date or date-time picker logic, independent of any GUI toolkit.
///
/// ```
/// use chrono::NaiveDate;
/// use ecalendar::{DatePicker, Outcome, PickerConfig, PickerEvent};
///
/// let day = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// let mut picker = DatePicker::new(PickerConfig::default());
/// let _ = picker.handle(PickerEvent::Activate, None);
/// assert_eq!(
///     picker.handle(PickerEvent::SelectDay(day), None),
///     Outcome::Changed(Some(day))
/// );
/// assert!(!picker.is_open());
/// ```
#[derive(Clone, Debug)]
pub struct Picker<V> {
    /// What the host asked for, before repairs.
    requested: PickerConfig,
    config: PickerConfig,
    clock: fn() -> NaiveDateTime,
    session: Option<Session>,
    _value: PhantomData<fn() -> V>,
}

/// Picks a day.
pub type DatePicker = Picker<NaiveDate>;

/// Picks a day and a time of day.
pub type DateTimePicker = Picker<NaiveDateTime>;

impl<V: PickerValue> Picker<V> {
    pub fn new(config: PickerConfig) -> Self {
        Self {
            requested: config.clone(),
            config: config.sanitized(),
            clock: system_now,
            session: None,
            _value: PhantomData,
        }
    }

    /// Replace the source of "now", used for the initial month, today's marker
    /// and the year list.
    #[inline]
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn set_clock(&mut self, clock: fn() -> NaiveDateTime) {
        self.clock = clock;
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Apply a new configuration. Disabling an open picker closes it.
    ///
    /// Cheap when nothing changed, so hosts may call it every frame.
    pub fn reconfigure(&mut self, config: PickerConfig) {
        if config != self.requested {
            self.config = config.clone().sanitized();
            self.requested = config;
            let bounds = self.config.bounds;
            if let Some(session) = &mut self.session {
                session.year_start = bounds.year_window_start(session.view.year);
            }
        }
        if self.config.disabled && self.session.is_some() {
            log::debug!("Closing picker that was disabled while open");
            self.close();
        }
    }

    pub fn state(&self) -> PickerState {
        match self.session.as_ref().map(|s| s.mode) {
            None => PickerState::Closed,
            Some(ViewMode::Month) => PickerState::OpenMonth,
            Some(ViewMode::Year) => PickerState::OpenYear,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    /// Drop the session, discarding any navigation.
    pub fn close(&mut self) {
        self.session = None;
    }

    fn open_session(&self, value: Option<V>) -> Session {
        let view = YearMonth::from_date(value.map(|v| v.date()).unwrap_or_else(|| self.now().date()));
        let mut time = TimeParts::from_time(
            value
                .and_then(|v| v.time())
                .unwrap_or(self.config.default_time),
        );
        if !self.config.show_minute {
            time.minute = 0;
        }
        Session {
            mode: ViewMode::Month,
            view,
            year_start: self.config.bounds.year_window_start(view.year),
            time,
            panel_size: None,
            placement: None,
        }
    }

    fn committed_time(&self, time: TimeParts) -> NaiveTime {
        let mut time = time;
        if !self.config.show_minute {
            time.minute = 0;
        }
        time.to_time()
    }

    /// Feed one user interaction into the state machine.
    ///
    /// `value` is the host's current value. Interactions that are not allowed
    /// (disabled days and years, time columns on a date-only picker, events
    /// while closed) leave everything untouched.
    pub fn handle(&mut self, event: PickerEvent, value: Option<V>) -> Outcome<V> {
        match event {
            PickerEvent::Activate => {
                if self.config.disabled {
                    log::debug!("Ignoring activation of a disabled picker");
                } else if self.session.is_none() {
                    self.session = Some(self.open_session(value));
                }
                return Outcome::Unchanged;
            }
            PickerEvent::Escape | PickerEvent::PointerDown { inside: false } => {
                self.close();
                return Outcome::Unchanged;
            }
            PickerEvent::PointerDown { inside: true } => return Outcome::Unchanged,
            PickerEvent::Clear => {
                if self.config.disabled {
                    return Outcome::Unchanged;
                }
                self.close();
                return if value.is_some() {
                    Outcome::Changed(None)
                } else {
                    Outcome::Unchanged
                };
            }
            _ => {}
        }

        let now = self.now();
        let Some(session) = self.session.as_mut() else {
            log::debug!("Ignoring {event:?} while the picker is closed");
            return Outcome::Unchanged;
        };
        let bounds = self.config.bounds;

        match (event, session.mode) {
            (PickerEvent::ToggleMode, ViewMode::Month) => {
                session.mode = ViewMode::Year;
                session.year_start = bounds.year_window_start(session.view.year);
                Outcome::Unchanged
            }
            (PickerEvent::ToggleMode, ViewMode::Year) => {
                session.mode = ViewMode::Month;
                Outcome::Unchanged
            }
            (PickerEvent::PrevMonth, ViewMode::Month) => {
                session.view = session.view.shifted(-1);
                Outcome::Unchanged
            }
            (PickerEvent::NextMonth, ViewMode::Month) => {
                session.view = session.view.shifted(1);
                Outcome::Unchanged
            }
            (PickerEvent::SelectYear(year), ViewMode::Year) => {
                if bounds.is_year_disabled(year) {
                    log::debug!("Year {year} is out of bounds");
                    return Outcome::Unchanged;
                }
                session.view = YearMonth::new(year, session.view.month);
                session.mode = ViewMode::Month;
                Outcome::Unchanged
            }
            (PickerEvent::SelectDay(day), ViewMode::Month) => {
                if bounds.is_day_disabled(day) {
                    log::debug!("Day {day} is out of bounds");
                    return Outcome::Unchanged;
                }
                let time = session.time;
                if V::HAS_TIME {
                    Outcome::Changed(Some(V::compose(day, self.committed_time(time))))
                } else {
                    self.close();
                    Outcome::Changed(Some(V::compose(day, NaiveTime::MIN)))
                }
            }
            (
                PickerEvent::SelectMeridiem(_)
                | PickerEvent::SelectHour(_)
                | PickerEvent::SelectMinute(_),
                _,
            ) if V::HAS_TIME => {
                match event {
                    PickerEvent::SelectMeridiem(meridiem) => session.time.meridiem = meridiem,
                    PickerEvent::SelectHour(hour) if (1..=12).contains(&hour) => {
                        session.time.hour12 = hour;
                    }
                    PickerEvent::SelectMinute(minute) if self.config.is_minute_option(minute) => {
                        session.time.minute = minute;
                    }
                    _ => {
                        log::debug!("Ignoring invalid time selection {event:?}");
                        return Outcome::Unchanged;
                    }
                }
                let time = session.time;
                let date = value.map(|v| v.date()).unwrap_or_else(|| now.date());
                Outcome::Changed(Some(V::compose(date, self.committed_time(time))))
            }
            _ => {
                log::debug!("Ignoring {event:?} in {:?} mode", session.mode);
                Outcome::Unchanged
            }
        }
    }

    /// [`Self::handle`] with a change callback, for hosts that prefer one.
    ///
    /// Returns `true` if `on_change` was called.
    pub fn dispatch(
        &mut self,
        event: PickerEvent,
        value: Option<V>,
        on_change: impl FnOnce(Option<V>),
    ) -> bool {
        match self.handle(event, value) {
            Outcome::Changed(new_value) => {
                on_change(new_value);
                true
            }
            Outcome::Unchanged => false,
        }
    }

    // ------------------------------------------------------------------------
    // Rendering decisions

    /// What the anchor shows for `value`.
    pub fn anchor_text(&self, value: Option<V>) -> AnchorText {
        let Some(value) = value else {
            let placeholder = self.config.placeholder.clone().unwrap_or_else(|| {
                let locale = &self.config.locale;
                if V::HAS_TIME {
                    locale.date_time_placeholder
                } else {
                    locale.date_placeholder
                }
                .to_owned()
            });
            return AnchorText::Placeholder(placeholder);
        };
        let pattern = self.config.pattern.as_deref().unwrap_or(V::DEFAULT_PATTERN);
        let text = format_with(value.as_date_time(), pattern)
            .or_else(|| format_with(value.as_date_time(), V::DEFAULT_PATTERN))
            .unwrap_or_default();
        AnchorText::Value(text)
    }

    /// Header label of the open panel, e.g. "June 2025".
    pub fn month_label(&self) -> Option<String> {
        let session = self.session.as_ref()?;
        Some(self.config.locale.month_label(session.view))
    }

    /// The grid of the displayed month. Empty while closed.
    pub fn month_cells(&self, value: Option<V>) -> Vec<DayCell> {
        let Some(session) = &self.session else {
            return Vec::new();
        };
        let today = self.now().date();
        let selected = value.map(|v| v.date());
        let mut cells = Vec::with_capacity(GRID_CELLS);
        for cell in month_cells(session.view) {
            cells.push(DayCell {
                date: cell.date,
                in_current_month: cell.in_current_month,
                selected: selected == Some(cell.date),
                disabled: self.config.bounds.is_day_disabled(cell.date),
                today: cell.date == today,
            });
        }
        cells
    }

    /// The year list. Empty while closed.
    ///
    /// Runs from the window start to the maximum year (or ten years from now),
    /// at most [`bounds::MAX_YEAR_CELLS`] entries.
    pub fn year_cells(&self) -> Vec<YearCell> {
        let Some(session) = &self.session else {
            return Vec::new();
        };
        let bounds = self.config.bounds;
        let end = bounds
            .year_window_end(YearMonth::from_date(self.now().date()).year)
            .min(session.year_start + bounds::MAX_YEAR_CELLS - 1);
        (session.year_start..=end)
            .map(|year| YearCell {
                year,
                current: year == session.view.year,
                disabled: bounds.is_year_disabled(year),
            })
            .collect()
    }

    /// The time columns, if this is an open date-time picker.
    pub fn time_columns(&self) -> Option<TimeColumns> {
        if !V::HAS_TIME {
            return None;
        }
        let time = self.session.as_ref()?.time;
        Some(TimeColumns {
            meridiems: Meridiem::ALL
                .into_iter()
                .map(|value| TimeOption {
                    value,
                    selected: value == time.meridiem,
                })
                .collect(),
            hours: (1..=12)
                .map(|value| TimeOption {
                    value,
                    selected: value == time.hour12,
                })
                .collect(),
            minutes: self
                .config
                .minute_options()
                .into_iter()
                .map(|value| TimeOption {
                    value,
                    selected: value == time.minute,
                })
                .collect(),
        })
    }

    // ------------------------------------------------------------------------
    // Placement

    /// Panel size to assume before it has been measured.
    pub fn estimated_panel_size(&self) -> Vec2 {
        let width = match (V::HAS_TIME, self.config.show_minute) {
            (false, _) => DATE_PANEL_WIDTH,
            (true, true) => DATE_TIME_PANEL_WIDTH,
            (true, false) => DATE_HOUR_PANEL_WIDTH,
        };
        vec2(width, ESTIMATED_PANEL_HEIGHT)
    }

    /// Record the panel's real size after it was drawn.
    ///
    /// Returns `true` if it differs from what placement was based on, in which
    /// case the host should call [`Self::relayout`] again.
    pub fn panel_measured(&mut self, size: Vec2) -> bool {
        let Some(session) = &mut self.session else {
            return false;
        };
        let changed = session.panel_size.is_none_or(|old| {
            (old.x - size.x).abs() > MEASURE_TOLERANCE || (old.y - size.y).abs() > MEASURE_TOLERANCE
        });
        if changed {
            session.panel_size = Some(size);
        }
        changed
    }

    /// Recompute where the panel goes. Call on open, on every resize or
    /// scroll, and after [`Self::panel_measured`] reported a change.
    ///
    /// Returns `None` while closed.
    pub fn relayout(&mut self, anchor: Rect, viewport_size: Vec2, zoom_factor: f32) -> Option<Placement> {
        let estimated = self.estimated_panel_size();
        let options = self.config.placement;
        let session = self.session.as_mut()?;
        let panel_size = session.panel_size.unwrap_or(estimated);
        let placement = compute_placement(anchor, panel_size, viewport_size, zoom_factor, &options);
        session.placement = Some(placement);
        Some(placement)
    }
}
