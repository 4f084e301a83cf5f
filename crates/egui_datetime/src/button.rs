use std::hash::Hash;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use ecalendar::{Locale, Outcome, Picker, PickerConfig, PickerEvent, PickerValue, PlacementOptions};
use egui::{Area, Button, Frame, Id, InnerResponse, Key, Order, Response, RichText, Ui, Widget, vec2};

use crate::panel::PickerPanel;

/// Shows the picked value (or a placeholder) and opens a calendar panel when clicked.
///
/// The widget never keeps its own copy of the value: it reads `value` every
/// frame and writes to it only when the user picks something.
/// [`Response::changed`] tells you when that happened.
pub struct PickerButton<'a, V> {
    value: &'a mut Option<V>,
    id_salt: Option<Id>,
    config: PickerConfig,
    clock: Option<fn() -> NaiveDateTime>,
    min_width: f32,
}

/// Picks a [`NaiveDate`].
pub type DatePickerButton<'a> = PickerButton<'a, NaiveDate>;

/// Picks a [`NaiveDateTime`], with AM/PM, hour and minute columns next to the calendar.
pub type DateTimePickerButton<'a> = PickerButton<'a, NaiveDateTime>;

impl<'a, V: PickerValue> PickerButton<'a, V> {
    pub fn new(value: &'a mut Option<V>) -> Self {
        Self {
            value,
            id_salt: None,
            config: PickerConfig::default(),
            clock: None,
            min_width: 0.0,
        }
    }

    /// Must be set if multiple picker buttons are in the same Ui.
    #[inline]
    pub fn id_salt(mut self, id_salt: impl Hash) -> Self {
        self.id_salt = Some(Id::new(id_salt));
        self
    }

    /// Replace the whole configuration.
    #[inline]
    pub fn config(mut self, config: PickerConfig) -> Self {
        self.config = config;
        self
    }

    /// A disabled button cannot be opened, and closes if it was open.
    #[inline]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config = self.config.disabled(disabled);
        self
    }

    #[inline]
    pub fn min_date(mut self, min: impl Into<Option<NaiveDate>>) -> Self {
        self.config = self.config.min_date(min);
        self
    }

    #[inline]
    pub fn max_date(mut self, max: impl Into<Option<NaiveDate>>) -> Self {
        self.config = self.config.max_date(max);
        self
    }

    /// Change the format shown on the button.
    /// See [`chrono::format::strftime`] for valid formats.
    #[inline]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config = self.config.pattern(pattern);
        self
    }

    #[inline]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config = self.config.placeholder(placeholder);
        self
    }

    /// Show the minute column. (Default: true)
    #[inline]
    pub fn show_minute(mut self, show_minute: bool) -> Self {
        self.config = self.config.show_minute(show_minute);
        self
    }

    /// (Default: 10)
    #[inline]
    pub fn minute_step(mut self, minute_step: u32) -> Self {
        self.config = self.config.minute_step(minute_step);
        self
    }

    /// Where the time columns start when nothing is picked yet. (Default: 09:00)
    #[inline]
    pub fn default_time(mut self, default_time: NaiveTime) -> Self {
        self.config = self.config.default_time(default_time);
        self
    }

    #[inline]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.config = self.config.locale(locale);
        self
    }

    #[inline]
    pub fn placement(mut self, placement: PlacementOptions) -> Self {
        self.config = self.config.placement(placement);
        self
    }

    /// Override "now". Mostly useful for tests.
    #[inline]
    pub fn clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = Some(clock);
        self
    }

    #[inline]
    pub fn min_width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self
    }
}

/// Feed `event` to the picker and store whatever it reports.
fn apply<V: PickerValue>(picker: &mut Picker<V>, event: PickerEvent, value: &mut Option<V>) -> bool {
    match picker.handle(event, *value) {
        Outcome::Changed(new_value) => {
            log::trace!("{event:?} changed the picked value to {new_value:?}");
            *value = new_value;
            true
        }
        Outcome::Unchanged => false,
    }
}

impl<V: PickerValue> Widget for PickerButton<'_, V> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            value,
            id_salt,
            config,
            clock,
            min_width,
        } = self;

        let id = ui.make_persistent_id(id_salt);
        let mut picker = ui
            .data_mut(|data| data.get_temp::<Picker<V>>(id))
            .unwrap_or_else(|| Picker::new(config.clone()));
        picker.reconfigure(config);
        if let Some(clock) = clock {
            picker.set_clock(clock);
        }

        let anchor_text = picker.anchor_text(*value);
        let mut text = RichText::new(anchor_text.text());
        if anchor_text.is_placeholder() {
            text = text.weak();
        }
        let mut button = Button::new(text).min_size(vec2(min_width, 0.0));
        if picker.is_open() {
            let visuals = ui.visuals().widgets.open;
            button = button.fill(visuals.weak_bg_fill).stroke(visuals.bg_stroke);
        }
        let mut response = ui.add_enabled(!picker.config().disabled, button);

        let mut changed = false;
        if response.clicked() || response.gained_focus() {
            changed |= apply(&mut picker, PickerEvent::Activate, value);
        }

        if picker.is_open() {
            let viewport = ui.ctx().content_rect();
            let anchor = response.rect.translate(-viewport.min.to_vec2());

            // egui rects are already in points, so there is no zoom to undo.
            if let Some(placement) = picker.relayout(anchor, viewport.size(), 1.0) {
                let mut events = Vec::new();
                let InnerResponse {
                    response: panel_response,
                    ..
                } = Area::new(id.with("panel"))
                    .kind(egui::UiKind::Picker)
                    .order(Order::Foreground)
                    .fixed_pos(viewport.min + placement.pos.to_vec2())
                    .show(ui.ctx(), |ui| {
                        Frame::popup(ui.style()).show(ui, |ui| {
                            PickerPanel::new(&picker, *value, &mut events).show(ui);
                        });
                    });

                if picker.panel_measured(panel_response.rect.size()) {
                    // Place it again next frame, now that we know how big it is.
                    ui.ctx().request_repaint();
                }

                let (pressed, pointer_pos, escape) = ui.input(|i| {
                    (
                        i.pointer.any_pressed(),
                        i.pointer.interact_pos(),
                        i.key_pressed(Key::Escape),
                    )
                });
                if pressed && let Some(pos) = pointer_pos {
                    let inside = response.rect.contains(pos) || panel_response.rect.contains(pos);
                    events.push(PickerEvent::PointerDown { inside });
                }
                if escape {
                    events.push(PickerEvent::Escape);
                }

                for event in events {
                    changed |= apply(&mut picker, event, value);
                }
            }
        }

        if changed {
            response.mark_changed();
        }
        ui.data_mut(|data| data.insert_temp(id, picker));

        response
    }
}
