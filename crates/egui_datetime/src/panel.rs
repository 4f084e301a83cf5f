use chrono::Datelike as _;
use ecalendar::{DATE_PANEL_WIDTH, Picker, PickerEvent, PickerValue, TimeOption, ViewMode};
use egui::{Align, Button, Grid, Layout, RichText, ScrollArea, Ui, vec2};

const DAY_SIZE: f32 = 30.0;
const YEAR_CELL_SIZE: egui::Vec2 = vec2(52.0, 28.0);
const YEARS_PER_ROW: usize = 4;
const YEAR_LIST_HEIGHT: f32 = 210.0;
const TIME_CELL_WIDTH: f32 = 44.0;
const TIME_COLUMN_HEIGHT: f32 = 280.0;

/// The content of the floating panel.
///
/// Only reads the picker. Whatever the user clicked ends up in `events`,
/// for the caller to feed back into the picker.
pub(crate) struct PickerPanel<'a, V> {
    picker: &'a Picker<V>,
    value: Option<V>,
    events: &'a mut Vec<PickerEvent>,
}

impl<'a, V: PickerValue> PickerPanel<'a, V> {
    pub fn new(picker: &'a Picker<V>, value: Option<V>, events: &'a mut Vec<PickerEvent>) -> Self {
        Self {
            picker,
            value,
            events,
        }
    }

    pub fn show(mut self, ui: &mut Ui) {
        ui.set_min_width(self.picker.estimated_panel_size().x);
        ui.spacing_mut().item_spacing = vec2(2.0, 2.0);

        if V::HAS_TIME {
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| self.calendar(ui));
                ui.separator();
                self.time_columns(ui);
            });
        } else {
            self.calendar(ui);
        }
    }

    /// The header fills the width it gets, so the calendar column needs a fixed
    /// width or the panel grows with every frame.
    fn calendar(&mut self, ui: &mut Ui) {
        ui.set_max_width(DATE_PANEL_WIDTH);
        self.calendar_contents(ui);
    }

    fn calendar_contents(&mut self, ui: &mut Ui) {
        let Some(session) = self.picker.session() else {
            return;
        };
        let locale = self.picker.config().locale;
        let mode = session.mode;

        ui.horizontal(|ui| {
            let label = self.picker.month_label().unwrap_or_default();
            if ui.button(RichText::new(label).strong()).clicked() {
                self.events.push(PickerEvent::ToggleMode);
            }
            if mode == ViewMode::Month {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(">").on_hover_text(locale.next).clicked() {
                        self.events.push(PickerEvent::NextMonth);
                    }
                    if ui.button("<").on_hover_text(locale.previous).clicked() {
                        self.events.push(PickerEvent::PrevMonth);
                    }
                });
            }
        });

        match mode {
            ViewMode::Month => self.day_grid(ui),
            ViewMode::Year => self.year_grid(ui),
        }

        if self.value.is_some() {
            ui.add_space(4.0);
            if ui.button(locale.clear).clicked() {
                self.events.push(PickerEvent::Clear);
            }
        }
    }

    fn day_grid(&mut self, ui: &mut Ui) {
        let locale = self.picker.config().locale;
        let cells = self.picker.month_cells(self.value);

        Grid::new("days").spacing(vec2(2.0, 2.0)).show(ui, |ui| {
            for weekday in locale.weekdays {
                ui.label(RichText::new(weekday).weak());
            }
            ui.end_row();

            for week in cells.chunks(7) {
                for cell in week {
                    let mut text = RichText::new(cell.date.day().to_string());
                    if !cell.in_current_month {
                        text = text.weak();
                    }
                    if cell.today {
                        text = text.underline();
                    }
                    let button = Button::new(text)
                        .selected(cell.selected)
                        .min_size(vec2(DAY_SIZE, DAY_SIZE));
                    if ui.add_enabled(!cell.disabled, button).clicked() {
                        self.events.push(PickerEvent::SelectDay(cell.date));
                    }
                }
                ui.end_row();
            }
        });
    }

    fn year_grid(&mut self, ui: &mut Ui) {
        let years = self.picker.year_cells();

        ScrollArea::vertical()
            .id_salt("years")
            .max_height(YEAR_LIST_HEIGHT)
            .show(ui, |ui| {
                Grid::new("years").spacing(vec2(2.0, 2.0)).show(ui, |ui| {
                    for row in years.chunks(YEARS_PER_ROW) {
                        for cell in row {
                            let button = Button::new(cell.year.to_string())
                                .selected(cell.current)
                                .min_size(YEAR_CELL_SIZE);
                            if ui.add_enabled(!cell.disabled, button).clicked() {
                                self.events.push(PickerEvent::SelectYear(cell.year));
                            }
                        }
                        ui.end_row();
                    }
                });
            });
    }

    fn time_columns(&mut self, ui: &mut Ui) {
        let Some(columns) = self.picker.time_columns() else {
            return;
        };
        let locale = self.picker.config().locale;

        self.time_column(
            ui,
            locale.meridiem_header,
            &columns.meridiems,
            |meridiem| locale.meridiem(meridiem).to_owned(),
            PickerEvent::SelectMeridiem,
        );
        self.time_column(
            ui,
            locale.hour_header,
            &columns.hours,
            |hour| format!("{hour:02}"),
            PickerEvent::SelectHour,
        );
        if !columns.minutes.is_empty() {
            self.time_column(
                ui,
                locale.minute_header,
                &columns.minutes,
                |minute| format!("{minute:02}"),
                PickerEvent::SelectMinute,
            );
        }
    }

    fn time_column<T: Copy>(
        &mut self,
        ui: &mut Ui,
        header: &str,
        options: &[TimeOption<T>],
        label: impl Fn(T) -> String,
        event: impl Fn(T) -> PickerEvent,
    ) {
        ui.vertical(|ui| {
            ui.label(RichText::new(header).strong());
            ScrollArea::vertical()
                .id_salt(header)
                .max_height(TIME_COLUMN_HEIGHT)
                .show(ui, |ui| {
                    for option in options {
                        let button = Button::new(label(option.value))
                            .selected(option.selected)
                            .min_size(vec2(TIME_CELL_WIDTH, 0.0));
                        if ui.add(button).clicked() {
                            self.events.push(event(option.value));
                        }
                    }
                });
        });
    }
}
