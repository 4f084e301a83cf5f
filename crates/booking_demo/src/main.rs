#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use chrono::{Local, NaiveDate};
use ecalendar::{Locale, format_form_value, parse_form_value};
use eframe::egui;
use egui_datetime::{DatePickerButton, DateTimePickerButton};

/// The pattern the booking forms show their visit time in, e.g. "2025. 06. 15 15시".
const HOUR_PATTERN: &str = "%Y. %m. %d %H시";

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Booking demo",
        options,
        Box::new(|_cc| Ok(Box::<BookingApp>::default())),
    )
}

/// A form that stores its visit time as text, the way it would be submitted.
#[derive(Default)]
struct VisitForm {
    name: String,

    /// `yyyy-MM-ddTHH:mm`, or empty.
    visit: String,
}

impl VisitForm {
    fn ui(&mut self, ui: &mut egui::Ui, id_salt: &str, locale: Locale) {
        egui::Grid::new(id_salt).num_columns(2).show(ui, |ui| {
            ui.label("Name");
            ui.text_edit_singleline(&mut self.name);
            ui.end_row();

            ui.label("Visit");
            let mut visit = parse_form_value(&self.visit);
            let response = ui.add(
                DateTimePickerButton::new(&mut visit)
                    .id_salt(id_salt)
                    .min_date(Local::now().date_naive())
                    .show_minute(false)
                    .pattern(HOUR_PATTERN)
                    .locale(locale)
                    .min_width(220.0),
            );
            if response.changed() {
                self.visit = visit.map(format_form_value).unwrap_or_default();
            }
            ui.end_row();

            ui.label("Stored");
            ui.monospace(&self.visit);
            ui.end_row();
        });

        if ui.button("Submit").clicked() {
            if self.visit.is_empty() {
                log::warn!("{id_salt}: no visit time picked");
            } else {
                log::info!("{id_salt}: {:?} at {}", self.name, self.visit);
            }
        }
    }
}

struct BookingApp {
    korean: bool,
    booking: VisitForm,
    consult: VisitForm,
    birthday: Option<NaiveDate>,
    enable_birthday: bool,
}

impl Default for BookingApp {
    fn default() -> Self {
        Self {
            korean: false,
            booking: VisitForm::default(),
            consult: VisitForm::default(),
            birthday: None,
            enable_birthday: true,
        }
    }
}

impl eframe::App for BookingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Booking");
                ui.add_space(16.0);
                // The default fonts have no Hangul, so labels show up as boxes without a CJK font.
                ui.checkbox(&mut self.korean, "Korean labels");
            });
            let locale = if self.korean {
                Locale::korean()
            } else {
                Locale::english()
            };
            ui.separator();

            ui.label("Booking");
            self.booking.ui(ui, "booking", locale);
            ui.separator();

            ui.label("Consultation");
            self.consult.ui(ui, "consult", locale);
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Birthday");
                ui.add(
                    DatePickerButton::new(&mut self.birthday)
                        .id_salt("birthday")
                        .max_date(Local::now().date_naive())
                        .locale(locale)
                        .disabled(!self.enable_birthday),
                );
                ui.checkbox(&mut self.enable_birthday, "Enabled");
            });
        });
    }
}
