//! Date and date-time picker widgets for [`egui`](https://github.com/emilk/egui).
//!
//! ```
//! # egui::__run_test_ui(|ui| {
//! let mut day: Option<chrono::NaiveDate> = None;
//! ui.add(egui_datetime::DatePickerButton::new(&mut day).id_salt("birthday"));
//! # });
//! ```
//!
//! The state machine behind the widgets lives in [`ecalendar`].
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![forbid(unsafe_code)]

mod button;
mod panel;

pub use crate::button::{DatePickerButton, DateTimePickerButton, PickerButton};

pub use ecalendar;
