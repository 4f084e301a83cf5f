//! Display text for the anchor and the text codec the host forms store values in.

use std::fmt::Write as _;

use chrono::NaiveDateTime;
use chrono::format::{Item, StrftimeItems};

/// How the host forms serialize a picked date-time, e.g. `2025-06-15T15:30`.
pub const FORM_VALUE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Does chrono understand every specifier in `pattern`?
pub fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Format `value` with a strftime `pattern`.
///
/// Returns `None` if the pattern cannot be rendered, instead of panicking like
/// `to_string` on a chrono formatter would.
pub fn format_with(value: NaiveDateTime, pattern: &str) -> Option<String> {
    if !is_valid_pattern(pattern) {
        return None;
    }
    let mut out = String::new();
    write!(out, "{}", value.format(pattern)).ok()?;
    Some(out)
}

/// What the anchor control shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorText {
    /// The formatted current value.
    Value(String),

    /// Nothing is selected yet.
    Placeholder(String),
}

impl AnchorText {
    pub fn text(&self) -> &str {
        match self {
            Self::Value(text) | Self::Placeholder(text) => text,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// Read a value stored by a host form. Empty or malformed text means "nothing selected".
pub fn parse_form_value(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match NaiveDateTime::parse_from_str(text, FORM_VALUE_FORMAT) {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("Treating unparsable form value {text:?} as empty: {err}");
            None
        }
    }
}

pub fn format_form_value(value: NaiveDateTime) -> String {
    value.format(FORM_VALUE_FORMAT).to_string()
}
