#![allow(clippy::float_cmp)]

use chrono::{NaiveDate, NaiveDateTime};
use ecalendar::{DATE_PANEL_WIDTH, DATE_TIME_PANEL_WIDTH};
use egui::{Event, Key, Modifiers, Order, PointerButton, pos2};
use egui_datetime::{DatePickerButton, DateTimePickerButton};
use egui_kittest::Harness;
use egui_kittest::kittest::Queryable as _;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fixed_now() -> NaiveDateTime {
    date(2025, 6, 5).and_hms_opt(14, 12, 0).unwrap()
}

#[derive(Default)]
struct State<V> {
    value: Option<V>,
    changes: usize,
}

fn date_harness(state: State<NaiveDate>) -> Harness<'static, State<NaiveDate>> {
    Harness::new_ui_state(
        |ui, state: &mut State<NaiveDate>| {
            let response = ui.add(
                DatePickerButton::new(&mut state.value)
                    .clock(fixed_now)
                    .min_date(date(2025, 6, 14)),
            );
            if response.changed() {
                state.changes += 1;
            }
        },
        state,
    )
}

fn press_escape<S>(harness: &mut Harness<'_, S>) {
    for pressed in [true, false] {
        harness.input_mut().events.push(Event::Key {
            key: Key::Escape,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: Modifiers::default(),
        });
    }
    harness.run();
}

/// Room for the popup frame's margin and stroke around the content.
const FRAME_SLACK: f32 = 32.0;

/// Width of the widest foreground area, which is the open panel.
fn panel_width<S>(harness: &Harness<'_, S>) -> f32 {
    harness.ctx.memory(|mem| {
        mem.layer_ids()
            .filter(|layer| layer.order == Order::Foreground)
            .filter_map(|layer| mem.area_rect(layer.id))
            .map(|rect| rect.width())
            .fold(0.0, f32::max)
    })
}

fn assert_panel_settles<S>(harness: &mut Harness<'_, S>, max_width: f32) {
    let width = panel_width(harness);
    assert!(width > 0.0, "the panel should be open");
    assert!(
        width <= max_width + FRAME_SLACK,
        "panel is {width} wide, expected at most {max_width}"
    );

    for _ in 0..5 {
        harness.step();
    }
    assert_eq!(panel_width(harness), width, "panel width changed without input");
}

#[test]
fn test_pick_date() {
    let mut harness = date_harness(State::default());

    harness.get_by_label("Select a date").click();
    harness.run();
    harness.get_by_label("June 2025");

    harness.get_by_label("15").click();
    harness.run();

    assert_eq!(harness.state().value, Some(date(2025, 6, 15)));
    assert_eq!(harness.state().changes, 1);

    // The panel closed, the anchor shows the value.
    assert!(harness.query_by_label("June 2025").is_none());
    harness.get_by_label("2025. 06. 15");
}

#[test]
fn test_day_before_minimum_is_disabled() {
    let mut harness = date_harness(State::default());

    harness.get_by_label("Select a date").click();
    harness.run();

    harness.get_by_label("13").click();
    harness.run();

    assert_eq!(harness.state().value, None);
    assert_eq!(harness.state().changes, 0);
    harness.get_by_label("June 2025");
}

#[test]
fn test_escape_discards_navigation() {
    let mut harness = date_harness(State {
        value: Some(date(2025, 6, 15)),
        changes: 0,
    });

    harness.get_by_label("2025. 06. 15").click();
    harness.run();
    harness.get_by_label(">").click();
    harness.run();
    harness.get_by_label("July 2025");

    press_escape(&mut harness);
    assert!(harness.query_by_label("July 2025").is_none());

    harness.get_by_label("2025. 06. 15").click();
    harness.run();
    harness.get_by_label("June 2025");
    assert_eq!(harness.state().changes, 0);
}

#[test]
fn test_click_outside_closes() {
    let mut harness = date_harness(State::default());

    harness.get_by_label("Select a date").click();
    harness.run();
    harness.get_by_label("June 2025");

    // Far from both the anchor in the top left corner and the panel below it.
    let pos = pos2(790.0, 590.0);
    harness.input_mut().events.push(Event::PointerMoved(pos));
    for pressed in [true, false] {
        harness.input_mut().events.push(Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        });
    }
    harness.run();

    assert!(harness.query_by_label("June 2025").is_none());
    assert_eq!(harness.state().value, None);
}

#[test]
fn test_pick_date_and_time() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State<NaiveDateTime>| {
            let response = ui.add(DateTimePickerButton::new(&mut state.value).clock(fixed_now));
            if response.changed() {
                state.changes += 1;
            }
        },
        State::default(),
    );

    harness.get_by_label("Select a date and time").click();
    harness.run();

    harness.get_by_label("15").click();
    harness.run();
    assert_eq!(
        harness.state().value,
        Some(date(2025, 6, 15).and_hms_opt(9, 0, 0).unwrap())
    );

    // Stays open: every time column reports right away.
    harness.get_by_label("PM").click();
    harness.run();
    harness.get_by_label("03").click();
    harness.run();
    harness.get_by_label("40").click();
    harness.run();

    assert_eq!(
        harness.state().value,
        Some(date(2025, 6, 15).and_hms_opt(15, 40, 0).unwrap())
    );
    assert_eq!(harness.state().changes, 4);
    harness.get_by_label("2025. 06. 15 15:40");
}

#[test]
fn test_date_panel_keeps_its_width() {
    let mut harness = date_harness(State::default());

    harness.get_by_label("Select a date").click();
    harness.run();

    assert_panel_settles(&mut harness, DATE_PANEL_WIDTH);
}

#[test]
fn test_date_time_panel_keeps_its_width() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State<NaiveDateTime>| {
            ui.add(DateTimePickerButton::new(&mut state.value).clock(fixed_now));
        },
        State::default(),
    );

    harness.get_by_label("Select a date and time").click();
    harness.run();

    assert_panel_settles(&mut harness, DATE_TIME_PANEL_WIDTH);
}

#[test]
fn test_clear() {
    let mut harness = date_harness(State {
        value: Some(date(2025, 6, 15)),
        changes: 0,
    });

    harness.get_by_label("2025. 06. 15").click();
    harness.run();
    harness.get_by_label("Clear").click();
    harness.run();

    assert_eq!(harness.state().value, None);
    harness.get_by_label("Select a date");
}

#[test]
fn test_disabled_does_not_open() {
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State<NaiveDate>| {
            ui.add(DatePickerButton::new(&mut state.value).disabled(true).clock(fixed_now));
        },
        State::default(),
    );

    harness.get_by_label("Select a date").click();
    harness.run();
    assert!(harness.query_by_label("June 2025").is_none());
}
