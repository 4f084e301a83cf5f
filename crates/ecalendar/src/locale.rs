use crate::{Meridiem, YearMonth};

/// The words shown by a picker.
///
/// Weekday names start on Sunday, matching the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Locale {
    pub weekdays: [&'static str; 7],
    pub months: [&'static str; 12],
    pub am: &'static str,
    pub pm: &'static str,

    pub meridiem_header: &'static str,
    pub hour_header: &'static str,
    pub minute_header: &'static str,

    pub previous: &'static str,
    pub next: &'static str,
    pub clear: &'static str,

    pub date_placeholder: &'static str,
    pub date_time_placeholder: &'static str,
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl Locale {
    pub const fn english() -> Self {
        Self {
            weekdays: ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
            months: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            am: "AM",
            pm: "PM",
            meridiem_header: "AM/PM",
            hour_header: "Hour",
            minute_header: "Min",
            previous: "Previous month",
            next: "Next month",
            clear: "Clear",
            date_placeholder: "Select a date",
            date_time_placeholder: "Select a date and time",
        }
    }

    pub const fn korean() -> Self {
        Self {
            weekdays: ["일", "월", "화", "수", "목", "금", "토"],
            months: [
                "1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월", "12월",
            ],
            am: "오전",
            pm: "오후",
            meridiem_header: "오전/오후",
            hour_header: "시",
            minute_header: "분",
            previous: "이전",
            next: "다음",
            clear: "지우기",
            date_placeholder: "예약날짜를 선택해주세요",
            date_time_placeholder: "날짜와 시간을 선택해주세요",
        }
    }

    pub fn meridiem(&self, meridiem: Meridiem) -> &'static str {
        match meridiem {
            Meridiem::Am => self.am,
            Meridiem::Pm => self.pm,
        }
    }

    /// "June 2025", "6월 2025".
    pub fn month_label(&self, month: YearMonth) -> String {
        let name = self.months[(month.month as usize).saturating_sub(1) % 12];
        format!("{name} {}", month.year)
    }
}
