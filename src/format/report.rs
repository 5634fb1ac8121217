use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::format::dateformatter::DateFormatter;
use crate::format::message::{clock_text, date_text};
use crate::holiday::holiday::Holiday;
use crate::holiday::nationalcalendar::NationalCalendar;
use crate::holiday::nextholiday::{upcoming_holiday, Countdown};
use crate::theme::theme::{resolve_theme, Theme, ThemePreference};

/// Everything the page shows at one civil instant, for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    clock: String,
    date: String,
    theme: Theme,
    next_holiday: Countdown,
    holidays: Vec<Holiday>
}

impl Report {
    /// `now` is the civil date and time in Brasília.
    pub fn new(
        now: NaiveDateTime,
        calendar: &NationalCalendar,
        formatter: &dyn DateFormatter,
        theme_preference: ThemePreference,
        system_prefers_dark: bool
    ) -> Report {
        Report {
            clock: clock_text(now, formatter),
            date: date_text(now, formatter),
            theme: resolve_theme(theme_preference, system_prefers_dark, now.hour()),
            next_holiday: upcoming_holiday(now.date(), calendar),
            holidays: calendar.holidays_with(now.year(), formatter)
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn next_holiday(&self) -> &Countdown {
        &self.next_holiday
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    use super::*;
    use crate::format::dateformatter::PortugueseDateFormatter;

    #[test]
    fn serializes_names_dates_and_theme() {
        let now = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap().and_hms_opt(19, 0, 0).unwrap();
        let report = Report::new(
            now,
            &NationalCalendar::brazil(),
            &PortugueseDateFormatter,
            ThemePreference::Auto,
            false
        );
        assert_eq!(report.theme(), Theme::Dark);
        assert_eq!(report.holidays().len(), 12);

        let value: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["clock"], json!("19:00:00"));
        assert_eq!(value["date"], json!("sábado, 20 de abril de 2024"));
        assert_eq!(value["theme"], json!("dark"));
        assert_eq!(value["next_holiday"], json!({
            "holiday": { "name": "Tiradentes", "date": "2024-04-21" },
            "days": 1
        }));
        assert_eq!(value["holidays"][0], json!({
            "name": "Confraternização Universal",
            "date": "2024-01-01",
            "weekday_name": "segunda-feira"
        }));
    }
}
