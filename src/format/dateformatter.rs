use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};


/// Locale-specific names for calendar values.
///
/// The holiday engine only needs `weekday_name`; the remaining methods back the
/// clock and countdown texts.
pub trait DateFormatter: Send + Sync {

    fn weekday_name(&self, weekday: Weekday) -> String;

    /// Name of a 1-based month.
    ///
    /// # Panics
    /// If `month` is not in `1..=12`.
    fn month_name(&self, month: u32) -> String;

    fn day_month(&self, d: NaiveDate) -> String;

    fn long_date(&self, d: NaiveDate) -> String;

    fn time(&self, t: NaiveTime) -> String {
        format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
    }
}

const PT_BR_WEEKDAYS: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo"
];

const PT_BR_MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril",
    "maio", "junho", "julho", "agosto",
    "setembro", "outubro", "novembro", "dezembro"
];

/// Brazilian Portuguese (pt-BR) long names.
#[derive(Clone, Copy, Default)]
pub struct PortugueseDateFormatter;

impl DateFormatter for PortugueseDateFormatter {
    fn weekday_name(&self, weekday: Weekday) -> String {
        PT_BR_WEEKDAYS[weekday.num_days_from_monday() as usize].to_owned()
    }

    fn month_name(&self, month: u32) -> String {
        match month {
            1..=12 => PT_BR_MONTHS[month as usize - 1].to_owned(),
            _ => panic!("month {} is not in 1..=12", month)
        }
    }

    /// "21 de abril"
    fn day_month(&self, d: NaiveDate) -> String {
        format!("{} de {}", d.day(), self.month_name(d.month()))
    }

    /// "domingo, 21 de abril de 2024"
    fn long_date(&self, d: NaiveDate) -> String {
        format!("{}, {} de {}", self.weekday_name(d.weekday()), self.day_month(d), d.year())
    }
}
