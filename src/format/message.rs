use chrono::NaiveDateTime;

use crate::format::dateformatter::DateFormatter;
use crate::holiday::holiday::HolidayDate;
use crate::holiday::nextholiday::Countdown;

/// "14:05:09"
pub fn clock_text(now: NaiveDateTime, formatter: &dyn DateFormatter) -> String {
    formatter.time(now.time())
}

/// "domingo, 21 de abril de 2024"
pub fn date_text(now: NaiveDateTime, formatter: &dyn DateFormatter) -> String {
    formatter.long_date(now.date())
}

pub fn next_holiday_text(countdown: &Countdown, formatter: &dyn DateFormatter) -> String {
    let holiday = countdown.holiday();
    let unit = if countdown.days() == 1 { "dia" } else { "dias" };
    format!(
        "O próximo feriado é {} no dia {}, que é em {} {}.",
        holiday.name(),
        formatter.day_month(holiday.date()),
        countdown.days(),
        unit
    )
}
