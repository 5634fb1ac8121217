use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;


/// Anything that sits on a single civil date, so the next-holiday lookup can
/// scan either the full or the display records.
pub trait HolidayDate {
    fn date(&self) -> NaiveDate;
}

/// One national holiday in a concrete year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    name: String,
    date: NaiveDate,
    weekday_name: String
}

impl Holiday {
    pub fn new(name: String, date: NaiveDate, weekday_name: String) -> Holiday {
        Holiday { name, date, weekday_name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weekday_name(&self) -> &str {
        &self.weekday_name
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// 1-based month.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

impl HolidayDate for Holiday {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Name and date only, as shown to a reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayHoliday {
    name: String,
    date: NaiveDate
}

impl DisplayHoliday {
    pub fn new(name: String, date: NaiveDate) -> DisplayHoliday {
        DisplayHoliday { name, date }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl HolidayDate for DisplayHoliday {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
