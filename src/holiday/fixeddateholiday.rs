use chrono::NaiveDate;

use super::recurringholiday::RecurringHoliday;

/// Leap year used to check that a (month, day) pair exists at all.
const LEAP_REFERENCE_YEAR: i32 = 2000;

#[derive(Clone)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    name: String
}

impl FixedDateHoliday {
    /// Returns `None` for a (month, day) pair that does not occur every year,
    /// which also rules out 29 February.
    pub fn new(month: u32, day: u32, name: &str) -> Option<FixedDateHoliday> {
        if NaiveDate::from_ymd_opt(LEAP_REFERENCE_YEAR, month, day).is_none() || (month == 2 && day == 29) {
            None
        } else {
            Some(FixedDateHoliday {
                month,
                day,
                name: name.to_owned()
            })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn holiday_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}
