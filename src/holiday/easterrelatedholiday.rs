use chrono::{Days, NaiveDate};

use super::easter::try_compute_easter;
use super::recurringholiday::RecurringHoliday;

/// Holiday falling a fixed number of days before or after Easter Sunday.
#[derive(Clone)]
pub struct EasterRelatedHoliday {
    shift_days: i32,
    name: String
}

impl EasterRelatedHoliday {
    pub fn new(shift_days: i32, name: &str) -> EasterRelatedHoliday {
        EasterRelatedHoliday {
            shift_days,
            name: name.to_owned()
        }
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn holiday_date(&self, year: i32) -> Option<NaiveDate> {
        let easter = try_compute_easter(year)?;
        let shift = Days::new(self.shift_days.unsigned_abs() as u64);
        if self.shift_days >= 0 {
            easter.checked_add_days(shift)
        } else {
            easter.checked_sub_days(shift)
        }
    }
}
