use chrono::{Datelike, NaiveDate};


/// A named holiday rule that falls on exactly one civil date per year.
pub trait RecurringHoliday: Send + Sync {

    fn name(&self) -> &str;

    /// Date of the holiday in `year`. `None` only when the year cannot be
    /// represented as a [`NaiveDate`].
    fn holiday_date(&self, year: i32) -> Option<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.holiday_date(d.year()) == Some(*d)
    }
}
