use chrono::{Datelike, NaiveDate};
use log::debug;
use serde::Serialize;

use crate::holiday::holiday::{DisplayHoliday, HolidayDate};
use crate::holiday::nationalcalendar::NationalCalendar;

/// First holiday strictly after `today`, scanning `this_year` then `next_year`.
///
/// `today` is the civil date where the holidays are observed (Brasília time),
/// not the UTC date of the current instant. Convert an instant with
/// [`civil_today`](crate::clock::civiltime::civil_today) first.
///
/// Both slices must be sorted and every entry of `this_year` must precede every
/// entry of `next_year`.
///
/// # Panics
/// When no holiday lies after `today`. Supplying next year's list, which
/// starts on 1 January, makes that impossible.
pub fn next_holiday<'a, H: HolidayDate>(today: NaiveDate, this_year: &'a [H], next_year: &'a [H]) -> &'a H {
    match this_year.iter().chain(next_year.iter()).find(|h| h.date() > today) {
        Some(holiday) => holiday,
        None => panic!("no holiday after {}: next year's holidays were not supplied", today)
    }
}

/// Whole civil days from `today` to `date`.
pub fn days_until(today: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Countdown {
    holiday: DisplayHoliday,
    days: i64
}

impl Countdown {
    pub fn holiday(&self) -> &DisplayHoliday {
        &self.holiday
    }

    /// Days left, always at least 1.
    pub fn days(&self) -> i64 {
        self.days
    }
}

/// Next holiday of `calendar` after the civil date `today` and the days left.
///
/// As with [`next_holiday`], `today` must already be the Brasília civil date.
pub fn upcoming_holiday(today: NaiveDate, calendar: &NationalCalendar) -> Countdown {
    let this_year = calendar.holidays_for_display(today.year());
    let next_year = calendar.holidays_for_display(today.year() + 1);
    let holiday = next_holiday(today, &this_year, &next_year).clone();
    let days = days_until(today, holiday.date());
    debug!("next holiday after {} is {} on {} ({} days)", today, holiday.name(), holiday.date(), days);
    Countdown { holiday, days }
}
