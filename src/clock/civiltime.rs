use chrono::{FixedOffset, NaiveDate, NaiveDateTime};

use crate::clock::clock::Clock;

/// Brasília time, UTC-03:00. Brazil has observed no daylight saving time since 2019.
pub const BRASILIA_UTC_OFFSET_SECONDS: i32 = -3 * 3600;

pub fn brasilia_offset() -> FixedOffset {
    match FixedOffset::east_opt(BRASILIA_UTC_OFFSET_SECONDS) {
        Some(offset) => offset,
        None => unreachable!("-03:00 is a valid offset")
    }
}

/// Wall-clock date and time at `offset`, read once from `clock`.
pub fn civil_now(clock: &dyn Clock, offset: FixedOffset) -> NaiveDateTime {
    clock.now().with_timezone(&offset).naive_local()
}

pub fn civil_today(clock: &dyn Clock, offset: FixedOffset) -> NaiveDate {
    civil_now(clock, offset).date()
}
