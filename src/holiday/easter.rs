use chrono::NaiveDate;

/// Month and day of Western Easter Sunday for `year`.
///
/// Anonymous Gregorian Computus. Euclidean division keeps every intermediate
/// value non-negative, so any integer year maps to a March or April date.
pub const fn easter_month_day(year: i32) -> (u32, u32) {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u32, (n % 31 + 1) as u32)
}

/// Easter Sunday of `year`, or `None` when chrono cannot represent the year.
pub fn try_compute_easter(year: i32) -> Option<NaiveDate> {
    let (month, day) = easter_month_day(year);
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Easter Sunday of `year`.
///
/// # Panics
/// If `year` lies outside the range representable by [`NaiveDate`].
pub fn compute_easter(year: i32) -> NaiveDate {
    match try_compute_easter(year) {
        Some(easter) => easter,
        None => panic!("year {} is outside the representable calendar range", year)
    }
}
