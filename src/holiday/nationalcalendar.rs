use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::format::dateformatter::{DateFormatter, PortugueseDateFormatter};
use crate::holiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::holiday::fixeddateholiday::FixedDateHoliday;
use crate::holiday::holiday::{DisplayHoliday, Holiday, HolidayDate};
use crate::holiday::recurringholiday::RecurringHoliday;

pub const NEW_YEAR_NAME: &str = "Confraternização Universal";
pub const NEW_YEAR_DISPLAY_NAME: &str = "Ano Novo";

/// (month, day, name), months 1-based.
const BRAZIL_FIXED_HOLIDAYS: [(u32, u32, &str); 9] = [
    (1, 1, NEW_YEAR_NAME),
    (4, 21, "Tiradentes"),
    (5, 1, "Dia do Trabalhador"),
    (9, 7, "Independência do Brasil"),
    (10, 12, "Nossa Sra. Aparecida"),
    (11, 2, "Finados"),
    (11, 15, "Proclamação da República"),
    (11, 20, "Consciência Negra"),
    (12, 25, "Natal")
];

/// (days from Easter Sunday, name)
const BRAZIL_EASTER_RELATED_HOLIDAYS: [(i32, &str); 3] = [
    (-47, "Carnaval"),
    (-2, "Sexta-feira Santa"),
    (60, "Corpus Christi")
];

/// A fixed set of recurring holiday rules.
///
/// Records are rebuilt on every call. Dates are never deduplicated: two rules
/// landing on the same day yield two records.
#[derive(Clone)]
pub struct NationalCalendar {
    recurring_holidays: Vec<Arc<dyn RecurringHoliday>>
}

impl NationalCalendar {
    pub fn new(recurring_holidays: Vec<Arc<dyn RecurringHoliday>>) -> NationalCalendar {
        NationalCalendar { recurring_holidays }
    }

    /// Brazilian federal holidays: 9 fixed dates plus 3 Easter-relative ones.
    pub fn brazil() -> NationalCalendar {
        let mut recurring_holidays: Vec<Arc<dyn RecurringHoliday>> = Vec::with_capacity(12);
        for (month, day, name) in BRAZIL_FIXED_HOLIDAYS {
            match FixedDateHoliday::new(month, day, name) {
                Some(holiday) => recurring_holidays.push(Arc::new(holiday)),
                None => panic!("{} on {}/{} does not recur every year", name, day, month)
            }
        }
        for (shift_days, name) in BRAZIL_EASTER_RELATED_HOLIDAYS {
            recurring_holidays.push(Arc::new(EasterRelatedHoliday::new(shift_days, name)));
        }
        NationalCalendar::new(recurring_holidays)
    }

    pub fn recurring_holidays(&self) -> &[Arc<dyn RecurringHoliday>] {
        &self.recurring_holidays
    }

    /// Holidays of `year` sorted ascending by date, weekday names from `formatter`.
    pub fn holidays_with(&self, year: i32, formatter: &dyn DateFormatter) -> Vec<Holiday> {
        let mut holidays: Vec<Holiday> = self.recurring_holidays
            .iter()
            .filter_map(|rule| {
                rule.holiday_date(year).map(|date| {
                    Holiday::new(rule.name().to_owned(), date, formatter.weekday_name(date.weekday()))
                })
            })
            .collect();
        holidays.sort_by_key(|h| h.date());
        holidays
    }

    pub fn holidays(&self, year: i32) -> Vec<Holiday> {
        self.holidays_with(year, &PortugueseDateFormatter)
    }

    /// Same dates as [`NationalCalendar::holidays`], with New Year shown as "Ano Novo".
    pub fn holidays_for_display(&self, year: i32) -> Vec<DisplayHoliday> {
        self.holidays(year)
            .into_iter()
            .map(|h| {
                let name = if h.name() == NEW_YEAR_NAME {
                    NEW_YEAR_DISPLAY_NAME.to_owned()
                } else {
                    h.name().to_owned()
                };
                DisplayHoliday::new(name, h.date())
            })
            .collect()
    }

    pub fn is_holiday(&self, d: NaiveDate) -> bool {
        self.recurring_holidays.iter().any(|rule| rule.is_holiday(&d))
    }
}

impl Default for NationalCalendar {
    fn default() -> Self {
        NationalCalendar::brazil()
    }
}

pub fn get_holidays(year: i32) -> Vec<Holiday> {
    NationalCalendar::brazil().holidays(year)
}

pub fn get_holidays_for_display(year: i32) -> Vec<DisplayHoliday> {
    NationalCalendar::brazil().holidays_for_display(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn brazil_2024() {
        let holidays = get_holidays(2024);
        let expected = [
            (date(2024, 1, 1), NEW_YEAR_NAME, "segunda-feira"),
            (date(2024, 2, 13), "Carnaval", "terça-feira"),
            (date(2024, 3, 29), "Sexta-feira Santa", "sexta-feira"),
            (date(2024, 4, 21), "Tiradentes", "domingo"),
            (date(2024, 5, 1), "Dia do Trabalhador", "quarta-feira"),
            (date(2024, 5, 30), "Corpus Christi", "quinta-feira"),
            (date(2024, 9, 7), "Independência do Brasil", "sábado"),
            (date(2024, 10, 12), "Nossa Sra. Aparecida", "sábado"),
            (date(2024, 11, 2), "Finados", "sábado"),
            (date(2024, 11, 15), "Proclamação da República", "sexta-feira"),
            (date(2024, 11, 20), "Consciência Negra", "quarta-feira"),
            (date(2024, 12, 25), "Natal", "quarta-feira")
        ];
        assert_eq!(holidays.len(), expected.len());
        for (holiday, (d, name, weekday)) in holidays.iter().zip(expected) {
            assert_eq!(holiday.date(), d);
            assert_eq!(holiday.name(), name);
            assert_eq!(holiday.weekday_name(), weekday);
        }
    }

    #[test]
    fn brazil_has_twelve_rules() {
        let calendar = NationalCalendar::brazil();
        assert_eq!(calendar.recurring_holidays().len(), 12);
        let names: Vec<&str> = calendar.recurring_holidays().iter().map(|rule| rule.name()).collect();
        assert!(names.contains(&"Natal"));
        assert!(names.contains(&"Corpus Christi"));
    }

    #[test]
    fn accessors_use_one_based_months() {
        let holidays = get_holidays(2025);
        let natal = holidays.last().unwrap();
        assert_eq!((natal.day(), natal.month(), natal.year()), (25, 12, 2025));
        assert_eq!(natal.weekday(), chrono::Weekday::Thu);
    }

    #[test]
    fn display_only_renames_new_year() {
        let full = get_holidays(2025);
        let display = get_holidays_for_display(2025);
        assert_eq!(full.len(), display.len());
        assert_eq!(display[0].name(), NEW_YEAR_DISPLAY_NAME);
        for (h, d) in full.iter().zip(display.iter()).skip(1) {
            assert_eq!(h.name(), d.name());
            assert_eq!(h.date(), d.date());
        }
        assert_eq!(full[0].date(), display[0].date());
    }

    #[test]
    fn is_holiday_matches_the_list() {
        let calendar = NationalCalendar::brazil();
        assert!(calendar.is_holiday(date(2025, 3, 4)));
        assert!(calendar.is_holiday(date(2025, 11, 20)));
        assert!(!calendar.is_holiday(date(2025, 3, 5)));
    }

    #[test]
    fn colliding_rules_are_kept() {
        let rules: Vec<Arc<dyn RecurringHoliday>> = vec![
            Arc::new(FixedDateHoliday::new(4, 21, "Tiradentes").unwrap()),
            Arc::new(EasterRelatedHoliday::new(0, "Páscoa"))
        ];
        let calendar = NationalCalendar::new(rules);
        // Easter 2019 fell on 21 April.
        let holidays = calendar.holidays(2019);
        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays[0].date(), holidays[1].date());
    }

    struct NumberedWeekdays;

    impl DateFormatter for NumberedWeekdays {
        fn weekday_name(&self, weekday: chrono::Weekday) -> String {
            weekday.number_from_monday().to_string()
        }

        fn month_name(&self, month: u32) -> String {
            month.to_string()
        }

        fn day_month(&self, d: NaiveDate) -> String {
            d.format("%d/%m").to_string()
        }

        fn long_date(&self, d: NaiveDate) -> String {
            d.to_string()
        }
    }

    #[test]
    fn weekday_names_come_from_the_formatter() {
        let holidays = NationalCalendar::brazil().holidays_with(2024, &NumberedWeekdays);
        assert_eq!(holidays[0].weekday_name(), "1");
        assert_eq!(holidays[3].weekday_name(), "7");
    }
}
