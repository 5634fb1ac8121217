use std::env;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use chrono::{Datelike, Timelike};
use log::error;

use feriados::clock::civiltime::civil_now;
use feriados::clock::clock::{Clock, SystemClock};
use feriados::clock::timesync::{SyncedClock, UnconfiguredTimeSource};
use feriados::configuration::Configuration;
use feriados::format::dateformatter::PortugueseDateFormatter;
use feriados::format::message::{clock_text, date_text, next_holiday_text};
use feriados::format::report::Report;
use feriados::holiday::nationalcalendar::NationalCalendar;
use feriados::holiday::nextholiday::upcoming_holiday;
use feriados::theme::theme::resolve_theme;

const USAGE: &str = "usage: feriados [--json | --watch] [config.json]";

#[derive(PartialEq, Eq, Clone, Copy)]
enum OutputMode {
    Text,
    Json,
    Watch
}

fn print_text(clock: &dyn Clock, config: &Configuration, calendar: &NationalCalendar) {
    let formatter = PortugueseDateFormatter;
    let now = civil_now(clock, config.utc_offset());
    let theme = resolve_theme(config.theme(), config.system_prefers_dark(), now.hour());

    println!("{}", clock_text(now, &formatter));
    println!("{}", date_text(now, &formatter));
    println!("tema: {}", theme.as_str());
    println!();

    let countdown = upcoming_holiday(now.date(), calendar);
    println!("{}", next_holiday_text(&countdown, &formatter));
    println!();

    for holiday in calendar.holidays(now.year()) {
        println!("{:>2}/{:02}  {:<14}  {}", holiday.day(), holiday.month(), holiday.weekday_name(), holiday.name());
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let mut mode = OutputMode::Text;
    let mut config_path: Option<String> = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => mode = OutputMode::Json,
            "--watch" => mode = OutputMode::Watch,
            _ if arg.starts_with("--") || config_path.is_some() => {
                eprintln!("{}", USAGE);
                return ExitCode::FAILURE;
            },
            _ => config_path = Some(arg)
        }
    }

    let config = match config_path {
        Some(config_path) => match Configuration::from_reader(&config_path) {
            Ok(config) => config,
            Err(err) => {
                error!("{}: {}", config_path, err);
                return ExitCode::FAILURE;
            }
        },
        None => Configuration::new()
    };

    let clock = SyncedClock::new(SystemClock, UnconfiguredTimeSource)
        .with_resync_interval(config.resync_interval());
    // A failed sync is logged and leaves the clock on local time.
    let _ = clock.sync_if_due();

    let calendar = NationalCalendar::brazil();
    match mode {
        OutputMode::Text => print_text(&clock, &config, &calendar),
        OutputMode::Json => {
            let now = civil_now(&clock, config.utc_offset());
            let report = Report::new(
                now,
                &calendar,
                &PortugueseDateFormatter,
                config.theme(),
                config.system_prefers_dark()
            );
            match report.to_json() {
                Ok(json) => println!("{}", json),
                Err(err) => {
                    error!("cannot serialize report: {}", err);
                    return ExitCode::FAILURE;
                }
            }
        },
        OutputMode::Watch => {
            let formatter = PortugueseDateFormatter;
            loop {
                let _ = clock.sync_if_due();
                let now = civil_now(&clock, config.utc_offset());
                let countdown = upcoming_holiday(now.date(), &calendar);
                println!("{}  {}", clock_text(now, &formatter), next_holiday_text(&countdown, &formatter));
                thread::sleep(Duration::from_secs(1));
            }
        }
    }
    ExitCode::SUCCESS
}
