use std::fs::File;
use std::io::BufReader;

use chrono::{FixedOffset, TimeDelta};
use serde::Deserialize;

use crate::clock::civiltime::{brasilia_offset, BRASILIA_UTC_OFFSET_SECONDS};
use crate::clock::timesync::DEFAULT_RESYNC_INTERVAL_SECONDS;
use crate::configurationerror::ConfigurationError;
use crate::theme::theme::ThemePreference;

/// ISO 8601 offsets stay within ±18:00.
const MAX_UTC_OFFSET_MINUTES: u32 = 18 * 60;
const MAX_RESYNC_INTERVAL_SECONDS: u64 = 24 * 60 * 60;

fn default_utc_offset_minutes() -> i32 {
    BRASILIA_UTC_OFFSET_SECONDS / 60
}

fn default_resync_interval_seconds() -> u64 {
    DEFAULT_RESYNC_INTERVAL_SECONDS
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigurationJsonProp {
    #[serde(default = "default_utc_offset_minutes")]
    utc_offset_minutes: i32,
    #[serde(default)]
    theme: ThemePreference,
    #[serde(default)]
    system_prefers_dark: bool,
    #[serde(default = "default_resync_interval_seconds")]
    resync_interval_seconds: u64
}

#[derive(Debug, Clone)]
pub struct Configuration {
    utc_offset: FixedOffset,
    theme: ThemePreference,
    system_prefers_dark: bool,
    resync_interval: TimeDelta
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            utc_offset: brasilia_offset(),
            theme: ThemePreference::default(),
            system_prefers_dark: false,
            resync_interval: TimeDelta::seconds(DEFAULT_RESYNC_INTERVAL_SECONDS as i64)
        }
    }

    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn system_prefers_dark(&self) -> bool {
        self.system_prefers_dark
    }

    pub fn resync_interval(&self) -> TimeDelta {
        self.resync_interval
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Configuration::from_json_prop(json_prop)
    }

    pub fn from_reader(file_path: &str) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Configuration::from_json_prop(json_prop)
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<Configuration, ConfigurationError> {
        if json_prop.utc_offset_minutes.unsigned_abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(ConfigurationError::InvalidUtcOffset(json_prop.utc_offset_minutes));
        }
        let utc_offset = FixedOffset::east_opt(json_prop.utc_offset_minutes * 60)
            .ok_or(ConfigurationError::InvalidUtcOffset(json_prop.utc_offset_minutes))?;

        if json_prop.resync_interval_seconds == 0 || json_prop.resync_interval_seconds > MAX_RESYNC_INTERVAL_SECONDS {
            return Err(ConfigurationError::InvalidResyncInterval(json_prop.resync_interval_seconds));
        }

        Ok(Configuration {
            utc_offset,
            theme: json_prop.theme,
            system_prefers_dark: json_prop.system_prefers_dark,
            resync_interval: TimeDelta::seconds(json_prop.resync_interval_seconds as i64)
        })
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::clock::SystemClock;
    use crate::clock::timesync::{SyncedClock, UnconfiguredTimeSource};

    #[test]
    fn empty_object_uses_brasilia_defaults() {
        let config = Configuration::from_json_str("{}").unwrap();
        assert_eq!(config.utc_offset().local_minus_utc(), -3 * 3600);
        assert_eq!(config.theme(), ThemePreference::Default);
        assert!(!config.system_prefers_dark());
        assert_eq!(config.resync_interval(), TimeDelta::seconds(300));
    }

    #[test]
    fn explicit_fields() {
        let config = Configuration::from_json_str(
            r#"{ "utc_offset_minutes": -120, "theme": "auto", "system_prefers_dark": true, "resync_interval_seconds": 60 }"#
        ).unwrap();
        assert_eq!(config.utc_offset().local_minus_utc(), -2 * 3600);
        assert_eq!(config.theme(), ThemePreference::Auto);
        assert!(config.system_prefers_dark());
        assert_eq!(config.resync_interval(), TimeDelta::seconds(60));

        let clock = SyncedClock::new(SystemClock, UnconfiguredTimeSource)
            .with_resync_interval(config.resync_interval());
        assert_eq!(clock.resync_interval(), TimeDelta::seconds(60));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Configuration::from_json_str(r#"{ "utc_offset_minutes": 1200 }"#),
            Err(ConfigurationError::InvalidUtcOffset(1200))
        ));
        assert!(matches!(
            Configuration::from_json_str(r#"{ "resync_interval_seconds": 0 }"#),
            Err(ConfigurationError::InvalidResyncInterval(0))
        ));
        assert!(matches!(
            Configuration::from_json_str(r#"{ "theme": "sepia" }"#),
            Err(ConfigurationError::JsonParseError(_))
        ));
        assert!(matches!(
            Configuration::from_reader("/nonexistent/feriados.json"),
            Err(ConfigurationError::IOError(_))
        ));
    }
}
