use serde::{Deserialize, Serialize};

/// Hours in [AUTO_DARK_END_HOUR, AUTO_DARK_START_HOUR) are light under `Auto`.
pub const AUTO_DARK_END_HOUR: u32 = 6;
pub const AUTO_DARK_START_HOUR: u32 = 18;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the system color scheme.
    #[default]
    Default,
    Light,
    Dark,
    /// Dark at night in local civil time.
    Auto
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark"
        }
    }
}

pub fn resolve_theme(preference: ThemePreference, system_prefers_dark: bool, hour: u32) -> Theme {
    let is_dark = match preference {
        ThemePreference::Default => system_prefers_dark,
        ThemePreference::Auto => hour < AUTO_DARK_END_HOUR || hour >= AUTO_DARK_START_HOUR,
        ThemePreference::Light => false,
        ThemePreference::Dark => true
    };
    if is_dark { Theme::Dark } else { Theme::Light }
}
