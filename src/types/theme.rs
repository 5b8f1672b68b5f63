//! Color-scheme preference

use serde::{Deserialize, Serialize};

/// User color-scheme preference
///
/// Persisted as the plain strings `"light"`, `"dark"`, `"system"` (not
/// JSON-encoded); anything unrecognized reads back as `System`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// The persisted string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Parse the persisted string form, defaulting to `System`
    pub fn from_stored(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            assert_eq!(Theme::from_stored(theme.as_str()), theme);
        }
    }

    #[test]
    fn test_unknown_theme_defaults_to_system() {
        assert_eq!(Theme::from_stored("solarized"), Theme::System);
        assert_eq!(Theme::from_stored(""), Theme::System);
    }
}
