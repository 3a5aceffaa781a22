//! Theme preference for the board.
//!
//! A single `light`/`dark` value with its own persistence lifecycle,
//! loaded once at startup and written on every change.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Board color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(Error::InvalidTheme(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_themes() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("DARK".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" dark ".parse::<Theme>().unwrap(), Theme::Dark);
    }

    #[test]
    fn rejects_unknown_theme() {
        let err = "sepia".parse::<Theme>().unwrap_err();
        match err {
            Error::InvalidTheme(value) => assert_eq!(value, "sepia"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn display_matches_persisted_form() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
