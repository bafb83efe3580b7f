//! Color modes and the persisted theme preference.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The visual theme applied to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Returns the literal written to the store and the root attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// Returns `true` for [`ColorMode::Dark`].
    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the two mode literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color mode '{0}', expected 'dark' or 'light'")]
pub struct ParseColorModeError(pub String);

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ColorMode::Dark),
            "light" => Ok(ColorMode::Light),
            other => Err(ParseColorModeError(other.to_string())),
        }
    }
}

/// The user's durably stored choice, or its absence.
///
/// `Unset` is never written; it is the absence of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    Dark,
    Light,
    Unset,
}

impl ThemePreference {
    /// Interprets a raw stored value.
    ///
    /// An absent key or an empty string is `Unset`. A non-empty value that
    /// is not `"dark"` counts as `Light`: it is not dark, but it is still a
    /// concrete choice that shadows the ambient signal.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => ThemePreference::Unset,
            Some("dark") => ThemePreference::Dark,
            Some("light") => ThemePreference::Light,
            Some(other) => {
                tracing::warn!(value = other, "unrecognized stored theme, treating as light");
                ThemePreference::Light
            }
        }
    }

    /// Returns the concrete mode, if one is stored.
    pub fn mode(self) -> Option<ColorMode> {
        match self {
            ThemePreference::Dark => Some(ColorMode::Dark),
            ThemePreference::Light => Some(ColorMode::Light),
            ThemePreference::Unset => None,
        }
    }

    /// Returns `true` when no preference is stored.
    pub fn is_unset(self) -> bool {
        self == ThemePreference::Unset
    }
}

impl From<ColorMode> for ThemePreference {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Dark => ThemePreference::Dark,
            ColorMode::Light => ThemePreference::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_literals() {
        assert_eq!(ColorMode::Dark.as_str(), "dark");
        assert_eq!(ColorMode::Light.to_string(), "light");
        assert_eq!("dark".parse::<ColorMode>(), Ok(ColorMode::Dark));
        assert_eq!("light".parse::<ColorMode>(), Ok(ColorMode::Light));
    }

    #[test]
    fn test_mode_parse_rejects_other_values() {
        let err = "Dark".parse::<ColorMode>().unwrap_err();
        assert!(err.to_string().contains("Dark"));
    }

    #[test]
    fn test_toggled_inverts() {
        assert_eq!(ColorMode::Dark.toggled(), ColorMode::Light);
        assert_eq!(ColorMode::Light.toggled().toggled(), ColorMode::Light);
    }

    #[test]
    fn test_preference_from_stored() {
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Unset);
        assert_eq!(ThemePreference::from_stored(Some("")), ThemePreference::Unset);
        assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
    }

    #[test]
    fn test_unrecognized_preference_is_concrete_light() {
        let pref = ThemePreference::from_stored(Some("sepia"));
        assert_eq!(pref, ThemePreference::Light);
        assert!(!pref.is_unset());
    }

    #[test]
    fn test_preference_mode() {
        assert_eq!(ThemePreference::Dark.mode(), Some(ColorMode::Dark));
        assert_eq!(ThemePreference::Unset.mode(), None);
        assert_eq!(ThemePreference::from(ColorMode::Light), ThemePreference::Light);
    }
}
