//! Preference schema definitions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text size (size units) when large text is enabled
pub const LARGE_TEXT_SIZE: u32 = 24;

/// Text size (size units) when large text is disabled
pub const NORMAL_TEXT_SIZE: u32 = 16;

/// Background color choice for the order screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundColor {
    /// Plain white background
    Default,
    /// Soft red
    Red,
    /// Soft blue
    Blue,
    /// Soft green
    Green,
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self::Default
    }
}

impl BackgroundColor {
    /// All color choices, in the order the preferences screen lists them
    pub const ALL: &'static [BackgroundColor] = &[
        BackgroundColor::Default,
        BackgroundColor::Red,
        BackgroundColor::Blue,
        BackgroundColor::Green,
    ];

    /// Display value as a hex color string
    #[must_use]
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Default => "#ffffff",
            Self::Red => "#fab1a0",
            Self::Blue => "#83ecec",
            Self::Green => "#55efc4",
        }
    }

    /// Display value as RGB components
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Default => (255, 255, 255),
            Self::Red => (250, 177, 160),
            Self::Blue => (131, 236, 236),
            Self::Green => (85, 239, 196),
        }
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "Default"),
            Self::Red => write!(f, "Red"),
            Self::Blue => write!(f, "Blue"),
            Self::Green => write!(f, "Green"),
        }
    }
}

impl FromStr for BackgroundColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "default" => Ok(Self::Default),
            "red" => Ok(Self::Red),
            "blue" => Ok(Self::Blue),
            "green" => Ok(Self::Green),
            other => Err(
                Error::invalid_input(format!("Unknown background color: {}", other))
                    .with_suggestion("Use default, red, blue, or green"),
            ),
        }
    }
}

/// The full persisted preference record
///
/// Each field has a serde default, so a partial file (or no file at all)
/// yields the documented defaults for the missing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Preferences {
    /// Order screen background color
    #[serde(default)]
    pub background_color: BackgroundColor,

    /// Render labels at the large text size
    #[serde(default)]
    pub use_large_text: bool,
}

impl Preferences {
    /// Text size implied by the large-text toggle
    #[must_use]
    pub fn text_size(&self) -> u32 {
        if self.use_large_text {
            LARGE_TEXT_SIZE
        } else {
            NORMAL_TEXT_SIZE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color_maps_to_white() {
        let prefs = Preferences::default();
        assert_eq!(prefs.background_color, BackgroundColor::Default);
        assert_eq!(prefs.background_color.hex(), "#ffffff");
    }

    #[test]
    fn test_default_text_size_is_normal() {
        let prefs = Preferences::default();
        assert!(!prefs.use_large_text);
        assert_eq!(prefs.text_size(), NORMAL_TEXT_SIZE);
    }

    #[test]
    fn test_large_text_size() {
        let prefs = Preferences {
            use_large_text: true,
            ..Preferences::default()
        };
        assert_eq!(prefs.text_size(), LARGE_TEXT_SIZE);
    }

    #[test]
    fn test_color_hex_values() {
        assert_eq!(BackgroundColor::Red.hex(), "#fab1a0");
        assert_eq!(BackgroundColor::Blue.hex(), "#83ecec");
        assert_eq!(BackgroundColor::Green.hex(), "#55efc4");
    }

    #[test]
    fn test_hex_and_rgb_agree() {
        for color in BackgroundColor::ALL {
            let (r, g, b) = color.rgb();
            assert_eq!(color.hex(), format!("#{:02x}{:02x}{:02x}", r, g, b));
        }
    }

    #[test]
    fn test_color_parse() {
        assert_eq!(
            "green".parse::<BackgroundColor>().unwrap(),
            BackgroundColor::Green
        );
        assert!("purple".parse::<BackgroundColor>().is_err());
    }

    #[test]
    fn test_partial_file_takes_field_defaults() {
        let prefs: Preferences = toml::from_str("use_large_text = true").unwrap();
        assert_eq!(prefs.background_color, BackgroundColor::Default);
        assert!(prefs.use_large_text);
    }
}
