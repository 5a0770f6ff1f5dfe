//! Preference-driven output theming
//!
//! The order screen of the original application tinted its background and
//! scaled its labels from the stored preferences. On a terminal the same
//! settings tint section headers and widen the receipt layout.

use owo_colors::{DynColors, OwoColorize};
use pizza_core::prefs::{BackgroundColor, Preferences};

/// How preference values render on the terminal
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    accent: Option<DynColors>,
    /// Insert a blank line between receipt entries
    pub large_text: bool,
}

impl Theme {
    /// Build a theme from the stored preferences
    #[must_use]
    pub fn from_prefs(prefs: &Preferences) -> Self {
        let accent = match prefs.background_color {
            // White on a terminal is no tint at all.
            BackgroundColor::Default => None,
            color => {
                let (r, g, b) = color.rgb();
                Some(DynColors::Rgb(r, g, b))
            }
        };

        Self {
            accent,
            large_text: prefs.use_large_text,
        }
    }

    /// Print a section header, tinted with the background color preference
    pub fn header(&self, text: &str) {
        println!();
        match self.accent {
            Some(accent) => println!("{}", text.bold().color(accent)),
            None => println!("{}", text.bold()),
        }
        println!("{}", "─".repeat(text.chars().count()));
    }

    /// Print a text block, widening the layout when large text is on
    pub fn print_block(&self, text: &str) {
        for line in text.lines() {
            println!("{}", line);
            if self.large_text && !line.is_empty() {
                println!();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefs_have_no_accent() {
        let theme = Theme::from_prefs(&Preferences::default());
        assert!(theme.accent.is_none());
        assert!(!theme.large_text);
    }

    #[test]
    fn test_color_pref_becomes_rgb_accent() {
        let prefs = Preferences {
            background_color: BackgroundColor::Red,
            use_large_text: false,
        };
        let theme = Theme::from_prefs(&prefs);
        assert!(matches!(theme.accent, Some(DynColors::Rgb(250, 177, 160))));
    }

    #[test]
    fn test_large_text_pref_carries_through() {
        let prefs = Preferences {
            background_color: BackgroundColor::Default,
            use_large_text: true,
        };
        assert!(Theme::from_prefs(&prefs).large_text);
    }
}
