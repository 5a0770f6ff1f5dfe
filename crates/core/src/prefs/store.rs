//! Preference store backed by a TOML file

use super::schema::{BackgroundColor, Preferences};
use crate::error::Result;
use crate::fsutil::write_atomic;
use std::path::{Path, PathBuf};

/// File name of the preference record
pub const PREFS_FILE_NAME: &str = "preferences.toml";

/// Reads and writes the persisted preference record
///
/// Every accessor is a blocking call on the calling thread; there is exactly
/// one writer by construction, so no locking is involved.
#[derive(Debug, Clone)]
pub struct PrefStore {
    path: PathBuf,
}

impl PrefStore {
    /// Store in the platform config directory
    #[must_use]
    pub fn open_default() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bobs-pizza");
        Self::in_dir(dir)
    }

    /// Store inside an explicit directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(PREFS_FILE_NAME),
        }
    }

    /// Where the preference file lives on disk
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full record; absent file means defaults
    pub fn load(&self) -> Result<Preferences> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => {
                let prefs = toml::from_str(&text)
                    .map_err(|e| crate::Error::prefs_parse(&self.path).with_source(e))?;
                Ok(prefs)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Preferences::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Current background color, defaulting when unset
    pub fn background_color(&self) -> Result<BackgroundColor> {
        Ok(self.load()?.background_color)
    }

    /// Current large-text toggle, defaulting when unset
    pub fn use_large_text(&self) -> Result<bool> {
        Ok(self.load()?.use_large_text)
    }

    /// Persist a new background color, keeping the other keys
    pub fn set_background_color(&self, color: BackgroundColor) -> Result<()> {
        let mut prefs = self.load()?;
        prefs.background_color = color;
        self.save(&prefs)
    }

    /// Persist the large-text toggle, keeping the other keys
    pub fn set_use_large_text(&self, on: bool) -> Result<()> {
        let mut prefs = self.load()?;
        prefs.use_large_text = on;
        self.save(&prefs)
    }

    fn save(&self, prefs: &Preferences) -> Result<()> {
        tracing::debug!(path = %self.path.display(), "saving preferences");
        let text = toml::to_string_pretty(prefs)?;
        write_atomic(&self.path, &text)
    }
}
