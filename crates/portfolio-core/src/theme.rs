//! Theme Preference
//!
//! Light/dark theme flag, persisted as a small JSON file in the data
//! directory so the choice survives restarts. This is the only persisted
//! state in the whole application.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// Color theme for the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value for the page's `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(PortfolioError::UnknownTheme(other.to_string())),
        }
    }
}

/// On-disk storage for the theme flag.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

#[derive(Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

impl ThemeStore {
    /// Store rooted at `data_dir`; the directory is created lazily on the
    /// first save.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("theme.json"),
        }
    }

    /// Load the saved preference. `Ok(None)` when none was ever saved.
    pub fn load(&self) -> Result<Option<Theme>, PortfolioError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let file: ThemeFile = serde_json::from_str(&raw)?;
        Ok(Some(file.theme))
    }

    /// Persist the preference, overwriting any previous value.
    pub fn save(&self, theme: Theme) -> Result<(), PortfolioError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let raw = serde_json::to_string_pretty(&ThemeFile { theme })?;
        std::fs::write(&self.path, raw)?;
        tracing::debug!(theme = theme.as_str(), "theme preference saved");
        Ok(())
    }
}
