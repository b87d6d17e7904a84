//! Light/dark theme preference.
//!
//! The preference is a single stored string. Every storage failure is
//! logged and otherwise ignored; the in-memory theme keeps working.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::str::FromStr;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::study_engine::error::PreferenceError;

const APP_NAME: &str = "study_deck";
const THEME_FILE: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark  => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark  => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark"  => Ok(Theme::Dark),
            other   => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Where the theme string lives.
pub trait PreferenceStore {
    fn load(&self) -> Result<Option<String>, PreferenceError>;
    fn save(&mut self, value: &str) -> Result<(), PreferenceError>;
}

/// Plain-text file store, by default under the user config directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn default_location() -> Result<Self, PreferenceError> {
        let dir = dirs::config_dir().ok_or(PreferenceError::NoConfigDir)?;
        Ok(Self::new(dir.join(APP_NAME).join(THEME_FILE)))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Result<Option<String>, PreferenceError> {
        match fs::read_to_string(&self.path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, value: &str) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, value)?;
        Ok(())
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<String>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, PreferenceError> {
        Ok(self.value.clone())
    }

    fn save(&mut self, value: &str) -> Result<(), PreferenceError> {
        self.value = Some(value.to_string());
        Ok(())
    }
}

/// Startup theme: stored value, then the system signal, then [`Theme::Light`].
pub fn resolve_theme(store: &dyn PreferenceStore, system_prefers_dark: Option<bool>) -> Theme {
    match store.load() {
        Ok(Some(stored)) => match stored.parse::<Theme>() {
            Ok(theme) => return theme,
            Err(e) => warn!("ignoring stored theme: {e}"),
        },
        Ok(None) => {}
        Err(e) => warn!("could not read theme preference: {e}"),
    }
    match system_prefers_dark {
        Some(true)  => Theme::Dark,
        Some(false) => Theme::Light,
        None        => Theme::default(),
    }
}

/// Flip `current` and try to persist it. The flipped theme is returned even
/// if saving fails.
pub fn toggle_theme(store: &mut dyn PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    match store.save(next.as_str()) {
        Ok(()) => info!("theme set to {next}"),
        Err(e) => warn!("could not save theme preference: {e}"),
    }
    next
}
