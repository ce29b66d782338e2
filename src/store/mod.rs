//! Persistence of the editor text and share URLs.
//!
//! The text survives restarts through a [`StateStore`] and travels between
//! machines as a query parameter on a share URL.

mod share;

pub use share::{ShareUrl, TEXT_PARAM};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors from loading or saving state, or from share URLs.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access state file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("state file {} is malformed: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Where the editor text is kept between sessions.
pub trait StateStore {
    /// The saved text, or an empty string if nothing was saved yet.
    fn load(&self) -> Result<String, StoreError>;
    fn save(&mut self, text: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SavedState {
    #[serde(default)]
    text: String,
}

/// A JSON state file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl StateStore for FileStore {
    fn load(&self) -> Result<String, StoreError> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let state: SavedState =
            serde_json::from_str(&content).map_err(|source| StoreError::Format {
                path: self.path.clone(),
                source,
            })?;
        Ok(state.text)
    }

    fn save(&mut self, text: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let state = SavedState {
            text: text.to_string(),
        };
        let json = serde_json::to_string_pretty(&state).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "saved state");
        Ok(())
    }
}

/// An in-memory store, for embedding and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    text: String,
}

impl MemoryStore {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<String, StoreError> {
        Ok(self.text.clone())
    }

    fn save(&mut self, text: &str) -> Result<(), StoreError> {
        text.clone_into(&mut self.text);
        Ok(())
    }
}

/// The text an editor should open with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialText {
    pub text: String,
    /// Whether `text` differs from the store and should be saved.
    pub persist: bool,
}

/// Choose between text arriving in a share URL and the stored text.
///
/// The URL wins outright when nothing is stored or both agree. When both
/// are present and differ, `prefer_url(url_text, stored)` decides.
pub fn resolve_initial_text(
    from_url: Option<String>,
    stored: String,
    prefer_url: impl FnOnce(&str, &str) -> bool,
) -> InitialText {
    let Some(url_text) = from_url.filter(|text| !text.is_empty()) else {
        return InitialText {
            text: stored,
            persist: false,
        };
    };
    if stored.is_empty() || stored == url_text || prefer_url(&url_text, &stored) {
        InitialText {
            text: url_text,
            persist: true,
        }
    } else {
        InitialText {
            text: stored,
            persist: false,
        }
    }
}
