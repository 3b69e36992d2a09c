use std::{
    fs,
    io::{ErrorKind, Write},
    path::PathBuf,
};

use log::{debug, error, info, warn};
use tempfile::NamedTempFile;

use crate::{Config, Document, Result, Theme, VaultError};

/// File name holding the serialized document collection.
const COLLECTION_KEY: &str = "documents.json";

/// File name holding the theme preference string.
const THEME_KEY: &str = "theme";

/// Persistence adapter for the document collection and theme preference.
///
/// Each stored value lives in its own file under the data directory. Every
/// write replaces the stored value wholesale; there is no incremental state.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    /// Directory holding the stored values
    data_dir: PathBuf,
}

impl DocumentStore {
    /// Creates a store rooted at the configured data directory, creating the
    /// directory if it does not exist yet.
    pub fn new(config: &Config) -> Result<Self> {
        if !config.data_dir.exists() {
            debug!(
                "Data directory does not exist, creating: {}",
                config.data_dir.display()
            );
            fs::create_dir_all(&config.data_dir).map_err(|e| {
                error!("Failed to create data directory: {}", e);
                VaultError::DirectoryError {
                    path: config.data_dir.clone(),
                }
            })?;
        }

        Ok(Self {
            data_dir: config.data_dir.clone(),
        })
    }

    /// Reads the full document collection.
    ///
    /// Returns `Ok(None)` when no collection has ever been saved; a missing
    /// store is a normal first run, not an error. Unreadable or malformed
    /// data is surfaced as an error.
    pub fn load_collection(&self) -> Result<Option<Vec<Document>>> {
        let path = self.key_path(COLLECTION_KEY);
        debug!("Loading collection from {}", path.display());

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No stored collection found, treating as first run");
                return Ok(None);
            }
            Err(e) => {
                error!("Failed to read collection file {}: {}", path.display(), e);
                return Err(VaultError::Io(e));
            }
        };

        let documents: Vec<Document> = serde_json::from_str(&raw).map_err(|e| {
            error!("Failed to parse collection file {}: {}", path.display(), e);
            VaultError::Serialization(e)
        })?;

        info!("Loaded {} documents from store", documents.len());
        Ok(Some(documents))
    }

    /// Serializes and atomically replaces the entire stored collection.
    pub fn save_collection(&self, documents: &[Document]) -> Result<()> {
        info!("Saving collection of {} documents", documents.len());

        let json = serde_json::to_string_pretty(documents).map_err(|e| {
            error!("Failed to serialize collection: {}", e);
            VaultError::Serialization(e)
        })?;

        self.write_key(COLLECTION_KEY, json.as_bytes())
    }

    /// Reads the stored theme preference.
    ///
    /// A missing or unrecognized value falls back to the light theme; theme
    /// loading never fails for absent data.
    pub fn load_theme(&self) -> Result<Theme> {
        let path = self.key_path(THEME_KEY);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Theme::default()),
            Err(e) => {
                error!("Failed to read theme file {}: {}", path.display(), e);
                return Err(VaultError::Io(e));
            }
        };

        match Theme::from_name(raw.trim()) {
            Some(theme) => Ok(theme),
            None => {
                warn!(
                    "Unrecognized theme value {:?}, falling back to light",
                    raw.trim()
                );
                Ok(Theme::default())
            }
        }
    }

    /// Stores the theme preference.
    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        debug!("Saving theme preference: {}", theme.as_str());
        self.write_key(THEME_KEY, theme.as_str().as_bytes())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(key)
    }

    /// Writes a value to its key file using a temp-file-then-rename sequence
    /// so readers never observe a partial write.
    fn write_key(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.key_path(key);

        let mut temp_file = NamedTempFile::new_in(&self.data_dir).map_err(|e| {
            error!("Failed to create temporary file: {}", e);
            VaultError::Io(e)
        })?;

        temp_file.write_all(bytes).map_err(|e| {
            error!("Failed to write to temporary file: {}", e);
            VaultError::Io(e)
        })?;

        temp_file.flush().map_err(|e| {
            error!("Failed to flush temporary file: {}", e);
            VaultError::Io(e)
        })?;

        temp_file.persist(&path).map_err(|e| {
            error!("Failed to persist file {}: {}", path.display(), e.error);
            VaultError::Io(e.error)
        })?;

        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}
