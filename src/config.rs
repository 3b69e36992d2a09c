use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use which::which;

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory where the document collection and theme preference are stored
    pub data_dir: PathBuf,

    /// Default editor command used by the CLI edit flow
    pub editor_command: Option<String>,
}

impl Config {
    /// Builds a configuration rooted at the given data directory.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Config {
            data_dir,
            editor_command: None,
        }
    }

    // This method provides smart fallbacks when no editor is configured
    pub fn get_editor_command(&self) -> String {
        // First try the configured editor
        if let Some(editor) = &self.editor_command {
            return editor.clone();
        }

        // Then try environment variable
        if let Ok(editor) = std::env::var("EDITOR") {
            return editor;
        }

        // Fall back to platform defaults
        if cfg!(windows) {
            "notepad".to_string()
        } else if cfg!(target_os = "macos") {
            "open -t".to_string()
        } else {
            // Try common Linux editors
            for editor in &["nano", "vim", "vi", "emacs"] {
                if which(editor).is_ok() {
                    return editor.to_string();
                }
            }
            "nano".to_string()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = ProjectDirs::from("", "", "mdvault")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".mdvault"));

        Config {
            data_dir,
            editor_command: None,
        }
    }
}
