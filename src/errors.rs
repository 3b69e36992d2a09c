//! Error types for the mdvault application.
//!
//! This module defines custom error types that categorize different failures
//! that can occur during document management operations.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for the mdvault application.
#[derive(Error, Debug)]
pub enum VaultError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An edit was committed while no document is selected.
    #[error("No document is selected")]
    NoSelection,

    /// An operation referenced an index outside the collection.
    #[error("No document at index {index}")]
    DocumentNotFound { index: usize },

    /// Directory creation or access failed.
    #[error("Failed to create or access directory: {path}")]
    DirectoryError { path: PathBuf },

    /// A theme value outside "light"/"dark" was supplied.
    #[error("Unknown theme: {value} (expected \"light\" or \"dark\")")]
    UnknownTheme { value: String },

    /// file not found
    #[error("File not found: {file_path}")]
    FileNotFound { file_path: String },

    #[error("{message}")]
    EditorError { message: String },
}
