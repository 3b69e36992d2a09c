//! Shared types for the mdvault application.
use std::path::PathBuf;

use clap::Subcommand;

use crate::VaultError;

/// A specialized Result type for mdvault operations.
pub type Result<T> = std::result::Result<T, VaultError>;

/// Available subcommands for the mdvault application
#[derive(Subcommand)]
pub enum Commands {
    /// List documents, newest first
    List {
        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Create a new untitled document and save it
    New {
        /// Open the new document in the editor before the first save
        #[clap(short, long)]
        edit: bool,
    },

    /// Print a document
    View {
        /// Index of the document (defaults to the current selection)
        index: Option<usize>,

        /// Render the markdown body to HTML
        #[clap(long)]
        html: bool,
    },

    /// Edit a document and save the collection
    Edit {
        /// Index of the document (defaults to the current selection)
        index: Option<usize>,

        /// New name for the document
        #[clap(short, long)]
        name: Option<String>,

        /// New content for the document
        #[clap(short, long)]
        content: Option<String>,

        /// Path to a file containing the new content
        #[clap(short, long)]
        file: Option<PathBuf>,
    },

    /// Delete a document by index
    Delete {
        /// Index of the document to delete
        index: usize,

        /// Skip confirmation prompt
        #[clap(short, long)]
        force: bool,
    },

    /// Show or change the colour theme
    Theme {
        /// Set the theme to "light" or "dark"
        #[clap(short, long)]
        set: Option<String>,

        /// Flip between light and dark
        #[clap(short, long)]
        toggle: bool,
    },
}
