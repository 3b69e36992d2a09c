//! Markdown document vault library
//!
//! This library provides functionality for keeping an ordered collection of
//! markdown documents persisted on disk, with a selection/create/edit/delete
//! workflow and a light/dark theme preference.

mod cli;
mod config;
mod document;
mod errors;
mod helper;
mod manager;
mod storage;
mod types;

// Re-export key components
pub use cli::*;
pub use config::*;
pub use document::*;
pub use errors::*;
pub use helper::*;
pub use manager::*;
pub use storage::*;
pub use types::*;
