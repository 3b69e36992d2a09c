//! Core data structures for the mdvault application.
//!
//! This module contains the primary types used throughout the application:
//! the Document record and the Theme preference.
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::format_date;

/// Name given to every freshly created document.
pub const DEFAULT_DOCUMENT_NAME: &str = "untitled-document.md";

/// Represents a single markdown document in the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Display/file label; mutable and not required to be unique
    pub name: String,
    /// Creation date formatted as DD-MM-YYYY, set once and never changed
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Document body in Markdown format
    pub content: String,
}

impl Document {
    /// Creates a fresh untitled document dated today, with empty content.
    pub fn new() -> Self {
        Document {
            name: DEFAULT_DOCUMENT_NAME.to_string(),
            created_at: format_date(Local::now().date_naive()),
            content: String::new(),
        }
    }
}

/// Colour theme preference, stored independently of the document collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The stored string form of the preference.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a stored preference string; unknown values yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_has_default_name_and_empty_content() {
        let doc = Document::new();
        assert_eq!(doc.name, DEFAULT_DOCUMENT_NAME);
        assert!(doc.content.is_empty());
    }

    #[test]
    fn new_document_date_is_day_month_year() {
        let doc = Document::new();
        let parts: Vec<&str> = doc.created_at.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 2);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 4);
    }

    #[test]
    fn document_serializes_with_camel_case_created_at() {
        let doc = Document::new();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn theme_round_trips_through_name() {
        assert_eq!(Theme::from_name("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_name("light"), Some(Theme::Light));
        assert_eq!(Theme::from_name("solarized"), None);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
