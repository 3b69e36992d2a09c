//! CLI module for the mdvault application
//!
//! This module handles the command-line interface: it reads its own input
//! state, calls the document manager's operations with plain values, and
//! re-renders from the manager's state after every mutating call.
use std::{
    fs::{self, read_to_string},
    io::{stdin, stdout, Write},
    path::Path,
    process::Command,
};

use console::style;
use log::info;
use shell_words::split;
use tempfile::Builder;

use crate::{
    render_markdown, Commands, Config, Document, DocumentManager, DocumentStore, Result, Theme,
    VaultError,
};

/// CLI application handler - processes commands and drives the DocumentManager
pub struct App {
    /// The document collection manager
    manager: DocumentManager,

    /// Store handle for the theme preference, independent of the collection
    store: DocumentStore,

    /// Application configuration
    config: Config,
}

impl App {
    /// Builds the application: opens the store, loads the collection, and
    /// selects the newest document.
    pub fn new(config: Config) -> Result<Self> {
        let store = DocumentStore::new(&config)?;
        let mut manager = DocumentManager::new(store.clone());
        manager.load()?;

        Ok(Self {
            manager,
            store,
            config,
        })
    }

    /// Run the CLI application with the given command
    pub fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::List { json } => self.list_documents(json)?,

            Commands::New { edit } => self.new_document(edit)?,

            Commands::View { index, html } => self.view_document(index, html)?,

            Commands::Edit {
                index,
                name,
                content,
                file,
            } => self.edit_document(index, name, content, file)?,

            Commands::Delete { index, force } => self.delete_document(index, force)?,

            Commands::Theme { set, toggle } => self.handle_theme(set, toggle)?,
        }

        Ok(())
    }

    fn list_documents(&self, json: bool) -> Result<()> {
        if json {
            let documents: Vec<&Document> = self.manager.reversed().map(|(_, doc)| doc).collect();
            println!("{}", serde_json::to_string_pretty(&documents)?);
            return Ok(());
        }

        if self.manager.documents().is_empty() {
            println!("No documents yet. Create one with `mdvault new`.");
            return Ok(());
        }

        for (index, doc) in self.manager.reversed() {
            let marker = if Some(index) == self.manager.selection() {
                "*"
            } else {
                " "
            };
            println!(
                "{} [{}] {}  {}",
                marker,
                style(index).cyan(),
                style(&doc.name).bold(),
                style(&doc.created_at).dim()
            );
        }
        Ok(())
    }

    fn new_document(&mut self, edit: bool) -> Result<()> {
        let index = self.manager.create();
        self.manager.select_last();

        let content = if edit {
            self.edit_in_editor("")?
        } else {
            String::new()
        };

        // An unsaved document would be discarded on the next run, so the
        // first save happens here.
        self.manager.commit_edit(None, content)?;

        let doc = self.manager.selected().ok_or(VaultError::NoSelection)?;
        println!(
            "Created {} at index {}",
            style(&doc.name).green(),
            style(index).cyan()
        );
        Ok(())
    }

    fn view_document(&mut self, index: Option<usize>, html: bool) -> Result<()> {
        if let Some(index) = index {
            self.manager.select(index)?;
        }
        let doc = self.manager.selected().ok_or(VaultError::NoSelection)?;

        println!(
            "{}  {}",
            style(&doc.name).bold(),
            style(&doc.created_at).dim()
        );
        println!();
        if html {
            print!("{}", render_markdown(&doc.content));
        } else {
            println!("{}", doc.content);
        }
        Ok(())
    }

    fn edit_document(
        &mut self,
        index: Option<usize>,
        name: Option<String>,
        content: Option<String>,
        file: Option<std::path::PathBuf>,
    ) -> Result<()> {
        if let Some(index) = index {
            self.manager.select(index)?;
        }
        let current = self
            .manager
            .selected()
            .ok_or(VaultError::NoSelection)?
            .content
            .clone();

        // Get content based on the provided options
        let new_content = match (content, file) {
            (Some(c), _) => c,
            (_, Some(file_path)) => {
                if !file_path.exists() {
                    return Err(VaultError::FileNotFound {
                        file_path: file_path.display().to_string(),
                    });
                }
                read_to_string(file_path)?
            }
            (None, None) => self.edit_in_editor(&current)?,
        };

        self.manager.commit_edit(name, new_content)?;

        let doc = self.manager.selected().ok_or(VaultError::NoSelection)?;
        println!("Saved {}", style(&doc.name).green());
        Ok(())
    }

    fn delete_document(&mut self, index: usize, force: bool) -> Result<()> {
        let name = self
            .manager
            .documents()
            .get(index)
            .map(|doc| doc.name.clone())
            .ok_or(VaultError::DocumentNotFound { index })?;

        if !force && !self.confirm_delete(&name)? {
            println!("Aborted.");
            return Ok(());
        }

        self.manager.delete(index)?;
        println!("Deleted {}", style(&name).red());

        match self.manager.selected() {
            Some(doc) => println!("Now selected: {}", style(&doc.name).bold()),
            None => println!("The vault is empty."),
        }
        Ok(())
    }

    fn confirm_delete(&self, name: &str) -> Result<bool> {
        print!("Delete {:?}? This cannot be undone. [y/N] ", name);
        stdout().flush()?;

        let mut answer = String::new();
        stdin().read_line(&mut answer)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    fn handle_theme(&self, set: Option<String>, toggle: bool) -> Result<()> {
        let current = self.store.load_theme()?;

        let next = if let Some(value) = set {
            Theme::from_name(&value).ok_or(VaultError::UnknownTheme { value })?
        } else if toggle {
            current.toggled()
        } else {
            println!("{}", current.as_str());
            return Ok(());
        };

        self.store.save_theme(next)?;
        println!("Theme set to {}", style(next.as_str()).bold());
        Ok(())
    }

    fn edit_in_editor(&self, initial: &str) -> Result<String> {
        // Create a temporary file with .md extension
        let temp_file = Builder::new().suffix(".md").tempfile()?;
        let temp_path = temp_file.path().to_path_buf();

        fs::write(&temp_path, initial)?;

        // Get editor from config or environment
        let editor_cmd = self.config.get_editor_command();

        info!("Opening editor to write document content. Save and exit when done...");
        self.launch_editor(&editor_cmd, &temp_path)?;

        Ok(read_to_string(&temp_path)?)
    }

    fn launch_editor(&self, editor_cmd: &str, file_path: &Path) -> Result<()> {
        // Handle shell-like command parsing
        let args = split(editor_cmd).map_err(|e| VaultError::EditorError {
            message: format!("Failed to parse editor command: {}", e),
        })?;

        if args.is_empty() {
            return Err(VaultError::EditorError {
                message: "Empty editor command".to_string(),
            });
        }

        let status = Command::new(&args[0])
            .args(&args[1..])
            .arg(file_path)
            .status()
            .map_err(|e| VaultError::EditorError {
                message: format!("Failed to launch editor '{}': {}", args[0], e),
            })?;

        if !status.success() {
            return Err(VaultError::EditorError {
                message: format!("Editor exited with status: {}", status),
            });
        }

        Ok(())
    }
}
