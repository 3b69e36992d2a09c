use log::{debug, info};

use crate::{Document, DocumentStore, Result, VaultError};

/// Owns the in-memory document collection and the current selection.
///
/// The collection keeps insertion order (oldest first) and the selection is
/// re-derived on every structural change, so it never dangles. Creation is
/// memory-only; durability happens on [`commit_edit`](Self::commit_edit) and
/// [`delete`](Self::delete), which persist the whole collection through the
/// injected [`DocumentStore`]. When a save fails, the in-memory state keeps
/// the mutation and remains the source of truth until a later save succeeds.
pub struct DocumentManager {
    /// Persistence adapter for the collection
    store: DocumentStore,

    /// Ordered documents, oldest first
    collection: Vec<Document>,

    /// Index of the currently selected document, if any
    selection: Option<usize>,
}

impl DocumentManager {
    /// Creates a manager with an empty collection and no selection.
    pub fn new(store: DocumentStore) -> Self {
        Self {
            store,
            collection: Vec::new(),
            selection: None,
        }
    }

    /// Replaces the collection with the stored one and selects the newest
    /// document. A store with no prior save yields an empty collection.
    pub fn load(&mut self) -> Result<()> {
        self.collection = self.store.load_collection()?.unwrap_or_default();
        self.selection = self.collection.len().checked_sub(1);
        info!(
            "Loaded {} documents, selection: {:?}",
            self.collection.len(),
            self.selection
        );
        Ok(())
    }

    /// Selects the document at `index`.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.collection.len() {
            return Err(VaultError::DocumentNotFound { index });
        }
        self.selection = Some(index);
        Ok(())
    }

    /// Selects the newest document, if any exists.
    pub fn select_last(&mut self) {
        self.selection = self.collection.len().checked_sub(1);
    }

    /// Appends a fresh untitled document and returns its index.
    ///
    /// The selection is left untouched and nothing is persisted; an unsaved
    /// document is discarded by the next [`load`](Self::load).
    pub fn create(&mut self) -> usize {
        self.collection.push(Document::new());
        let index = self.collection.len() - 1;
        debug!("Created document at index {}", index);
        index
    }

    /// Applies an edit to the selected document and persists the collection.
    ///
    /// The content is replaced unconditionally; the name only changes when a
    /// non-empty one is supplied. Fails without touching the collection when
    /// nothing is selected. This is the only edit path that writes durable
    /// storage.
    pub fn commit_edit(&mut self, name: Option<String>, content: String) -> Result<()> {
        let index = self.selection.ok_or(VaultError::NoSelection)?;

        let document = &mut self.collection[index];
        document.content = content;
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            document.name = name;
        }

        info!("Committing edit to document at index {}", index);
        self.store.save_collection(&self.collection)
    }

    /// Removes the document at `index`, re-derives the selection, and
    /// persists the updated collection.
    ///
    /// The selection moves to the document now occupying the removed slot,
    /// or to the new last document when the removed one was last; deleting
    /// the sole document clears the selection.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        if index >= self.collection.len() {
            return Err(VaultError::DocumentNotFound { index });
        }

        let removed = self.collection.remove(index);
        info!("Deleted document {:?} at index {}", removed.name, index);

        self.selection = if self.collection.is_empty() {
            None
        } else {
            Some(index.min(self.collection.len() - 1))
        };

        self.store.save_collection(&self.collection)
    }

    /// Newest-first view of the collection, paired with each document's
    /// stable index. Does not mutate the underlying order.
    pub fn reversed(&self) -> impl Iterator<Item = (usize, &Document)> {
        self.collection.iter().enumerate().rev()
    }

    /// The documents in storage order, oldest first.
    pub fn documents(&self) -> &[Document] {
        &self.collection
    }

    /// Index of the currently selected document, if any.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// The currently selected document, if any.
    pub fn selected(&self) -> Option<&Document> {
        self.selection.and_then(|index| self.collection.get(index))
    }
}
