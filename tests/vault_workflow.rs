//! End-to-end workflow tests driving the document manager against a real
//! on-disk store.

use mdvault::{Config, DocumentManager, DocumentStore, Theme, VaultError};
use tempfile::{tempdir, TempDir};

fn open_manager(dir: &TempDir) -> DocumentManager {
    let config = Config::with_data_dir(dir.path().to_path_buf());
    let store = DocumentStore::new(&config).unwrap();
    let mut manager = DocumentManager::new(store);
    manager.load().unwrap();
    manager
}

#[test]
fn edits_survive_reopening_the_vault() {
    let dir = tempdir().unwrap();

    let mut manager = open_manager(&dir);
    let index = manager.create();
    manager.select(index).unwrap();
    manager
        .commit_edit(Some("journal.md".into()), "# Day one".into())
        .unwrap();

    let mut reopened = open_manager(&dir);
    assert_eq!(reopened.documents().len(), 1);
    let doc = reopened.selected().expect("newest document is selected");
    assert_eq!(doc.name, "journal.md");
    assert_eq!(doc.content, "# Day one");

    // The creation date was set once and survives the round trip untouched.
    let created_at = doc.created_at.clone();
    reopened.commit_edit(None, "# Day one, amended".into()).unwrap();
    let reread = open_manager(&dir);
    assert_eq!(reread.selected().unwrap().created_at, created_at);
}

#[test]
fn unsaved_document_is_discarded_across_restart() {
    let dir = tempdir().unwrap();

    let mut manager = open_manager(&dir);
    manager.create();
    assert_eq!(manager.documents().len(), 1);
    drop(manager);

    let reopened = open_manager(&dir);
    assert!(reopened.documents().is_empty());
    assert_eq!(reopened.selection(), None);
}

#[test]
fn deletion_persists_and_preserves_remaining_order() {
    let dir = tempdir().unwrap();

    let mut manager = open_manager(&dir);
    for name in ["a.md", "b.md", "c.md"] {
        let index = manager.create();
        manager.select(index).unwrap();
        manager.commit_edit(Some(name.into()), String::new()).unwrap();
    }

    let mut reopened = open_manager(&dir);
    reopened.delete(1).unwrap();
    assert_eq!(reopened.selected().unwrap().name, "c.md");

    let reread = open_manager(&dir);
    let names: Vec<&str> = reread
        .documents()
        .iter()
        .map(|doc| doc.name.as_str())
        .collect();
    assert_eq!(names, ["a.md", "c.md"]);
}

#[test]
fn emptied_vault_rejects_edits_until_a_new_document_exists() {
    let dir = tempdir().unwrap();

    let mut manager = open_manager(&dir);
    let index = manager.create();
    manager.select(index).unwrap();
    manager.commit_edit(None, "only one".into()).unwrap();

    manager.delete(0).unwrap();
    assert!(matches!(
        manager.commit_edit(None, "ghost".into()),
        Err(VaultError::NoSelection)
    ));

    let index = manager.create();
    manager.select(index).unwrap();
    manager.commit_edit(None, "fresh start".into()).unwrap();
    assert_eq!(manager.selected().unwrap().content, "fresh start");
}

#[test]
fn theme_preference_is_independent_of_the_collection() {
    let dir = tempdir().unwrap();
    let config = Config::with_data_dir(dir.path().to_path_buf());
    let store = DocumentStore::new(&config).unwrap();

    store.save_theme(Theme::Dark).unwrap();

    let mut manager = DocumentManager::new(store.clone());
    manager.load().unwrap();
    let index = manager.create();
    manager.select(index).unwrap();
    manager.commit_edit(None, "content".into()).unwrap();
    manager.delete(0).unwrap();

    assert_eq!(store.load_theme().unwrap(), Theme::Dark);
}
