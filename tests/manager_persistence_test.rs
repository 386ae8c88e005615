use rolodex::store::fs::FileStore;
use rolodex::{Contact, ContactManager, ContactType, SortCriteria, SortType};
use tempfile::TempDir;

fn store_at(dir: &TempDir) -> FileStore {
    FileStore::new(dir.path().join("Contacts")).unwrap()
}

#[test]
fn test_fresh_manager_sees_persisted_contacts_sorted() {
    let dir = TempDir::new().unwrap();

    {
        let mut manager = ContactManager::new(store_at(&dir)).unwrap();
        manager
            .create(Contact::new("Bob", "Ames", "111", ContactType::Cellphone))
            .unwrap();
        manager
            .create(Contact::new("Alice", "Zed", "222", ContactType::Home))
            .unwrap();
    }

    let manager = ContactManager::new(store_at(&dir)).unwrap();
    let names: Vec<&str> = manager
        .contacts()
        .iter()
        .map(|c| c.first_name.as_str())
        .collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[test]
fn test_update_is_visible_after_reload() {
    let dir = TempDir::new().unwrap();
    let contact = Contact::new("Bob", "Ames", "111", ContactType::Work);

    {
        let mut manager = ContactManager::new(store_at(&dir)).unwrap();
        manager.create(contact.clone()).unwrap();

        let mut updated = contact.clone();
        updated.first_name = "Aaron".to_string();
        manager.update(updated).unwrap();
    }

    let manager = ContactManager::new(store_at(&dir)).unwrap();
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.contacts()[0].first_name, "Aaron");
    assert_eq!(manager.contacts()[0].id(), contact.id());
}

#[test]
fn test_delete_all_yields_empty_collection_on_reload() {
    let dir = TempDir::new().unwrap();

    {
        let mut manager = ContactManager::new(store_at(&dir)).unwrap();
        manager
            .create(Contact::new("Alice", "Zed", "222", ContactType::Home))
            .unwrap();
        manager
            .create(Contact::new("Bob", "Ames", "111", ContactType::Work))
            .unwrap();
        manager.delete_all().unwrap();
    }

    let manager = ContactManager::new(store_at(&dir)).unwrap();
    assert!(manager.is_empty());
}

#[test]
fn test_sort_configuration_survives_only_in_memory() {
    let dir = TempDir::new().unwrap();

    {
        let mut manager = ContactManager::new(store_at(&dir)).unwrap();
        manager
            .create(Contact::new("Alice", "Zed", "222", ContactType::Home))
            .unwrap();
        manager
            .create(Contact::new("Bob", "Ames", "111", ContactType::Work))
            .unwrap();
        manager.sort(SortType::Descending, SortCriteria::FirstName);

        let names: Vec<&str> = manager
            .contacts()
            .iter()
            .map(|c| c.first_name.as_str())
            .collect();
        assert_eq!(names, vec!["Bob", "Alice"]);
    }

    // A fresh manager starts back at the defaults (ascending, first name)
    let manager = ContactManager::new(store_at(&dir)).unwrap();
    let names: Vec<&str> = manager
        .contacts()
        .iter()
        .map(|c| c.first_name.as_str())
        .collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}
