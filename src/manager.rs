//! The contact manager owns the single authoritative, sorted, in-memory
//! view of all contacts and mediates every mutation through the storage
//! layer. It is an explicit owned value: the hosting application constructs
//! one and hands out references, there is no global instance.

use crate::error::{ContactError, Result};
use crate::model::{Contact, SortCriteria, SortType};
use crate::store::ContactStore;
use std::cmp::Ordering;

type ChangeCallback = Box<dyn FnMut()>;

/// Sorted in-memory collection of contacts backed by a [`ContactStore`].
///
/// Generic over the storage backend:
/// - Production: `ContactManager<FileStore>`
/// - Testing: `ContactManager<InMemoryStore>`
pub struct ContactManager<S: ContactStore> {
    store: S,
    contacts: Vec<Contact>,
    sort_type: SortType,
    sort_criteria: SortCriteria,
    on_change: Option<ChangeCallback>,
}

impl<S: ContactStore> ContactManager<S> {
    /// Build the manager over `store`, seeding the collection from it and
    /// sorting per the defaults (ascending, first name). This is the only
    /// point where contacts are read back from storage; every later read
    /// serves from memory.
    pub fn new(store: S) -> Result<Self> {
        let contacts = store.retrieve_all()?;
        let mut manager = Self {
            store,
            contacts,
            sort_type: SortType::Ascending,
            sort_criteria: SortCriteria::FirstName,
            on_change: None,
        };
        manager.sort_contacts();
        Ok(manager)
    }

    /// The current collection, always in sort order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Register the callback invoked after each mutating operation
    /// completes. Fire-and-forget, no parameters; a presentation layer
    /// uses this to refresh its displayed lists.
    pub fn set_on_change(&mut self, callback: impl FnMut() + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Store the sort configuration and re-sort the whole collection.
    /// The pair is also used by later `create`/`update` insertions.
    pub fn sort(&mut self, sort_type: SortType, criteria: SortCriteria) {
        self.sort_type = sort_type;
        self.sort_criteria = criteria;
        self.sort_contacts();
        self.notify();
    }

    /// Persist the contact, then insert it at its sorted position.
    pub fn create(&mut self, contact: Contact) -> Result<()> {
        self.store.save(&contact)?;
        self.insert_sorted(contact);
        self.notify();
        Ok(())
    }

    /// Persist the updated contact and move it to its sorted position.
    /// The record is identified by the immutable id, so saving overwrites
    /// the existing file; an id matching no entry is an error.
    pub fn update(&mut self, contact: Contact) -> Result<()> {
        if !self.contacts.iter().any(|c| c.id() == contact.id()) {
            return Err(ContactError::ContactNotFound(contact.id().to_string()));
        }
        self.store.save(&contact)?;
        self.remove_matching(contact.id());
        self.insert_sorted(contact);
        self.notify();
        Ok(())
    }

    /// Delete the contact from storage and from the collection.
    /// Deleting an already-absent contact is a no-op.
    pub fn delete(&mut self, contact: &Contact) -> Result<()> {
        self.store.delete(contact.id())?;
        self.remove_matching(contact.id());
        self.notify();
        Ok(())
    }

    /// Delete every contact from storage and empty the collection.
    pub fn delete_all(&mut self) -> Result<()> {
        self.store.delete_all()?;
        self.contacts.clear();
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback();
        }
    }

    fn sort_contacts(&mut self) {
        let (sort_type, criteria) = (self.sort_type, self.sort_criteria);
        self.contacts
            .sort_by(|a, b| compare(a, b, sort_type, criteria));
    }

    // Ids are meant to be unique, but removal still sweeps every match
    fn remove_matching(&mut self, id: &str) {
        self.contacts.retain(|c| c.id() != id);
    }

    /// Insert before the first entry the new contact should precede under
    /// the current ordering, or append when there is none.
    fn insert_sorted(&mut self, contact: Contact) {
        let position = self.contacts.iter().position(|existing| {
            compare(&contact, existing, self.sort_type, self.sort_criteria) == Ordering::Less
        });
        match position {
            Some(index) => self.contacts.insert(index, contact),
            None => self.contacts.push(contact),
        }
    }
}

/// Case-insensitive comparison on the criteria field, direction per sort
/// type. Equal keys compare equal, so the stable sort keeps prior order.
fn compare(a: &Contact, b: &Contact, sort_type: SortType, criteria: SortCriteria) -> Ordering {
    let (key_a, key_b) = match criteria {
        SortCriteria::FirstName => (a.first_name.to_lowercase(), b.first_name.to_lowercase()),
        SortCriteria::LastName => (a.last_name.to_lowercase(), b.last_name.to_lowercase()),
    };
    match sort_type {
        SortType::Ascending => key_a.cmp(&key_b),
        SortType::Descending => key_b.cmp(&key_a),
    }
}
