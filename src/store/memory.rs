use super::ContactStore;
use crate::error::Result;
use crate::model::Contact;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: HashMap<String, Contact>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for InMemoryStore {
    fn save(&mut self, contact: &Contact) -> Result<()> {
        self.contacts
            .insert(contact.id().to_string(), contact.clone());
        Ok(())
    }

    fn retrieve_all(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.values().cloned().collect())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        self.contacts.remove(id);
        Ok(())
    }

    fn delete_all(&mut self) -> Result<()> {
        self.contacts.clear();
        Ok(())
    }
}
