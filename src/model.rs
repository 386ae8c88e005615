use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of phone number a contact entry holds.
///
/// Serialized by variant name so the on-disk label is one of
/// `"Work"`, `"Cellphone"`, `"Home"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactType {
    Work,
    Cellphone,
    Home,
}

/// Direction applied when ordering the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortType {
    Ascending,
    Descending,
}

/// Field the collection is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriteria {
    FirstName,
    LastName,
}

/// One person's contact details.
///
/// The `id` doubles as the storage filename, so it must stay unique even
/// for contacts carrying identical names and numbers; it is generated at
/// construction time and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    #[serde(rename = "type")]
    pub kind: ContactType,
}

impl Contact {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        kind: ContactType,
    ) -> Self {
        // A random UUID plus the current UTC milliseconds; two contacts
        // created with identical data still get distinct ids.
        let id = format!("{}{}", Uuid::new_v4(), Utc::now().timestamp_millis());
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            kind,
        }
    }

    /// Immutable identity of the persisted record.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Computed on access, never stored.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_data_gets_distinct_ids() {
        let a = Contact::new("Jane", "Doe", "555-0100", ContactType::Work);
        let b = Contact::new("Jane", "Doe", "555-0100", ContactType::Work);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_full_name_is_derived() {
        let contact = Contact::new("Jane", "Doe", "555-0100", ContactType::Home);
        assert_eq!(contact.full_name(), "Jane Doe");
    }

    #[test]
    fn test_serialized_field_names() {
        let contact = Contact::new("Jane", "Doe", "555-0100", ContactType::Cellphone);
        let json = serde_json::to_string(&contact).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["id"], contact.id());
        assert_eq!(value["firstName"], "Jane");
        assert_eq!(value["lastName"], "Doe");
        assert_eq!(value["phoneNumber"], "555-0100");
        assert_eq!(value["type"], "Cellphone");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let contact = Contact::new("Ada", "Lovelace", "555-0199", ContactType::Work);
        let json = serde_json::to_string(&contact).unwrap();
        let parsed: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(contact, parsed);
    }
}
