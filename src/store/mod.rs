//! # Storage Layer
//!
//! This module defines the storage abstraction for rolodex. The
//! [`ContactStore`] trait allows the manager to work with different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing the manager
//! - Keep collection logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One JSON file per contact, filename = contact id
//!   - Rooted at a `Contacts` directory under a per-user data root
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! Contacts/
//! ├── {id}    # one self-describing JSON record per contact
//! └── {id}
//! ```
//!
//! Records carry their field names (`id`, `firstName`, `lastName`,
//! `phoneNumber`, `type`), so a file is readable on its own.

use crate::error::Result;
use crate::model::Contact;

pub mod fs;
pub mod memory;

/// Abstract interface for contact persistence.
///
/// Implementations must provide overwrite-by-id saves, bulk retrieval,
/// and idempotent deletion. Operations return typed results; the manager
/// decides what propagates to callers.
pub trait ContactStore {
    /// Save a contact (create or update; the id selects the record)
    fn save(&mut self, contact: &Contact) -> Result<()>;

    /// Load every stored contact, skipping unreadable records
    fn retrieve_all(&self) -> Result<Vec<Contact>>;

    /// Delete the record with the given id; absent records are a no-op
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Delete every record, leaving the store usable for later saves
    fn delete_all(&mut self) -> Result<()>;
}
