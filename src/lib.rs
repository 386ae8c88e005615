//! # Rolodex Architecture
//!
//! Rolodex is a **UI-agnostic contact-book library**. List views and edit
//! forms are clients: they call the public operations here and render the
//! results, and carry no business logic of their own.
//!
//! ## The Two-Layer Core
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Manager Layer (manager.rs)                                 │
//! │  - Owns the authoritative in-memory sorted collection       │
//! │  - Enforces sort order across create/update/delete          │
//! │  - Delegates durability to the store on every mutation      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ContactStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! │  - Pure serialization + filesystem I/O, no business rules   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Control flow: a caller invokes a [`manager::ContactManager`] operation,
//! the manager mutates its in-memory state and asks the store to persist or
//! delete the backing file, then returns. Disk is read exactly once, when
//! the manager is constructed; all later reads serve from memory.
//!
//! ## Concurrency Model
//!
//! Single-threaded, synchronous, blocking: every operation runs to
//! completion before returning. The manager is mutable owned state with one
//! owner; callers needing cross-thread access must wrap it in their own
//! lock.
//!
//! ## Error Handling
//!
//! Storage operations return typed [`error::Result`] values rather than
//! swallowing failures, so the caller can tell a persisted mutation from a
//! failed one. The single exception is bulk retrieval, which logs and skips
//! individually unreadable files instead of failing the whole load.
//!
//! ## Module Overview
//!
//! - [`manager`]: The sorted collection and its CRUD + sort operations
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Contact`, `ContactType`, sort config)
//! - [`init`]: Default storage-location resolution
//! - [`error`]: Error types

pub mod error;
pub mod init;
pub mod manager;
pub mod model;
pub mod store;

pub use error::{ContactError, Result};
pub use manager::ContactManager;
pub use model::{Contact, ContactType, SortCriteria, SortType};
pub use store::fs::FileStore;
pub use store::memory::InMemoryStore;
pub use store::ContactStore;
