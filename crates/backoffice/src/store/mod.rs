//! # Storage Layer
//!
//! Records are kept per entity in insertion order. The [`Repository`] trait is
//! the only way the command layer touches collections; it is passed in
//! explicitly so tests and callers supply their own data instead of relying on
//! module-level state.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryRepository`]: `HashMap` of ordered vectors. Used by the
//!   CLI and by every command test.
//!
//! ## Seed Collections
//!
//! [`seed`] loads the built-in mock collections (or a user-supplied JSON file
//! of the same shape). Every seeded record goes through
//! [`crate::schema::validate`], so a repository never holds a record its
//! schema would reject.
//!
//! ```text
//! {
//!   "category": [ { "id": "<uuid>", "name": "...", ... }, ... ],
//!   "faq":      [ ... ]
//! }
//! ```

use uuid::Uuid;

use crate::error::Result;
use crate::model::Record;

pub mod memory;
pub mod seed;

/// Abstract interface for record storage, keyed by entity name.
///
/// `list` returns a snapshot; mutating it does not affect the store.
pub trait Repository {
    /// All records of an entity, in insertion order. Unknown entities are empty.
    fn list(&self, entity: &str) -> Result<Vec<Record>>;

    /// Get a record by id.
    fn get(&self, entity: &str, id: &Uuid) -> Result<Record>;

    /// Append a new record. Fails if the id is already taken.
    fn insert(&mut self, entity: &str, record: Record) -> Result<()>;

    /// Replace an existing record in place, keeping its position.
    fn replace(&mut self, entity: &str, record: Record) -> Result<()>;

    /// Remove a record permanently and return it.
    fn remove(&mut self, entity: &str, id: &Uuid) -> Result<Record>;
}
