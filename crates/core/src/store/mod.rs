//! Tour Store - persistence for tour records
//!
//! The store owns the `tours` schema and every read and write against it.
//! It performs no validation: drafts are trusted to satisfy the tour
//! invariants already.

use crate::error::Result;
use crate::types::{Tour, TourDraft, TourId};

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteTourStore;

/// Persistence operations over the tour collection
pub trait TourStore {
    /// Ensure the schema exists. Safe to call on every startup.
    fn initialize(&self) -> Result<()>;

    /// Persist a new tour, returning its freshly assigned identifier
    fn create(&self, draft: &TourDraft) -> Result<TourId>;

    /// Every tour, ascending by start date
    fn list_all(&self) -> Result<Vec<Tour>>;

    /// Fetch a single tour
    fn get(&self, id: TourId) -> Result<Option<Tour>>;

    /// Overwrite all editable fields of `id`. Unknown ids are ignored.
    fn update(&self, id: TourId, draft: &TourDraft) -> Result<()>;

    /// Remove `id`. Unknown ids are ignored.
    fn delete(&self, id: TourId) -> Result<()>;

    /// Tours whose destination, country, operator or hotel contains `term`,
    /// ordered like [`TourStore::list_all`]
    fn search(&self, term: &str) -> Result<Vec<Tour>>;
}
