//! SQLite-backed [`TourStore`]
//!
//! # Connection model
//!
//! Each operation opens a fresh connection, runs a single statement and
//! drops the connection again. Nothing is pooled, no transaction is held
//! across calls, and failures surface to the caller as a
//! [`StoreError`](crate::error::StoreError) without retries.
//!
//! # Ordering
//!
//! Listings are sorted by the raw `start_date` text, so the order is only
//! calendar-correct when every date uses one lexically sortable format such
//! as `YYYY-MM-DD`. Ties fall back to insertion order.

use super::TourStore;
use crate::error::Result;
use crate::types::{Tour, TourDraft, TourId};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const TOUR_COLUMNS: &str = "id, destination, country, duration_days, price, start_date, \
                            tour_operator, hotel_name, created_at";

/// Tour store backed by a single SQLite file
#[derive(Debug, Clone)]
pub struct SqliteTourStore {
    path: PathBuf,
}

impl SqliteTourStore {
    /// Point a store at `path` without touching the file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create or open a store at the specified path and ensure the schema
    ///
    /// # Arguments
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    /// * `Ok(SqliteTourStore)` - Schema is in place
    /// * `Err(StoreError)` - Directory or database could not be prepared
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        info!(path = %path.display(), "Opening tour store");

        let store = Self::new(path);
        store.initialize()?;
        Ok(store)
    }

    /// Get the database path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(conn)
    }

    fn row_to_tour(row: &Row<'_>) -> rusqlite::Result<Tour> {
        Ok(Tour {
            id: TourId(row.get(0)?),
            destination: row.get(1)?,
            country: row.get(2)?,
            duration_days: row.get(3)?,
            price: row.get(4)?,
            start_date: row.get(5)?,
            tour_operator: row.get(6)?,
            hotel_name: row.get(7)?,
            created_at: row.get(8)?,
        })
    }
}

/// Escape LIKE wildcards so `term` is matched literally
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl TourStore for SqliteTourStore {
    fn initialize(&self) -> Result<()> {
        // Create parent directories if they don't exist
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = self.connect()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS tours (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                destination TEXT NOT NULL,
                country TEXT NOT NULL,
                duration_days INTEGER NOT NULL,
                price REAL NOT NULL,
                start_date TEXT NOT NULL,
                tour_operator TEXT NOT NULL,
                hotel_name TEXT,
                created_at TEXT DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )?;

        debug!(path = %self.path.display(), "Tour schema ready");
        Ok(())
    }

    fn create(&self, draft: &TourDraft) -> Result<TourId> {
        let conn = self.connect()?;
        conn.execute(
            r#"
            INSERT INTO tours (
                destination, country, duration_days, price,
                start_date, tour_operator, hotel_name
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                draft.destination,
                draft.country,
                draft.duration_days,
                draft.price,
                draft.start_date,
                draft.tour_operator,
                draft.hotel_name,
            ],
        )?;

        let id = TourId(conn.last_insert_rowid());

        debug!(tour_id = %id, destination = %draft.destination, "Tour created");
        Ok(id)
    }

    fn list_all(&self) -> Result<Vec<Tour>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {TOUR_COLUMNS} FROM tours ORDER BY start_date ASC, id ASC"
        ))?;

        let tours = stmt
            .query_map([], Self::row_to_tour)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(count = tours.len(), "Listed tours");
        Ok(tours)
    }

    fn get(&self, id: TourId) -> Result<Option<Tour>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("SELECT {TOUR_COLUMNS} FROM tours WHERE id = ?1"))?;

        let tour = stmt.query_row([id.0], Self::row_to_tour).optional()?;
        Ok(tour)
    }

    fn update(&self, id: TourId, draft: &TourDraft) -> Result<()> {
        let conn = self.connect()?;
        let changed = conn.execute(
            r#"
            UPDATE tours
            SET destination = ?1, country = ?2, duration_days = ?3, price = ?4,
                start_date = ?5, tour_operator = ?6, hotel_name = ?7
            WHERE id = ?8
            "#,
            params![
                draft.destination,
                draft.country,
                draft.duration_days,
                draft.price,
                draft.start_date,
                draft.tour_operator,
                draft.hotel_name,
                id.0,
            ],
        )?;

        debug!(tour_id = %id, changed, "Tour updated");
        Ok(())
    }

    fn delete(&self, id: TourId) -> Result<()> {
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM tours WHERE id = ?1", [id.0])?;

        debug!(tour_id = %id, changed, "Tour deleted");
        Ok(())
    }

    fn search(&self, term: &str) -> Result<Vec<Tour>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            r#"
            SELECT {TOUR_COLUMNS} FROM tours
            WHERE destination LIKE ?1 ESCAPE '\'
               OR country LIKE ?1 ESCAPE '\'
               OR tour_operator LIKE ?1 ESCAPE '\'
               OR hotel_name LIKE ?1 ESCAPE '\'
            ORDER BY start_date ASC, id ASC
            "#
        ))?;

        let tours = stmt
            .query_map([like_pattern(term)], Self::row_to_tour)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(term = %term, count = tours.len(), "Searched tours");
        Ok(tours)
    }
}
