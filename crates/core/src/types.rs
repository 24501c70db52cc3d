//! Tour record types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned tour identifier (the SQLite rowid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TourId(pub i64);

impl fmt::Display for TourId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The user-editable part of a tour.
///
/// The store trusts drafts: destination, country and operator are non-empty,
/// duration and price are strictly positive. The desk layer checks this
/// before a draft ever reaches a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourDraft {
    pub destination: String,
    pub country: String,
    pub duration_days: u32,
    pub price: f64,
    /// Free text; ordering is lexical on this string
    pub start_date: String,
    pub tour_operator: String,
    pub hotel_name: Option<String>,
}

/// A persisted tour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub id: TourId,
    pub destination: String,
    pub country: String,
    pub duration_days: u32,
    pub price: f64,
    pub start_date: String,
    pub tour_operator: String,
    pub hotel_name: Option<String>,
    /// Insertion time as written by SQLite (`YYYY-MM-DD HH:MM:SS`, UTC)
    pub created_at: String,
}

impl Tour {
    /// Editable fields of this tour
    pub fn draft(&self) -> TourDraft {
        TourDraft {
            destination: self.destination.clone(),
            country: self.country.clone(),
            duration_days: self.duration_days,
            price: self.price,
            start_date: self.start_date.clone(),
            tour_operator: self.tour_operator.clone(),
            hotel_name: self.hotel_name.clone(),
        }
    }

    /// Whether `term` occurs in one of the searchable text fields
    pub fn matches(&self, term: &str) -> bool {
        self.destination.contains(term)
            || self.country.contains(term)
            || self.tour_operator.contains(term)
            || self
                .hotel_name
                .as_deref()
                .is_some_and(|hotel| hotel.contains(term))
    }
}
