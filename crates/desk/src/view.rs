//! Table rows and button affordances shown by the tour window

use tourdesk_core::{Tour, TourId};

/// Column headers of the tour table
pub const COLUMNS: [&str; 8] = [
    "ID",
    "Destination",
    "Country",
    "Days",
    "Price",
    "Start date",
    "Operator",
    "Hotel",
];

/// A tour as displayed in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourRow {
    pub id: TourId,
    pub cells: [String; 8],
}

impl TourRow {
    pub fn from_tour(tour: &Tour, currency_suffix: &str) -> Self {
        Self {
            id: tour.id,
            cells: [
                tour.id.to_string(),
                tour.destination.clone(),
                tour.country.clone(),
                tour.duration_days.to_string(),
                format_price(tour.price, currency_suffix),
                tour.start_date.clone(),
                tour.tour_operator.clone(),
                tour.hotel_name.clone().unwrap_or_default(),
            ],
        }
    }

    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }
}

/// Two decimals plus the currency suffix. Display only.
pub fn format_price(price: f64, currency_suffix: &str) -> String {
    format!("{:.2} {}", price, currency_suffix.trim())
}

/// Undo [`format_price`]'s suffix, leaving the numeric text
pub fn strip_currency<'a>(text: &'a str, currency_suffix: &str) -> &'a str {
    let text = text.trim();
    let suffix = currency_suffix.trim();
    match text.strip_suffix(suffix) {
        Some(number) if !suffix.is_empty() => number.trim_end(),
        _ => text,
    }
}

/// Which of the four action buttons accept clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStates {
    pub add: bool,
    pub update: bool,
    pub delete: bool,
    pub clear: bool,
}
