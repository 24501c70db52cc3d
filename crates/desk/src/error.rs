//! Unified Error Handling Module
//!
//! Every controller operation returns `Result<Outcome, AppError>`. The
//! controller never shows anything itself; the UI decides how each error
//! class is surfaced (see [`crate::notify::report`]).

use crate::form::FormField;
use thiserror::Error;
use tourdesk_core::StoreError;

/// Unified Application Error
#[derive(Error, Debug)]
pub enum AppError {
    /// User-correctable input problem on a single form field
    #[error("{message}")]
    Validation { field: FormField, message: String },

    /// Update or delete requested while no tour is selected
    #[error("Select a tour first")]
    NoSelection,

    /// Action whose button is disabled in the current mode
    #[error("{0} is not available right now")]
    ActionDisabled(&'static str),

    /// Selection index outside the visible table
    #[error("There is no row {0} in the list")]
    NoSuchRow(usize),

    /// Failure inside the persistence layer
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl AppError {
    /// Field the error points at, if any
    pub fn field(&self) -> Option<FormField> {
        match self {
            AppError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Result type alias for desk operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Validation helper functions
///
/// All helpers expect input that has already been trimmed.
pub mod validation {
    use super::AppError;
    use crate::form::FormField;
    use chrono::NaiveDate;

    fn invalid(field: FormField, message: String) -> AppError {
        AppError::Validation { field, message }
    }

    /// Validate a non-empty string
    pub fn require_non_empty(value: &str, field: FormField) -> Result<(), AppError> {
        if value.is_empty() {
            return Err(invalid(field, format!("{} cannot be empty", field.label())));
        }
        Ok(())
    }

    /// Parse a strictly positive whole number
    pub fn parse_positive_int(value: &str, field: FormField) -> Result<u32, AppError> {
        match value.parse::<u32>() {
            Ok(parsed) if parsed > 0 => Ok(parsed),
            _ => Err(invalid(
                field,
                format!("{} must be a positive whole number", field.label()),
            )),
        }
    }

    /// Parse a strictly positive, finite decimal
    pub fn parse_positive_decimal(value: &str, field: FormField) -> Result<f64, AppError> {
        match value.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() && parsed > 0.0 => Ok(parsed),
            _ => Err(invalid(
                field,
                format!("{} must be a positive number", field.label()),
            )),
        }
    }

    /// Validate an ISO `YYYY-MM-DD` calendar date
    pub fn validate_iso_date(value: &str, field: FormField) -> Result<(), AppError> {
        // chrono accepts unpadded components; the lexical ordering needs padding
        let well_formed = value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();
        if !well_formed {
            return Err(invalid(
                field,
                format!("{} must be a date in YYYY-MM-DD format", field.label()),
            ));
        }
        Ok(())
    }
}
