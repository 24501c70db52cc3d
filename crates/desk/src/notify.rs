//! Notification capability exposed by whatever UI hosts the controller.

use crate::controller::Outcome;
use crate::error::{AppError, Result};

/// Modal-style messages and yes/no confirmation
pub trait Notifier {
    fn info(&mut self, title: &str, message: &str);

    fn warning(&mut self, title: &str, message: &str);

    fn failure(&mut self, title: &str, message: &str);

    /// Ask a yes/no question; `true` means proceed
    fn confirm(&mut self, title: &str, question: &str) -> bool;
}

/// Surface the result of a controller operation.
///
/// Successful outcomes with a message become an info notice, selection
/// problems a warning, and validation or storage errors a failure. Storage
/// failures carry the underlying message.
pub fn report(result: &Result<Outcome>, notifier: &mut dyn Notifier) {
    match result {
        Ok(outcome) => {
            if let Some(message) = outcome.message() {
                notifier.info("Success", &message);
            }
        }
        Err(error @ AppError::Validation { .. }) => {
            notifier.failure("Validation", &error.to_string());
        }
        Err(error @ (AppError::NoSelection | AppError::ActionDisabled(_) | AppError::NoSuchRow(_))) => {
            notifier.warning("Warning", &error.to_string());
        }
        Err(AppError::Storage(error)) => {
            notifier.failure("Error", &format!("Operation failed: {}", error));
        }
    }
}
