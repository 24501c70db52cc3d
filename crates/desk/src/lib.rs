//! Presentation and controller layer for the TourDesk window.
//!
//! Nothing in this crate draws anything. It holds the form, the table rows,
//! the button affordances and the Insert/Editing mode, talks to a
//! [`tourdesk_core::TourStore`], and reports back through typed results and
//! the [`Notifier`] capability of the hosting UI.

pub mod controller;
pub mod error;
pub mod form;
pub mod notify;
pub mod view;

pub use controller::{Controller, ControllerSettings, Mode, Outcome};
pub use error::{AppError, Result};
pub use form::{FormField, TourForm};
pub use notify::{report, Notifier};
pub use view::{format_price, strip_currency, ButtonStates, TourRow, COLUMNS};
