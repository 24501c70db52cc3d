//! Tour window controller
//!
//! Mediates between the form, the selection state and a [`TourStore`]. The
//! controller is UI-agnostic: every operation returns a typed
//! [`Outcome`] or [`AppError`] and the hosting UI decides how to show it.
//!
//! # Modes
//!
//! - **Insert** (initial, after clear and after every successful mutation):
//!   add enabled, update/delete disabled, no tour tracked.
//! - **Editing(id)** (after a row is selected): add disabled, update/delete
//!   enabled, form holds the selected tour.
//!
//! Failed operations never change the mode or the form.

use crate::error::{AppError, Result};
use crate::form::{FormField, TourForm};
use crate::notify::Notifier;
use crate::view::{ButtonStates, TourRow};
use tourdesk_core::{Config, StoreError, TourId, TourStore};
use tracing::{debug, error, info, warn};

/// Which record, if any, the form is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Insert,
    Editing(TourId),
}

impl Mode {
    pub fn selected(&self) -> Option<TourId> {
        match self {
            Mode::Insert => None,
            Mode::Editing(id) => Some(*id),
        }
    }

    pub fn buttons(&self) -> ButtonStates {
        let editing = matches!(self, Mode::Editing(_));
        ButtonStates {
            add: !editing,
            update: editing,
            delete: editing,
            clear: true,
        }
    }
}

/// Successful result of a controller operation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(TourId),
    Updated(TourId),
    Deleted(TourId),
    /// Delete declined at the confirmation prompt
    Cancelled,
    Selected(TourId),
    Cleared,
    /// List replaced with `count` rows
    Refreshed { count: usize },
}

impl Outcome {
    /// Message worth showing to the user, if any
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Added(id) => Some(format!("Tour added successfully! ID: {}", id)),
            Outcome::Updated(_) => Some("Tour updated successfully!".to_string()),
            Outcome::Deleted(_) => Some("Tour deleted successfully!".to_string()),
            _ => None,
        }
    }
}

/// Presentation settings the controller needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSettings {
    pub currency_suffix: String,
    pub strict_dates: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ControllerSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            currency_suffix: config.display.currency_suffix.clone(),
            strict_dates: config.validation.strict_dates,
        }
    }
}

fn storage_failure(operation: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |err| {
        error!(operation, error = %err, "Tour store operation failed");
        AppError::Storage(err)
    }
}

/// Controller state for one tour window
pub struct Controller<S> {
    store: S,
    settings: ControllerSettings,
    form: TourForm,
    mode: Mode,
    search_term: String,
    rows: Vec<TourRow>,
}

impl<S: TourStore> Controller<S> {
    pub fn new(store: S, settings: ControllerSettings) -> Self {
        Self {
            store,
            settings,
            form: TourForm::default(),
            mode: Mode::Insert,
            search_term: String::new(),
            rows: Vec::new(),
        }
    }

    /// Ensure the schema and load the initial list.
    ///
    /// A failure leaves the controller usable with an empty list; the next
    /// operation simply tries the store again.
    pub fn start(&mut self) -> Result<Outcome> {
        self.store
            .initialize()
            .map_err(storage_failure("initialize"))?;
        let outcome = self.refresh()?;
        info!(rows = self.rows.len(), "Tour window ready");
        Ok(outcome)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn form(&self) -> &TourForm {
        &self.form
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn buttons(&self) -> ButtonStates {
        self.mode.buttons()
    }

    pub fn rows(&self) -> &[TourRow] {
        &self.rows
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Validate the form and create a new tour
    pub fn add(&mut self) -> Result<Outcome> {
        if !self.buttons().add {
            return Err(AppError::ActionDisabled("Add"));
        }

        let draft = self.validated_form()?;
        let id = self.store.create(&draft).map_err(storage_failure("create"))?;
        info!(tour_id = %id, destination = %draft.destination, "Tour added");

        self.reset_to_insert();
        self.reload_all()?;
        Ok(Outcome::Added(id))
    }

    /// Validate the form and overwrite the selected tour
    pub fn update(&mut self) -> Result<Outcome> {
        let id = self.mode.selected().ok_or(AppError::NoSelection)?;

        let draft = self.validated_form()?;
        self.store
            .update(id, &draft)
            .map_err(storage_failure("update"))?;
        info!(tour_id = %id, "Tour updated");

        self.reset_to_insert();
        self.reload_all()?;
        Ok(Outcome::Updated(id))
    }

    /// Delete the selected tour after the user confirms
    pub fn delete(&mut self, notifier: &mut dyn Notifier) -> Result<Outcome> {
        let id = self.mode.selected().ok_or(AppError::NoSelection)?;

        if !notifier.confirm("Confirm", "Are you sure you want to delete this tour?") {
            debug!(tour_id = %id, "Delete cancelled");
            return Ok(Outcome::Cancelled);
        }

        self.store.delete(id).map_err(storage_failure("delete"))?;
        info!(tour_id = %id, "Tour deleted");

        self.reset_to_insert();
        self.reload_all()?;
        Ok(Outcome::Deleted(id))
    }

    /// Wipe the form and drop the selection
    pub fn clear(&mut self) -> Outcome {
        self.reset_to_insert();
        Outcome::Cleared
    }

    /// Load the visible row at `index` into the form and switch to editing
    pub fn select_row(&mut self, index: usize) -> Result<Outcome> {
        let row = self.rows.get(index).ok_or(AppError::NoSuchRow(index + 1))?;

        self.form.load_row(row, &self.settings.currency_suffix);
        self.mode = Mode::Editing(row.id);

        debug!(tour_id = %row.id, "Tour selected");
        Ok(Outcome::Selected(row.id))
    }

    /// Live filter: replace the list with tours matching `term`.
    ///
    /// A blank term shows every tour.
    pub fn set_search(&mut self, term: &str) -> Result<Outcome> {
        self.search_term = term.to_string();
        self.refresh()
    }

    /// Re-run the query behind the search box
    pub fn refresh(&mut self) -> Result<Outcome> {
        let term = self.search_term.trim();
        let tours = if term.is_empty() {
            self.store.list_all().map_err(storage_failure("list_all"))?
        } else {
            self.store.search(term).map_err(storage_failure("search"))?
        };

        self.replace_rows(&tours);
        Ok(Outcome::Refreshed {
            count: self.rows.len(),
        })
    }

    /// Full list after a mutation; the search box text is left as typed
    fn reload_all(&mut self) -> Result<()> {
        let tours = self
            .store
            .list_all()
            .map_err(storage_failure("list_all"))?;
        self.replace_rows(&tours);
        Ok(())
    }

    fn replace_rows(&mut self, tours: &[tourdesk_core::Tour]) {
        let suffix = &self.settings.currency_suffix;
        self.rows = tours
            .iter()
            .map(|tour| TourRow::from_tour(tour, suffix))
            .collect();
        debug!(rows = self.rows.len(), "Tour list replaced");
    }

    fn validated_form(&self) -> Result<tourdesk_core::TourDraft> {
        self.form
            .validate(self.settings.strict_dates)
            .inspect_err(|err| {
                if let Some(field) = err.field() {
                    warn!(field = field.key(), reason = %err, "Tour form rejected");
                }
            })
    }

    fn reset_to_insert(&mut self) {
        self.form.clear();
        self.mode = Mode::Insert;
    }
}
