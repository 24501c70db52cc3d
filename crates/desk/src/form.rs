//! Tour entry form: seven text inputs and the mapping between them, the
//! table row cells and a validated [`TourDraft`].

use crate::error::{validation, Result};
use crate::view::{strip_currency, TourRow};
use std::fmt;
use tourdesk_core::TourDraft;

/// One labeled input of the tour form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Destination,
    Country,
    DurationDays,
    Price,
    StartDate,
    TourOperator,
    HotelName,
}

impl FormField {
    /// Fields in form order, which is also validation order
    pub const ALL: [FormField; 7] = [
        FormField::Destination,
        FormField::Country,
        FormField::DurationDays,
        FormField::Price,
        FormField::StartDate,
        FormField::TourOperator,
        FormField::HotelName,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Destination => "Destination",
            FormField::Country => "Country",
            FormField::DurationDays => "Duration (days)",
            FormField::Price => "Price",
            FormField::StartDate => "Start date",
            FormField::TourOperator => "Tour operator",
            FormField::HotelName => "Hotel",
        }
    }

    /// Stable machine name, matching the storage column
    pub fn key(self) -> &'static str {
        match self {
            FormField::Destination => "destination",
            FormField::Country => "country",
            FormField::DurationDays => "duration_days",
            FormField::Price => "price",
            FormField::StartDate => "start_date",
            FormField::TourOperator => "tour_operator",
            FormField::HotelName => "hotel_name",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Table column showing this field (column 0 is the identifier)
    pub fn column(self) -> usize {
        self.index() + 1
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw text of the seven inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourForm {
    values: [String; 7],
}

impl TourForm {
    pub fn get(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(String::clear);
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    /// Validate the inputs in form order and build a draft.
    ///
    /// Every value is trimmed first. The first failing field aborts with a
    /// field-specific message; the form itself is left untouched so the user
    /// can correct it.
    pub fn validate(&self, strict_dates: bool) -> Result<TourDraft> {
        let value = |field: FormField| self.get(field).trim();

        let destination = value(FormField::Destination);
        validation::require_non_empty(destination, FormField::Destination)?;

        let country = value(FormField::Country);
        validation::require_non_empty(country, FormField::Country)?;

        let duration_days =
            validation::parse_positive_int(value(FormField::DurationDays), FormField::DurationDays)?;

        let price = validation::parse_positive_decimal(value(FormField::Price), FormField::Price)?;

        let start_date = value(FormField::StartDate);
        validation::require_non_empty(start_date, FormField::StartDate)?;
        if strict_dates {
            validation::validate_iso_date(start_date, FormField::StartDate)?;
        }

        let tour_operator = value(FormField::TourOperator);
        validation::require_non_empty(tour_operator, FormField::TourOperator)?;

        let hotel_name = match value(FormField::HotelName) {
            "" => None,
            hotel => Some(hotel.to_string()),
        };

        Ok(TourDraft {
            destination: destination.to_string(),
            country: country.to_string(),
            duration_days,
            price,
            start_date: start_date.to_string(),
            tour_operator: tour_operator.to_string(),
            hotel_name,
        })
    }

    /// Repopulate every input from a displayed table row.
    ///
    /// The price cell carries the display currency suffix, which is stripped
    /// to recover the numeric text. That text is the two-decimal display
    /// value, so saving the form stores the rounded price.
    pub fn load_row(&mut self, row: &TourRow, currency_suffix: &str) {
        for field in FormField::ALL {
            let cell = row.cell(field.column());
            let value = match field {
                FormField::Price => strip_currency(cell, currency_suffix),
                _ => cell,
            };
            self.set(field, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use tourdesk_core::{Tour, TourId};

    fn filled() -> TourForm {
        let mut form = TourForm::default();
        form.set(FormField::Destination, " Paris ");
        form.set(FormField::Country, "France");
        form.set(FormField::DurationDays, "7");
        form.set(FormField::Price, "999.99");
        form.set(FormField::StartDate, "2024-06-01");
        form.set(FormField::TourOperator, "OpTours");
        form.set(FormField::HotelName, "Hotel A");
        form
    }

    fn rejected_field(form: &TourForm) -> FormField {
        match form.validate(false) {
            Err(AppError::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_field_keys_round_trip() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_key(field.key()), Some(field));
        }
        assert_eq!(FormField::from_key(" PRICE "), Some(FormField::Price));
        assert_eq!(FormField::from_key("id"), None);
    }

    #[test]
    fn test_validate_builds_trimmed_draft() {
        let draft = filled().validate(false).unwrap();
        assert_eq!(draft.destination, "Paris");
        assert_eq!(draft.duration_days, 7);
        assert_eq!(draft.price, 999.99);
        assert_eq!(draft.hotel_name.as_deref(), Some("Hotel A"));
    }

    #[test]
    fn test_hotel_is_optional() {
        let mut form = filled();
        form.set(FormField::HotelName, "   ");
        assert_eq!(form.validate(false).unwrap().hotel_name, None);
    }

    #[test]
    fn test_validation_rejections() {
        let cases = [
            (FormField::Destination, ""),
            (FormField::Country, "  "),
            (FormField::DurationDays, "0"),
            (FormField::DurationDays, "abc"),
            (FormField::Price, "-5"),
            (FormField::Price, "abc"),
            (FormField::StartDate, ""),
            (FormField::TourOperator, ""),
        ];

        for (field, value) in cases {
            let mut form = filled();
            form.set(field, value);
            assert_eq!(rejected_field(&form), field, "value {:?}", value);
            // Form state is preserved for correction
            assert_eq!(form.get(field), value);
        }
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let mut form = filled();
        form.set(FormField::Price, "abc");
        form.set(FormField::Country, "");
        assert_eq!(rejected_field(&form), FormField::Country);
    }

    #[test]
    fn test_strict_dates() {
        let mut form = filled();
        form.set(FormField::StartDate, "June 1st");
        assert!(form.validate(false).is_ok());
        assert!(matches!(
            form.validate(true),
            Err(AppError::Validation {
                field: FormField::StartDate,
                ..
            })
        ));
    }

    #[test]
    fn test_load_row_strips_currency() {
        let tour = Tour {
            id: TourId(5),
            destination: "Paris".to_string(),
            country: "France".to_string(),
            duration_days: 7,
            price: 999.99,
            start_date: "2024-06-01".to_string(),
            tour_operator: "OpTours".to_string(),
            hotel_name: None,
            created_at: "2024-01-01 00:00:00".to_string(),
        };
        let row = TourRow::from_tour(&tour, "RUB");

        let mut form = TourForm::default();
        form.load_row(&row, "RUB");

        assert_eq!(form.get(FormField::Price), "999.99");
        assert_eq!(form.get(FormField::DurationDays), "7");
        assert_eq!(form.get(FormField::HotelName), "");
        assert_eq!(form.validate(false).unwrap(), tour.draft());
    }

    #[test]
    fn test_load_row_keeps_displayed_precision() {
        let tour = Tour {
            id: TourId(6),
            destination: "Oslo".to_string(),
            country: "Norway".to_string(),
            duration_days: 3,
            price: 1234.567,
            start_date: "2024-02-01".to_string(),
            tour_operator: "Nordic".to_string(),
            hotel_name: Some("Fjord".to_string()),
            created_at: "2024-01-01 00:00:00".to_string(),
        };
        let row = TourRow::from_tour(&tour, "RUB");

        let mut form = TourForm::default();
        form.load_row(&row, "RUB");

        assert_eq!(form.get(FormField::Price), "1234.57");
        assert_eq!(form.validate(false).unwrap().price, 1234.57);
    }

    #[test]
    fn test_clear() {
        let mut form = filled();
        assert!(!form.is_empty());
        form.clear();
        assert!(form.is_empty());
    }
}
