//! Full tour lifecycle through the controller and a real SQLite file

use crate::test_utils::{fill_form, init_test_logging, Notice, ScriptedNotifier, TempDb};
use tourdesk_core::{SqliteTourStore, TourId, TourStore};
use tourdesk_desk::{report, AppError, FormField, Mode, Outcome};

const PARIS: [&str; 7] = [
    "Paris",
    "France",
    "7",
    "999.99",
    "2024-06-01",
    "OpTours",
    "Hotel A",
];

#[test]
fn test_tour_lifecycle() {
    init_test_logging();
    let db = TempDb::new("e2e_lifecycle");
    let mut window = db.open_window();
    let mut notifier = ScriptedNotifier::default();

    // Add
    fill_form(&mut window, PARIS);
    let added = window.add();
    report(&added, &mut notifier);
    let id = match added.unwrap() {
        Outcome::Added(id) => id,
        other => panic!("expected Added, got {:?}", other),
    };
    assert_eq!(
        notifier.last_message(),
        Some(format!("Tour added successfully! ID: {}", id).as_str())
    );
    assert!(window.form().is_empty());
    assert_eq!(window.mode(), Mode::Insert);

    assert_eq!(window.rows().len(), 1);
    let row = &window.rows()[0];
    assert_eq!(row.id, id);
    assert_eq!(row.cell(1), "Paris");
    assert_eq!(row.cell(4), "999.99 RUB");
    assert_eq!(row.cell(7), "Hotel A");

    // Select restores the bare price
    window.select_row(0).unwrap();
    assert_eq!(window.mode(), Mode::Editing(id));
    assert_eq!(window.form().get(FormField::Price), "999.99");
    assert_eq!(window.form().get(FormField::HotelName), "Hotel A");
    let buttons = window.buttons();
    assert!(!buttons.add && buttons.update && buttons.delete && buttons.clear);

    // Update keeps the id
    window.set_field(FormField::DurationDays, "10");
    let updated = window.update();
    report(&updated, &mut notifier);
    assert_eq!(updated.unwrap(), Outcome::Updated(id));
    assert_eq!(notifier.last_message(), Some("Tour updated successfully!"));
    assert_eq!(window.mode(), Mode::Insert);

    let stored = window.store().get(id).unwrap().unwrap();
    assert_eq!(stored.duration_days, 10);
    assert_eq!(stored.destination, "Paris");
    assert_eq!(window.rows()[0].cell(3), "10");

    // Delete asks first
    window.select_row(0).unwrap();
    let mut declining = ScriptedNotifier::answering(&[false]);
    assert_eq!(window.delete(&mut declining).unwrap(), Outcome::Cancelled);
    assert_eq!(declining.count(Notice::Confirm), 1);
    assert!(window.store().get(id).unwrap().is_some());
    assert_eq!(window.mode(), Mode::Editing(id));

    let mut accepting = ScriptedNotifier::answering(&[true]);
    let deleted = window.delete(&mut accepting);
    report(&deleted, &mut accepting);
    assert_eq!(deleted.unwrap(), Outcome::Deleted(id));
    assert_eq!(accepting.last_message(), Some("Tour deleted successfully!"));
    assert!(window.store().get(id).unwrap().is_none());
    assert!(window.rows().is_empty());
    assert_eq!(window.mode(), Mode::Insert);
}

#[test]
fn test_tours_survive_restart() {
    init_test_logging();
    let db = TempDb::new("e2e_restart");

    let first_id = {
        let mut window = db.open_window();
        fill_form(&mut window, PARIS);
        match window.add().unwrap() {
            Outcome::Added(id) => id,
            other => panic!("expected Added, got {:?}", other),
        }
    };

    let mut window = db.open_window();
    assert_eq!(window.rows().len(), 1);
    assert_eq!(window.rows()[0].id, first_id);
    assert_eq!(window.rows()[0].cell(4), "999.99 RUB");

    fill_form(
        &mut window,
        ["Rome", "Italy", "5", "450", "2024-05-10", "RomaTravel", ""],
    );
    let second_id = match window.add().unwrap() {
        Outcome::Added(id) => id,
        other => panic!("expected Added, got {:?}", other),
    };
    assert_ne!(first_id, second_id);

    // Earlier start date first, empty hotel shown blank
    let ids: Vec<TourId> = window.rows().iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![second_id, first_id]);
    assert_eq!(window.rows()[0].cell(7), "");

    let reopened = SqliteTourStore::open(db.path()).unwrap();
    let rome = reopened.get(second_id).unwrap().unwrap();
    assert_eq!(rome.hotel_name, None);
    assert!(!rome.created_at.is_empty());
}

#[test]
fn test_search_filters_and_clears() {
    init_test_logging();
    let db = TempDb::new("e2e_search");
    let mut window = db.open_window();

    fill_form(&mut window, PARIS);
    window.add().unwrap();
    fill_form(
        &mut window,
        ["Rome", "Italy", "5", "450", "2024-05-10", "RomaTravel", "Hotel B"],
    );
    window.add().unwrap();

    assert_eq!(
        window.set_search("  france ").unwrap(),
        Outcome::Refreshed { count: 1 }
    );
    assert_eq!(window.rows()[0].cell(1), "Paris");

    window.set_search("hotel").unwrap();
    assert_eq!(window.rows().len(), 2);

    window.set_search("Berlin").unwrap();
    assert!(window.rows().is_empty());

    window.set_search("").unwrap();
    assert_eq!(window.rows().len(), 2);
}

#[test]
fn test_invalid_and_unselected_actions_leave_store_untouched() {
    init_test_logging();
    let db = TempDb::new("e2e_rejected");
    let mut window = db.open_window();
    let mut notifier = ScriptedNotifier::answering(&[true]);

    fill_form(
        &mut window,
        ["Paris", "France", "7", "-5", "2024-06-01", "OpTours", ""],
    );
    let rejected = window.add();
    report(&rejected, &mut notifier);
    match rejected {
        Err(err @ AppError::Validation { .. }) => assert_eq!(err.field(), Some(FormField::Price)),
        other => panic!("expected a price validation error, got {:?}", other),
    }
    assert_eq!(notifier.count(Notice::Failure), 1);
    assert_eq!(window.form().get(FormField::Price), "-5");

    let missing = window.delete(&mut notifier);
    report(&missing, &mut notifier);
    assert!(matches!(missing, Err(AppError::NoSelection)));
    assert_eq!(notifier.count(Notice::Confirm), 0);
    assert_eq!(notifier.count(Notice::Warning), 1);

    assert!(matches!(window.update(), Err(AppError::NoSelection)));
    assert!(window.store().list_all().unwrap().is_empty());
}
