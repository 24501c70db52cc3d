//! End-to-end tests for the tour window
//!
//! This test suite drives the controller against a real SQLite file:
//! - the add, select, update and delete round of a single tour
//! - search filtering and the Insert/Editing button affordances
//! - persistence across a restart of the window

pub mod test_utils;

#[cfg(test)]
mod end_to_end_tests;
