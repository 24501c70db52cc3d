//! Test utilities for end-to-end tour window tests

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tourdesk_core::SqliteTourStore;
use tourdesk_desk::{Controller, ControllerSettings, FormField, Notifier};

/// Install a test-friendly subscriber once per process
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("tourdesk=debug"))
        .with_test_writer()
        .try_init();
}

/// SQLite file in the temp directory, removed on drop
pub struct TempDb {
    path: PathBuf,
}

impl TempDb {
    pub fn new(prefix: &str) -> Self {
        let path = std::env::temp_dir().join(format!("{}_{}.db", prefix, uuid::Uuid::new_v4()));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fresh controller over this file, already started
    pub fn open_window(&self) -> Controller<SqliteTourStore> {
        let mut controller = Controller::new(
            SqliteTourStore::new(&self.path),
            ControllerSettings::default(),
        );
        controller
            .start()
            .expect("window should start against a temp database");
        controller
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.path).ok();
    }
}

/// Kind of message a notifier received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Info,
    Warning,
    Failure,
    Confirm,
}

/// Notifier that answers confirmations from a script and records every message
#[derive(Debug, Default)]
pub struct ScriptedNotifier {
    answers: VecDeque<bool>,
    pub notices: Vec<(Notice, String, String)>,
}

impl ScriptedNotifier {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            notices: Vec::new(),
        }
    }

    pub fn count(&self, kind: Notice) -> usize {
        self.notices.iter().filter(|(k, _, _)| *k == kind).count()
    }

    pub fn last_message(&self) -> Option<&str> {
        self.notices.last().map(|(_, _, message)| message.as_str())
    }
}

impl Notifier for ScriptedNotifier {
    fn info(&mut self, title: &str, message: &str) {
        self.notices.push((Notice::Info, title.to_string(), message.to_string()));
    }

    fn warning(&mut self, title: &str, message: &str) {
        self.notices.push((Notice::Warning, title.to_string(), message.to_string()));
    }

    fn failure(&mut self, title: &str, message: &str) {
        self.notices.push((Notice::Failure, title.to_string(), message.to_string()));
    }

    fn confirm(&mut self, title: &str, question: &str) -> bool {
        self.notices.push((Notice::Confirm, title.to_string(), question.to_string()));
        // Unscripted prompts are declined
        self.answers.pop_front().unwrap_or(false)
    }
}

/// Type a complete tour into the form
pub fn fill_form(
    controller: &mut Controller<SqliteTourStore>,
    values: [&str; 7],
) {
    for (field, value) in FormField::ALL.into_iter().zip(values) {
        controller.set_field(field, value);
    }
}
