//! `Summary` tracks what a generation run wrote. It carries no I/O of its own
//! beyond the log line emitted by `report`.

use serde::Serialize;

use crate::record::CharRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Lines written, placeholders included.
    pub written: u64,
    pub skipped: u64,
    pub substituted: u64,
    pub first: Option<char>,
    pub last: Option<char>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_record(&mut self, record: &CharRecord) {
        self.written += 1;
        if record.is_placeholder() {
            self.substituted += 1;
        }
        self.first.get_or_insert(record.ch);
        self.last = Some(record.ch);
    }

    pub fn tick_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn report(&self) {
        log::info!(
            "wrote {} lines ({}..{}), skipped {}, substituted {}",
            self.written,
            self.first.map(String::from).unwrap_or_default(),
            self.last.map(String::from).unwrap_or_default(),
            self.skipped,
            self.substituted
        );
    }
}
