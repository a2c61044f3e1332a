//! Field sinks receive what the dissector extracts from each frame
//!
//! The dissector never renders anything itself. It hands [`FieldReport`]s to a
//! sink, and the sink decides whether they end up in a tree view, a log line,
//! a test assertion or nowhere at all.

use crate::DecodeError;
use crate::types::FieldReport;

/// Destination for decoded fields.
pub trait FieldSink {
    /// Accept one decoded field.
    fn add_field(&mut self, report: FieldReport);

    /// Accept the decode error of a frame that could not be dissected.
    fn malformed(&mut self, frame_number: u64, error: &DecodeError);
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FieldSink for NullSink {
    fn add_field(&mut self, _report: FieldReport) {}

    fn malformed(&mut self, _frame_number: u64, _error: &DecodeError) {}
}

/// Sink that keeps every report in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub fields: Vec<FieldReport>,
    pub errors: Vec<(u64, DecodeError)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// First recorded field with the given filter name.
    pub fn field(&self, abbrev: &str) -> Option<&FieldReport> {
        self.fields.iter().find(|report| report.definition.abbrev == abbrev)
    }

    /// Visible fields rendered one per line. Hidden fields are skipped.
    pub fn render_lines(&self) -> Vec<String> {
        self.fields.iter().filter(|report| !report.hidden).map(FieldReport::render).collect()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
        self.errors.clear();
    }
}

impl FieldSink for RecordingSink {
    fn add_field(&mut self, report: FieldReport) {
        self.fields.push(report);
    }

    fn malformed(&mut self, frame_number: u64, error: &DecodeError) {
        self.errors.push((frame_number, error.clone()));
    }
}
