//! Handler for `<report>` payloads.

use std::sync::Arc;

use crate::config::{REPORT_DATA_FIELD, REPORT_ROOT};
use crate::error::Result;
use crate::registry::handler::PayloadHandler;
use crate::registry::key::RecognitionKey;
use crate::registry::types::{LogSink, Record, RecordSink};
use crate::xml::{child_text, parse_payload};

/// Handler for payloads with a `<report>` root element.
///
/// Decodes the `<data>` child into [`Record::Report`].
pub struct ReportHandler {
    key: RecognitionKey,
    sink: Arc<dyn RecordSink>,
}

impl ReportHandler {
    /// Create a handler reporting to the log.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Arc::new(LogSink))
    }

    /// Create a handler reporting to the given sink.
    #[must_use]
    pub fn with_sink(sink: Arc<dyn RecordSink>) -> Self {
        Self {
            key: RecognitionKey::root(REPORT_ROOT),
            sink,
        }
    }
}

impl Default for ReportHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadHandler for ReportHandler {
    fn can_handle(&self, payload: &[u8]) -> bool {
        self.key.matches(payload)
    }

    fn handle(&self, payload: &[u8]) -> Result<()> {
        let doc = parse_payload(payload)?;
        let data = child_text(doc.root_element(), REPORT_DATA_FIELD);
        self.sink.emit(Record::Report { data });
        Ok(())
    }
}
