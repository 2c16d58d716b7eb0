//! Handler for `<code_changes>` payloads.

use std::sync::Arc;

use crate::config::{CODE_CHANGES_BRANCH_FIELD, CODE_CHANGES_ROOT};
use crate::error::Result;
use crate::registry::handler::PayloadHandler;
use crate::registry::key::RecognitionKey;
use crate::registry::types::{LogSink, Record, RecordSink};
use crate::xml::{child_text, parse_payload};

/// Handler for payloads with a `<code_changes>` root element.
///
/// Decodes the `<branch_name>` child into [`Record::CodeChanges`].
pub struct CodeChangesHandler {
    key: RecognitionKey,
    sink: Arc<dyn RecordSink>,
}

impl CodeChangesHandler {
    /// Create a handler reporting to the log.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Arc::new(LogSink))
    }

    /// Create a handler reporting to the given sink.
    #[must_use]
    pub fn with_sink(sink: Arc<dyn RecordSink>) -> Self {
        Self {
            key: RecognitionKey::root(CODE_CHANGES_ROOT),
            sink,
        }
    }
}

impl Default for CodeChangesHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadHandler for CodeChangesHandler {
    fn can_handle(&self, payload: &[u8]) -> bool {
        self.key.matches(payload)
    }

    fn handle(&self, payload: &[u8]) -> Result<()> {
        let doc = parse_payload(payload)?;
        let branch_name = child_text(doc.root_element(), CODE_CHANGES_BRANCH_FIELD);
        self.sink.emit(Record::CodeChanges { branch_name });
        Ok(())
    }
}
