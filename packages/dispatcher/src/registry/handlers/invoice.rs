//! Handler for sales `<invoice>` payloads.

use std::sync::Arc;

use crate::config::{INVOICE_AMOUNT_FIELD, INVOICE_ROOT, INVOICE_SALES_TYPE, INVOICE_TYPE_ATTR};
use crate::error::Result;
use crate::registry::handler::PayloadHandler;
use crate::registry::key::RecognitionKey;
use crate::registry::types::{LogSink, Record, RecordSink};
use crate::xml::{child_text, parse_payload};

/// Handler for `<invoice type="sales">` payloads.
///
/// Invoices of any other type, or without a type, are not recognized.
/// Decodes the `<amount>` child into [`Record::Invoice`].
pub struct InvoiceHandler {
    key: RecognitionKey,
    sink: Arc<dyn RecordSink>,
}

impl InvoiceHandler {
    /// Create a handler reporting to the log.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Arc::new(LogSink))
    }

    /// Create a handler reporting to the given sink.
    #[must_use]
    pub fn with_sink(sink: Arc<dyn RecordSink>) -> Self {
        Self {
            key: RecognitionKey::root(INVOICE_ROOT)
                .with_attribute(INVOICE_TYPE_ATTR, INVOICE_SALES_TYPE),
            sink,
        }
    }
}

impl Default for InvoiceHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadHandler for InvoiceHandler {
    fn can_handle(&self, payload: &[u8]) -> bool {
        self.key.matches(payload)
    }

    fn handle(&self, payload: &[u8]) -> Result<()> {
        let doc = parse_payload(payload)?;
        let amount = child_text(doc.root_element(), INVOICE_AMOUNT_FIELD);
        self.sink.emit(Record::Invoice { amount });
        Ok(())
    }
}
