//! Default dispatcher configuration with the built-in handlers.

use std::sync::Arc;

use super::core::HandlerRegistry;
use super::engine::Dispatcher;
use super::handlers::{CodeChangesHandler, InvoiceHandler, ReportHandler};
use super::types::{LogSink, RecordSink};

/// Create a dispatcher with all built-in handlers, reporting to the log.
#[must_use]
pub fn create_default_dispatcher() -> Dispatcher {
    create_dispatcher_with_sink(Arc::new(LogSink))
}

/// Create a dispatcher with all built-in handlers sharing one sink.
///
/// Handlers are registered in this order: report, invoice, code changes.
/// Their recognition keys do not overlap, so the order only matters to
/// handlers registered afterwards.
#[must_use]
pub fn create_dispatcher_with_sink(sink: Arc<dyn RecordSink>) -> Dispatcher {
    let mut registry = HandlerRegistry::new();

    registry.register(ReportHandler::with_sink(Arc::clone(&sink)));
    registry.register(InvoiceHandler::with_sink(Arc::clone(&sink)));
    registry.register(CodeChangesHandler::with_sink(sink));

    Dispatcher::with_registry(registry)
}
