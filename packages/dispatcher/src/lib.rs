//! XML Dispatcher - Route XML payloads to pluggable handlers.
//!
//! Handlers are registered with a [`Dispatcher`] in priority order. Each
//! payload is offered to the handlers in that order, and the first handler
//! that recognizes it processes it.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use xml_dispatcher::registry::{Dispatcher, MemorySink, Record};
//! use xml_dispatcher::ReportHandler;
//!
//! let sink = Arc::new(MemorySink::new());
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.register_handler(ReportHandler::with_sink(sink.clone()));
//!
//! dispatcher.process(b"<report><data>Hello</data></report>").unwrap();
//! assert_eq!(sink.records(), vec![Record::Report { data: "Hello".to_string() }]);
//!
//! let err = dispatcher.process(b"<unknown></unknown>").unwrap_err();
//! assert_eq!(err.to_string(), "no handler found for the given XML");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Parsing limits and the built-in handlers' keys
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Payload decoding helpers
//! - [`registry`]: Handler trait, registry, dispatcher and built-in handlers
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod xml;

// Re-export commonly used items
pub use error::{DispatchError, Result};
pub use registry::handlers::{CodeChangesHandler, InvoiceHandler, ReportHandler};
pub use registry::{
    create_default_dispatcher, Dispatcher, HandlerRegistry, PayloadHandler, RecognitionKey,
    Record, RecordSink,
};
