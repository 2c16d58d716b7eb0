//! Handler registry system for routing XML payloads.
//!
//! Handlers are registered in order and probed in that order; the first one
//! that recognizes a payload processes it.

mod config;
mod core;
mod engine;
mod handler;
pub mod handlers;
mod key;
mod types;

pub use config::{create_default_dispatcher, create_dispatcher_with_sink};
pub use self::core::HandlerRegistry;
pub use engine::Dispatcher;
pub use handler::PayloadHandler;
pub use key::RecognitionKey;
pub use types::{LogSink, MemorySink, Record, RecordSink};
