//! Types for the handler registry system.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;

/// Record decoded from a payload by one of the built-in handlers.
///
/// Created fresh for every `handle` call and handed to a [`RecordSink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    /// A `<report>` payload.
    Report {
        /// Text of the `<data>` child.
        data: String,
    },
    /// An `<invoice type="sales">` payload.
    Invoice {
        /// Text of the `<amount>` child.
        amount: String,
    },
    /// A `<code_changes>` payload.
    CodeChanges {
        /// Text of the `<branch_name>` child.
        branch_name: String,
    },
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Report { data } => write!(f, "Processing report: {data}"),
            Self::Invoice { amount } => write!(f, "Processing invoice amount: {amount}"),
            Self::CodeChanges { branch_name } => {
                write!(f, "Processing code changes on branch: {branch_name}")
            }
        }
    }
}

/// Destination for records decoded by handlers.
///
/// A sink is only called after a payload decoded successfully.
pub trait RecordSink: Send + Sync {
    /// Report a decoded record.
    fn emit(&self, record: Record);
}

/// Sink that reports records as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl RecordSink for LogSink {
    fn emit(&self, record: Record) {
        match &record {
            Record::Report { data } => tracing::info!(data = %data, "Processing report"),
            Record::Invoice { amount } => {
                tracing::info!(amount = %amount, "Processing invoice amount");
            }
            Record::CodeChanges { branch_name } => {
                tracing::info!(branch_name = %branch_name, "Processing code changes");
            }
        }
    }
}

/// Sink that keeps records in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    /// Create a new empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records emitted so far.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether nothing has been emitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl RecordSink for MemorySink {
    fn emit(&self, record: Record) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}
