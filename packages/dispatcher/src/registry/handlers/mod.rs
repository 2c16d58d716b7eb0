//! Built-in payload handlers.
//!
//! Each handler recognizes one fixed payload shape and decodes a single
//! field into a [`Record`](crate::registry::Record).

mod code_changes;
mod invoice;
mod report;

pub use code_changes::CodeChangesHandler;
pub use invoice::InvoiceHandler;
pub use report::ReportHandler;
