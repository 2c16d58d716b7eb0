//! Configuration constants for payload decoding and the default handlers.
//!
//! These are compile-time constants. Handlers read their recognition keys
//! from here so the CLI, the library and the tests agree on them.

use roxmltree::ParsingOptions;

/// Maximum number of nodes a single payload may contain.
///
/// Guards against entity-expansion and oversized documents. Payloads above
/// this limit fail to decode like any other malformed document.
pub const MAX_NODES: u32 = 1_000_000;

/// Whether `<!DOCTYPE ...>` declarations are accepted.
pub const ALLOW_DTD: bool = true;

/// Root element of report payloads.
pub const REPORT_ROOT: &str = "report";

/// Child element holding the report data.
pub const REPORT_DATA_FIELD: &str = "data";

/// Root element of invoice payloads.
pub const INVOICE_ROOT: &str = "invoice";

/// Root attribute distinguishing invoice kinds.
pub const INVOICE_TYPE_ATTR: &str = "type";

/// Invoice kind handled by the default invoice handler.
pub const INVOICE_SALES_TYPE: &str = "sales";

/// Child element holding the invoice amount.
pub const INVOICE_AMOUNT_FIELD: &str = "amount";

/// Root element of code-change payloads.
pub const CODE_CHANGES_ROOT: &str = "code_changes";

/// Child element holding the branch name of a code change.
pub const CODE_CHANGES_BRANCH_FIELD: &str = "branch_name";

/// Build the parsing options used for every payload decode.
///
/// # Examples
/// ```
/// use xml_dispatcher::config::{parsing_options, MAX_NODES};
///
/// let opts = parsing_options();
/// assert!(opts.allow_dtd);
/// assert_eq!(opts.nodes_limit, MAX_NODES);
/// ```
#[must_use]
pub fn parsing_options<'input>() -> ParsingOptions<'input> {
    let mut opts = ParsingOptions::default();
    opts.allow_dtd = ALLOW_DTD;
    opts.nodes_limit = MAX_NODES;
    opts
}
