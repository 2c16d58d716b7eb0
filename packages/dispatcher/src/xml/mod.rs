//! XML decoding helpers shared by the handlers.

mod utils;

pub use utils::{child_text, find_last_child, get_attribute, get_tag_name, parse_payload};
