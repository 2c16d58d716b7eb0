//! Recognition keys: the structural fingerprint a handler matches on.

use crate::xml::{get_attribute, get_tag_name, parse_payload};

/// Root element name plus an optional required root attribute.
///
/// Names are compared case-sensitively against the local name of the root
/// element, so namespace prefixes do not affect matching.
///
/// # Examples
/// ```
/// use xml_dispatcher::registry::RecognitionKey;
///
/// let key = RecognitionKey::root("invoice").with_attribute("type", "sales");
/// assert!(key.matches(br#"<invoice type="sales"/>"#));
/// assert!(!key.matches(br#"<invoice type="other"/>"#));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionKey {
    root: String,
    attribute: Option<(String, String)>,
}

impl RecognitionKey {
    /// Match payloads whose root element is `root`.
    #[must_use]
    pub fn root(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            attribute: None,
        }
    }

    /// Additionally require the root attribute `name` to equal `value`.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attribute = Some((name.into(), value.into()));
        self
    }

    /// Check whether a payload carries this key.
    ///
    /// Decodes the payload from scratch. Any decode problem is a non-match.
    pub fn matches(&self, payload: &[u8]) -> bool {
        let doc = match parse_payload(payload) {
            Ok(doc) => doc,
            Err(err) => {
                tracing::trace!(error = %err, root = %self.root, "Payload not recognized");
                return false;
            }
        };
        let root = doc.root_element();

        if get_tag_name(root) != self.root {
            return false;
        }

        match &self.attribute {
            Some((name, value)) => get_attribute(root, name) == Some(value.as_str()),
            None => true,
        }
    }
}
