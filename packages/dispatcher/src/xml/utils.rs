//! XML utility functions for decoding payloads and reading their fields.

use roxmltree::{Document, Node};

use crate::config::parsing_options;
use crate::error::Result;

/// Decode a raw payload into a DOM tree.
///
/// The payload must be UTF-8. Every call parses from scratch; nothing is
/// cached between calls.
///
/// # Errors
/// Returns `InvalidEncoding` for non-UTF-8 bytes and `XmlParse` for
/// malformed XML.
///
/// # Examples
/// ```
/// use xml_dispatcher::xml::{get_tag_name, parse_payload};
///
/// let payload = b"<report><data>Hello</data></report>";
/// let doc = parse_payload(payload).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "report");
///
/// assert!(parse_payload(b"<report>").is_err());
/// ```
pub fn parse_payload(payload: &[u8]) -> Result<Document<'_>> {
    let text = std::str::from_utf8(payload)?;
    let doc = Document::parse_with_options(text, parsing_options())?;
    Ok(doc)
}

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xml_dispatcher::xml::get_tag_name;
///
/// let doc = Document::parse(r#"<ns:report xmlns:ns="urn:x"/>"#).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "report");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the last child element with the given tag name.
///
/// A repeated field element overrides earlier occurrences.
pub fn find_last_child<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    node.children()
        .rev()
        .find(|child| child.is_element() && get_tag_name(*child) == tag)
}

/// Get the character data of the last child element named `tag`.
///
/// Only the child's own text nodes are concatenated; text inside nested
/// elements is ignored and whitespace is kept as-is. An absent child and
/// an empty child both yield an empty string.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xml_dispatcher::xml::child_text;
///
/// let doc = Document::parse("<report><data>Hello</data></report>").unwrap();
/// assert_eq!(child_text(doc.root_element(), "data"), "Hello");
/// assert_eq!(child_text(doc.root_element(), "missing"), "");
/// ```
pub fn child_text(node: Node<'_, '_>, tag: &str) -> String {
    find_last_child(node, tag)
        .map(|child| {
            child
                .children()
                .filter(|n| n.is_text())
                .filter_map(|n| n.text())
                .collect::<String>()
        })
        .unwrap_or_default()
}

/// Get an attribute value from a node.
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DispatchError;

    #[test]
    fn test_parse_payload_valid() {
        let doc = parse_payload(b"<root><child/></root>").unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "root");
    }

    #[test]
    fn test_parse_payload_malformed() {
        let err = parse_payload(b"<root><child></root>").unwrap_err();
        assert!(matches!(err, DispatchError::XmlParse(_)));
    }

    #[test]
    fn test_parse_payload_empty() {
        let err = parse_payload(b"").unwrap_err();
        assert!(matches!(err, DispatchError::XmlParse(_)));
    }

    #[test]
    fn test_parse_payload_invalid_utf8() {
        let payload: Vec<u8> = vec![b'<', b'a', 0xff, b'/', b'>'];
        let err = parse_payload(&payload).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidEncoding(_)));
    }

    #[test]
    fn test_parse_payload_accepts_doctype() {
        let payload = b"<?xml version=\"1.0\"?><!DOCTYPE report><report/>";
        let doc = parse_payload(payload).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "report");
    }

    #[test]
    fn test_get_tag_name_with_namespace() {
        let doc = parse_payload(br#"<ns:root xmlns:ns="http://example.com"/>"#).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "root");
    }

    #[test]
    fn test_parse_payload_borrows_owned_buffer() {
        let payload = String::from("<report><data>owned</data></report>").into_bytes();
        let doc = parse_payload(&payload).unwrap();
        assert_eq!(child_text(doc.root_element(), "data"), "owned");
    }

    #[test]
    fn test_parse_payload_rejects_trailing_content() {
        let err = parse_payload(b"<report><data>x</data></report><junk/>").unwrap_err();
        assert!(matches!(err, DispatchError::XmlParse(_)));
    }

    #[test]
    fn test_find_last_child() {
        let doc = parse_payload(b"<root><a/><b/></root>").unwrap();
        let root = doc.root_element();

        assert!(find_last_child(root, "a").is_some());
        assert!(find_last_child(root, "c").is_none());
    }

    #[test]
    fn test_find_last_child_ignores_grandchildren() {
        let doc = parse_payload(b"<root><a><b/></a></root>").unwrap();
        assert!(find_last_child(doc.root_element(), "b").is_none());
    }

    #[test]
    fn test_child_text_last_match_wins() {
        let doc = parse_payload(b"<root><v>one</v><x/><v>two</v></root>").unwrap();
        assert_eq!(child_text(doc.root_element(), "v"), "two");
    }

    #[test]
    fn test_child_text_keeps_whitespace() {
        let doc = parse_payload(b"<root><v>  padded  </v></root>").unwrap();
        assert_eq!(child_text(doc.root_element(), "v"), "  padded  ");
    }

    #[test]
    fn test_child_text_skips_nested_elements() {
        let doc = parse_payload(b"<root><v>a<i>b</i>c</v></root>").unwrap();
        assert_eq!(child_text(doc.root_element(), "v"), "ac");
    }

    #[test]
    fn test_child_text_empty_and_absent() {
        let doc = parse_payload(b"<root><v/></root>").unwrap();
        let root = doc.root_element();
        assert_eq!(child_text(root, "v"), "");
        assert_eq!(child_text(root, "w"), "");
    }

    #[test]
    fn test_child_text_unescapes_entities() {
        let doc = parse_payload(b"<root><v>a &amp; b</v></root>").unwrap();
        assert_eq!(child_text(doc.root_element(), "v"), "a & b");
    }

    #[test]
    fn test_get_attribute() {
        let doc = parse_payload(br#"<root type="sales"/>"#).unwrap();
        let root = doc.root_element();

        assert_eq!(get_attribute(root, "type"), Some("sales"));
        assert_eq!(get_attribute(root, "missing"), None);
    }
}
