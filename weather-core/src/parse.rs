//! Parsers for the three SMG document schemas.
//!
//! All three share the same extraction policy: look an element up by its
//! fixed tag name anywhere under the given scope instead of walking a
//! positional path, so upstream reordering or extra wrapper elements do not
//! break extraction. A missing element degrades the field to `None`; only a
//! document that fails to parse as XML at all is an error.

use roxmltree::Node;

pub mod current;
pub mod seven_day;
pub mod today;

/// First element named `name` anywhere under `scope` (including `scope`
/// itself), in document order.
pub(crate) fn find_element<'a, 'input>(
    scope: Node<'a, 'input>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    scope
        .descendants()
        .find(|n| n.is_element() && n.has_tag_name(name))
}

/// Text content of the first element named `name` under `scope`, or `None`
/// if no such element exists. An element that is present but empty yields
/// an empty string, which is distinct from absence.
pub(crate) fn find_field(scope: Node<'_, '_>, name: &str) -> Option<String> {
    find_element(scope, name).map(element_text)
}

/// Flatten an element to plain text: concatenate every descendant text
/// node with whitespace collapsed, so embedded markup inside description
/// blocks reads as one line-oriented string.
pub(crate) fn element_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
