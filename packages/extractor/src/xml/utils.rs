//! XML utility functions for navigating and extracting data from DOM trees.
//!
//! All lookups compare local tag names, so a default `xmlns` on `<Return>`
//! (as e-file documents carry) does not affect matching.

use roxmltree::Node;

use crate::error::{ExtractorError, Result};

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use irs990_extractor::xml::get_tag_name;
///
/// let xml = r#"<Return xmlns="http://www.irs.gov/efile"><ReturnHeader/></Return>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "Return");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with a specific tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Name used for `node` in error messages.
fn context_name(node: Node<'_, '_>) -> String {
    if node.is_root() {
        "document".to_string()
    } else {
        get_tag_name(node).to_string()
    }
}

/// Get the single direct child element named `tag`.
///
/// # Returns
/// * `Ok(Some(child))` when exactly one child matches
/// * `Ok(None)` when nothing matches and `optional` is set
/// * `Err(Structure)` when nothing matches and the child is required
/// * `Err(MultipleMatches)` when more than one child matches, optional or not
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use irs990_extractor::xml::get_unique_child;
///
/// let doc = Document::parse("<Filer><EIN>123</EIN></Filer>").unwrap();
/// let filer = doc.root_element();
///
/// assert!(get_unique_child(filer, "EIN", false).unwrap().is_some());
/// assert!(get_unique_child(filer, "PhoneNum", true).unwrap().is_none());
/// assert!(get_unique_child(filer, "PhoneNum", false).is_err());
/// ```
pub fn get_unique_child<'a, 'input>(
    parent: Node<'a, 'input>,
    tag: &str,
    optional: bool,
) -> Result<Option<Node<'a, 'input>>> {
    let mut matches = parent.children().filter(|child| has_tag(*child, tag));

    let Some(first) = matches.next() else {
        if optional {
            return Ok(None);
        }
        return Err(ExtractorError::structure(tag, context_name(parent)));
    };

    let extra = matches.count();
    if extra > 0 {
        return Err(ExtractorError::MultipleMatches {
            element: tag.to_string(),
            context: context_name(parent),
            count: extra + 1,
        });
    }

    Ok(Some(first))
}

/// Get the single direct child element named `tag`, failing when absent.
pub fn get_required_child<'a, 'input>(
    parent: Node<'a, 'input>,
    tag: &str,
) -> Result<Node<'a, 'input>> {
    get_unique_child(parent, tag, false)?
        .ok_or_else(|| ExtractorError::structure(tag, context_name(parent)))
}

/// Read the trimmed text of the unique child `tag`.
///
/// Returns an empty string when the child is absent and `optional` is set.
/// A child that exists but has no text is a `MissingValue` error.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use irs990_extractor::xml::get_text;
///
/// let doc = Document::parse("<Filer><EIN> 123456789 </EIN><Empty/></Filer>").unwrap();
/// let filer = doc.root_element();
///
/// assert_eq!(get_text(filer, "EIN", false).unwrap(), "123456789");
/// assert_eq!(get_text(filer, "PhoneNum", true).unwrap(), "");
/// assert!(get_text(filer, "Empty", true).is_err());
/// ```
pub fn get_text(parent: Node<'_, '_>, tag: &str, optional: bool) -> Result<String> {
    Ok(read_text(parent, tag, optional)?.unwrap_or_default())
}

/// Read the trimmed text of an optional child `tag`, `None` when absent.
pub fn get_optional_text(parent: Node<'_, '_>, tag: &str) -> Result<Option<String>> {
    read_text(parent, tag, true)
}

fn read_text(parent: Node<'_, '_>, tag: &str, optional: bool) -> Result<Option<String>> {
    let Some(element) = get_unique_child(parent, tag, optional)? else {
        return Ok(None);
    };

    element
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(|text| Some(text.to_string()))
        .ok_or_else(|| ExtractorError::missing_value(tag, context_name(parent)))
}

/// Get every element named `tag` anywhere beneath `parent`, in document order.
///
/// `parent` itself is never part of the result.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use irs990_extractor::xml::get_all_descendants;
///
/// let xml = "<a><Grp>1</Grp><b><Grp>2</Grp></b></a>";
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_all_descendants(doc.root(), "Grp").len(), 2);
/// ```
pub fn get_all_descendants<'a, 'input>(
    parent: Node<'a, 'input>,
    tag: &str,
) -> Vec<Node<'a, 'input>> {
    parent
        .descendants()
        .skip(1)
        .filter(|node| has_tag(*node, tag))
        .collect()
}
