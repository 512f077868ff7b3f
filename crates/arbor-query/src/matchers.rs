//! Matcher primitives over [`DomNode`] trees.
//!
//! Two families with deliberately different root handling:
//!
//! - Shallow matchers scan the direct children of the given node and never
//!   consider the node itself. A text leaf or otherwise childless argument
//!   simply yields no matches.
//! - Deep matchers run a pre-order depth-first search that tests the given
//!   node first and then recurses into element children left-to-right,
//!   returning on the first hit. The root itself is eligible to match.
//!
//! Equality contract: tag comparison is interned-atom identity; attribute
//! comparison trims surrounding whitespace from the stored value and then
//! requires exact equality with the (pre-trimmed) query value. The regex
//! variants test the raw, untrimmed attribute value instead.

use fancy_regex::Regex;

use crate::error::Error;
use crate::model::{DomNode, Tag};

/// All direct element children of `node` whose tag is identical to `tag`,
/// in child order. Text entries are skipped; nothing short-circuits.
pub fn collect_children_by_tag<N: DomNode>(tag: &Tag, node: &N) -> Vec<N> {
    node.children()
        .into_iter()
        .filter(|c| c.tag().is_some_and(|t| t == *tag))
        .collect()
}

/// First direct child whose tag is identical to `tag`; stops scanning at the
/// first hit.
pub fn find_child_by_tag<N: DomNode>(tag: &Tag, node: &N) -> Option<N> {
    node.children()
        .into_iter()
        .find(|c| c.tag().is_some_and(|t| t == *tag))
}

/// First direct element child carrying attribute `name` whose trimmed value
/// equals `value` exactly. Children without the attribute (and text entries)
/// are skipped, not treated as mismatches that stop the scan.
pub fn find_child_by_attr<N: DomNode>(name: &str, value: &str, node: &N) -> Option<N> {
    node.children()
        .into_iter()
        .filter(|c| c.is_element())
        .find(|c| c.attribute(name).is_some_and(|v| v.trim() == value))
}

/// [`find_child_by_attr`] with `name` fixed to `class`.
pub fn find_child_by_class<N: DomNode>(value: &str, node: &N) -> Option<N> {
    find_child_by_attr("class", value, node)
}

/// Pre-order search for the first node (including `node` itself) whose tag
/// is identical to `tag`.
pub fn find_descendant_by_tag<N: DomNode>(tag: &Tag, node: &N) -> Option<N> {
    if node.tag().is_some_and(|t| t == *tag) {
        return Some(node.clone());
    }
    node.children()
        .iter()
        .filter(|c| c.is_element())
        .find_map(|c| find_descendant_by_tag(tag, c))
}

/// Pre-order search for the first node (including `node` itself) whose
/// attribute `name` is present and trim-equal to `value`.
pub fn find_descendant_by_attr<N: DomNode>(name: &str, value: &str, node: &N) -> Option<N> {
    if node.attribute(name).is_some_and(|v| v.trim() == value) {
        return Some(node.clone());
    }
    node.children()
        .iter()
        .filter(|c| c.is_element())
        .find_map(|c| find_descendant_by_attr(name, value, c))
}

/// Pre-order search for the first node whose raw attribute value matches the
/// regular expression `pattern`.
///
/// Pattern compilation happens once up front; a rejected pattern (or a match
/// aborted by the regex engine) is propagated as [`Error::Regex`], never
/// folded into a "no match" result.
pub fn find_descendant_by_attr_match<N: DomNode>(
    name: &str,
    pattern: &str,
    node: &N,
) -> Result<Option<N>, Error> {
    let re = Regex::new(pattern)?;
    descend_regex(name, &re, node)
}

fn descend_regex<N: DomNode>(name: &str, re: &Regex, node: &N) -> Result<Option<N>, Error> {
    if let Some(v) = node.attribute(name) {
        if re.is_match(&v)? {
            return Ok(Some(node.clone()));
        }
    }
    for c in node.children() {
        if !c.is_element() {
            continue;
        }
        if let Some(hit) = descend_regex(name, re, &c)? {
            return Ok(Some(hit));
        }
    }
    Ok(None)
}

/// [`find_descendant_by_attr`] with `name` fixed to `class`.
pub fn find_descendant_by_class<N: DomNode>(value: &str, node: &N) -> Option<N> {
    find_descendant_by_attr("class", value, node)
}

/// [`find_descendant_by_attr`] with `name` fixed to `id`.
pub fn find_descendant_by_id<N: DomNode>(value: &str, node: &N) -> Option<N> {
    find_descendant_by_attr("id", value, node)
}

/// [`find_descendant_by_attr_match`] with `name` fixed to `class`.
pub fn find_descendant_by_class_match<N: DomNode>(
    pattern: &str,
    node: &N,
) -> Result<Option<N>, Error> {
    find_descendant_by_attr_match("class", pattern, node)
}

/// [`find_descendant_by_attr_match`] with `name` fixed to `id`.
pub fn find_descendant_by_id_match<N: DomNode>(
    pattern: &str,
    node: &N,
) -> Result<Option<N>, Error> {
    find_descendant_by_attr_match("id", pattern, node)
}
