use core::fmt;

use string_cache::DefaultAtom;

/// Kind discriminator for tree entries. Text leaves carry no tag and no
/// attributes and are never matchable; they only occupy a child slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element,
    Text,
}

/// Interned element-kind discriminator.
///
/// Tags are canonicalized through a global intern table so two occurrences of
/// the same spelling are the same atom and equality is an O(1) handle
/// comparison, not a character-by-character string compare.
pub type Tag = DefaultAtom;

/// Intern `name` and return its canonical [`Tag`].
pub fn tag(name: &str) -> Tag {
    Tag::from(name)
}

/// Adapter trait for the host tree representation.
///
/// The engine never builds or mutates trees; it only reads them through this
/// seam. Implementations are expected to be cheap handles (index or pointer
/// into a shared tree), cloned freely during traversal.
///
/// Contract:
/// - `tag()` is `None` exactly for text leaves.
/// - `attribute()` is `None` for text leaves and for absent names; attribute
///   names are unique within one node.
/// - `children()` preserves document order and includes text entries.
pub trait DomNode: Clone + Eq + fmt::Debug {
    fn kind(&self) -> NodeKind;
    fn tag(&self) -> Option<Tag>;
    fn attribute(&self, name: &str) -> Option<String>;
    fn children(&self) -> Vec<Self>;

    fn is_element(&self) -> bool {
        self.kind() == NodeKind::Element
    }
}
