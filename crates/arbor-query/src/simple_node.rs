//! Simple in-memory tree implementation of [`DomNode`] used in tests and
//! quick prototypes.
//!
//! Focus:
//! - Ergonomic builder for quick test tree creation
//! - Cheap handle semantics (`Arc`-backed, identity equality)
//! - Interned tags so matcher comparisons stay O(1)
//!
//! Example:
//! ```
//! use arbor_query::simple_node::{elem, text};
//! use arbor_query::{DomNode, tag};
//!
//! // <root id="r"><child>Hello</child><child world="yes"/></root>
//! let root = elem("root")
//!     .attr("id", "r")
//!     .child(elem("child").child(text("Hello")))
//!     .child(elem("child").attr("world", "yes"))
//!     .build();
//!
//! assert_eq!(root.tag(), Some(tag("root")));
//! assert_eq!(root.children().len(), 2);
//! assert_eq!(root.attribute("id").as_deref(), Some("r"));
//! ```

use std::fmt;
use std::sync::Arc;

use compact_str::CompactString;

use crate::model::{DomNode, NodeKind, Tag};

#[derive(Debug)]
struct Inner {
    kind: NodeKind,
    tag: Option<Tag>,
    text: Option<CompactString>,
    attributes: Vec<(CompactString, CompactString)>,
    children: Vec<SimpleNode>,
}

/// A simple Arc-backed node implementation.
#[derive(Clone)]
pub struct SimpleNode(Arc<Inner>);

impl PartialEq for SimpleNode {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl Eq for SimpleNode {}

impl fmt::Debug for SimpleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleNode")
            .field("kind", &self.0.kind)
            .field("tag", &self.0.tag)
            .field("attributes", &self.0.attributes)
            .finish()
    }
}

impl SimpleNode {
    /// Start building an element node with the given tag.
    pub fn element(tag: &str) -> SimpleNodeBuilder {
        SimpleNodeBuilder {
            tag: Tag::from(tag),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A raw text leaf.
    pub fn text(value: &str) -> SimpleNode {
        SimpleNode(Arc::new(Inner {
            kind: NodeKind::Text,
            tag: None,
            text: Some(CompactString::new(value)),
            attributes: Vec::new(),
            children: Vec::new(),
        }))
    }

    /// Text content of this leaf, `None` for elements.
    pub fn text_value(&self) -> Option<&str> {
        self.0.text.as_deref()
    }
}

pub struct SimpleNodeBuilder {
    tag: Tag,
    attributes: Vec<(CompactString, CompactString)>,
    children: Vec<SimpleNode>,
}

impl SimpleNodeBuilder {
    /// Set an attribute. Names must be unique per node; setting an existing
    /// name replaces its value.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| n.as_str() == name) {
            slot.1 = CompactString::new(value);
        } else {
            self.attributes
                .push((CompactString::new(name), CompactString::new(value)));
        }
        self
    }

    /// Append a child; accepts built nodes and nested builders alike.
    pub fn child(mut self, child: impl Into<SimpleNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, it: I) -> Self
    where
        I: IntoIterator<Item = SimpleNode>,
    {
        self.children.extend(it);
        self
    }

    pub fn build(self) -> SimpleNode {
        SimpleNode(Arc::new(Inner {
            kind: NodeKind::Element,
            tag: Some(self.tag),
            text: None,
            attributes: self.attributes,
            children: self.children,
        }))
    }
}

impl From<SimpleNodeBuilder> for SimpleNode {
    fn from(b: SimpleNodeBuilder) -> Self {
        b.build()
    }
}

// Convenience helper functions for concise test code
pub fn elem(tag: &str) -> SimpleNodeBuilder {
    SimpleNode::element(tag)
}
pub fn text(v: &str) -> SimpleNode {
    SimpleNode::text(v)
}

impl DomNode for SimpleNode {
    fn kind(&self) -> NodeKind {
        self.0.kind
    }

    fn tag(&self) -> Option<Tag> {
        self.0.tag.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0
            .attributes
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v.to_string())
    }

    fn children(&self) -> Vec<Self> {
        self.0.children.clone()
    }
}
