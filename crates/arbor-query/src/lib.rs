pub mod error;
pub mod matchers;
pub mod model;
pub mod query;
pub mod simple_node;

pub use error::Error;
pub use matchers::{
    collect_children_by_tag, find_child_by_attr, find_child_by_class, find_child_by_tag,
    find_descendant_by_attr, find_descendant_by_attr_match, find_descendant_by_class,
    find_descendant_by_class_match, find_descendant_by_id, find_descendant_by_id_match,
    find_descendant_by_tag,
};
pub use model::{DomNode, NodeKind, Tag, tag};
pub use query::{Combinator, MatchSpec, MatchStep, Selector, descend, descend_from, first_some};
pub use simple_node::{SimpleNode, SimpleNodeBuilder, elem, text};
