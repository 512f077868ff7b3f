//! Descent composer: a declarative step list compiled into one chained
//! lookup.
//!
//! Each [`MatchStep`] narrows the previous step's result by one tree level
//! using the shallow matchers only (deep search does not compose through
//! this mechanism). A step either carries a single candidate value or
//! branches over several candidates whose per-candidate results are handed
//! to a caller-supplied combinator.
//!
//! The branch contract is strict about evaluation shape: the shared prefix
//! (everything before the branching step, including the root expression) is
//! evaluated exactly once and bound locally, every candidate matcher runs
//! against that identical bound node, and the combinator receives the
//! results positionally in candidate order. The composer itself never picks
//! a winner among candidates.

use core::fmt;
use std::sync::Arc;

use compact_str::CompactString;
use smallvec::SmallVec;
use tracing::trace;

use crate::matchers::{find_child_by_attr, find_child_by_tag};
use crate::model::{DomNode, tag};

/// Which facet of a child node a step matches against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// The reserved tag selector; candidate values are interned and compared
    /// by atom identity.
    Tag,
    /// An attribute name; candidate values are compared by trimmed exact
    /// equality.
    Attr(CompactString),
}

impl Selector {
    fn find_child<N: DomNode>(&self, value: &str, node: &N) -> Option<N> {
        match self {
            Selector::Tag => find_child_by_tag(&tag(value), node),
            Selector::Attr(name) => find_child_by_attr(name, value, node),
        }
    }
}

/// Resolves a branch step: called with the per-candidate matcher results in
/// candidate order, returns whatever should feed the next step.
///
/// The composer imposes no contract beyond the calling convention; arity
/// mismatches between a combinator and its candidate list are a caller
/// error.
pub type Combinator<N> = Arc<dyn Fn(&[Option<N>]) -> Option<N>>;

/// One candidate value, or several resolved by a combinator.
#[derive(Clone)]
pub enum MatchSpec<N> {
    Value(CompactString),
    Branch {
        combinator: Combinator<N>,
        candidates: Vec<CompactString>,
    },
}

impl<N> fmt::Debug for MatchSpec<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchSpec::Value(v) => f.debug_tuple("Value").field(v).finish(),
            MatchSpec::Branch { candidates, .. } => f
                .debug_struct("Branch")
                .field("candidates", candidates)
                .finish_non_exhaustive(),
        }
    }
}

/// One level of a composed descent query.
#[derive(Debug, Clone)]
pub struct MatchStep<N> {
    pub selector: Selector,
    pub spec: MatchSpec<N>,
}

impl<N: DomNode> MatchStep<N> {
    /// Scalar step on the reserved tag selector.
    pub fn tag(value: impl Into<CompactString>) -> Self {
        Self {
            selector: Selector::Tag,
            spec: MatchSpec::Value(value.into()),
        }
    }

    /// Scalar step on an attribute name.
    pub fn attr(name: impl Into<CompactString>, value: impl Into<CompactString>) -> Self {
        Self {
            selector: Selector::Attr(name.into()),
            spec: MatchSpec::Value(value.into()),
        }
    }

    /// Scalar step on the `class` attribute.
    pub fn class(value: impl Into<CompactString>) -> Self {
        Self::attr("class", value)
    }

    /// Branch step on the tag selector.
    pub fn tag_branch<I, V>(combinator: Combinator<N>, candidates: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CompactString>,
    {
        Self {
            selector: Selector::Tag,
            spec: MatchSpec::Branch {
                combinator,
                candidates: candidates.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// Branch step on an attribute name.
    pub fn attr_branch<I, V>(
        name: impl Into<CompactString>,
        combinator: Combinator<N>,
        candidates: I,
    ) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CompactString>,
    {
        Self {
            selector: Selector::Attr(name.into()),
            spec: MatchSpec::Branch {
                combinator,
                candidates: candidates.into_iter().map(Into::into).collect(),
            },
        }
    }

    fn apply(&self, prev: Option<N>) -> Option<N> {
        match &self.spec {
            MatchSpec::Value(v) => prev.and_then(|n| self.selector.find_child(v, &n)),
            MatchSpec::Branch {
                combinator,
                candidates,
            } => {
                // Shared prefix is bound once; every candidate scans the
                // same node.
                let shared = prev;
                let results: SmallVec<[Option<N>; 4]> = candidates
                    .iter()
                    .map(|v| shared.as_ref().and_then(|n| self.selector.find_child(v, n)))
                    .collect();
                combinator(&results)
            }
        }
    }
}

/// Evaluate a composed descent query.
///
/// `root` is the root expression; it is invoked exactly once, before any
/// step runs, even when the first step branches. Each step then narrows the
/// previous result by one level; an absent result simply flows through the
/// remaining steps. An empty step list yields the root expression's value.
pub fn descend<N, R>(root: R, steps: &[MatchStep<N>]) -> Option<N>
where
    N: DomNode,
    R: FnOnce() -> Option<N>,
{
    let mut current = root();
    for step in steps {
        current = step.apply(current);
        trace!(selector = ?step.selector, hit = current.is_some(), "descend step");
    }
    current
}

/// [`descend`] starting from an already-evaluated node.
pub fn descend_from<N: DomNode>(root: &N, steps: &[MatchStep<N>]) -> Option<N> {
    descend(|| Some(root.clone()), steps)
}

/// Or-style combinator: the first non-absent candidate result wins.
pub fn first_some<N: DomNode + 'static>() -> Combinator<N> {
    Arc::new(|results: &[Option<N>]| results.iter().flatten().next().cloned())
}
