//! Suppression comment scanning.

use null_mark_core::{Node, NodeKind};

use crate::patterns::FullMatch;

/// Comment shape a suppression scan looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `/* ... */`
    Block,
    /// `// ...`
    Line,
}

impl CommentStyle {
    /// Returns the node kind of comments in this style.
    #[must_use]
    pub fn node_kind(self) -> NodeKind {
        match self {
            Self::Block => NodeKind::BlockComment,
            Self::Line => NodeKind::LineComment,
        }
    }
}

/// Returns true if `start` or one of its following siblings is a comment of
/// the given style whose whole body matches `pattern`.
///
/// Only the sibling chain is scanned, never children of the siblings.
///
/// # Panics
///
/// Panics if a comment node in the chain has no comment-body child, or the
/// body has no text.
#[must_use]
pub fn has_suppression_comment(
    start: Option<Node<'_>>,
    style: CommentStyle,
    pattern: &FullMatch,
) -> bool {
    start
        .into_iter()
        .flat_map(Node::siblings)
        .filter(|node| node.kind() == style.node_kind())
        .any(|comment| {
            let body = comment.require_child(NodeKind::CommentBody);
            pattern.is_match(body.require_text())
        })
}
