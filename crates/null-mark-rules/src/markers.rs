//! Marker annotation validation.

use null_mark_core::{Node, NodeKind};

use crate::patterns::FullMatch;

/// Outcome of scanning an annotation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerScan<'t> {
    /// An annotation matched the nullable pattern.
    pub has_nullable: bool,
    /// An annotation matched the not-null pattern.
    pub has_not_null: bool,
    /// Last node of the scanned chain; where a finding is reported.
    pub anchor: Node<'t>,
}

/// Classification of a [`MarkerScan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerVerdict {
    /// Only the nullable marker is present.
    Nullable,
    /// Only the not-null marker is present.
    NotNull,
    /// Both markers are present.
    Conflicting,
    /// Neither marker is present.
    Missing,
}

impl MarkerScan<'_> {
    /// Classifies the scan.
    #[must_use]
    pub fn verdict(&self) -> MarkerVerdict {
        match (self.has_nullable, self.has_not_null) {
            (true, true) => MarkerVerdict::Conflicting,
            (true, false) => MarkerVerdict::Nullable,
            (false, true) => MarkerVerdict::NotNull,
            (false, false) => MarkerVerdict::Missing,
        }
    }
}

/// Scans `start` and its following siblings for marker annotations.
///
/// Each annotation's identifier is matched against both patterns
/// independently, so a single annotation can count as both markers when the
/// patterns overlap. Other siblings are skipped but still move the anchor.
///
/// # Panics
///
/// Panics if an annotation in the chain has no identifier child, or its
/// identifier has no text.
#[must_use]
pub fn classify_markers<'t>(
    start: Node<'t>,
    nullable: &FullMatch,
    not_null: &FullMatch,
) -> MarkerScan<'t> {
    let initial = MarkerScan {
        has_nullable: false,
        has_not_null: false,
        anchor: start,
    };

    start.siblings().fold(initial, |mut scan, node| {
        scan.anchor = node;
        if node.kind() == NodeKind::Annotation {
            let name = node.require_child(NodeKind::Identifier).require_text();
            scan.has_nullable |= nullable.is_match(name);
            scan.has_not_null |= not_null.is_match(name);
        }
        scan
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{NullMarkPatterns, NOT_NULL_PATTERN_KEY, NULLABLE_PATTERN_KEY};
    use null_mark_core::{SyntaxTree, TreeBuilder};

    fn modifiers(build: impl FnOnce(&mut TreeBuilder)) -> SyntaxTree {
        let mut b = TreeBuilder::new();
        b.node(NodeKind::ModifierList, build);
        b.finish()
    }

    fn scan_default(tree: &SyntaxTree) -> MarkerScan<'_> {
        let patterns = NullMarkPatterns::default();
        let first = tree
            .root()
            .and_then(|m| m.find_first_child(NodeKind::Annotation))
            .unwrap();
        classify_markers(first, patterns.nullable(), patterns.not_null())
    }

    #[test]
    fn single_not_null() {
        let tree = modifiers(|m| {
            m.annotation("NotNull");
        });
        assert_eq!(scan_default(&tree).verdict(), MarkerVerdict::NotNull);
    }

    #[test]
    fn single_nullable_among_other_annotations() {
        let tree = modifiers(|m| {
            m.annotation("Override").annotation("Nullable").annotation("Deprecated");
        });
        assert_eq!(scan_default(&tree).verdict(), MarkerVerdict::Nullable);
    }

    #[test]
    fn both_markers_conflict() {
        let tree = modifiers(|m| {
            m.annotation("Nullable").annotation("NotNull");
        });
        assert_eq!(scan_default(&tree).verdict(), MarkerVerdict::Conflicting);
    }

    #[test]
    fn unrelated_annotations_are_missing() {
        let tree = modifiers(|m| {
            m.annotation("Override");
        });
        assert_eq!(scan_default(&tree).verdict(), MarkerVerdict::Missing);
    }

    #[test]
    fn anchor_is_tail_of_chain() {
        let tree = modifiers(|m| {
            m.annotation("NotNull").leaf(NodeKind::Modifier).leaf(NodeKind::Modifier);
        });
        let scan = scan_default(&tree);
        let last = tree.root().unwrap().children().last().unwrap();
        assert_eq!(scan.anchor, last);
        assert_eq!(scan.anchor.kind(), NodeKind::Modifier);
    }

    #[test]
    fn anchor_is_start_for_single_node_chain() {
        let tree = modifiers(|m| {
            m.annotation("Override");
        });
        let scan = scan_default(&tree);
        assert_eq!(scan.anchor.kind(), NodeKind::Annotation);
    }

    #[test]
    fn overlapping_patterns_make_one_annotation_conflict() {
        let tree = modifiers(|m| {
            m.annotation("NullMark");
        });
        let nullable = FullMatch::new(NULLABLE_PATTERN_KEY, "Null.*").unwrap();
        let not_null = FullMatch::new(NOT_NULL_PATTERN_KEY, ".*Mark").unwrap();
        let first = tree.root().unwrap().first_child().unwrap();
        let scan = classify_markers(first, &nullable, &not_null);
        assert_eq!(scan.verdict(), MarkerVerdict::Conflicting);
    }

    #[test]
    #[should_panic(expected = "identifier node at 0:0 has no text")]
    fn annotation_identifier_without_text_is_malformed() {
        let tree = modifiers(|m| {
            m.node(NodeKind::Annotation, |a| {
                a.leaf(NodeKind::Identifier);
            });
        });
        let _ = scan_default(&tree);
    }

    #[test]
    #[should_panic(expected = "annotation node at 0:0 has no identifier child")]
    fn annotation_without_identifier_is_malformed() {
        let tree = modifiers(|m| {
            m.leaf(NodeKind::Annotation);
        });
        let _ = scan_default(&tree);
    }
}
