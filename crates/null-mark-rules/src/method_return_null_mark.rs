//! Rule requiring a nullability marker on every method return value.
//!
//! # Configuration
//!
//! Same options as `method-parameter-null-mark`.
//!
//! # Suppression
//!
//! A line comment after all annotations and before the method itself:
//!
//! ```text
//! @Override
//! // no-null-mark
//! public Object get() {}
//! ```
//!
//! A comment above the annotations belongs to the first annotation and does
//! not suppress. `void` and primitive returns are never checked.

use null_mark_core::{Node, NodeKind, Rule, RuleConfig, Severity, Violation};
use tracing::trace;

use crate::diagnostic::Reporter;
use crate::non_null_type::is_intrinsically_non_null;
use crate::patterns::{NullMarkPatterns, PatternError};
use crate::suppression::{has_suppression_comment, CommentStyle};

/// Rule code for method-return-null-mark.
pub const CODE: &str = "NM002";

/// Rule name for method-return-null-mark.
pub const NAME: &str = "method-return-null-mark";

/// Requires a nullable or not-null annotation on non-void methods.
#[derive(Debug, Clone)]
pub struct MethodReturnNullMark {
    /// Marker and suppression patterns.
    pub patterns: NullMarkPatterns,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for MethodReturnNullMark {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodReturnNullMark {
    /// Creates a new rule with default patterns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: NullMarkPatterns::default(),
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its config table.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured pattern does not compile.
    pub fn from_config(config: Option<&RuleConfig>) -> Result<Self, PatternError> {
        Ok(Self::new().with_patterns(NullMarkPatterns::from_rule_config(config)?))
    }

    /// Sets the marker and suppression patterns.
    #[must_use]
    pub fn with_patterns(mut self, patterns: NullMarkPatterns) -> Self {
        self.patterns = patterns;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn reporter(&self) -> Reporter<'_> {
        Reporter {
            code: CODE,
            name: NAME,
            subject: "method return value",
            suppression_hint: "line comment between the annotations and the method",
            severity: self.severity,
            patterns: &self.patterns,
        }
    }
}

impl Rule for MethodReturnNullMark {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires exactly one nullability marker annotation on each non-void method"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn visits(&self) -> &'static [NodeKind] {
        &[NodeKind::Method]
    }

    fn check(&self, method: Node<'_>) -> Option<Violation> {
        if is_intrinsically_non_null(method.find_first_child(NodeKind::Type)) {
            trace!(rule = NAME, id = ?method.id(), "void or primitive return");
            return None;
        }

        let reporter = self.reporter();
        let Some(modifiers) = method.find_first_child(NodeKind::ModifierList) else {
            return Some(reporter.missing(method));
        };

        if has_suppression_comment(
            modifiers.find_first_child(NodeKind::LineComment),
            CommentStyle::Line,
            self.patterns.suppression(),
        ) {
            trace!(rule = NAME, id = ?method.id(), "suppressed by comment");
            return None;
        }

        match modifiers.find_first_child(NodeKind::Annotation) {
            Some(annotation) => reporter.check_markers(annotation),
            None => Some(reporter.missing(modifiers)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::NullMarkDiagnostic;
    use crate::testutil::{first_of, method, string, untyped_method, Decl, Ty};
    use null_mark_core::{SyntaxTree, TreeBuilder};

    fn check_return(ret: &Decl) -> (SyntaxTree, Option<Violation>) {
        let tree = method(ret, &[]);
        let violation = MethodReturnNullMark::new().check(first_of(&tree, NodeKind::Method));
        (tree, violation)
    }

    fn diagnostic(v: &Violation) -> NullMarkDiagnostic {
        NullMarkDiagnostic::from_kind(&v.kind).unwrap()
    }

    #[test]
    fn single_marker_passes() {
        for name in ["Nullable", "NotNull"] {
            let (_, v) = check_return(&Decl::of(string()).annotated(name).keyword());
            assert!(v.is_none(), "{name}");
        }
    }

    #[test]
    fn void_and_primitive_returns_are_skipped() {
        for kind in NodeKind::PRIMITIVES {
            let (_, v) = check_return(&Decl::bare(Ty::Primitive(kind)));
            assert!(v.is_none(), "{kind}");
        }
    }

    #[test]
    fn primitive_array_return_needs_marker() {
        let (_, v) = check_return(&Decl::of(Ty::PrimitiveArray(NodeKind::Byte)).keyword());
        assert_eq!(v.map(|v| diagnostic(&v)), Some(NullMarkDiagnostic::MissingNullMark));
    }

    #[test]
    fn no_modifiers_reports_missing_at_method() {
        let (tree, v) = check_return(&Decl::bare(string()));
        let v = v.unwrap();
        assert_eq!(diagnostic(&v), NullMarkDiagnostic::MissingNullMark);
        assert_eq!(v.anchor, first_of(&tree, NodeKind::Method).id());
        assert_eq!(v.code, CODE);
    }

    #[test]
    fn no_annotation_reports_missing_at_modifiers() {
        let (tree, v) = check_return(&Decl::of(string()).keyword());
        let v = v.unwrap();
        assert_eq!(diagnostic(&v), NullMarkDiagnostic::MissingNullMark);
        assert_eq!(v.anchor, first_of(&tree, NodeKind::ModifierList).id());
    }

    #[test]
    fn missing_message_matches_parameter_rule() {
        let (_, v) = check_return(&Decl::of(string()).keyword());
        let v = v.unwrap();
        assert_eq!(v.args, vec!["^Nullable$", "^NotNull$"]);
        assert_eq!(
            v.rendered_message(),
            "the method return value does not have a null mark annotation such as ^Nullable$ or ^NotNull$"
        );
    }

    #[test]
    fn unrelated_annotations_report_missing_at_chain_tail() {
        let (tree, v) = check_return(&Decl::of(string()).annotated("Override").keyword());
        let v = v.unwrap();
        assert_eq!(diagnostic(&v), NullMarkDiagnostic::MissingNullMark);
        assert_eq!(tree.node(v.anchor).kind(), NodeKind::Modifier);
    }

    #[test]
    fn both_markers_report_conflict() {
        let (tree, v) = check_return(
            &Decl::of(string())
                .annotated("NotNull")
                .annotated("Nullable")
                .keyword(),
        );
        let v = v.unwrap();
        assert_eq!(diagnostic(&v), NullMarkDiagnostic::ConflictingNullMarks);
        let anchor = tree.node(v.anchor);
        assert_eq!(anchor.parent().map(Node::kind), Some(NodeKind::ModifierList));
    }

    #[test]
    fn line_comment_after_annotations_suppresses() {
        let (_, v) = check_return(
            &Decl::of(string())
                .annotated("A")
                .annotated("B")
                .line_comment(" no-null-mark ")
                .keyword(),
        );
        assert!(v.is_none());
    }

    #[test]
    fn suppression_comment_among_other_comments() {
        let (_, v) = check_return(
            &Decl::of(string())
                .annotated("A")
                .line_comment(" other comment ")
                .line_comment(" no-null-mark ")
                .line_comment(" other comment ")
                .keyword(),
        );
        assert!(v.is_none());
    }

    #[test]
    fn suppression_overrides_conflicting_markers() {
        let (_, v) = check_return(
            &Decl::of(string())
                .annotated("Nullable")
                .annotated("NotNull")
                .line_comment("no-null-mark"),
        );
        assert!(v.is_none());
    }

    #[test]
    fn other_line_comment_does_not_suppress() {
        let (_, v) = check_return(&Decl::of(string()).line_comment(" other comment ").keyword());
        assert!(v.is_some());
    }

    #[test]
    fn block_comment_does_not_suppress_return_value() {
        let (_, v) = check_return(&Decl::of(string()).block_comment("no-null-mark").keyword());
        assert!(v.is_some());
    }

    #[test]
    fn comment_inside_first_annotation_does_not_suppress() {
        let mut b = TreeBuilder::new();
        b.node(NodeKind::Method, |m| {
            m.node(NodeKind::ModifierList, |mods| {
                mods.node(NodeKind::Annotation, |a| {
                    a.line_comment(" no-null-mark ").identifier("A");
                })
                .annotation("B");
            })
            .node(NodeKind::Type, |t| {
                t.identifier("Object");
            });
        });
        let tree = b.finish();
        let v = MethodReturnNullMark::new().check(first_of(&tree, NodeKind::Method));
        assert_eq!(v.map(|v| diagnostic(&v)), Some(NullMarkDiagnostic::MissingNullMark));
    }

    #[test]
    fn method_without_type_is_checked() {
        let tree = untyped_method(&Decl::of(string()).keyword());
        let v = MethodReturnNullMark::new().check(first_of(&tree, NodeKind::Method));
        assert!(v.is_some());

        let tree = untyped_method(&Decl::of(string()).annotated("NotNull"));
        let v = MethodReturnNullMark::new().check(first_of(&tree, NodeKind::Method));
        assert!(v.is_none());
    }

    #[test]
    fn configured_suppression_pattern() {
        let config = null_mark_core::Config::parse(
            "[rules.method-return-null-mark]\nsuppression_pattern = 'nullness:\\s*skip'\n",
        )
        .unwrap();
        let rule = MethodReturnNullMark::from_config(config.rule_config(NAME)).unwrap();

        let tree = method(&Decl::of(string()).line_comment("nullness: skip"), &[]);
        assert!(rule.check(first_of(&tree, NodeKind::Method)).is_none());

        let tree = method(&Decl::of(string()).line_comment(" no-null-mark "), &[]);
        assert!(rule.check(first_of(&tree, NodeKind::Method)).is_some());
    }
}
