//! Rule requiring a nullability marker on every method parameter.
//!
//! # Rationale
//!
//! A parameter whose nullability is undeclared forces every caller and the
//! method body to guess. This rule requires exactly one of the two marker
//! annotations on each parameter of reference type.
//!
//! # Configuration
//!
//! - `nullable_pattern`: Nullable marker name (default: `^Nullable$`)
//! - `not_null_pattern`: Not-null marker name (default: `^NotNull$`)
//! - `suppression_pattern`: Suppression comment body (default: `^\s*no-null-mark\s*$`)
//!
//! # Suppression
//!
//! A block comment in front of the parameter type:
//!
//! ```text
//! void accept(/* no-null-mark */ Object anything) {}
//! ```
//!
//! Primitive parameters are never checked. Lambda and constructor parameters
//! are out of scope.

use null_mark_core::{Node, NodeKind, Rule, RuleConfig, Severity, Violation};
use tracing::trace;

use crate::diagnostic::Reporter;
use crate::non_null_type::is_intrinsically_non_null;
use crate::patterns::{NullMarkPatterns, PatternError};
use crate::suppression::{has_suppression_comment, CommentStyle};

/// Rule code for method-parameter-null-mark.
pub const CODE: &str = "NM001";

/// Rule name for method-parameter-null-mark.
pub const NAME: &str = "method-parameter-null-mark";

/// Requires a nullable or not-null annotation on method parameters.
#[derive(Debug, Clone)]
pub struct MethodParameterNullMark {
    /// Marker and suppression patterns.
    pub patterns: NullMarkPatterns,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for MethodParameterNullMark {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodParameterNullMark {
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
            subject: "method parameter",
            suppression_hint: "block comment before the parameter type",
            severity: self.severity,
            patterns: &self.patterns,
        }
    }
}

impl Rule for MethodParameterNullMark {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires exactly one nullability marker annotation on each method parameter"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn visits(&self) -> &'static [NodeKind] {
        &[NodeKind::Parameter]
    }

    fn check(&self, parameter: Node<'_>) -> Option<Violation> {
        if !is_method_parameter(parameter) {
            return None;
        }

        let ty = parameter.require_child(NodeKind::Type);
        if is_intrinsically_non_null(Some(ty)) {
            trace!(rule = NAME, id = ?parameter.id(), "primitive parameter");
            return None;
        }

        if has_suppression_comment(
            ty.first_child(),
            CommentStyle::Block,
            self.patterns.suppression(),
        ) {
            trace!(rule = NAME, id = ?parameter.id(), "suppressed by comment");
            return None;
        }

        let reporter = self.reporter();
        match parameter
            .find_first_child(NodeKind::ModifierList)
            .and_then(|modifiers| modifiers.find_first_child(NodeKind::Annotation))
        {
            Some(annotation) => reporter.check_markers(annotation),
            None => Some(reporter.missing(parameter)),
        }
    }
}

/// Parameters belong to a method when their list hangs directly off it.
fn is_method_parameter(parameter: Node<'_>) -> bool {
    parameter
        .parent()
        .filter(|list| list.kind() == NodeKind::ParameterList)
        .and_then(Node::parent)
        .is_some_and(|owner| owner.kind() == NodeKind::Method)
}
