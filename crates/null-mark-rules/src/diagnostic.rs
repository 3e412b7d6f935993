//! Findings reported by the null-mark rules.

use null_mark_core::{Node, Severity, Suggestion, Violation};
use tracing::trace;

use crate::markers::{classify_markers, MarkerVerdict};
use crate::patterns::NullMarkPatterns;

/// Kind of a null-mark finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullMarkDiagnostic {
    /// Neither marker annotation is present.
    MissingNullMark,
    /// Both marker annotations are present.
    ConflictingNullMarks,
}

impl NullMarkDiagnostic {
    /// Returns the kind string stored in [`Violation::kind`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingNullMark => "missing-null-mark",
            Self::ConflictingNullMarks => "conflicting-null-marks",
        }
    }

    /// Recovers the diagnostic from a violation's kind string.
    #[must_use]
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "missing-null-mark" => Some(Self::MissingNullMark),
            "conflicting-null-marks" => Some(Self::ConflictingNullMarks),
            _ => None,
        }
    }
}

/// Builds violations for one rule.
pub(crate) struct Reporter<'r> {
    pub code: &'static str,
    pub name: &'static str,
    /// What is being checked, e.g. "method parameter".
    pub subject: &'static str,
    /// Where a suppression comment goes for this subject.
    pub suppression_hint: &'static str,
    pub severity: Severity,
    pub patterns: &'r NullMarkPatterns,
}

impl Reporter<'_> {
    /// Runs the marker validator from `first_annotation` and reports a
    /// conflicting or missing verdict at the chain's tail.
    pub fn check_markers(&self, first_annotation: Node<'_>) -> Option<Violation> {
        let scan = classify_markers(
            first_annotation,
            self.patterns.nullable(),
            self.patterns.not_null(),
        );
        match scan.verdict() {
            MarkerVerdict::Conflicting => Some(self.report(
                NullMarkDiagnostic::ConflictingNullMarks,
                scan.anchor,
            )),
            MarkerVerdict::Missing => {
                Some(self.report(NullMarkDiagnostic::MissingNullMark, scan.anchor))
            }
            verdict @ (MarkerVerdict::Nullable | MarkerVerdict::NotNull) => {
                trace!(rule = self.name, ?verdict, "null mark present");
                None
            }
        }
    }

    pub fn missing(&self, anchor: Node<'_>) -> Violation {
        self.report(NullMarkDiagnostic::MissingNullMark, anchor)
    }

    fn report(&self, diagnostic: NullMarkDiagnostic, anchor: Node<'_>) -> Violation {
        let (message, suggestion) = match diagnostic {
            NullMarkDiagnostic::MissingNullMark => (
                format!(
                    "the {} does not have a null mark annotation such as {{0}} or {{1}}",
                    self.subject
                ),
                format!(
                    "Annotate it with exactly one marker, or add a {} matching `{}`",
                    self.suppression_hint,
                    self.patterns.suppression().as_str()
                ),
            ),
            NullMarkDiagnostic::ConflictingNullMarks => (
                format!(
                    "the {} has both a nullable ({{0}}) and a not-null ({{1}}) annotation",
                    self.subject
                ),
                "Keep only one of the two marker annotations".to_string(),
            ),
        };

        // Both rules use one template per diagnostic, with `{0}` always the
        // nullable pattern and `{1}` always the not-null pattern.
        Violation::new(
            self.code,
            self.name,
            diagnostic.as_str(),
            self.severity,
            anchor,
            message,
        )
        .with_args([self.patterns.nullable().as_str(), self.patterns.not_null().as_str()])
        .with_suggestion(Suggestion::new(suggestion))
    }
}
