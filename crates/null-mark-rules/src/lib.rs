//! # null-mark-rules
//!
//! Lint rules requiring nullability marker annotations.
//!
//! Each rule inspects a [`null_mark_core::SyntaxTree`] and reports a
//! reference-typed declaration that carries neither or both of the two marker
//! annotations, unless a suppression comment opts it out.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | NM001 | `method-parameter-null-mark` | Requires a marker on every method parameter |
//! | NM002 | `method-return-null-mark` | Requires a marker on every non-void method |
//!
//! ## Usage
//!
//! ```ignore
//! use null_mark_core::Analyzer;
//! use null_mark_rules::{MethodParameterNullMark, MethodReturnNullMark};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(MethodParameterNullMark::new())
//!     .rule(MethodReturnNullMark::new())
//!     .build();
//! let result = analyzer.analyze(&tree);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod diagnostic;
mod markers;
mod method_parameter_null_mark;
mod method_return_null_mark;
mod non_null_type;
mod patterns;
mod presets;
mod suppression;
#[cfg(test)]
mod testutil;

pub use diagnostic::NullMarkDiagnostic;
pub use markers::{classify_markers, MarkerScan, MarkerVerdict};
pub use method_parameter_null_mark::MethodParameterNullMark;
pub use method_return_null_mark::MethodReturnNullMark;
pub use non_null_type::is_intrinsically_non_null;
pub use patterns::{
    FullMatch, NullMarkPatterns, PatternError, DEFAULT_NOT_NULL_PATTERN,
    DEFAULT_NULLABLE_PATTERN, DEFAULT_SUPPRESSION_PATTERN, NOT_NULL_PATTERN_KEY,
    NULLABLE_PATTERN_KEY, SUPPRESSION_PATTERN_KEY,
};
pub use presets::{all_rules, rules_from_config, LoadRulesError, Preset};
pub use suppression::{has_suppression_comment, CommentStyle};

/// Re-export core types for convenience.
pub use null_mark_core::{Rule, Severity, Violation};
