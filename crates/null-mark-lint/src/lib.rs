//! # null-mark-lint
//!
//! Lint requiring nullability marker annotations on Java-like method
//! parameters and return values.
//!
//! This is the facade crate that re-exports the core framework and the rules.
//! Hosts parse their sources, hand the trees over as [`SyntaxTree`]s (built
//! with [`TreeBuilder`] or deserialized from a [`TreeDto`]) and receive a
//! [`LintResult`] of structured violations.
//!
//! ## Configuration
//!
//! ```toml
//! preset = "default"
//!
//! [rules.method-parameter-null-mark]
//! severity = "warning"
//! nullable_pattern = "^(Nullable|CheckForNull)$"
//! not_null_pattern = "^(NotNull|Nonnull)$"
//! suppression_pattern = '^\s*no-null-mark\s*$'
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use null_mark_lint::{analyzer_from_dir, SyntaxTree};
//!
//! let analyzer = analyzer_from_dir(project_root)?;
//! let tree = SyntaxTree::from_json(&host_output)?;
//! for violation in analyzer.analyze(&tree).violations {
//!     eprintln!("{violation}");
//! }
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use null_mark_core::*;

/// Null-mark rules and presets.
pub mod rules {
    pub use null_mark_rules::*;
}

mod loader;

pub use loader::{
    analyzer_from_config, analyzer_from_dir, analyzer_from_file, LoadError, CONFIG_CANDIDATES,
};
