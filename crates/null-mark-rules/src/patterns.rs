//! Marker and suppression patterns shared by the null-mark rules.
//!
//! Every pattern is matched against the whole text, never a substring, so
//! `NotNull` does not match `NotNullable`.

use null_mark_core::RuleConfig;
use regex::Regex;
use regex_syntax::hir::{Hir, Look};

/// Default pattern recognizing the nullable marker annotation.
pub const DEFAULT_NULLABLE_PATTERN: &str = "^Nullable$";

/// Default pattern recognizing the not-null marker annotation.
pub const DEFAULT_NOT_NULL_PATTERN: &str = "^NotNull$";

/// Default pattern recognizing a suppression comment body.
pub const DEFAULT_SUPPRESSION_PATTERN: &str = r"^\s*no-null-mark\s*$";

/// Option key for the nullable pattern in a rule's config table.
pub const NULLABLE_PATTERN_KEY: &str = "nullable_pattern";

/// Option key for the not-null pattern in a rule's config table.
pub const NOT_NULL_PATTERN_KEY: &str = "not_null_pattern";

/// Option key for the suppression pattern in a rule's config table.
pub const SUPPRESSION_PATTERN_KEY: &str = "suppression_pattern";

/// An invalid pattern supplied through configuration.
#[derive(Debug, thiserror::Error)]
#[error("invalid {option} `{pattern}`: {source}")]
pub struct PatternError {
    /// Option the pattern was supplied for.
    pub option: &'static str,
    /// The rejected pattern.
    pub pattern: String,
    /// Underlying regex error.
    #[source]
    pub source: regex::Error,
}

/// A regular expression that must match the entire input.
#[derive(Debug, Clone)]
pub struct FullMatch {
    pattern: String,
    regex: Regex,
}

impl FullMatch {
    /// Compiles `pattern` for full-string matching.
    ///
    /// The pattern is parsed on its own and the parsed expression is wrapped
    /// in text anchors, so unbalanced groups are rejected and a verbose-mode
    /// comment cannot reach past the end of the pattern.
    ///
    /// # Errors
    ///
    /// Returns an error naming `option` if the pattern does not compile.
    pub fn new(option: &'static str, pattern: &str) -> Result<Self, PatternError> {
        let invalid = |source| PatternError {
            option,
            pattern: pattern.to_string(),
            source,
        };

        Regex::new(pattern).map_err(invalid)?;
        let hir = regex_syntax::Parser::new()
            .parse(pattern)
            .map_err(|e| invalid(regex::Error::Syntax(e.to_string())))?;
        let whole = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);
        let regex = Regex::new(&whole.to_string()).map_err(invalid)?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Returns the pattern as configured.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns true if the pattern matches all of `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// The three patterns a null-mark rule is configured with.
#[derive(Debug, Clone)]
pub struct NullMarkPatterns {
    nullable: FullMatch,
    not_null: FullMatch,
    suppression: FullMatch,
}

impl NullMarkPatterns {
    /// Compiles the three patterns.
    ///
    /// # Errors
    ///
    /// Returns an error for the first pattern that does not compile.
    pub fn new(nullable: &str, not_null: &str, suppression: &str) -> Result<Self, PatternError> {
        Ok(Self {
            nullable: FullMatch::new(NULLABLE_PATTERN_KEY, nullable)?,
            not_null: FullMatch::new(NOT_NULL_PATTERN_KEY, not_null)?,
            suppression: FullMatch::new(SUPPRESSION_PATTERN_KEY, suppression)?,
        })
    }

    /// Reads the patterns from a rule's config table, falling back to the
    /// defaults for missing keys.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured pattern does not compile.
    pub fn from_rule_config(config: Option<&RuleConfig>) -> Result<Self, PatternError> {
        let Some(config) = config else {
            return Ok(Self::default());
        };
        Self::new(
            config.get_str(NULLABLE_PATTERN_KEY, DEFAULT_NULLABLE_PATTERN),
            config.get_str(NOT_NULL_PATTERN_KEY, DEFAULT_NOT_NULL_PATTERN),
            config.get_str(SUPPRESSION_PATTERN_KEY, DEFAULT_SUPPRESSION_PATTERN),
        )
    }

    /// Pattern recognizing nullable marker annotations.
    #[must_use]
    pub fn nullable(&self) -> &FullMatch {
        &self.nullable
    }

    /// Pattern recognizing not-null marker annotations.
    #[must_use]
    pub fn not_null(&self) -> &FullMatch {
        &self.not_null
    }

    /// Pattern recognizing suppression comment bodies.
    #[must_use]
    pub fn suppression(&self) -> &FullMatch {
        &self.suppression
    }
}

impl Default for NullMarkPatterns {
    #[allow(clippy::expect_used)] // constant patterns
    fn default() -> Self {
        Self::new(
            DEFAULT_NULLABLE_PATTERN,
            DEFAULT_NOT_NULL_PATTERN,
            DEFAULT_SUPPRESSION_PATTERN,
        )
        .expect("default null-mark patterns compile")
    }
}
