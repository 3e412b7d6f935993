//! Rule presets for common configurations.

use null_mark_core::{Config, RuleBox, RuleConfig, Severity};
use tracing::debug;

use crate::patterns::PatternError;
use crate::{method_parameter_null_mark, method_return_null_mark};
use crate::{MethodParameterNullMark, MethodReturnNullMark};

/// Preset configurations for null-mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Parameters and return values.
    #[default]
    Default,
    /// Method parameters only.
    ParametersOnly,
    /// Method return values only.
    ReturnValuesOnly,
}

impl Preset {
    /// Returns the rules for this preset with default patterns.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        let mut rules: Vec<RuleBox> = Vec::with_capacity(2);
        if self.includes(method_parameter_null_mark::NAME) {
            rules.push(Box::new(MethodParameterNullMark::new()));
        }
        if self.includes(method_return_null_mark::NAME) {
            rules.push(Box::new(MethodReturnNullMark::new()));
        }
        rules
    }

    /// Looks up a preset by its config name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::Default),
            "parameters-only" => Some(Self::ParametersOnly),
            "return-values-only" => Some(Self::ReturnValuesOnly),
            _ => None,
        }
    }

    /// Returns the config name of this preset.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::ParametersOnly => "parameters-only",
            Self::ReturnValuesOnly => "return-values-only",
        }
    }

    fn includes(self, rule: &str) -> bool {
        match self {
            Self::Default => true,
            Self::ParametersOnly => rule == method_parameter_null_mark::NAME,
            Self::ReturnValuesOnly => rule == method_return_null_mark::NAME,
        }
    }
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    Preset::Default.rules()
}

/// Failure to build rules from a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum LoadRulesError {
    /// A configured pattern did not compile.
    #[error(transparent)]
    Pattern(#[from] PatternError),
    /// The `preset` key names no known preset.
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
}

/// Builds the rules selected by `config`.
///
/// The `preset` key picks the rule set (default: all rules). Each rule then
/// reads its patterns and severity from its own table; disabled rules are
/// left out.
///
/// # Errors
///
/// Returns an error if the preset is unknown or a pattern does not compile.
pub fn rules_from_config(config: &Config) -> Result<Vec<RuleBox>, LoadRulesError> {
    let preset = match config.preset.as_deref() {
        Some(name) => {
            Preset::from_name(name).ok_or_else(|| LoadRulesError::UnknownPreset(name.into()))?
        }
        None => Preset::default(),
    };

    let mut rules: Vec<RuleBox> = Vec::with_capacity(2);
    for name in [method_parameter_null_mark::NAME, method_return_null_mark::NAME] {
        if !preset.includes(name) {
            continue;
        }
        if !config.is_rule_enabled(name) {
            debug!(rule = name, "rule disabled by config");
            continue;
        }
        let table = config.rule_config(name);
        let severity = config.rule_severity(name).unwrap_or(Severity::Error);
        rules.push(build_rule(name, table, severity)?);
    }

    debug!(preset = preset.name(), count = rules.len(), "rules loaded");
    Ok(rules)
}

fn build_rule(
    name: &str,
    table: Option<&RuleConfig>,
    severity: Severity,
) -> Result<RuleBox, PatternError> {
    Ok(if name == method_parameter_null_mark::NAME {
        Box::new(MethodParameterNullMark::from_config(table)?.severity(severity))
    } else {
        Box::new(MethodReturnNullMark::from_config(table)?.severity(severity))
    })
}
