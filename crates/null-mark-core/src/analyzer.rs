//! Core analyzer for orchestrating lint execution.

use crate::config::{Config, RuleConfig};
use crate::rule::{Rule, RuleBox};
use crate::tree::SyntaxTree;
use crate::types::{LintResult, Violation};

use rayon::prelude::*;
use tracing::{debug, info};

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    #[must_use]
    pub fn build(self) -> Analyzer {
        let config = self.config.unwrap_or_default();
        let rules = self
            .rules
            .into_iter()
            .filter(|rule| {
                let enabled = config.is_rule_enabled(rule.name());
                if !enabled {
                    debug!("Skipping disabled rule: {}", rule.name());
                }
                enabled
            })
            .collect();

        Analyzer { rules, config }
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Walks every node of a tree in pre-order and hands it to each rule that
/// visits its kind. Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of enabled rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes one tree and returns the results.
    #[must_use]
    pub fn analyze(&self, tree: &SyntaxTree) -> LintResult {
        let mut result = LintResult {
            violations: self.analyze_tree(tree),
            trees_checked: 1,
        };
        result.sort();
        result
    }

    /// Analyzes many trees in parallel and returns the merged results.
    #[must_use]
    pub fn analyze_all(&self, trees: &[SyntaxTree]) -> LintResult {
        info!("Analyzing {} trees with {} rules", trees.len(), self.rules.len());

        let mut result = trees
            .par_iter()
            .map(|tree| LintResult {
                violations: self.analyze_tree(tree),
                trees_checked: 1,
            })
            .reduce(LintResult::new, |mut acc, other| {
                acc.extend(other);
                acc
            });
        result.sort();

        info!(
            "Analysis complete: {} violations in {} trees",
            result.violations.len(),
            result.trees_checked
        );

        result
    }

    fn analyze_tree(&self, tree: &SyntaxTree) -> Vec<Violation> {
        debug!(
            "Analyzing tree {} ({} nodes)",
            tree.path().map_or_else(|| "<unnamed>".into(), |p| p.display().to_string()),
            tree.len()
        );

        let mut violations = Vec::new();
        for node in tree.iter() {
            for rule in &self.rules {
                if !rule.visits().contains(&node.kind()) {
                    continue;
                }
                if let Some(violation) = rule.check(node) {
                    violations.push(self.apply_severity_override(rule.name(), violation));
                }
            }
        }
        violations
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(&self, rule_name: &str, mut violation: Violation) -> Violation {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            violation.severity = severity;
        }
        violation
    }

    /// Gets the rule configuration for a specific rule.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.config.rules.get(rule_name)
    }
}
