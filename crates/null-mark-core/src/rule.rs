//! Rule trait for defining lint rules.

use crate::tree::{Node, NodeKind};
use crate::types::{Severity, Violation};

/// A per-node lint rule.
///
/// The analyzer calls [`Rule::check`] once for every node whose kind is
/// listed in [`Rule::visits`]. A rule must not keep state between calls, so
/// one instance can check many trees concurrently.
///
/// # Example
///
/// ```ignore
/// use null_mark_core::{Node, NodeKind, Rule, Severity, Violation};
///
/// pub struct NoEmptyModifiers;
///
/// impl Rule for NoEmptyModifiers {
///     fn name(&self) -> &'static str { "no-empty-modifiers" }
///     fn code(&self) -> &'static str { "NM100" }
///     fn visits(&self) -> &'static [NodeKind] { &[NodeKind::ModifierList] }
///
///     fn check(&self, node: Node<'_>) -> Option<Violation> {
///         (node.child_count() == 0).then(|| {
///             Violation::new(self.code(), self.name(), "empty", Severity::Info, node, "empty modifiers")
///         })
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "method-parameter-null-mark").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "NM001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns the node kinds this rule is invoked for.
    fn visits(&self) -> &'static [NodeKind];

    /// Checks a single node and returns the violation found, if any.
    fn check(&self, node: Node<'_>) -> Option<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeBuilder;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }
        fn visits(&self) -> &'static [NodeKind] {
            &[NodeKind::Method]
        }

        fn check(&self, node: Node<'_>) -> Option<Violation> {
            Some(Violation::new(
                self.code(),
                self.name(),
                "test",
                self.default_severity(),
                node,
                "Test violation",
            ))
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
        assert_eq!(rule.visits(), &[NodeKind::Method]);
    }

    #[test]
    fn test_rule_check_anchors_on_node() {
        let mut b = TreeBuilder::new();
        b.leaf(NodeKind::Method);
        let tree = b.finish();
        let root = tree.root().unwrap();

        let v = TestRule.check(root).unwrap();
        assert_eq!(v.anchor, root.id());
        assert_eq!(v.rule, "test-rule");
    }
}
