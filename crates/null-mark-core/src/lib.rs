//! # null-mark-core
//!
//! Core framework for nullability-marker linting over host-supplied syntax
//! trees.
//!
//! This crate provides the foundational traits and types for building
//! tree-based lint rules. It includes:
//!
//! - [`SyntaxTree`] and [`Node`], the read-only tree contract rules inspect
//! - [`TreeBuilder`] and [`TreeDto`] for hosts to hand trees over
//! - [`Rule`] trait for per-node rules
//! - [`Analyzer`] for dispatching nodes to rules
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use null_mark_core::{Analyzer, SyntaxTree};
//!
//! let tree = SyntaxTree::from_json(&json)?;
//! let analyzer = Analyzer::builder()
//!     .rule(MyRule::new())
//!     .build();
//!
//! let result = analyzer.analyze(&tree);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod rule;
mod tree;
mod tree_dto;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use config::{Config, ConfigError, RuleConfig};
pub use rule::{Rule, RuleBox};
pub use tree::{Node, NodeId, NodeKind, Position, SyntaxTree, TreeBuilder};
pub use tree_dto::{NodeDto, TreeDto, TreeError};
pub use types::{LintResult, Location, Severity, Suggestion, Violation};
