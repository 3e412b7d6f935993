//! Serialized form of a syntax tree handed over by a host.
//!
//! ```text
//! JSON / TOML text
//!   ↓ serde (DTO layer)
//! TreeDto
//!   ↓ validate + convert
//! SyntaxTree
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::tree::{NodeKind, Position, SyntaxTree, TreeBuilder};

/// A serialized source unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDto {
    /// Source path of the unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Top-level nodes, in source order.
    #[serde(default)]
    pub nodes: Vec<NodeDto>,
}

/// A serialized node and its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDto {
    /// Kind tag.
    pub kind: NodeKind,
    /// Text payload; required for identifiers and comment bodies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// 1-indexed line, `0` when unknown.
    #[serde(default)]
    pub line: usize,
    /// 1-indexed column, `0` when unknown.
    #[serde(default)]
    pub column: usize,
    /// Child nodes, in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDto>,
}

impl NodeDto {
    /// Creates a node without text or children.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: None,
            line: 0,
            column: 0,
            children: Vec::new(),
        }
    }

    /// Sets the text payload.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: NodeDto) -> Self {
        self.children.push(child);
        self
    }
}

/// Errors from decoding or validating a serialized tree.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The JSON document could not be decoded.
    #[error("invalid tree document: {0}")]
    Json(#[from] serde_json::Error),

    /// A text-carrying node has no text.
    #[error("{kind} node at {line}:{column} has no text")]
    MissingText {
        /// Kind of the offending node.
        kind: NodeKind,
        /// Line of the offending node.
        line: usize,
        /// Column of the offending node.
        column: usize,
    },

    /// A structural node carries text.
    #[error("{kind} node at {line}:{column} must not carry text")]
    UnexpectedText {
        /// Kind of the offending node.
        kind: NodeKind,
        /// Line of the offending node.
        line: usize,
        /// Column of the offending node.
        column: usize,
    },
}

impl SyntaxTree {
    /// Builds a tree from its serialized form.
    ///
    /// # Errors
    ///
    /// Returns an error if an identifier or comment body lacks text, or if
    /// any other node carries text.
    pub fn from_dto(dto: TreeDto) -> Result<Self, TreeError> {
        let mut builder = TreeBuilder::new();
        if let Some(path) = dto.path {
            builder.set_path(path);
        }
        for node in dto.nodes {
            add_node(&mut builder, node)?;
        }
        Ok(builder.finish())
    }

    /// Decodes and builds a tree from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the tree fails validation.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let dto: TreeDto = serde_json::from_str(json)?;
        Self::from_dto(dto)
    }
}

impl TryFrom<TreeDto> for SyntaxTree {
    type Error = TreeError;

    fn try_from(dto: TreeDto) -> Result<Self, Self::Error> {
        Self::from_dto(dto)
    }
}

fn add_node(builder: &mut TreeBuilder, node: NodeDto) -> Result<(), TreeError> {
    match (node.kind.carries_text(), node.text.is_some()) {
        (true, false) => {
            return Err(TreeError::MissingText {
                kind: node.kind,
                line: node.line,
                column: node.column,
            })
        }
        (false, true) => {
            return Err(TreeError::UnexpectedText {
                kind: node.kind,
                line: node.line,
                column: node.column,
            })
        }
        _ => {}
    }

    builder.open(node.kind, node.text, Position::new(node.line, node.column));
    for child in node.children {
        add_node(builder, child)?;
    }
    builder.close();
    Ok(())
}
