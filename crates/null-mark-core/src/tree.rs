//! Read-only syntax tree inspected by rules.
//!
//! The tree is an arena owned by the host. Rules only ever see borrowed
//! [`Node`] handles and never mutate anything. Nodes are stored in pre-order,
//! so iterating the arena visits parents before their children and siblings
//! in source order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Kind tag of a syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Root of a source unit.
    CompilationUnit,
    /// Class, interface, enum or record declaration.
    Class,
    /// Body of a class declaration.
    ClassBody,
    /// Method declaration.
    Method,
    /// Constructor declaration.
    Constructor,
    /// Lambda expression.
    Lambda,
    /// Parenthesized parameter list of a method, constructor or lambda.
    ParameterList,
    /// A single formal parameter.
    Parameter,
    /// Modifiers and annotations preceding a declaration.
    ModifierList,
    /// Keyword modifier such as `public` or `final`.
    Modifier,
    /// Annotation such as `@NotNull`.
    Annotation,
    /// Identifier; carries text.
    Identifier,
    /// Declared type of a parameter or method return value.
    Type,
    /// Array dimension (`[]`) attached to a type.
    ArrayDeclarator,
    /// Block comment (`/* ... */`).
    BlockComment,
    /// Line comment (`// ...`).
    LineComment,
    /// Text of a comment without its delimiters; carries text.
    CommentBody,
    /// Statement block.
    Block,
    /// `void`
    Void,
    /// `byte`
    Byte,
    /// `short`
    Short,
    /// `int`
    Int,
    /// `long`
    Long,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `boolean`
    Boolean,
    /// `char`
    Char,
    /// Any node the rules do not inspect.
    Other,
}

impl NodeKind {
    /// Kinds of the keywords that name a type which can never hold `null`.
    pub const PRIMITIVES: [Self; 9] = [
        Self::Void,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Boolean,
        Self::Char,
    ];

    /// Returns true for `void` and the primitive scalar type keywords.
    #[must_use]
    pub fn is_primitive(self) -> bool {
        Self::PRIMITIVES.contains(&self)
    }

    /// Returns true for kinds whose nodes carry a text payload.
    #[must_use]
    pub fn carries_text(self) -> bool {
        matches!(self, Self::Identifier | Self::CommentBody)
    }

    /// Returns the `snake_case` name used in serialized trees.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CompilationUnit => "compilation_unit",
            Self::Class => "class",
            Self::ClassBody => "class_body",
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::Lambda => "lambda",
            Self::ParameterList => "parameter_list",
            Self::Parameter => "parameter",
            Self::ModifierList => "modifier_list",
            Self::Modifier => "modifier",
            Self::Annotation => "annotation",
            Self::Identifier => "identifier",
            Self::Type => "type",
            Self::ArrayDeclarator => "array_declarator",
            Self::BlockComment => "block_comment",
            Self::LineComment => "line_comment",
            Self::CommentBody => "comment_body",
            Self::Block => "block",
            Self::Void => "void",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Char => "char",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Index of a node within its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

/// Source position of a node.
///
/// Both fields are 1-indexed; `0` means the host did not record a position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number.
    pub line: usize,
    /// Column number.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    text: Option<String>,
    position: Position,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    next_sibling: Option<NodeId>,
}

/// Arena holding every node of one source unit.
///
/// Built once by the host through [`TreeBuilder`] or
/// [`SyntaxTree::from_dto`], then shared read-only.
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    path: Option<PathBuf>,
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    /// Returns the source path recorded by the host, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the first top-level node.
    #[must_use]
    pub fn root(&self) -> Option<Node<'_>> {
        (!self.nodes.is_empty()).then(|| self.node(NodeId(0)))
    }

    /// Returns a handle to the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Node<'_> {
        assert!(
            id.0 < self.nodes.len(),
            "node id {} out of bounds for tree of {} nodes",
            id.0,
            self.nodes.len()
        );
        Node { tree: self, id }
    }

    /// Iterates over all nodes in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = Node<'_>> + '_ {
        (0..self.nodes.len()).map(move |i| Node {
            tree: self,
            id: NodeId(i),
        })
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }
}

/// Borrowed handle to a node of a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct Node<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl<'t> Node<'t> {
    /// Returns the id of this node.
    #[must_use]
    pub fn id(self) -> NodeId {
        self.id
    }

    /// Returns the tree this node belongs to.
    #[must_use]
    pub fn tree(self) -> &'t SyntaxTree {
        self.tree
    }

    /// Returns the kind tag.
    #[must_use]
    pub fn kind(self) -> NodeKind {
        self.data().kind
    }

    /// Returns the text payload of identifier and comment-body nodes.
    #[must_use]
    pub fn text(self) -> Option<&'t str> {
        self.data().text.as_deref()
    }

    /// Returns the source position.
    #[must_use]
    pub fn position(self) -> Position {
        self.data().position
    }

    /// Returns the parent node.
    #[must_use]
    pub fn parent(self) -> Option<Node<'t>> {
        self.data().parent.map(|id| self.at(id))
    }

    /// Returns the number of direct children.
    #[must_use]
    pub fn child_count(self) -> usize {
        self.data().children.len()
    }

    /// Iterates over direct children in source order.
    pub fn children(self) -> impl Iterator<Item = Node<'t>> + 't {
        let tree = self.tree;
        tree.data(self.id)
            .children
            .iter()
            .map(move |&id| Node { tree, id })
    }

    /// Returns the first child.
    #[must_use]
    pub fn first_child(self) -> Option<Node<'t>> {
        self.data().children.first().map(|&id| self.at(id))
    }

    /// Returns the next sibling under the same parent.
    #[must_use]
    pub fn next_sibling(self) -> Option<Node<'t>> {
        self.data().next_sibling.map(|id| self.at(id))
    }

    /// Returns the first direct child of the given kind.
    #[must_use]
    pub fn find_first_child(self, kind: NodeKind) -> Option<Node<'t>> {
        self.children().find(|child| child.kind() == kind)
    }

    /// Returns the first direct child of the given kind, which the tree
    /// shape guarantees to exist.
    ///
    /// # Panics
    ///
    /// Panics if no such child exists. That means the host handed over a tree
    /// that violates the expected shape, which is not recoverable.
    #[must_use]
    pub fn require_child(self, kind: NodeKind) -> Node<'t> {
        self.find_first_child(kind).unwrap_or_else(|| {
            panic!(
                "malformed syntax tree: {} node at {}:{} has no {} child",
                self.kind(),
                self.position().line,
                self.position().column,
                kind
            )
        })
    }

    /// Returns the text of a text-carrying node.
    ///
    /// # Panics
    ///
    /// Panics if the node carries no text.
    #[must_use]
    pub fn require_text(self) -> &'t str {
        self.text().unwrap_or_else(|| {
            panic!(
                "malformed syntax tree: {} node at {}:{} has no text",
                self.kind(),
                self.position().line,
                self.position().column,
            )
        })
    }

    /// Iterates over this node followed by all of its following siblings.
    pub fn siblings(self) -> impl Iterator<Item = Node<'t>> + 't {
        std::iter::successors(Some(self), |node| node.next_sibling())
    }

    fn at(self, id: NodeId) -> Node<'t> {
        Node {
            tree: self.tree,
            id,
        }
    }

    fn data(self) -> &'t NodeData {
        self.tree.data(self.id)
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Node");
        s.field("id", &self.id.0).field("kind", &self.kind());
        if let Some(text) = self.text() {
            s.field("text", &text);
        }
        s.finish()
    }
}

/// Incremental builder for [`SyntaxTree`].
///
/// Nested nodes are opened with a closure, which keeps the builder calls
/// shaped like the tree they produce:
///
/// ```
/// use null_mark_core::{NodeKind, TreeBuilder};
///
/// let mut builder = TreeBuilder::new();
/// builder.node(NodeKind::Parameter, |param| {
///     param
///         .node(NodeKind::ModifierList, |mods| {
///             mods.annotation("NotNull");
///         })
///         .node(NodeKind::Type, |ty| {
///             ty.identifier("String");
///         })
///         .identifier("x");
/// });
/// let tree = builder.finish();
/// assert_eq!(tree.len(), 7);
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: SyntaxTree,
    stack: Vec<NodeId>,
    last_root: Option<NodeId>,
}

impl TreeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the source path of the tree.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tree.path = Some(path.into());
        self
    }

    /// Adds a node and builds its children inside `build`.
    pub fn node(&mut self, kind: NodeKind, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.node_at(kind, Position::default(), build)
    }

    /// Adds a positioned node and builds its children inside `build`.
    pub fn node_at(
        &mut self,
        kind: NodeKind,
        position: Position,
        build: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.open(kind, None, position);
        build(self);
        self.close();
        self
    }

    /// Adds a childless node.
    pub fn leaf(&mut self, kind: NodeKind) -> &mut Self {
        self.open(kind, None, Position::default());
        self.close();
        self
    }

    /// Adds a childless node carrying text.
    pub fn token(&mut self, kind: NodeKind, text: impl Into<String>) -> &mut Self {
        self.open(kind, Some(text.into()), Position::default());
        self.close();
        self
    }

    /// Adds an identifier.
    pub fn identifier(&mut self, name: impl Into<String>) -> &mut Self {
        self.token(NodeKind::Identifier, name)
    }

    /// Adds an annotation whose identifier is `name`.
    pub fn annotation(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.node(NodeKind::Annotation, |a| {
            a.identifier(name);
        })
    }

    /// Adds a line comment with the given body.
    pub fn line_comment(&mut self, body: impl Into<String>) -> &mut Self {
        let body = body.into();
        self.node(NodeKind::LineComment, |c| {
            c.token(NodeKind::CommentBody, body);
        })
    }

    /// Adds a block comment with the given body.
    pub fn block_comment(&mut self, body: impl Into<String>) -> &mut Self {
        let body = body.into();
        self.node(NodeKind::BlockComment, |c| {
            c.token(NodeKind::CommentBody, body);
        })
    }

    /// Finishes building and returns the tree.
    #[must_use]
    pub fn finish(self) -> SyntaxTree {
        debug_assert!(self.stack.is_empty(), "unbalanced open/close");
        self.tree
    }

    pub(crate) fn open(&mut self, kind: NodeKind, text: Option<String>, position: Position) {
        let id = NodeId(self.tree.nodes.len());
        let parent = self.stack.last().copied();

        let previous = match parent {
            Some(parent) => self.tree.nodes[parent.0].children.last().copied(),
            None => self.last_root,
        };
        if let Some(previous) = previous {
            self.tree.nodes[previous.0].next_sibling = Some(id);
        }
        match parent {
            Some(parent) => self.tree.nodes[parent.0].children.push(id),
            None => self.last_root = Some(id),
        }

        self.tree.nodes.push(NodeData {
            kind,
            text,
            position,
            parent,
            children: Vec::new(),
            next_sibling: None,
        });
        self.stack.push(id);
    }

    pub(crate) fn close(&mut self) {
        self.stack.pop();
    }

    pub(crate) fn set_path(&mut self, path: PathBuf) {
        self.tree.path = Some(path);
    }
}
