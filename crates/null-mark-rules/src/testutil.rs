//! Builders for Java-shaped method trees used by rule tests.

use null_mark_core::{Node, NodeKind, SyntaxTree, TreeBuilder};

/// Declared type of a parameter or return value.
#[derive(Debug, Clone)]
pub(crate) enum Ty {
    Primitive(NodeKind),
    PrimitiveArray(NodeKind),
    Named(&'static str),
}

#[derive(Debug, Clone)]
enum Modifier {
    Annotation(&'static str),
    Keyword,
    LineComment(&'static str),
    BlockComment(&'static str),
}

/// A parameter or a method's return declaration.
#[derive(Debug, Clone)]
pub(crate) struct Decl {
    modifiers: Option<Vec<Modifier>>,
    ty: Ty,
    type_comments: Vec<&'static str>,
}

impl Decl {
    /// Declaration with an (initially empty) modifier list.
    pub(crate) fn of(ty: Ty) -> Self {
        Self {
            modifiers: Some(Vec::new()),
            ty,
            type_comments: Vec::new(),
        }
    }

    /// Declaration without any modifier list node.
    pub(crate) fn bare(ty: Ty) -> Self {
        Self {
            modifiers: None,
            ..Self::of(ty)
        }
    }

    pub(crate) fn annotated(self, name: &'static str) -> Self {
        self.with_modifier(Modifier::Annotation(name))
    }

    pub(crate) fn keyword(self) -> Self {
        self.with_modifier(Modifier::Keyword)
    }

    pub(crate) fn line_comment(self, body: &'static str) -> Self {
        self.with_modifier(Modifier::LineComment(body))
    }

    pub(crate) fn block_comment(self, body: &'static str) -> Self {
        self.with_modifier(Modifier::BlockComment(body))
    }

    /// Block comment placed inside the type, before the type name.
    pub(crate) fn type_comment(mut self, body: &'static str) -> Self {
        self.type_comments.push(body);
        self
    }

    fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.get_or_insert_with(Vec::new).push(modifier);
        self
    }

    fn build_modifiers(&self, b: &mut TreeBuilder) {
        let Some(modifiers) = &self.modifiers else {
            return;
        };
        b.node(NodeKind::ModifierList, |m| {
            for modifier in modifiers {
                match modifier {
                    Modifier::Annotation(name) => m.annotation(*name),
                    Modifier::Keyword => m.leaf(NodeKind::Modifier),
                    Modifier::LineComment(body) => m.line_comment(*body),
                    Modifier::BlockComment(body) => m.block_comment(*body),
                };
            }
        });
    }

    fn build_type(&self, b: &mut TreeBuilder) {
        b.node(NodeKind::Type, |t| {
            for body in &self.type_comments {
                t.block_comment(*body);
            }
            match self.ty {
                Ty::Primitive(kind) => t.leaf(kind),
                Ty::PrimitiveArray(kind) => t.leaf(kind).leaf(NodeKind::ArrayDeclarator),
                Ty::Named(name) => t.identifier(name),
            };
        });
    }

    fn build_parameter(&self, b: &mut TreeBuilder) {
        b.node(NodeKind::Parameter, |p| {
            self.build_modifiers(p);
            self.build_type(p);
            p.identifier("arg");
        });
    }
}

pub(crate) fn string() -> Ty {
    Ty::Named("String")
}

/// `<ret> m(<params>) {}` inside a class body.
pub(crate) fn method(ret: &Decl, params: &[Decl]) -> SyntaxTree {
    let mut b = TreeBuilder::new().path("Sample.java");
    b.node(NodeKind::ClassBody, |body| {
        body.node(NodeKind::Method, |m| {
            ret.build_modifiers(m);
            ret.build_type(m);
            m.identifier("m")
                .node(NodeKind::ParameterList, |list| {
                    for param in params {
                        param.build_parameter(list);
                    }
                })
                .leaf(NodeKind::Block);
        });
    });
    b.finish()
}

/// Method with no return type node at all.
pub(crate) fn untyped_method(modifiers: &Decl) -> SyntaxTree {
    let mut b = TreeBuilder::new();
    b.node(NodeKind::Method, |m| {
        modifiers.build_modifiers(m);
        m.identifier("m").leaf(NodeKind::ParameterList);
    });
    b.finish()
}

/// A parameter list owned by `owner` (constructor, lambda, ...).
pub(crate) fn parameters_of(owner: NodeKind, params: &[Decl]) -> SyntaxTree {
    let mut b = TreeBuilder::new();
    b.node(owner, |o| {
        o.node(NodeKind::ParameterList, |list| {
            for param in params {
                param.build_parameter(list);
            }
        });
    });
    b.finish()
}

pub(crate) fn nodes_of(tree: &SyntaxTree, kind: NodeKind) -> Vec<Node<'_>> {
    tree.iter().filter(|n| n.kind() == kind).collect()
}

pub(crate) fn first_of(tree: &SyntaxTree, kind: NodeKind) -> Node<'_> {
    tree.iter()
        .find(|n| n.kind() == kind)
        .unwrap_or_else(|| panic!("no {kind} node in tree"))
}
