//! The syntax tree container and its builder.
//!
//! A `SyntaxTree` bundles the three arenas plus the list of module roots.
//! The first module is the one the editor buffer belongs to; further modules
//! (the runtime's `object` module, imported modules) are registered so the
//! resolver can look them up by name. The tree is immutable once built; the
//! external parser and the test fixtures go through [`TreeBuilder`].

use dsense_common::{CodeLocation, CodeSpan};

use crate::decl::{ClassKind, DeclArena, DeclKind, DeclNode, MethodKind, NodeId};
use crate::expr::{ExprArena, ExprId, ExprKind};
use crate::stmt::{StmtArena, StmtId, StmtKind};
use crate::types::TypeDeclaration;

/// An immutable parsed module set.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    pub exprs: ExprArena,
    pub stmts: StmtArena,
    pub decls: DeclArena,
    modules: Vec<NodeId>,
}

impl SyntaxTree {
    /// The module the edited source belongs to.
    pub fn root(&self) -> NodeId {
        self.modules[0]
    }

    /// All registered module roots, editor module first.
    pub fn modules(&self) -> &[NodeId] {
        &self.modules
    }

    /// Registered modules with the given dotted name.
    pub fn modules_by_name(&self, name: &str) -> Vec<NodeId> {
        self.modules
            .iter()
            .copied()
            .filter(|&m| match &self.decls.get(m).kind {
                DeclKind::Module { module_name } => module_name == name,
                _ => false,
            })
            .collect()
    }
}

/// Mutable construction API for [`SyntaxTree`].
pub struct TreeBuilder {
    exprs: ExprArena,
    stmts: StmtArena,
    decls: DeclArena,
    modules: Vec<NodeId>,
}

/// Span covering a whole buffer; module roots default to it.
fn whole_buffer() -> CodeSpan {
    CodeSpan::new(CodeLocation::new(1, 1), CodeLocation::new(u32::MAX, u32::MAX))
}

impl TreeBuilder {
    /// Start a tree whose root module has the given dotted name.
    pub fn new(module_name: impl Into<String>) -> Self {
        let mut builder = Self {
            exprs: ExprArena::new(),
            stmts: StmtArena::new(),
            decls: DeclArena::new(),
            modules: Vec::new(),
        };
        builder.add_module(module_name);
        builder
    }

    /// Register a further module root (e.g. the runtime's `object` module).
    pub fn add_module(&mut self, module_name: impl Into<String>) -> NodeId {
        let module_name = module_name.into();
        let id = self.decls.alloc(DeclNode {
            name: module_name.clone(),
            span: whole_buffer(),
            parent: None,
            children: Vec::new(),
            kind: DeclKind::Module { module_name },
        });
        self.modules.push(id);
        id
    }

    pub fn root(&self) -> NodeId {
        self.modules[0]
    }

    /// Restrict the span of a declaration (module roots default to the whole
    /// buffer).
    pub fn set_span(&mut self, node: NodeId, span: CodeSpan) {
        self.decls.get_mut(node).span = span;
    }

    fn add_child(&mut self, parent: NodeId, mut node: DeclNode) -> NodeId {
        node.parent = Some(parent);
        let id = self.decls.alloc(node);
        self.decls.get_mut(parent).children.push(id);
        id
    }

    pub fn add_class(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        class_kind: ClassKind,
        base_classes: Vec<TypeDeclaration>,
        span: CodeSpan,
    ) -> NodeId {
        self.add_child(
            parent,
            DeclNode {
                name: name.into(),
                span,
                parent: None,
                children: Vec::new(),
                kind: DeclKind::ClassLike {
                    class_kind,
                    base_classes,
                },
            },
        )
    }

    pub fn add_enum(&mut self, parent: NodeId, name: impl Into<String>, span: CodeSpan) -> NodeId {
        self.add_child(
            parent,
            DeclNode {
                name: name.into(),
                span,
                parent: None,
                children: Vec::new(),
                kind: DeclKind::Enum,
            },
        )
    }

    pub fn add_method(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        return_type: Option<TypeDeclaration>,
        special: MethodKind,
        span: CodeSpan,
    ) -> NodeId {
        self.add_child(
            parent,
            DeclNode {
                name: name.into(),
                span,
                parent: None,
                children: Vec::new(),
                kind: DeclKind::Method {
                    return_type,
                    special,
                    body: Vec::new(),
                },
            },
        )
    }

    /// Append a statement to a method body.
    pub fn push_body_stmt(&mut self, method: NodeId, stmt: StmtId) {
        if let DeclKind::Method { body, .. } = &mut self.decls.get_mut(method).kind {
            body.push(stmt);
        }
    }

    pub fn add_variable(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        ty: Option<TypeDeclaration>,
        initializer: Option<ExprId>,
        span: CodeSpan,
    ) -> NodeId {
        self.add_child(
            parent,
            DeclNode {
                name: name.into(),
                span,
                parent: None,
                children: Vec::new(),
                kind: DeclKind::Variable { ty, initializer },
            },
        )
    }

    pub fn add_expr(&mut self, kind: ExprKind, span: CodeSpan) -> ExprId {
        self.exprs.alloc(kind, span)
    }

    pub fn add_stmt(&mut self, kind: StmtKind, span: CodeSpan) -> StmtId {
        self.stmts.alloc(kind, span)
    }

    pub fn finish(self) -> SyntaxTree {
        SyntaxTree {
            exprs: self.exprs,
            stmts: self.stmts,
            decls: self.decls,
            modules: self.modules,
        }
    }
}
