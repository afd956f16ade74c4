//! Declaration nodes: modules, class-likes, enums, methods and variables.
//!
//! Declarations form the block structure the caret classifier walks and the
//! scope chain the resolver queries. Parent links are arena ids, children are
//! recorded on the parent.

use dsense_common::CodeSpan;
use serde::{Deserialize, Serialize};

use crate::expr::ExprId;
use crate::stmt::StmtId;
use crate::types::TypeDeclaration;

/// Index of a declaration node inside a [`DeclArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Flavor of a class-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Class,
    Interface,
    Struct,
    Union,
    Template,
}

/// Special method categories that are hidden from general completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodKind {
    Normal,
    Constructor,
    Destructor,
    Unittest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeclKind {
    /// A source module; `module_name` is the dotted name from the module
    /// statement (or derived from the file name).
    Module { module_name: String },
    ClassLike {
        class_kind: ClassKind,
        base_classes: Vec<TypeDeclaration>,
    },
    Enum,
    Method {
        return_type: Option<TypeDeclaration>,
        special: MethodKind,
        body: Vec<StmtId>,
    },
    Variable {
        ty: Option<TypeDeclaration>,
        initializer: Option<ExprId>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclNode {
    /// Declared name; empty for anonymous declarations.
    pub name: String,
    pub span: CodeSpan,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub kind: DeclKind,
}

impl DeclNode {
    /// Whether this node opens a block the caret can be inside of.
    pub fn is_block(&self) -> bool {
        matches!(
            self.kind,
            DeclKind::Module { .. }
                | DeclKind::ClassLike { .. }
                | DeclKind::Enum
                | DeclKind::Method { .. }
        )
    }

    /// Whether this node declares a class-like type (class, interface,
    /// struct, union, template).
    pub fn is_class_like(&self) -> bool {
        matches!(self.kind, DeclKind::ClassLike { .. })
    }
}

/// Flat storage for declaration nodes.
#[derive(Debug, Clone, Default)]
pub struct DeclArena {
    nodes: Vec<DeclNode>,
}

impl DeclArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, node: DeclNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &DeclNode {
        &self.nodes[id.0 as usize]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut DeclNode {
        &mut self.nodes[id.0 as usize]
    }

    /// The chain of ancestors of `id`, nearest first, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut current = self.get(id).parent;
        std::iter::from_fn(move || {
            let next = current?;
            current = self.get(next).parent;
            Some(next)
        })
    }

    /// The first direct child of `id` with the given name.
    pub fn find_child(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.get(id)
            .children
            .iter()
            .copied()
            .find(|&c| self.get(c).name == name)
    }

    /// All direct children of `id` with the given name (overload sets share
    /// a name).
    pub fn find_children(&self, id: NodeId, name: &str) -> Vec<NodeId> {
        self.get(id)
            .children
            .iter()
            .copied()
            .filter(|&c| self.get(c).name == name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
