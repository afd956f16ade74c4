//! Syntax tree model for the dsense source-intelligence engine.
//!
//! The tree is produced by an external parser and consumed read-only by the
//! resolver and the completion classifier. Nodes live in per-category arenas
//! (`ExprArena`, `StmtArena`, `DeclArena`) and reference each other through
//! plain index ids, so back-links are never shared-mutable pointers.

pub mod token;
pub use token::{LiteralFormat, LiteralSubformat, LiteralValue, TokenKind};

pub mod types;
pub use types::{ArrayDeclaration, IdentifierDeclaration, TypeDeclaration};

pub mod expr;
pub use expr::{BinaryOp, ExprArena, ExprId, ExprKind, ExprNode, PostfixOp, TypeidArg, UnaryOp};

pub mod stmt;
pub use stmt::{
    Attribute, ImportBindings, ImportClause, ImportStatement, ModuleStatement, PragmaStatement,
    ScopeGuardKind, ScopeGuardStatement, StmtArena, StmtId, StmtKind, StmtNode,
};

pub mod decl;
pub use decl::{ClassKind, DeclArena, DeclKind, DeclNode, MethodKind, NodeId};

pub mod tree;
pub use tree::{SyntaxTree, TreeBuilder};
