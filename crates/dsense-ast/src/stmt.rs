//! Statement nodes.
//!
//! Only the statement forms the caret-context machinery distinguishes are
//! modeled individually; everything else a method body contains is either an
//! expression statement, a nested block, or a declaration statement.

use dsense_common::CodeSpan;

use crate::decl::NodeId;
use crate::expr::ExprId;

/// Index of a statement inside a [`StmtArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StmtId(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub struct StmtNode {
    pub kind: StmtKind,
    pub span: CodeSpan,
}

/// A parsed `@`-attribute or keyword attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub span: CodeSpan,
}

/// `scope(exit)`, `scope(success)`, `scope(failure)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeGuardKind {
    Exit,
    Success,
    Failure,
}

impl ScopeGuardKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ScopeGuardKind::Exit => "exit",
            ScopeGuardKind::Success => "success",
            ScopeGuardKind::Failure => "failure",
        }
    }
}

/// A scope-guard statement; `guard` is absent while the user is still typing
/// inside `scope(`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeGuardStatement {
    pub guard: Option<ScopeGuardKind>,
    pub body: Option<StmtId>,
}

/// `pragma(name, ...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PragmaStatement {
    pub attribute: Attribute,
}

/// One clause of an import statement: `std.stdio` or `io = std.stdio`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportClause {
    pub module: String,
    pub rebind: Option<String>,
}

/// Selective import bindings: `import std.stdio : writeln, writef;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportBindings {
    pub module: ImportClause,
    pub selected: Vec<String>,
}

/// `import a.b, c.d : x;`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportStatement {
    pub imports: Vec<ImportClause>,
    pub bindings: Option<ImportBindings>,
}

/// `module a.b.c;`
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleStatement {
    pub module_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    Expression(ExprId),
    Block(Vec<StmtId>),
    ScopeGuard(ScopeGuardStatement),
    Pragma(PragmaStatement),
    Import(ImportStatement),
    Module(ModuleStatement),
    /// A declaration in statement position (`int x = 5;`).
    Declaration(NodeId),
}

/// Flat storage for statement nodes.
#[derive(Debug, Clone, Default)]
pub struct StmtArena {
    nodes: Vec<StmtNode>,
}

impl StmtArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, kind: StmtKind, span: CodeSpan) -> StmtId {
        let id = StmtId(self.nodes.len() as u32);
        self.nodes.push(StmtNode { kind, span });
        id
    }

    pub fn get(&self, id: StmtId) -> &StmtNode {
        &self.nodes[id.0 as usize]
    }

    pub fn kind(&self, id: StmtId) -> &StmtKind {
        &self.get(id).kind
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
