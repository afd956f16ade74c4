//! Expression nodes.
//!
//! Expressions form a closed tagged union stored in an arena; children are
//! referenced by `ExprId`. The resolver only ever reads these nodes.

use dsense_common::CodeSpan;

use crate::token::{LiteralFormat, LiteralSubformat, LiteralValue, TokenKind};
use crate::types::TypeDeclaration;

/// Index of an expression node inside an [`ExprArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprId(pub u32);

/// One expression node: its variant plus the source span it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprNode {
    pub kind: ExprKind,
    pub span: CodeSpan,
}

/// Binary operator groups.
///
/// The resolver cares about groups, not individual operators: everything in
/// the assignment/arithmetic group takes its type from the left operand, the
/// logic/comparison group is always `bool`, and `in` takes the container on
/// the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `=` and every compound assignment (`+=`, `~=`, ...).
    Assign,
    /// `^`
    Xor,
    /// `|`
    Or,
    /// `&`
    And,
    /// `<<`, `>>`, `>>>`
    Shift,
    /// `+`, `-`
    Add,
    /// `*`, `/`, `%`
    Mul,
    /// `~` concatenation
    Cat,
    /// `^^`
    Pow,
    /// `||`
    OrOr,
    /// `&&`
    AndAnd,
    /// `==`, `!=`
    Equal,
    /// `is`, `!is`
    Identity,
    /// `<`, `<=`, `>`, `>=` and friends
    Relational,
    /// `in`
    In,
}

impl BinaryOp {
    /// Operators whose result type is the left operand's type.
    pub fn takes_left_operand_type(self) -> bool {
        matches!(
            self,
            BinaryOp::Assign
                | BinaryOp::Xor
                | BinaryOp::Or
                | BinaryOp::And
                | BinaryOp::Shift
                | BinaryOp::Add
                | BinaryOp::Mul
                | BinaryOp::Cat
                | BinaryOp::Pow
        )
    }

    /// Operators that always produce `bool`.
    pub fn is_boolean(self) -> bool {
        matches!(
            self,
            BinaryOp::OrOr
                | BinaryOp::AndAnd
                | BinaryOp::Equal
                | BinaryOp::Identity
                | BinaryOp::Relational
        )
    }
}

/// Prefix unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `~x`
    Complement,
    /// `++x`
    Increment,
    /// `--x`
    Decrement,
    /// `+x`
    Plus,
    /// `-x`
    Minus,
    /// `!x`
    Not,
    /// `*x`
    Deref,
    /// `&x`
    AddressOf,
}

/// Postfix operations; chains nest through the `base` of [`ExprKind::Postfix`].
#[derive(Debug, Clone, PartialEq)]
pub enum PostfixOp {
    /// `base.member`
    Access { member: String },
    /// `base(args)`
    Call(Vec<ExprId>),
    /// `base[args]`
    Index(Vec<ExprId>),
    /// `base[from .. to]`
    Slice {
        from: Option<ExprId>,
        to: Option<ExprId>,
    },
    /// `base++`
    Increment,
    /// `base--`
    Decrement,
}

/// Argument of a `typeid(...)` expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeidArg {
    Type(TypeDeclaration),
    Expr(ExprId),
}

/// The closed union of expression variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `a, b, c` — a comma-separated sequence.
    Sequence(Vec<ExprId>),
    /// `( inner )`
    Parenthesized(ExprId),
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// `cond ? t : f`
    Conditional {
        condition: ExprId,
        true_case: ExprId,
        false_case: ExprId,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    New {
        ty: TypeDeclaration,
        args: Vec<ExprId>,
    },
    Delete(ExprId),
    Cast {
        ty: Option<TypeDeclaration>,
        /// Qualifier tokens of an attribute-only cast, e.g. `cast(immutable)x`.
        attributes: Vec<TokenKind>,
        operand: ExprId,
    },
    /// `int.max` — a static member access on a type.
    TypeDot {
        ty: TypeDeclaration,
        ident: String,
    },
    Postfix {
        base: ExprId,
        op: PostfixOp,
    },
    Identifier {
        name: String,
        /// Written with a leading module-root dot (`.name`).
        module_scoped: bool,
    },
    Literal {
        value: LiteralValue,
        format: LiteralFormat,
        subformat: LiteralSubformat,
    },
    /// A bare keyword expression: `this`, `super`, `true`, `null`, ...
    Token(TokenKind),
    ArrayLiteral(Vec<ExprId>),
    /// `[k1: v1, k2: v2]`
    AssocArrayLiteral(Vec<(ExprId, ExprId)>),
    FunctionLiteral {
        return_type: Option<TypeDeclaration>,
        is_delegate: bool,
    },
    Assert {
        condition: ExprId,
        message: Option<ExprId>,
    },
    Mixin(ExprId),
    /// `import(...)` as an expression; resolves to `string`.
    Import(Option<ExprId>),
    /// A type declaration in expression position; carries a `typeof()`.
    TypeOf(TypeDeclaration),
    Typeid(TypeidArg),
    Is {
        tested: Option<TypeDeclaration>,
    },
    Traits {
        keyword: String,
        args: Vec<ExprId>,
    },
    TemplateInstance {
        name: String,
        args: Vec<ExprId>,
    },
}

/// Flat storage for expression nodes.
#[derive(Debug, Clone, Default)]
pub struct ExprArena {
    nodes: Vec<ExprNode>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, kind: ExprKind, span: CodeSpan) -> ExprId {
        let id = ExprId(self.nodes.len() as u32);
        self.nodes.push(ExprNode { kind, span });
        id
    }

    pub fn get(&self, id: ExprId) -> &ExprNode {
        &self.nodes[id.0 as usize]
    }

    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.get(id).kind
    }

    pub fn span(&self, id: ExprId) -> CodeSpan {
        self.get(id).span
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
