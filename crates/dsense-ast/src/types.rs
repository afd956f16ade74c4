//! Type declarations as they appear in source: identifier references,
//! builtin type tokens, pointer/array wrappers and member-function-attribute
//! wraps such as `immutable(char)`.

use std::fmt;

use crate::expr::ExprId;
use crate::token::TokenKind;

/// A (possibly qualified) type reference.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDeclaration {
    /// A named type, optionally qualified (`object.TypeInfo`).
    Identifier(IdentifierDeclaration),
    /// A builtin type keyword (`int`, `dchar`, ...).
    Token(TokenKind),
    /// `T*`. The pointee is absent for synthesized pointer wrappers.
    Pointer(Option<Box<TypeDeclaration>>),
    /// `T[]` or `V[K]`.
    Array(ArrayDeclaration),
    /// A qualifier applied to a type, e.g. `immutable(char)`.
    MemberFunctionAttr {
        attribute: TokenKind,
        inner: Option<Box<TypeDeclaration>>,
    },
}

impl TypeDeclaration {
    pub fn identifier(name: impl Into<String>) -> Self {
        TypeDeclaration::Identifier(IdentifierDeclaration {
            name: name.into(),
            inner: None,
            module_scoped: false,
        })
    }

    /// A qualified identifier type; `qualified("object", "TypeInfo")` is
    /// `object.TypeInfo`.
    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        TypeDeclaration::Identifier(IdentifierDeclaration {
            name: name.into(),
            inner: Some(Box::new(TypeDeclaration::identifier(qualifier))),
            module_scoped: false,
        })
    }
}

/// A named type reference with an optional qualifier chain.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierDeclaration {
    pub name: String,
    /// The qualifier this name is looked up in (`object` in `object.TypeInfo`).
    pub inner: Option<Box<TypeDeclaration>>,
    /// Whether the reference was written with a leading module-root dot.
    pub module_scoped: bool,
}

/// `T[]`, `V[K]`, or `V[expr]` (static arrays keep the dimension expression).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayDeclaration {
    pub value: Option<Box<TypeDeclaration>>,
    pub key: Option<Box<TypeDeclaration>>,
    /// Back-reference to the key expression of an associative-array literal.
    pub key_expr: Option<ExprId>,
    pub clamps_empty: bool,
}

impl fmt::Display for TypeDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDeclaration::Identifier(id) => {
                if let Some(inner) = &id.inner {
                    write!(f, "{inner}.")?;
                }
                f.write_str(&id.name)
            }
            TypeDeclaration::Token(tok) => f.write_str(tok.as_str()),
            TypeDeclaration::Pointer(inner) => match inner {
                Some(inner) => write!(f, "{inner}*"),
                None => f.write_str("*"),
            },
            TypeDeclaration::Array(arr) => {
                if let Some(value) = &arr.value {
                    write!(f, "{value}")?;
                }
                match &arr.key {
                    Some(key) => write!(f, "[{key}]"),
                    None => f.write_str("[]"),
                }
            }
            TypeDeclaration::MemberFunctionAttr { attribute, inner } => match inner {
                Some(inner) => write!(f, "{}({inner})", attribute.as_str()),
                None => f.write_str(attribute.as_str()),
            },
        }
    }
}
