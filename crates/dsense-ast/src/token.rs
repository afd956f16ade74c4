//! Token kinds and literal formats.
//!
//! Only the tokens the semantic core actually inspects are modeled: builtin
//! type keywords, the expression keywords (`this`, `super`, ...), and the
//! type-qualifier attributes that can appear in `cast(...)` parameter lists.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Keyword and qualifier tokens referenced by the resolver and classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Builtin types
    Bool,
    Char,
    Wchar,
    Dchar,
    Int,
    Uint,
    Long,
    Ulong,
    Float,
    Double,
    Real,
    Ifloat,
    Idouble,
    Ireal,
    Void,
    // Expression keywords
    This,
    Super,
    True,
    False,
    Null,
    // Type qualifiers (cast parameter attributes, string literal wrapping)
    Const,
    Immutable,
    Shared,
    Inout,
}

impl TokenKind {
    /// The surface spelling of the token.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Bool => "bool",
            TokenKind::Char => "char",
            TokenKind::Wchar => "wchar",
            TokenKind::Dchar => "dchar",
            TokenKind::Int => "int",
            TokenKind::Uint => "uint",
            TokenKind::Long => "long",
            TokenKind::Ulong => "ulong",
            TokenKind::Float => "float",
            TokenKind::Double => "double",
            TokenKind::Real => "real",
            TokenKind::Ifloat => "ifloat",
            TokenKind::Idouble => "idouble",
            TokenKind::Ireal => "ireal",
            TokenKind::Void => "void",
            TokenKind::This => "this",
            TokenKind::Super => "super",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Const => "const",
            TokenKind::Immutable => "immutable",
            TokenKind::Shared => "shared",
            TokenKind::Inout => "inout",
        }
    }

    /// Whether this token names a builtin scalar or character type.
    pub fn is_basic_type(self) -> bool {
        matches!(
            self,
            TokenKind::Bool
                | TokenKind::Char
                | TokenKind::Wchar
                | TokenKind::Dchar
                | TokenKind::Int
                | TokenKind::Uint
                | TokenKind::Long
                | TokenKind::Ulong
                | TokenKind::Float
                | TokenKind::Double
                | TokenKind::Real
                | TokenKind::Ifloat
                | TokenKind::Idouble
                | TokenKind::Ireal
                | TokenKind::Void
        )
    }
}

bitflags! {
    /// Coarse literal category recorded by the lexer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LiteralFormat: u8 {
        const SCALAR = 1;
        const FLOATING_POINT = 2;
        const STRING_LITERAL = 4;
        const VERBATIM_STRING = 8;
        const CHAR_LITERAL = 16;
    }
}

bitflags! {
    /// Literal suffix/encoding details.
    ///
    /// Marks explicit unsignedness, float width, imaginary suffixes and the
    /// UTF width of string literals.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LiteralSubformat: u16 {
        const INTEGER = 1;
        const UNSIGNED = 2;
        const LONG = 4;

        const DOUBLE = 8;
        const FLOAT = 16;
        const REAL = 32;
        const IMAGINARY = 64;

        const UTF8 = 128;
        const UTF16 = 256;
        const UTF32 = 512;
    }
}

/// The decoded value of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Char(char),
    Int(u64),
    Float(f64),
    Str(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_type_tokens() {
        assert!(TokenKind::Int.is_basic_type());
        assert!(TokenKind::Dchar.is_basic_type());
        assert!(!TokenKind::This.is_basic_type());
        assert!(!TokenKind::Immutable.is_basic_type());
    }

    #[test]
    fn subformat_flags_are_disjoint() {
        let f = LiteralSubformat::UNSIGNED | LiteralSubformat::LONG;
        assert!(f.contains(LiteralSubformat::UNSIGNED));
        assert!(f.contains(LiteralSubformat::LONG));
        assert!(!f.contains(LiteralSubformat::UTF16));
    }
}
