//! Resolved-type descriptors.
//!
//! Every result carries its provenance: the expression or synthesized type
//! declaration that produced it, so hover and navigation can point back into
//! the source. Wrapper results (pointer-of, array-of) chain to the wrapped
//! result through a single-owner `Box` link.

use dsense_ast::{ArrayDeclaration, ExprId, NodeId, TypeDeclaration};

/// Back-reference to whatever produced a result.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Origin {
    Expression(ExprId),
    /// A synthesized or declared type form (pointer wrappers, builtin
    /// token types).
    Declaration(TypeDeclaration),
    #[default]
    None,
}

/// A builtin or declared static type. Also used for pointer wrappers, where
/// `ty` is a pointer declaration and `result_base` the pointee.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticTypeResult {
    pub ty: Option<TypeDeclaration>,
    pub result_base: Option<Box<ResolveResult>>,
    pub origin: Origin,
}

/// An array (or associative array) type; `result_base` is the value type.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayResult {
    pub decl: ArrayDeclaration,
    /// Key type candidates of an associative array.
    pub key_types: Option<Vec<ResolveResult>>,
    pub result_base: Option<Box<ResolveResult>>,
    pub origin: Origin,
}

/// A delegate/function-literal type.
#[derive(Debug, Clone, PartialEq)]
pub struct DelegateResult {
    pub return_types: Option<Vec<ResolveResult>>,
    pub origin: Origin,
}

/// A named type declaration (class-like or enum node) with its resolved
/// direct base classes, when they have been computed.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeResult {
    pub node: NodeId,
    pub base_classes: Option<Vec<ResolveResult>>,
    pub origin: Origin,
}

/// The closed union of resolved-type descriptors.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveResult {
    Static(StaticTypeResult),
    Array(ArrayResult),
    Delegate(DelegateResult),
    Type(TypeResult),
}

impl ResolveResult {
    pub fn origin(&self) -> &Origin {
        match self {
            ResolveResult::Static(r) => &r.origin,
            ResolveResult::Array(r) => &r.origin,
            ResolveResult::Delegate(r) => &r.origin,
            ResolveResult::Type(r) => &r.origin,
        }
    }

    pub fn set_origin(&mut self, origin: Origin) {
        match self {
            ResolveResult::Static(r) => r.origin = origin,
            ResolveResult::Array(r) => r.origin = origin,
            ResolveResult::Delegate(r) => r.origin = origin,
            ResolveResult::Type(r) => r.origin = origin,
        }
    }

    /// The wrapped result of a wrapper type, if any.
    pub fn result_base(&self) -> Option<&ResolveResult> {
        match self {
            ResolveResult::Static(r) => r.result_base.as_deref(),
            ResolveResult::Array(r) => r.result_base.as_deref(),
            ResolveResult::Delegate(_) | ResolveResult::Type(_) => None,
        }
    }

    /// Wrap this result in a pointer (`&expr` makes an `int*` out of an
    /// `int`).
    pub fn wrap_pointer(self) -> ResolveResult {
        ResolveResult::Static(StaticTypeResult {
            ty: None,
            result_base: Some(Box::new(self)),
            origin: Origin::Declaration(TypeDeclaration::Pointer(None)),
        })
    }
}

/// Normalize a result sequence: an empty sequence becomes the unresolved
/// outcome, never an empty-but-present set.
pub fn non_empty(results: Vec<ResolveResult>) -> Option<Vec<ResolveResult>> {
    if results.is_empty() { None } else { Some(results) }
}
