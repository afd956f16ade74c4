//! The expression type resolver.
//!
//! Structural dispatch over the expression variant. Recursion depth is
//! bounded by expression nesting; nothing in here mutates the tree or the
//! context, so resolving the same (node, context) pair always yields the
//! same sequence.

use dsense_ast::{
    ArrayDeclaration, ExprId, ExprKind, LiteralFormat, LiteralSubformat, TokenKind,
    TypeDeclaration,
};
use tracing::trace;

use crate::context::ResolutionContext;
use crate::result::{
    ArrayResult, DelegateResult, Origin, ResolveResult, StaticTypeResult, TypeResult, non_empty,
};

/// A resolved builtin type token (`bool`, `void`, `int`, ...).
pub fn builtin_type(token: TokenKind) -> ResolveResult {
    ResolveResult::Static(StaticTypeResult {
        ty: Some(TypeDeclaration::Token(token)),
        result_base: None,
        origin: Origin::Declaration(TypeDeclaration::Token(token)),
    })
}

fn single(result: ResolveResult) -> Option<Vec<ResolveResult>> {
    Some(vec![result])
}

/// Resolve the type of an expression under `ctxt`.
///
/// Returns the ordered sequence of type candidates, or `None` when no type
/// can be determined. `None` is distinct from "resolves to `void`": `void`
/// comes back as a proper builtin-type result.
pub fn resolve(expr: ExprId, ctxt: &dyn ResolutionContext) -> Option<Vec<ResolveResult>> {
    trace!(expr = expr.0, "resolve expression");

    match ctxt.tree().exprs.kind(expr) {
        // A comma sequence has no single type.
        ExprKind::Sequence(_) => None,

        ExprKind::Parenthesized(inner) => resolve(*inner, ctxt),

        ExprKind::Binary { op, left, right } => {
            if op.takes_left_operand_type() {
                resolve(*left, ctxt)
            } else if op.is_boolean() {
                single(builtin_type(TokenKind::Bool))
            } else {
                // `a in b` — a pointer to the element when present, so the
                // container's side carries the type information.
                debug_assert!(matches!(*op, dsense_ast::BinaryOp::In));
                resolve(*right, ctxt)
            }
        }

        ExprKind::Conditional { true_case, .. } => resolve(*true_case, ctxt),

        ExprKind::Unary { op, operand } => match op {
            dsense_ast::UnaryOp::AddressOf => {
                let bases = resolve(*operand, ctxt)?;
                non_empty(bases.into_iter().map(ResolveResult::wrap_pointer).collect())
            }
            _ => resolve(*operand, ctxt),
        },

        ExprKind::New { ty, .. } => {
            // Identifier-form types skip template-argument filtering here;
            // constructor argument matching is not attempted.
            if matches!(ty, TypeDeclaration::Identifier(_)) {
                ctxt.resolve_type_unfiltered(ty, Some(expr))
            } else {
                ctxt.resolve_type(ty, Some(expr))
            }
        }

        ExprKind::Delete(_) => None,

        ExprKind::Cast {
            ty,
            attributes: _,
            operand,
        } => match ty {
            Some(target) => ctxt.resolve_type(target, Some(expr)),
            // Attribute-only casts are type-preserving; wrapping the result
            // in the cast qualifiers is an open item, the operand's type
            // passes through unchanged.
            None => resolve(*operand, ctxt),
        },

        ExprKind::TypeDot { ty, ident } => {
            let candidates = ctxt.resolve_type(ty, Some(expr))?;
            for candidate in &candidates {
                if let Some(prop) = ctxt.try_static_property(candidate, ident) {
                    return single(prop);
                }
            }
            ctxt.resolve_scoped_identifier(ident, &candidates)
        }

        ExprKind::Postfix { .. } => ctxt.resolve_postfix(expr),

        ExprKind::Identifier {
            name,
            module_scoped,
        } => ctxt.resolve_identifier(name, Some(expr), *module_scoped),

        ExprKind::Literal {
            format, subformat, ..
        } => resolve_literal(expr, *format, *subformat, ctxt),

        ExprKind::Token(token) => match token {
            TokenKind::This => {
                let class = enclosing_class(ctxt)?;
                single(ctxt.resolve_node_match(class, Some(expr))?)
            }
            TokenKind::Super => {
                let class = enclosing_class(ctxt)?;
                let tr = TypeResult {
                    node: class,
                    base_classes: None,
                    origin: Origin::Expression(expr),
                };
                let mut bases = ctxt.resolve_base_classes(&tr, true)?;
                // Re-stamp provenance with the `super` token itself.
                for base in &mut bases {
                    base.set_origin(Origin::Expression(expr));
                }
                non_empty(bases)
            }
            _ => None,
        },

        ExprKind::ArrayLiteral(elements) => {
            // The first element's type is taken as the array's value type.
            let first = *elements.first()?;
            let value_types = resolve(first, ctxt)?;
            non_empty(
                value_types
                    .into_iter()
                    .map(|vt| {
                        ResolveResult::Array(ArrayResult {
                            decl: ArrayDeclaration::default(),
                            key_types: None,
                            result_base: Some(Box::new(vt)),
                            origin: Origin::Expression(expr),
                        })
                    })
                    .collect(),
            )
        }

        ExprKind::AssocArrayLiteral(entries) => {
            let (key, value) = *entries.first()?;
            let key_types = resolve(key, ctxt);
            let value_types = resolve(value, ctxt)?;
            let decl = ArrayDeclaration {
                value: None,
                key: None,
                key_expr: Some(key),
                clamps_empty: false,
            };
            // One array result per value-type candidate, each carrying the
            // key type candidates.
            non_empty(
                value_types
                    .into_iter()
                    .map(|vt| {
                        ResolveResult::Array(ArrayResult {
                            decl: decl.clone(),
                            key_types: key_types.clone(),
                            result_base: Some(Box::new(vt)),
                            origin: Origin::Expression(expr),
                        })
                    })
                    .collect(),
            )
        }

        ExprKind::FunctionLiteral { .. } => single(ResolveResult::Delegate(DelegateResult {
            return_types: ctxt.method_return_type(expr),
            origin: Origin::Expression(expr),
        })),

        ExprKind::Assert { .. } => single(builtin_type(TokenKind::Void)),

        // Would require evaluating the mixin string at compile time, then
        // parsing and resolving it. Permanently unresolved.
        ExprKind::Mixin(_) => None,

        ExprKind::Import(_) => ctxt.resolve_identifier("string", None, false),

        ExprKind::TypeOf(decl) => ctxt.resolve_type(decl, Some(expr)),

        // No per-category TypeInfo distinction; always the nominal
        // object.TypeInfo type.
        ExprKind::Typeid(_) => {
            ctxt.resolve_type(&TypeDeclaration::qualified("object", "TypeInfo"), Some(expr))
        }

        ExprKind::Is { .. } => single(builtin_type(TokenKind::Int)),

        ExprKind::Traits { .. } => ctxt.resolve_traits(expr),

        ExprKind::TemplateInstance { .. } => ctxt.resolve_template_instance(expr),
    }
}

/// Walk the enclosing-block chain upward to the nearest class-like
/// declaration.
fn enclosing_class(ctxt: &dyn ResolutionContext) -> Option<dsense_ast::NodeId> {
    let decls = &ctxt.tree().decls;
    let mut block = ctxt.scoped_block();
    while let Some(node) = block {
        if decls.get(node).is_class_like() {
            return Some(node);
        }
        block = decls.get(node).parent;
    }
    None
}

fn resolve_literal(
    expr: ExprId,
    format: LiteralFormat,
    subformat: LiteralSubformat,
    ctxt: &dyn ResolutionContext,
) -> Option<Vec<ResolveResult>> {
    if format.contains(LiteralFormat::CHAR_LITERAL) {
        return single(builtin_type(TokenKind::Char));
    }

    if format.contains(LiteralFormat::FLOATING_POINT | LiteralFormat::SCALAR) {
        let imaginary = subformat.contains(LiteralSubformat::IMAGINARY);
        let token = if subformat.contains(LiteralSubformat::FLOAT) {
            if imaginary { TokenKind::Ifloat } else { TokenKind::Float }
        } else if subformat.contains(LiteralSubformat::REAL) {
            if imaginary { TokenKind::Ireal } else { TokenKind::Real }
        } else if imaginary {
            TokenKind::Idouble
        } else {
            TokenKind::Double
        };
        return single(builtin_type(token));
    }

    if format.contains(LiteralFormat::SCALAR) {
        let unsigned = subformat.contains(LiteralSubformat::UNSIGNED);
        let token = if subformat.contains(LiteralSubformat::LONG) {
            if unsigned { TokenKind::Ulong } else { TokenKind::Long }
        } else if unsigned {
            TokenKind::Uint
        } else {
            TokenKind::Int
        };
        return single(builtin_type(token));
    }

    if format.intersects(LiteralFormat::STRING_LITERAL | LiteralFormat::VERBATIM_STRING) {
        return single(resolve_string_literal(expr, subformat, ctxt));
    }

    None
}

/// String literals prefer the runtime's real alias types (`string`,
/// `wstring`, `dstring`) from the root `object` module; when the alias
/// cannot be found, an immutable array-of-char type is synthesized inline.
fn resolve_string_literal(
    expr: ExprId,
    subformat: LiteralSubformat,
    ctxt: &dyn ResolutionContext,
) -> ResolveResult {
    let alias = if subformat.contains(LiteralSubformat::UTF32) {
        "dstring"
    } else if subformat.contains(LiteralSubformat::UTF16) {
        "wstring"
    } else {
        "string"
    };

    for module in ctxt.lookup_module_by_name("object") {
        if let Some(node) = ctxt.tree().decls.find_child(module, alias)
            && let Some(result) = ctxt.resolve_node_match(node, Some(expr))
        {
            return result;
        }
    }

    let char_token = if subformat.contains(LiteralSubformat::UTF32) {
        TokenKind::Dchar
    } else if subformat.contains(LiteralSubformat::UTF16) {
        TokenKind::Wchar
    } else {
        TokenKind::Char
    };
    let immutable_char = TypeDeclaration::MemberFunctionAttr {
        attribute: TokenKind::Immutable,
        inner: Some(Box::new(TypeDeclaration::Token(char_token))),
    };
    ResolveResult::Array(ArrayResult {
        decl: ArrayDeclaration {
            value: Some(Box::new(immutable_char.clone())),
            ..Default::default()
        },
        key_types: None,
        result_base: Some(Box::new(ResolveResult::Static(StaticTypeResult {
            ty: Some(immutable_char),
            result_base: None,
            origin: Origin::Expression(expr),
        }))),
        origin: Origin::Expression(expr),
    })
}
