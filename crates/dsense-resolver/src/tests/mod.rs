//! Resolver test suites.

use dsense_ast::{
    ExprId, ExprKind, LiteralFormat, LiteralSubformat, LiteralValue, TokenKind, TreeBuilder,
    TypeDeclaration,
};
use dsense_common::{CodeLocation, CodeSpan};

use crate::result::ResolveResult;

mod resolve_tests;

/// Opt-in tracing output while debugging test failures
/// (`RUST_LOG=dsense_resolver=trace`).
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub(crate) fn sp() -> CodeSpan {
    CodeSpan::empty(CodeLocation::new(1, 1))
}

pub(crate) fn int_literal(b: &mut TreeBuilder) -> ExprId {
    b.add_expr(
        ExprKind::Literal {
            value: LiteralValue::Int(5),
            format: LiteralFormat::SCALAR,
            subformat: LiteralSubformat::INTEGER,
        },
        sp(),
    )
}

pub(crate) fn float_literal(b: &mut TreeBuilder) -> ExprId {
    b.add_expr(
        ExprKind::Literal {
            value: LiteralValue::Float(1.5),
            format: LiteralFormat::FLOATING_POINT | LiteralFormat::SCALAR,
            subformat: LiteralSubformat::empty(),
        },
        sp(),
    )
}

pub(crate) fn string_literal(b: &mut TreeBuilder) -> ExprId {
    b.add_expr(
        ExprKind::Literal {
            value: LiteralValue::Str("abc".into()),
            format: LiteralFormat::STRING_LITERAL,
            subformat: LiteralSubformat::UTF8,
        },
        sp(),
    )
}

/// Assert a single builtin-type result.
pub(crate) fn assert_builtin(results: &[ResolveResult], token: TokenKind) {
    assert_eq!(results.len(), 1, "expected exactly one result");
    match &results[0] {
        ResolveResult::Static(s) => {
            assert_eq!(s.ty, Some(TypeDeclaration::Token(token)));
        }
        other => panic!("expected builtin {token:?}, got {other:?}"),
    }
}
