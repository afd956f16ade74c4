//! Behavior of the expression type resolver against the baseline context.

use dsense_ast::{
    ArrayDeclaration, BinaryOp, ClassKind, ExprKind, LiteralFormat, LiteralSubformat,
    LiteralValue, MethodKind, TokenKind, TreeBuilder, TypeDeclaration, TypeidArg, UnaryOp,
};
use dsense_common::{CodeLocation, CodeSpan};

use super::{assert_builtin, float_literal, int_literal, sp, string_literal};
use crate::result::{Origin, ResolveResult};
use crate::{ScopeContext, resolve};

#[test]
fn comma_sequence_is_unresolved() {
    super::init_tracing();
    let mut b = TreeBuilder::new("app.main");
    let a = int_literal(&mut b);
    let c = int_literal(&mut b);
    let seq = b.add_expr(ExprKind::Sequence(vec![a, c]), sp());
    let tree = b.finish();
    assert_eq!(resolve(seq, &ScopeContext::new(&tree)), None);
}

#[test]
fn parenthesized_passes_through() {
    let mut b = TreeBuilder::new("app.main");
    let lit = int_literal(&mut b);
    let paren = b.add_expr(ExprKind::Parenthesized(lit), sp());
    let tree = b.finish();
    let ctxt = ScopeContext::new(&tree);
    assert_eq!(resolve(paren, &ctxt), resolve(lit, &ctxt));
}

#[test]
fn boolean_operators_always_resolve_to_bool() {
    for op in [
        BinaryOp::OrOr,
        BinaryOp::AndAnd,
        BinaryOp::Equal,
        BinaryOp::Identity,
        BinaryOp::Relational,
    ] {
        let mut b = TreeBuilder::new("app.main");
        let left = string_literal(&mut b);
        let right = float_literal(&mut b);
        let expr = b.add_expr(ExprKind::Binary { op, left, right }, sp());
        let tree = b.finish();
        let results = resolve(expr, &ScopeContext::new(&tree)).unwrap();
        assert_builtin(&results, TokenKind::Bool);
    }
}

#[test]
fn assignment_class_operators_take_left_operand() {
    for op in [
        BinaryOp::Assign,
        BinaryOp::Xor,
        BinaryOp::Or,
        BinaryOp::And,
        BinaryOp::Shift,
        BinaryOp::Add,
        BinaryOp::Mul,
        BinaryOp::Cat,
        BinaryOp::Pow,
    ] {
        let mut b = TreeBuilder::new("app.main");
        let left = int_literal(&mut b);
        let right = float_literal(&mut b);
        let expr = b.add_expr(ExprKind::Binary { op, left, right }, sp());
        let tree = b.finish();
        let ctxt = ScopeContext::new(&tree);
        assert_eq!(resolve(expr, &ctxt), resolve(left, &ctxt));
        assert_builtin(&resolve(expr, &ctxt).unwrap(), TokenKind::Int);
    }
}

#[test]
fn conditional_resolves_true_branch() {
    let mut b = TreeBuilder::new("app.main");
    let condition = int_literal(&mut b);
    let true_case = float_literal(&mut b);
    let false_case = int_literal(&mut b);
    let expr = b.add_expr(
        ExprKind::Conditional {
            condition,
            true_case,
            false_case,
        },
        sp(),
    );
    let tree = b.finish();
    let results = resolve(expr, &ScopeContext::new(&tree)).unwrap();
    assert_builtin(&results, TokenKind::Double);
}

#[test]
fn in_operator_resolves_container_side() {
    let mut b = TreeBuilder::new("app.main");
    let left = int_literal(&mut b);
    let element = int_literal(&mut b);
    let right = b.add_expr(ExprKind::ArrayLiteral(vec![element]), sp());
    let expr = b.add_expr(
        ExprKind::Binary {
            op: BinaryOp::In,
            left,
            right,
        },
        sp(),
    );
    let tree = b.finish();
    let results = resolve(expr, &ScopeContext::new(&tree)).unwrap();
    assert!(matches!(results[0], ResolveResult::Array(_)));
}

#[test]
fn simple_unary_operators_resolve_operand() {
    for op in [
        UnaryOp::Complement,
        UnaryOp::Increment,
        UnaryOp::Decrement,
        UnaryOp::Plus,
        UnaryOp::Minus,
        UnaryOp::Not,
        UnaryOp::Deref,
    ] {
        let mut b = TreeBuilder::new("app.main");
        let operand = int_literal(&mut b);
        let expr = b.add_expr(ExprKind::Unary { op, operand }, sp());
        let tree = b.finish();
        let results = resolve(expr, &ScopeContext::new(&tree)).unwrap();
        assert_builtin(&results, TokenKind::Int);
    }
}

#[test]
fn address_of_wraps_every_candidate_in_order() {
    // Two same-named variables form a two-candidate set; both must come
    // back pointer-wrapped, in the same order.
    let mut b = TreeBuilder::new("app.main");
    let root = b.root();
    b.add_variable(root, "x", Some(TypeDeclaration::Token(TokenKind::Int)), None, sp());
    b.add_variable(root, "x", Some(TypeDeclaration::Token(TokenKind::Float)), None, sp());
    let ident = b.add_expr(
        ExprKind::Identifier {
            name: "x".into(),
            module_scoped: false,
        },
        sp(),
    );
    let addr = b.add_expr(
        ExprKind::Unary {
            op: UnaryOp::AddressOf,
            operand: ident,
        },
        sp(),
    );
    let tree = b.finish();
    let ctxt = ScopeContext::new(&tree);

    let plain = resolve(ident, &ctxt).unwrap();
    let wrapped = resolve(addr, &ctxt).unwrap();
    assert_eq!(plain.len(), 2);
    assert_eq!(wrapped.len(), plain.len());
    for (w, p) in wrapped.iter().zip(&plain) {
        assert!(matches!(
            w.origin(),
            Origin::Declaration(TypeDeclaration::Pointer(None))
        ));
        assert_eq!(w.result_base(), Some(p));
    }
}

#[test]
fn new_of_identifier_type_matches_plain_identifier() {
    let mut b = TreeBuilder::new("app.main");
    let root = b.root();
    let class = b.add_class(root, "T", ClassKind::Class, Vec::new(), sp());
    let ident = b.add_expr(
        ExprKind::Identifier {
            name: "T".into(),
            module_scoped: false,
        },
        sp(),
    );
    let new_expr = b.add_expr(
        ExprKind::New {
            ty: TypeDeclaration::identifier("T"),
            args: Vec::new(),
        },
        sp(),
    );
    let tree = b.finish();
    let ctxt = ScopeContext::new(&tree);

    let via_new = resolve(new_expr, &ctxt).unwrap();
    let via_ident = resolve(ident, &ctxt).unwrap();
    assert_eq!(via_new.len(), 1);
    assert_eq!(via_ident.len(), 1);
    // Same declaration node; only the provenance differs.
    match (&via_new[0], &via_ident[0]) {
        (ResolveResult::Type(a), ResolveResult::Type(b)) => {
            assert_eq!(a.node, class);
            assert_eq!(a.node, b.node);
        }
        other => panic!("expected type results, got {other:?}"),
    }
}

#[test]
fn delete_and_mixin_are_unresolved() {
    let mut b = TreeBuilder::new("app.main");
    let lit = int_literal(&mut b);
    let del = b.add_expr(ExprKind::Delete(lit), sp());
    let mixin_arg = string_literal(&mut b);
    let mixin = b.add_expr(ExprKind::Mixin(mixin_arg), sp());
    let tree = b.finish();
    let ctxt = ScopeContext::new(&tree);
    assert_eq!(resolve(del, &ctxt), None);
    assert_eq!(resolve(mixin, &ctxt), None);
}

#[test]
fn cast_prefers_explicit_target_type() {
    let mut b = TreeBuilder::new("app.main");
    let operand = int_literal(&mut b);
    let cast = b.add_expr(
        ExprKind::Cast {
            ty: Some(TypeDeclaration::Token(TokenKind::Float)),
            attributes: Vec::new(),
            operand,
        },
        sp(),
    );
    let tree = b.finish();
    let results = resolve(cast, &ScopeContext::new(&tree)).unwrap();
    assert_builtin(&results, TokenKind::Float);
}

#[test]
fn attribute_only_cast_preserves_operand_type() {
    let mut b = TreeBuilder::new("app.main");
    let operand = int_literal(&mut b);
    let cast = b.add_expr(
        ExprKind::Cast {
            ty: None,
            attributes: vec![TokenKind::Immutable],
            operand,
        },
        sp(),
    );
    let tree = b.finish();
    let results = resolve(cast, &ScopeContext::new(&tree)).unwrap();
    assert_builtin(&results, TokenKind::Int);
}

#[test]
fn type_dot_tries_static_property_first() {
    let mut b = TreeBuilder::new("app.main");
    let expr = b.add_expr(
        ExprKind::TypeDot {
            ty: TypeDeclaration::Token(TokenKind::Int),
            ident: "max".into(),
        },
        sp(),
    );
    let tree = b.finish();
    let results = resolve(expr, &ScopeContext::new(&tree)).unwrap();
    assert_builtin(&results, TokenKind::Int);
}

#[test]
fn type_dot_falls_back_to_member_lookup() {
    let mut b = TreeBuilder::new("app.main");
    let root = b.root();
    let class = b.add_class(root, "C", ClassKind::Class, Vec::new(), sp());
    b.add_variable(class, "field", Some(TypeDeclaration::Token(TokenKind::Int)), None, sp());
    let expr = b.add_expr(
        ExprKind::TypeDot {
            ty: TypeDeclaration::identifier("C"),
            ident: "field".into(),
        },
        sp(),
    );
    let tree = b.finish();
    let results = resolve(expr, &ScopeContext::new(&tree)).unwrap();
    assert_builtin(&results, TokenKind::Int);
}

#[test]
fn char_literal_is_char() {
    let mut b = TreeBuilder::new("app.main");
    let lit = b.add_expr(
        ExprKind::Literal {
            value: LiteralValue::Char('x'),
            format: LiteralFormat::CHAR_LITERAL,
            subformat: LiteralSubformat::empty(),
        },
        sp(),
    );
    let tree = b.finish();
    assert_builtin(
        &resolve(lit, &ScopeContext::new(&tree)).unwrap(),
        TokenKind::Char,
    );
}

#[test]
fn floating_literal_subformats() {
    let cases = [
        (LiteralSubformat::empty(), TokenKind::Double),
        (LiteralSubformat::IMAGINARY, TokenKind::Idouble),
        (LiteralSubformat::FLOAT, TokenKind::Float),
        (
            LiteralSubformat::FLOAT | LiteralSubformat::IMAGINARY,
            TokenKind::Ifloat,
        ),
        (LiteralSubformat::REAL, TokenKind::Real),
        (
            LiteralSubformat::REAL | LiteralSubformat::IMAGINARY,
            TokenKind::Ireal,
        ),
    ];
    for (subformat, expected) in cases {
        let mut b = TreeBuilder::new("app.main");
        let lit = b.add_expr(
            ExprKind::Literal {
                value: LiteralValue::Float(1.0),
                format: LiteralFormat::FLOATING_POINT | LiteralFormat::SCALAR,
                subformat,
            },
            sp(),
        );
        let tree = b.finish();
        assert_builtin(&resolve(lit, &ScopeContext::new(&tree)).unwrap(), expected);
    }
}

#[test]
fn integer_literal_subformats() {
    let cases = [
        (LiteralSubformat::INTEGER, TokenKind::Int),
        (
            LiteralSubformat::INTEGER | LiteralSubformat::UNSIGNED,
            TokenKind::Uint,
        ),
        (
            LiteralSubformat::INTEGER | LiteralSubformat::LONG,
            TokenKind::Long,
        ),
        (
            LiteralSubformat::INTEGER | LiteralSubformat::UNSIGNED | LiteralSubformat::LONG,
            TokenKind::Ulong,
        ),
    ];
    for (subformat, expected) in cases {
        let mut b = TreeBuilder::new("app.main");
        let lit = b.add_expr(
            ExprKind::Literal {
                value: LiteralValue::Int(5),
                format: LiteralFormat::SCALAR,
                subformat,
            },
            sp(),
        );
        let tree = b.finish();
        assert_builtin(&resolve(lit, &ScopeContext::new(&tree)).unwrap(), expected);
    }
}

#[test]
fn int_variable_initializer_scenario() {
    // `int x = 5;` — resolving the literal after the caret yields int.
    let mut b = TreeBuilder::new("app.main");
    let root = b.root();
    let lit = int_literal(&mut b);
    b.add_variable(
        root,
        "x",
        Some(TypeDeclaration::Token(TokenKind::Int)),
        Some(lit),
        sp(),
    );
    let tree = b.finish();
    assert_builtin(
        &resolve(lit, &ScopeContext::new(&tree)).unwrap(),
        TokenKind::Int,
    );
}

#[test]
fn string_literal_prefers_root_module_alias() {
    let mut b = TreeBuilder::new("app.main");
    let object = b.add_module("object");
    let alias_ty = TypeDeclaration::Array(ArrayDeclaration {
        value: Some(Box::new(TypeDeclaration::MemberFunctionAttr {
            attribute: TokenKind::Immutable,
            inner: Some(Box::new(TypeDeclaration::Token(TokenKind::Char))),
        })),
        ..Default::default()
    });
    b.add_variable(object, "string", Some(alias_ty), None, sp());
    let lit = string_literal(&mut b);
    let tree = b.finish();

    let results = resolve(lit, &ScopeContext::new(&tree)).unwrap();
    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], ResolveResult::Array(_)));
    assert_eq!(results[0].origin(), &Origin::Expression(lit));
}

#[test]
fn string_literal_falls_back_to_immutable_char_array() {
    for (subformat, char_token) in [
        (LiteralSubformat::UTF8, TokenKind::Char),
        (LiteralSubformat::UTF16, TokenKind::Wchar),
        (LiteralSubformat::UTF32, TokenKind::Dchar),
    ] {
        let mut b = TreeBuilder::new("app.main");
        let lit = b.add_expr(
            ExprKind::Literal {
                value: LiteralValue::Str("abc".into()),
                format: LiteralFormat::STRING_LITERAL,
                subformat,
            },
            sp(),
        );
        let tree = b.finish();
        let results = resolve(lit, &ScopeContext::new(&tree)).unwrap();
        assert_eq!(results.len(), 1);
        let ResolveResult::Array(arr) = &results[0] else {
            panic!("expected synthesized array result");
        };
        let expected = TypeDeclaration::MemberFunctionAttr {
            attribute: TokenKind::Immutable,
            inner: Some(Box::new(TypeDeclaration::Token(char_token))),
        };
        assert_eq!(arr.decl.value.as_deref(), Some(&expected));
    }
}

fn class_with_method(
    base_classes: Vec<TypeDeclaration>,
) -> (dsense_ast::TreeBuilder, dsense_ast::NodeId) {
    let mut b = TreeBuilder::new("app.main");
    let root = b.root();
    let class = b.add_class(
        root,
        "A",
        ClassKind::Class,
        base_classes,
        CodeSpan::new(CodeLocation::new(2, 1), CodeLocation::new(8, 1)),
    );
    let method = b.add_method(
        class,
        "sup",
        Some(TypeDeclaration::identifier("A")),
        MethodKind::Normal,
        CodeSpan::new(CodeLocation::new(3, 3), CodeLocation::new(6, 3)),
    );
    (b, method)
}

#[test]
fn this_resolves_to_enclosing_class() {
    let (mut b, method) = class_with_method(Vec::new());
    let this = b.add_expr(ExprKind::Token(TokenKind::This), sp());
    let tree = b.finish();
    let ctxt = ScopeContext::with_scope(&tree, Some(method), None);

    let results = resolve(this, &ctxt).unwrap();
    assert_eq!(results.len(), 1);
    match &results[0] {
        ResolveResult::Type(tr) => {
            assert_eq!(tree.decls.get(tr.node).name, "A");
            assert_eq!(tr.origin, Origin::Expression(this));
        }
        other => panic!("expected type result, got {other:?}"),
    }
}

#[test]
fn super_without_base_class_is_unresolved() {
    let (mut b, method) = class_with_method(Vec::new());
    let sup = b.add_expr(ExprKind::Token(TokenKind::Super), sp());
    let tree = b.finish();
    let ctxt = ScopeContext::with_scope(&tree, Some(method), None);
    assert_eq!(resolve(sup, &ctxt), None);
}

#[test]
fn super_resolves_base_and_restamps_provenance() {
    let (mut b, method) = class_with_method(vec![TypeDeclaration::identifier("B")]);
    let root = b.root();
    let base = b.add_class(root, "B", ClassKind::Class, Vec::new(), sp());
    let sup = b.add_expr(ExprKind::Token(TokenKind::Super), sp());
    let tree = b.finish();
    let ctxt = ScopeContext::with_scope(&tree, Some(method), None);

    let results = resolve(sup, &ctxt).unwrap();
    assert_eq!(results.len(), 1);
    match &results[0] {
        ResolveResult::Type(tr) => {
            assert_eq!(tr.node, base);
            assert_eq!(tr.origin, Origin::Expression(sup));
        }
        other => panic!("expected type result, got {other:?}"),
    }
}

#[test]
fn empty_array_literal_is_unresolved() {
    let mut b = TreeBuilder::new("app.main");
    let arr = b.add_expr(ExprKind::ArrayLiteral(Vec::new()), sp());
    let tree = b.finish();
    assert_eq!(resolve(arr, &ScopeContext::new(&tree)), None);
}

#[test]
fn array_literal_types_from_first_element() {
    let mut b = TreeBuilder::new("app.main");
    let e1 = int_literal(&mut b);
    let e2 = int_literal(&mut b);
    let e3 = int_literal(&mut b);
    let arr = b.add_expr(ExprKind::ArrayLiteral(vec![e1, e2, e3]), sp());
    let tree = b.finish();

    let results = resolve(arr, &ScopeContext::new(&tree)).unwrap();
    assert_eq!(results.len(), 1);
    let ResolveResult::Array(r) = &results[0] else {
        panic!("expected array result");
    };
    assert_eq!(r.origin, Origin::Expression(arr));
    assert_builtin(std::slice::from_ref(r.result_base.as_deref().unwrap()), TokenKind::Int);
}

#[test]
fn empty_assoc_array_literal_is_unresolved() {
    let mut b = TreeBuilder::new("app.main");
    let aa = b.add_expr(ExprKind::AssocArrayLiteral(Vec::new()), sp());
    let tree = b.finish();
    assert_eq!(resolve(aa, &ScopeContext::new(&tree)), None);
}

#[test]
fn assoc_array_literal_carries_key_and_value_types() {
    // `["a": 1]` — one array result, key type string-shaped, value int.
    let mut b = TreeBuilder::new("app.main");
    let key = string_literal(&mut b);
    let value = int_literal(&mut b);
    let aa = b.add_expr(ExprKind::AssocArrayLiteral(vec![(key, value)]), sp());
    let tree = b.finish();

    let results = resolve(aa, &ScopeContext::new(&tree)).unwrap();
    assert_eq!(results.len(), 1);
    let ResolveResult::Array(r) = &results[0] else {
        panic!("expected array result");
    };
    assert_eq!(r.decl.key_expr, Some(key));
    assert_builtin(std::slice::from_ref(r.result_base.as_deref().unwrap()), TokenKind::Int);
    let keys = r.key_types.as_ref().unwrap();
    assert!(matches!(keys[0], ResolveResult::Array(_)));
}

#[test]
fn function_literal_resolves_to_delegate() {
    let mut b = TreeBuilder::new("app.main");
    let lit = b.add_expr(
        ExprKind::FunctionLiteral {
            return_type: Some(TypeDeclaration::Token(TokenKind::Int)),
            is_delegate: true,
        },
        sp(),
    );
    let tree = b.finish();

    let results = resolve(lit, &ScopeContext::new(&tree)).unwrap();
    assert_eq!(results.len(), 1);
    let ResolveResult::Delegate(d) = &results[0] else {
        panic!("expected delegate result");
    };
    assert_eq!(d.origin, Origin::Expression(lit));
    assert_builtin(d.return_types.as_deref().unwrap(), TokenKind::Int);
}

#[test]
fn assert_is_void_and_is_expression_is_int() {
    let mut b = TreeBuilder::new("app.main");
    let cond = int_literal(&mut b);
    let assert_expr = b.add_expr(
        ExprKind::Assert {
            condition: cond,
            message: None,
        },
        sp(),
    );
    let is_expr = b.add_expr(
        ExprKind::Is {
            tested: Some(TypeDeclaration::Token(TokenKind::Int)),
        },
        sp(),
    );
    let tree = b.finish();
    let ctxt = ScopeContext::new(&tree);
    assert_builtin(&resolve(assert_expr, &ctxt).unwrap(), TokenKind::Void);
    assert_builtin(&resolve(is_expr, &ctxt).unwrap(), TokenKind::Int);
}

#[test]
fn import_expression_resolves_to_string_type() {
    let mut b = TreeBuilder::new("app.main");
    let object = b.add_module("object");
    b.add_variable(
        object,
        "string",
        Some(TypeDeclaration::Array(ArrayDeclaration::default())),
        None,
        sp(),
    );
    let imp = b.add_expr(ExprKind::Import(None), sp());
    let tree = b.finish();

    let results = resolve(imp, &ScopeContext::new(&tree)).unwrap();
    assert!(matches!(results[0], ResolveResult::Array(_)));
}

#[test]
fn typeof_resolves_wrapped_declaration() {
    let mut b = TreeBuilder::new("app.main");
    let expr = b.add_expr(ExprKind::TypeOf(TypeDeclaration::Token(TokenKind::Uint)), sp());
    let tree = b.finish();
    assert_builtin(
        &resolve(expr, &ScopeContext::new(&tree)).unwrap(),
        TokenKind::Uint,
    );
}

#[test]
fn typeid_resolves_to_object_typeinfo() {
    let mut b = TreeBuilder::new("app.main");
    let object = b.add_module("object");
    let typeinfo = b.add_class(object, "TypeInfo", ClassKind::Class, Vec::new(), sp());
    let lit = int_literal(&mut b);
    let expr = b.add_expr(ExprKind::Typeid(TypeidArg::Expr(lit)), sp());
    let tree = b.finish();

    let results = resolve(expr, &ScopeContext::new(&tree)).unwrap();
    match &results[0] {
        ResolveResult::Type(tr) => assert_eq!(tr.node, typeinfo),
        other => panic!("expected TypeInfo type result, got {other:?}"),
    }
}

#[test]
fn external_entry_points_are_unresolved_in_baseline() {
    let mut b = TreeBuilder::new("app.main");
    let base = int_literal(&mut b);
    let postfix = b.add_expr(
        ExprKind::Postfix {
            base,
            op: dsense_ast::PostfixOp::Increment,
        },
        sp(),
    );
    let traits = b.add_expr(
        ExprKind::Traits {
            keyword: "compiles".into(),
            args: Vec::new(),
        },
        sp(),
    );
    let template = b.add_expr(
        ExprKind::TemplateInstance {
            name: "map".into(),
            args: Vec::new(),
        },
        sp(),
    );
    let tree = b.finish();
    let ctxt = ScopeContext::new(&tree);
    assert_eq!(resolve(postfix, &ctxt), None);
    assert_eq!(resolve(traits, &ctxt), None);
    assert_eq!(resolve(template, &ctxt), None);
}

#[test]
fn resolution_is_referentially_transparent() {
    let mut b = TreeBuilder::new("app.main");
    let e1 = int_literal(&mut b);
    let arr = b.add_expr(ExprKind::ArrayLiteral(vec![e1]), sp());
    let tree = b.finish();
    let ctxt = ScopeContext::new(&tree);
    assert_eq!(resolve(arr, &ctxt), resolve(arr, &ctxt));
}
