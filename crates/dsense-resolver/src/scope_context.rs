//! A baseline [`ResolutionContext`] over a [`SyntaxTree`].
//!
//! Good enough for tooling and tests: scope-chain name lookup, builtin
//! static properties, base-class resolution and module lookup with import
//! aliases. The delegated entry points (postfix chains, template instances,
//! `__traits`) stay with their external collaborators and answer `None`
//! here.

use dsense_ast::{
    DeclKind, ExprId, ExprKind, NodeId, StmtId, SyntaxTree, TokenKind, TypeDeclaration,
};
use dsense_common::CodeLocation;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::context::ResolutionContext;
use crate::resolve::builtin_type;
use crate::result::{
    ArrayResult, DelegateResult, Origin, ResolveResult, StaticTypeResult, TypeResult, non_empty,
};
use crate::scope_search::search_block_at;

pub struct ScopeContext<'a> {
    tree: &'a SyntaxTree,
    scoped_block: Option<NodeId>,
    scoped_statement: Option<StmtId>,
    /// Rebound import aliases (`import io = std.stdio;`), insertion-ordered
    /// so candidate order stays deterministic.
    aliases: IndexMap<String, NodeId>,
}

impl<'a> ScopeContext<'a> {
    /// A context scoped to the root module.
    pub fn new(tree: &'a SyntaxTree) -> Self {
        Self {
            tree,
            scoped_block: Some(tree.root()),
            scoped_statement: None,
            aliases: IndexMap::new(),
        }
    }

    /// A context scoped to the innermost block/statement at `caret`.
    pub fn at(tree: &'a SyntaxTree, caret: CodeLocation) -> Self {
        let (block, stmt) = search_block_at(tree, caret);
        Self {
            tree,
            scoped_block: block,
            scoped_statement: stmt,
            aliases: IndexMap::new(),
        }
    }

    /// A context scoped to an explicit block/statement pair.
    pub fn with_scope(
        tree: &'a SyntaxTree,
        block: Option<NodeId>,
        stmt: Option<StmtId>,
    ) -> Self {
        Self {
            tree,
            scoped_block: block,
            scoped_statement: stmt,
            aliases: IndexMap::new(),
        }
    }

    /// Register a module alias from a rebound import.
    pub fn add_module_alias(&mut self, name: impl Into<String>, module: NodeId) {
        self.aliases.insert(name.into(), module);
    }

    fn expr_origin(origin: Option<ExprId>) -> Origin {
        origin.map(Origin::Expression).unwrap_or(Origin::None)
    }

    /// Origin for a resolved type declaration: the referencing expression
    /// when there is one, else the declaration itself.
    fn type_origin(decl: &TypeDeclaration, origin: Option<ExprId>) -> Origin {
        origin
            .map(Origin::Expression)
            .unwrap_or_else(|| Origin::Declaration(decl.clone()))
    }

    fn first_of(results: Option<Vec<ResolveResult>>) -> Option<Box<ResolveResult>> {
        results.and_then(|mut v| {
            if v.is_empty() {
                None
            } else {
                Some(Box::new(v.swap_remove(0)))
            }
        })
    }

    fn members_named(&self, node: NodeId, name: &str) -> Vec<NodeId> {
        self.tree.decls.find_children(node, name)
    }
}

impl ResolutionContext for ScopeContext<'_> {
    fn tree(&self) -> &SyntaxTree {
        self.tree
    }

    fn scoped_block(&self) -> Option<NodeId> {
        self.scoped_block
    }

    fn scoped_statement(&self) -> Option<StmtId> {
        self.scoped_statement
    }

    fn resolve_identifier(
        &self,
        name: &str,
        origin: Option<ExprId>,
        module_scoped: bool,
    ) -> Option<Vec<ResolveResult>> {
        let decls = &self.tree.decls;
        let mut matched: Vec<NodeId> = Vec::new();
        let mut visited: FxHashSet<NodeId> = FxHashSet::default();

        if module_scoped {
            matched = self.members_named(self.tree.root(), name);
        } else {
            // Innermost scope wins; an overload set at one level resolves as
            // multiple candidates.
            let mut block = self.scoped_block;
            while let Some(b) = block {
                visited.insert(b);
                matched = self.members_named(b, name);
                if !matched.is_empty() {
                    break;
                }
                block = decls.get(b).parent;
            }
            if matched.is_empty() {
                for &module in self.tree.modules() {
                    if visited.contains(&module) {
                        continue;
                    }
                    matched.extend(self.members_named(module, name));
                }
            }
        }

        if matched.is_empty() {
            debug!(name, "identifier did not resolve");
            return None;
        }
        non_empty(
            matched
                .into_iter()
                .filter_map(|n| self.resolve_node_match(n, origin))
                .collect(),
        )
    }

    fn resolve_type(
        &self,
        decl: &TypeDeclaration,
        origin: Option<ExprId>,
    ) -> Option<Vec<ResolveResult>> {
        match decl {
            TypeDeclaration::Token(token) => Some(vec![builtin_type(*token)]),

            TypeDeclaration::Identifier(id) => {
                if let Some(qualifier) = &id.inner {
                    // Qualified reference: look the name up inside the named
                    // module(s) first, then fall back to member lookup on
                    // the resolved qualifier type.
                    let qualifier_name = qualifier.to_string();
                    let mut out = Vec::new();
                    for module in self.lookup_module_by_name(&qualifier_name) {
                        for member in self.members_named(module, &id.name) {
                            if let Some(r) = self.resolve_node_match(member, origin) {
                                out.push(r);
                            }
                        }
                    }
                    if out.is_empty()
                        && let Some(scope) = self.resolve_type(qualifier, origin)
                    {
                        return self.resolve_scoped_identifier(&id.name, &scope);
                    }
                    non_empty(out)
                } else {
                    self.resolve_identifier(&id.name, origin, id.module_scoped)
                }
            }

            TypeDeclaration::Pointer(inner) => {
                let base = inner
                    .as_deref()
                    .and_then(|t| Self::first_of(self.resolve_type(t, origin)));
                Some(vec![ResolveResult::Static(StaticTypeResult {
                    ty: Some(decl.clone()),
                    result_base: base,
                    origin: Self::type_origin(decl, origin),
                })])
            }

            TypeDeclaration::Array(arr) => {
                let value = arr
                    .value
                    .as_deref()
                    .and_then(|t| Self::first_of(self.resolve_type(t, origin)));
                let key_types = arr
                    .key
                    .as_deref()
                    .and_then(|t| self.resolve_type(t, origin));
                Some(vec![ResolveResult::Array(ArrayResult {
                    decl: arr.clone(),
                    key_types,
                    result_base: value,
                    origin: Self::type_origin(decl, origin),
                })])
            }

            TypeDeclaration::MemberFunctionAttr { inner, .. } => {
                let base = inner
                    .as_deref()
                    .and_then(|t| Self::first_of(self.resolve_type(t, origin)));
                Some(vec![ResolveResult::Static(StaticTypeResult {
                    ty: Some(decl.clone()),
                    result_base: base,
                    origin: Self::type_origin(decl, origin),
                })])
            }
        }
    }

    fn resolve_type_unfiltered(
        &self,
        decl: &TypeDeclaration,
        origin: Option<ExprId>,
    ) -> Option<Vec<ResolveResult>> {
        // The baseline has no template-argument machinery, so unfiltered
        // resolution coincides with plain resolution.
        self.resolve_type(decl, origin)
    }

    fn lookup_module_by_name(&self, name: &str) -> Vec<NodeId> {
        if let Some(&aliased) = self.aliases.get(name) {
            return vec![aliased];
        }
        self.tree.modules_by_name(name)
    }

    fn resolve_node_match(&self, node: NodeId, origin: Option<ExprId>) -> Option<ResolveResult> {
        let stamp = Self::expr_origin(origin);
        match &self.tree.decls.get(node).kind {
            DeclKind::Module { .. } | DeclKind::ClassLike { .. } | DeclKind::Enum => {
                Some(ResolveResult::Type(TypeResult {
                    node,
                    base_classes: None,
                    origin: stamp,
                }))
            }
            DeclKind::Variable { ty, .. } => {
                let declared = ty.as_ref()?;
                let mut result = Self::first_of(self.resolve_type(declared, origin))
                    .map(|b| *b)
                    .unwrap_or_else(|| {
                        // Unknown declared type: keep the declaration so
                        // downstream tooling can still display it.
                        ResolveResult::Static(StaticTypeResult {
                            ty: Some(declared.clone()),
                            result_base: None,
                            origin: Origin::None,
                        })
                    });
                result.set_origin(stamp);
                Some(result)
            }
            DeclKind::Method { return_type, .. } => Some(ResolveResult::Delegate(DelegateResult {
                return_types: return_type
                    .as_ref()
                    .and_then(|t| self.resolve_type(t, origin)),
                origin: stamp,
            })),
        }
    }

    fn resolve_base_classes(
        &self,
        ty: &TypeResult,
        _direct_only: bool,
    ) -> Option<Vec<ResolveResult>> {
        let DeclKind::ClassLike { base_classes, .. } = &self.tree.decls.get(ty.node).kind else {
            return None;
        };
        let mut out = Vec::new();
        for base in base_classes {
            if let Some(resolved) = self.resolve_type(base, None) {
                out.extend(resolved);
            }
        }
        non_empty(out)
    }

    fn try_static_property(&self, base: &ResolveResult, ident: &str) -> Option<ResolveResult> {
        match ident {
            // T.init is the type itself.
            "init" => Some(base.clone()),
            "sizeof" => Some(builtin_type(TokenKind::Ulong)),
            "max" | "min" => match base {
                ResolveResult::Static(s) => match &s.ty {
                    Some(TypeDeclaration::Token(t)) if t.is_basic_type() => {
                        Some(builtin_type(*t))
                    }
                    _ => None,
                },
                _ => None,
            },
            "length" => match base {
                ResolveResult::Array(_) => Some(builtin_type(TokenKind::Ulong)),
                ResolveResult::Static(s)
                    if matches!(s.ty, Some(TypeDeclaration::Array(_))) =>
                {
                    Some(builtin_type(TokenKind::Ulong))
                }
                _ => None,
            },
            _ => None,
        }
    }

    fn resolve_scoped_identifier(
        &self,
        ident: &str,
        scope: &[ResolveResult],
    ) -> Option<Vec<ResolveResult>> {
        let mut out = Vec::new();
        for candidate in scope {
            let ResolveResult::Type(tr) = candidate else {
                continue;
            };
            for member in self.members_named(tr.node, ident) {
                if let Some(r) = self.resolve_node_match(member, None) {
                    out.push(r);
                }
            }
            // Members inherited from the directly named bases; one level
            // only, so cyclic base lists cannot loop.
            if let Some(bases) = self.resolve_base_classes(tr, true) {
                for base in &bases {
                    let ResolveResult::Type(btr) = base else {
                        continue;
                    };
                    for member in self.members_named(btr.node, ident) {
                        if let Some(r) = self.resolve_node_match(member, None) {
                            out.push(r);
                        }
                    }
                }
            }
        }
        non_empty(out)
    }

    fn method_return_type(&self, literal: ExprId) -> Option<Vec<ResolveResult>> {
        match self.tree.exprs.kind(literal) {
            ExprKind::FunctionLiteral { return_type, .. } => return_type
                .as_ref()
                .and_then(|t| self.resolve_type(t, Some(literal))),
            _ => None,
        }
    }
}
