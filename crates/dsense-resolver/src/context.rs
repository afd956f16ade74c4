//! The read-only context the resolver queries.
//!
//! The context bundles the scope chain at the caret, named-symbol lookup and
//! the entry points of the external collaborators (postfix-chain resolution,
//! template instances, `__traits`). The resolver never mutates anything
//! reachable through it.

use dsense_ast::{ExprId, NodeId, StmtId, SyntaxTree, TypeDeclaration};

use crate::result::{ResolveResult, TypeResult};

/// Scope chain + symbol lookup capability used during resolution.
///
/// All lookups answer `None` for "no determinable result"; implementations
/// never return empty sequences.
pub trait ResolutionContext {
    /// The tree every id in this context points into.
    fn tree(&self) -> &SyntaxTree;

    /// The innermost declaration block enclosing the caret.
    fn scoped_block(&self) -> Option<NodeId>;

    /// The innermost statement enclosing the caret.
    fn scoped_statement(&self) -> Option<StmtId>;

    /// Look up a name against the scope chain. `module_scoped` restricts the
    /// search to the module root (a leading-dot reference).
    fn resolve_identifier(
        &self,
        name: &str,
        origin: Option<ExprId>,
        module_scoped: bool,
    ) -> Option<Vec<ResolveResult>>;

    /// Resolve a type declaration under this context.
    fn resolve_type(
        &self,
        decl: &TypeDeclaration,
        origin: Option<ExprId>,
    ) -> Option<Vec<ResolveResult>>;

    /// Like [`resolve_type`](Self::resolve_type) but identifier-form types
    /// are resolved without template-argument filtering (the `new` path).
    fn resolve_type_unfiltered(
        &self,
        decl: &TypeDeclaration,
        origin: Option<ExprId>,
    ) -> Option<Vec<ResolveResult>>;

    /// All registered modules with the given dotted name.
    fn lookup_module_by_name(&self, name: &str) -> Vec<NodeId>;

    /// Turn a matched declaration node into a result, stamping `origin` as
    /// its provenance.
    fn resolve_node_match(&self, node: NodeId, origin: Option<ExprId>) -> Option<ResolveResult>;

    /// Resolve the base-class list of a type. `direct_only` stops after the
    /// directly named bases.
    fn resolve_base_classes(
        &self,
        ty: &TypeResult,
        direct_only: bool,
    ) -> Option<Vec<ResolveResult>>;

    /// Try a builtin static property (`int.max`, `arr.length`, `T.init`).
    fn try_static_property(&self, base: &ResolveResult, ident: &str) -> Option<ResolveResult>;

    /// Look up an identifier scoped to the given candidate types instead of
    /// the caret scope chain.
    fn resolve_scoped_identifier(
        &self,
        ident: &str,
        scope: &[ResolveResult],
    ) -> Option<Vec<ResolveResult>>;

    /// External entry point: resolve a postfix expression chain.
    fn resolve_postfix(&self, expr: ExprId) -> Option<Vec<ResolveResult>> {
        let _ = expr;
        None
    }

    /// External entry point: resolve a template instance.
    fn resolve_template_instance(&self, expr: ExprId) -> Option<Vec<ResolveResult>> {
        let _ = expr;
        None
    }

    /// External entry point: evaluate a `__traits` expression.
    fn resolve_traits(&self, expr: ExprId) -> Option<Vec<ResolveResult>> {
        let _ = expr;
        None
    }

    /// The declared or inferred return type of a function literal.
    fn method_return_type(&self, literal: ExprId) -> Option<Vec<ResolveResult>>;
}
