//! Expression type resolution for the dsense source-intelligence engine.
//!
//! The central query is [`resolve`]: given an expression node and a
//! read-only [`ResolutionContext`], produce the ordered sequence of resolved
//! type descriptors, or `None` when no type can be determined. "Unresolved"
//! is an expected outcome, never an error; an empty sequence is never
//! returned.
//!
//! The crate also provides [`search_block_at`] (innermost block/statement at
//! a caret) and [`ScopeContext`], a baseline context implementation over a
//! [`dsense_ast::SyntaxTree`] used by tooling and tests.

pub mod result;
pub use result::{
    ArrayResult, DelegateResult, Origin, ResolveResult, StaticTypeResult, TypeResult, non_empty,
};

pub mod context;
pub use context::ResolutionContext;

pub mod resolve;
pub use resolve::{builtin_type, resolve};

pub mod scope_search;
pub use scope_search::search_block_at;

pub mod scope_context;
pub use scope_context::ScopeContext;

#[cfg(test)]
mod tests;
