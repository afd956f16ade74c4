//! Editor state and the external scan contracts.
//!
//! Lexical classification (comments, string regions) and the backward token
//! scan from the caret belong to the external lexer/parser; only their call
//! contracts live here. The classifier consumes their outputs, never their
//! internals.

use dsense_ast::{Attribute, ExprId, NodeId, StmtId, SyntaxTree};
use dsense_common::CodeLocation;

/// Snapshot of the editor at the moment completion was requested.
pub struct EditorState<'a> {
    pub source_text: &'a str,
    /// Byte offset of the caret; always on a char boundary.
    pub caret_offset: usize,
    pub caret: CodeLocation,
    /// Physical file behind the buffer, when known.
    pub file_name: Option<&'a str>,
    pub tree: &'a SyntaxTree,
}

/// Lexical-region queries answered by the external scanner.
pub trait LexicalContext {
    /// Whether `offset` lies inside a comment or string-literal region.
    fn is_in_comment_or_string(&self, text: &str, offset: usize) -> bool;
}

/// The backward context scan over the enclosing block.
pub trait ContextScan {
    fn find_caret_context(
        &self,
        source: &str,
        block: NodeId,
        caret_offset: usize,
        caret: CodeLocation,
    ) -> ScanOutcome;
}

/// What the backward scan produced: the block it re-parsed (when narrower
/// than the located one) and the tracker state.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub parsed_block: Option<NodeId>,
    pub tracker: Option<TrackerState>,
}

/// Transient record built while scanning backward from the caret. Created
/// fresh per request, discarded after provider selection.
#[derive(Debug, Clone, Default)]
pub struct TrackerState {
    pub last_parsed_object: LastParsedObject,
    pub expecting_identifier: bool,
}

/// The last syntactic object the backward scan completed before the caret.
#[derive(Debug, Clone, Default)]
pub enum LastParsedObject {
    #[default]
    None,
    Attribute(Attribute),
    Pragma(Attribute),
    ScopeGuard(StmtId),
    Traits(ExprId),
    Import(StmtId),
    ImportBinding(StmtId),
    ModuleStatement(StmtId),
    MemberAccess(ExprId),
}
