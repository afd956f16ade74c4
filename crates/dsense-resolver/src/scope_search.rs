//! Locating the innermost block and statement under a caret.

use dsense_ast::{DeclKind, NodeId, StmtId, StmtKind, SyntaxTree};
use dsense_common::CodeLocation;

/// Find the innermost declaration block enclosing `caret`, and within it the
/// innermost statement of the enclosing method body.
///
/// Returns `(None, None)` when the caret lies outside the root module span.
pub fn search_block_at(tree: &SyntaxTree, caret: CodeLocation) -> (Option<NodeId>, Option<StmtId>) {
    let root = tree.root();
    if !tree.decls.get(root).span.contains(caret) {
        return (None, None);
    }

    let mut current = root;
    loop {
        let next = tree.decls.get(current).children.iter().copied().find(|&c| {
            let node = tree.decls.get(c);
            node.is_block() && node.span.contains(caret)
        });
        match next {
            Some(child) => current = child,
            None => break,
        }
    }

    let stmt = match &tree.decls.get(current).kind {
        DeclKind::Method { body, .. } => innermost_statement(tree, body, caret),
        _ => None,
    };

    (Some(current), stmt)
}

fn innermost_statement(tree: &SyntaxTree, stmts: &[StmtId], caret: CodeLocation) -> Option<StmtId> {
    for &stmt in stmts {
        if tree.stmts.get(stmt).span.contains(caret) {
            return Some(match tree.stmts.kind(stmt) {
                StmtKind::Block(inner) => {
                    innermost_statement(tree, inner, caret).unwrap_or(stmt)
                }
                _ => stmt,
            });
        }
    }
    None
}
