//! Completion test suites and shared fixtures.

use dsense_ast::{NodeId, SyntaxTree};
use dsense_common::{CodeLocation, CodeSpan};

use crate::scan::{ContextScan, EditorState, LexicalContext, ScanOutcome};


pub(crate) fn sp() -> CodeSpan {
    CodeSpan::empty(CodeLocation::new(1, 1))
}

pub(crate) fn span(sl: u32, sc: u32, el: u32, ec: u32) -> CodeSpan {
    CodeSpan::new(CodeLocation::new(sl, sc), CodeLocation::new(el, ec))
}

/// A scan stub replaying a fixed outcome.
pub(crate) struct ScriptedScan(pub ScanOutcome);

impl ContextScan for ScriptedScan {
    fn find_caret_context(
        &self,
        _source: &str,
        _block: NodeId,
        _caret_offset: usize,
        _caret: CodeLocation,
    ) -> ScanOutcome {
        self.0.clone()
    }
}

pub(crate) struct PlainText;

impl LexicalContext for PlainText {
    fn is_in_comment_or_string(&self, _text: &str, _offset: usize) -> bool {
        false
    }
}

pub(crate) fn editor_at<'a>(
    tree: &'a SyntaxTree,
    source: &'a str,
    caret: CodeLocation,
) -> EditorState<'a> {
    EditorState {
        source_text: source,
        caret_offset: source.len(),
        caret,
        file_name: None,
        tree,
    }
}
