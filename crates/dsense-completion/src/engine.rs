//! Request pipeline: gatekeeper, classifier, provider.

use dsense_resolver::ResolutionContext;
use tracing::debug;

use crate::candidate::CompletionSink;
use crate::classifier::classify;
use crate::gatekeeper::is_completion_allowed;
use crate::scan::{ContextScan, EditorState, LexicalContext};

/// Run one completion request end to end. Returns whether a provider ran;
/// the candidates land in `sink`.
pub fn completion_candidates(
    editor: &EditorState<'_>,
    typed_fragment: &str,
    lexical: &dyn LexicalContext,
    scan: &dyn ContextScan,
    ctxt: &dyn ResolutionContext,
    sink: &mut dyn CompletionSink,
) -> bool {
    let entered = typed_fragment.chars().next();
    if !is_completion_allowed(editor.source_text, editor.caret_offset, entered, lexical) {
        debug!(offset = editor.caret_offset, "completion suppressed");
        return false;
    }

    let Some(provider) = classify(editor, typed_fragment, scan) else {
        return false;
    };
    provider.build_completion_data(editor, typed_fragment, ctxt, sink);
    true
}
