//! The caret context classifier: pick exactly one provider for a request.

use dsense_resolver::search_block_at;
use tracing::debug;

use crate::helpers::have_same_ancestors;
use crate::provider::{
    AttributeCompletion, CompletionProvider, ContextCompletion, ImportCompletion,
    MemberCompletion, ModuleStatementCompletion, ScopeAttributeCompletion, TraitsCompletion,
};
use crate::scan::{ContextScan, EditorState, LastParsedObject};

/// Typed fragment that short-circuits straight to property attributes.
const PROPERTY_TRIGGER: &str = "@";

/// Classify the caret's syntactic context into a completion provider, or
/// `None` when completion makes no sense here.
pub fn classify(
    editor: &EditorState<'_>,
    typed_fragment: &str,
    scan: &dyn ContextScan,
) -> Option<CompletionProvider> {
    if typed_fragment == PROPERTY_TRIGGER {
        debug!("property-attribute trigger");
        return Some(CompletionProvider::PropertyAttribute);
    }

    let (located_block, statement) = search_block_at(editor.tree, editor.caret);
    let located_block = located_block?;

    let outcome = scan.find_caret_context(
        editor.source_text,
        located_block,
        editor.caret_offset,
        editor.caret,
    );
    // Adopt the scan's narrower block only when it lies on the located
    // block's scope chain.
    let block = match outcome.parsed_block {
        Some(b) if have_same_ancestors(&editor.tree.decls, b, located_block) => b,
        _ => located_block,
    };

    if let Some(tracker) = &outcome.tracker {
        if let LastParsedObject::MemberAccess(access) = &tracker.last_parsed_object {
            debug!(expr = access.0, "member access context");
            return Some(CompletionProvider::Member(MemberCompletion {
                access: *access,
                block,
                statement,
            }));
        }

        if tracker.expecting_identifier {
            match &tracker.last_parsed_object {
                LastParsedObject::Attribute(attribute) => {
                    return Some(CompletionProvider::Attribute(AttributeCompletion {
                        seed: Some(attribute.clone()),
                        from_pragma: false,
                    }));
                }
                LastParsedObject::Pragma(attribute) => {
                    return Some(CompletionProvider::Attribute(AttributeCompletion {
                        seed: Some(attribute.clone()),
                        from_pragma: true,
                    }));
                }
                LastParsedObject::ScopeGuard(statement) => {
                    return Some(CompletionProvider::ScopeAttribute(
                        ScopeAttributeCompletion {
                            statement: *statement,
                        },
                    ));
                }
                LastParsedObject::Traits(expr) => {
                    return Some(CompletionProvider::Traits(TraitsCompletion { expr: *expr }));
                }
                LastParsedObject::Import(statement)
                | LastParsedObject::ImportBinding(statement) => {
                    return Some(CompletionProvider::Import(ImportCompletion {
                        statement: *statement,
                    }));
                }
                LastParsedObject::ModuleStatement(statement) => {
                    return Some(CompletionProvider::ModuleStatement(
                        ModuleStatementCompletion {
                            statement: *statement,
                        },
                    ));
                }
                LastParsedObject::None | LastParsedObject::MemberAccess(_) => {}
            }
        }
    }

    // Opening a call parenthesis is never itself a trigger.
    if typed_fragment == "(" {
        return None;
    }

    debug!(block = block.0, "generic context");
    Some(CompletionProvider::Context(ContextCompletion {
        block,
        statement,
        tracker: outcome.tracker,
        fragment: typed_fragment.to_string(),
    }))
}
