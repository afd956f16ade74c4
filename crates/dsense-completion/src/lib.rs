//! Caret context classification and completion candidates for the dsense
//! source-intelligence engine.
//!
//! A completion request flows through three stages: the gatekeeper
//! ([`is_completion_allowed`]) decides whether the typed character should
//! trigger a session at all, the classifier ([`classify`]) maps the caret's
//! syntactic context to exactly one [`CompletionProvider`] variant (or none),
//! and the selected provider enumerates [`Candidate`]s into the frontend's
//! [`CompletionSink`]. Member-access completion drives the
//! [`dsense_resolver`] type resolver to type the access base.
//!
//! Lexing and the backward token scan stay external; their call contracts
//! are the [`LexicalContext`] and [`ContextScan`] traits.

pub mod candidate;
pub use candidate::{Candidate, CandidateKind, CompletionSink};

pub mod scan;
pub use scan::{ContextScan, EditorState, LastParsedObject, LexicalContext, ScanOutcome, TrackerState};

pub mod gatekeeper;
pub use gatekeeper::is_completion_allowed;

pub mod classifier;
pub use classifier::classify;

pub mod provider;
pub use provider::{
    AttributeCompletion, CompletionProvider, ContextCompletion, ImportCompletion,
    MemberCompletion, ModuleStatementCompletion, ScopeAttributeCompletion, TraitsCompletion,
};

pub mod helpers;
pub use helpers::{can_item_be_shown_generally, have_same_ancestors, is_type_node, module_path};

pub mod engine;
pub use engine::completion_candidates;

#[cfg(test)]
mod tests;
