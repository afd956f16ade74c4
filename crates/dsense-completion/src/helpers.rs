//! Predicates over declaration nodes shared by the providers.

use dsense_ast::{ClassKind, DeclArena, DeclKind, DeclNode, MethodKind, NodeId};

use crate::candidate::CandidateKind;

/// Whether a declaration may appear in a general candidate list. Unnamed
/// declarations, constructors, destructors and unittest blocks are hidden.
pub fn can_item_be_shown_generally(node: &DeclNode) -> bool {
    if node.name.is_empty() {
        return false;
    }
    match &node.kind {
        DeclKind::Method { special, .. } => *special == MethodKind::Normal,
        _ => true,
    }
}

/// Whether `node` declares a nominal type (class-like or enum).
pub fn is_type_node(node: &DeclNode) -> bool {
    matches!(node.kind, DeclKind::ClassLike { .. } | DeclKind::Enum)
}

/// Whether `lower` is `higher` itself or one of its ancestors, i.e. the two
/// nodes share a scope chain.
pub fn have_same_ancestors(decls: &DeclArena, higher: NodeId, lower: NodeId) -> bool {
    higher == lower || decls.ancestors(higher).any(|a| a == lower)
}

/// The directory a module with the given dotted name would live under, given
/// the physical file implementing it. Accepts both separator styles.
pub fn module_path(physical_file: &str, module_name: &str) -> String {
    let parts: Vec<&str> = physical_file.split(['/', '\\']).collect();
    let strip = module_name.split('.').count();
    let keep = parts.len().saturating_sub(strip);
    parts[..keep].join("/")
}

/// The display tag for a declaration node.
pub fn candidate_kind(node: &DeclNode) -> CandidateKind {
    match &node.kind {
        DeclKind::Module { .. } => CandidateKind::Module,
        DeclKind::ClassLike { class_kind, .. } => match class_kind {
            ClassKind::Class => CandidateKind::Class,
            ClassKind::Interface => CandidateKind::Interface,
            ClassKind::Struct => CandidateKind::Struct,
            ClassKind::Union => CandidateKind::Union,
            ClassKind::Template => CandidateKind::Template,
        },
        DeclKind::Enum => CandidateKind::Enum,
        DeclKind::Method { .. } => CandidateKind::Method,
        DeclKind::Variable { .. } => CandidateKind::Variable,
    }
}

/// Extra display text for a declaration: the declared or return type.
pub fn candidate_detail(node: &DeclNode) -> Option<String> {
    match &node.kind {
        DeclKind::Method { return_type, .. } => return_type.as_ref().map(|t| t.to_string()),
        DeclKind::Variable { ty, .. } => ty.as_ref().map(|t| t.to_string()),
        _ => None,
    }
}
