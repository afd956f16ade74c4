//! The completion providers and their candidate enumeration.

use dsense_ast::{DeclKind, ExprId, ExprKind, NodeId, PostfixOp, ScopeGuardKind, StmtId, TokenKind};
use dsense_resolver::{ResolutionContext, ResolveResult, resolve};
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::candidate::{Candidate, CandidateKind, CompletionSink};
use crate::helpers::{can_item_be_shown_generally, candidate_detail, candidate_kind, module_path};
use crate::scan::{EditorState, TrackerState};

/// Declaration-level attribute keywords.
const ATTRIBUTE_KEYWORDS: &[&str] = &[
    "public", "private", "protected", "package", "static", "final", "override", "abstract",
    "const", "immutable", "shared", "inout", "pure", "nothrow", "deprecated", "extern", "align",
    "synchronized", "ref", "out", "scope", "lazy", "__gshared",
];

/// Recognized `pragma(...)` names.
const PRAGMA_KEYWORDS: &[&str] = &[
    "msg", "lib", "inline", "mangle", "startaddress", "crt_constructor", "crt_destructor",
];

/// `__traits(...)` keywords.
const TRAITS_KEYWORDS: &[&str] = &[
    "isAbstractClass", "isArithmetic", "isAssociativeArray", "isFinalClass", "isPOD", "isNested",
    "isFloating", "isIntegral", "isScalar", "isStaticArray", "isUnsigned", "isVirtualFunction",
    "isVirtualMethod", "isAbstractFunction", "isFinalFunction", "isStaticFunction", "isRef",
    "isOut", "isLazy", "hasMember", "identifier", "getAliasThis", "getAttributes", "getMember",
    "getOverloads", "getProtection", "getVirtualFunctions", "getVirtualMethods", "parent",
    "classInstanceSize", "allMembers", "derivedMembers", "isSame", "compiles",
];

/// `@`-property names, listed without the already-typed `@`.
const PROPERTY_KEYWORDS: &[&str] = &["property", "safe", "trusted", "system", "disable", "nogc"];

/// Statement/expression keywords offered by the generic context provider.
const STATEMENT_KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "foreach", "foreach_reverse", "do", "switch", "case", "default",
    "break", "continue", "return", "goto", "try", "catch", "finally", "throw", "scope", "with",
    "synchronized", "mixin", "assert", "new", "delete", "cast", "typeof", "typeid", "is",
    "import", "module", "class", "interface", "struct", "union", "enum", "template", "alias",
    "this", "super", "null", "true", "false",
];

/// Builtin type tokens offered alongside the statement keywords.
const BASIC_TYPE_TOKENS: &[TokenKind] = &[
    TokenKind::Bool,
    TokenKind::Char,
    TokenKind::Wchar,
    TokenKind::Dchar,
    TokenKind::Int,
    TokenKind::Uint,
    TokenKind::Long,
    TokenKind::Ulong,
    TokenKind::Float,
    TokenKind::Double,
    TokenKind::Real,
    TokenKind::Void,
];

static CONTEXT_KEYWORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut keywords = STATEMENT_KEYWORDS.to_vec();
    keywords.extend(BASIC_TYPE_TOKENS.iter().map(|t| t.as_str()));
    keywords
});

/// Static properties every resolved value answers some subset of.
const STATIC_PROPERTIES: &[&str] = &["init", "sizeof", "max", "min", "length"];

/// Member access: `base.` with the access expression from the tracker.
#[derive(Debug, Clone)]
pub struct MemberCompletion {
    pub access: ExprId,
    pub block: NodeId,
    pub statement: Option<StmtId>,
}

/// Attribute keywords; seeded from a pragma's attribute when the classifier
/// found one.
#[derive(Debug, Clone)]
pub struct AttributeCompletion {
    pub seed: Option<dsense_ast::Attribute>,
    pub from_pragma: bool,
}

#[derive(Debug, Clone)]
pub struct ScopeAttributeCompletion {
    pub statement: StmtId,
}

#[derive(Debug, Clone)]
pub struct TraitsCompletion {
    pub expr: ExprId,
}

#[derive(Debug, Clone)]
pub struct ImportCompletion {
    pub statement: StmtId,
}

#[derive(Debug, Clone)]
pub struct ModuleStatementCompletion {
    pub statement: StmtId,
}

/// General symbol/keyword completion at an arbitrary caret position.
#[derive(Debug, Clone)]
pub struct ContextCompletion {
    pub block: NodeId,
    pub statement: Option<StmtId>,
    pub tracker: Option<TrackerState>,
    pub fragment: String,
}

/// Exactly one provider variant is selected per request.
#[derive(Debug, Clone)]
pub enum CompletionProvider {
    Member(MemberCompletion),
    Attribute(AttributeCompletion),
    ScopeAttribute(ScopeAttributeCompletion),
    Traits(TraitsCompletion),
    Import(ImportCompletion),
    ModuleStatement(ModuleStatementCompletion),
    PropertyAttribute,
    Context(ContextCompletion),
}

impl CompletionProvider {
    /// Enumerate this provider's candidates into `sink`.
    pub fn build_completion_data(
        &self,
        editor: &EditorState<'_>,
        entered: &str,
        ctxt: &dyn ResolutionContext,
        sink: &mut dyn CompletionSink,
    ) {
        match self {
            CompletionProvider::Member(member) => member.build(ctxt, sink),
            CompletionProvider::Attribute(attr) => attr.build(sink),
            CompletionProvider::ScopeAttribute(_) => {
                for guard in [
                    ScopeGuardKind::Exit,
                    ScopeGuardKind::Success,
                    ScopeGuardKind::Failure,
                ] {
                    sink.push(Candidate::new(guard.as_str(), CandidateKind::Keyword));
                }
            }
            CompletionProvider::Traits(_) => {
                for keyword in TRAITS_KEYWORDS {
                    sink.push(Candidate::new(*keyword, CandidateKind::Keyword));
                }
            }
            CompletionProvider::Import(_) => build_import(entered, ctxt, sink),
            CompletionProvider::ModuleStatement(_) => build_module_statement(editor, ctxt, sink),
            CompletionProvider::PropertyAttribute => {
                for keyword in PROPERTY_KEYWORDS {
                    sink.push(Candidate::new(*keyword, CandidateKind::Property));
                }
            }
            CompletionProvider::Context(context) => context.build(ctxt, sink),
        }
    }
}

impl MemberCompletion {
    fn build(&self, ctxt: &dyn ResolutionContext, sink: &mut dyn CompletionSink) {
        let tree = ctxt.tree();
        // The tracker hands over the whole access expression; the candidates
        // come from the type of its base.
        let base = match tree.exprs.kind(self.access) {
            ExprKind::Postfix {
                base,
                op: PostfixOp::Access { .. },
            } => *base,
            _ => self.access,
        };

        let Some(results) = resolve(base, ctxt) else {
            debug!(expr = base.0, "member access base did not resolve");
            return;
        };

        for result in &results {
            match result {
                ResolveResult::Type(tr) => {
                    push_members(tr.node, ctxt, sink);
                    if let Some(bases) = ctxt.resolve_base_classes(tr, true) {
                        for b in &bases {
                            if let ResolveResult::Type(btr) = b {
                                push_members(btr.node, ctxt, sink);
                            }
                        }
                    }
                }
                _ => push_static_properties(result, ctxt, sink),
            }
        }
    }
}

fn push_members(node: NodeId, ctxt: &dyn ResolutionContext, sink: &mut dyn CompletionSink) {
    let decls = &ctxt.tree().decls;
    for &child in &decls.get(node).children {
        let decl = decls.get(child);
        if !can_item_be_shown_generally(decl) {
            continue;
        }
        trace!(name = %decl.name, "member candidate");
        sink.push(Candidate {
            label: decl.name.clone(),
            kind: candidate_kind(decl),
            detail: candidate_detail(decl),
        });
    }
}

fn push_static_properties(
    base: &ResolveResult,
    ctxt: &dyn ResolutionContext,
    sink: &mut dyn CompletionSink,
) {
    for property in STATIC_PROPERTIES {
        if ctxt.try_static_property(base, property).is_some() {
            sink.push(Candidate::new(*property, CandidateKind::Property));
        }
    }
}

impl AttributeCompletion {
    fn build(&self, sink: &mut dyn CompletionSink) {
        let keywords = if self.from_pragma {
            PRAGMA_KEYWORDS
        } else {
            ATTRIBUTE_KEYWORDS
        };
        let already = self.seed.as_ref().map(|a| a.name.as_str());
        for keyword in keywords {
            if Some(*keyword) == already {
                continue;
            }
            sink.push(Candidate::new(*keyword, CandidateKind::Keyword));
        }
    }
}

/// `import std.` lists the next name segment under the typed package path.
fn build_import(entered: &str, ctxt: &dyn ResolutionContext, sink: &mut dyn CompletionSink) {
    let prefix = entered.trim();
    let tree = ctxt.tree();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    for &module in tree.modules() {
        let DeclKind::Module { module_name } = &tree.decls.get(module).kind else {
            continue;
        };
        let Some(rest) = module_name.strip_prefix(prefix) else {
            continue;
        };
        let segment = rest.split('.').next().unwrap_or(rest);
        if segment.is_empty() || !seen.insert(segment.to_string()) {
            continue;
        }
        if segment == rest {
            sink.push(Candidate::new(segment, CandidateKind::Module));
        } else {
            sink.push(Candidate::new(segment, CandidateKind::Package));
        }
    }
}

/// `module ` suggests the registered module names, each with the directory
/// the buffer's file would have to live under for that name to fit.
fn build_module_statement(
    editor: &EditorState<'_>,
    ctxt: &dyn ResolutionContext,
    sink: &mut dyn CompletionSink,
) {
    let tree = ctxt.tree();
    for &module in tree.modules() {
        let DeclKind::Module { module_name } = &tree.decls.get(module).kind else {
            continue;
        };
        let detail = editor.file_name.map(|file| module_path(file, module_name));
        sink.push(Candidate {
            label: module_name.clone(),
            kind: CandidateKind::Module,
            detail,
        });
    }
}

impl ContextCompletion {
    fn build(&self, ctxt: &dyn ResolutionContext, sink: &mut dyn CompletionSink) {
        let tree = ctxt.tree();
        let decls = &tree.decls;
        let mut visited: FxHashSet<NodeId> = FxHashSet::default();

        // Visible symbols: the scope chain from the caret block upward.
        let mut block = Some(self.block);
        while let Some(node) = block {
            visited.insert(node);
            push_members(node, ctxt, sink);
            block = decls.get(node).parent;
        }

        // Top-level symbols of the other registered modules, plus the module
        // names themselves.
        for &module in tree.modules() {
            if !visited.insert(module) {
                continue;
            }
            let decl = decls.get(module);
            sink.push(Candidate::new(decl.name.clone(), CandidateKind::Module));
            push_members(module, ctxt, sink);
        }

        for keyword in CONTEXT_KEYWORDS.iter() {
            sink.push(Candidate::new(*keyword, CandidateKind::Keyword));
        }
    }
}
