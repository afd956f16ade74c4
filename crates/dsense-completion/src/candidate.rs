//! The candidate model handed to the editor frontend.

use serde::{Deserialize, Serialize};

/// Display tag of a completion candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    Class,
    Interface,
    Struct,
    Union,
    Template,
    Enum,
    Method,
    Variable,
    Module,
    Package,
    Keyword,
    Property,
}

/// One completion candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub label: String,
    pub kind: CandidateKind,
    /// Extra display text (declared type, return type, target directory).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Candidate {
    pub fn new(label: impl Into<String>, kind: CandidateKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
        }
    }

    pub fn with_detail(label: impl Into<String>, kind: CandidateKind, detail: String) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: Some(detail),
        }
    }
}

/// Where the providers push their candidates. Implemented by the editor
/// frontend; a plain `Vec` works for tests and batch consumers.
pub trait CompletionSink {
    fn push(&mut self, candidate: Candidate);
}

impl CompletionSink for Vec<Candidate> {
    fn push(&mut self, candidate: Candidate) {
        Vec::push(self, candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_skipped_when_absent() {
        let c = Candidate::new("writeln", CandidateKind::Method);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"label":"writeln","kind":"method"}"#);

        let c = Candidate::with_detail("x", CandidateKind::Variable, "int".into());
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"label":"x","kind":"variable","detail":"int"}"#);
    }
}
