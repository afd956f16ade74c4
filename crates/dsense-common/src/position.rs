//! Line/column source locations.
//!
//! Locations are 1-based, column-within-line, matching the coordinates
//! editors report for a caret. Ordering is by line first, then column, so a
//! span containment check is a pair of comparisons.

use serde::{Deserialize, Serialize};

/// A 1-based (line, column) position in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CodeLocation {
    pub line: u32,
    pub column: u32,
}

impl CodeLocation {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A region of source text between two locations, inclusive on both ends.
///
/// A caret sitting exactly at `end` is considered inside, because completion
/// fires with the caret immediately after the last typed character of the
/// construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeSpan {
    pub start: CodeLocation,
    pub end: CodeLocation,
}

impl CodeSpan {
    pub const fn new(start: CodeLocation, end: CodeLocation) -> Self {
        Self { start, end }
    }

    pub const fn empty(at: CodeLocation) -> Self {
        Self { start: at, end: at }
    }

    /// Whether `loc` lies within this span (inclusive on both ends).
    pub fn contains(&self, loc: CodeLocation) -> bool {
        self.start <= loc && loc <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_ordering_is_line_major() {
        assert!(CodeLocation::new(1, 80) < CodeLocation::new(2, 1));
        assert!(CodeLocation::new(3, 4) < CodeLocation::new(3, 5));
    }

    #[test]
    fn span_containment() {
        let span = CodeSpan::new(CodeLocation::new(2, 1), CodeLocation::new(4, 10));
        assert!(span.contains(CodeLocation::new(3, 99)));
        assert!(span.contains(CodeLocation::new(2, 1)));
        assert!(span.contains(CodeLocation::new(4, 10)));
        assert!(!span.contains(CodeLocation::new(1, 5)));
        assert!(!span.contains(CodeLocation::new(4, 11)));
    }
}
