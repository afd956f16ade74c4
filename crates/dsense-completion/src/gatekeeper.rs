//! The completion gatekeeper: should typing this character open (or keep
//! open) a completion session at all?

use dsense_common::{char_before, char_two_before, is_identifier_char};

use crate::scan::LexicalContext;

/// Decide whether completion may trigger at `caret_offset`.
///
/// `entered` is the first char of the typed fragment; `None` marks an
/// explicit invocation with nothing typed.
///
/// A caret at the start of the buffer always allows completion. A typed `.`
/// is rejected when it extends a `..` token (range/slice, not member
/// access). An identifier char (or explicit invocation) is rejected
/// mid-identifier: a session starts only at an identifier boundary.
/// Everything else defers to the lexical scanner, which suppresses
/// completion inside comments and string literals.
pub fn is_completion_allowed(
    source: &str,
    caret_offset: usize,
    entered: Option<char>,
    lexical: &dyn LexicalContext,
) -> bool {
    if caret_offset == 0 {
        return true;
    }

    if entered == Some('.') {
        if char_two_before(source, caret_offset) == Some('.') {
            return false;
        }
    } else if entered.is_none_or(is_identifier_char)
        && char_before(source, caret_offset).is_some_and(is_identifier_char)
    {
        return false;
    }

    !lexical.is_in_comment_or_string(source, caret_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlainText;
    impl LexicalContext for PlainText {
        fn is_in_comment_or_string(&self, _text: &str, _offset: usize) -> bool {
            false
        }
    }

    struct InsideComment;
    impl LexicalContext for InsideComment {
        fn is_in_comment_or_string(&self, _text: &str, _offset: usize) -> bool {
            true
        }
    }

    #[test]
    fn start_of_buffer_always_allows() {
        assert!(is_completion_allowed("", 0, Some('a'), &PlainText));
        assert!(is_completion_allowed("x", 0, None, &InsideComment));
    }

    #[test]
    fn member_access_dot_allows() {
        // "foo." with the dot just typed.
        assert!(is_completion_allowed("foo.", 4, Some('.'), &PlainText));
    }

    #[test]
    fn second_dot_of_a_range_token_rejects() {
        // "a[0.." — the typed dot extends "..", not a member access.
        assert!(!is_completion_allowed("a[0..", 5, Some('.'), &PlainText));
    }

    #[test]
    fn identifier_char_mid_identifier_rejects() {
        // caret right after "fo" while typing "foo".
        assert!(!is_completion_allowed("foo", 3, Some('o'), &PlainText));
        assert!(!is_completion_allowed("_x1", 3, Some('1'), &PlainText));
    }

    #[test]
    fn explicit_invocation_mid_identifier_rejects() {
        assert!(!is_completion_allowed("foo", 2, None, &PlainText));
    }

    #[test]
    fn identifier_char_at_boundary_allows() {
        // after a space: a fresh identifier can start.
        assert!(is_completion_allowed("if ", 3, Some('x'), &PlainText));
        assert!(is_completion_allowed("a + ", 4, None, &PlainText));
    }

    #[test]
    fn comment_or_string_region_rejects() {
        assert!(!is_completion_allowed("// fo", 5, Some(' '), &InsideComment));
        assert!(!is_completion_allowed("\"fo ", 4, Some(' '), &InsideComment));
    }

    #[test]
    fn unicode_identifier_chars_count() {
        assert!(!is_completion_allowed("aä", 3, Some('ä'), &PlainText));
    }
}
