//! Stateless text predicates shared by the completion gatekeeper and the
//! lexical helpers.

/// Whether `c` can appear inside an identifier: any Unicode letter or digit,
/// or an underscore.
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// The char immediately preceding the byte offset `offset`, if any.
///
/// `offset` must sit on a char boundary of `text`.
pub fn char_before(text: &str, offset: usize) -> Option<char> {
    text.get(..offset).and_then(|s| s.chars().next_back())
}

/// The char two positions before the byte offset `offset`, if any.
pub fn char_two_before(text: &str, offset: usize) -> Option<char> {
    let mut rev = text.get(..offset)?.chars().rev();
    rev.next()?;
    rev.next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_chars() {
        assert!(is_identifier_char('a'));
        assert!(is_identifier_char('Z'));
        assert!(is_identifier_char('9'));
        assert!(is_identifier_char('_'));
        assert!(is_identifier_char('ä'));
        assert!(!is_identifier_char('.'));
        assert!(!is_identifier_char(' '));
        assert!(!is_identifier_char('('));
    }

    #[test]
    fn chars_before_offset() {
        let text = "foo..";
        assert_eq!(char_before(text, 5), Some('.'));
        assert_eq!(char_two_before(text, 5), Some('.'));
        assert_eq!(char_two_before(text, 1), None);
        assert_eq!(char_before(text, 0), None);
    }
}
