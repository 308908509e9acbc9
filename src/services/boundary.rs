use once_cell::sync::Lazy;
use regex::Regex;

/// Punctuation and bracket characters stripped from the right edge before
/// the three dots marker, so a cut never yields `"word,..."`.
pub const TRAILING_PUNCTUATION: &[char] = &[
    ',', '.', ':', ';', '?', '!', '+', '"', '\'', '-', '–', '(', ')', '[', ']', '{', '}', '<',
    '>', '=', '$', '§', ' ',
];

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every whitespace run to a single space. Leading and trailing
/// runs collapse too; nothing is trimmed here.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Normalize a text run taken from markup input: `&nbsp;` entities become
/// plain spaces before collapsing, so they count as word boundaries.
pub fn normalize_text_run(text: &str) -> String {
    collapse_whitespace(&text.replace("&nbsp;", " "))
}

/// Char position (not byte offset) of the last ASCII space in `s`.
pub fn last_space_char_pos(s: &str) -> Option<usize> {
    s.chars()
        .enumerate()
        .filter(|(_, c)| *c == ' ')
        .map(|(i, _)| i)
        .last()
}

pub fn trim_trailing_punctuation(s: &str) -> &str {
    s.trim_end_matches(TRAILING_PUNCTUATION)
}

/// Keep the first `char_pos` chars of `s` and append the three dots marker.
/// A position past the end keeps the whole string.
pub fn cut_with_three_dots(s: &str, char_pos: usize, three_dots: &str) -> String {
    let mut out: String = s.chars().take(char_pos).collect();
    out.push_str(three_dots);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace_preserves_single_spaces() {
        assert_eq!(collapse_whitespace("a  b\t\nc d"), "a b c d");
        assert_eq!(collapse_whitespace(" a "), " a ");
    }

    #[test]
    fn test_normalize_text_run_replaces_nbsp() {
        assert_eq!(normalize_text_run("a&nbsp;&nbsp;b"), "a b");
    }

    #[test]
    fn test_last_space_char_pos_counts_chars() {
        assert_eq!(last_space_char_pos("Hello world"), Some(5));
        assert_eq!(last_space_char_pos("привет мир"), Some(6));
        assert_eq!(last_space_char_pos("nospace"), None);
        assert_eq!(last_space_char_pos(""), None);
    }

    #[test]
    fn test_trim_trailing_punctuation_set() {
        assert_eq!(trim_trailing_punctuation("word,.: "), "word");
        assert_eq!(trim_trailing_punctuation("word–§$"), "word");
        assert_eq!(trim_trailing_punctuation("([{<word>}])"), "([{<word");
        assert_eq!(trim_trailing_punctuation("- - - "), "");
    }

    #[test]
    fn test_cut_with_three_dots_past_end_keeps_all() {
        assert_eq!(cut_with_three_dots("Hello", 3, "..."), "Hel...");
        assert_eq!(cut_with_three_dots("Hello", 10, "..."), "Hello...");
    }
}
