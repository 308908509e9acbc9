use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"<(.+)>").unwrap());

/// Syntactic heuristic, not a parser: true iff the input contains a `<`
/// followed by at least one character and then a `>` on the same line.
/// Literal angle brackets can misfire in both directions: `"a < b > c"` is
/// detected as markup, `"2 < 3"` is not.
pub fn looks_like_html(text: &str) -> bool {
    TAG_PAIR.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_tags() {
        assert!(looks_like_html("<p>Hi</p>"));
        assert!(looks_like_html("before <br/> after"));
    }

    #[test]
    fn test_plain_text_not_detected() {
        assert!(!looks_like_html("just words"));
        assert!(!looks_like_html("2 < 3"));
        assert!(!looks_like_html("<>"));
    }

    #[test]
    fn test_literal_brackets_false_positive() {
        // Accepted misfire of the heuristic.
        assert!(looks_like_html("a < b > c"));
    }
}
