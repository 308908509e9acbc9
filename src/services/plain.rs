use tracing::debug;

use crate::services::boundary::{
    collapse_whitespace, cut_with_three_dots, last_space_char_pos, trim_trailing_punctuation,
};
use crate::traits::engine::TruncateEngine;

/// Truncates flat text with no markup awareness.
pub struct PlainTruncator;

impl TruncateEngine for PlainTruncator {
    fn name(&self) -> &str {
        "plain"
    }

    fn truncate(&self, input: &str, max_chars: usize, three_dots: &str) -> String {
        truncate_text(input, max_chars, three_dots)
    }
}

/// Truncate `text` to at most `max_chars` visible characters at a word
/// boundary and append `three_dots`. Input within the limit comes back
/// verbatim, with no whitespace normalization. A prefix containing no space
/// is returned as-is: there is no boundary to cut at, so nothing is trimmed
/// and no marker is appended.
pub fn truncate_text(text: &str, max_chars: usize, three_dots: &str) -> String {
    let total_chars = text.chars().count();
    if total_chars <= max_chars {
        return text.to_string();
    }
    let collapsed = collapse_whitespace(text);
    let prefix: String = collapsed.chars().take(max_chars).collect();
    let Some(last_space) = last_space_char_pos(&prefix) else {
        debug!(total_chars, max_chars, "plain: no word boundary in prefix, returning bare prefix");
        return prefix;
    };
    let trimmed = trim_trailing_punctuation(&prefix);
    debug!(total_chars, max_chars, cut = last_space, "plain: cutting at last word boundary");
    cut_with_three_dots(trimmed, last_space, three_dots)
}
