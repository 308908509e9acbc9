use tracing::debug;

use crate::models::segment::Segment;
use crate::services::boundary::{
    cut_with_three_dots, last_space_char_pos, normalize_text_run, trim_trailing_punctuation,
};
use crate::traits::engine::TruncateEngine;

/// Truncates mixed text/markup content. Tags are opaque: never counted
/// toward the budget, never split, and either emitted verbatim or dropped
/// whole.
pub struct MarkupTruncator;

impl TruncateEngine for MarkupTruncator {
    fn name(&self) -> &str {
        "markup"
    }

    fn truncate(&self, input: &str, max_chars: usize, three_dots: &str) -> String {
        truncate_html(input, max_chars, three_dots)
    }
}

/// Split `html` into alternating text and tag runs, stopping early once the
/// running total of text chars reaches `max_chars`. Returns the segments and
/// that total. Scanning uses byte offsets (`<` and `>` are ASCII) while all
/// counting is in chars. A tail emitted when no further `<` exists, or when
/// a `<` has no closing `>`, does not add to the total, so an untagged or
/// unterminated tail never triggers truncation by itself.
pub fn segment_markup(html: &str, max_chars: usize) -> (Vec<Segment>, usize) {
    let mut segments: Vec<Segment> = Vec::new();
    let mut chars_count = 0usize;
    let mut index = 0usize;
    loop {
        let Some(open_rel) = html[index..].find('<') else {
            push_tail(&mut segments, &html[index..], chars_count);
            break;
        };
        let open = index + open_rel;
        // Unterminated tag: the rest, stray `<` included, is one text run.
        let Some(close_rel) = html[open + 1..].find('>') else {
            push_tail(&mut segments, &html[index..], chars_count);
            break;
        };
        let close = open + 1 + close_rel;
        let text = normalize_text_run(&html[index..open]);
        let text_len = text.chars().count();
        if text_len > 0 {
            segments.push(Segment::text(text, chars_count));
        }
        segments.push(Segment::tag(html[open..=close].to_string()));
        chars_count += text_len;
        if chars_count >= max_chars {
            break;
        }
        index = close + 1;
    }
    (segments, chars_count)
}

fn push_tail(segments: &mut Vec<Segment>, tail: &str, preceding_chars: usize) {
    let text = normalize_text_run(tail);
    if !text.is_empty() {
        segments.push(Segment::text(text, preceding_chars));
    }
}

/// Truncate `html` so that at most `max_chars` visible text characters
/// remain, appending `three_dots` at the cut point. Markup is preserved
/// untouched. When the measured total stays within the budget the input is
/// returned byte-for-byte.
///
/// The cut point is found by walking the segments backward: a text segment
/// whose kept part has no word boundary is given back whole and the walk
/// moves to an earlier segment. On pathological input with no spaces before
/// the limit this can drop every text segment and yield markup-only output
/// with no marker at all.
pub fn truncate_html(html: &str, max_chars: usize, three_dots: &str) -> String {
    let (mut segments, total_chars) = segment_markup(html, max_chars);
    if total_chars <= max_chars {
        return html.to_string();
    }
    debug!(
        total_chars,
        max_chars,
        segments = segments.len(),
        "markup: over limit, walking back for a cut point"
    );
    let mut i = segments.len();
    while i > 0 {
        i -= 1;
        if !segments[i].is_text {
            continue;
        }
        let budget = max_chars.saturating_sub(segments[i].preceding_chars);
        let truncated: String = segments[i].content.chars().take(budget).collect();
        let Some(last_space) = last_space_char_pos(&truncated) else {
            segments.remove(i);
            continue;
        };
        let trimmed = trim_trailing_punctuation(&truncated);
        if trimmed.is_empty() {
            segments.remove(i);
            continue;
        }
        segments[i].content = cut_with_three_dots(trimmed, last_space, three_dots);
        break;
    }
    segments.iter().map(|s| s.content.as_str()).collect()
}
