/// Contract shared by the two truncation engines: a plain-text one and a
/// markup-aware one. `max_chars` is a budget of visible text characters
/// (code points, not bytes); `three_dots` is the marker appended at the cut
/// point when a word boundary is found.
pub trait TruncateEngine: Send + Sync {
    fn name(&self) -> &str;
    fn truncate(&self, input: &str, max_chars: usize, three_dots: &str) -> String;
}
