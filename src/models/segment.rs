/// A run produced by splitting mixed text/markup input: either a text run
/// (whitespace-collapsed) or an opaque tag run kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub is_text: bool,
    pub content: String,
    /// Text characters consumed by all text segments strictly before this one.
    pub preceding_chars: usize,
    /// Char length of `content` (code points, not bytes).
    pub len: usize,
}

impl Segment {
    pub fn text(content: String, preceding_chars: usize) -> Self {
        let len = content.chars().count();
        Self {
            is_text: true,
            content,
            preceding_chars,
            len,
        }
    }

    pub fn tag(content: String) -> Self {
        let len = content.chars().count();
        Self {
            is_text: false,
            content,
            preceding_chars: 0,
            len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_segment_counts_chars_not_bytes() {
        let seg = Segment::text("привет".to_string(), 4);
        assert!(seg.is_text);
        assert_eq!(seg.len, 6);
        assert_eq!(seg.preceding_chars, 4);
    }

    #[test]
    fn test_tag_segment_is_opaque() {
        let seg = Segment::tag("<a href=\"x\">".to_string());
        assert!(!seg.is_text);
        assert_eq!(seg.content, "<a href=\"x\">");
        assert_eq!(seg.preceding_chars, 0);
    }
}
