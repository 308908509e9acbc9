use bon::Builder;
use serde::Deserialize;
use strum_macros::Display;

/// Marker appended after truncated html content, unless configured otherwise.
pub const DEFAULT_THREE_DOTS_HTML: &str = "&hellip;";

/// Marker appended after truncated plain text, unless configured otherwise.
pub const DEFAULT_THREE_DOTS_TEXT: &str = "...";

/// Truncation mode, resolved before the engines run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TruncateMode {
    Html,
    Text,
}

/// Explicit configuration value for truncation: the "three dots" markers per
/// mode and an optional forced default mode used when the caller does not
/// pass an explicit `is_html` flag.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Deserialize)]
#[serde(default)]
pub struct TruncateConfig {
    #[builder(into, default = DEFAULT_THREE_DOTS_HTML.to_string())]
    pub three_dots_html: String,
    #[builder(into, default = DEFAULT_THREE_DOTS_TEXT.to_string())]
    pub three_dots_text: String,
    pub always_html_mode: Option<bool>,
}

impl Default for TruncateConfig {
    fn default() -> Self {
        Self {
            three_dots_html: DEFAULT_THREE_DOTS_HTML.to_string(),
            three_dots_text: DEFAULT_THREE_DOTS_TEXT.to_string(),
            always_html_mode: None,
        }
    }
}

impl TruncateConfig {
    pub fn three_dots_for(&self, mode: TruncateMode) -> &str {
        match mode {
            TruncateMode::Html => &self.three_dots_html,
            TruncateMode::Text => &self.three_dots_text,
        }
    }
}
