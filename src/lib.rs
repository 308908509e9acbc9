pub mod models;
pub mod services;
pub mod traits;

pub use models::config::{
    DEFAULT_THREE_DOTS_HTML, DEFAULT_THREE_DOTS_TEXT, TruncateConfig, TruncateMode,
};
pub use models::segment::Segment;
pub use services::detect::looks_like_html;
pub use services::markup::{MarkupTruncator, truncate_html};
pub use services::plain::{PlainTruncator, truncate_text};
pub use services::settings::{TruncateSettings, load_settings};
pub use services::truncator::Truncator;
pub use traits::engine::TruncateEngine;

/// Default char budget when the caller does not pick one.
pub const DEFAULT_MAX_CHARS: usize = 200;

/// One-shot truncation with the default markers: `&hellip;` in html mode,
/// `...` in plain text mode. Passing `None` for `is_html` auto-detects
/// markup with [`looks_like_html`].
pub fn truncate(text: &str, max_chars: usize, is_html: Option<bool>) -> String {
    Truncator::new().truncate(text, max_chars, is_html)
}
