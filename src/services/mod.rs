pub mod boundary;
pub mod detect;
pub mod markup;
pub mod plain;
pub mod settings;
pub mod truncator;

pub use detect::looks_like_html;
pub use markup::MarkupTruncator;
pub use plain::PlainTruncator;
pub use settings::{TruncateSettings, load_settings};
pub use truncator::Truncator;
