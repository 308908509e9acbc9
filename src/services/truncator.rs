use tracing::debug;

use crate::DEFAULT_MAX_CHARS;
use crate::models::config::{TruncateConfig, TruncateMode};
use crate::services::detect::looks_like_html;
use crate::services::markup::MarkupTruncator;
use crate::services::plain::PlainTruncator;
use crate::services::settings::TruncateSettings;
use crate::traits::engine::TruncateEngine;

/// Configure-once, call-many truncation entry point. Holds the three dots
/// markers and the optional forced mode, resolves the mode per call and
/// dispatches to the matching engine.
#[derive(Debug, Clone, Default)]
pub struct Truncator {
    config: TruncateConfig,
}

impl Truncator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TruncateConfig) -> Self {
        Self { config }
    }

    pub fn from_settings(settings: &TruncateSettings) -> Self {
        Self {
            config: settings.to_config(),
        }
    }

    /// Set the marker appended at the cut point, separately for html and
    /// plain text mode.
    pub fn with_three_dots_text(mut self, three_dots: impl Into<String>, for_html: bool) -> Self {
        if for_html {
            self.config.three_dots_html = three_dots.into();
        } else {
            self.config.three_dots_text = three_dots.into();
        }
        self
    }

    /// Force a default mode used whenever the caller does not pass `is_html`.
    pub fn with_always_html_mode(mut self, always_html: bool) -> Self {
        self.config.always_html_mode = Some(always_html);
        self
    }

    pub fn config(&self) -> &TruncateConfig {
        &self.config
    }

    /// An explicit flag beats the configured default, which beats detection.
    pub fn resolve_mode(&self, text: &str, is_html: Option<bool>) -> TruncateMode {
        let html = is_html
            .or(self.config.always_html_mode)
            .unwrap_or_else(|| looks_like_html(text));
        if html { TruncateMode::Html } else { TruncateMode::Text }
    }

    pub fn truncate(&self, text: &str, max_chars: usize, is_html: Option<bool>) -> String {
        let mode = self.resolve_mode(text, is_html);
        let engine: &dyn TruncateEngine = match mode {
            TruncateMode::Html => &MarkupTruncator,
            TruncateMode::Text => &PlainTruncator,
        };
        debug!(%mode, max_chars, input_len = text.len(), "truncate: dispatch");
        engine.truncate(text, max_chars, self.config.three_dots_for(mode))
    }

    /// Truncate with the default budget of [`DEFAULT_MAX_CHARS`] text chars.
    pub fn truncate_default(&self, text: &str) -> String {
        self.truncate(text, DEFAULT_MAX_CHARS, None)
    }
}
