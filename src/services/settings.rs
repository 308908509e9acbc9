use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::models::config::TruncateConfig;

/// Optional YAML-backed settings for hosts that configure truncation from an
/// application config file. Every field falls back to the built-in default.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct TruncateSettings {
    pub max_chars: Option<usize>,
    pub three_dots_html: Option<String>,
    pub three_dots_text: Option<String>,
    pub always_html_mode: Option<bool>,
}

impl TruncateSettings {
    pub fn to_config(&self) -> TruncateConfig {
        let mut config = TruncateConfig::default();
        if let Some(dots) = self.three_dots_html.clone() {
            config.three_dots_html = dots;
        }
        if let Some(dots) = self.three_dots_text.clone() {
            config.three_dots_text = dots;
        }
        config.always_html_mode = self.always_html_mode;
        config
    }
}

pub fn load_settings<P: AsRef<Path>>(
    path: P,
) -> Result<TruncateSettings, Box<dyn std::error::Error + Send + Sync>> {
    let content = fs::read_to_string(path)?;
    let settings: TruncateSettings = serde_yaml::from_str(&content)?;
    Ok(settings)
}
