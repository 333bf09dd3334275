use serde::Deserialize;

use super::constants::{
    DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_ENCODING, DEFAULT_FALLBACK_OUTPUT_NAME,
    DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_SUFFIX,
};
use crate::document_io::LineEnding;

/// Unvalidated configuration as it appears on disk.
///
/// Missing keys fall back to the defaults so that older config files keep
/// loading after new settings are added.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub encoding: String,
    pub line_ending: LineEnding,
    pub output_suffix: String,
    pub fallback_output_name: String,
    pub allowed_extensions: Vec<String>,
    pub log_level: String,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
            line_ending: LineEnding::Crlf,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            fallback_output_name: DEFAULT_FALLBACK_OUTPUT_NAME.to_string(),
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
