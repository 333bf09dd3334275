use std::fmt::Write as _;

use tracing::level_filters::LevelFilter;

use crate::{config::raw_config::RawConfig, document_io::encoding_for_label};

/// Collects every problem in `raw` into one user-facing message.
pub fn find_config_problems(raw: &RawConfig) -> Option<String> {
    let mut problems: Vec<String> = Vec::new();

    match encoding_for_label(&raw.encoding) {
        None => problems.push(format!("unknown encoding '{}'", raw.encoding)),
        Some(enc) if enc.output_encoding() != enc => problems.push(format!(
            "encoding '{}' cannot be used for output",
            raw.encoding
        )),
        Some(_) => {}
    }

    if raw.output_suffix.trim().is_empty() {
        problems.push("output_suffix must not be empty".to_string());
    }

    if raw.fallback_output_name.trim().is_empty() {
        problems.push("fallback_output_name must not be empty".to_string());
    }

    if raw.allowed_extensions.is_empty() {
        problems.push("allowed_extensions must list at least one extension".to_string());
    }
    for ext in &raw.allowed_extensions {
        if ext.is_empty() || ext.contains('.') {
            problems.push(format!(
                "allowed extension '{ext}' must be a bare extension like 'txt'"
            ));
        }
    }

    if raw.log_level.parse::<LevelFilter>().is_err() {
        problems.push(format!("unknown log level '{}'", raw.log_level));
    }

    if problems.is_empty() {
        return None;
    }

    let mut error = String::from("Invalid configuration:\n\n");
    for problem in &problems {
        // `String` implements `fmt::Write` infallibly.
        let _ = writeln!(error, "• {problem}");
    }
    Some(error)
}

impl RawConfig {
    pub fn validate(&self) -> Result<(), String> {
        match find_config_problems(self) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
