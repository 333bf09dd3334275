//! Explicit state of one conversion session.
//!
//! A `Session` remembers which file is open, its decoded text and the cached
//! conversion result, and carries the last status message shown to the user.
//! Every front end action (open, copy, save) goes through it and returns an
//! [`ActionOutcome`]; failures are recorded in the status instead of
//! propagating as panics.

use std::path::{Path, PathBuf};

use atok_convert_core::{ConversionResult, convert_document};

use crate::{
    clipboard::Clipboard,
    config::{Config, constants::OUTPUT_EXTENSION},
    document_io::{read_document, write_document},
    domain::{ActionOutcome, Failure, SkipReason},
};

/// Last message for the status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub ok: bool,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            message: "Ready".to_string(),
            ok: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    config: Config,
    current_file: Option<PathBuf>,
    input_text: String,
    result: Option<ConversionResult>,
    status: Status,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Converted text, if any. An empty conversion counts as no output.
    pub fn output_text(&self) -> Option<&str> {
        self.result
            .as_ref()
            .map(|r| r.text.as_str())
            .filter(|text| !text.is_empty())
    }

    fn set_status(&mut self, message: impl Into<String>, ok: bool) {
        self.status = Status {
            message: message.into(),
            ok,
        };
    }

    fn skip(&mut self, reason: SkipReason, message: impl Into<String>) -> ActionOutcome {
        let message = message.into();
        tracing::info!(reason = reason.as_str(), %message, "action skipped");
        self.set_status(message, false);
        ActionOutcome::Skipped(reason)
    }

    fn fail(&mut self, failure: Failure, err: &dyn std::error::Error) -> ActionOutcome {
        tracing::warn!(user_text = failure.user_text(), error = %err, "action failed");
        self.set_status(format!("{}: {err}", failure.user_text()), false);
        ActionOutcome::Failed(failure)
    }

    /// Reads `path`, converts it and caches the result.
    ///
    /// On failure the previously opened document stays in place.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn open(&mut self, path: &Path) -> ActionOutcome {
        if !self.config.accepts_extension(path) {
            return self.skip(
                SkipReason::UnsupportedExtension,
                format!("Unsupported file type: {}", path.display()),
            );
        }

        let encoding = self.config.encoding();
        let text = match read_document(path, encoding) {
            Ok(text) => text,
            Err(e) => return self.fail(Failure::from(&e), &e),
        };

        let result = convert_document(&text);
        tracing::info!(
            path = %path.display(),
            changed = result.changed_lines,
            total = result.total_lines,
            "document converted"
        );

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.input_text = text;
        self.result = Some(result);
        self.current_file = Some(path.to_path_buf());
        self.set_status(format!("Loaded {name} ({})", encoding.name()), true);
        ActionOutcome::Applied
    }

    /// Copies the converted text to `clipboard`.
    pub fn copy_output(&mut self, clipboard: &mut dyn Clipboard) -> ActionOutcome {
        let Some(text) = self.output_text() else {
            return self.skip(SkipReason::NoOutput, "No output to copy");
        };

        match clipboard.set_text(text) {
            Ok(()) => {
                self.set_status("Copied output to clipboard", true);
                ActionOutcome::Applied
            }
            Err(e) => self.fail(Failure::from(&e), &e),
        }
    }

    /// Writes the converted text to `to` using the configured encoding and
    /// line ending.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn save_output(&mut self, to: &Path) -> ActionOutcome {
        let Some(text) = self.output_text() else {
            return self.skip(SkipReason::NoOutput, "No output yet; open a file first");
        };

        match write_document(to, text, self.config.encoding(), self.config.line_ending()) {
            Ok(()) => {
                tracing::info!(path = %to.display(), "output saved");
                self.set_status(format!("Saved {}", to.display()), true);
                ActionOutcome::Applied
            }
            Err(e) => self.fail(Failure::from(&e), &e),
        }
    }

    /// File name proposed for saving: `<stem><suffix>.txt` for an open file,
    /// the configured fallback name otherwise.
    pub fn default_output_name(&self) -> String {
        match self.current_file.as_deref().and_then(Path::file_stem) {
            Some(stem) => format!(
                "{}{}.{OUTPUT_EXTENSION}",
                stem.to_string_lossy(),
                self.config.output_suffix()
            ),
            None => self.config.fallback_output_name().to_string(),
        }
    }

    /// [`Self::default_output_name`] placed next to the open file.
    pub fn default_output_path(&self) -> PathBuf {
        let name = self.default_output_name();
        match self.current_file.as_deref().and_then(Path::parent) {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    /// `changed lines: N / total lines: M` for the open document.
    pub fn status_line(&self) -> String {
        let (changed, total) = self
            .result
            .as_ref()
            .map_or((0, 0), |r| (r.changed_lines, r.total_lines));
        format!("changed lines: {changed} / total lines: {total}")
    }
}
