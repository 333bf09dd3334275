use crate::{clipboard::ClipboardError, document_io::DocumentError};

/// Result of one user action on a [`Session`](crate::session::Session).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    Skipped(SkipReason),
    Failed(Failure),
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    NoOutput,
    UnsupportedExtension,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::NoOutput => "no_output",
            SkipReason::UnsupportedExtension => "unsupported_extension",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    Read,
    Decode,
    Encode,
    Write,
    Clipboard,
}

impl Failure {
    pub fn user_text(self) -> &'static str {
        match self {
            Failure::Read => "Failed to read file",
            Failure::Decode => "Failed to decode file",
            Failure::Encode => "Failed to encode output",
            Failure::Write => "Failed to save output",
            Failure::Clipboard => "Failed to copy output",
        }
    }
}

impl From<&DocumentError> for Failure {
    fn from(err: &DocumentError) -> Self {
        match err {
            DocumentError::Read { .. } => Failure::Read,
            DocumentError::Decode { .. } => Failure::Decode,
            DocumentError::Encode { .. } => Failure::Encode,
            DocumentError::Write { .. } => Failure::Write,
        }
    }
}

impl From<&ClipboardError> for Failure {
    fn from(_: &ClipboardError) -> Self {
        Failure::Clipboard
    }
}
