//! Reading and writing dictionary files in a legacy Japanese encoding.
//!
//! Microsoft IME exports its user dictionary as Shift_JIS (Windows code page
//! 932) text, and ATOK expects the same encoding with CRLF line endings on
//! import. Decoding and encoding are strict: a file that is not valid in the
//! configured encoding, or output that cannot be represented in it, is
//! reported instead of being silently replaced.

use std::{
    borrow::Cow,
    fs, io,
    path::{Path, PathBuf},
};

use encoding_rs::{Encoding, SHIFT_JIS};
use serde::{Deserialize, Serialize};

/// Line terminator used when writing converted output.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    pub const fn as_str(self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid {encoding} text", path.display())]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("{ch:?} cannot be written as {encoding}")]
    Encode { ch: char, encoding: &'static str },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Resolves an encoding label.
///
/// Accepts the WHATWG labels understood by `encoding_rs` plus `cp932`, the
/// name Windows tools use for Shift_JIS.
pub fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    let label = label.trim();
    if label.eq_ignore_ascii_case("cp932") {
        return Some(SHIFT_JIS);
    }
    Encoding::for_label(label.as_bytes())
}

/// Decodes `bytes` without replacement; `None` if any sequence is malformed.
pub fn decode_document(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(Cow::into_owned)
}

/// Reads and decodes a whole document.
pub fn read_document(path: &Path, encoding: &'static Encoding) -> Result<String, DocumentError> {
    let bytes = fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    decode_document(&bytes, encoding).ok_or_else(|| DocumentError::Decode {
        path: path.to_path_buf(),
        encoding: encoding.name(),
    })
}

fn apply_line_ending(text: &str, line_ending: LineEnding) -> Cow<'_, str> {
    match line_ending {
        LineEnding::Lf => Cow::Borrowed(text),
        LineEnding::Crlf => Cow::Owned(text.replace('\n', LineEnding::Crlf.as_str())),
    }
}

fn first_unmappable(text: &str, encoding: &'static Encoding) -> Option<char> {
    let mut buf = [0u8; 4];
    text.chars()
        .find(|ch| encoding.encode(ch.encode_utf8(&mut buf)).2)
}

/// Encodes LF-separated text with the given line ending.
pub fn encode_document(
    text: &str,
    encoding: &'static Encoding,
    line_ending: LineEnding,
) -> Result<Vec<u8>, DocumentError> {
    let text = apply_line_ending(text, line_ending);
    let (bytes, _, had_errors) = encoding.encode(&text);
    if had_errors {
        let ch = first_unmappable(&text, encoding).unwrap_or(char::REPLACEMENT_CHARACTER);
        return Err(DocumentError::Encode {
            ch,
            encoding: encoding.name(),
        });
    }
    Ok(bytes.into_owned())
}

/// Encodes and writes a document. Nothing is written if encoding fails.
pub fn write_document(
    path: &Path,
    text: &str,
    encoding: &'static Encoding,
    line_ending: LineEnding,
) -> Result<(), DocumentError> {
    let bytes = encode_document(text, encoding, line_ending)?;
    fs::write(path, bytes).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })
}
