//! Rewrites romaji typed with the Microsoft IME doubling convention (`kitte`)
//! into the ATOK spelling that marks gemination with a small tsu (`kiっte`).
//!
//! Everything in this crate is a pure function of its input. File encodings,
//! clipboard access and user interaction live in the `atok-convert` shell.

pub mod text;

pub use text::{
    classify::{Width, classify_width, is_target_consonant, to_fullwidth},
    document::{ConversionResult, LineChange, convert_document, split_lines},
    line::{convert_first_field, latin_runs},
    run::{SMALL_TSU, rewrite_run},
};
