//! Shell around `atok-convert-core`: legacy-encoded file I/O, clipboard,
//! persisted settings and the session state driven by the command line.

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod document_io;
pub mod domain;
pub mod session;
pub mod util;

#[cfg(test)]
mod tests;
