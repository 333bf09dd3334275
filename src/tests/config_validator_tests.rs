use std::path::Path;

use crate::config::{Config, RawConfig};

fn raw() -> RawConfig {
    RawConfig::default()
}

#[test]
fn defaults_are_valid() {
    assert!(raw().validate().is_ok());
    assert!(Config::try_from(raw()).is_ok());
}

#[test]
fn unknown_encoding_is_rejected() {
    let cfg = RawConfig {
        encoding: "ebcdic-jp".to_string(),
        ..raw()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.contains("unknown encoding 'ebcdic-jp'"));
}

#[test]
fn decode_only_encoding_is_rejected() {
    let cfg = RawConfig {
        encoding: "utf-16le".to_string(),
        ..raw()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.contains("cannot be used for output"));
}

#[test]
fn empty_names_are_rejected() {
    let cfg = RawConfig {
        output_suffix: " ".to_string(),
        fallback_output_name: String::new(),
        ..raw()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.contains("output_suffix must not be empty"));
    assert!(err.contains("fallback_output_name must not be empty"));
}

#[test]
fn extensions_must_be_bare() {
    let cfg = RawConfig {
        allowed_extensions: vec![".txt".to_string()],
        ..raw()
    };
    assert!(cfg.validate().unwrap_err().contains("'.txt'"));

    let cfg = RawConfig {
        allowed_extensions: Vec::new(),
        ..raw()
    };
    assert!(cfg.validate().unwrap_err().contains("at least one extension"));
}

#[test]
fn unknown_log_level_is_rejected() {
    let cfg = RawConfig {
        log_level: "loud".to_string(),
        ..raw()
    };
    assert!(cfg.validate().unwrap_err().contains("unknown log level 'loud'"));
}

#[test]
fn all_problems_are_listed_together() {
    let cfg = RawConfig {
        encoding: "nope".to_string(),
        log_level: "loud".to_string(),
        ..raw()
    };
    let err = cfg.validate().unwrap_err();
    assert_eq!(err.lines().filter(|l| l.starts_with('•')).count(), 2);
}

#[test]
fn extension_check_ignores_case() {
    let cfg = Config::default();
    assert!(cfg.accepts_extension(Path::new("dict.TXT")));
    assert!(cfg.accepts_extension(Path::new("dict.tsv")));
    assert!(!cfg.accepts_extension(Path::new("dict.csv")));
    assert!(!cfg.accepts_extension(Path::new("dict")));
}
