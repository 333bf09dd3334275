use std::fs;

use super::unique_temp_dir;
use crate::{
    config::{self, Config},
    document_io::LineEnding,
};

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = unique_temp_dir("config-default");
    let path = dir.join("nested").join("config.toml");

    let cfg = config::load_path(&path).unwrap();

    assert!(path.exists());
    assert_eq!(cfg.encoding().name(), "Shift_JIS");
    assert_eq!(cfg.line_ending(), LineEnding::Crlf);
    assert_eq!(cfg.output_suffix(), "_ATOK");
    assert_eq!(cfg.fallback_output_name(), "converted_ATOK変換.txt");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn config_save_and_load_roundtrip() {
    let dir = unique_temp_dir("config-roundtrip");
    let path = dir.join("config.toml");

    let mut cfg = Config::default();
    cfg.set_encoding("utf-8");
    cfg.set_line_ending(LineEnding::Lf);

    config::store_path(&path, &cfg).unwrap();
    let loaded = config::load_path(&path).unwrap();

    assert_eq!(loaded.encoding().name(), "UTF-8");
    assert_eq!(loaded.line_ending(), LineEnding::Lf);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn config_save_rejects_invalid_settings() {
    let dir = unique_temp_dir("config-invalid");
    let path = dir.join("config.toml");

    let mut cfg = Config::default();
    cfg.set_encoding("klingon");

    let err = config::store_path(&path, &cfg).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    assert!(err.to_string().contains("unknown encoding"));
    assert!(!path.exists());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn partial_config_file_uses_defaults_for_missing_keys() {
    let dir = unique_temp_dir("config-partial");
    let path = dir.join("config.toml");
    fs::write(&path, "line_ending = \"lf\"\n").unwrap();

    let cfg = config::load_path(&path).unwrap();

    assert_eq!(cfg.line_ending(), LineEnding::Lf);
    assert_eq!(cfg.output_suffix(), "_ATOK");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn invalid_config_file_fails_to_load() {
    let dir = unique_temp_dir("config-bad-file");
    let path = dir.join("config.toml");
    fs::write(&path, "output_suffix = \"\"\n").unwrap();

    assert!(config::load_path(&path).is_err());

    let _ = fs::remove_dir_all(dir);
}
