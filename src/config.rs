mod config_validator;
pub mod constants;
pub mod raw_config;

use std::{
    io,
    path::{Path, PathBuf},
};

use encoding_rs::{Encoding, SHIFT_JIS};
pub use raw_config::RawConfig;
use serde::{Deserialize, Deserializer, Serialize};

use crate::document_io::{LineEnding, encoding_for_label};

const APP_NAME: &str = "atok-convert";
const CONFIG_NAME: &str = "config";

/// User settings for the conversion shell.
///
/// The engine itself has no settings; everything here concerns file
/// encodings, output naming and logging.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub(crate) encoding: String,
    pub(crate) line_ending: LineEnding,
    pub(crate) output_suffix: String,
    pub(crate) fallback_output_name: String,
    pub(crate) allowed_extensions: Vec<String>,
    pub(crate) log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let raw = RawConfig::default();
        Self {
            encoding: raw.encoding,
            line_ending: raw.line_ending,
            output_suffix: raw.output_suffix,
            fallback_output_name: raw.fallback_output_name,
            allowed_extensions: raw.allowed_extensions,
            log_level: raw.log_level,
        }
    }
}

/// Platform default location, e.g. `~/.config/atok-convert/config.toml`.
pub fn config_path() -> io::Result<PathBuf> {
    confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(confy_err)
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    let Some(dir) = path.parent() else {
        return Ok(());
    };
    std::fs::create_dir_all(dir)
}

fn confy_err(e: confy::ConfyError) -> io::Error {
    io::Error::other(e)
}

pub fn load() -> io::Result<Config> {
    load_path(&config_path()?)
}

/// Loads the config at `path`, writing the defaults there if it does not exist.
pub fn load_path(path: &Path) -> io::Result<Config> {
    ensure_parent_dir(path)?;
    confy::load_path(path).map_err(confy_err)
}

/// Validates and stores `cfg`. An invalid config is rejected with
/// `ErrorKind::InvalidInput` and nothing is written.
pub fn store_path(path: &Path, cfg: &Config) -> io::Result<()> {
    RawConfig::from(cfg.clone())
        .validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    ensure_parent_dir(path)?;
    confy::store_path(path, cfg).map_err(confy_err)
}

impl TryFrom<RawConfig> for Config {
    type Error = String;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        raw.validate()?;

        Ok(Self {
            encoding: raw.encoding,
            line_ending: raw.line_ending,
            output_suffix: raw.output_suffix,
            fallback_output_name: raw.fallback_output_name,
            allowed_extensions: raw.allowed_extensions,
            log_level: raw.log_level,
        })
    }
}

impl From<Config> for RawConfig {
    fn from(cfg: Config) -> Self {
        Self {
            encoding: cfg.encoding,
            line_ending: cfg.line_ending,
            output_suffix: cfg.output_suffix,
            fallback_output_name: cfg.fallback_output_name,
            allowed_extensions: cfg.allowed_extensions,
            log_level: cfg.log_level,
        }
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawConfig::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl Config {
    /// Encoding used for both reading input and writing output.
    pub fn encoding(&self) -> &'static Encoding {
        encoding_for_label(&self.encoding).unwrap_or(SHIFT_JIS)
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn output_suffix(&self) -> &str {
        &self.output_suffix
    }

    pub fn fallback_output_name(&self) -> &str {
        &self.fallback_output_name
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Case-insensitive check against `allowed_extensions`.
    pub fn accepts_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    }

    pub fn set_encoding(&mut self, label: &str) {
        self.encoding = label.to_string();
    }

    pub fn set_line_ending(&mut self, value: LineEnding) {
        self.line_ending = value;
    }
}
