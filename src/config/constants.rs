pub const DEFAULT_ENCODING: &str = "cp932";
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_ATOK";
pub const DEFAULT_FALLBACK_OUTPUT_NAME: &str = "converted_ATOK変換.txt";
pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 2] = ["txt", "tsv"];
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Extension of files written by the save action.
pub const OUTPUT_EXTENSION: &str = "txt";
