use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "atok-convert")]
#[command(
    about = "Rewrite Microsoft IME romaji gemination (kitte) as ATOK small tsu (kiっte)",
    long_about = None
)]
pub struct Cli {
    /// Dictionary export to convert (.txt or .tsv)
    pub input: PathBuf,

    /// Where to save the converted dictionary [default: <input>_ATOK.txt]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Copy the converted text to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Print the list of changed lines
    #[arg(long)]
    pub diff: bool,

    /// Print the converted text instead of saving it
    #[arg(long)]
    pub stdout: bool,

    /// Convert and report without writing any file
    #[arg(long, conflicts_with = "output")]
    pub dry_run: bool,

    /// Encoding label for input and output, overriding the config (e.g. cp932, utf-8)
    #[arg(long)]
    pub encoding: Option<String>,

    /// Write LF line endings instead of the configured ones
    #[arg(long)]
    pub lf: bool,

    /// Use this config file instead of the platform default
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Whether the run ends by writing a file.
    pub fn writes_file(&self) -> bool {
        self.output.is_some() || !(self.stdout || self.dry_run)
    }
}
