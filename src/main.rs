use anyhow::Context;
use atok_convert::{app, cli::Cli, config, util::tracing::init_tracing};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => config::load_path(path),
        None => config::load(),
    }
    .context("failed to load configuration")?;

    init_tracing(config.log_level());

    app::run(&cli, config)
}
