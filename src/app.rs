//! Command line front end: drives a [`Session`] through open, report, copy
//! and save according to the parsed [`Cli`].

use anyhow::{Context, bail};

use crate::{
    cli::Cli,
    clipboard::SystemClipboard,
    config::Config,
    document_io::{LineEnding, encoding_for_label},
    domain::ActionOutcome,
    session::Session,
};

/// Applies command line overrides on top of the loaded config.
pub fn effective_config(cli: &Cli, mut config: Config) -> anyhow::Result<Config> {
    if let Some(label) = cli.encoding.as_deref() {
        let encoding = encoding_for_label(label)
            .with_context(|| format!("unknown encoding '{label}'"))?;
        if encoding.output_encoding() != encoding {
            bail!("encoding '{label}' cannot be used for output");
        }
        config.set_encoding(label);
    }
    if cli.lf {
        config.set_line_ending(LineEnding::Lf);
    }
    Ok(config)
}

fn ensure_applied(session: &Session, outcome: ActionOutcome) -> anyhow::Result<()> {
    if !outcome.is_applied() {
        bail!("{}", session.status().message);
    }
    Ok(())
}

pub fn run(cli: &Cli, config: Config) -> anyhow::Result<()> {
    let mut session = Session::new(effective_config(cli, config)?);

    let outcome = session.open(&cli.input);
    ensure_applied(&session, outcome)?;
    eprintln!("{}", session.status().message);
    eprintln!("{}", session.status_line());

    let Some(result) = session.result() else {
        bail!("no conversion result");
    };

    if cli.diff && !result.diff_report.is_empty() {
        println!("{}", result.diff_report);
    }
    if cli.stdout {
        println!("{}", result.text);
    }

    if cli.copy {
        let outcome = session.copy_output(&mut SystemClipboard);
        ensure_applied(&session, outcome)?;
        eprintln!("{}", session.status().message);
    }

    if cli.writes_file() {
        let to = cli
            .output
            .clone()
            .unwrap_or_else(|| session.default_output_path());
        let outcome = session.save_output(&to);
        ensure_applied(&session, outcome)?;
        eprintln!("{}", session.status().message);
    }

    Ok(())
}
