use std::{
    io::{self, Write},
    process::ExitCode,
    str::FromStr,
};

use anyhow::{bail, Result};
use argh::FromArgs;
use ocpi_vocab::{band_of, catalog, find_domain, parse_any, DomainInfo, IntoOcpiStatus, Vocabulary};
use tracing::{subscriber, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(FromArgs, Debug)]
#[argh(description = "OCPI 2.2.1 vocabulary utility")]
struct Args {
    #[argh(switch, short = 'd')]
    /// debug logging
    debug: bool,

    #[argh(switch)]
    /// trace logging
    trace: bool,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Command {
    List(ListCommand),
    Check(CheckCommand),
    Band(BandCommand),
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "list", description = "List vocabulary members")]
struct ListCommand {
    /// only list this vocabulary, e.g. `ConnectorType`
    #[argh(option)]
    domain: Option<String>,

    /// output format. text, json
    #[argh(option, default = "Format::Text")]
    format: Format,
}

#[derive(FromArgs, Debug)]
#[argh(
    subcommand,
    name = "check",
    description = "Check that a value belongs to a vocabulary"
)]
struct CheckCommand {
    /// vocabulary name, e.g. `ConnectorType`
    #[argh(positional)]
    domain: String,

    /// raw OCPI value
    #[argh(positional)]
    value: String,
}

#[derive(FromArgs, Debug)]
#[argh(
    subcommand,
    name = "band",
    description = "Show the band of a numeric status code"
)]
struct BandCommand {
    /// status code
    #[argh(positional)]
    code: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(format: &str) -> Result<Self, Self::Err> {
        match format {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format '{format}', expected text or json")),
        }
    }
}

fn list(command: &ListCommand, out: &mut impl Write) -> Result<()> {
    let domains: Vec<&DomainInfo> = match &command.domain {
        Some(domain) => vec![find_domain(domain)?],
        None => catalog().iter().collect(),
    };
    tracing::debug!("Listing {} vocabularies", domains.len());

    match command.format {
        Format::Json => {
            let listings: Vec<_> = domains.iter().map(|info| info.listing()).collect();
            serde_json::to_writer_pretty(&mut *out, &listings)?;
            writeln!(out)?;
        }
        Format::Text => {
            for info in domains {
                writeln!(out, "{}", info.name())?;
                for entry in info.entries() {
                    match entry.description {
                        Some(description) => {
                            writeln!(out, "    {:<40} {description}", entry.raw.to_string())?;
                        }
                        None => writeln!(out, "    {}", entry.raw)?,
                    }
                }
            }
        }
    }
    Ok(())
}

/// Returns whether the value belongs to the vocabulary.
fn check(command: &CheckCommand, out: &mut impl Write) -> Result<bool> {
    match parse_any(&command.domain, &command.value) {
        Ok(entry) => {
            writeln!(out, "{}::{} = {}", entry.domain, entry.name, entry.raw)?;
            if let Some(description) = entry.description {
                writeln!(out, "    {description}")?;
            }
            Ok(true)
        }
        Err(error) => {
            let status = error.ocpi_status();
            tracing::warn!("{error}");
            writeln!(out, "{error} (OCPI {} {})", status.code(), status.name())?;
            Ok(false)
        }
    }
}

fn band(command: &BandCommand, out: &mut impl Write) -> Result<bool> {
    match band_of(command.code) {
        Ok(band) => {
            let generic = band.generic();
            writeln!(
                out,
                "{}: {band} (generic code {} {})",
                command.code,
                generic.code(),
                generic.name()
            )?;
            Ok(true)
        }
        Err(error) => {
            writeln!(out, "{error}")?;
            Ok(false)
        }
    }
}

fn main() -> Result<ExitCode> {
    let args: Args = argh::from_env();

    let level = if args.trace {
        Level::TRACE
    } else if args.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();

    if let Err(error) = subscriber::set_global_default(subscriber) {
        bail!("Setting default subscriber failed: {error}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let success = match &args.command {
        Command::List(command) => list(command, &mut out).map(|()| true)?,
        Command::Check(command) => check(command, &mut out)?,
        Command::Band(command) => band(command, &mut out)?,
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
