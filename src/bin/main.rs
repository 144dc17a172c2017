use std::ffi::OsString;
use std::io::{self, Write};

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const BIN_NAME: &str = env!("CARGO_BIN_NAME");

/// Decode a CGI-encoded argument and print the raw result.
#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// The encoded string. Never treated as a flag.
    #[arg(allow_hyphen_values = true)]
    argument: OsString,
}

/// Accepts exactly one argument after the program name, counted on the raw OS arguments so that
/// `--` is an ordinary argument.
fn parse_args<I>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();
    if args.len() != 2 {
        return Err(clap::Error::new(ErrorKind::WrongNumberOfValues));
    }

    let argument = args.swap_remove(1);
    Cli::try_parse_from(vec![OsString::from(BIN_NAME), OsString::from("--"), argument])
}

#[cfg(unix)]
fn argument_bytes(arg: &OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    arg.as_bytes().to_vec()
}

#[cfg(not(unix))]
fn argument_bytes(arg: &OsString) -> Vec<u8> {
    arg.to_string_lossy().into_owned().into_bytes()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "argument parsing failed");
            writeln!(out, "Call: {} <argument>", BIN_NAME).context("failed to write usage")?;
            return Ok(());
        }
    };

    writeln!(out, "Try to decode {}...", cli.argument.to_string_lossy())
        .context("failed to write to stdout")?;

    match cgi_decode::decode(&argument_bytes(&cli.argument)) {
        Ok(decoded) => {
            writeln!(out, "Decoded:").context("failed to write to stdout")?;
            out.write_all(&decoded)
                .context("failed to write decoded output")?;
        }
        Err(e) => {
            tracing::debug!(error = %e, "decode failed");
            eprintln!("Error: {}", e);
        }
    }

    out.flush().context("failed to flush stdout")?;

    Ok(())
}
