//! xcolorpick entry point.
//!
//! Exit codes: 0 on success or help/version, 1 on usage errors,
//! 2 on runtime errors (no display, grab refused, sampling failed).

mod args;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;
use xcolorpick_core::{pick_color, OutputFormat, ScreenSession};
use xcolorpick_platform::{DisplaySession, GrabConfig};

use crate::args::Cli;

const USAGE_EXIT: u8 = 1;
const FATAL_EXIT: u8 = 2;

fn init_logging() {
    // Logs go to stderr: stdout carries only the color.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_exit(&err),
    };
    let format = cli.output_format();
    debug!(format = format.name(), "parsed arguments");

    let result = DisplaySession::open(GrabConfig::default())
        .map_err(anyhow::Error::from)
        .and_then(|session| pick_and_print(session, &format, &mut io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "pick failed");
            eprintln!("{}: error: {err:#}", program_name());
            ExitCode::from(FATAL_EXIT)
        }
    }
}

/// Pick one color from `session`, close it, then write the formatted line.
///
/// The session is closed before anything is written, on success and failure.
fn pick_and_print<S, W>(mut session: S, format: &OutputFormat, out: &mut W) -> anyhow::Result<()>
where
    S: ScreenSession,
    S::Error: std::error::Error + Send + Sync + 'static,
    W: Write,
{
    let pick = pick_color(&mut session)?;
    drop(session);

    format
        .write_line(out, &pick.color)
        .context("cannot write to standard output")
}

/// Report a clap outcome and pick the exit code.
///
/// Help goes to stderr, the version to stdout; everything else is a usage
/// error followed by the full help text.
fn usage_exit(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            eprint!("{}", err.render());
            ExitCode::SUCCESS
        }
        ErrorKind::DisplayVersion => {
            print!("{}", err.render());
            ExitCode::SUCCESS
        }
        _ => {
            eprint!("{}", err.render());
            eprintln!();
            eprint!("{}", Cli::command().render_help());
            ExitCode::from(USAGE_EXIT)
        }
    }
}

/// File name of `argv[0]`, for error messages.
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "xcolorpick".to_string())
}
