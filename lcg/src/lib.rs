//! Shared command-line plumbing for the `lcg` and `lcg-np` binaries.

pub mod prompt;
pub mod timing;

use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser};
use env_logger::Builder;
use lcgrandom::{generate, LcgError, OutputMode, SequenceLength};
use log::{debug, LevelFilter};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub const BANNER: &str = "lcg: ";
pub const STATUS: &str = "Generating pseudo numbers...";

#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
#[command(
    long_about = "Generates pseudo random numbers with a linear congruential generator.\n\n\
    With exactly two arguments, N is the count and SEED the initial value. With any other \
    number of arguments, prompts for the count and the seed. Entering 0 as the count quits."
)]
pub struct Args {
    /// Count and seed (32-bit signed); any other number of values prompts instead
    #[arg(value_name = "N SEED")]
    pub positionals: Vec<String>,

    /// Log generation details to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    /// Parse the process arguments under the given binary name, exiting on usage errors.
    pub fn parse_as(name: &'static str, about: &'static str) -> Self {
        let mut cmd = Args::command().name(name).bin_name(name).about(about);
        let matches = cmd.get_matches_mut();
        let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.format(&mut cmd).exit());
        if let Err(e) = args.request() {
            e.format(&mut cmd).exit();
        }
        args
    }

    /// The `(n, seed)` pair when exactly two positionals were given, `None` otherwise.
    pub fn request(&self) -> Result<Option<(i64, i32)>, clap::Error> {
        match self.positionals.as_slice() {
            [n, seed] => Ok(Some((
                parse_positional("N", n)?,
                parse_positional("SEED", seed)?,
            ))),
            _ => Ok(None),
        }
    }
}

fn parse_positional<T>(name: &str, value: &str) -> Result<T, clap::Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e| {
        clap::Error::raw(
            ErrorKind::ValueValidation,
            format!("invalid value '{}' for '<{}>': {}\n", value, name, e),
        )
    })
}

/// Errors that end a session.
#[derive(Debug)]
pub enum CliError {
    Usage(clap::Error),
    Io(io::Error),
    Generate(LcgError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CliError::Usage(e) => write!(f, "{}", e.to_string().trim_end()),
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Generate(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<clap::Error> for CliError {
    fn from(e: clap::Error) -> Self {
        CliError::Usage(e)
    }
}

impl From<LcgError> for CliError {
    fn from(e: LcgError) -> Self {
        CliError::Generate(e)
    }
}

pub fn init_logging(verbose: bool) {
    let mut builder = Builder::from_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

/// Run one session: take `(n, seed)` from the arguments or the prompts, then print the result.
///
/// Returns `Ok(())` without generating when the interactive session is ended early.
pub fn run_session<R: BufRead, W: Write>(
    args: &Args,
    mode: OutputMode,
    input: &mut R,
    out: &mut W,
) -> Result<(), CliError> {
    write!(out, "{}", BANNER)?;

    let (n, seed) = match args.request()? {
        Some((n, seed)) => {
            SequenceLength::new(n)?;
            (n, seed)
        }
        None => {
            if !args.positionals.is_empty() {
                debug!(
                    "Got {} positional arguments instead of 2, prompting",
                    args.positionals.len()
                );
            }
            match prompt::read_request(input, out)? {
                Some(request) => request,
                None => {
                    debug!("Session ended without a request");
                    writeln!(out)?;
                    return Ok(());
                }
            }
        }
    };

    writeln!(out, "{}", STATUS)?;
    generate(n, seed, mode)?.write_to(out)?;
    out.flush()?;
    Ok(())
}

/// Entry point shared by the binaries.
pub fn main_with_mode(name: &'static str, about: &'static str, mode: OutputMode) {
    let args = Args::parse_as(name, about);
    init_logging(args.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_session(&args, mode, &mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
