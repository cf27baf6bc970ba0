//! Mini lexer driver.
//!
//! Reads a source file, drains the lexer, prints the token/table/error
//! report and saves the same report to a file. Lexing itself lives in
//! `mini_lexer`; this crate only handles arguments, I/O and formatting.

pub mod report;

use std::path::{Path, PathBuf};
use std::sync::Once;

use mini_lexer::{DiagnosticConfig, LexOutput, Lexer};

/// Output file used when none is given on the command line.
pub const DEFAULT_OUTPUT: &str = "tokens_output.txt";

/// Errors from the driver itself (not lexical errors, which are data).
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing source file path")]
    MissingInput,
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
    #[error("option '{0}' expects a number")]
    MissingNumber(&'static str),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// `true` for mistakes in the command line itself.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CliError::MissingInput
                | CliError::UnknownFlag(_)
                | CliError::MissingNumber(_)
                | CliError::UnexpectedArgument(_)
        )
    }
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Lex(Options),
}

/// Parsed options for a lexing run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub input: PathBuf,
    pub output: PathBuf,
    pub diagnostics: DiagnosticConfig,
    /// Log lexer activity to stderr even without `RUST_LOG`.
    pub verbose: bool,
}

impl Command {
    /// Parse `[options] <source> [output]` (program name excluded).
    ///
    /// Options:
    /// - `--max-errors <n>`: error count that triggers the limit notice
    /// - `--stop-after <n>`: stop scanning once `n` errors are recorded
    /// - `--no-limit`: no threshold at all
    /// - `-v`, `--verbose`: debug logging for the lexer
    /// - `-h`, `--help`
    ///
    /// The last limit option wins. `--` ends option parsing, so a source
    /// file whose name starts with `-` can still be given.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut positional: Vec<&str> = Vec::new();
        let mut diagnostics = DiagnosticConfig::default();
        let mut verbose = false;

        let mut iter = args.iter().map(String::as_str);
        while let Some(arg) = iter.next() {
            match arg {
                "-h" | "--help" => return Ok(Command::Help),
                "-v" | "--verbose" => verbose = true,
                "--max-errors" => {
                    diagnostics = DiagnosticConfig {
                        error_limit: number("--max-errors", iter.next())?,
                        ..DiagnosticConfig::default()
                    };
                }
                "--stop-after" => {
                    let limit = number("--stop-after", iter.next())?;
                    diagnostics = DiagnosticConfig::halt_after(limit);
                }
                "--no-limit" => diagnostics = DiagnosticConfig::unlimited(),
                "--" => positional.extend(iter.by_ref()),
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(CliError::UnknownFlag(flag.to_owned()));
                }
                path => positional.push(path),
            }
        }

        let mut positional = positional.into_iter();
        let input = positional.next().ok_or(CliError::MissingInput)?;
        let output = positional.next().unwrap_or(DEFAULT_OUTPUT);
        if let Some(extra) = positional.next() {
            return Err(CliError::UnexpectedArgument(extra.to_owned()));
        }

        Ok(Command::Lex(Options {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            diagnostics,
            verbose,
        }))
    }
}

fn number(flag: &'static str, value: Option<&str>) -> Result<usize, CliError> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or(CliError::MissingNumber(flag))
}

/// Result of one driver run.
#[derive(Debug)]
pub struct Run {
    pub output: LexOutput,
    pub report: String,
}

/// Lex `options.input` and write the report to `options.output`.
pub fn run(options: &Options) -> Result<Run, CliError> {
    let source = read_source(&options.input)?;
    tracing::debug!(path = %options.input.display(), bytes = source.len(), "lexing");

    let output = LexOutput::from(Lexer::with_config(&source, options.diagnostics.clone()));
    let report = report::render(&output);

    std::fs::write(&options.output, &report).map_err(|source| CliError::Write {
        path: options.output.clone(),
        source,
    })?;
    Ok(Run { output, report })
}

fn read_source(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

static TRACING_INIT: Once = Once::new();

/// Filter used by `--verbose` when `RUST_LOG` is unset.
const VERBOSE_FILTER: &str = "warn,minic=debug,mini_lexer=debug";

/// Filter directives for the log subscriber, or `None` to install none.
///
/// `RUST_LOG` wins; otherwise `verbose` selects [`VERBOSE_FILTER`].
fn log_directives(rust_log: Option<String>, verbose: bool) -> Option<String> {
    rust_log.or_else(|| verbose.then(|| VERBOSE_FILTER.to_owned()))
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG=mini_lexer=trace` logs every token. Without `RUST_LOG`, a
/// subscriber is installed only when `verbose` is set. Safe to call more
/// than once.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = log_directives(std::env::var("RUST_LOG").ok(), verbose) else {
            return;
        };
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::new(directives))
            .init();
    });
}
