//! Command-line interpretation.
//!
//! Flags are standalone tokens. Anything that is not one of them, including
//! unknown dash tokens, names a target directory. Tokens are normalized before
//! they reach clap so that every non-flag token lands in the positional list
//! in its original order.

use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;


/// Tokens that are parsed as flags; every other token is a target directory.
const FLAG_TOKENS: [&str; 8] = ["-?", "--help", "-d", "-f", "-r", "-R", "--json", "-e"];

/// Flag whose value is the token that follows it.
const FILTER_FLAG: &str = "-e";

#[derive(Parser, Debug)]
#[command(
    author,
    about = "List directories and files in colored, terminal-width columns",
    override_usage = "dircols [-?defrR] [dirs...]",
    disable_help_flag = true,
    args_override_self = true
)]
struct Cli {
    /// Show help and exit, ignoring all other options
    #[arg(short = '?', long = "help", action = ArgAction::Help)]
    help: Option<bool>,

    /// Show directories only
    #[arg(short = 'd')]
    dirs_only: bool,

    /// Show files only
    #[arg(short = 'f')]
    files_only: bool,

    /// Suffix filter applied to file names (case-insensitive); quotes stripped
    #[arg(short = 'e', value_name = "ext", allow_hyphen_values = true)]
    extension: Option<String>,

    /// Recurse into subdirectories
    #[arg(short = 'r')]
    recurse: bool,

    /// Additionally print a separate "Read-Only Files" section
    #[arg(short = 'R')]
    readonly: bool,

    /// Print scan results as JSON instead of columns
    #[arg(long)]
    json: bool,

    /// Target directories (default: current directory)
    #[arg(value_name = "dirs")]
    dirs: Vec<PathBuf>,
}

/// A fully interpreted command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub show_dirs: bool,
    pub show_files: bool,
    pub recurse: bool,
    pub show_readonly: bool,
    /// Case-insensitive suffix that file names must end with
    pub extension_filter: Option<String>,
    /// Directories to list, in command-line order; never empty
    pub target_dirs: Vec<PathBuf>,
    /// Emit JSON instead of the column grid
    pub json: bool,
}

/// Parses a full argument list (program name first) into a [`ScanRequest`].
///
/// # Errors
///
/// Returns a `clap::Error` when `-?`/`--help` is given (kind `DisplayHelp`)
/// or when `-e` has no following token. Callers typically hand it to
/// [`clap::Error::exit`].
pub fn parse_args<I, T>(args: I) -> Result<ScanRequest, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cli = Cli::try_parse_from(normalize_args(args))?;

    let (show_dirs, show_files) = if !cli.dirs_only && !cli.files_only {
        (true, true)
    } else {
        (cli.dirs_only, cli.files_only)
    };

    let target_dirs = if cli.dirs.is_empty() {
        vec![current_dir()]
    } else {
        cli.dirs
    };

    Ok(ScanRequest {
        show_dirs,
        show_files,
        recurse: cli.recurse,
        show_readonly: cli.readonly,
        extension_filter: cli.extension.as_deref().map(strip_quotes),
        target_dirs,
        json: cli.json,
    })
}

/// Reorders tokens so clap sees flags first and every other token after a
/// `--` separator.
///
/// The program name stays first and the token following `-e` stays attached
/// to it. Relative order within both groups is preserved.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut flags: Vec<OsString> = args.next().into_iter().collect();
    let mut targets = Vec::new();
    let mut missing_value = false;

    while let Some(token) = args.next() {
        let is_flag = token.to_str().is_some_and(|t| FLAG_TOKENS.contains(&t));
        if !is_flag {
            targets.push(token);
            continue;
        }

        let takes_value = token == FILTER_FLAG;
        flags.push(token);
        if takes_value {
            match args.next() {
                Some(value) => flags.push(value),
                None => missing_value = true,
            }
        }
    }

    // A dangling `-e` must stay the last token so clap reports it
    if !targets.is_empty() && !missing_value {
        flags.push(OsString::from("--"));
        flags.extend(targets);
    }
    flags
}

/// Removes quote characters wrapping a filter value.
pub fn strip_quotes(value: &str) -> String {
    value.trim_matches(|c| c == '"' || c == '\'').to_string()
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
