//! Argument parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command as ClapCommand, builder::OsStringValueParser};
use engine::RunConfig;

/// Result of a successful parse.
pub(crate) enum ParseOutcome {
    /// Execute a run with the given configuration.
    Run(RunConfig),
    /// Help was requested.
    Help,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> ClapCommand {
    ClapCommand::new("zrewrite")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("length")
                .short('l')
                .long("length")
                .value_name("LENGTH")
                .help("Rewrite at most this number of bytes (forwarded to 'zfs rewrite').")
                .num_args(1)
                .action(ArgAction::Set)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("offset")
                .short('o')
                .long("offset")
                .value_name("OFFSET")
                .help("Start at this offset in bytes (forwarded to 'zfs rewrite').")
                .num_args(1)
                .action(ArgAction::Set)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Verbose; forwarded, and drives dry-run path printing.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("one-file-system")
                .short('x')
                .long("one-file-system")
                .help("Don't cross file system mount points when recursing.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("resume-from")
                .short('c')
                .long("resume-from")
                .value_name("FILE")
                .help("Full path of the file to resume processing from.")
                .num_args(1)
                .action(ArgAction::Set)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Traverse without rewriting; exit once the resume file is found.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .help("Display this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("targets")
                .value_name("PATH")
                .help("Files or directories to process.")
                .num_args(0..)
                .action(ArgAction::Append)
                .value_parser(OsStringValueParser::new()),
        )
}

/// Parses `arguments` into a [`ParseOutcome`].
///
/// The resume path is taken verbatim: no canonicalisation or normalisation is
/// applied, because the gate compares it textually against the paths the
/// walker emits.
pub(crate) fn parse_args<Args, Argv>(arguments: Args) -> Result<ParseOutcome, String>
where
    Args: IntoIterator<Item = Argv>,
    Argv: Into<OsString> + Clone,
{
    let mut matches = clap_command()
        .try_get_matches_from(arguments)
        .map_err(|error| error.to_string())?;

    if matches.get_flag("help") {
        return Ok(ParseOutcome::Help);
    }

    let targets: Vec<OsString> = matches
        .remove_many::<OsString>("targets")
        .map_or_else(Vec::new, |values| values.collect());
    if targets.is_empty() {
        return Err("missing file or directory target(s)".to_string());
    }

    let verbose = matches.get_flag("verbose");
    let mut passthrough: Vec<OsString> = Vec::new();
    if let Some(length) = matches.remove_one::<OsString>("length") {
        passthrough.push(OsString::from("-l"));
        passthrough.push(length);
    }
    if let Some(offset) = matches.remove_one::<OsString>("offset") {
        passthrough.push(OsString::from("-o"));
        passthrough.push(offset);
    }
    if verbose {
        passthrough.push(OsString::from("-v"));
    }

    let config = RunConfig::new(targets.into_iter().map(PathBuf::from))
        .resume_from(matches.remove_one::<OsString>("resume-from").map(PathBuf::from))
        .one_file_system(matches.get_flag("one-file-system"))
        .dry_run(matches.get_flag("dry-run"))
        .verbose(verbose)
        .passthrough(passthrough);

    Ok(ParseOutcome::Run(config))
}

/// Renders the static help snapshot.
pub(crate) fn render_help() -> &'static str {
    "\
Usage: zrewrite [OPTIONS] <file|directory>...

A restartable, breadth-first wrapper for 'zfs rewrite'. Mimics the traversal
order of standard ZFS recursion so a resume point recorded by an interrupted
run identifies the same position in a later one.

ZFS rewrite options (forwarded verbatim):
  -l, --length <LENGTH>     Rewrite at most this number of bytes.
  -o, --offset <OFFSET>     Start at this offset in bytes.
  -v, --verbose             Verbose. Print names of successfully rewritten
                            files; with -n, print each visited file.

Wrapper options:
  -x, --one-file-system     Don't cross file system mount points when
                            recursing.
  -c, --resume-from <FILE>  Full path of the file to resume processing FROM.
                            All files before it in traversal order are
                            skipped; the file itself is processed again.
  -n, --dry-run             Dry run. Traverses files, printing names if -v is
                            on, and exits successfully once the resume file
                            is found.
  -h, --help                Display this help message and exit.
"
}
