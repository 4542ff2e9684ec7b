//! # extloc
//!
//! A CLI tool that counts lines and non-blank lines in a project and groups
//! them by file extension.
//!
//! ## Usage
//!
//! ```bash
//! # Count the current project
//! extloc .
//!
//! # Also skip vendored code
//! extloc . --exclude vendor
//!
//! # Count everything, including node_modules, build, .git, ...
//! extloc . --no-default-excludes
//! ```
//!
//! Files that are not valid UTF-8 are reported as `Error reading file: <path>`
//! and counted with zero lines. The report goes to stdout; logs go to stderr.

mod render;

use std::process::ExitCode;

use anyhow::bail;
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use extloclib::{count_project_with, CountOptions, ExclusionSet};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const USAGE: &str = "Usage: extloc <project_directory>";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("extloc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Count lines and non-blank lines per file extension")
        .arg(
            Arg::new("project_directory")
                .help("Project directory to scan")
                .required(true),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .value_name("SUBSTR")
                .help("Also skip files whose directory path contains SUBSTR (repeatable)"),
        )
        .arg(
            Arg::new("no-default-excludes")
                .long("no-default-excludes")
                .action(ArgAction::SetTrue)
                .help("Do not skip node_modules, build, dist, venv, .git, .idea, .vscode, __pycache__"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log progress to stderr (repeat for more detail)"),
        )
}

/// Build the exclusion set from matches
fn build_exclusions(matches: &ArgMatches) -> Result<ExclusionSet, anyhow::Error> {
    let mut exclusions = if matches.get_flag("no-default-excludes") {
        ExclusionSet::empty()
    } else {
        ExclusionSet::new()
    };

    if let Some(patterns) = matches.get_many::<String>("exclude") {
        for pattern in patterns {
            exclusions = exclusions.exclude(pattern)?;
        }
    }

    Ok(exclusions)
}

/// Install a stderr subscriber; verbosity 0 only shows warnings.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: could not install logger: {err}");
    }
}

/// Handler for the count
fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let Some(path) = matches.get_one::<String>("project_directory") else {
        bail!("missing project directory");
    };

    let options = CountOptions::new().exclusions(build_exclusions(matches)?);

    let result = count_project_with(path, &options, |file| {
        println!("{}", render::diagnostic_line(file));
    })?;

    println!("{}", render::render_summary(&result.summary));
    Ok(())
}

fn main() -> ExitCode {
    let matches = match build_command().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                return ExitCode::SUCCESS;
            }
            _ => {
                println!("{USAGE}");
                return ExitCode::FAILURE;
            }
        },
    };

    init_tracing(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
