use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, command, crate_authors, crate_description, crate_name, crate_version};

use crate::config::CliOverrides;
use crate::constants::{
    CONTROL_HELP, DEFAULT_CONTROL_PATH, DRY_RUN_HELP, SOURCE_HELP, TARGET_HELP, TRACE_FILE_DEFAULT,
    TRACE_FILE_HELP, VERBOSE_HELP,
};
use crate::logging::LogLevel;
use crate::workflow::RunOptions;

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `control`: Path to the control file
/// - `source`: Source directory, overrides the control file
/// - `target`: Target directory, overrides the control file
/// - `dry`: Plan the copy/rename phase without touching any files
/// - `verbose`: Increase verbosity level
/// - `trace_file`: File the trace log is written to
pub fn build_command() -> Command {
    // define arg for reading from a specific control file
    let arg_control = Arg::new("control")
        .short('c')
        .long("control")
        .help(CONTROL_HELP)
        .default_value(DEFAULT_CONTROL_PATH);

    let arg_source = Arg::new("source")
        .short('s')
        .long("source")
        .help(SOURCE_HELP);

    let arg_target = Arg::new("target")
        .short('t')
        .long("target")
        .help(TARGET_HELP);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for trace file
    let arg_trace_file = Arg::new("trace_file")
        .short('l')
        .long("trace-file")
        .help(TRACE_FILE_HELP)
        .default_value(TRACE_FILE_DEFAULT);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_control)
        .arg(arg_source)
        .arg(arg_target)
        .arg(arg_dry)
        .arg(arg_verbose)
        .arg(arg_trace_file)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

pub fn get_trace_file(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("trace_file")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(TRACE_FILE_DEFAULT))
}

/// Collects the options of a run from the command-line arguments
pub fn get_run_options(matches: &ArgMatches) -> RunOptions {
    let control_file = matches
        .get_one::<String>("control")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTROL_PATH));

    RunOptions {
        control_file,
        overrides: CliOverrides {
            source_directory: matches.get_one::<String>("source").map(PathBuf::from),
            target_directory: matches.get_one::<String>("target").map(PathBuf::from),
        },
        dry_run: matches.get_flag("dry"),
    }
}
