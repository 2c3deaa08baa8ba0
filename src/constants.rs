/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// Used to locate the platform configuration folder that is searched for
/// the control file when it is not found at the given path.
pub const APPLICATION: &str = "copy_rename";

/// Default path for the control file
pub const DEFAULT_CONTROL_PATH: &str = "copy_rename_control.json";

/// Default name of the trace file written at teardown
pub const TRACE_FILE_DEFAULT: &str = "trace_log.txt";

/// Character separating directory segments inside a path template
pub const DEFAULT_DIRECTORY_SEPARATOR: &str = "\\";

/// Separator between a file stem and its extension
pub const EXTENSION_SEPARATOR: char = '.';

/// Help text for the control command-line option
pub const CONTROL_HELP: &str = "The location of the control file";

/// Help text for the source command-line option
pub const SOURCE_HELP: &str =
    "Source directory. Must be provided either here or in the control file";

/// Help text for the target command-line option
pub const TARGET_HELP: &str =
    "Target directory. Must be provided either here or in the control file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Plan the copy/rename phase without touching any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the trace file command-line option
pub const TRACE_FILE_HELP: &str = "File the trace log is written to when the run ends";
