//! Exit codes for the CLI

/// Success, with or without changelog entries
pub const SUCCESS: i32 = 0;

/// General error, including failure to write the output file
pub const ERROR: i32 = 1;

/// No log data was available (only reported with `--strict`)
pub const NO_DATA: i32 = 2;
