//! This module contains exit codes used by `ipsum`

/// Something went wrong that has no more specific code, such as failing to write output.
pub(crate) const UNKNOWN_ERROR: i32 = 1;

/// Arguments could not be understood.
pub(crate) const ARGUMENT_ERROR: i32 = 2;

/// Cannot deserialize config.
pub(crate) const UNPARSEABLE_CONFIG: i32 = 10;

/// A configuration has invalid or conflicting settings.
pub(crate) const BAD_CONFIG: i32 = 11;

/// The desired log file path could not be opened.
pub(crate) const CANNOT_OPEN_LOG_FILE: i32 = 20;

/// The configured vocabulary files could not be read.
pub(crate) const CANNOT_READ_GENERATOR_DATA_FILE: i32 = 30;

/// Generation itself failed after the request was accepted.
pub(crate) const GENERATION_FAILED: i32 = 40;
