//! Exit code constants for the graft CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown key, missing file)
//! - 2: Parse failure (malformed input document)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown path key, or unreadable file.
pub const USER_ERROR: i32 = 1;

/// Parse failure: the input document is not well-formed XML.
pub const PARSE_FAILURE: i32 = 2;
