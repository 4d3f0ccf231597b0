//! Error types for the graft CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//!
//! Only genuinely fatal conditions become errors. A path key with no
//! counterpart in a template is an expected absent result and is handled as
//! `Option`/count control flow by the merge and index modules, and malformed
//! structure inside an otherwise well-formed document (duplicate sibling
//! identifiers, nodes without identifiers) is tolerated by documented
//! first-match and skip policies rather than raised.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for graft operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum GraftError {
    /// User provided invalid arguments or referenced something that does not exist.
    #[error("{0}")]
    UserError(String),

    /// The input document is not well-formed XML.
    ///
    /// Fatal to that load operation only; the message carries the underlying
    /// parser diagnostic. A tree is never partially populated on failure.
    #[error("failed to parse configuration document: {0}")]
    Parse(String),
}

impl GraftError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GraftError::UserError(_) => exit_codes::USER_ERROR,
            GraftError::Parse(_) => exit_codes::PARSE_FAILURE,
        }
    }
}

/// Result type alias for graft operations.
pub type Result<T> = std::result::Result<T, GraftError>;
