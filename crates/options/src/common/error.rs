//! Error definitions for option records.
//!
//! Almost every operation on the packed records is total. The failures that
//! remain are:
//! 1. **Missing Overrides:** Reading a floating-point override that was never set.
//! 2. **Configuration:** Malformed JSON handed to the dialect option loader.
//! 3. **OpenCL Versions:** A C++ for OpenCL version with no OpenCL C
//!    counterpart.

use thiserror::Error;

use crate::fp::FpField;

/// Errors raised by option records.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// An override was read for a field whose override bit is clear.
    ///
    /// Callers are expected to test `has_<field>_override()` first, so the
    /// panicking getters treat this as a contract violation.
    #[error("no override recorded for floating-point option `{}`", .0.name())]
    MissingOverride(FpField),

    /// Dialect option JSON could not be decoded.
    #[error("invalid dialect option configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The C++ for OpenCL version has no compatible OpenCL C version.
    #[error("unknown C++ for OpenCL version {0}")]
    UnknownOpenClCppVersion(u32),
}

/// Result alias for option record operations.
pub type Result<T> = std::result::Result<T, OptionsError>;
