//! Language dialect options and packed floating-point configuration.
//!
//! This crate holds the configuration records a compiler front end attaches
//! to translation units, expressions and statements:
//! 1. **Dialect:** `DialectOptionSet`, a flat copyable record of dialect
//!    switches with derived predicates, and `DialectOptions`, adding names.
//! 2. **Floating Point:** `FpConfig`, floating-point semantics packed into a
//!    `u32` with a declaration-ordered, stable bit layout.
//! 3. **Overrides:** `FpConfigOverride`, the fields a scope changes relative
//!    to its parent, with lossless merge, diff and a `u64` wire encoding.
//!
//! A default `FpConfig` is derived once from the dialect; nested scopes then
//! record only their differences and re-apply them on demand.

/// Bit encoding helpers and error types.
pub mod common;
/// Dialect switches, enumerations and JSON loading.
pub mod dialect;
/// Packed floating-point configuration and overrides.
pub mod fp;

/// Crate error type; returned by JSON loading and fallible override reads.
pub use crate::common::{OptionsError, Result};
/// Dialect records; build with `DialectOptionSet::default()` or load JSON.
pub use crate::dialect::{DialectOptionSet, DialectOptions};
/// Floating-point configuration and overrides.
pub use crate::fp::{FpConfig, FpConfigOverride, FpField};
