//! Language dialect selection.
//!
//! This module holds the switches that select the accepted language dialect.
//! It provides:
//! 1. **Switches:** `DialectOptionSet`, the flat copyable record with its
//!    derived predicates.
//! 2. **Names:** `DialectOptions`, adding module and builtin names and JSON
//!    loading.
//! 3. **Enumerations:** The small enums stored in the record.
//! 4. **OpenCL:** Version queries over the OpenCL switches.

/// Dialect option enumerations.
pub mod kinds;

/// OpenCL language version queries.
pub mod opencl;

/// `DialectOptions` and JSON loading.
pub mod options;

/// `DialectOptionSet` and its predicates.
pub mod set;

pub use kinds::*;
pub use opencl::OpenClVersion;
pub use options::DialectOptions;
pub use set::{DialectField, DialectOptionSet};
