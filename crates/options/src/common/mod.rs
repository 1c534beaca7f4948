//! Common building blocks shared by the option records.
//!
//! This module provides:
//! 1. **Bit Encoding:** The `PackedField` trait and mask helpers.
//! 2. **Enumerations:** The `packed_enum!` generator for fixed-width enums.
//! 3. **Error Handling:** The crate error type and result alias.

/// Error types for option records.
pub mod error;

/// Packed field encoding and mask helpers.
pub mod packed;

pub use error::{OptionsError, Result};
pub use packed::{PackedField, low_bits, range_mask};
