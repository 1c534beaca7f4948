//! Floating-point semantics configuration.
//!
//! This module implements the packed floating-point options attached to
//! expressions and statements. It provides:
//! 1. **Layout:** The declarative field table and the generated accessors.
//! 2. **Configuration:** `FpConfig`, the effective options at a point.
//! 3. **Overrides:** `FpConfigOverride`, the fields a scope changes
//!    relative to its parent, with merge and diff.
//! 4. **Enumerations:** Contraction, exception, rounding and evaluation modes.

/// `FpConfig` storage, resolution and derivation.
pub mod config;

/// Floating-point option enumerations.
pub mod kinds;

/// Field layout table and generated accessors.
pub mod layout;

/// Override masks, merging and encoding.
pub mod overrides;

pub use config::{FP_STORAGE_BITS, FpConfig, FpStorage};
pub use kinds::{FpEvalMethod, FpExceptionMode, FpModeKind, RoundingMode};
pub use layout::FpField;
pub use overrides::{FpConfigOverride, FpOverrideStorage, OVERRIDE_MASK_BITS};
