//! Packed floating-point configuration.
//!
//! This module implements the floating-point semantics in effect at a point
//! of a translation unit. It provides:
//! 1. **Storage:** One `u32` partitioned into the fields declared in `layout`.
//! 2. **Resolution:** Rounding and exception modes resolved against
//!    float-environment access.
//! 3. **Derivation:** The toolchain default built from a `DialectOptionSet`.
//! 4. **Encoding:** Lossless conversion to and from an opaque integer.

use serde::{Deserialize, Serialize};

use crate::common::packed::low_bits;
use crate::dialect::DialectOptionSet;

use super::kinds::{FpExceptionMode, FpModeKind, RoundingMode};
use super::layout::FpField;
use super::overrides::FpConfigOverride;

/// Storage type of a packed `FpConfig`.
pub type FpStorage = u32;

/// Number of bits in `FpStorage`.
pub const FP_STORAGE_BITS: u32 = FpStorage::BITS;

/// Floating-point options packed into a single integer.
///
/// Two configurations are equal exactly when their storage integers are
/// equal, which makes the type cheap to compare, hash and deduplicate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "FpStorage", into = "FpStorage")]
pub struct FpConfig {
    value: FpStorage,
}

impl FpConfig {
    /// Creates the process default configuration.
    ///
    /// Contraction is off, the rounding mode is `Dynamic` and the exception
    /// mode is left unspecified; every flag is clear.
    pub fn new() -> Self {
        let mut config = Self { value: 0 };
        config.set_fp_contract_mode(FpModeKind::Off);
        config.set_const_rounding_mode(RoundingMode::Dynamic);
        config.set_specified_exception_mode(FpExceptionMode::Default);
        config
    }

    /// Derives the configuration selected by the dialect options.
    ///
    /// `FastHonorPragmas` contraction is stored as `Fast`. Float-environment
    /// access is forced on for the strict model (contraction `On`, dynamic
    /// rounding, strict exceptions), otherwise it is copied from the dialect.
    pub fn from_dialect(dialect: &DialectOptionSet) -> Self {
        let mut config = Self { value: 0 };

        let contract = match dialect.default_fp_contract_mode() {
            FpModeKind::FastHonorPragmas => FpModeKind::Fast,
            mode => mode,
        };
        config.set_fp_contract_mode(contract);
        config.set_rounding_math(dialect.rounding_math());
        config.set_const_rounding_mode(RoundingMode::Dynamic);
        config.set_specified_exception_mode(dialect.fp_exception_mode());
        config.set_allow_fp_reassociate(dialect.allow_fp_reassoc());
        config.set_no_honor_nans(dialect.no_honor_nans());
        config.set_no_honor_infs(dialect.no_honor_infs());
        config.set_no_signed_zero(dialect.no_signed_zero());
        config.set_allow_reciprocal(dialect.allow_recip());
        config.set_allow_approx_func(dialect.approx_func());
        config.set_fp_eval_method(dialect.fp_eval_method());

        if config.fp_contract_mode() == FpModeKind::On
            && config.rounding_mode() == RoundingMode::Dynamic
            && config.exception_mode() == FpExceptionMode::Strict
        {
            tracing::trace!("strict floating-point model, enabling float-env access");
            config.set_allow_fenv_access(true);
        } else {
            config.set_allow_fenv_access(dialect.allow_fenv_access());
        }
        config
    }

    /// Returns the configuration of a node that carries no local overrides.
    pub fn default_without_trailing_storage(dialect: &DialectOptionSet) -> Self {
        Self::from_dialect(dialect)
    }

    /// Reconstructs a configuration from its opaque integer.
    #[inline(always)]
    pub const fn from_opaque_int(value: FpStorage) -> Self {
        Self { value }
    }

    /// Returns the opaque integer encoding.
    #[inline(always)]
    pub const fn as_opaque_int(self) -> FpStorage {
        self.value
    }

    /// Returns the raw bits of `field`, shifted down to bit 0.
    #[inline(always)]
    pub const fn field_bits(self, field: FpField) -> u32 {
        (self.value & field.mask()) >> field.shift()
    }

    /// Replaces the bits of `field`; excess high bits of `bits` are dropped.
    #[inline(always)]
    pub const fn set_field_bits(&mut self, field: FpField, bits: u32) {
        let bits = (bits & low_bits(field.width())) << field.shift();
        self.value = (self.value & !field.mask()) | bits;
    }

    /// Returns the effective rounding mode.
    ///
    /// A `Dynamic` mode resolves to round-to-nearest-even when neither
    /// float-environment access nor rounding-math is enabled.
    pub fn rounding_mode(self) -> RoundingMode {
        let mode = self.const_rounding_mode();
        if mode == RoundingMode::Dynamic && !self.allow_fenv_access() && !self.rounding_math() {
            RoundingMode::NearestTiesToEven
        } else {
            mode
        }
    }

    /// Returns the effective exception mode.
    ///
    /// An unspecified mode is `Strict` with float-environment access and
    /// `Ignore` without it.
    pub fn exception_mode(self) -> FpExceptionMode {
        match self.specified_exception_mode() {
            FpExceptionMode::Default if self.allow_fenv_access() => FpExceptionMode::Strict,
            FpExceptionMode::Default => FpExceptionMode::Ignore,
            mode => mode,
        }
    }

    /// Returns true if code must respect the run-time floating-point
    /// environment.
    pub fn is_fp_constrained(self) -> bool {
        self.rounding_mode() != RoundingMode::NearestTiesToEven
            || self.exception_mode() != FpExceptionMode::Ignore
            || self.allow_fenv_access()
    }

    /// Returns true if operations may be fused within a statement.
    pub fn allow_fp_contract_within_statement(self) -> bool {
        self.fp_contract_mode() == FpModeKind::On
    }

    /// Enables fusing within a statement.
    pub fn set_allow_fp_contract_within_statement(&mut self) {
        self.set_fp_contract_mode(FpModeKind::On);
    }

    /// Returns true if operations may be fused across statements.
    pub fn allow_fp_contract_across_statement(self) -> bool {
        self.fp_contract_mode() == FpModeKind::Fast
    }

    /// Enables fusing across statements.
    pub fn set_allow_fp_contract_across_statement(&mut self) {
        self.set_fp_contract_mode(FpModeKind::Fast);
    }

    /// Returns the smallest override that turns `base` into `self`.
    ///
    /// The override marks exactly the fields on which the two disagree and
    /// carries the value of `self` for them. Equal configurations yield the
    /// empty override.
    pub fn get_changes_from(self, base: Self) -> FpConfigOverride {
        if self == base {
            return FpConfigOverride::new();
        }

        let mut changes = FpConfigOverride::new();
        for &field in FpField::ALL {
            let bits = self.field_bits(field);
            if bits != base.field_bits(field) {
                changes.set_field_override_bits(field, bits);
            }
        }

        // Bits outside every field only appear in values decoded from
        // arbitrary integers; carry them as-is so merging restores `self`.
        let stray = (self.value ^ base.value) & !FpField::USED_BITS;
        if stray != 0 {
            changes = FpConfigOverride::with_mask(
                Self::from_opaque_int(changes.options().value | (self.value & stray)),
                changes.override_mask() | stray,
            );
        }

        tracing::trace!(mask = changes.override_mask(), "computed fp option changes");
        changes
    }
}

impl Default for FpConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<FpStorage> for FpConfig {
    fn from(value: FpStorage) -> Self {
        Self::from_opaque_int(value)
    }
}

impl From<FpConfig> for FpStorage {
    fn from(config: FpConfig) -> Self {
        config.as_opaque_int()
    }
}
