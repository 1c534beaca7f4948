//! Floating-point option overrides.
//!
//! Language constructs such as `#pragma float_control` usually change a few
//! floating-point options and leave the rest alone. An `FpConfigOverride`
//! records such a change as an `FpConfig` value plus a mask of equal width:
//! a set mask bit means the field owning that bit is specified here, a clear
//! bit means it is inherited from the base at merge time.
//!
//! Value bits outside the mask are always zero, so two overrides that leave
//! the same fields unspecified are bit-identical and can be used as lookup
//! keys.

use serde::{Deserialize, Serialize};

use crate::dialect::DialectOptionSet;

use super::config::{FP_STORAGE_BITS, FpConfig, FpStorage};
use super::kinds::FpModeKind;
use super::layout::FpField;

/// Storage type of an encoded `FpConfigOverride`.
///
/// Must hold twice the bits of `FpStorage`: values in the high half, the
/// mask in the low half.
pub type FpOverrideStorage = u64;

const _: () = assert!(
    FpOverrideStorage::BITS >= 2 * FP_STORAGE_BITS,
    "Too short type for FpConfigOverride"
);

/// Selects the mask half of an encoded override.
pub const OVERRIDE_MASK_BITS: FpOverrideStorage = (1 << FP_STORAGE_BITS) - 1;

/// The difference between a base `FpConfig` and a local one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "FpOverrideStorage", into = "FpOverrideStorage")]
pub struct FpConfigOverride {
    options: FpConfig,
    override_mask: FpStorage,
}

impl FpConfigOverride {
    /// Creates the identity override, which specifies nothing.
    pub const fn new() -> Self {
        Self {
            options: FpConfig::from_opaque_int(0),
            override_mask: 0,
        }
    }

    /// Creates an override that specifies every field of `options`.
    pub const fn full(options: FpConfig) -> Self {
        Self {
            options,
            override_mask: FpStorage::MAX,
        }
    }

    /// Creates a full override from the dialect default configuration.
    pub fn from_dialect(dialect: &DialectOptionSet) -> Self {
        Self::full(FpConfig::from_dialect(dialect))
    }

    /// Creates an override of the bits selected by `mask`.
    ///
    /// Bits of `options` outside `mask` are discarded.
    pub const fn with_mask(options: FpConfig, mask: FpStorage) -> Self {
        Self {
            options: FpConfig::from_opaque_int(options.as_opaque_int() & mask),
            override_mask: mask,
        }
    }

    /// Returns the stored values; fields without an override read as zero.
    #[inline(always)]
    pub const fn options(self) -> FpConfig {
        self.options
    }

    /// Returns the override mask.
    #[inline(always)]
    pub const fn override_mask(self) -> FpStorage {
        self.override_mask
    }

    /// Returns true if any field is overridden.
    ///
    /// Nodes without overrides need no trailing storage for them.
    #[inline(always)]
    pub const fn requires_trailing_storage(self) -> bool {
        self.override_mask != 0
    }

    /// Returns true if any bit of `field` is overridden.
    #[inline(always)]
    pub const fn has_field_override(self, field: FpField) -> bool {
        self.override_mask & field.mask() != 0
    }

    /// Overrides `field` with raw `bits`.
    pub const fn set_field_override_bits(&mut self, field: FpField, bits: u32) {
        self.options.set_field_bits(field, bits);
        self.override_mask |= field.mask();
    }

    /// Drops the override of `field`, zeroing its value bits.
    pub const fn clear_field_override(&mut self, field: FpField) {
        self.options.set_field_bits(field, 0);
        self.override_mask &= !field.mask();
    }

    /// Overrides contraction to `On`.
    pub fn set_allow_fp_contract_within_statement(&mut self) {
        self.set_fp_contract_mode_override(FpModeKind::On);
    }

    /// Overrides contraction to `Fast`.
    pub fn set_allow_fp_contract_across_statement(&mut self) {
        self.set_fp_contract_mode_override(FpModeKind::Fast);
    }

    /// Overrides contraction to `Off`.
    pub fn set_disallow_fp_contract(&mut self) {
        self.set_fp_contract_mode_override(FpModeKind::Off);
    }

    /// Switches precise floating-point semantics on or off.
    ///
    /// Precise mode clears the six fast-math flags and contracts within
    /// statements; disabling it sets them and contracts across statements.
    /// All seven fields are overridden together.
    pub fn set_fp_precise_enabled(&mut self, enabled: bool) {
        self.set_allow_fp_reassociate_override(!enabled);
        self.set_no_honor_nans_override(!enabled);
        self.set_no_honor_infs_override(!enabled);
        self.set_no_signed_zero_override(!enabled);
        self.set_allow_reciprocal_override(!enabled);
        self.set_allow_approx_func_override(!enabled);
        if enabled {
            self.set_allow_fp_contract_within_statement();
        } else {
            self.set_allow_fp_contract_across_statement();
        }
    }

    /// Merges the override onto `base`.
    ///
    /// Masked bits come from the override, all others from `base`.
    #[inline(always)]
    pub const fn apply_overrides(self, base: FpConfig) -> FpConfig {
        FpConfig::from_opaque_int(
            (base.as_opaque_int() & !self.override_mask)
                | (self.options.as_opaque_int() & self.override_mask),
        )
    }

    /// Merges the override onto the dialect default configuration.
    pub fn apply_overrides_to_dialect(self, dialect: &DialectOptionSet) -> FpConfig {
        self.apply_overrides(FpConfig::from_dialect(dialect))
    }

    /// Composes two overrides, `later` winning where both specify a field.
    ///
    /// Applying the result is the same as applying `self` and then `later`.
    pub const fn layered_with(self, later: Self) -> Self {
        let mask = self.override_mask | later.override_mask;
        let value = (self.options.as_opaque_int() & !later.override_mask)
            | (later.options.as_opaque_int() & later.override_mask);
        Self::with_mask(FpConfig::from_opaque_int(value), mask)
    }

    /// Returns the opaque integer encoding: values in the high half, the
    /// mask in the low half.
    pub const fn as_opaque_int(self) -> FpOverrideStorage {
        ((self.options.as_opaque_int() as FpOverrideStorage) << FP_STORAGE_BITS)
            | self.override_mask as FpOverrideStorage
    }

    /// Reconstructs an override from its opaque integer.
    pub const fn from_opaque_int(value: FpOverrideStorage) -> Self {
        Self {
            options: FpConfig::from_opaque_int((value >> FP_STORAGE_BITS) as FpStorage),
            override_mask: (value & OVERRIDE_MASK_BITS) as FpStorage,
        }
    }
}

impl Default for FpConfigOverride {
    fn default() -> Self {
        Self::new()
    }
}

impl From<FpConfig> for FpConfigOverride {
    fn from(options: FpConfig) -> Self {
        Self::full(options)
    }
}

impl From<FpOverrideStorage> for FpConfigOverride {
    fn from(value: FpOverrideStorage) -> Self {
        Self::from_opaque_int(value)
    }
}

impl From<FpConfigOverride> for FpOverrideStorage {
    fn from(value: FpConfigOverride) -> Self {
        value.as_opaque_int()
    }
}
