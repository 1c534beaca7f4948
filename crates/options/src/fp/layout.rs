//! Floating-point option layout.
//!
//! The options packed into an `FpConfig` are declared once, in the table at
//! the bottom of this file. Declaration order is the layout: each field
//! starts where the previous one ends, beginning at bit 0. Reordering,
//! resizing or inserting a field changes every persisted encoding.
//!
//! | Field                  | Shift | Width |
//! |------------------------|-------|-------|
//! | FpContractMode         | 0     | 2     |
//! | RoundingMath           | 2     | 1     |
//! | ConstRoundingMode      | 3     | 3     |
//! | SpecifiedExceptionMode | 6     | 2     |
//! | AllowFEnvAccess        | 8     | 1     |
//! | AllowFpReassociate     | 9     | 1     |
//! | NoHonorNans            | 10    | 1     |
//! | NoHonorInfs            | 11    | 1     |
//! | NoSignedZero           | 12    | 1     |
//! | AllowReciprocal        | 13    | 1     |
//! | AllowApproxFunc        | 14    | 1     |
//! | FpEvalMethod           | 15    | 2     |
//!
//! From the table the generator emits the `FpField` descriptor enum, typed
//! getters and setters on `FpConfig`, and the `has_`/`get_`/`try_get_`/
//! `set_`/`clear_` override family on `FpConfigOverride`.

use std::fmt;

use crate::common::packed::{PackedField, low_bits, range_mask};
use crate::common::{OptionsError, Result};

use super::config::{FP_STORAGE_BITS, FpConfig};
use super::kinds::{FpEvalMethod, FpExceptionMode, FpModeKind, RoundingMode};
use super::overrides::FpConfigOverride;

macro_rules! fp_options {
    (
        $(
            $(#[$doc:meta])*
            $field:ident / $getter:ident : $ty:ty = $width:literal
        ),+ $(,)?
    ) => { paste::paste! {
        /// A named bit range of `FpConfig`, in layout order.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum FpField {
            $(
                $(#[$doc])*
                $field,
            )+
        }

        impl FpField {
            /// Every field in layout order.
            pub const ALL: &'static [Self] = &[$(Self::$field),+];

            const WIDTHS: &'static [u32] = &[$($width),+];

            /// Sum of all field widths.
            pub const TOTAL_WIDTH: u32 = {
                let mut total = 0;
                $(total += $width;)+
                total
            };

            /// Mask of every storage bit owned by some field.
            pub const USED_BITS: u32 = low_bits(Self::TOTAL_WIDTH);

            /// Returns the field name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$field => stringify!($field),)+
                }
            }

            /// Returns the number of bits the field occupies.
            #[inline(always)]
            pub const fn width(self) -> u32 {
                Self::WIDTHS[self as usize]
            }

            /// Returns the bit offset of the field.
            ///
            /// The offset is the sum of the widths of every field declared
            /// before it.
            #[inline(always)]
            pub const fn shift(self) -> u32 {
                FP_FIELD_SHIFTS[self as usize]
            }

            /// Returns the storage mask of the field.
            #[inline(always)]
            pub const fn mask(self) -> u32 {
                range_mask(self.shift(), self.width())
            }
        }

        const FP_FIELD_COUNT: usize = FpField::WIDTHS.len();

        /// Bit offsets in layout order, running sums of `FpField::WIDTHS`.
        const FP_FIELD_SHIFTS: [u32; FP_FIELD_COUNT] = {
            let mut shifts = [0; FP_FIELD_COUNT];
            let mut i = 1;
            while i < FP_FIELD_COUNT {
                shifts[i] = shifts[i - 1] + FpField::WIDTHS[i - 1];
                i += 1;
            }
            shifts
        };

        const _: () = {
            assert!(FpField::TOTAL_WIDTH <= FP_STORAGE_BITS, "Too short type for FpConfig");
            $(
                assert!(
                    <$ty as PackedField>::REQUIRED_WIDTH <= $width,
                    concat!("FpField::", stringify!($field), " is narrower than its type"),
                );
            )+
        };

        impl FpConfig {
            $(
                #[doc = concat!("Returns the stored `", stringify!($field), "` value.")]
                #[inline(always)]
                pub fn $getter(self) -> $ty {
                    <$ty as PackedField>::from_bits(self.field_bits(FpField::$field))
                }

                #[doc = concat!("Stores `", stringify!($field), "`, truncated to its width.")]
                #[inline(always)]
                pub fn [<set_ $getter>](&mut self, value: $ty) {
                    self.set_field_bits(FpField::$field, value.to_bits());
                }
            )+
        }

        impl FpConfigOverride {
            $(
                #[doc = concat!("Returns true if `", stringify!($field), "` is overridden.")]
                #[inline(always)]
                pub fn [<has_ $getter _override>](self) -> bool {
                    self.has_field_override(FpField::$field)
                }

                #[doc = concat!("Returns the `", stringify!($field), "` override, if one is set.")]
                pub fn [<try_get_ $getter _override>](self) -> Result<$ty> {
                    if self.[<has_ $getter _override>]() {
                        Ok(self.options().$getter())
                    } else {
                        Err(OptionsError::MissingOverride(FpField::$field))
                    }
                }

                #[doc = concat!("Returns the `", stringify!($field), "` override.")]
                #[doc = ""]
                #[doc = "# Panics"]
                #[doc = ""]
                #[doc = concat!("Panics if `", stringify!($field), "` is not overridden.")]
                #[track_caller]
                pub fn [<get_ $getter _override>](self) -> $ty {
                    assert!(
                        self.[<has_ $getter _override>](),
                        "{}",
                        OptionsError::MissingOverride(FpField::$field),
                    );
                    self.options().$getter()
                }

                #[doc = concat!("Overrides `", stringify!($field), "` with `value`.")]
                #[inline(always)]
                pub fn [<set_ $getter _override>](&mut self, value: $ty) {
                    self.set_field_override_bits(FpField::$field, value.to_bits());
                }

                #[doc = concat!("Drops the `", stringify!($field), "` override and its value bits.")]
                #[inline(always)]
                pub fn [<clear_ $getter _override>](&mut self) {
                    self.clear_field_override(FpField::$field);
                }
            )+
        }

        impl fmt::Debug for FpConfig {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct("FpConfig")
                    $(.field(stringify!($getter), &self.$getter()))+
                    .finish()
            }
        }

        impl fmt::Debug for FpConfigOverride {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut s = f.debug_struct("FpConfigOverride");
                $(
                    if self.[<has_ $getter _override>]() {
                        let _ = s.field(stringify!($getter), &self.options().$getter());
                    }
                )+
                s.finish()
            }
        }
    }};
}

fp_options! {
    /// Contraction mode (`#pragma STDC FP_CONTRACT`, `-ffp-contract`).
    FpContractMode / fp_contract_mode: FpModeKind = 2,
    /// Rounding may differ from the default at run time (`-frounding-math`).
    RoundingMath / rounding_math: bool = 1,
    /// Rounding direction as written; `Dynamic` defers to the environment.
    ConstRoundingMode / const_rounding_mode: RoundingMode = 3,
    /// Exception behavior as written; `Default` defers to float-env access.
    SpecifiedExceptionMode / specified_exception_mode: FpExceptionMode = 2,
    /// The floating-point environment may be read or modified.
    AllowFEnvAccess / allow_fenv_access: bool = 1,
    /// Operations may be reassociated.
    AllowFpReassociate / allow_fp_reassociate: bool = 1,
    /// NaN operands and results may be assumed absent.
    NoHonorNans / no_honor_nans: bool = 1,
    /// Infinite operands and results may be assumed absent.
    NoHonorInfs / no_honor_infs: bool = 1,
    /// The sign of zero may be ignored.
    NoSignedZero / no_signed_zero: bool = 1,
    /// Division may be replaced by multiplication with a reciprocal.
    AllowReciprocal / allow_reciprocal: bool = 1,
    /// Library functions may be approximated.
    AllowApproxFunc / allow_approx_func: bool = 1,
    /// Evaluation type for floating-point expressions.
    FpEvalMethod / fp_eval_method: FpEvalMethod = 2,
}

impl fmt::Display for FpField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
