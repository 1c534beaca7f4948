//! # Merge and Diff Laws
//!
//! Property tests over generated configurations and overrides:
//! 1. **Round Trip:** Opaque integers decode to the value they came from.
//! 2. **Diff:** Applying `a.get_changes_from(b)` to `b` yields `a`, and the
//!    diff marks exactly the fields that differ.
//! 3. **Identity:** The empty override changes nothing.
//! 4. **Layering:** Sequential application equals applying the layered
//!    override once.
//! 5. **Canonical Form:** Overrides never carry value bits outside their mask.

use langopts_core::fp::*;
use proptest::prelude::*;

use crate::common::{arb_bit_override, arb_field_config, arb_field_override, arb_fp_config};

proptest! {
    #[test]
    fn test_config_opaque_round_trip(config in arb_fp_config()) {
        prop_assert_eq!(FpConfig::from_opaque_int(config.as_opaque_int()), config);
    }

    #[test]
    fn test_override_opaque_round_trip(bits in any::<FpOverrideStorage>()) {
        let ovr = FpConfigOverride::from_opaque_int(bits);
        prop_assert_eq!(ovr.as_opaque_int(), bits);
        prop_assert_eq!(FpConfigOverride::from_opaque_int(ovr.as_opaque_int()), ovr);
    }

    #[test]
    fn test_diff_then_apply_restores(a in arb_fp_config(), b in arb_fp_config()) {
        prop_assert_eq!(a.get_changes_from(b).apply_overrides(b), a);
    }

    #[test]
    fn test_diff_of_equal_is_empty(a in arb_fp_config()) {
        let changes = a.get_changes_from(a);
        prop_assert!(!changes.requires_trailing_storage());
        prop_assert_eq!(changes, FpConfigOverride::new());
    }

    #[test]
    fn test_diff_marks_exactly_differing_fields(a in arb_field_config(), b in arb_field_config()) {
        let changes = a.get_changes_from(b);
        for &field in FpField::ALL {
            prop_assert_eq!(
                changes.has_field_override(field),
                a.field_bits(field) != b.field_bits(field),
                "{}", field
            );
        }
        prop_assert_eq!(changes.override_mask() & !FpField::USED_BITS, 0);
    }

    #[test]
    fn test_empty_override_is_identity(base in arb_fp_config()) {
        prop_assert_eq!(FpConfigOverride::new().apply_overrides(base), base);
    }

    #[test]
    fn test_full_override_ignores_base(config in arb_fp_config(), base in arb_fp_config()) {
        prop_assert_eq!(FpConfigOverride::full(config).apply_overrides(base), config);
    }

    #[test]
    fn test_apply_respects_mask(ovr in arb_bit_override(), base in arb_fp_config()) {
        let merged = ovr.apply_overrides(base).as_opaque_int();
        let mask = ovr.override_mask();
        prop_assert_eq!(merged & !mask, base.as_opaque_int() & !mask);
        prop_assert_eq!(merged & mask, ovr.options().as_opaque_int());
    }

    #[test]
    fn test_layering_equals_sequential_application(
        first in arb_bit_override(),
        second in arb_bit_override(),
        base in arb_fp_config(),
    ) {
        prop_assert_eq!(
            first.layered_with(second).apply_overrides(base),
            second.apply_overrides(first.apply_overrides(base))
        );
    }

    #[test]
    fn test_overrides_stay_canonical(ovr in arb_field_override()) {
        let value = ovr.options().as_opaque_int();
        prop_assert_eq!(value & !ovr.override_mask(), 0);
    }

    #[test]
    fn test_clearing_matches_never_setting(ovr in arb_field_override(), index in 0..FpField::ALL.len()) {
        let field = FpField::ALL[index];
        let mut cleared = ovr;
        cleared.clear_field_override(field);

        let mut rebuilt = FpConfigOverride::new();
        for &other in FpField::ALL {
            if other != field && ovr.has_field_override(other) {
                rebuilt.set_field_override_bits(other, ovr.options().field_bits(other));
            }
        }
        prop_assert_eq!(cleared, rebuilt);
        prop_assert_eq!(cleared.as_opaque_int(), rebuilt.as_opaque_int());
    }
}
