//! # Dialect Switch Tests
//!
//! Defaults, truncating setters and the derived predicates of
//! `DialectOptionSet`, checked across the truth tables of their inputs.

use langopts_core::OptionsError;
use langopts_core::dialect::*;
use langopts_core::fp::{FpExceptionMode, RoundingMode};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_defaults() {
    let set = DialectOptionSet::default();
    assert!(!set.cplusplus());
    assert_eq!(set.compiling_module(), CompilingModuleKind::None);
    assert_eq!(set.exception_handling(), ExceptionHandlingKind::None);
    assert_eq!(set.sign_return_address_key(), SignReturnAddressKeyKind::AKey);
    assert_eq!(set.lax_vector_conversions(), LaxVectorConversionKind::All);
    assert_eq!(set.abi_compat(), AbiCompat::Latest);
    assert_eq!(set.fp_exception_mode(), FpExceptionMode::Default);
    assert!(!set.allow_fenv_access());
}

#[test]
fn test_record_is_a_plain_value() {
    let mut a = DialectOptionSet::new();
    let b = a;
    a.set_cplusplus(true);
    assert!(!b.cplusplus());
    assert_ne!(a, b);
}

#[test]
fn test_field_table_matches_declared_widths() {
    let fields = DialectOptionSet::fields();
    let width_of = |name: &str| fields.iter().find(|f| f.name == name).map(|f| f.width);
    assert_eq!(width_of("compiling_module"), Some(3));
    assert_eq!(width_of("pic_level"), Some(2));
    assert_eq!(width_of("ms_compatibility_version"), Some(32));
    assert_eq!(width_of("no_such_option"), None);
    let total: u32 = fields.iter().map(|f| f.width).sum();
    assert_eq!(total, DialectOptionSet::TOTAL_WIDTH);
}

#[test]
fn test_integer_setters_truncate() {
    let mut set = DialectOptionSet::new();
    set.set_pic_level(7);
    assert_eq!(set.pic_level(), 3);
    set.set_ms_compatibility_version(u32::MAX);
    assert_eq!(set.ms_compatibility_version(), u32::MAX);
}

#[rstest]
#[case(CompilingModuleKind::None, false, false)]
#[case(CompilingModuleKind::ModuleMap, true, false)]
#[case(CompilingModuleKind::HeaderModule, true, false)]
#[case(CompilingModuleKind::HeaderUnit, true, false)]
#[case(CompilingModuleKind::ModuleInterface, true, true)]
fn test_compiling_module_predicates(
    #[case] kind: CompilingModuleKind,
    #[case] module: bool,
    #[case] interface: bool,
) {
    let mut set = DialectOptionSet::new();
    set.set_compiling_module(kind);
    assert_eq!(set.is_compiling_module(), module);
    assert_eq!(set.is_compiling_module_interface(), interface);
    assert_eq!(set.track_local_owning_module(), module);
    set.set_modules_local_visibility(true);
    assert!(set.track_local_owning_module());
}

#[rstest]
fn test_prototype_and_implicit_predicates(
    #[values(false, true)] cplusplus: bool,
    #[values(false, true)] c99: bool,
    #[values(false, true)] c2x: bool,
    #[values(false, true)] no_knr: bool,
    #[values(false, true)] opencl: bool,
) {
    let mut set = DialectOptionSet::new();
    set.set_cplusplus(cplusplus);
    set.set_c99(c99);
    set.set_c2x(c2x);
    set.set_disable_knr_functions(no_knr);
    set.set_opencl(opencl);

    let strict = cplusplus || c2x || no_knr;
    assert_eq!(set.requires_strict_prototypes(), strict);
    assert_eq!(set.implicit_functions_allowed(), !strict && !opencl);
    assert_eq!(set.is_implicit_int_required(), !cplusplus && !c99);
    assert_eq!(set.is_implicit_int_allowed(), !cplusplus && !c2x);
}

#[rstest]
#[case(SignReturnAddressScopeKind::None, false, false)]
#[case(SignReturnAddressScopeKind::NonLeaf, true, false)]
#[case(SignReturnAddressScopeKind::All, true, true)]
fn test_sign_return_address(
    #[case] scope: SignReturnAddressScopeKind,
    #[case] enabled: bool,
    #[case] all: bool,
) {
    let mut set = DialectOptionSet::new();
    set.set_sign_return_address_scope(scope);
    assert_eq!(set.has_sign_return_address(), enabled);
    assert_eq!(set.is_sign_return_address_scope_all(), all);
    assert!(set.is_sign_return_address_with_a_key());
    set.set_sign_return_address_key(SignReturnAddressKeyKind::BKey);
    assert!(!set.is_sign_return_address_with_a_key());
}

#[test]
fn test_exception_model_predicates_are_exclusive() {
    for &kind in ExceptionHandlingKind::ALL {
        let mut set = DialectOptionSet::new();
        set.set_exception_handling(kind);
        let flags = [
            set.has_sjlj_exceptions(),
            set.has_seh_exceptions(),
            set.has_dwarf_exceptions(),
            set.has_wasm_exceptions(),
        ];
        let expected = [
            kind == ExceptionHandlingKind::SjLj,
            kind == ExceptionHandlingKind::WinEh,
            kind == ExceptionHandlingKind::DwarfCfi,
            kind == ExceptionHandlingKind::Wasm,
        ];
        assert_eq!(flags, expected, "{kind}");
    }
}

#[rstest]
fn test_is_sycl(#[values(false, true)] device: bool, #[values(false, true)] host: bool) {
    let mut set = DialectOptionSet::new();
    set.set_sycl_is_device(device);
    set.set_sycl_is_host(host);
    assert_eq!(set.is_sycl(), device || host);
}

#[rstest]
#[case(DefaultVisibilityExportMapping::None, false, false, false)]
#[case(DefaultVisibilityExportMapping::Explicit, true, true, false)]
#[case(DefaultVisibilityExportMapping::All, true, false, true)]
fn test_visibility_export_mapping(
    #[case] mapping: DefaultVisibilityExportMapping,
    #[case] any: bool,
    #[case] explicit: bool,
    #[case] all: bool,
) {
    let mut set = DialectOptionSet::new();
    set.set_default_visibility_export_mapping(mapping);
    assert_eq!(set.has_default_visibility_export_mapping(), any);
    assert_eq!(set.is_explicit_default_visibility_export_mapping(), explicit);
    assert_eq!(set.is_all_default_visibility_export_mapping(), all);
}

#[test]
fn test_msvc_compatibility() {
    let mut set = DialectOptionSet::new();
    set.set_ms_compatibility_version(191_400_000);
    assert!(set.is_compatible_with_msvc(MsvcMajorVersion::Msvc2015));
    assert!(set.is_compatible_with_msvc(MsvcMajorVersion::Msvc2017_7));
    assert!(!set.is_compatible_with_msvc(MsvcMajorVersion::Msvc2019));
}

#[test]
fn test_signed_overflow_and_objc_predicates() {
    let mut set = DialectOptionSet::new();
    assert!(!set.is_signed_overflow_defined());
    set.set_signed_overflow_behavior(SignedOverflowBehavior::Defined);
    assert!(set.is_signed_overflow_defined());

    assert!(!set.allows_non_trivial_objc_lifetime_qualifiers());
    set.set_objc_weak(true);
    assert!(set.allows_non_trivial_objc_lifetime_qualifiers());

    assert!(!set.assume_functions_are_convergent());
    set.set_convergent_functions(true);
    assert!(set.assume_functions_are_convergent());
}

#[rstest]
#[case(false, FpExceptionMode::Default, RoundingMode::NearestTiesToEven, FpExceptionMode::Ignore)]
#[case(true, FpExceptionMode::Default, RoundingMode::Dynamic, FpExceptionMode::Ignore)]
#[case(false, FpExceptionMode::MayTrap, RoundingMode::NearestTiesToEven, FpExceptionMode::MayTrap)]
#[case(true, FpExceptionMode::Strict, RoundingMode::Dynamic, FpExceptionMode::Strict)]
fn test_default_fp_modes(
    #[case] rounding_math: bool,
    #[case] exceptions: FpExceptionMode,
    #[case] rounding: RoundingMode,
    #[case] resolved: FpExceptionMode,
) {
    let mut set = DialectOptionSet::new();
    set.set_rounding_math(rounding_math);
    set.set_fp_exception_mode(exceptions);
    assert_eq!(set.default_rounding_mode(), rounding);
    assert_eq!(set.default_exception_mode(), resolved);
}

#[test]
fn test_module_implementation_needs_a_name() {
    let mut opts = DialectOptions::default();
    assert!(!opts.is_compiling_module_implementation());

    opts.module_name = "Foundation".to_string();
    assert!(opts.is_compiling_module_implementation());

    opts.options.set_compiling_module(CompilingModuleKind::ModuleMap);
    assert!(!opts.is_compiling_module_implementation());
}

#[test]
fn test_no_builtin_funcs() {
    let opts = DialectOptions {
        no_builtin_funcs: vec!["memset".to_string(), "memcpy".to_string()],
        ..DialectOptions::default()
    };
    assert!(opts.is_no_builtin_func("memset"));
    assert!(!opts.is_no_builtin_func("strlen"));
}

#[rstest]
#[case(false, 120, 0, "OpenCL C version 1.2", Some(120))]
#[case(false, 300, 0, "OpenCL C version 3.0", Some(300))]
#[case(true, 0, 100, "C++ for OpenCL version 1.0", Some(200))]
#[case(true, 0, 202_100, "C++ for OpenCL version 2021", Some(300))]
#[case(true, 0, 202_300, "C++ for OpenCL version 2023", None)]
fn test_opencl_versions(
    #[case] cplusplus: bool,
    #[case] version: u32,
    #[case] cpp_version: u32,
    #[case] text: &str,
    #[case] compatible: Option<u32>,
) {
    let mut set = DialectOptionSet::new();
    set.set_opencl(true);
    set.set_opencl_cplusplus(cplusplus);
    set.set_opencl_version(version);
    set.set_opencl_cplusplus_version(cpp_version);

    assert_eq!(set.opencl_version_string(), text);
    match compatible {
        Some(expected) => assert_eq!(set.opencl_compatible_version().unwrap(), expected),
        None => assert!(matches!(
            set.opencl_compatible_version(),
            Err(OptionsError::UnknownOpenClCppVersion(v)) if v == cpp_version
        )),
    }
}

#[test]
fn test_opencl_version_tuple() {
    let mut set = DialectOptionSet::new();
    set.set_opencl_version(200);
    assert_eq!(set.opencl_version_tuple(), OpenClVersion { major: 2, minor: Some(0) });
    set.set_opencl_cplusplus(true);
    set.set_opencl_cplusplus_version(202_100);
    assert_eq!(set.opencl_version_tuple(), OpenClVersion { major: 2021, minor: None });
}
