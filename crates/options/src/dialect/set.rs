//! Dialect selection switches.
//!
//! A `DialectOptionSet` is the flat, trivially copyable record of every
//! boolean and small-enumeration switch that selects the language dialect.
//! It is filled in once per compilation and then only read.
//!
//! The fields are declared in a single table; the generator emits the
//! record, its defaults, a getter and a truncating setter per field, a
//! serialized form that truncates on load like the setters, and a
//! compile-time check that every type fits its declared width.

use serde::{Deserialize, Serialize};

use crate::common::packed::{PackedField, low_bits};
use crate::fp::{FpEvalMethod, FpExceptionMode, FpModeKind, RoundingMode};

use super::kinds::{
    AbiCompat, AddrSpaceMapMangling, AltivecSrcCompatKind, CompilingModuleKind,
    DefaultCallingConvention, DefaultVisibilityExportMapping, ExceptionHandlingKind,
    ExtendArgsKind, GcMode, LaxVectorConversionKind, MsPointersToMembersKind, MsVtorDispMode,
    MsvcMajorVersion, SignReturnAddressKeyKind, SignReturnAddressScopeKind,
    SignedOverflowBehavior, StackProtectorMode, StrictFlexArraysLevelKind, SyclMajorVersion,
    ThreadModelKind, TrivialAutoVarInitKind,
};

/// Name and width of one dialect option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialectField {
    /// Field name.
    pub name: &'static str,
    /// Bits reserved for the field.
    pub width: u32,
}

macro_rules! dialect_options {
    (
        $(
            $(#[$doc:meta])*
            $name:ident : $ty:ty = $width:literal => $default:expr
        ),+ $(,)?
    ) => { paste::paste! {
        /// Dialect selection switches.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "RawDialectOptionSet", into = "RawDialectOptionSet")]
        pub struct DialectOptionSet {
            $(
                $(#[$doc])*
                $name: $ty,
            )+
        }

        /// Serialized form of `DialectOptionSet`.
        ///
        /// Integer fields are read as `u64` and truncated to their widths on
        /// conversion, so every serde path yields an in-range record.
        #[derive(Serialize, Deserialize)]
        #[serde(default)]
        struct RawDialectOptionSet {
            $($name: <$ty as PackedField>::Wire,)+
        }

        impl Default for RawDialectOptionSet {
            fn default() -> Self {
                DialectOptionSet::default().into()
            }
        }

        impl From<DialectOptionSet> for RawDialectOptionSet {
            fn from(set: DialectOptionSet) -> Self {
                Self {
                    $($name: set.$name.to_wire(),)+
                }
            }
        }

        impl From<RawDialectOptionSet> for DialectOptionSet {
            fn from(raw: RawDialectOptionSet) -> Self {
                Self {
                    $($name: <$ty as PackedField>::from_wire(raw.$name, $width),)+
                }
            }
        }

        impl DialectOptionSet {
            /// Every field in declaration order.
            pub const FIELDS: &'static [DialectField] = &[
                $(DialectField { name: stringify!($name), width: $width },)+
            ];

            /// Sum of all field widths.
            pub const TOTAL_WIDTH: u32 = {
                let mut total = 0;
                $(total += $width;)+
                total
            };

            $(
                #[doc = concat!("Returns `", stringify!($name), "`.")]
                #[inline(always)]
                pub const fn $name(&self) -> $ty {
                    self.$name
                }

                #[doc = concat!("Sets `", stringify!($name), "`, truncated to ", stringify!($width), " bits.")]
                #[inline(always)]
                pub fn [<set_ $name>](&mut self, value: $ty) {
                    self.$name = <$ty as PackedField>::from_bits(value.to_bits() & low_bits($width));
                }
            )+
        }

        impl Default for DialectOptionSet {
            fn default() -> Self {
                Self {
                    $($name: $default,)+
                }
            }
        }

        const _: () = {
            $(
                assert!(
                    <$ty as PackedField>::REQUIRED_WIDTH <= $width && $width <= u32::BITS,
                    concat!("dialect option `", stringify!($name), "` does not fit its width"),
                );
            )+
        };
    }};
}

dialect_options! {
    // Language standards.
    /// C99.
    c99: bool = 1 => false,
    /// C11.
    c11: bool = 1 => false,
    /// C17.
    c17: bool = 1 => false,
    /// C2x.
    c2x: bool = 1 => false,
    /// C++.
    cplusplus: bool = 1 => false,
    /// C++11.
    cplusplus11: bool = 1 => false,
    /// C++14.
    cplusplus14: bool = 1 => false,
    /// C++17.
    cplusplus17: bool = 1 => false,
    /// C++20.
    cplusplus20: bool = 1 => false,
    /// C++2b.
    cplusplus2b: bool = 1 => false,
    /// Objective-C.
    objc: bool = 1 => false,
    /// OpenCL.
    opencl: bool = 1 => false,
    /// OpenCL C version (e.g. 200 for 2.0).
    opencl_version: u32 = 32 => 0,
    /// C++ for OpenCL.
    opencl_cplusplus: bool = 1 => false,
    /// C++ for OpenCL version (100 for 1.0, 202100 for 2021).
    opencl_cplusplus_version: u32 = 32 => 0,
    /// CUDA.
    cuda: bool = 1 => false,
    /// HIP.
    hip: bool = 1 => false,
    /// SYCL device compilation.
    sycl_is_device: bool = 1 => false,
    /// SYCL host compilation.
    sycl_is_host: bool = 1 => false,
    /// SYCL revision.
    sycl_version: SyclMajorVersion = 2 => SyclMajorVersion::None,
    /// Microsoft compatibility version, `_MSC_FULL_VER` style.
    ms_compatibility_version: u32 = 32 => 0,
    /// Reject K&R-style function declarations.
    disable_knr_functions: bool = 1 => false,

    // Modules.
    /// Kind of module being compiled.
    compiling_module: CompilingModuleKind = 3 => CompilingModuleKind::None,
    /// Local declarations are only visible from their owning module.
    modules_local_visibility: bool = 1 => false,

    // Code generation.
    /// Signed overflow behavior.
    signed_overflow_behavior: SignedOverflowBehavior = 2 => SignedOverflowBehavior::Undefined,
    /// Position-independent code level.
    pic_level: u8 = 2 => 0,
    /// Position-independent executable.
    pie: bool = 1 => false,
    /// Objective-C garbage collection.
    gc_mode: GcMode = 2 => GcMode::NonGc,
    /// Stack protector level.
    stack_protector: StackProtectorMode = 2 => StackProtectorMode::Off,
    /// Initialization of trivial automatic variables.
    trivial_auto_var_init: TrivialAutoVarInitKind = 2 => TrivialAutoVarInitKind::Uninitialized,
    /// Objective-C automatic reference counting.
    objc_auto_ref_count: bool = 1 => false,
    /// Objective-C `__weak` references.
    objc_weak: bool = 1 => false,
    /// Functions are assumed convergent.
    convergent_functions: bool = 1 => false,
    /// Microsoft pointer-to-member representation.
    ms_pointer_to_member_representation: MsPointersToMembersKind = 2 => MsPointersToMembersKind::BestCase,
    /// Microsoft vtordisp placement.
    vtor_disp_mode: MsVtorDispMode = 2 => MsVtorDispMode::ForVBaseOverride,
    /// Default calling convention.
    default_calling_conv: DefaultCallingConvention = 3 => DefaultCallingConvention::None,
    /// Address space mangling.
    address_space_map_mangling: AddrSpaceMapMangling = 2 => AddrSpaceMapMangling::Target,
    /// Exception handling model.
    exception_handling: ExceptionHandlingKind = 3 => ExceptionHandlingKind::None,
    /// Permitted implicit vector bitcasts.
    lax_vector_conversions: LaxVectorConversionKind = 2 => LaxVectorConversionKind::All,
    /// AltiVec comparison compatibility.
    altivec_src_compat: AltivecSrcCompatKind = 2 => AltivecSrcCompatKind::Mixed,
    /// Functions whose return address is signed.
    sign_return_address_scope: SignReturnAddressScopeKind = 2 => SignReturnAddressScopeKind::None,
    /// Return address signing key.
    sign_return_address_key: SignReturnAddressKeyKind = 1 => SignReturnAddressKeyKind::AKey,
    /// Thread model.
    thread_model: ThreadModelKind = 1 => ThreadModelKind::Posix,
    /// Integer argument promotion width.
    extend_int_args: ExtendArgsKind = 1 => ExtendArgsKind::ExtendTo32,
    /// Default visibility export mapping.
    default_visibility_export_mapping: DefaultVisibilityExportMapping = 2 => DefaultVisibilityExportMapping::None,
    /// Flexible array member strictness.
    strict_flex_arrays: StrictFlexArraysLevelKind = 2 => StrictFlexArraysLevelKind::Default,
    /// ABI compatibility release.
    abi_compat: AbiCompat = 4 => AbiCompat::Latest,

    // Floating point.
    /// Rounding may change at run time.
    rounding_math: bool = 1 => false,
    /// Exception behavior from the command line.
    fp_exception_mode: FpExceptionMode = 2 => FpExceptionMode::Default,
    /// The floating-point environment may be accessed.
    allow_fenv_access: bool = 1 => false,
    /// Reassociation is allowed.
    allow_fp_reassoc: bool = 1 => false,
    /// NaNs may be assumed absent.
    no_honor_nans: bool = 1 => false,
    /// Infinities may be assumed absent.
    no_honor_infs: bool = 1 => false,
    /// The sign of zero may be ignored.
    no_signed_zero: bool = 1 => false,
    /// Reciprocal approximations are allowed.
    allow_recip: bool = 1 => false,
    /// Library function approximations are allowed.
    approx_func: bool = 1 => false,
    /// Contraction mode.
    default_fp_contract_mode: FpModeKind = 2 => FpModeKind::Off,
    /// Expression evaluation method.
    fp_eval_method: FpEvalMethod = 2 => FpEvalMethod::UnsetOnCommandLine,
}

impl DialectOptionSet {
    /// Creates the record with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Are we compiling a module?
    pub fn is_compiling_module(&self) -> bool {
        self.compiling_module != CompilingModuleKind::None
    }

    /// Are we compiling a standard C++ module interface?
    pub fn is_compiling_module_interface(&self) -> bool {
        self.compiling_module == CompilingModuleKind::ModuleInterface
    }

    /// Does the owning module of local declarations need to be tracked?
    pub fn track_local_owning_module(&self) -> bool {
        self.is_compiling_module() || self.modules_local_visibility
    }

    /// Returns true if signed overflow wraps.
    pub fn is_signed_overflow_defined(&self) -> bool {
        self.signed_overflow_behavior == SignedOverflowBehavior::Defined
    }

    /// Returns true if the Microsoft compatibility version is at least
    /// `version`.
    pub fn is_compatible_with_msvc(&self, version: MsvcMajorVersion) -> bool {
        u64::from(self.ms_compatibility_version) >= u64::from(version.msc_ver()) * 100_000
    }

    /// Returns true if functions without prototypes or with identifier lists
    /// (K&R C functions) are rejected.
    pub fn requires_strict_prototypes(&self) -> bool {
        self.cplusplus || self.c2x || self.disable_knr_functions
    }

    /// Returns true if implicit function declarations are allowed.
    pub fn implicit_functions_allowed(&self) -> bool {
        !self.requires_strict_prototypes() && !self.opencl
    }

    /// Returns true if implicit int is part of the language requirements.
    pub fn is_implicit_int_required(&self) -> bool {
        !self.cplusplus && !self.c99
    }

    /// Returns true if implicit int is supported at all.
    pub fn is_implicit_int_allowed(&self) -> bool {
        !self.cplusplus && !self.c2x
    }

    /// Returns true if return address signing is enabled.
    pub fn has_sign_return_address(&self) -> bool {
        self.sign_return_address_scope != SignReturnAddressScopeKind::None
    }

    /// Returns true if return address signing uses the A key.
    pub fn is_sign_return_address_with_a_key(&self) -> bool {
        self.sign_return_address_key == SignReturnAddressKeyKind::AKey
    }

    /// Returns true if leaf functions are signed as well.
    pub fn is_sign_return_address_scope_all(&self) -> bool {
        self.sign_return_address_scope == SignReturnAddressScopeKind::All
    }

    /// setjmp/longjmp exceptions.
    pub fn has_sjlj_exceptions(&self) -> bool {
        self.exception_handling == ExceptionHandlingKind::SjLj
    }

    /// Windows structured exceptions.
    pub fn has_seh_exceptions(&self) -> bool {
        self.exception_handling == ExceptionHandlingKind::WinEh
    }

    /// DWARF exceptions.
    pub fn has_dwarf_exceptions(&self) -> bool {
        self.exception_handling == ExceptionHandlingKind::DwarfCfi
    }

    /// WebAssembly exceptions.
    pub fn has_wasm_exceptions(&self) -> bool {
        self.exception_handling == ExceptionHandlingKind::Wasm
    }

    /// Returns true for SYCL device or host compilation.
    pub fn is_sycl(&self) -> bool {
        self.sycl_is_device || self.sycl_is_host
    }

    /// Returns true if default visibility maps to exported symbols at all.
    pub fn has_default_visibility_export_mapping(&self) -> bool {
        self.default_visibility_export_mapping != DefaultVisibilityExportMapping::None
    }

    /// Returns true if only explicit default visibility is exported.
    pub fn is_explicit_default_visibility_export_mapping(&self) -> bool {
        self.default_visibility_export_mapping == DefaultVisibilityExportMapping::Explicit
    }

    /// Returns true if all default visibility is exported.
    pub fn is_all_default_visibility_export_mapping(&self) -> bool {
        self.default_visibility_export_mapping == DefaultVisibilityExportMapping::All
    }

    /// True if any Objective-C types may have non-trivial lifetime
    /// qualifiers.
    pub fn allows_non_trivial_objc_lifetime_qualifiers(&self) -> bool {
        self.objc_auto_ref_count || self.objc_weak
    }

    /// Returns true if functions are assumed convergent.
    pub fn assume_functions_are_convergent(&self) -> bool {
        self.convergent_functions
    }

    /// Rounding mode implied by the command line.
    pub fn default_rounding_mode(&self) -> RoundingMode {
        if self.rounding_math {
            RoundingMode::Dynamic
        } else {
            RoundingMode::NearestTiesToEven
        }
    }

    /// Exception mode implied by the command line; unspecified reads as
    /// `Ignore`.
    pub fn default_exception_mode(&self) -> FpExceptionMode {
        match self.fp_exception_mode {
            FpExceptionMode::Default => FpExceptionMode::Ignore,
            mode => mode,
        }
    }

    /// Returns the field table.
    pub fn fields() -> &'static [DialectField] {
        Self::FIELDS
    }
}
