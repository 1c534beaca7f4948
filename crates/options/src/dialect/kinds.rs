//! Dialect option enumerations.
//!
//! Each enumeration is declared with the width of the bit range it occupies
//! in a `DialectOptionSet`; discriminants are checked against that width at
//! compile time.

use serde::{Deserialize, Serialize};

use crate::common::packed::packed_enum;

packed_enum! {
    /// Kind of module interface being compiled.
    pub enum CompilingModuleKind: 3 {
        /// Not compiling a module interface at all.
        None = 0,
        /// Compiling a module from a module map.
        ModuleMap = 1,
        /// Compiling a module from a list of header files.
        HeaderModule = 2,
        /// Compiling a module header unit.
        HeaderUnit = 3,
        /// Compiling a C++ modules interface unit.
        ModuleInterface = 4,
    }
    reserved => None
}

packed_enum! {
    /// Behavior of signed integer overflow.
    pub enum SignedOverflowBehavior: 2 {
        /// Undefined, as the C standard says.
        Undefined = 0,
        /// Wraps (`-fwrapv`).
        Defined = 1,
        /// Traps (`-ftrapv`).
        Trapping = 2,
    }
    reserved => Undefined
}

packed_enum! {
    /// Objective-C garbage collection mode.
    pub enum GcMode: 2 {
        /// No garbage collection.
        NonGc = 0,
        /// Garbage collection only.
        GcOnly = 1,
        /// Mixed collected and retain/release code.
        HybridGc = 2,
    }
    reserved => NonGc
}

packed_enum! {
    /// Stack protector level.
    pub enum StackProtectorMode: 2 {
        /// No protection.
        Off = 0,
        /// Protect functions with character arrays.
        On = 1,
        /// Protect functions with any local arrays or address-taken locals.
        Strong = 2,
        /// Protect every function.
        Req = 3,
    }
    reserved => Off
}

packed_enum! {
    /// Initialization of trivial automatic variables.
    pub enum TrivialAutoVarInitKind: 2 {
        /// Left uninitialized.
        Uninitialized = 0,
        /// Zero-filled.
        Zero = 1,
        /// Filled with a repeated pattern.
        Pattern = 2,
    }
    reserved => Uninitialized
}

packed_enum! {
    /// Microsoft pointer-to-member representation.
    pub enum MsPointersToMembersKind: 2 {
        /// Smallest representation for the class.
        BestCase = 0,
        /// General representation for single inheritance.
        FullGeneralitySingleInheritance = 1,
        /// General representation for multiple inheritance.
        FullGeneralityMultipleInheritance = 2,
        /// General representation for virtual inheritance.
        FullGeneralityVirtualInheritance = 3,
    }
    reserved => BestCase
}

packed_enum! {
    /// Placement of virtual displacement members in the Microsoft ABI.
    pub enum MsVtorDispMode: 2 {
        /// Never emit vtordisp fields.
        Never = 0,
        /// Emit them for virtual bases with overridden methods.
        ForVBaseOverride = 1,
        /// Emit them for every virtual base with a vftable.
        ForVfTable = 2,
    }
    reserved => ForVBaseOverride
}

packed_enum! {
    /// Default calling convention for functions without one.
    pub enum DefaultCallingConvention: 3 {
        /// Target default.
        None = 0,
        /// `__cdecl`.
        CDecl = 1,
        /// `__fastcall`.
        FastCall = 2,
        /// `__stdcall`.
        StdCall = 3,
        /// `__vectorcall`.
        VectorCall = 4,
        /// `__regcall`.
        RegCall = 5,
    }
    reserved => None
}

packed_enum! {
    /// Whether address spaces are mangled into names.
    pub enum AddrSpaceMapMangling: 2 {
        /// Target decides.
        Target = 0,
        /// Always mangle.
        On = 1,
        /// Never mangle.
        Off = 2,
    }
    reserved => Target
}

packed_enum! {
    /// Exception handling model.
    pub enum ExceptionHandlingKind: 3 {
        /// No exception model.
        None = 0,
        /// setjmp/longjmp.
        SjLj = 1,
        /// Windows structured exception handling.
        WinEh = 2,
        /// DWARF call frame information.
        DwarfCfi = 3,
        /// WebAssembly exceptions.
        Wasm = 4,
    }
    reserved => None
}

packed_enum! {
    /// Implicit vector bitcasts that are permitted.
    pub enum LaxVectorConversionKind: 2 {
        /// No implicit vector bitcasts.
        None = 0,
        /// Integer vectors of equal total width.
        Integer = 1,
        /// All vectors of equal total width.
        All = 2,
    }
    reserved => All
}

packed_enum! {
    /// AltiVec vector comparison result compatibility.
    pub enum AltivecSrcCompatKind: 2 {
        /// Scalar results except for vector pixel and vector bool.
        Mixed = 0,
        /// Vector results, as GCC.
        Gcc = 1,
        /// Scalar results, as XL.
        Xl = 2,
    }
    reserved => Mixed
}

packed_enum! {
    /// Functions whose return address is signed.
    pub enum SignReturnAddressScopeKind: 2 {
        /// No signing.
        None = 0,
        /// Functions that spill the link register.
        NonLeaf = 1,
        /// All functions.
        All = 2,
    }
    reserved => None
}

packed_enum! {
    /// Key used for return address signing.
    pub enum SignReturnAddressKeyKind: 1 {
        /// APIA key.
        AKey = 0,
        /// APIB key.
        BKey = 1,
    }
    reserved => AKey
}

packed_enum! {
    /// Threading model of the target.
    pub enum ThreadModelKind: 1 {
        /// POSIX threads.
        Posix = 0,
        /// Single-threaded environment.
        Single = 1,
    }
    reserved => Posix
}

packed_enum! {
    /// Width integer arguments are extended to during default promotions.
    pub enum ExtendArgsKind: 1 {
        /// Extend to 32 bits.
        ExtendTo32 = 0,
        /// Extend to 64 bits.
        ExtendTo64 = 1,
    }
    reserved => ExtendTo32
}

packed_enum! {
    /// Mapping of default visibility to exported symbols.
    pub enum DefaultVisibilityExportMapping: 2 {
        /// No mapping.
        None = 0,
        /// Only explicit default visibility is exported.
        Explicit = 1,
        /// All default visibility is exported.
        All = 2,
    }
    reserved => None
}

packed_enum! {
    /// Trailing array members treated as flexible array members.
    pub enum StrictFlexArraysLevelKind: 2 {
        /// Any trailing array.
        Default = 0,
        /// Arrays of undefined, zero or one elements.
        OneZeroOrIncomplete = 1,
        /// Arrays of undefined or zero elements.
        ZeroOrIncomplete = 2,
        /// Arrays of undefined size only.
        IncompleteOnly = 3,
    }
    reserved => Default
}

packed_enum! {
    /// Compiler release whose platform ABI behavior is reproduced.
    pub enum AbiCompat: 4 {
        /// Release 3.8.
        Ver3_8 = 0,
        /// Release 4.0.
        Ver4 = 1,
        /// Release 6.0.
        Ver6 = 2,
        /// Release 7.0.
        Ver7 = 3,
        /// Release 9.0.
        Ver9 = 4,
        /// Release 11.0.
        Ver11 = 5,
        /// Release 12.0.
        Ver12 = 6,
        /// Release 14.0.
        Ver14 = 7,
        /// Release 15.0.
        Ver15 = 8,
        /// Conform to the platform ABI as closely as possible.
        Latest = 9,
    }
    reserved => Latest
}

packed_enum! {
    /// SYCL language revision.
    pub enum SyclMajorVersion: 2 {
        /// Not compiling SYCL.
        None = 0,
        /// SYCL 1.2.1 (2017).
        Sycl2017 = 1,
        /// SYCL 2020.
        Sycl2020 = 2,
    }
    reserved => None
}

packed_enum! {
    /// Kind of translation unit being processed.
    pub enum TranslationUnitKind: 2 {
        /// A complete translation unit.
        Complete = 0,
        /// A prefix of a translation unit, such as a precompiled preamble.
        Prefix = 1,
        /// A module.
        Module = 2,
        /// A complete translation unit that may be extended incrementally.
        Incremental = 3,
    }
    reserved => Complete
}

impl TranslationUnitKind {
    /// Returns true if the unit stops short of its end, so end-of-unit
    /// processing is skipped.
    pub const fn is_prefix(self) -> bool {
        matches!(self, Self::Prefix)
    }
}

impl Default for TranslationUnitKind {
    fn default() -> Self {
        Self::Complete
    }
}

/// Microsoft compiler major versions, as `_MSC_VER`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum MsvcMajorVersion {
    /// Visual C++ 2010.
    Msvc2010 = 1600,
    /// Visual C++ 2012.
    Msvc2012 = 1700,
    /// Visual C++ 2013.
    Msvc2013 = 1800,
    /// Visual C++ 2015.
    Msvc2015 = 1900,
    /// Visual C++ 2017.
    Msvc2017 = 1910,
    /// Visual C++ 2017 15.5.
    Msvc2017_5 = 1912,
    /// Visual C++ 2017 15.7.
    Msvc2017_7 = 1914,
    /// Visual C++ 2019.
    Msvc2019 = 1920,
    /// Visual C++ 2019 16.5.
    Msvc2019_5 = 1925,
    /// Visual C++ 2019 16.8.
    Msvc2019_8 = 1928,
}

impl MsvcMajorVersion {
    /// Returns the `_MSC_VER` value.
    pub const fn msc_ver(self) -> u32 {
        self as u32
    }
}
