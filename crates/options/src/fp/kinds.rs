//! Floating-point option enumerations.
//!
//! | Enum              | Width | Values                                    |
//! |-------------------|-------|-------------------------------------------|
//! | `FpModeKind`      | 2     | Off, On, Fast, FastHonorPragmas           |
//! | `FpExceptionMode` | 2     | Ignore, MayTrap, Strict, Default          |
//! | `RoundingMode`    | 3     | TowardZero .. NearestTiesToAway, Dynamic  |
//! | `FpEvalMethod`    | 2     | Source, Double, Extended, Unset           |

use crate::common::packed::packed_enum;

packed_enum! {
    /// Floating-point contraction mode (fusing operations such as FMA).
    pub enum FpModeKind: 2 {
        /// Never fuse.
        Off = 0,
        /// Fuse within a statement.
        On = 1,
        /// Fuse across statements, disregarding pragmas.
        Fast = 2,
        /// Fuse across statements but honor pragmas.
        FastHonorPragmas = 3,
    }
    reserved => Off
}

packed_enum! {
    /// Floating-point exception behavior.
    pub enum FpExceptionMode: 2 {
        /// Exceptions are assumed masked.
        Ignore = 0,
        /// Transformations do not raise new exceptions but may hide some.
        MayTrap = 1,
        /// Exception semantics are preserved exactly.
        Strict = 2,
        /// Not specified; resolved from float-environment access.
        Default = 3,
    }
    reserved => Default
}

packed_enum! {
    /// IEEE-754 rounding direction.
    ///
    /// Encodings 5 and 6 are unused and decode as `Dynamic`.
    pub enum RoundingMode: 3 {
        /// Round towards zero.
        TowardZero = 0,
        /// Round to nearest, ties to even (IEEE default).
        NearestTiesToEven = 1,
        /// Round towards +infinity.
        TowardPositive = 2,
        /// Round towards -infinity.
        TowardNegative = 3,
        /// Round to nearest, ties away from zero.
        NearestTiesToAway = 4,
        /// Determined by the floating-point environment at run time.
        Dynamic = 7,
    }
    reserved => Dynamic
}

packed_enum! {
    /// Type used to evaluate floating-point expressions.
    pub enum FpEvalMethod: 2 {
        /// Use the declared type.
        Source = 0,
        /// Use `double`.
        Double = 1,
        /// Use the extended type.
        Extended = 2,
        /// Nothing given on the command line; the target decides.
        UnsetOnCommandLine = 3,
    }
    reserved => UnsetOnCommandLine
}
