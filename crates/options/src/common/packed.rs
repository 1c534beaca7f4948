//! Bit encoding of packed field values.
//!
//! Every option stored in a packed record is a small value that occupies a
//! fixed number of bits. This module provides:
//! 1. **Encoding:** The `PackedField` trait converting values to and from raw bits.
//! 2. **Masks:** Helpers for building width and range masks.
//! 3. **Enumerations:** The `packed_enum!` generator for fixed-width enums.
//! 4. **Wire Form:** The serialized type of each value, wide enough that
//!    out-of-range input still parses and is truncated on load.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Returns a mask with the low `width` bits set.
///
/// Widths of 32 or more saturate to a full mask.
#[inline(always)]
pub const fn low_bits(width: u32) -> u32 {
    if width >= u32::BITS {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

/// Returns the mask covering `width` bits starting at `shift`.
#[inline(always)]
pub const fn range_mask(shift: u32, width: u32) -> u32 {
    if width == 0 {
        0
    } else {
        low_bits(width) << shift
    }
}

/// A value that can live in a fixed-width bit range.
///
/// `from_bits` is total: it accepts any bit pattern, so decoding a record
/// from an opaque integer never fails.
pub trait PackedField: Copy + Eq + std::fmt::Debug {
    /// Narrowest field width that holds every value of the type.
    ///
    /// Integer types report 1 because they accept any width and are
    /// truncated on store.
    const REQUIRED_WIDTH: u32;

    /// Serialized form of the value.
    type Wire: Serialize + DeserializeOwned;

    /// Returns the raw encoding of the value.
    fn to_bits(self) -> u32;

    /// Decodes a raw bit pattern.
    fn from_bits(bits: u32) -> Self;

    /// Returns the serialized form.
    fn to_wire(self) -> Self::Wire;

    /// Decodes a serialized value stored in a field of `width` bits,
    /// dropping excess high bits.
    fn from_wire(wire: Self::Wire, width: u32) -> Self;
}

impl PackedField for bool {
    const REQUIRED_WIDTH: u32 = 1;

    type Wire = Self;

    #[inline(always)]
    fn to_bits(self) -> u32 {
        self as u32
    }

    #[inline(always)]
    fn from_bits(bits: u32) -> Self {
        bits & 1 != 0
    }

    #[inline(always)]
    fn to_wire(self) -> Self::Wire {
        self
    }

    #[inline(always)]
    fn from_wire(wire: Self::Wire, _width: u32) -> Self {
        wire
    }
}

macro_rules! packed_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PackedField for $ty {
                const REQUIRED_WIDTH: u32 = 1;

                // Read wide so values above the Rust type still truncate.
                type Wire = u64;

                #[inline(always)]
                fn to_bits(self) -> u32 {
                    self as u32
                }

                #[inline(always)]
                fn from_bits(bits: u32) -> Self {
                    bits as $ty
                }

                #[inline(always)]
                fn to_wire(self) -> Self::Wire {
                    self as u64
                }

                #[inline(always)]
                fn from_wire(wire: Self::Wire, width: u32) -> Self {
                    (wire & u64::from(low_bits(width))) as $ty
                }
            }
        )*
    };
}

packed_unsigned!(u8, u16, u32);

/// Declares a fixed-width enumeration usable as a packed field.
///
/// The enum gets `PackedField`, serde support and the usual value-type
/// derives. Every discriminant is checked at compile time to fit the
/// declared width; bit patterns with no variant decode as the variant
/// named after `reserved =>`.
///
/// ```ignore
/// packed_enum! {
///     /// Thread model.
///     pub enum ThreadModelKind: 1 {
///         Posix = 0,
///         Single = 1,
///     }
///     reserved => Posix
/// }
/// ```
macro_rules! packed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $width:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal
            ),+ $(,)?
        }
        reserved => $fallback:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the variant name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }

        const _: () = {
            $(
                assert!(
                    ($value as u32) <= $crate::common::packed::low_bits($width),
                    concat!(stringify!($name), "::", stringify!($variant), " does not fit its width"),
                );
            )+
        };

        impl $crate::common::packed::PackedField for $name {
            const REQUIRED_WIDTH: u32 = $width;

            type Wire = Self;

            #[inline(always)]
            fn to_bits(self) -> u32 {
                self as u32
            }

            #[inline(always)]
            fn from_bits(bits: u32) -> Self {
                match bits & $crate::common::packed::low_bits($width) {
                    $(b if b == $value => Self::$variant,)+
                    _ => Self::$fallback,
                }
            }

            #[inline(always)]
            fn to_wire(self) -> Self::Wire {
                self
            }

            #[inline(always)]
            fn from_wire(wire: Self::Wire, _width: u32) -> Self {
                wire
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

pub(crate) use packed_enum;
