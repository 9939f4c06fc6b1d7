//! The value types that loads and stores produce and consume.

use crate::reverse::{Reverse, UintOfSize};
use std::mem;

/// A plain value whose representation is nothing but its bits.
///
/// Every bit pattern of `Bits` is a valid `Self`, and copying the bytes copies the value. The size
/// is always 1, 2, 4 or 8 bytes.
///
/// This trait is sealed. It is implemented for the fixed-width integers and the floats; enums go
/// through [`Enumerated`](crate::Enumerated) instead.
pub trait Scalar: Copy + private::Sealed {
    /// The size of `Self` in bytes.
    const SIZE: usize;

    /// Whether a value can be loaded from fewer than `SIZE` bytes.
    const EXPANDABLE: bool;

    /// Whether the type is a signed integer; decides the fill byte of an expanding load.
    const SIGNED: bool;

    /// The unsigned integer with the same size, used for byte reversal.
    type Bits: Reverse;

    /// Reinterprets the bits as a value.
    fn from_bits(bits: Self::Bits) -> Self;

    /// Reinterprets the value as bits.
    fn to_bits(self) -> Self::Bits;
}

/// A scalar that can be widened from a narrower stored width.
pub trait Integral: Scalar + Eq + Ord {}

macro_rules! impl_integral {
    ($($t:ty: $size:literal, $signed:expr,)*) => {$(
        impl Scalar for $t {
            const SIZE: usize = mem::size_of::<$t>();
            const EXPANDABLE: bool = true;
            const SIGNED: bool = $signed;

            type Bits = UintOfSize<$size>;

            #[inline]
            fn from_bits(bits: Self::Bits) -> Self {
                bits as $t
            }

            #[inline]
            fn to_bits(self) -> Self::Bits {
                self as Self::Bits
            }
        }

        impl Integral for $t {}

        impl private::Sealed for $t {}
    )*}
}

impl_integral! {
    u8: 1, false,
    i8: 1, true,
    u16: 2, false,
    i16: 2, true,
    u32: 4, false,
    i32: 4, true,
    u64: 8, false,
    i64: 8, true,
}

macro_rules! impl_float {
    ($($t:ty: $size:literal,)*) => {$(
        impl Scalar for $t {
            const SIZE: usize = mem::size_of::<$t>();
            const EXPANDABLE: bool = false;
            const SIGNED: bool = false;

            type Bits = UintOfSize<$size>;

            #[inline]
            fn from_bits(bits: Self::Bits) -> Self {
                <$t>::from_bits(bits)
            }

            #[inline]
            fn to_bits(self) -> Self::Bits {
                <$t>::to_bits(self)
            }
        }

        impl private::Sealed for $t {}
    )*}
}

impl_float! {
    f32: 4,
    f64: 8,
}

mod private {
    pub trait Sealed {}
}
