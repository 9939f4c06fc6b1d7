//! The load engine.
//!
//! A load reads a value of type `T` (1, 2, 4 or 8 bytes) that was stored in `N` bytes of some
//! byte order. Which of the three strategies runs is decided once per `(T, N, O)` instantiation
//! by [`Plan::STRATEGY`]:
//!
//! - [`Strategy::DirectCopy`] - `N` equals the size of `T` and the stored order is native, or `T`
//!   is a single byte.
//! - [`Strategy::ReversingCopy`] - `N` equals the size of `T` and the stored order is foreign.
//! - [`Strategy::ExpandingLoad`] - `N` is smaller than `T`. The stored bytes are placed into a
//!   full-width scratch buffer, padded with a sign or zero extension byte, and the engine is
//!   entered again at full width, which always ends in one of the two copies.
//!
//! # Examples
//!
//! ```
//! use endload::load;
//! use endload::order::{BigEndian, LittleEndian};
//!
//! // A 24-bit big-endian integer with the sign bit set.
//! let x: i32 = load::<i32, 3, BigEndian>(&[0x80, 0x00, 0x01]);
//! assert_eq!(x, -8388607);
//!
//! // Unsigned targets never sign-extend.
//! let y: u32 = load::<u32, 2, LittleEndian>(&[0x34, 0x12]);
//! assert_eq!(y, 0x1234);
//! ```
//!
//! Instantiations that make no sense are rejected when they are compiled:
//!
//! ```compile_fail
//! use endload::load;
//! use endload::order::BigEndian;
//!
//! // Floats have no sign or zero extension.
//! let x: f32 = load::<f32, 3, BigEndian>(&[0, 0, 0]);
//! ```
//!
//! ```compile_fail
//! use endload::load;
//! use endload::order::BigEndian;
//!
//! // Five bytes do not fit in a u32.
//! let x: u32 = load::<u32, 5, BigEndian>(&[0; 5]);
//! ```

use crate::ctx::Order;
use crate::order::{BigEndian, ByteOrder, LittleEndian, NativeEndian};
use crate::reverse::Reverse;
use crate::scalar::Scalar;
use std::marker::PhantomData;

/// The algorithm a load (or the mirrored store) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Same width, native order: the bytes are the value. A single byte has no byte order, so
    /// one-byte values always take this path.
    DirectCopy,
    /// Same width, foreign order: the whole register is reversed.
    ReversingCopy,
    /// Narrower stored width: the value is extended to full width first.
    ExpandingLoad,
}

impl Strategy {
    /// Picks the strategy for a `size`-byte value stored in `width` bytes of `order`.
    ///
    /// ```
    /// use endload::ctx::Order;
    /// use endload::load::Strategy;
    ///
    /// assert_eq!(Strategy::select(4, 3, Order::Big), Strategy::ExpandingLoad);
    /// assert_eq!(Strategy::select(4, 4, Order::Native), Strategy::DirectCopy);
    /// assert_eq!(Strategy::select(1, 1, Order::Big), Strategy::DirectCopy);
    /// ```
    pub const fn select(size: usize, width: usize, order: Order) -> Self {
        if width < size {
            Self::ExpandingLoad
        } else if size == 1 || order.is_native() {
            Self::DirectCopy
        } else {
            Self::ReversingCopy
        }
    }
}

/// Rejects a malformed `(size, width)` pairing. Only ever evaluated in const context.
pub(crate) const fn check(size: usize, width: usize, expandable: bool) {
    assert!(
        size == 1 || size == 2 || size == 4 || size == 8,
        "the target type must be 1, 2, 4 or 8 bytes"
    );
    assert!(
        width >= 1 && width <= size,
        "the stored width must be between 1 and the size of the target type"
    );
    assert!(
        width == size || expandable,
        "only integers can be stored in fewer bytes than their size"
    );
}

/// The strategy chosen for loading (or storing) a `T` kept in `N` bytes of order `O`.
///
/// Reading [`Plan::STRATEGY`] also checks the instantiation; a type that is not 1, 2, 4 or 8
/// bytes, an `N` outside `1..=size`, or a non-integer `T` with `N` below its size fails to
/// compile.
#[derive(Debug)]
pub struct Plan<T, const N: usize, O>(PhantomData<(T, O)>);

impl<T, const N: usize, O> Plan<T, N, O>
where
    T: Scalar,
    O: ByteOrder,
{
    /// The selected strategy.
    pub const STRATEGY: Strategy = {
        check(T::SIZE, N, T::EXPANDABLE);
        Strategy::select(T::SIZE, N, O::ORDER)
    };
}

/// Offset of the stored bytes inside a full-width buffer: the high end for big-endian, the low
/// end for little-endian.
pub(crate) const fn narrow_offset(size: usize, width: usize, order: Order) -> usize {
    match order.resolve() {
        Order::Big => size - width,
        _ => 0,
    }
}

/// The extension byte for `width` stored bytes of `order`.
///
/// `0xff` if `signed` and the most significant stored byte (`bytes[0]` for big-endian,
/// `bytes[width - 1]` for little-endian) has its high bit set, otherwise `0x00`. `width` is at
/// least 1.
pub(crate) const fn fill_byte(bytes: &[u8], width: usize, order: Order, signed: bool) -> u8 {
    let msb = match order.resolve() {
        Order::Big => bytes[0],
        _ => bytes[width - 1],
    };
    if signed && msb & 0x80 != 0 {
        0xff
    } else {
        0x00
    }
}

/// Builds the `M`-byte scratch buffer of an expanding load.
///
/// The `width` stored bytes keep their relative order and sit at the end matching `order`; the
/// remaining bytes hold the `fill_byte`. `width` is between 1 and `M`, and `bytes` holds at least
/// `width` bytes.
pub(crate) const fn widen<const M: usize>(
    bytes: &[u8],
    width: usize,
    order: Order,
    signed: bool,
) -> [u8; M] {
    let mut scratch = [fill_byte(bytes, width, order, signed); M];
    let offset = narrow_offset(M, width, order);
    let mut i = 0;
    while i < width {
        scratch[offset + i] = bytes[i];
        i += 1;
    }
    scratch
}

/// Loads a `T` stored in `N` bytes of order `O` from the front of `bytes`.
///
/// The result is in native order, sign-extended if `T` is signed and `N` is smaller than `T`.
///
/// # Panics
///
/// Panics if `bytes` is shorter than `N`.
#[inline]
pub fn load<T, const N: usize, O>(bytes: &[u8]) -> T
where
    T: Scalar,
    O: ByteOrder,
{
    match Plan::<T, N, O>::STRATEGY {
        Strategy::DirectCopy => direct_copy(bytes),
        Strategy::ReversingCopy => reversing_copy(bytes),
        Strategy::ExpandingLoad => expanding_load::<T, O>(bytes, N),
    }
}

/// Loads a `T` stored in `N` bytes, with the byte order chosen at runtime.
///
/// ```
/// use endload::ctx::Order;
/// use endload::load::load_with;
///
/// assert_eq!(load_with::<i16, 1>(&[0xfe], Order::Little), -2);
/// assert_eq!(load_with::<u16, 2>(&[0x01, 0x02], Order::Big), 0x0102);
/// ```
///
/// # Panics
///
/// Panics if `bytes` is shorter than `N`.
#[inline]
pub fn load_with<T, const N: usize>(bytes: &[u8], order: Order) -> T
where
    T: Scalar,
{
    match order {
        Order::Native => load::<T, N, NativeEndian>(bytes),
        Order::Little => load::<T, N, LittleEndian>(bytes),
        Order::Big => load::<T, N, BigEndian>(bytes),
    }
}

#[inline]
fn direct_copy<T: Scalar>(bytes: &[u8]) -> T {
    T::from_bits(T::Bits::read_ne(bytes))
}

#[inline]
fn reversing_copy<T: Scalar>(bytes: &[u8]) -> T {
    let mut tmp = T::Bits::read_ne(bytes);
    tmp.reverse_inplace();
    T::from_bits(tmp)
}

#[inline]
fn expanding_load<T, O>(bytes: &[u8], width: usize) -> T
where
    T: Scalar,
    O: ByteOrder,
{
    match T::SIZE {
        2 => full_width::<T, O>(&widen::<2>(bytes, width, O::ORDER, T::SIGNED)),
        4 => full_width::<T, O>(&widen::<4>(bytes, width, O::ORDER, T::SIGNED)),
        8 => full_width::<T, O>(&widen::<8>(bytes, width, O::ORDER, T::SIGNED)),
        size => unreachable!("no expanding load into {} bytes", size),
    }
}

#[inline]
fn full_width<T, O>(bytes: &[u8]) -> T
where
    T: Scalar,
    O: ByteOrder,
{
    match Strategy::select(T::SIZE, T::SIZE, O::ORDER) {
        Strategy::DirectCopy => direct_copy(bytes),
        _ => reversing_copy(bytes),
    }
}

const fn copy<const M: usize>(bytes: &[u8]) -> [u8; M] {
    let mut out = [0u8; M];
    let mut i = 0;
    while i < M {
        out[i] = bytes[i];
        i += 1;
    }
    out
}

macro_rules! const_loads {
    ($($name:ident: $t:ty, $bits:ty, $size:literal, $signed:literal;)*) => {$(
        #[doc = concat!("Loads a `", stringify!($t), "` stored in `N` bytes of `order`, in const context.")]
        ///
        /// Runs the same strategies as [`load`]; `N` outside the valid range fails to compile.
        ///
        /// # Panics
        ///
        /// Panics (or fails const evaluation) if `bytes` is shorter than `N`.
        pub const fn $name<const N: usize>(bytes: &[u8], order: Order) -> $t {
            const { check($size, N, true) };
            match Strategy::select($size, N, order) {
                Strategy::DirectCopy => <$bits>::from_ne_bytes(copy::<$size>(bytes)) as $t,
                Strategy::ReversingCopy => {
                    <$bits>::from_ne_bytes(copy::<$size>(bytes)).swap_bytes() as $t
                }
                Strategy::ExpandingLoad => {
                    $name::<$size>(&widen::<$size>(bytes, N, order, $signed), order)
                }
            }
        }
    )*}
}

const_loads! {
    load_u8: u8, u8, 1, false;
    load_i8: i8, u8, 1, true;
    load_u16: u16, u16, 2, false;
    load_i16: i16, u16, 2, true;
    load_u32: u32, u32, 4, false;
    load_i32: i32, u32, 4, true;
    load_u64: u64, u64, 8, false;
    load_i64: i64, u64, 8, true;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Value of `bytes` read as a `width`-byte integer, computed arithmetically.
    fn reference(bytes: &[u8], order: Order, signed: bool) -> i128 {
        let mut value: i128 = 0;
        let ordered: Vec<u8> = match order.resolve() {
            Order::Big => bytes.to_vec(),
            _ => bytes.iter().rev().copied().collect(),
        };
        for byte in ordered {
            value = (value << 8) | i128::from(byte);
        }
        let bits = 8 * bytes.len() as u32;
        if signed && value >> (bits - 1) != 0 {
            value -= 1 << bits;
        }
        value
    }

    const SAMPLES: [[u8; 8]; 4] = [
        [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef],
        [0xef, 0xcd, 0xab, 0x89, 0x67, 0x45, 0x23, 0x01],
        [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80],
        [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff],
    ];

    macro_rules! case_table {
        ($($t:ty: $($n:literal)*;)*) => {$($(
            for bytes in SAMPLES.iter() {
                let bytes = &bytes[..$n];
                assert_eq!(
                    i128::from(load::<$t, $n, BigEndian>(bytes)),
                    reference(bytes, Order::Big, <$t as Scalar>::SIGNED),
                    "{} from {} big-endian bytes {:02x?}", stringify!($t), $n, bytes,
                );
                assert_eq!(
                    i128::from(load::<$t, $n, LittleEndian>(bytes)),
                    reference(bytes, Order::Little, <$t as Scalar>::SIGNED),
                    "{} from {} little-endian bytes {:02x?}", stringify!($t), $n, bytes,
                );
                assert_eq!(
                    i128::from(load::<$t, $n, NativeEndian>(bytes)),
                    reference(bytes, Order::Native, <$t as Scalar>::SIGNED),
                    "{} from {} native-endian bytes {:02x?}", stringify!($t), $n, bytes,
                );
            }
        )*)*}
    }

    #[test]
    fn every_width_and_order() {
        case_table! {
            u8: 1;
            i8: 1;
            u16: 1 2;
            i16: 1 2;
            u32: 1 2 3 4;
            i32: 1 2 3 4;
            u64: 1 2 3 4 5 6 7 8;
            i64: 1 2 3 4 5 6 7 8;
        }
    }

    macro_rules! const_matches_generic {
        ($($name:ident: $t:ty: $($n:literal)*;)*) => {$($(
            for bytes in SAMPLES.iter() {
                for order in [Order::Big, Order::Little, Order::Native] {
                    assert_eq!(
                        $name::<$n>(bytes, order),
                        load_with::<$t, $n>(bytes, order),
                        "{}::<{}> {:?}", stringify!($name), $n, order,
                    );
                }
            }
        )*)*}
    }

    #[test]
    fn const_loads_agree_with_generic_loads() {
        const_matches_generic! {
            load_u8: u8: 1;
            load_i8: i8: 1;
            load_u16: u16: 1 2;
            load_i16: i16: 1 2;
            load_u32: u32: 1 2 3 4;
            load_i32: i32: 1 2 3 4;
            load_u64: u64: 1 2 3 4 5 6 7 8;
            load_i64: i64: 1 2 3 4 5 6 7 8;
        }
    }

    #[test]
    fn const_load_in_const_item() {
        const X: i32 = load_i32::<3>(&[0x80, 0x00, 0x01], Order::Big);
        const Y: u64 = load_u64::<5>(&[0x01, 0x02, 0x03, 0x04, 0x05], Order::Little);
        assert_eq!(X, -8388607);
        assert_eq!(Y, 0x05_0403_0201);
    }

    #[test]
    fn strategy_per_instantiation() {
        let foreign = match Order::native() {
            Order::Big => Order::Little,
            _ => Order::Big,
        };
        assert_eq!(Strategy::select(8, 8, Order::Native), Strategy::DirectCopy);
        assert_eq!(Strategy::select(8, 8, Order::native()), Strategy::DirectCopy);
        assert_eq!(Strategy::select(8, 8, foreign), Strategy::ReversingCopy);
        assert_eq!(Strategy::select(8, 7, Order::Native), Strategy::ExpandingLoad);
        assert_eq!(Plan::<i64, 5, BigEndian>::STRATEGY, Strategy::ExpandingLoad);
        assert_eq!(Plan::<f64, 8, NativeEndian>::STRATEGY, Strategy::DirectCopy);
    }

    #[test]
    fn single_byte_is_never_reversed() {
        for order in [Order::Big, Order::Little, Order::Native] {
            assert_eq!(Strategy::select(1, 1, order), Strategy::DirectCopy);
        }
        assert_eq!(Plan::<u8, 1, BigEndian>::STRATEGY, Strategy::DirectCopy);
        assert_eq!(Plan::<u8, 1, LittleEndian>::STRATEGY, Strategy::DirectCopy);
        assert_eq!(Plan::<i8, 1, BigEndian>::STRATEGY, Strategy::DirectCopy);
        assert_eq!(Plan::<i8, 1, LittleEndian>::STRATEGY, Strategy::DirectCopy);
        assert_eq!(load::<i8, 1, LittleEndian>(&[0x80]), -128);
        assert_eq!(load_i8::<1>(&[0x80], Order::Big), -128);
    }

    #[test]
    fn fill_byte_follows_most_significant_stored_byte() {
        assert_eq!(fill_byte(&[0x80, 0x00], 2, Order::Big, true), 0xff);
        assert_eq!(fill_byte(&[0x80, 0x00], 2, Order::Little, true), 0x00);
        assert_eq!(fill_byte(&[0x00, 0x80], 2, Order::Little, true), 0xff);
        assert_eq!(fill_byte(&[0x80, 0x00], 2, Order::Big, false), 0x00);
    }

    #[test]
    fn widen_places_bytes_by_source_order() {
        assert_eq!(
            widen::<4>(&[0x80, 0x00, 0x01], 3, Order::Big, true),
            [0xff, 0x80, 0x00, 0x01]
        );
        assert_eq!(
            widen::<4>(&[0x34, 0x12], 2, Order::Little, true),
            [0x34, 0x12, 0x00, 0x00]
        );
        assert_eq!(
            widen::<8>(&[0xaa, 0xbb, 0xcc], 3, Order::Little, false),
            [0xaa, 0xbb, 0xcc, 0, 0, 0, 0, 0]
        );
        assert_eq!(
            widen::<8>(&[0xaa, 0xbb, 0xcc], 3, Order::Big, false),
            [0, 0, 0, 0, 0, 0xaa, 0xbb, 0xcc]
        );
        assert_eq!(
            widen::<8>(&[0xaa, 0xbb, 0xcc], 3, Order::Big, true),
            [0xff, 0xff, 0xff, 0xff, 0xff, 0xaa, 0xbb, 0xcc]
        );
        assert_eq!(widen::<2>(&[0x7f], 1, Order::Little, true), [0x7f, 0x00]);
    }

    #[test]
    fn floats_load_at_full_width() {
        let bytes = 1.5f64.to_be_bytes();
        assert_eq!(load::<f64, 8, BigEndian>(&bytes), 1.5);
        let bytes = (-0.25f32).to_le_bytes();
        assert_eq!(load::<f32, 4, LittleEndian>(&bytes), -0.25);
    }

    #[test]
    #[should_panic]
    fn short_buffer_panics() {
        load::<u32, 3, BigEndian>(&[0x01, 0x02]);
    }
}
