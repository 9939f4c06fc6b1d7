//! Unaligned integers of any byte width from 1 to 8, in any byte order.
//!
//! [`Unaligned<T, N, O>`](Unaligned) holds exactly `N` bytes and has an alignment of 1, so it can
//! sit anywhere inside a `#[repr(C)]` record or a byte buffer. Reading it goes through
//! [`load`](crate::load::load), writing through [`store`](crate::store::store).
//!
//! Arithmetic works on the loaded values and yields plain integers:
//!
//! ```
//! use endload::unaligned::{BigI24, LittleU16};
//!
//! let mut big = BigI24::new(12345);
//! let little = LittleU16::new(10);
//!
//! assert_eq!(big * 5, 61725);
//! assert_eq!(5 * big, 61725);
//!
//! big += 1;
//! big *= 2;
//! assert_eq!(big, 24692);
//! assert!(big > 24691);
//!
//! let sum: u16 = little + little;
//! assert_eq!(sum, 20);
//! assert_eq!(big.as_bytes(), &[0x00, 0x60, 0x74]);
//! ```

use crate::load::load;
use crate::order::{BigEndian, ByteOrder, LittleEndian, NativeEndian};
use crate::scalar::{Integral, Scalar};
use crate::store::store;
use crate::{Decode, Encode, Error};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use std::{fmt, io, ops};

/// A `T` stored in `N` bytes of byte order `O`.
///
/// Values that need more than `N` bytes are truncated when stored, like a narrowing `as` cast;
/// signed values are sign-extended when loaded.
#[repr(transparent)]
pub struct Unaligned<T, const N: usize, O> {
    bytes: [u8; N],
    _marker: PhantomData<fn() -> (T, O)>,
}

impl<T, const N: usize, O> Unaligned<T, N, O> {
    /// Wraps bytes that are already in the stored representation.
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self {
            bytes,
            _marker: PhantomData,
        }
    }

    /// Returns the stored representation.
    pub const fn to_bytes(self) -> [u8; N] {
        self.bytes
    }

    /// Borrows the stored representation.
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }
}

impl<T, const N: usize, O> Unaligned<T, N, O>
where
    T: Scalar,
    O: ByteOrder,
{
    /// Stores `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        let mut bytes = [0u8; N];
        store::<T, N, O>(value, &mut bytes);
        Self::from_bytes(bytes)
    }

    /// Loads the value.
    #[inline]
    pub fn get(self) -> T {
        load::<T, N, O>(&self.bytes)
    }

    /// Replaces the value.
    #[inline]
    pub fn set(&mut self, value: T) {
        store::<T, N, O>(value, &mut self.bytes)
    }
}

impl<T, const N: usize, O> Clone for Unaligned<T, N, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize, O> Copy for Unaligned<T, N, O> {}

impl<T, const N: usize, O> Default for Unaligned<T, N, O> {
    fn default() -> Self {
        Self::from_bytes([0u8; N])
    }
}

impl<T, const N: usize, O> From<T> for Unaligned<T, N, O>
where
    T: Scalar,
    O: ByteOrder,
{
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, const N: usize, O> fmt::Debug for Unaligned<T, N, O>
where
    T: Scalar + fmt::Debug,
    O: ByteOrder,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}

impl<T, const N: usize, O> fmt::Display for Unaligned<T, N, O>
where
    T: Scalar + fmt::Display,
    O: ByteOrder,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

impl<T, const N: usize, O> FromStr for Unaligned<T, N, O>
where
    T: Scalar + FromStr,
    O: ByteOrder,
{
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::new)
    }
}

impl<T, const N: usize, O, const N2: usize, O2> PartialEq<Unaligned<T, N2, O2>>
    for Unaligned<T, N, O>
where
    T: Scalar + PartialEq,
    O: ByteOrder,
    O2: ByteOrder,
{
    fn eq(&self, other: &Unaligned<T, N2, O2>) -> bool {
        self.get() == other.get()
    }
}

impl<T, const N: usize, O> Eq for Unaligned<T, N, O>
where
    T: Integral,
    O: ByteOrder,
{
}

impl<T, const N: usize, O, const N2: usize, O2> PartialOrd<Unaligned<T, N2, O2>>
    for Unaligned<T, N, O>
where
    T: Scalar + PartialOrd,
    O: ByteOrder,
    O2: ByteOrder,
{
    fn partial_cmp(&self, other: &Unaligned<T, N2, O2>) -> Option<Ordering> {
        self.get().partial_cmp(&other.get())
    }
}

impl<T, const N: usize, O> Ord for Unaligned<T, N, O>
where
    T: Integral,
    O: ByteOrder,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(&other.get())
    }
}

impl<T, const N: usize, O> Hash for Unaligned<T, N, O>
where
    T: Integral + Hash,
    O: ByteOrder,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state)
    }
}

impl<T, const N: usize, O> Encode for Unaligned<T, N, O> {
    fn encode<W>(&self, _ctx: (), writer: &mut W) -> Result<(), Error>
    where
        W: io::Write,
    {
        writer.write_all(&self.bytes)?;
        Ok(())
    }
}

impl<T, const N: usize, O> Decode for Unaligned<T, N, O> {
    fn decode<R>(_ctx: (), reader: &mut R) -> Result<Self, Error>
    where
        R: io::Read,
    {
        let mut bytes = [0u8; N];
        reader.read_exact(&mut bytes)?;
        Ok(Self::from_bytes(bytes))
    }
}

macro_rules! binary_op {
    ($t:ty, $op:ident $method:ident $op_assign:ident $method_assign:ident) => {
        impl<const N: usize, O: ByteOrder> ops::$op<$t> for Unaligned<$t, N, O> {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: $t) -> $t {
                ops::$op::$method(self.get(), rhs)
            }
        }

        impl<const N: usize, O: ByteOrder, const N2: usize, O2: ByteOrder>
            ops::$op<Unaligned<$t, N2, O2>> for Unaligned<$t, N, O>
        {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: Unaligned<$t, N2, O2>) -> $t {
                ops::$op::$method(self.get(), rhs.get())
            }
        }

        impl<const N: usize, O: ByteOrder> ops::$op<Unaligned<$t, N, O>> for $t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: Unaligned<$t, N, O>) -> $t {
                ops::$op::$method(self, rhs.get())
            }
        }

        impl<const N: usize, O: ByteOrder> ops::$op_assign<$t> for Unaligned<$t, N, O> {
            #[inline]
            fn $method_assign(&mut self, rhs: $t) {
                self.set(ops::$op::$method(self.get(), rhs))
            }
        }

        impl<const N: usize, O: ByteOrder, const N2: usize, O2: ByteOrder>
            ops::$op_assign<Unaligned<$t, N2, O2>> for Unaligned<$t, N, O>
        {
            #[inline]
            fn $method_assign(&mut self, rhs: Unaligned<$t, N2, O2>) {
                self.set(ops::$op::$method(self.get(), rhs.get()))
            }
        }
    };
}

macro_rules! compare_with_value {
    ($($t:ty)*) => {$(
        impl<const N: usize, O: ByteOrder> PartialEq<$t> for Unaligned<$t, N, O> {
            fn eq(&self, other: &$t) -> bool {
                self.get() == *other
            }
        }

        impl<const N: usize, O: ByteOrder> PartialEq<Unaligned<$t, N, O>> for $t {
            fn eq(&self, other: &Unaligned<$t, N, O>) -> bool {
                *self == other.get()
            }
        }

        impl<const N: usize, O: ByteOrder> PartialOrd<$t> for Unaligned<$t, N, O> {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                self.get().partial_cmp(other)
            }
        }

        impl<const N: usize, O: ByteOrder> PartialOrd<Unaligned<$t, N, O>> for $t {
            fn partial_cmp(&self, other: &Unaligned<$t, N, O>) -> Option<Ordering> {
                self.partial_cmp(&other.get())
            }
        }

        impl<const N: usize, O: ByteOrder> From<Unaligned<$t, N, O>> for $t {
            fn from(wrapper: Unaligned<$t, N, O>) -> Self {
                wrapper.get()
            }
        }

        binary_op!($t, Add add AddAssign add_assign);
        binary_op!($t, Sub sub SubAssign sub_assign);
        binary_op!($t, Mul mul MulAssign mul_assign);
        binary_op!($t, Div div DivAssign div_assign);
        binary_op!($t, Rem rem RemAssign rem_assign);
    )*}
}

compare_with_value! {
    u8 u16 u32 u64 i8 i16 i32 i64 f32 f64
}

macro_rules! bit_ops {
    ($($t:ty)*) => {$(
        binary_op!($t, BitAnd bitand BitAndAssign bitand_assign);
        binary_op!($t, BitOr bitor BitOrAssign bitor_assign);
        binary_op!($t, BitXor bitxor BitXorAssign bitxor_assign);
        binary_op!($t, Shl shl ShlAssign shl_assign);
        binary_op!($t, Shr shr ShrAssign shr_assign);

        impl<const N: usize, O: ByteOrder> ops::Not for Unaligned<$t, N, O> {
            type Output = $t;

            #[inline]
            fn not(self) -> $t {
                !self.get()
            }
        }
    )*}
}

bit_ops! {
    u8 u16 u32 u64 i8 i16 i32 i64
}

macro_rules! neg {
    ($($t:ty)*) => {$(
        impl<const N: usize, O: ByteOrder> ops::Neg for Unaligned<$t, N, O> {
            type Output = $t;

            #[inline]
            fn neg(self) -> $t {
                -self.get()
            }
        }
    )*}
}

neg! {
    i8 i16 i32 i64 f32 f64
}

macro_rules! aliases {
    ($($name:ident: $t:ty, $n:literal, $order:ty;)*) => {$(
        #[doc = concat!(
            "A `", stringify!($t), "` stored in ", stringify!($n), " bytes, `",
            stringify!($order), "`."
        )]
        pub type $name = Unaligned<$t, $n, $order>;
    )*}
}

aliases! {
    BigI8: i8, 1, BigEndian;
    BigU8: u8, 1, BigEndian;
    BigI16: i16, 2, BigEndian;
    BigU16: u16, 2, BigEndian;
    BigI24: i32, 3, BigEndian;
    BigU24: u32, 3, BigEndian;
    BigI32: i32, 4, BigEndian;
    BigU32: u32, 4, BigEndian;
    BigI40: i64, 5, BigEndian;
    BigU40: u64, 5, BigEndian;
    BigI48: i64, 6, BigEndian;
    BigU48: u64, 6, BigEndian;
    BigI56: i64, 7, BigEndian;
    BigU56: u64, 7, BigEndian;
    BigI64: i64, 8, BigEndian;
    BigU64: u64, 8, BigEndian;
    LittleI8: i8, 1, LittleEndian;
    LittleU8: u8, 1, LittleEndian;
    LittleI16: i16, 2, LittleEndian;
    LittleU16: u16, 2, LittleEndian;
    LittleI24: i32, 3, LittleEndian;
    LittleU24: u32, 3, LittleEndian;
    LittleI32: i32, 4, LittleEndian;
    LittleU32: u32, 4, LittleEndian;
    LittleI40: i64, 5, LittleEndian;
    LittleU40: u64, 5, LittleEndian;
    LittleI48: i64, 6, LittleEndian;
    LittleU48: u64, 6, LittleEndian;
    LittleI56: i64, 7, LittleEndian;
    LittleU56: u64, 7, LittleEndian;
    LittleI64: i64, 8, LittleEndian;
    LittleU64: u64, 8, LittleEndian;
    NativeI8: i8, 1, NativeEndian;
    NativeU8: u8, 1, NativeEndian;
    NativeI16: i16, 2, NativeEndian;
    NativeU16: u16, 2, NativeEndian;
    NativeI24: i32, 3, NativeEndian;
    NativeU24: u32, 3, NativeEndian;
    NativeI32: i32, 4, NativeEndian;
    NativeU32: u32, 4, NativeEndian;
    NativeI40: i64, 5, NativeEndian;
    NativeU40: u64, 5, NativeEndian;
    NativeI48: i64, 6, NativeEndian;
    NativeU48: u64, 6, NativeEndian;
    NativeI56: i64, 7, NativeEndian;
    NativeU56: u64, 7, NativeEndian;
    NativeI64: i64, 8, NativeEndian;
    NativeU64: u64, 8, NativeEndian;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn layout_is_the_stored_bytes() {
        assert_eq!(mem::size_of::<BigI24>(), 3);
        assert_eq!(mem::align_of::<BigI24>(), 1);
        assert_eq!(mem::size_of::<LittleU56>(), 7);
        assert_eq!(mem::align_of::<NativeU64>(), 1);
    }

    #[test]
    fn get_sign_extends() {
        let x = LittleI40::from_bytes([0x00, 0x00, 0x00, 0x00, 0x80]);
        assert_eq!(x.get(), -(1i64 << 39));

        let y = LittleU40::from_bytes([0x00, 0x00, 0x00, 0x00, 0x80]);
        assert_eq!(y.get(), 1u64 << 39);
    }

    #[test]
    fn new_truncates() {
        let x = BigU24::new(0x0102_0304);
        assert_eq!(x.as_bytes(), &[0x02, 0x03, 0x04]);
        assert_eq!(x.get(), 0x02_0304);
    }

    #[test]
    fn compares_across_orders_and_widths() {
        let a = BigI32::new(-7);
        let b = LittleI24::new(-7);
        let c = NativeI16::new(3);
        assert!(a == b);
        assert!(a < LittleI24::new(0));
        assert_eq!(a, -7);
        assert!(-7 == b);
        assert!(c > 2);
        assert!(2 < c);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
    }

    #[test]
    fn mixed_operands() {
        let big = BigI32::new(6);
        let little = LittleI32::new(4);
        assert_eq!(big + little, 10);
        assert_eq!(big - little, 2);
        assert_eq!(big / 4, 1);
        assert_eq!(big % little, 2);
        assert_eq!(-big, -6);
        assert_eq!(!BigU8::new(0x0f), 0xf0);
        assert_eq!(BigU16::new(0x00f0) | 0x000f, 0x00ff);
        assert_eq!(BigU16::new(1) << 4, 16);

        let mut acc = LittleU24::new(1);
        acc += LittleU24::new(2);
        acc <<= 4;
        acc ^= 0x0f;
        assert_eq!(acc, 0x3f);
        assert_eq!(u32::from(acc), 0x3f);
    }

    #[test]
    fn parses_and_prints_the_value() {
        let x: BigI56 = "-1234567".parse().unwrap();
        assert_eq!(x, -1234567);
        assert_eq!(x.to_string(), "-1234567");
        assert_eq!(format!("{:?}", x), "-1234567");
        assert!("zzz".parse::<BigI56>().is_err());
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(NativeI48::default(), 0);
        assert_eq!(Unaligned::<f32, 4, BigEndian>::default(), 0.0);
    }
}
