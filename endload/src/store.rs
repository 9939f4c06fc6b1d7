//! The store path, mirroring [`load`](crate::load::load).
//!
//! A store writes the low-order `N` bytes of a value in the requested byte order. Bytes that do
//! not fit are dropped, the same as a narrowing `as` cast.
//!
//! ```
//! use endload::{load, store};
//! use endload::order::LittleEndian;
//!
//! let mut buf = [0u8; 3];
//! store::<i32, 3, LittleEndian>(-2, &mut buf);
//! assert_eq!(buf, [0xfe, 0xff, 0xff]);
//! assert_eq!(load::<i32, 3, LittleEndian>(&buf), -2);
//! ```

use crate::ctx::Order;
use crate::load::{check, narrow_offset, Plan, Strategy};
use crate::order::{BigEndian, ByteOrder, LittleEndian, NativeEndian};
use crate::reverse::Reverse;
use crate::scalar::Scalar;

/// Stores `value` into the first `N` bytes of `bytes`, in order `O`.
///
/// # Panics
///
/// Panics if `bytes` is shorter than `N`.
#[inline]
pub fn store<T, const N: usize, O>(value: T, bytes: &mut [u8])
where
    T: Scalar,
    O: ByteOrder,
{
    match Plan::<T, N, O>::STRATEGY {
        Strategy::DirectCopy => value.to_bits().write_ne(bytes),
        Strategy::ReversingCopy => value.to_bits().reverse().write_ne(bytes),
        // narrower stored width
        Strategy::ExpandingLoad => truncating_store::<T, O>(value, N, bytes),
    }
}

/// Stores `value` into the first `N` bytes of `bytes`, with the byte order chosen at runtime.
///
/// # Panics
///
/// Panics if `bytes` is shorter than `N`.
#[inline]
pub fn store_with<T, const N: usize>(value: T, bytes: &mut [u8], order: Order)
where
    T: Scalar,
{
    match order {
        Order::Native => store::<T, N, NativeEndian>(value, bytes),
        Order::Little => store::<T, N, LittleEndian>(value, bytes),
        Order::Big => store::<T, N, BigEndian>(value, bytes),
    }
}

#[inline]
fn truncating_store<T, O>(value: T, width: usize, bytes: &mut [u8])
where
    T: Scalar,
    O: ByteOrder,
{
    let mut scratch = [0u8; 8];
    let scratch = &mut scratch[..T::SIZE];
    match Strategy::select(T::SIZE, T::SIZE, O::ORDER) {
        Strategy::DirectCopy => value.to_bits().write_ne(scratch),
        _ => value.to_bits().reverse().write_ne(scratch),
    }

    let offset = narrow_offset(T::SIZE, width, O::ORDER);
    bytes[..width].copy_from_slice(&scratch[offset..offset + width]);
}

macro_rules! const_stores {
    ($($name:ident: $t:ty, $bits:ty, $size:literal;)*) => {$(
        #[doc = concat!("Stores a `", stringify!($t), "` into `N` bytes of `order`, in const context.")]
        ///
        /// Runs the same strategies as [`store`]; `N` outside the valid range fails to compile.
        pub const fn $name<const N: usize>(value: $t, order: Order) -> [u8; N] {
            const { check($size, N, true) };
            let full = if order.is_native() {
                (value as $bits).to_ne_bytes()
            } else {
                (value as $bits).swap_bytes().to_ne_bytes()
            };

            let offset = narrow_offset($size, N, order);
            let mut out = [0u8; N];
            let mut i = 0;
            while i < N {
                out[i] = full[offset + i];
                i += 1;
            }
            out
        }
    )*}
}

const_stores! {
    store_u8: u8, u8, 1;
    store_i8: i8, u8, 1;
    store_u16: u16, u16, 2;
    store_i16: i16, u16, 2;
    store_u32: u32, u32, 4;
    store_i32: i32, u32, 4;
    store_u64: u64, u64, 8;
    store_i64: i64, u64, 8;
}
