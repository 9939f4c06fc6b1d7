//! Values kept in a fixed number of bytes, narrower than their type.
//!
//! [`Packed`] is implemented for every integer and float, and by `#[derive(Enumerated)]`. The
//! [`encode`] and [`decode`] functions are what `#[endload(width = .., order = ..)]` fields of a
//! derived `Encode`/`Decode` expand to.
//!
//! ```
//! use endload::order::BigEndian;
//! use endload::packed;
//!
//! let mut bytes = Vec::new();
//! packed::encode::<i32, 3, BigEndian, _>(&-2, &mut bytes).unwrap();
//! assert_eq!(bytes, [0xff, 0xff, 0xfe]);
//!
//! let mut reader = bytes.as_slice();
//! let value: i32 = packed::decode::<i32, 3, BigEndian, _>(&mut reader).unwrap();
//! assert_eq!(value, -2);
//! ```

use crate::load::load;
use crate::order::ByteOrder;
use crate::store::store;
use crate::Error;
use std::io;

/// A value that can be loaded from and stored to `N` bytes of a byte order.
pub trait Packed: Copy {
    /// Loads a value from the first `N` bytes of `bytes`.
    ///
    /// Fails only if the loaded bits do not form a valid value.
    fn load_packed<const N: usize, O: ByteOrder>(bytes: &[u8]) -> Result<Self, Error>;

    /// Stores the value into the first `N` bytes of `bytes`.
    fn store_packed<const N: usize, O: ByteOrder>(self, bytes: &mut [u8]);
}

macro_rules! impl_packed {
    ($($t:ty)*) => {$(
        impl Packed for $t {
            #[inline]
            fn load_packed<const N: usize, O: ByteOrder>(bytes: &[u8]) -> Result<Self, Error> {
                Ok(load::<Self, N, O>(bytes))
            }

            #[inline]
            fn store_packed<const N: usize, O: ByteOrder>(self, bytes: &mut [u8]) {
                store::<Self, N, O>(self, bytes)
            }
        }
    )*}
}

impl_packed! {
    u8 u16 u32 u64 i8 i16 i32 i64 f32 f64
}

/// Writes `value` as `N` bytes of order `O`.
pub fn encode<T, const N: usize, O, W>(value: &T, writer: &mut W) -> Result<(), Error>
where
    T: Packed,
    O: ByteOrder,
    W: io::Write,
{
    let mut bytes = [0u8; N];
    value.store_packed::<N, O>(&mut bytes);
    writer.write_all(&bytes)?;
    Ok(())
}

/// Reads a value from `N` bytes of order `O`.
pub fn decode<T, const N: usize, O, R>(reader: &mut R) -> Result<T, Error>
where
    T: Packed,
    O: ByteOrder,
    R: io::Read,
{
    let mut bytes = [0u8; N];
    reader.read_exact(&mut bytes)?;
    T::load_packed::<N, O>(&bytes)
}
