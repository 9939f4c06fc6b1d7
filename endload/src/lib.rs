//! Byte-order aware loads and stores of narrow integers.
//!
//! The core of this crate is [`load`]: read a `T` that was stored in `N` bytes of a given byte
//! order, converting the order and sign- or zero-extending to the full width of `T` in one step.
//! [`store`] is its mirror. Both pick their strategy per instantiation, and malformed
//! instantiations (a 5-byte `u32`, a 3-byte `f32`) fail to compile instead of failing at runtime.
//!
//! ```
//! use endload::{load, store};
//! use endload::order::{BigEndian, LittleEndian};
//!
//! // 40-bit little-endian counter
//! let bytes = [0x01, 0x02, 0x03, 0x04, 0x85];
//! assert_eq!(load::<u64, 5, LittleEndian>(&bytes), 0x85_0403_0201);
//! assert_eq!(load::<i64, 5, LittleEndian>(&bytes), 0x85_0403_0201 - (1 << 40));
//!
//! let mut out = [0u8; 3];
//! store::<i32, 3, BigEndian>(-8388607, &mut out);
//! assert_eq!(out, [0x80, 0x00, 0x01]);
//! ```
//!
//! On top of the engine sit the [`Unaligned`] wrapper types (`BigI24`, `LittleU40`, ...), the
//! [`Encode`] and [`Decode`] traits for streaming through `std::io`, and derive macros for
//! packed records and fieldless enums.

#![warn(missing_docs)]

pub mod ctx;
#[cfg(feature = "derive")]
pub mod derive;
pub mod enumerated;
mod error;
pub mod load;
pub mod order;
pub mod packed;
pub mod reverse;
pub mod scalar;
pub mod store;
pub mod unaligned;

#[cfg(feature = "derive")]
pub use endload_derive::{Decode, Encode, Enumerated};

#[doc(inline)]
pub use self::enumerated::{load_enum, store_enum, Enumerated};
pub use self::error::Error;
#[doc(inline)]
pub use self::load::load;
#[doc(inline)]
pub use self::scalar::{Integral, Scalar};
#[doc(inline)]
pub use self::store::store;
#[doc(inline)]
pub use self::unaligned::Unaligned;

use self::ctx::{Len, Order};
use std::io;

/// A type that can be encoded into a byte stream.
pub trait Encode<Ctx = ()> {
    /// Encodes `&self` to the given writer.
    fn encode<W>(&self, ctx: Ctx, writer: &mut W) -> Result<(), Error>
    where
        W: io::Write;
}

/// A type that can be decoded from a byte stream.
pub trait Decode<Ctx = ()>: Sized {
    /// Decodes a value from the given reader.
    fn decode<R>(ctx: Ctx, reader: &mut R) -> Result<Self, Error>
    where
        R: io::Read;
}

/// Encodes a value into a new buffer.
///
/// ```
/// use endload::ctx::Order;
///
/// let bytes = endload::to_bytes_with_context(&0xdead_beef_u32, Order::Little).unwrap();
/// assert_eq!(bytes, [0xef, 0xbe, 0xad, 0xde]);
/// ```
pub fn to_bytes_with_context<T, Ctx>(value: &T, ctx: Ctx) -> Result<Vec<u8>, Error>
where
    T: Encode<Ctx>,
{
    let mut bytes = Vec::new();
    value.encode(ctx, &mut bytes)?;
    Ok(bytes)
}

/// Encodes a value with the unit context into a new buffer.
pub fn to_bytes<T>(value: &T) -> Result<Vec<u8>, Error>
where
    T: Encode,
{
    to_bytes_with_context(value, ())
}

/// Decodes a value from a buffer, requiring that every byte is consumed.
///
/// ```
/// use endload::ctx::Order;
///
/// let value: i16 = endload::from_bytes_with_context(&[0xff, 0xfe], Order::Big).unwrap();
/// assert_eq!(value, -2);
///
/// let trailing: Result<i16, _> = endload::from_bytes_with_context(&[0, 0, 0], Order::Big);
/// assert!(trailing.is_err());
/// ```
pub fn from_bytes_with_context<T, Ctx>(mut bytes: &[u8], ctx: Ctx) -> Result<T, Error>
where
    T: Decode<Ctx>,
{
    let value = T::decode(ctx, &mut bytes)?;
    if bytes.is_empty() {
        Ok(value)
    } else {
        Err(Error::new(format!(
            "{} trailing bytes left after decoding",
            bytes.len()
        )))
    }
}

/// Decodes a value with the unit context from a buffer, requiring that every byte is consumed.
pub fn from_bytes<T>(bytes: &[u8]) -> Result<T, Error>
where
    T: Decode,
{
    from_bytes_with_context(bytes, ())
}

impl<T, Ctx> Encode<Ctx> for &T
where
    T: Encode<Ctx>,
{
    fn encode<W>(&self, ctx: Ctx, writer: &mut W) -> Result<(), Error>
    where
        W: io::Write,
    {
        (*self).encode(ctx, writer)
    }
}

impl<T, Ctx> Encode<Ctx> for [T]
where
    T: Encode<Ctx>,
    Ctx: Clone,
{
    fn encode<W>(&self, inner_ctx: Ctx, writer: &mut W) -> Result<(), Error>
    where
        W: io::Write,
    {
        for elem in self {
            elem.encode(inner_ctx.clone(), writer)?;
        }
        Ok(())
    }
}

impl<T, Ctx> Encode<Ctx> for Vec<T>
where
    T: Encode<Ctx>,
    Ctx: Clone,
{
    fn encode<W>(&self, inner_ctx: Ctx, writer: &mut W) -> Result<(), Error>
    where
        W: io::Write,
    {
        self.as_slice().encode(inner_ctx, writer)
    }
}

impl<T, Ctx> Decode<(Len, Ctx)> for Vec<T>
where
    T: Decode<Ctx>,
    Ctx: Clone,
{
    fn decode<R>((Len(len), inner_ctx): (Len, Ctx), reader: &mut R) -> Result<Self, Error>
    where
        R: io::Read,
    {
        let mut acc = Self::with_capacity(len);
        for _ in 0..len {
            acc.push(T::decode(inner_ctx.clone(), reader)?);
        }
        Ok(acc)
    }
}

impl<T> Decode<Len> for Vec<T>
where
    T: Decode,
{
    fn decode<R>(len: Len, reader: &mut R) -> Result<Self, Error>
    where
        R: io::Read,
    {
        Self::decode((len, ()), reader)
    }
}

impl<const K: usize> Encode for [u8; K] {
    fn encode<W>(&self, _: (), writer: &mut W) -> Result<(), Error>
    where
        W: io::Write,
    {
        writer.write_all(self)?;
        Ok(())
    }
}

impl<const K: usize> Decode for [u8; K] {
    fn decode<R>(_: (), reader: &mut R) -> Result<Self, Error>
    where
        R: io::Read,
    {
        let mut bytes = [0u8; K];
        reader.read_exact(&mut bytes)?;
        Ok(bytes)
    }
}

macro_rules! impl_primitive {
    ($($t:ty: $size:literal)*) => {$(
        impl Encode<Order> for $t {
            fn encode<W>(&self, order: Order, writer: &mut W) -> Result<(), Error>
            where
                W: io::Write,
            {
                let mut bytes = [0u8; $size];
                store::store_with::<$t, $size>(*self, &mut bytes, order);
                writer.write_all(&bytes)?;
                Ok(())
            }
        }

        impl Encode for $t {
            fn encode<W>(&self, _: (), writer: &mut W) -> Result<(), Error>
            where
                W: io::Write,
            {
                self.encode(Order::default(), writer)
            }
        }

        impl Decode<Order> for $t {
            fn decode<R>(order: Order, reader: &mut R) -> Result<Self, Error>
            where
                R: io::Read,
            {
                let mut bytes = [0u8; $size];
                reader.read_exact(&mut bytes)?;
                Ok(load::load_with::<$t, $size>(&bytes, order))
            }
        }

        impl Decode for $t {
            fn decode<R>(_: (), reader: &mut R) -> Result<Self, Error>
            where
                R: io::Read,
            {
                Self::decode(Order::default(), reader)
            }
        }
    )*}
}

impl_primitive! {
    u8: 1 u16: 2 u32: 4 u64: 8 i8: 1 i16: 2 i32: 4 i64: 8 f32: 4 f64: 8
}

// Generated code refers to these through `endload::export`.
#[doc(hidden)]
pub mod export {
    pub use std::io;
}
