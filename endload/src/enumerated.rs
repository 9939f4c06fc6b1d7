//! Fieldless enums stored as integers.
//!
//! An enum is loaded by loading its `#[repr]` integer through the engine and then matching the
//! result against the declared discriminants. Sign extension therefore follows the signedness of
//! the repr: a `#[repr(i16)]` enum stored in one byte reads `0xff` as `-1`, a `#[repr(u16)]` enum
//! reads it as `255`.
//!
//! ```
//! use endload::{load_enum, Enumerated};
//! use endload::order::BigEndian;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Enumerated)]
//! #[repr(i16)]
//! enum Level {
//!     Low = -1,
//!     High = 1,
//! }
//!
//! assert_eq!(load_enum::<Level, 1, BigEndian>(&[0xff]), Some(Level::Low));
//! assert_eq!(load_enum::<Level, 1, BigEndian>(&[0x01]), Some(Level::High));
//! assert_eq!(load_enum::<Level, 1, BigEndian>(&[0x02]), None);
//! ```

use crate::ctx::Order;
use crate::load::load;
use crate::order::ByteOrder;
use crate::scalar::Integral;
use crate::store::store;
use crate::{Decode, Encode, Error};
use std::{fmt, io};

/// A fieldless enum with an integer representation.
///
/// Usually implemented with `#[derive(Enumerated)]`, which also implements [`Packed`],
/// [`Encode`] and [`Decode`] for the enum.
///
/// [`Packed`]: crate::packed::Packed
pub trait Enumerated: Copy {
    /// The `#[repr]` integer.
    type Repr: Integral + fmt::Display + Encode<Order> + Decode<Order>;

    /// Name of the enum, used in error messages.
    const NAME: &'static str;

    /// The discriminant of this variant.
    fn into_repr(self) -> Self::Repr;

    /// The variant with the given discriminant, if there is one.
    fn from_repr(repr: Self::Repr) -> Option<Self>;
}

/// Loads an enum whose discriminant is stored in `N` bytes of order `O`.
///
/// Returns `None` if the discriminant names no variant.
///
/// # Panics
///
/// Panics if `bytes` is shorter than `N`.
pub fn load_enum<E, const N: usize, O>(bytes: &[u8]) -> Option<E>
where
    E: Enumerated,
    O: ByteOrder,
{
    E::from_repr(load::<E::Repr, N, O>(bytes))
}

/// Like [`load_enum`], but an unknown discriminant is an [`Error`].
pub fn try_load_enum<E, const N: usize, O>(bytes: &[u8]) -> Result<E, Error>
where
    E: Enumerated,
    O: ByteOrder,
{
    let repr = load::<E::Repr, N, O>(bytes);
    E::from_repr(repr).ok_or_else(|| Error::unknown_discriminant(E::NAME, repr))
}

/// Stores the discriminant of `value` into `N` bytes of order `O`.
///
/// # Panics
///
/// Panics if `bytes` is shorter than `N`.
pub fn store_enum<E, const N: usize, O>(value: E, bytes: &mut [u8])
where
    E: Enumerated,
    O: ByteOrder,
{
    store::<E::Repr, N, O>(value.into_repr(), bytes)
}

/// Encodes the discriminant of `value` at the full width of its repr.
pub fn encode<E, W>(value: &E, order: Order, writer: &mut W) -> Result<(), Error>
where
    E: Enumerated,
    W: io::Write,
{
    value.into_repr().encode(order, writer)
}

/// Decodes a full-width discriminant and maps it to a variant.
pub fn decode<E, R>(order: Order, reader: &mut R) -> Result<E, Error>
where
    E: Enumerated,
    R: io::Read,
{
    let repr = E::Repr::decode(order, reader)?;
    E::from_repr(repr).ok_or_else(|| Error::unknown_discriminant(E::NAME, repr))
}
