//! Byte orders at the type level.
//!
//! Loads and stores take their order as a type parameter so that the strategy they use is fixed
//! per instantiation. The runtime [`Order`] value is still available through
//! [`ByteOrder::ORDER`].

use crate::ctx::Order;
use std::fmt::Debug;
use std::hash::Hash;

/// A byte order known at compile time.
///
/// This trait is sealed; the only implementors are [`BigEndian`], [`LittleEndian`] and
/// [`NativeEndian`].
pub trait ByteOrder:
    private::Sealed + Debug + Default + Clone + Copy + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// The runtime value of this order.
    const ORDER: Order;
}

/// Big-endian (most-significant-byte first).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigEndian;

/// Little-endian (least-significant-byte first).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LittleEndian;

/// The byte order of the target architecture.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NativeEndian;

impl ByteOrder for BigEndian {
    const ORDER: Order = Order::Big;
}

impl ByteOrder for LittleEndian {
    const ORDER: Order = Order::Little;
}

impl ByteOrder for NativeEndian {
    const ORDER: Order = Order::Native;
}

mod private {
    pub trait Sealed {}

    impl Sealed for super::BigEndian {}
    impl Sealed for super::LittleEndian {}
    impl Sealed for super::NativeEndian {}
}
