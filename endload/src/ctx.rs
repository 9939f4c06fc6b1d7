//! Types that give context to encoders and decoders.

use std::num::TryFromIntError;

/// The byte order of a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Whatever order the target architecture uses for its own integers.
    Native,
    /// Little-endian (least-significant-byte first).
    Little,
    /// Big-endian (most-significant-byte first).
    Big,
}

impl Order {
    /// The native byte order of the target architecture, as a concrete `Little` or `Big`.
    ///
    /// **Warning** - This should not be used for cross-platform I/O in general. While dealing with
    /// native-endian bytes is marginally more efficient, it may cause incompatibilities if the
    /// data is shared between multiple devices where the native byte orders are different.
    pub const fn native() -> Self {
        #[cfg(target_endian = "big")]
        let order = Self::Big;

        #[cfg(target_endian = "little")]
        let order = Self::Little;

        order
    }

    /// "Network order", an alias for big-endian, the default order.
    pub const fn network() -> Self {
        Self::Big
    }

    /// Replaces `Native` with the concrete order of the target architecture.
    ///
    /// ```
    /// use endload::ctx::Order;
    ///
    /// assert_eq!(Order::Big.resolve(), Order::Big);
    /// assert_eq!(Order::Native.resolve(), Order::native());
    /// ```
    pub const fn resolve(self) -> Self {
        match self {
            Self::Native => Self::native(),
            other => other,
        }
    }

    /// Returns `true` if values stored in this order can be read without reversing bytes.
    pub const fn is_native(self) -> bool {
        // `PartialEq` is not usable in const fn.
        matches!(
            (self.resolve(), Self::native()),
            (Self::Big, Self::Big) | (Self::Little, Self::Little)
        )
    }
}

impl Default for Order {
    /// (Network- / Big-endian) The default order used to encode primitives.
    fn default() -> Self {
        Self::network()
    }
}

/// The number of elements in variable-sized containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Len(pub usize);

impl From<usize> for Len {
    fn from(x: usize) -> Self {
        Len(x)
    }
}

impl From<Len> for usize {
    fn from(Len(x): Len) -> Self {
        x
    }
}

macro_rules! convert_len {
    ($($t:ty)*) => {$(
        impl TryFrom<$t> for Len {
            type Error = TryFromIntError;

            fn try_from(x: $t) -> Result<Self, Self::Error> {
                Ok(Self(usize::try_from(x)?))
            }
        }

        impl TryFrom<Len> for $t {
            type Error = TryFromIntError;

            fn try_from(Len(x): Len) -> Result<Self, Self::Error> {
                Self::try_from(x)
            }
        }
    )*};
}

convert_len! {
    u8 u16 u32 u64 i8 i16 i32 i64
}
