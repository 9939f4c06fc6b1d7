//! Whole-register byte reversal, and the mapping from a byte width to the unsigned integer of
//! exactly that width.

use std::mem;

/// An unsigned integer register whose byte sequence can be reversed in place.
///
/// Reversal always covers the entire register: byte `i` trades places with byte `SIZE - 1 - i`.
pub trait Reverse: Copy + Eq + private::Sealed {
    /// Width of the register in bytes.
    const SIZE: usize;

    /// Returns the register with its bytes in the opposite order.
    fn reverse(self) -> Self;

    /// Reverses the bytes of the register in place.
    fn reverse_inplace(&mut self) {
        *self = self.reverse();
    }

    /// Reads `SIZE` bytes from the front of `bytes` without reordering them.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than `SIZE`.
    fn read_ne(bytes: &[u8]) -> Self;

    /// Writes the register to the front of `bytes` without reordering it.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than `SIZE`.
    fn write_ne(self, bytes: &mut [u8]);
}

macro_rules! impl_reverse {
    ($($t:ty)*) => {$(
        impl Reverse for $t {
            const SIZE: usize = mem::size_of::<$t>();

            #[inline]
            fn reverse(self) -> Self {
                self.swap_bytes()
            }

            #[inline]
            fn read_ne(bytes: &[u8]) -> Self {
                let mut raw = [0u8; mem::size_of::<$t>()];
                raw.copy_from_slice(&bytes[..Self::SIZE]);
                Self::from_ne_bytes(raw)
            }

            #[inline]
            fn write_ne(self, bytes: &mut [u8]) {
                bytes[..Self::SIZE].copy_from_slice(&self.to_ne_bytes());
            }
        }

        impl private::Sealed for $t {}
    )*}
}

impl_reverse! {
    u8 u16 u32 u64
}

/// A byte width, used to name the unsigned integer of that width through [`BySize`].
#[derive(Debug, Clone, Copy)]
pub struct Width<const N: usize>;

/// Maps a [`Width`] to the unsigned integer type occupying exactly that many bytes.
///
/// ```
/// use endload::reverse::{BySize, Width};
///
/// let x: <Width<2> as BySize>::Uint = 0xbeef_u16;
/// assert_eq!(x, 0xbeef);
/// ```
pub trait BySize {
    /// The unsigned integer with this width.
    type Uint: Reverse;
}

impl BySize for Width<1> {
    type Uint = u8;
}

impl BySize for Width<2> {
    type Uint = u16;
}

impl BySize for Width<4> {
    type Uint = u32;
}

impl BySize for Width<8> {
    type Uint = u64;
}

/// Shorthand for the unsigned integer of `N` bytes.
pub type UintOfSize<const N: usize> = <Width<N> as BySize>::Uint;

mod private {
    pub trait Sealed {}
}
