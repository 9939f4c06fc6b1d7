//! Derive macros.
//!
//! **Note:** The macros themselves are not contained in this module; they are at the top level of
//! the crate. This module is used to document them.
//!
//! # `Encode` and `Decode`
//!
//! The `Encode` and `Decode` macros generate implementations of their respective traits with the
//! unit context, for structs only. Each field is encoded or decoded in the order it is declared,
//! with no padding between fields.
//!
//! How a field is written is controlled by the field attributes `order` and `width`:
//!
//! - With neither attribute, the field type's own `Encode<()>`/`Decode<()>` implementation is
//! used. For primitives, that is the full width in network (big-endian) order.
//!
//! - **`order`** - One of `"big"`, `"little"` or `"native"`. The field is written at the full width
//! of its type in that byte order, through its `Encode<Order>`/`Decode<Order>` implementation.
//!
//! - **`width`** (Requires `order`) - A number of bytes between 1 and 8. The field is written in
//! exactly that many bytes through [`packed`](crate::packed), which truncates on encode and sign-
//! or zero-extends on decode. A width that the field type cannot hold is rejected at compile
//! time.
//!
//! ```
//! use endload::{Decode, Encode};
//!
//! #[derive(Debug, PartialEq, Encode, Decode)]
//! struct SampleHeader {
//!     tag: u8,
//!     #[endload(order = "little", width = 3)]
//!     offset: i32,
//!     #[endload(order = "little")]
//!     count: u16,
//! }
//!
//! let header = SampleHeader { tag: 7, offset: -2, count: 0x0102 };
//! let bytes = endload::to_bytes(&header).unwrap();
//! assert_eq!(bytes, [0x07, 0xfe, 0xff, 0xff, 0x02, 0x01]);
//! assert_eq!(endload::from_bytes::<SampleHeader>(&bytes).unwrap(), header);
//! ```
//!
//! ```compile_fail
//! use endload::Encode;
//!
//! #[derive(Encode)]
//! struct TooWide {
//!     // a u16 does not fit in three bytes
//!     #[endload(order = "big", width = 3)]
//!     value: u16,
//! }
//!
//! endload::to_bytes(&TooWide { value: 1 }).unwrap();
//! ```
//!
//! # `Enumerated`
//!
//! The `Enumerated` macro implements [`Enumerated`](crate::Enumerated) for a fieldless enum with
//! an integer `#[repr]`, and additionally implements [`Packed`](crate::packed::Packed),
//! `Encode<Order>`, `Decode<Order>`, `Encode<()>` and `Decode<()>` for it. Such an enum can then be
//! used as a plain, ordered or packed field of a derived struct. Decoding a discriminant that
//! names no variant is an error.
//!
//! ```
//! use endload::{Decode, Encode, Enumerated};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Enumerated)]
//! #[repr(u16)]
//! enum Kind {
//!     Data = 1,
//!     Ack = 2,
//!     Reset = 0x8000,
//! }
//!
//! #[derive(Debug, PartialEq, Encode, Decode)]
//! struct Frame {
//!     #[endload(order = "big", width = 1)]
//!     kind: Kind,
//!     len: u16,
//! }
//!
//! let frame = Frame { kind: Kind::Ack, len: 4 };
//! assert_eq!(endload::to_bytes(&frame).unwrap(), [0x02, 0x00, 0x04]);
//! assert!(endload::from_bytes::<Frame>(&[0x03, 0x00, 0x04]).is_err());
//! ```
//!
//! # Attributes
//!
//! Both macros accept one container attribute:
//!
//! - **`crate_path`** - Specify a custom path to the `endload` crate. If you use the `endload` crate
//! under a different name, this must be set to that path for the `derive` to successfully compile.
//!
//! ```
//! use endload as el;
//!
//! #[derive(el::Encode, el::Decode)]
//! #[endload(crate_path = "el")]
//! struct Renamed(#[endload(order = "native")] u32);
//! ```
