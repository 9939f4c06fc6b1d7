use endload::ctx::Order;
use endload::{Decode, Encode, Enumerated};
use std::fmt::Debug;

#[derive(Debug, PartialEq, Encode, Decode)]
struct UnitStruct;

#[derive(Debug, PartialEq, Encode, Decode)]
struct TupleStruct(u8, u32);

#[derive(Debug, PartialEq, Encode, Decode)]
struct Struct {
    x: u8,
    y: u32,
}

#[derive(Debug, PartialEq, Encode, Decode)]
struct Ordered {
    #[endload(order = "little")]
    x: u16,
    #[endload(order = "big")]
    y: u16,
}

#[derive(Debug, PartialEq, Encode, Decode)]
struct Narrow {
    #[endload(order = "big", width = 3)]
    signed: i32,
    #[endload(order = "little", width = 3)]
    unsigned: u32,
    #[endload(order = "little", width = 5)]
    wide: i64,
}

#[derive(Debug, PartialEq, Encode, Decode)]
struct PackedTuple(
    #[endload(order = "big", width = 1)] i16,
    #[endload(order = "big", width = 2)] u64,
);

#[derive(Debug, Clone, Copy, PartialEq, Enumerated)]
#[repr(u8)]
enum Color {
    Red = 1,
    Green = 2,
    Blue = 0xff,
}

#[derive(Debug, Clone, Copy, PartialEq, Enumerated)]
#[repr(i32)]
enum Direction {
    Back = -1,
    Hold = 0,
    Forward = 1,
}

#[derive(Debug, PartialEq, Encode, Decode)]
struct WithEnums {
    color: Color,
    #[endload(order = "little", width = 2)]
    direction: Direction,
}

fn test_encode<T>(input: T, expected: &[u8])
where
    T: Encode,
{
    let mut output = Vec::new();
    input.encode((), &mut output).unwrap();
    assert_eq!(output, expected);
}

fn test_decode<T>(mut input: &[u8], expected: T)
where
    T: Decode + Debug + PartialEq,
{
    let output = T::decode((), &mut input).unwrap();
    assert_eq!(output, expected);
}

fn test_bidir<T>(val: T, bytes: &[u8])
where
    T: Encode + Decode + Debug + PartialEq,
{
    test_encode(&val, bytes);
    test_decode(bytes, val);
}

#[test]
fn test_unit_struct() {
    test_bidir(UnitStruct, &[]);
}

#[test]
fn test_tuple_struct() {
    test_bidir(
        TupleStruct(0xab, 0xdeadbeef),
        &[0xab, 0xde, 0xad, 0xbe, 0xef],
    );
}

#[test]
fn test_struct() {
    test_bidir(
        Struct {
            x: 0xab,
            y: 0xdeadbeef,
        },
        &[0xab, 0xde, 0xad, 0xbe, 0xef],
    );
}

#[test]
fn test_ordered_fields() {
    test_bidir(
        Ordered {
            x: 0x1234,
            y: 0x1234,
        },
        &[0x34, 0x12, 0x12, 0x34],
    );
}

#[test]
fn test_packed_fields() {
    test_bidir(
        Narrow {
            signed: -8388607,
            unsigned: 0x00ab_cdef,
            wide: -2,
        },
        &[
            0x80, 0x00, 0x01, // signed
            0xef, 0xcd, 0xab, // unsigned
            0xfe, 0xff, 0xff, 0xff, 0xff, // wide
        ],
    );
}

#[test]
fn test_packed_fields_extend() {
    // high bit set, but the field is unsigned
    test_decode(
        &[0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x80],
        Narrow {
            signed: 0,
            unsigned: 0x00ff_ffff,
            wide: -(1 << 39),
        },
    );
}

#[test]
fn test_packed_tuple() {
    test_bidir(PackedTuple(-1, 0xbeef), &[0xff, 0xbe, 0xef]);
}

#[test]
fn test_packed_truncates() {
    test_encode(PackedTuple(0x0180, 0x0001_0002), &[0x80, 0x00, 0x02]);
}

#[test]
fn test_enum_repr() {
    assert_eq!(Color::Blue.into_repr(), 0xff);
    assert_eq!(Color::from_repr(2), Some(Color::Green));
    assert_eq!(Color::from_repr(3), None);
    assert_eq!(Direction::from_repr(-1), Some(Direction::Back));
    assert_eq!(Color::NAME, "Color");
}

#[test]
fn test_enum_plain() {
    test_bidir(Color::Red, &[0x01]);
    test_bidir(Direction::Back, &[0xff, 0xff, 0xff, 0xff]);
}

#[test]
fn test_enum_ordered() {
    let bytes = endload::to_bytes_with_context(&Direction::Forward, Order::Little).unwrap();
    assert_eq!(bytes, [0x01, 0x00, 0x00, 0x00]);
    let direction: Direction = endload::from_bytes_with_context(&bytes, Order::Little).unwrap();
    assert_eq!(direction, Direction::Forward);
}

#[test]
fn test_enum_fields() {
    test_bidir(
        WithEnums {
            color: Color::Blue,
            direction: Direction::Back,
        },
        &[0xff, 0xff, 0xff],
    );
    test_bidir(
        WithEnums {
            color: Color::Green,
            direction: Direction::Hold,
        },
        &[0x02, 0x00, 0x00],
    );
}

#[test]
fn test_enum_unknown_discriminant() {
    let error = endload::from_bytes::<Color>(&[0x00]).unwrap_err();
    assert_eq!(error.message(), "unknown discriminant for Color: 0");

    let error = endload::from_bytes::<WithEnums>(&[0x01, 0x02, 0x00]).unwrap_err();
    assert_eq!(error.message(), "error decoding field direction");
    assert_eq!(
        error.to_string(),
        "error decoding field direction: unknown discriminant for Direction: 2"
    );
}

#[test]
fn test_short_input() {
    assert!(endload::from_bytes::<Narrow>(&[0x80, 0x00, 0x01, 0xef]).is_err());
}

#[test]
fn test_trailing_input() {
    assert!(endload::from_bytes::<TupleStruct>(&[0xab, 0, 0, 0, 0, 0]).is_err());
}

#[test]
fn test_len_conversion_error() {
    use endload::ctx::Len;

    let error: endload::Error = Len::try_from(-1i64).unwrap_err().into();
    assert!(!error.message().is_empty());
}

#[test]
fn test_vec_with_len() {
    use endload::ctx::Len;

    let len = Len::try_from(2u8).unwrap();
    let values: Vec<u16> =
        endload::from_bytes_with_context(&[0x00, 0x01, 0x02, 0x00], (len, Order::Little)).unwrap();
    assert_eq!(values, [0x0100, 0x0002]);
    assert_eq!(
        endload::to_bytes_with_context(&values, Order::Little).unwrap(),
        [0x00, 0x01, 0x02, 0x00]
    );

    let records: Vec<Struct> =
        endload::from_bytes_with_context(&[0x01, 0, 0, 0, 0x02, 0x03, 0, 0, 0, 0x04], len)
            .unwrap();
    assert_eq!(records, [Struct { x: 1, y: 2 }, Struct { x: 3, y: 4 }]);
    assert!(endload::from_bytes_with_context::<Vec<Struct>, _>(&[0x01, 0, 0, 0, 0x02], len)
        .is_err());
    assert!(Len::try_from(-1i32).is_err());
}
