use endload::ctx::Order;
use endload::order::{BigEndian, LittleEndian, NativeEndian};
use endload::store::store_with;
use endload::{load, store};

#[test]
fn test_narrow_store_then_load() {
    let mut buf = [0u8; 3];
    store::<i32, 3, BigEndian>(-8388607, &mut buf);
    assert_eq!(buf, [0x80, 0x00, 0x01]);
    assert_eq!(load::<i32, 3, BigEndian>(&buf), -8388607);

    // out of range for 24 bits, wraps like `as`
    store::<i32, 3, LittleEndian>(0x0180_0000, &mut buf);
    assert_eq!(buf, [0x00, 0x00, 0x80]);
    assert_eq!(load::<i32, 3, LittleEndian>(&buf), -0x0080_0000);
}

#[test]
fn test_runtime_order() {
    let mut buf = [0u8; 2];
    store_with::<u16, 2>(0x1234, &mut buf, Order::Big);
    assert_eq!(buf, [0x12, 0x34]);
    store_with::<u16, 2>(0x1234, &mut buf, Order::Little);
    assert_eq!(buf, [0x34, 0x12]);
    store_with::<u16, 2>(0x1234, &mut buf, Order::Native);
    assert_eq!(buf, 0x1234_u16.to_ne_bytes());
}

#[test]
fn test_writes_only_n_bytes() {
    let mut buf = [0xaa; 6];
    store::<u64, 5, NativeEndian>(0, &mut buf);
    assert_eq!(buf[5], 0xaa);
}

#[test]
fn test_const_stores() {
    const MAGIC: [u8; 3] = store::store_u32::<3>(0x00ab_cdef, Order::Big);
    const DELTA: [u8; 5] = store::store_i64::<5>(-2, Order::Little);
    assert_eq!(MAGIC, [0xab, 0xcd, 0xef]);
    assert_eq!(DELTA, [0xfe, 0xff, 0xff, 0xff, 0xff]);
    assert_eq!(store::store_i8::<1>(-1, Order::Native), [0xff]);
}

#[test]
fn test_floats() {
    let mut buf = [0u8; 8];
    store::<f64, 8, BigEndian>(-0.5, &mut buf);
    assert_eq!(buf, (-0.5f64).to_be_bytes());
    assert_eq!(load::<f64, 8, BigEndian>(&buf), -0.5);

    store::<f32, 4, LittleEndian>(f32::INFINITY, &mut buf);
    assert_eq!(buf[..4], f32::INFINITY.to_le_bytes());
}

#[test]
#[should_panic]
fn test_short_buffer() {
    store::<u16, 2, BigEndian>(1, &mut [0u8; 1]);
}
