use super::*;

#[test]
fn split_writes_match_single_write() {
    let mut a = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    a.write_bytes(b"pitch");
    let mut b = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    b.write_u8(b'p');
    b.write_bytes(b"itch");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn known_empty_and_single_byte_values() {
    assert_eq!(Fnv1a64::new(Fnv1a64::OFFSET_BASIS).finish(), 0xcbf2_9ce4_8422_2325);
    let mut h = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    h.write_u8(b'a');
    assert_eq!(h.finish(), 0xaf63_dc4c_8601_ec8c);
}

#[test]
fn strings_are_length_prefixed() {
    let mut a = Fnv1a64::new(1);
    a.write_str("ab");
    a.write_str("c");
    let mut b = Fnv1a64::new(1);
    b.write_str("a");
    b.write_str("bc");
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn signed_zero_is_distinguished() {
    let mut a = Fnv1a64::new(7);
    a.write_f64(0.0);
    let mut b = Fnv1a64::new(7);
    b.write_f64(-0.0);
    assert_ne!(a.finish(), b.finish());
}
