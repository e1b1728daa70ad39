use super::*;

#[test]
fn empty_is_zero_and_default() {
    assert_eq!(Name::EMPTY.raw(), 0);
    assert_eq!(Name::default(), Name::EMPTY);
}

#[test]
fn raw_roundtrip() {
    let name = Name::from_raw(42);
    assert_eq!(name.raw(), 42);
    assert_eq!(name.index(), 42);
    assert_eq!(format!("{name:?}"), "Name(42)");
}
