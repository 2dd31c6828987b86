use super::*;

#[test]
fn convert_bool() {
    assert_eq!(true.to_trit(), Trit::TRUE);
    assert_eq!(false.to_trit(), Trit::FALSE);
    assert_eq!(Trit::from(true), Trit::TRUE);
}

#[test]
fn convert_signed() {
    assert_eq!(0i32.to_trit(), Trit::UNKNOWN);
    assert_eq!((-5i32).to_trit(), Trit::FALSE);
    assert_eq!(5i64.to_trit(), Trit::TRUE);
    assert_eq!(i8::MIN.to_trit(), Trit::FALSE);
    assert_eq!(i128::MAX.to_trit(), Trit::TRUE);
    assert_eq!(Trit::from(-3isize), Trit::FALSE);
}

#[test]
fn convert_unsigned() {
    assert_eq!(0u8.to_trit(), Trit::UNKNOWN);
    assert_eq!(5u32.to_trit(), Trit::TRUE);
    assert_eq!(u64::MAX.to_trit(), Trit::TRUE);
}

#[test]
fn convert_float() {
    assert_eq!((-0.1f64).to_trit(), Trit::FALSE);
    assert_eq!(0.1f32.to_trit(), Trit::TRUE);
    assert_eq!(0.0f64.to_trit(), Trit::UNKNOWN);
    assert_eq!((-0.0f64).to_trit(), Trit::UNKNOWN);
    assert_eq!(f64::NAN.to_trit(), Trit::UNKNOWN);
    assert_eq!(f32::NEG_INFINITY.to_trit(), Trit::FALSE);
}

#[test]
fn convert_trit_keeps_raw() {
    assert_eq!(Trit::new(7).to_trit().raw(), 7);
}

#[test]
fn mixed_operands() {
    assert_eq!(and(true, 0), Trit::UNKNOWN);
    assert_eq!(or(-1, 2.5), Trit::TRUE);
    assert_eq!(xor(true, false), Trit::TRUE);
    assert_eq!(imp(0u8, 0i16), Trit::TRUE);
    assert_eq!(nimp(true, -1), Trit::TRUE);
    assert_eq!(equiv(Trit::UNKNOWN, 0), Trit::UNKNOWN);
    assert_eq!(nequiv(1, -1), Trit::TRUE);
    assert_eq!(min(1, 0), Trit::UNKNOWN);
    assert_eq!(max(-1, 0), Trit::UNKNOWN);
    assert_eq!(nand(true, true), Trit::FALSE);
    assert_eq!(nor(false, false), Trit::TRUE);
    assert_eq!(nxor(true, true), Trit::TRUE);
}

#[test]
fn unary_forms() {
    assert_eq!(not(true), Trit::FALSE);
    assert_eq!(not(0), Trit::UNKNOWN);
    assert_eq!(ma(0), Trit::TRUE);
    assert_eq!(la(0), Trit::FALSE);
    assert_eq!(ia(0), Trit::TRUE);
    assert_eq!(ia(-9), Trit::FALSE);
}

#[test]
fn free_set_if_unknown() {
    let mut t = Trit::UNKNOWN;
    assert_eq!(set_if_unknown(&mut t, 3), Trit::TRUE);
    assert_eq!(set_if_unknown(&mut t, false), Trit::TRUE);

    let mut t = Trit::UNKNOWN;
    assert_eq!(set_if_unknown(&mut t, 0.0), Trit::UNKNOWN);
}
