use super::*;

#[test]
fn test_checked_add_in_range() {
    let a = ScalarInt::new(40);
    let b = ScalarInt::new(2);
    assert_eq!(a.checked_add(b), Some(ScalarInt::new(42)));
}

#[test]
fn test_checked_add_overflow() {
    assert_eq!(ScalarInt::MAX.checked_add(ScalarInt::new(1)), None);
    assert_eq!(ScalarInt::MIN.checked_add(ScalarInt::new(-1)), None);
}

#[test]
fn test_checked_add_at_bounds() {
    assert_eq!(
        ScalarInt::MAX.checked_add(ScalarInt::MIN),
        Some(ScalarInt::new(-1))
    );
    assert_eq!(
        ScalarInt::new(i64::MAX - 1).checked_add(ScalarInt::new(1)),
        Some(ScalarInt::MAX)
    );
}

#[test]
fn test_display() {
    assert_eq!(ScalarInt::new(-17).to_string(), "-17");
    assert_eq!(format!("{:?}", ScalarInt::new(5)), "5");
}
