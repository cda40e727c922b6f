use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_location_display() {
    let loc = SourceLocation::new("main.em", 3, 14);
    assert_eq!(loc.to_string(), "main.em line 3 col 14");
}

#[test]
fn test_location_shares_source_name() {
    let name: Arc<str> = Arc::from("lib.em");
    let a = SourceLocation::new(Arc::clone(&name), 1, 1);
    let b = SourceLocation::new(Arc::clone(&name), 2, 5);
    assert_eq!(a.source_name(), b.source_name());
    assert_ne!(a, b);
    assert_eq!((b.line(), b.column()), (2, 5));
}
