use super::*;
use pretty_assertions::assert_eq;

#[test]
fn span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
}

#[test]
fn span_merge_disjoint() {
    let merged = Span::new(20, 30).merge(Span::new(0, 10));
    assert_eq!(merged, Span::new(0, 30));
}

#[test]
fn span_try_from_range() {
    let Ok(span) = Span::try_from_range(50..100) else {
        panic!("expected Ok for valid range");
    };
    assert_eq!(span, Span::new(50, 100));

    let large = u32::MAX as usize + 1;
    assert!(matches!(
        Span::try_from_range(large..large + 1),
        Err(SpanError::StartTooLarge(_))
    ));
    assert!(matches!(
        Span::try_from_range(0..large),
        Err(SpanError::EndTooLarge(_))
    ));
}

#[test]
fn span_error_display() {
    let msg = SpanError::EndTooLarge(0x2_0000_0000).to_string();
    assert!(msg.contains("end"));
    assert!(msg.contains("0x200000000"));
}

#[test]
fn span_point_and_dummy() {
    let point = Span::point(42);
    assert!(point.is_empty());
    assert_eq!(point.to_range(), 42..42);
    assert_eq!(Span::default(), Span::DUMMY);
}

#[test]
fn span_debug_display() {
    let span = Span::new(100, 200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(format!("{span}"), "100..200");
}
