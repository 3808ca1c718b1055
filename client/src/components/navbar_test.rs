use super::*;

#[test]
fn navbar_class_reflects_scroll() {
    assert_eq!(navbar_class(false), "navbar");
    assert_eq!(navbar_class(true), "navbar scrolled");
}
