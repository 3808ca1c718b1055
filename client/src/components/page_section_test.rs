use super::*;

#[test]
fn section_class_marks_active_page() {
    assert_eq!(section_class(true), "page-content active");
    assert_eq!(section_class(false), "page-content");
}
