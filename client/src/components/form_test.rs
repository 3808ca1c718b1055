use super::*;

#[test]
fn button_class_marks_pending() {
    assert_eq!(button_class(false), "cyber-btn");
    assert_eq!(button_class(true), "cyber-btn loading");
}

#[test]
fn input_class_pulses_only_when_focused() {
    assert_eq!(input_class(false), "form-input");
    assert_eq!(input_class(true), "form-input pulse");
}
