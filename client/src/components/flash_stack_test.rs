use super::*;

#[test]
fn flash_class_includes_severity() {
    assert_eq!(flash_class(Severity::Info), "flash-message info");
    assert_eq!(flash_class(Severity::Success), "flash-message success");
    assert_eq!(flash_class(Severity::Error), "flash-message error");
}
