use super::*;

#[test]
fn reset_token_from_reset_link() {
    assert_eq!(reset_token_from_path("/reset-password/abc123"), Some("abc123".to_owned()));
    assert_eq!(reset_token_from_path("/reset-password/abc123/"), Some("abc123".to_owned()));
}

#[test]
fn reset_token_absent_elsewhere() {
    assert_eq!(reset_token_from_path("/"), None);
    assert_eq!(reset_token_from_path("/reset-password"), None);
    assert_eq!(reset_token_from_path("/reset-password/"), None);
    assert_eq!(reset_token_from_path("/reset-password/a/b"), None);
    assert_eq!(reset_token_from_path("/login"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn current_path_empty_natively() {
    assert_eq!(current_path(), "");
}
