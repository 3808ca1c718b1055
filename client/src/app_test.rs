use super::*;

#[test]
fn landing_page_is_home_without_reset_link() {
    assert_eq!(landing_page(None), Page::Home);
}

#[test]
fn landing_page_is_reset_for_reset_link() {
    assert_eq!(landing_page(Some("tok")), Page::Reset);
}
