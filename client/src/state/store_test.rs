use super::*;
use cybernet::nav::Page;

#[test]
fn update_is_visible_to_read() {
    let store = SignalStore::new();
    assert_eq!(store.update(|s| {
        s.page = Page::Reset;
        s.page
    }), Some(Page::Reset));
    assert_eq!(store.read(|s| s.page), Page::Reset);
    assert_eq!(store.state().get_untracked().page, Page::Reset);
}

#[test]
fn copies_share_one_signal() {
    let store = SignalStore::new();
    let copy = store;
    copy.update(|s| s.navbar_scrolled = true);
    assert!(store.read(|s| s.navbar_scrolled));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_format_date_is_short_date() {
    assert_eq!(SignalStore::new().format_date("2024-01-15T10:00:00"), "1/15/2024");
    assert_eq!(SignalStore::new().format_date("garbage"), "Invalid Date");
}
