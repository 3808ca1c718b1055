use super::*;

#[test]
fn card_class_plays_animation_by_default() {
    assert_eq!(card_class("", false), "dashboard-card fade-in-up");
    assert_eq!(card_class("module-card", false), "dashboard-card module-card fade-in-up");
}

#[test]
fn card_class_clears_animation_while_replaying() {
    assert_eq!(card_class("profile-card", true), "dashboard-card profile-card no-animation");
}
