use super::*;

#[test]
fn fragment_selector_accepts_in_page_links() {
    assert_eq!(fragment_selector("#tools"), Some("#tools"));
    assert_eq!(fragment_selector("#"), None);
    assert_eq!(fragment_selector("/submit"), None);
    assert_eq!(fragment_selector(""), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_helpers_are_callable_noops() {
    alert("Please sign in to vote!");
    set_body_class("cursor-hovered", true);
    smooth_scroll_to("#tools");
    assert_eq!(scroll_y(), 0.0);
}
