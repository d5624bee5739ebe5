use super::*;

#[test]
fn widgets_start_closed_and_empty() {
    let widgets = Widgets::new(WidgetConfig::new("http://example.test/api/"));

    let chat = widgets.chat.get_untracked();
    assert!(!chat.is_open);
    assert!(chat.messages.is_empty());
    assert_eq!(widgets.form.get_untracked(), FormState::default());
    assert_eq!(widgets.api.config().endpoint("/chat"), "http://example.test/api/chat");
}

#[test]
fn recommendation_request_leaves_state_untouched_off_browser() {
    let widgets = Widgets::new(WidgetConfig::default());

    widgets.request_recommendation("Sara".into(), "Rust".into());

    assert!(widgets.chat.get_untracked().messages.is_empty());
}
