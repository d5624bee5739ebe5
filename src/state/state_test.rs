use super::*;

#[test]
fn signal_cell_applies_transition() {
    let chat = RwSignal::new(ChatSession::default());
    let cell = SignalCell(chat);

    assert_eq!(cell.with_mut(ChatSession::toggle), Some(true));
    assert!(chat.get_untracked().is_open);
    assert_eq!(chat.get_untracked().messages.len(), 2);
}

#[test]
fn signal_cell_reports_disposed_signal() {
    let form = RwSignal::new(FormState::default());
    let cell = SignalCell(form);
    form.dispose();

    assert_eq!(cell.with_mut(|f| f.input("Sara")), None);
}
