#![cfg(not(feature = "csr"))]

use super::*;
use ando_core::form::NotificationKind;

// =============================================================================
// submit_and_expire
// =============================================================================

#[tokio::test]
async fn valid_name_resets_form_and_expires_notice() {
    let form = RwSignal::new(FormState::default());
    form.update(|f| f.input("Sara"));

    let id = submit_and_expire(SignalCell(form)).await;

    assert!(id.is_some());
    let state = form.get_untracked();
    assert!(state.name.is_empty());
    assert!(!state.submitting);
    assert!(state.notifications.is_empty());
}

#[tokio::test]
async fn invalid_name_keeps_field_and_error() {
    let form = RwSignal::new(FormState::default());
    form.update(|f| f.input("S"));

    let id = submit_and_expire(SignalCell(form)).await;

    assert!(id.is_some());
    let state = form.get_untracked();
    assert_eq!(state.name, "S");
    assert!(state.error.is_some());
    assert!(!state.submitting);
    assert!(state.notifications.is_empty());
}

#[tokio::test]
async fn expiry_only_drops_its_own_notice() {
    let form = RwSignal::new(FormState::default());
    let other = form.try_update(|f| f.push_notification(NotificationKind::Error, "x")).unwrap();
    form.update(|f| f.input("Sara"));

    submit_and_expire(SignalCell(form)).await;

    let ids: Vec<u64> = form.get_untracked().notifications.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![other]);
}

#[tokio::test]
async fn disposed_form_submits_nothing() {
    let form = RwSignal::new(FormState::default());
    form.dispose();

    assert_eq!(submit_and_expire(SignalCell(form)).await, None);
}
