//! Name field with client-side validation and a simulated submit.

#[cfg(test)]
#[path = "name_form_test.rs"]
mod name_form_test;

use ando_core::form::{self, NOTIFICATION_TTL_MS, SUBMIT_DELAY_MS};
use ando_core::{StateCell, strings};
use leptos::prelude::*;

use crate::components::notifications::Notifications;
use crate::state::{FormState, SignalCell};
use crate::util::task::{sleep_ms, spawn};

/// One submit cycle, then drop the raised notification once its lifetime
/// has elapsed.
pub(crate) async fn submit_and_expire(cell: SignalCell<FormState>) -> Option<u64> {
    let id = form::submit(&cell, sleep_ms(SUBMIT_DELAY_MS)).await?;
    sleep_ms(NOTIFICATION_TTL_MS).await;
    cell.with_mut(|f| f.dismiss_notification(id));
    Some(id)
}

#[component]
pub fn NameForm() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let cell = SignalCell(form);

    let error = Memo::new(move |_| form.with(|f| f.error));
    let submitting = Memo::new(move |_| form.with(|f| f.submitting));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn(async move {
            let _ = submit_and_expire(cell).await;
        });
    };

    view! {
        <form class="name-form" novalidate=true on:submit=on_submit>
            <label for="ando-name">{strings::NAME_LABEL}</label>
            <input
                id="ando-name"
                type="text"
                class="name-input"
                class:invalid=move || error.get().is_some()
                placeholder=strings::NAME_PLACEHOLDER
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.input(&event_target_value(&ev)))
                on:blur=move |_| form.update(FormState::blur)
            />
            <Show when=move || error.get().is_some()>
                <span class="error-message">{move || error.get().map(|e| e.to_string())}</span>
            </Show>
            <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                {move || form.with(|f| f.submit_label())}
            </button>
        </form>
        <Notifications/>
    }
}
