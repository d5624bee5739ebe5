//! Stacked transient notices raised by the name form.

use leptos::prelude::*;

use crate::state::FormState;

/// Notices render as text nodes only, never as markup.
#[component]
pub fn Notifications() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let notices = Memo::new(move |_| form.with(|f| f.notifications.clone()));

    view! {
        <div class="notifications" role="status" aria-live="polite">
            {move || {
                notices
                    .get()
                    .into_iter()
                    .map(|n| {
                        let class = format!("notification {}", n.kind.as_str());
                        view! { <div class=class>{n.text}</div> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
