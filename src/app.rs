//! Root component and the state handles it provides.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use ando_core::chat;
use ando_core::config::WidgetConfig;
use leptos::prelude::*;

use crate::components::{chat_widget::ChatWidget, name_form::NameForm};
use crate::net::api::BrowserApi;
use crate::state::{ChatSession, FormState, SignalCell};
use crate::util::task::spawn;

/// State and transport for one mounted pair of widgets.
///
/// Owned by the caller of [`crate::mount`] rather than living in a page
/// global; the same handles are provided to components as context.
#[derive(Clone, Debug)]
pub struct Widgets {
    pub chat: RwSignal<ChatSession>,
    pub form: RwSignal<FormState>,
    pub api: BrowserApi,
}

impl Widgets {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            chat: RwSignal::new(ChatSession::default()),
            form: RwSignal::new(FormState::default()),
            api: BrowserApi::new(config),
        }
    }

    /// Ask the backend for a personalised recommendation and append it to
    /// the transcript. Failures are logged only.
    pub fn request_recommendation(&self, name: String, language: String) {
        let cell = SignalCell(self.chat);
        let api = self.api.clone();
        spawn(async move {
            chat::request_recommendation(&cell, &api, &name, &language).await;
        });
    }
}

/// Root component. Provides the widget contexts and renders both surfaces.
#[component]
pub fn App(widgets: Widgets) -> impl IntoView {
    provide_context(widgets.chat);
    provide_context(widgets.form);
    provide_context(widgets.api);

    view! {
        <NameForm/>
        <ChatWidget/>
    }
}
