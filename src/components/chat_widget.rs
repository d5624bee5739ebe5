//! Floating chat widget: toggle button, transcript, suggestions, input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `ChatSession` from context and forwards user events to the
//! `ando_core::chat` drivers over the injected `BrowserApi`. All decisions
//! (gating, transcript order, failure texts) are made in `ando-core`; this
//! module only draws state and spawns the async drivers.

use ando_core::api::{LanguageInfo, Resource};
use ando_core::chat;
use ando_core::format::safe_link_href;
use ando_core::message::{Message, MessageBody};
use ando_core::strings;
use leptos::prelude::*;

use crate::net::api::BrowserApi;
use crate::state::{ChatSession, SignalCell};
use crate::util::task::spawn;

/// Chat widget bound to the `RwSignal<ChatSession>` and `BrowserApi`
/// contexts. Fetches the initial suggestions when mounted.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let session = expect_context::<RwSignal<ChatSession>>();
    let api = StoredValue::new(expect_context::<BrowserApi>());
    let cell = SignalCell(session);

    let is_open = Memo::new(move |_| session.with(|s| s.is_open));
    let typing = Memo::new(move |_| session.with(|s| s.typing));
    let messages = Memo::new(move |_| session.with(|s| s.messages.clone()));
    let suggestions = Memo::new(move |_| session.with(|s| s.suggestions.clone()));

    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    spawn(async move {
        let api = api.get_value();
        chat::load_suggestions(&cell, &api).await;
    });

    Effect::new(move || {
        let _ = messages.with(Vec::len);
        let _ = typing.get();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                crate::util::dom::scroll_to_bottom(&el);
            }
        }
    });

    Effect::new(move || {
        if is_open.get() {
            #[cfg(feature = "csr")]
            {
                if let Some(el) = input_ref.get() {
                    crate::util::dom::focus(&el);
                }
            }
        }
    });

    let toggle = move || {
        session.update(|s| {
            s.toggle();
        });
    };

    let send = move || {
        spawn(async move {
            let api = api.get_value();
            chat::send_message(&cell, &api).await;
        });
    };

    let pick = move |label: String| {
        spawn(async move {
            let api = api.get_value();
            chat::select_suggestion(&cell, &api, &label).await;
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !session.with_untracked(|s| s.is_loading) {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <button
            class="chatbot-toggle"
            class:hidden=move || is_open.get()
            title=strings::CHAT_OPEN_TITLE
            on:click=move |_| toggle()
        >
            "💬"
        </button>

        <div class="chatbot-container" class:hidden=move || !is_open.get()>
            <div class="chatbot-header">
                <span>{strings::CHAT_TITLE}</span>
                <button class="chatbot-close" title=strings::CHAT_CLOSE_TITLE on:click=move |_| toggle()>
                    "✕"
                </button>
            </div>

            <div class="chatbot-messages" node_ref=messages_ref>
                {move || messages.get().iter().map(message_view).collect::<Vec<_>>()}

                <Show when=move || typing.get()>
                    <div class="message ai">
                        <div class="message-bubble">
                            <div class="typing-indicator">
                                <div class="typing-dot"></div>
                                <div class="typing-dot"></div>
                                <div class="typing-dot"></div>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>

            <div class="chatbot-suggestions">
                {move || {
                    suggestions
                        .get()
                        .into_iter()
                        .map(|label| {
                            let text = label.clone();
                            view! {
                                <button class="suggestion-btn" on:click=move |_| pick(label.clone())>
                                    {text}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="chatbot-input-area">
                <input
                    class="chatbot-input"
                    type="text"
                    node_ref=input_ref
                    placeholder=strings::CHAT_PLACEHOLDER
                    aria-label=strings::CHAT_INPUT_LABEL
                    prop:value=move || session.with(|s| s.input.clone())
                    on:input=move |ev| session.update(|s| s.set_input(&event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <button class="chatbot-send" title=strings::CHAT_SEND_TITLE on:click=move |_| send()>
                    "📤"
                </button>
            </div>
        </div>
    }
}

fn message_view(message: &Message) -> AnyView {
    let class = format!("message {}", message.sender.as_str());
    let bubble = match &message.body {
        MessageBody::Plain => {
            let text = message.text.clone();
            view! { <div class="message-bubble">{text}</div> }.into_any()
        }
        MessageBody::Formatted(html) => {
            let html = html.clone();
            view! { <div class="message-bubble" inner_html=html></div> }.into_any()
        }
        MessageBody::Info(info) => {
            let info = info.clone();
            view! {
                <div class="message-bubble">
                    <InfoBlock info/>
                </div>
            }
            .into_any()
        }
    };
    view! { <div class=class>{bubble}</div> }.into_any()
}

/// Language info card: description, uses, ratings, resource links.
#[component]
fn InfoBlock(info: LanguageInfo) -> impl IntoView {
    let LanguageInfo { description, uses, difficulty, popularity, resources } = info;
    let resources = resources.unwrap_or_default();

    view! {
        <div class="language-info">
            <strong>{description}</strong>
            <br/>
            {strings::INFO_USES}
            {uses.join(", ")}
            <br/>
            {strings::INFO_DIFFICULTY}
            {difficulty}
            <br/>
            {strings::INFO_POPULARITY}
            {popularity}
            {(!resources.is_empty())
                .then(|| {
                    view! {
                        <br/>
                        <strong>{strings::INFO_RESOURCES}</strong>
                        <br/>
                        {resources.into_iter().map(resource_view).collect::<Vec<_>>()}
                    }
                })}
        </div>
    }
}

/// Only `http(s)` URLs become links; anything else renders as its name.
fn resource_view(resource: Resource) -> AnyView {
    match safe_link_href(&resource.url).map(str::to_owned) {
        Some(href) => view! {
            <a href=href target="_blank" rel="noopener noreferrer">{resource.name}</a>
            <br/>
        }
        .into_any(),
        None => view! {
            <span>{resource.name}</span>
            <br/>
        }
        .into_any(),
    }
}
