//! # ando-widgets
//!
//! Leptos + WASM front end for the ANDO.5 page: a floating chat assistant
//! and a validated name form. Behaviour lives in `ando-core`; this crate
//! renders it and supplies the browser transport.
//!
//! With the `csr` feature the crate exports a `mount()` entry point for the
//! hosting page. Native builds compile the same components with no-op
//! browser shims so their helpers unit-test on the host.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// Handle returned to the hosting page after mounting.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub struct WidgetHandle {
    widgets: app::Widgets,
}

#[cfg(feature = "csr")]
#[wasm_bindgen]
impl WidgetHandle {
    /// Append a personalised recommendation for `name` learning `language`.
    pub fn recommend(&self, name: String, language: String) {
        self.widgets.request_recommendation(name, language);
    }

    /// Open or close the chat surface.
    pub fn toggle(&self) {
        self.widgets.chat.update(|s| {
            s.toggle();
        });
    }
}

/// Mount both widgets into `<body>`, configured from the page's meta tags.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn mount() -> WidgetHandle {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = util::dom::config_from_page();
    log::info!("mounting widgets against {}", config.api_base_url);

    let widgets = app::Widgets::new(config);
    let root = widgets.clone();
    leptos::mount::mount_to_body(move || view! { <app::App widgets=root.clone()/> }).forget();

    WidgetHandle { widgets }
}
