//! Small DOM helpers the components share.
//!
//! Requires a browser environment; native builds no-op so the components
//! still compile and their pure helpers unit-test on the host.

use ando_core::config::WidgetConfig;

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// `<meta name=...>` overriding the API base path.
pub const META_API_BASE: &str = "ando-api-base";
/// `<meta name=...>` overriding the request timeout, in milliseconds.
pub const META_REQUEST_TIMEOUT_MS: &str = "ando-request-timeout-ms";

/// Read the `content` of `<meta name="{name}">` from the page.
pub fn read_meta(name: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let doc = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{name}\"]");
        doc.query_selector(&selector).ok()?.and_then(|el| el.get_attribute("content"))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        None
    }
}

/// Widget config with page-level overrides applied.
pub fn config_from_page() -> WidgetConfig {
    WidgetConfig::from_overrides(
        read_meta(META_API_BASE).as_deref(),
        read_meta(META_REQUEST_TIMEOUT_MS).as_deref(),
    )
}

/// Scroll an element to its bottom edge.
#[cfg(feature = "csr")]
pub fn scroll_to_bottom(el: &web_sys::HtmlElement) {
    el.set_scroll_top(el.scroll_height());
}

/// Move keyboard focus to an element, ignoring failures.
#[cfg(feature = "csr")]
pub fn focus(el: &web_sys::HtmlElement) {
    let _ = el.focus();
}
