//! Limited inline formatting for assistant text.
//!
//! Only three constructs are interpreted: `**bold**`, `__emphasis__`, and
//! newlines. Everything else is HTML-escaped first, so markup inside a
//! remote message can never reach the page as live tags.

use std::sync::LazyLock;

use regex::Regex;

use crate::api::LanguageInfo;
use crate::strings;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));
static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.*?)__").expect("emphasis pattern is valid"));

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Render assistant text to an HTML fragment safe for `inner_html`.
///
/// Markers do not span lines.
#[must_use]
pub fn format_message(text: &str) -> String {
    let escaped = escape_html(text);
    let bold = BOLD.replace_all(&escaped, "<strong>$1</strong>");
    let emphasized = EMPHASIS.replace_all(&bold, "<em>$1</em>");
    emphasized.replace('\n', "<br>")
}

/// Drop the formatting markers, keeping their inner text. Used by plain
/// text front ends.
#[must_use]
pub fn strip_markers(text: &str) -> String {
    let bold = BOLD.replace_all(text, "$1");
    EMPHASIS.replace_all(&bold, "$1").into_owned()
}

/// Returns the URL when it is an absolute `http`/`https` link.
///
/// Anything else (`javascript:`, relative paths, data URLs) is not linkable.
#[must_use]
pub fn safe_link_href(url: &str) -> Option<&str> {
    let url = url.trim();
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    (lower.starts_with("http://") || lower.starts_with("https://")).then_some(url)
}

/// Plain-text rendition of an info block, one line per field.
#[must_use]
pub fn info_summary(info: &LanguageInfo) -> String {
    let mut lines = vec![
        info.description.clone(),
        format!("{}{}", strings::INFO_USES, info.uses.join(", ")),
        format!("{}{}", strings::INFO_DIFFICULTY, info.difficulty),
        format!("{}{}", strings::INFO_POPULARITY, info.popularity),
    ];
    if let Some(resources) = info.resources.as_ref().filter(|r| !r.is_empty()) {
        lines.push(strings::INFO_RESOURCES.to_owned());
        lines.extend(resources.iter().map(|r| format!("{} <{}>", r.name, r.url)));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;
