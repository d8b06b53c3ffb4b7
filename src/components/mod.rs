//! UI Components
//!
//! Reusable Leptos components shared by the pages. Everything is rendered
//! to a string on the server, once per request, so a page renders
//! identically for identical inputs.

pub mod alert;
pub mod chart;
pub mod layout;
pub mod nav;

pub use alert::Alert;
pub use chart::LineChart;
pub use layout::{document, Layout};
pub use nav::Nav;

use leptos::IntoView;

/// Render a view to HTML in a fresh reactive runtime
pub fn to_html<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos::ssr::render_to_string(view).to_string()
}

/// Opening tag of the first element whose markup contains `needle`
#[cfg(test)]
pub(crate) fn tag_with<'a>(html: &'a str, needle: &str) -> &'a str {
    let at = html
        .find(needle)
        .unwrap_or_else(|| panic!("{needle} not found in {html}"));
    let start = html[..at].rfind('<').unwrap();
    let end = at + html[at..].find('>').unwrap();
    &html[start..=end]
}

/// Value of attribute `name` in a single tag
#[cfg(test)]
pub(crate) fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let key = format!(" {name}=\"");
    let start = tag.find(&key)? + key.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}
