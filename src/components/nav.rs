//! Navigation Component
//!
//! Sidebar listing the four pages, with the active one highlighted.

use leptos::*;

use crate::pages::Page;

/// Navigation sidebar component
#[component]
pub fn Nav(active: Page) -> impl IntoView {
    view! {
        <nav class="sidebar">
            <h2>"🧭 Navigation"</h2>
            <p class="sidebar-hint">"Select a page:"</p>
            <ul>
                {Page::ALL
                    .into_iter()
                    .map(|page| view! { <NavLink page=page active={page == active} /> })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(page: Page, active: bool) -> impl IntoView {
    let (class, current) = if active {
        ("nav-link active", Some("page"))
    } else {
        ("nav-link", None)
    };

    view! {
        <li>
            <a class=class href=page.path() aria-current=current>
                {page.label()}
            </a>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{attr, tag_with, to_html};

    #[test]
    fn test_lists_all_pages() {
        let html = to_html(|| view! { <Nav active=Page::Home /> });

        assert!(html.contains("🧭 Navigation"));
        for page in Page::ALL {
            assert!(html.contains(page.label()));
            assert!(html.contains(&format!(r#"href="{}""#, page.path())));
        }
    }

    #[test]
    fn test_single_active_link() {
        let html = to_html(|| view! { <Nav active=Page::Contact /> });
        assert_eq!(html.matches("aria-current").count(), 1);

        let link = tag_with(&html, r#"href="/contact""#);
        assert_eq!(attr(link, "aria-current"), Some("page"));
        assert_eq!(attr(link, "class"), Some("nav-link active"));

        let home = tag_with(&html, r#"href="/""#);
        assert_eq!(attr(home, "class"), Some("nav-link"));
    }
}
