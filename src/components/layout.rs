//! Page layout
//!
//! Full HTML document: head, sidebar navigation and the main content area.

use leptos::*;

use super::{to_html, Nav};
use crate::config::AppConfig;
use crate::pages::Page;

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #111827; color: #f9fafb; display: flex; min-height: 100vh; }
.sidebar { width: 240px; background: #1f2937; border-right: 1px solid #374151; padding: 1.5rem 1rem; }
.sidebar ul { list-style: none; padding: 0; }
.sidebar-hint { color: #9ca3af; font-size: 0.9rem; }
.nav-link { display: block; padding: 0.5rem 0.75rem; border-radius: 0.5rem; color: #d1d5db; text-decoration: none; }
.nav-link:hover, .nav-link.active { background: #374151; color: white; }
main { flex: 1; padding: 2rem 3rem; max-width: 960px; }
section { background: #1f2937; border-radius: 0.75rem; padding: 1.25rem 1.5rem; margin-bottom: 1.5rem; }
label { display: block; margin: 0.75rem 0 0.25rem; color: #d1d5db; }
input, textarea { width: 100%; box-sizing: border-box; background: #374151; color: white; border: 1px solid #4b5563; border-radius: 0.5rem; padding: 0.5rem; }
button { margin-top: 1rem; background: #ea580c; color: white; border: 0; border-radius: 0.5rem; padding: 0.6rem 1.5rem; font-weight: 600; cursor: pointer; }
.alert { display: flex; gap: 0.75rem; padding: 0.75rem 1rem; margin-top: 1rem; border-radius: 0.5rem; }
.alert-success { background: #14532d; }
.alert-error { background: #7f1d1d; }
.alert-warning { background: #713f12; }
.alert-info { background: #1e3a8a; }
.chart { width: 100%; height: auto; }
"#;

/// Document shell around a page body
#[component]
pub fn Layout(app: AppConfig, active: Page, children: Children) -> impl IntoView {
    let title = format!("{} {} · {}", app.icon, app.title, active.name());

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style inner_html=STYLE></style>
            </head>
            <body>
                <Nav active=active />
                <main>{children()}</main>
            </body>
        </html>
    }
}

/// Render a complete HTML document with `body` as the main content
pub fn document<F, N>(app: AppConfig, active: Page, body: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let html = to_html(move || {
        let body = body().into_view();
        view! { <Layout app=app active=active>{body}</Layout> }
    });
    format!("<!DOCTYPE html>{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_wraps_body() {
        let html = document(AppConfig::default(), Page::About, || {
            view! { <h1>"About body"</h1> }
        });

        assert!(html.starts_with("<!DOCTYPE html><html"));
        assert!(html.contains("🌿 Wellness Web App · About"));
        assert!(html.contains(".sidebar ul { list-style: none; padding: 0; }"));

        let main = html.find("<main").unwrap();
        let body = html.find("About body").unwrap();
        let main_end = html.find("</main>").unwrap();
        assert!(main < body && body < main_end);
    }

    #[test]
    fn test_layout_escapes_title() {
        let app = AppConfig {
            title: "<Wellness>".to_string(),
            icon: "🌿".to_string(),
        };
        let html = document(app, Page::Home, || ());
        assert!(html.contains("&lt;Wellness&gt;"));
        assert!(!html.contains("<Wellness>"));
    }
}
