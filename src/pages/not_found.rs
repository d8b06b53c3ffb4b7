//! 404 Not Found page

use leptos::*;

use crate::components::document;
use crate::config::AppConfig;
use crate::pages::Page;

#[component]
pub fn NotFoundPage(#[prop(into)] path: String) -> impl IntoView {
    view! {
        <h1>"🔍 Page Not Found"</h1>
        <p>"The page " <code>{path}</code> " doesn't exist."</p>
        <p><a href="/">"Go to Home"</a></p>
    }
}

/// Full 404 document for an unknown `path`
pub fn render(app: &AppConfig, path: &str) -> String {
    let path = path.to_string();
    document(app.clone(), Page::Home, move || view! { <NotFoundPage path=path /> })
}
