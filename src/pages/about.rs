//! About Page

use leptos::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <h1>"📖 About This Application"</h1>
        <p>"This is a multi-functional web app built to help individuals:"</p>
        <ul>
            <li>"Track health habits like calories, water intake, and physical activity."</li>
            <li>"Set and monitor wellness goals."</li>
            <li>"Visualize progress over time."</li>
        </ul>
        <p><strong>"Technologies used"</strong>":"</p>
        <ul>
            <li>"Rust with Axum (web server)"</li>
            <li>"Leptos (server-rendered components)"</li>
            <li>"Inline SVG (charts)"</li>
            <li>"Serde and TOML (configuration)"</li>
        </ul>
        <p>"Built with ❤️ for a healthier you!"</p>
    }
}
