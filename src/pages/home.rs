//! Home Page

use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <h1>"🌟 Welcome to Your Wellness Hub"</h1>
        <p>
            "Stay on top of your health and lifestyle goals with this all-in-one wellness tracker built in "
            <strong>"Rust"</strong>
            "."
        </p>
        <ul>
            <li>
                "Use the " <a href="/dashboard"><strong>"Health Dashboard"</strong></a>
                " to log daily wellness metrics."
            </li>
            <li>
                "Learn more on the " <a href="/about"><strong>"About"</strong></a> " page."
            </li>
            <li>
                "Reach out through the " <a href="/contact"><strong>"Contact"</strong></a> " form."
            </li>
        </ul>
    }
}
