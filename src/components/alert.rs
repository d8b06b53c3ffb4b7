//! Alert Component
//!
//! Inline status message in one of the four severity colors.

use leptos::*;

use crate::tracker::{Feedback, Severity};

#[component]
pub fn Alert(feedback: Feedback) -> impl IntoView {
    let (icon, class) = match feedback.severity {
        Severity::Success => ("✓", "alert-success"),
        Severity::Error => ("✕", "alert-error"),
        Severity::Warning => ("⚠", "alert-warning"),
        Severity::Info => ("ℹ", "alert-info"),
    };

    view! {
        <div
            class=format!("alert {}", class)
            role="status"
            data-severity=feedback.severity.as_str()
        >
            <span class="alert-icon">{icon}</span>
            <span class="alert-message">{feedback.message}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{attr, tag_with, to_html};

    #[test]
    fn test_alert_classes() {
        let feedback = Feedback::warning("Drink 0.8 more liters to meet your goal.");
        let html = to_html(move || view! { <Alert feedback=feedback /> });

        let tag = tag_with(&html, "data-severity");
        assert_eq!(attr(tag, "class"), Some("alert alert-warning"));
        assert_eq!(attr(tag, "data-severity"), Some("warning"));
        assert!(html.contains("⚠"));
        assert!(html.contains("Drink 0.8 more liters to meet your goal."));
    }

    #[test]
    fn test_alert_escapes_message() {
        let feedback = Feedback::info("<b>hi</b>");
        let html = to_html(move || view! { <Alert feedback=feedback /> });

        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
