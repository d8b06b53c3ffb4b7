//! Contact Page
//!
//! Renders the contact form for the current pass. Submitted values are
//! echoed back into the form and then dropped with the request.

use leptos::*;

use crate::components::Alert;
use crate::contact::{ContactState, ContactSubmission};

/// What the contact page shows in this pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactView {
    pub submission: ContactSubmission,
    pub state: ContactState,
}

impl ContactView {
    /// Validate a submission and build the view of the result
    pub fn submitted(submission: ContactSubmission) -> Self {
        let state = ContactState::submit(&submission);
        Self { submission, state }
    }

    /// "Missing: Email, Message" for a rejected submission
    fn missing_summary(&self) -> Option<String> {
        match &self.state {
            ContactState::Rejected(fields) if !fields.is_empty() => {
                let names: Vec<_> = fields.iter().map(|f| f.label()).collect();
                Some(format!("Missing: {}", names.join(", ")))
            }
            _ => None,
        }
    }
}

#[component]
pub fn ContactPage(contact: ContactView) -> impl IntoView {
    let feedback = contact.state.feedback();
    let missing = contact.missing_summary();
    let ContactSubmission {
        name,
        email,
        message,
    } = contact.submission;

    view! {
        <h1>"📞 Contact Us"</h1>
        <p>"We'd love to hear from you! Fill out the form below:"</p>
        <form method="post" action="/contact">
            <label for="name">"Name"</label>
            <input type="text" id="name" name="name" value=name />
            <label for="email">"Email"</label>
            <input type="text" id="email" name="email" value=email />
            <label for="message">"Message"</label>
            <textarea id="message" name="message" rows="5">{message}</textarea>
            <button type="submit">"Send"</button>
        </form>
        {feedback.map(|feedback| view! { <Alert feedback=feedback /> })}
        {missing.map(|summary| view! { <p class="missing-fields">{summary}</p> })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{attr, tag_with, to_html};

    fn render(contact: ContactView) -> String {
        to_html(move || view! { <ContactPage contact=contact /> })
    }

    #[test]
    fn test_idle_form() {
        let html = render(ContactView::default());
        assert!(html.contains("📞 Contact Us"));
        assert!(html.contains(">Send</button>"));
        assert!(!html.contains("data-severity"));
        assert!(!html.contains("missing-fields"));
    }

    #[test]
    fn test_accepted() {
        let view = ContactView::submitted(ContactSubmission::new("Ada", "ada@example.com", "Hi"));
        let html = render(view);
        assert!(html.contains("Thank you!"));
        assert!(html.contains("alert-success"));
    }

    #[test]
    fn test_rejected_names_missing_fields() {
        let view = ContactView::submitted(ContactSubmission::new("Ada", " ", ""));
        let html = render(view);
        assert!(html.contains("Please fill in all fields before submitting."));
        assert!(html.contains("alert-error"));
        assert!(html.contains("Missing: Email, Message"));

        let name = tag_with(&html, r#"name="name""#);
        assert_eq!(attr(name, "value"), Some("Ada"));
    }

    #[test]
    fn test_submitted_values_escaped() {
        let view = ContactView::submitted(ContactSubmission::new(
            r#"Ada "The Countess""#,
            "a@b.c",
            "<script></textarea>",
        ));
        let html = render(view);
        assert!(html.contains("&quot;The Countess&quot;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;/textarea&gt;"));
        assert_eq!(html.matches("</textarea>").count(), 1);
    }
}
