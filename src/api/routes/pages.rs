//! Page Routes
//!
//! HTML pages, one full render pass per request.
//!
//! - GET / - Home
//! - GET /about - About
//! - GET /dashboard - Health dashboard (inputs as query parameters)
//! - GET /contact - Empty contact form
//! - POST /contact - Validate a contact submission

use axum::{
    extract::{Form, Query, State},
    http::{StatusCode, Uri},
    response::Html,
};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::contact::ContactSubmission;
use crate::pages::{self, ContactView, DashboardInputs, Page};

/// GET /
pub async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(pages::render(Page::Home, &state.render_context()))
}

/// GET /about
pub async fn about(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(pages::render(Page::About, &state.render_context()))
}

/// GET /dashboard
///
/// Missing parameters take their defaults; out-of-range values are clamped.
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Query(inputs): Query<DashboardInputs>,
) -> Html<String> {
    let ctx = state.render_context().with_dashboard(inputs);
    Html(pages::render(Page::HealthDashboard, &ctx))
}

/// GET /contact
pub async fn contact_form(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(pages::render(Page::Contact, &state.render_context()))
}

/// POST /contact
///
/// The submission is validated and dropped; nothing is stored or sent.
/// An incomplete form still renders with 200 so it can be corrected.
pub async fn contact_submit(
    State(state): State<Arc<AppState>>,
    Form(submission): Form<ContactSubmission>,
) -> Html<String> {
    let ctx = state
        .render_context()
        .with_contact(ContactView::submitted(submission));
    Html(pages::render(Page::Contact, &ctx))
}

/// Fallback for unknown paths
pub async fn not_found(State(state): State<Arc<AppState>>, uri: Uri) -> (StatusCode, Html<String>) {
    tracing::debug!(path = %uri.path(), "Page not found");
    (
        StatusCode::NOT_FOUND,
        Html(pages::not_found::render(&state.config.app, uri.path())),
    )
}
