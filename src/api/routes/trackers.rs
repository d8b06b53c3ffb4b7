//! Tracker Routes
//!
//! JSON evaluations of the dashboard trackers.
//!
//! - GET /api/v1/pages - Navigator pages
//! - GET /api/v1/calories - Calorie feedback
//! - GET /api/v1/hydration - Hydration feedback
//! - GET /api/v1/steps - Step feedback
//! - GET /api/v1/steps/weekly - Weekly step sample
//!
//! Unparseable query values are answered with a JSON 400, unknown paths
//! with a JSON 404.

use axum::{
    extract::{rejection::QueryRejection, OriginalUri, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    CountQuery, LitersQuery, PageListResponse, TrackerResponse, WeeklyQuery, WeeklyResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::pages::Page;
use crate::tracker::{CalorieTracker, HydrationTracker, StepTracker, WeeklySample};

/// GET /api/v1/pages
pub async fn list_pages() -> Json<PageListResponse> {
    Json(PageListResponse {
        pages: Page::ALL.into_iter().map(Into::into).collect(),
    })
}

/// GET /api/v1/calories?goal=&consumed=
pub async fn calories(
    query: Result<Query<CountQuery>, QueryRejection>,
) -> ApiResult<Json<TrackerResponse>> {
    let Query(q) = query?;
    Ok(Json(CalorieTracker::from_inputs(q.goal, q.consumed).into()))
}

/// GET /api/v1/hydration?goal=&consumed=
pub async fn hydration(
    query: Result<Query<LitersQuery>, QueryRejection>,
) -> ApiResult<Json<TrackerResponse>> {
    let Query(q) = query?;
    Ok(Json(HydrationTracker::from_inputs(q.goal, q.consumed).into()))
}

/// GET /api/v1/steps?goal=&consumed=
pub async fn steps(
    query: Result<Query<CountQuery>, QueryRejection>,
) -> ApiResult<Json<TrackerResponse>> {
    let Query(q) = query?;
    Ok(Json(StepTracker::from_inputs(q.goal, q.consumed).into()))
}

/// GET /api/v1/steps/weekly?steps_today=
///
/// Uses the same clamping as the dashboard's step input with the default goal.
pub async fn weekly(
    State(state): State<Arc<AppState>>,
    query: Result<Query<WeeklyQuery>, QueryRejection>,
) -> ApiResult<Json<WeeklyResponse>> {
    let Query(q) = query?;
    let today = state.today();
    let steps_today = StepTracker::from_inputs(None, q.steps_today).consumed;
    Ok(Json(WeeklyResponse::new(
        today,
        WeeklySample::generate(steps_today, today),
    )))
}

/// Fallback for unknown paths under /api/v1
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(format!("No endpoint at {}", uri.path()))
}
