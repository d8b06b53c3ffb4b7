//! Data Transfer Objects
//!
//! Request and response types for the JSON endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::form::{blank_as_none, whole_number};
use crate::pages::Page;
use crate::tracker::{
    CalorieTracker, Feedback, HydrationTracker, Severity, StepSample, StepTracker, Tracker,
    WeeklySample,
};

// ============================================
// TRACKER DTOs
// ============================================

/// Integer goal/consumed query (calories, steps)
///
/// Values are kept wide so negatives and overflows clamp like the
/// dashboard inputs do.
#[derive(Debug, Default, Deserialize)]
pub struct CountQuery {
    #[serde(default, deserialize_with = "whole_number")]
    pub goal: Option<i64>,
    #[serde(default, deserialize_with = "whole_number")]
    pub consumed: Option<i64>,
}

/// Liter goal/consumed query (hydration)
#[derive(Debug, Default, Deserialize)]
pub struct LitersQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub goal: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub consumed: Option<f64>,
}

/// Evaluation of one tracker after clamping
#[derive(Debug, Serialize, Deserialize)]
pub struct TrackerResponse {
    pub goal: f64,
    pub consumed: f64,
    /// Goal minus consumed
    pub remaining: f64,
    pub severity: Severity,
    pub message: String,
}

impl TrackerResponse {
    fn new(goal: f64, consumed: f64, remaining: f64, feedback: Feedback) -> Self {
        Self {
            goal,
            consumed,
            remaining,
            severity: feedback.severity,
            message: feedback.message,
        }
    }
}

impl From<CalorieTracker> for TrackerResponse {
    fn from(t: CalorieTracker) -> Self {
        Self::new(
            f64::from(t.goal),
            f64::from(t.consumed),
            t.remaining() as f64,
            t.feedback(),
        )
    }
}

impl From<HydrationTracker> for TrackerResponse {
    fn from(t: HydrationTracker) -> Self {
        Self::new(t.goal, t.consumed, t.deficit(), t.feedback())
    }
}

impl From<StepTracker> for TrackerResponse {
    fn from(t: StepTracker) -> Self {
        Self::new(
            f64::from(t.goal),
            f64::from(t.consumed),
            t.deficit() as f64,
            t.feedback(),
        )
    }
}

// ============================================
// WEEKLY SAMPLE DTOs
// ============================================

#[derive(Debug, Default, Deserialize)]
pub struct WeeklyQuery {
    #[serde(default, deserialize_with = "whole_number")]
    pub steps_today: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeeklyResponse {
    pub today: NaiveDate,
    pub points: Vec<StepPointDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StepPointDto {
    pub date: NaiveDate,
    pub steps: u32,
}

impl From<StepSample> for StepPointDto {
    fn from(p: StepSample) -> Self {
        Self {
            date: p.date,
            steps: p.steps,
        }
    }
}

impl WeeklyResponse {
    pub fn new(today: NaiveDate, sample: WeeklySample) -> Self {
        Self {
            today,
            points: sample.points.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================
// CONTACT DTOs
// ============================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    /// Status: "ok"
    pub status: String,
    pub message: String,
}

// ============================================
// NAVIGATION DTOs
// ============================================

#[derive(Debug, Serialize)]
pub struct PageDto {
    pub slug: &'static str,
    pub label: &'static str,
    pub path: &'static str,
}

impl From<Page> for PageDto {
    fn from(page: Page) -> Self {
        Self {
            slug: page.slug(),
            label: page.label(),
            path: page.path(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PageListResponse {
    pub pages: Vec<PageDto>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
