//! # Wellness
//!
//! A small server-rendered wellness hub: daily calorie, hydration and step
//! goals with instant feedback, a weekly step chart and a contact form.
//!
//! ## Features
//!
//! - **Render per request**: every page is recomputed from the current inputs
//! - **Trackers**: goal/consumed pairs with clamped inputs and status messages
//! - **Charts**: weekly step trend as inline SVG
//! - **JSON API**: the same evaluations for scripted clients
//!
//! ## Modules
//!
//! - [`tracker`]: Calorie, hydration and step trackers, weekly sample
//! - [`contact`]: Contact form validation
//! - [`pages`]: Navigator and page rendering
//! - [`form`]: Lenient parsing of form and query values
//! - [`components`]: Shared Leptos components
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use wellness::tracker::{HydrationTracker, StepTracker, Tracker, WeeklySample};
//!
//! let water = HydrationTracker::new(2.0, 1.25);
//! assert_eq!(water.feedback().message, "Drink 0.8 more liters to meet your goal.");
//!
//! let steps = StepTracker::new(10_000, 3_000);
//! let today = chrono::NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
//! let week = WeeklySample::generate(steps.consumed, today);
//! assert_eq!(week.steps(), vec![3000, 2500, 2000, 1500, 1000, 500, 0]);
//! ```

pub mod api;
pub mod components;
pub mod config;
pub mod contact;
pub mod form;
pub mod logging;
pub mod pages;
pub mod tracker;

// Re-export top-level types for convenience
pub use tracker::{
    Bounds, CalorieTracker, Feedback, HydrationTracker, Severity, StepSample, StepTracker,
    Tracker, WeeklySample,
};

pub use contact::{ContactError, ContactField, ContactState, ContactSubmission};

pub use pages::{render as render_page, DashboardInputs, Page, RenderContext};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{AppConfig, Config, ConfigError, LoggingConfig, ServerConfig};
