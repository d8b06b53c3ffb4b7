//! Daily goal trackers
//!
//! Three independent goal/consumed pairs (calories, water, steps) and the
//! weekly step sample shown on the health dashboard. Every value here is
//! recomputed from the current inputs on each render pass.
//!
//! ## Example
//!
//! ```rust
//! use wellness::tracker::{CalorieTracker, Severity, Tracker};
//!
//! let calories = CalorieTracker::new(2000, 1500);
//! let feedback = calories.feedback();
//!
//! assert_eq!(feedback.severity, Severity::Success);
//! assert_eq!(feedback.message, "You have 500 calories remaining today.");
//! ```

pub mod calorie;
pub mod hydration;
pub mod steps;
pub mod types;
pub mod weekly;

pub use calorie::{CalorieTracker, CALORIES_CONSUMED, CALORIE_GOAL};
pub use hydration::{HydrationTracker, WATER_CONSUMED, WATER_GOAL, WATER_GOAL_STEP};
pub use steps::{StepTracker, STEPS_TAKEN, STEP_GOAL};
pub use types::{Bounds, Feedback, Severity, Tracker};
pub use weekly::{decayed_steps, StepSample, WeeklySample, DAILY_DECAY, WEEK_DAYS};
