//! Hydration tracker
//!
//! The goal moves in 0.1 liter steps. Today's intake is capped at the goal,
//! so the deficit is never negative.

use serde::Serialize;

use super::types::{Bounds, Feedback, Tracker};

/// Daily water goal in liters: 1.0..=5.0, default 2.0
pub const WATER_GOAL: Bounds<f64> = Bounds::new(1.0, 5.0, 2.0);

/// Slider step for the water goal
pub const WATER_GOAL_STEP: f64 = 0.1;

/// Water consumed today; the upper bound is replaced by the goal
pub const WATER_CONSUMED: Bounds<f64> = Bounds::new(0.0, 5.0, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HydrationTracker {
    pub goal: f64,
    pub consumed: f64,
}

impl Default for HydrationTracker {
    fn default() -> Self {
        Self {
            goal: WATER_GOAL.default,
            consumed: WATER_CONSUMED.default,
        }
    }
}

impl HydrationTracker {
    pub fn new(goal: f64, consumed: f64) -> Self {
        Self::from_inputs(Some(goal), Some(consumed))
    }

    pub fn from_inputs(goal: Option<f64>, consumed: Option<f64>) -> Self {
        let goal = snap_to_step(WATER_GOAL.resolve(goal));
        let consumed = Self::consumed_bounds(goal).resolve(consumed);
        Self { goal, consumed }
    }

    /// Bounds of today's intake for a given goal
    pub fn consumed_bounds(goal: f64) -> Bounds<f64> {
        WATER_CONSUMED.with_max(goal)
    }

    pub fn deficit(&self) -> f64 {
        self.goal - self.consumed
    }
}

impl Tracker for HydrationTracker {
    fn title(&self) -> &'static str {
        "💧 Hydration Check"
    }

    fn feedback(&self) -> Feedback {
        if self.consumed >= self.goal {
            Feedback::success("You're well-hydrated today! ✅")
        } else {
            Feedback::warning(format!(
                "Drink {:.1} more liters to meet your goal.",
                self.deficit()
            ))
        }
    }
}

fn snap_to_step(value: f64) -> f64 {
    let snapped = (value / WATER_GOAL_STEP).round() * WATER_GOAL_STEP;
    // Re-round to one decimal to drop float noise like 2.3000000000000003
    WATER_GOAL.clamp((snapped * 10.0).round() / 10.0)
}
