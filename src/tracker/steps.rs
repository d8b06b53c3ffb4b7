//! Daily step tracker

use serde::Serialize;

use super::types::{Bounds, Feedback, Tracker};

/// Daily step goal: 1000..=25000, default 10000
pub const STEP_GOAL: Bounds<u32> = Bounds::new(1000, 25_000, 10_000);

/// Steps taken today; the upper bound is replaced by twice the goal
pub const STEPS_TAKEN: Bounds<u32> = Bounds::new(0, 50_000, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepTracker {
    pub goal: u32,
    pub consumed: u32,
}

impl Default for StepTracker {
    fn default() -> Self {
        Self {
            goal: STEP_GOAL.default,
            consumed: STEPS_TAKEN.default,
        }
    }
}

impl StepTracker {
    pub fn new(goal: u32, consumed: u32) -> Self {
        Self::from_inputs(Some(goal.into()), Some(consumed.into()))
    }

    pub fn from_inputs(goal: Option<i64>, consumed: Option<i64>) -> Self {
        let goal = STEP_GOAL.resolve_wide(goal);
        let consumed = Self::consumed_bounds(goal).resolve_wide(consumed);
        Self { goal, consumed }
    }

    pub fn consumed_bounds(goal: u32) -> Bounds<u32> {
        STEPS_TAKEN.with_max(goal.saturating_mul(2))
    }

    pub fn deficit(&self) -> i64 {
        i64::from(self.goal) - i64::from(self.consumed)
    }
}

impl Tracker for StepTracker {
    fn title(&self) -> &'static str {
        "🚶‍♀️ Daily Steps"
    }

    fn feedback(&self) -> Feedback {
        if self.consumed >= self.goal {
            Feedback::success("Step goal achieved! Great job 🎉")
        } else {
            Feedback::info(format!("Only {} more steps to go!", self.deficit()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::Severity;

    #[test]
    fn test_deficit_message() {
        let feedback = StepTracker::new(10_000, 7_321).feedback();
        assert_eq!(feedback.severity, Severity::Info);
        assert_eq!(feedback.message, "Only 2679 more steps to go!");
    }

    #[test]
    fn test_goal_achieved() {
        for consumed in [10_000, 15_000, 20_000] {
            let feedback = StepTracker::new(10_000, consumed).feedback();
            assert_eq!(feedback.severity, Severity::Success);
            assert_eq!(feedback.message, "Step goal achieved! Great job 🎉");
        }
    }

    #[test]
    fn test_consumed_capped_at_twice_goal() {
        let tracker = StepTracker::new(5_000, 40_000);
        assert_eq!(tracker.consumed, 10_000);
        assert_eq!(tracker.deficit(), -5_000);
    }

    #[test]
    fn test_goal_clamped_before_consumed() {
        // Goal 500 becomes 1000, so consumed caps at 2000 rather than 1000.
        let tracker = StepTracker::new(500, 3_000);
        assert_eq!(tracker.goal, 1_000);
        assert_eq!(tracker.consumed, 2_000);
    }

    #[test]
    fn test_wide_inputs_clamped() {
        let tracker = StepTracker::from_inputs(Some(-1), Some(99_999_999_999));
        assert_eq!(tracker.goal, 1_000);
        assert_eq!(tracker.consumed, 2_000);
    }
}
