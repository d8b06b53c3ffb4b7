//! Calorie intake tracker

use serde::Serialize;

use super::types::{Bounds, Feedback, Tracker};

/// Daily calorie goal: 1000..=5000, default 2000
pub const CALORIE_GOAL: Bounds<u32> = Bounds::new(1000, 5000, 2000);

/// Calories consumed today: 0..=10000, default 0
pub const CALORIES_CONSUMED: Bounds<u32> = Bounds::new(0, 10_000, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalorieTracker {
    pub goal: u32,
    pub consumed: u32,
}

impl Default for CalorieTracker {
    fn default() -> Self {
        Self {
            goal: CALORIE_GOAL.default,
            consumed: CALORIES_CONSUMED.default,
        }
    }
}

impl CalorieTracker {
    /// Build from raw inputs, clamping both into their bounds
    pub fn new(goal: u32, consumed: u32) -> Self {
        Self::from_inputs(Some(goal.into()), Some(consumed.into()))
    }

    pub fn from_inputs(goal: Option<i64>, consumed: Option<i64>) -> Self {
        Self {
            goal: CALORIE_GOAL.resolve_wide(goal),
            consumed: CALORIES_CONSUMED.resolve_wide(consumed),
        }
    }

    /// Goal minus consumed; negative once the goal is exceeded
    pub fn remaining(&self) -> i64 {
        i64::from(self.goal) - i64::from(self.consumed)
    }
}

impl Tracker for CalorieTracker {
    fn title(&self) -> &'static str {
        "🍎 Calorie Intake"
    }

    fn feedback(&self) -> Feedback {
        let remaining = self.remaining();
        // Landing exactly on the goal counts as exceeded.
        if remaining > 0 {
            Feedback::success(format!(
                "You have {} calories remaining today.",
                remaining
            ))
        } else {
            Feedback::error("You've exceeded your calorie goal for today!")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::Severity;

    #[test]
    fn test_defaults() {
        let tracker = CalorieTracker::default();
        assert_eq!(tracker.goal, 2000);
        assert_eq!(tracker.consumed, 0);
        assert_eq!(tracker.remaining(), 2000);
    }

    #[test]
    fn test_remaining_message() {
        for (goal, consumed) in [(2000, 1500), (1000, 0), (5000, 4999)] {
            let tracker = CalorieTracker::new(goal, consumed);
            let remaining = i64::from(goal) - i64::from(consumed);
            let feedback = tracker.feedback();
            assert_eq!(feedback.severity, Severity::Success);
            assert_eq!(
                feedback.message,
                format!("You have {} calories remaining today.", remaining)
            );
        }
    }

    #[test]
    fn test_exceeded() {
        let feedback = CalorieTracker::new(2000, 2500).feedback();
        assert_eq!(feedback.severity, Severity::Error);
        assert_eq!(
            feedback.message,
            "You've exceeded your calorie goal for today!"
        );
    }

    #[test]
    fn test_exact_goal_counts_as_exceeded() {
        let tracker = CalorieTracker::new(2000, 2000);
        assert_eq!(tracker.remaining(), 0);
        assert_eq!(tracker.feedback().severity, Severity::Error);
    }

    #[test]
    fn test_inputs_are_clamped() {
        let tracker = CalorieTracker::new(100, 50_000);
        assert_eq!(tracker.goal, 1000);
        assert_eq!(tracker.consumed, 10_000);
        assert_eq!(tracker.remaining(), -9000);
    }

    #[test]
    fn test_negative_and_oversized_inputs_clamped() {
        let tracker = CalorieTracker::from_inputs(Some(99_999_999_999), Some(-5));
        assert_eq!(tracker.goal, 5000);
        assert_eq!(tracker.consumed, 0);
        assert_eq!(tracker.feedback().message, "You have 5000 calories remaining today.");
    }
}
