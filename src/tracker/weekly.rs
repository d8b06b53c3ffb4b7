//! Weekly step sample
//!
//! Seven demo points derived from today's step count, used by the dashboard
//! chart. Nothing here reads historical data.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Number of days in the sample
pub const WEEK_DAYS: usize = 7;

/// Steps subtracted per day offset
pub const DAILY_DECAY: u32 = 500;

/// One point of the weekly sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepSample {
    pub date: NaiveDate,
    pub steps: u32,
}

/// Seven (date, steps) points, dates ascending and ending at `today`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySample {
    pub points: Vec<StepSample>,
}

impl WeeklySample {
    pub fn generate(steps_today: u32, today: NaiveDate) -> Self {
        let first_day = today - Duration::days(WEEK_DAYS as i64 - 1);

        let points = (0..WEEK_DAYS)
            .map(|i| StepSample {
                date: first_day + Duration::days(i as i64),
                steps: decayed_steps(steps_today, i as u32),
            })
            .collect();

        Self { points }
    }

    pub fn steps(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.steps).collect()
    }

    pub fn max_steps(&self) -> u32 {
        self.points.iter().map(|p| p.steps).max().unwrap_or(0)
    }
}

/// `max(0, steps_today - 500 * offset)`
pub fn decayed_steps(steps_today: u32, offset: u32) -> u32 {
    steps_today.saturating_sub(DAILY_DECAY.saturating_mul(offset))
}
