//! Health Dashboard Page
//!
//! Calorie, hydration and step trackers plus the weekly step chart. The
//! inputs live in a GET form, so every change is a new request and a full
//! recomputation.

use chrono::NaiveDate;
use leptos::*;
use serde::Deserialize;

use crate::components::{Alert, LineChart};
use crate::form::{blank_as_none, whole_number};
use crate::tracker::{
    Bounds, CalorieTracker, Feedback, HydrationTracker, StepTracker, Tracker, WeeklySample,
    CALORIES_CONSUMED, CALORIE_GOAL, STEP_GOAL, WATER_GOAL, WATER_GOAL_STEP,
};

/// Raw dashboard inputs as submitted; absent or blank values take the defaults
///
/// Counts are kept as `i64` so that negative or oversized entries are
/// clamped into range rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct DashboardInputs {
    #[serde(default, deserialize_with = "whole_number")]
    pub calorie_goal: Option<i64>,
    #[serde(default, deserialize_with = "whole_number")]
    pub calories_today: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub water_goal: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub water_today: Option<f64>,
    #[serde(default, deserialize_with = "whole_number")]
    pub step_goal: Option<i64>,
    #[serde(default, deserialize_with = "whole_number")]
    pub steps_today: Option<i64>,
}

impl DashboardInputs {
    pub fn calories(&self) -> CalorieTracker {
        CalorieTracker::from_inputs(self.calorie_goal, self.calories_today)
    }

    pub fn hydration(&self) -> HydrationTracker {
        HydrationTracker::from_inputs(self.water_goal, self.water_today)
    }

    pub fn steps(&self) -> StepTracker {
        StepTracker::from_inputs(self.step_goal, self.steps_today)
    }
}

fn widen(bounds: Bounds<u32>) -> Bounds<f64> {
    Bounds::new(
        f64::from(bounds.min),
        f64::from(bounds.max),
        f64::from(bounds.default),
    )
}

#[component]
pub fn DashboardPage(inputs: DashboardInputs, today: NaiveDate) -> impl IntoView {
    let calories = inputs.calories();
    let hydration = inputs.hydration();
    let steps = inputs.steps();
    let weekly = WeeklySample::generate(steps.consumed, today);

    tracing::debug!(
        remaining_calories = calories.remaining(),
        water_deficit = hydration.deficit(),
        step_deficit = steps.deficit(),
        "Evaluated dashboard"
    );

    view! {
        <h1>"🩺 Health Dashboard"</h1>
        <form method="get" action="/dashboard" onchange="this.submit()">
            <TrackerSection title=calories.title() feedback=calories.feedback()>
                <NumberInput
                    name="calorie_goal"
                    label="Your daily calorie goal:"
                    bounds=widen(CALORIE_GOAL)
                    value=f64::from(calories.goal)
                    step="1"
                />
                <NumberInput
                    name="calories_today"
                    label="Calories consumed today:"
                    bounds=widen(CALORIES_CONSUMED)
                    value=f64::from(calories.consumed)
                    step="1"
                />
            </TrackerSection>

            <TrackerSection title=hydration.title() feedback=hydration.feedback()>
                <GoalSlider
                    name="water_goal"
                    label="Daily water goal (liters):"
                    bounds=WATER_GOAL
                    value=hydration.goal
                />
                // Intake is echoed at full precision; rounding it here would
                // change the feedback on the next submit.
                <NumberInput
                    name="water_today"
                    label="Water consumed today (liters):"
                    bounds=HydrationTracker::consumed_bounds(hydration.goal)
                    value=hydration.consumed
                    step="any"
                />
            </TrackerSection>

            <TrackerSection title=steps.title() feedback=steps.feedback()>
                <NumberInput
                    name="step_goal"
                    label="Your daily step goal:"
                    bounds=widen(STEP_GOAL)
                    value=f64::from(steps.goal)
                    step="1"
                />
                <NumberInput
                    name="steps_today"
                    label="Steps taken today:"
                    bounds=widen(StepTracker::consumed_bounds(steps.goal))
                    value=f64::from(steps.consumed)
                    step="1"
                />
            </TrackerSection>

            <noscript>
                <button type="submit">"Update"</button>
            </noscript>
        </form>

        <section>
            <h2>"📊 Your Weekly Step Progress"</h2>
            <LineChart title="Weekly Step Trend" sample=weekly />
        </section>

        <p>
            "📄 " <strong>"Coming soon:"</strong>
            " Export your health summary as a PDF report!"
        </p>
    }
}

/// One tracker: heading, its inputs and the feedback for the current pair
#[component]
fn TrackerSection(title: &'static str, feedback: Feedback, children: Children) -> impl IntoView {
    view! {
        <section>
            <h2>{title}</h2>
            {children()}
            <Alert feedback=feedback />
        </section>
    }
}

#[component]
fn NumberInput(
    name: &'static str,
    label: &'static str,
    bounds: Bounds<f64>,
    value: f64,
    step: &'static str,
) -> impl IntoView {
    view! {
        <label for=name>{label}</label>
        <input
            type="number"
            id=name
            name=name
            min=bounds.min
            max=bounds.max
            step=step
            value=value
        />
    }
}

/// Range slider for a goal, snapped to the slider step
#[component]
fn GoalSlider(
    name: &'static str,
    label: &'static str,
    bounds: Bounds<f64>,
    value: f64,
) -> impl IntoView {
    view! {
        <label for=name>
            {label} " " <output>{format!("{:.1}", value)}</output>
        </label>
        <input
            type="range"
            id=name
            name=name
            min=format!("{:.1}", bounds.min)
            max=format!("{:.1}", bounds.max)
            step=WATER_GOAL_STEP
            value=format!("{:.1}", value)
        />
    }
}
