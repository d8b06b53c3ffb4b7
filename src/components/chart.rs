//! Chart Component
//!
//! Line chart with markers rendered as inline SVG.

use leptos::*;

use crate::tracker::WeeklySample;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 40.0;

const GRID_LINES: usize = 5;

const LINE_COLOR: &str = "#FF9800";
const GRID_COLOR: &str = "#374151";
const LABEL_COLOR: &str = "#9ca3af";
const BACKGROUND: &str = "#1f2937";

/// Plot area mapping from (index, steps) to SVG coordinates
struct Scale {
    points: usize,
    y_max: f64,
}

impl Scale {
    fn new(sample: &WeeklySample) -> Self {
        // Steps are never negative, so the axis starts at zero. A flat zero
        // series still needs a non-empty range.
        let y_max = match sample.max_steps() {
            0 => 1.0,
            max => f64::from(max) * 1.1,
        };
        Self {
            points: sample.points.len(),
            y_max,
        }
    }

    fn chart_width() -> f64 {
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn chart_height() -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn x(&self, i: usize) -> f64 {
        if self.points <= 1 {
            MARGIN_LEFT + Self::chart_width() / 2.0
        } else {
            MARGIN_LEFT + (i as f64 / (self.points - 1) as f64) * Self::chart_width()
        }
    }

    fn y(&self, steps: u32) -> f64 {
        MARGIN_TOP + ((self.y_max - f64::from(steps)) / self.y_max) * Self::chart_height()
    }
}

/// Weekly sample as a line chart, x = date, y = steps
#[component]
pub fn LineChart(#[prop(into)] title: String, sample: WeeklySample) -> impl IntoView {
    let scale = Scale::new(&sample);

    let grid = (0..=GRID_LINES)
        .map(|i| {
            let fraction = i as f64 / GRID_LINES as f64;
            let y = MARGIN_TOP + fraction * Scale::chart_height();
            let value = scale.y_max - fraction * scale.y_max;
            view! {
                <line
                    x1=MARGIN_LEFT
                    y1=format!("{:.1}", y)
                    x2={WIDTH - MARGIN_RIGHT}
                    y2=format!("{:.1}", y)
                    stroke=GRID_COLOR
                    stroke-width="1"
                />
                <text x="5" y=format!("{:.1}", y + 4.0) fill=LABEL_COLOR font-size="12">
                    {format!("{:.0}", value)}
                </text>
            }
        })
        .collect_view();

    let line = sample
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:.1},{:.1}", scale.x(i), scale.y(p.steps)))
        .collect::<Vec<_>>()
        .join(" ");

    let markers = sample
        .points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = format!("{:.1}", scale.x(i));
            view! {
                <circle
                    class="chart-marker"
                    cx=x.clone()
                    cy=format!("{:.1}", scale.y(point.steps))
                    r="4"
                    fill=LINE_COLOR
                >
                    <title>{format!("{}: {} steps", point.date, point.steps)}</title>
                </circle>
                <text
                    x=x
                    y={HEIGHT - 12.0}
                    fill=LABEL_COLOR
                    font-size="12"
                    text-anchor="middle"
                >
                    {point.date.format("%m/%d").to_string()}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg
            class="chart"
            viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
            role="img"
            aria-label=title.clone()
            xmlns="http://www.w3.org/2000/svg"
        >
            <rect width=WIDTH height=HEIGHT fill=BACKGROUND rx="8" />
            <text
                class="chart-title"
                x={WIDTH / 2.0}
                y="24"
                fill="white"
                font-size="16"
                text-anchor="middle"
            >
                {title}
            </text>
            {grid}
            <polyline
                class="chart-line"
                points=line
                fill="none"
                stroke=LINE_COLOR
                stroke-width="2"
            />
            {markers}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::to_html;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    fn chart(steps_today: u32) -> String {
        let sample = WeeklySample::generate(steps_today, today());
        to_html(move || view! { <LineChart title="Weekly Step Trend" sample=sample /> })
    }

    #[test]
    fn test_one_marker_per_day() {
        let svg = chart(3000);

        assert_eq!(svg.matches("chart-marker").count(), 7);
        assert!(svg.contains("Weekly Step Trend"));
        assert!(svg.contains("05/04"));
        assert!(svg.contains("05/10"));
        assert!(svg.contains("2024-05-04: 3000 steps"));
        assert!(svg.contains("2024-05-10: 0 steps"));
    }

    #[test]
    fn test_scale_spans_plot_area() {
        let sample = WeeklySample::generate(3000, today());
        let scale = Scale::new(&sample);

        assert_eq!(scale.x(0), MARGIN_LEFT);
        assert_eq!(scale.x(6), WIDTH - MARGIN_RIGHT);
        assert_eq!(scale.y(0), HEIGHT - MARGIN_BOTTOM);
        assert!(scale.y(3000) > MARGIN_TOP);
    }

    #[test]
    fn test_flat_zero_series_renders() {
        let svg = chart(0);

        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(chart(4200), chart(4200));
    }
}
