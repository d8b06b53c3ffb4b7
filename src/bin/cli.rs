//! Wellness CLI
//!
//! Command-line interface for the wellness trackers:
//! - Evaluate calorie, hydration and step goals
//! - Print the weekly step sample
//! - Check a contact submission
//! - Generate a default config file

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use wellness::config::generate_default_config;
use wellness::contact::{ContactState, ContactSubmission};
use wellness::tracker::{CalorieTracker, Feedback, HydrationTracker, StepTracker, Tracker, WeeklySample};

#[derive(Parser)]
#[command(name = "wellness-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Daily wellness goals from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calories remaining against a daily goal
    Calories {
        /// Daily calorie goal (1000-5000)
        #[arg(short, long, allow_negative_numbers = true)]
        goal: Option<i64>,
        /// Calories consumed today (0-10000)
        #[arg(short, long, allow_negative_numbers = true)]
        consumed: Option<i64>,
    },

    /// Liters left to drink today
    Hydration {
        /// Daily water goal in liters (1.0-5.0)
        #[arg(short, long, allow_negative_numbers = true)]
        goal: Option<f64>,
        /// Water consumed today in liters (0-goal)
        #[arg(short, long, allow_negative_numbers = true)]
        consumed: Option<f64>,
    },

    /// Steps left to reach the daily goal
    Steps {
        /// Daily step goal (1000-25000)
        #[arg(short, long, allow_negative_numbers = true)]
        goal: Option<i64>,
        /// Steps taken today (0-2x goal)
        #[arg(short, long, allow_negative_numbers = true)]
        consumed: Option<i64>,
    },

    /// Weekly step sample ending today
    Weekly {
        /// Steps taken today
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        steps_today: i64,
        /// Last day of the sample (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        today: Option<NaiveDate>,
    },

    /// Check a contact form submission (nothing is sent)
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct Evaluation<T: Serialize> {
    #[serde(flatten)]
    tracker: T,
    #[serde(flatten)]
    feedback: Feedback,
}

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Done,
    /// The contact submission was incomplete
    Rejected,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => ExitCode::SUCCESS,
            Outcome::Rejected => ExitCode::FAILURE,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let outcome = run(Cli::parse())?;
    Ok(outcome.into())
}

fn run(cli: Cli) -> anyhow::Result<Outcome> {
    match cli.command {
        Commands::Calories { goal, consumed } => {
            print_tracker(CalorieTracker::from_inputs(goal, consumed), cli.format)?;
        }

        Commands::Hydration { goal, consumed } => {
            print_tracker(HydrationTracker::from_inputs(goal, consumed), cli.format)?;
        }

        Commands::Steps { goal, consumed } => {
            print_tracker(StepTracker::from_inputs(goal, consumed), cli.format)?;
        }

        Commands::Weekly { steps_today, today } => {
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            let steps_today = StepTracker::from_inputs(None, Some(steps_today)).consumed;
            let sample = WeeklySample::generate(steps_today, today);

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sample)?),
                OutputFormat::Text => {
                    println!("Weekly Step Trend");
                    println!("{:<12} {:>8}", "Date", "Steps");
                    println!("{}", "-".repeat(21));
                    for point in &sample.points {
                        println!("{:<12} {:>8}", point.date, point.steps);
                    }
                }
            }
        }

        Commands::Contact {
            name,
            email,
            message,
        } => {
            let submission = ContactSubmission::new(name, email, message);
            let state = ContactState::submit(&submission);

            if let Some(feedback) = state.feedback() {
                print_feedback(&feedback, cli.format)?;
            }
            if let ContactState::Rejected(missing) = state {
                let names: Vec<_> = missing.iter().map(|f| f.label()).collect();
                eprintln!("Missing: {}", names.join(", "));
                return Ok(Outcome::Rejected);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(Outcome::Done)
}

fn print_tracker<T: Tracker + Serialize>(tracker: T, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let feedback = tracker.feedback();
            let evaluation = Evaluation { tracker, feedback };
            println!("{}", serde_json::to_string_pretty(&evaluation)?);
        }
        OutputFormat::Text => {
            println!("{}", tracker.title());
            println!("{}", tracker.feedback());
        }
    }
    Ok(())
}

fn print_feedback(feedback: &Feedback, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(feedback)?),
        OutputFormat::Text => println!("{}", feedback),
    }
    Ok(())
}
