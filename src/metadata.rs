use crate::calendar::WorkCalendarConfig;
use crate::event::Time;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SLACK_TOLERANCE: f64 = 1e-9;

fn default_slack_tolerance() -> f64 {
    DEFAULT_SLACK_TOLERANCE
}

/// Project-level settings that shape how a computed schedule is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub project_name: String,
    pub project_description: String,
    /// Calendar date that time 0 maps onto.
    pub project_start_date: NaiveDate,
    /// Absolute tolerance used whenever a slack is compared against zero.
    #[serde(default = "default_slack_tolerance")]
    pub slack_tolerance: f64,
    #[serde(default)]
    pub calendar: WorkCalendarConfig,
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        Self {
            project_name: "New Project".to_string(),
            project_description: "No description".to_string(),
            project_start_date: NaiveDate::from_ymd_opt(2025, 1, 1)
                .expect("2025-01-01 is a valid date"),
            slack_tolerance: DEFAULT_SLACK_TOLERANCE,
            calendar: WorkCalendarConfig::default(),
        }
    }
}

impl ProjectMetadata {
    pub fn is_zero_slack(&self, slack: Time) -> bool {
        slack.abs() <= self.slack_tolerance
    }
}
