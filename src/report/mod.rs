//! Read-only export of a computed schedule.
//!
//! A [`ScheduleReport`] is a snapshot of the finished data (event times,
//! activity windows and the critical path witness) that downstream renderers
//! and reporting tools consume. Nothing here feeds back into a [`Project`].

use crate::error::CpmError;
use crate::event::Time;
use crate::metadata::ProjectMetadata;
use crate::project::Project;
use chrono::NaiveDate;
use polars::prelude::PolarsError;
use serde::Serialize;
use std::io;
use thiserror::Error;

pub mod file;
pub mod frame;

pub use file::{save_activities_to_csv, save_report_to_json};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Schedule(#[from] CpmError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataframe conversion error: {0}")]
    DataFrame(#[from] PolarsError),
}

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRow {
    pub name: String,
    pub ordinal: usize,
    pub early_time: Time,
    pub late_time: Time,
    pub slack: Time,
    pub is_critical: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub late_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRow {
    pub from: String,
    pub to: String,
    pub duration: Time,
    pub early_start: Time,
    pub early_finish: Time,
    pub late_start: Time,
    pub late_finish: Time,
    pub total_float: Time,
    pub free_float: Time,
    pub is_critical: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleReport {
    pub metadata: ProjectMetadata,
    pub project_duration: Time,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_date: Option<NaiveDate>,
    /// Events in topological order.
    pub events: Vec<EventRow>,
    /// Activities in registration order.
    pub activities: Vec<ActivityRow>,
    pub critical_path: Vec<String>,
}

impl ScheduleReport {
    /// Snapshot a fully propagated project.
    pub fn from_project(project: &Project) -> Result<Self, CpmError> {
        let metadata = project.metadata().clone();
        let calendar = project.calendar();
        let start = metadata.project_start_date;
        let path = project.critical_path()?;

        let events = project
            .ordered_events()?
            .into_iter()
            .enumerate()
            .map(|(ordinal, event)| {
                let slack = event.late_time - event.early_time;
                EventRow {
                    name: event.name.clone(),
                    ordinal,
                    early_time: event.early_time,
                    late_time: event.late_time,
                    slack,
                    is_critical: metadata.is_zero_slack(slack),
                    early_date: calendar.date_at(start, event.early_time),
                    late_date: calendar.date_at(start, event.late_time),
                }
            })
            .collect();

        let all_events = project.events();
        let activities = project
            .activity_timings()?
            .into_iter()
            .zip(project.activities())
            .map(|(timing, activity)| ActivityRow {
                from: all_events[activity.from.index()].name.clone(),
                to: all_events[activity.to.index()].name.clone(),
                duration: timing.duration,
                early_start: timing.early_start,
                early_finish: timing.early_finish,
                late_start: timing.late_start,
                late_finish: timing.late_finish,
                total_float: timing.total_float,
                free_float: timing.free_float,
                is_critical: timing.is_critical,
            })
            .collect();

        let project_duration = project.project_duration()?;
        Ok(Self {
            finish_date: calendar.date_at(start, project_duration),
            critical_path: project
                .path_names(&path)
                .into_iter()
                .map(ToOwned::to_owned)
                .collect(),
            metadata,
            project_duration,
            events,
            activities,
        })
    }

    pub fn critical_events(&self) -> impl Iterator<Item = &EventRow> {
        self.events.iter().filter(|row| row.is_critical)
    }
}

impl Project {
    pub fn report(&self) -> Result<ScheduleReport, CpmError> {
        ScheduleReport::from_project(self)
    }
}
