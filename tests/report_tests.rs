mod common;

use chrono::{NaiveDate, Weekday};
use common::{minimal_project, reference_project};
use cpm_schedule::{
    CpmError, Project, ProjectMetadata, WorkCalendarConfig, save_activities_to_csv,
    save_report_to_json,
};
use tempfile::NamedTempFile;

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn propagated_reference() -> Project {
    let mut project = reference_project();
    project.refresh().unwrap();
    project
}

#[test]
fn report_requires_a_propagated_project() {
    let (mut project, _, _) = minimal_project();
    project.sequence().unwrap();
    assert!(matches!(
        project.report(),
        Err(CpmError::NotPropagated { .. })
    ));
}

#[test]
fn report_lists_events_in_topological_order() {
    let project = propagated_reference();
    let report = project.report().unwrap();

    assert_eq!(report.project_duration, 17.0);
    assert_eq!(report.critical_path, vec!["A", "C", "E", "H", "K"]);
    assert_eq!(report.events.len(), 11);
    assert_eq!(report.activities.len(), 20);

    let g = &report.events[6];
    assert_eq!(g.name, "G");
    assert_eq!(g.ordinal, 6);
    assert_eq!((g.early_time, g.late_time, g.slack), (8.0, 10.0, 2.0));
    assert!(!g.is_critical);

    let critical: Vec<&str> = report
        .critical_events()
        .map(|row| row.name.as_str())
        .collect();
    assert_eq!(critical, vec!["A", "C", "E", "H", "I", "K"]);
}

#[test]
fn report_dates_follow_the_work_calendar() {
    let mut metadata = ProjectMetadata::default();
    // Monday
    metadata.project_start_date = d(2025, 1, 6);
    metadata.calendar = WorkCalendarConfig::new(
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ],
        [d(2025, 1, 8)],
    );
    let mut project = Project::new_with_metadata(metadata).unwrap();
    project.add_event("A", &[]).unwrap();
    project.add_event("B", &["A"]).unwrap();
    project.add_activity_between(5.0, "A", "B").unwrap();
    project.refresh().unwrap();

    let report = project.report().unwrap();
    assert_eq!(report.events[0].early_date, Some(d(2025, 1, 6)));
    // Five working days after Monday, skipping the Wednesday holiday and the weekend.
    assert_eq!(report.events[1].early_date, Some(d(2025, 1, 14)));
    assert_eq!(report.finish_date, Some(d(2025, 1, 14)));
}

#[test]
fn dates_beyond_the_calendar_range_are_left_empty() {
    let mut project = Project::new();
    project.add_event("A", &[]).unwrap();
    project.add_event("B", &["A"]).unwrap();
    project.add_activity_between(1.0e8, "A", "B").unwrap();
    project.refresh().unwrap();

    let report = project.report().unwrap();
    assert_eq!(report.project_duration, 1.0e8);
    assert_eq!(report.events[0].early_date, Some(d(2025, 1, 1)));
    assert_eq!(report.events[1].early_date, None);
    assert_eq!(report.finish_date, None);
    assert!(report.events_frame().is_ok());
}

#[test]
fn report_is_written_as_json() {
    let project = propagated_reference();
    let report = project.report().unwrap();

    let tmp = NamedTempFile::new().expect("create temp file");
    save_report_to_json(&report, tmp.path()).unwrap();
    let text = std::fs::read_to_string(tmp.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(json["project_duration"], 17.0);
    assert_eq!(json["critical_path"], serde_json::json!(["A", "C", "E", "H", "K"]));
    assert_eq!(json["events"].as_array().map(Vec::len), Some(11));
    assert_eq!(json["activities"][1]["from"], "A");
    assert_eq!(json["activities"][1]["to"], "C");
    assert_eq!(json["metadata"]["slack_tolerance"], 1e-9);
}

#[test]
fn activities_export_to_csv() {
    let project = propagated_reference();
    let report = project.report().unwrap();

    let tmp = NamedTempFile::new().expect("create temp file");
    save_activities_to_csv(&report, tmp.path()).unwrap();
    let text = std::fs::read_to_string(tmp.path()).unwrap();
    let mut lines = text.lines();

    assert_eq!(
        lines.next(),
        Some(
            "from,to,duration,early_start,early_finish,late_start,late_finish,total_float,free_float,is_critical"
        )
    );
    assert_eq!(lines.next(), Some("A,B,0.0,0.0,0.0,2.0,2.0,2.0,0.0,false"));
    assert_eq!(text.lines().count(), 21);
}

#[test]
fn report_tables_have_one_row_per_item() {
    let project = propagated_reference();
    let report = project.report().unwrap();

    let events = report.events_frame().unwrap();
    assert_eq!(events.height(), 11);
    let names = events.column("name").unwrap().str().unwrap();
    let late = events.column("late_time").unwrap().f64().unwrap();
    assert_eq!(names.get(10), Some("K"));
    assert_eq!(late.get(10), Some(17.0));
    assert!(events.column("early_date").is_ok());

    let activities = report.activities_frame().unwrap();
    assert_eq!(activities.height(), 20);
    let critical = activities.column("is_critical").unwrap().bool().unwrap();
    assert_eq!(critical.into_iter().filter(|c| *c == Some(true)).count(), 6);
}
