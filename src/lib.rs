//! Critical Path Method scheduling.
//!
//! A [`Project`] owns milestone [`Event`]s and the [`Activity`] edges between
//! them. Once built, the project is sequenced into a topological order, the
//! forward pass assigns earliest times, the backward pass assigns latest times
//! and the zero-slack chain from start to terminal is extracted as the
//! critical path.
//!
//! ```
//! use cpm_schedule::Project;
//!
//! let mut project = Project::new();
//! let a = project.add_event("A", &[]).unwrap();
//! let b = project.add_event("B", &["A"]).unwrap();
//! project.add_activity(5.0, a, b).unwrap();
//!
//! let summary = project.refresh().unwrap();
//! assert_eq!(summary.project_duration, 5.0);
//! assert_eq!(summary.critical_path, vec!["A", "B"]);
//! ```

pub mod activity;
pub mod calculations;
pub mod calendar;
pub mod error;
pub mod event;
pub mod graph;
pub mod metadata;
pub mod project;
pub mod report;
pub(crate) mod validation;

pub use activity::{Activity, ActivityId};
pub use calculations::critical_path::CriticalPath;
pub use calculations::timing::ActivityTiming;
pub use calendar::{WorkCalendar, WorkCalendarConfig};
pub use error::{CpmError, CpmResult};
pub use event::{Event, EventId, Time};
pub use metadata::ProjectMetadata;
pub use project::{Project, RefreshSummary};
pub use report::{
    ActivityRow, EventRow, ReportError, ReportResult, ScheduleReport, save_activities_to_csv,
    save_report_to_json,
};
