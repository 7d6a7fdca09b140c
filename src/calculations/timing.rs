use crate::activity::{Activity, ActivityId};
use crate::event::{Event, Time};
use crate::metadata::ProjectMetadata;

/// Start/finish window of one activity in a propagated schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityTiming {
    pub activity: ActivityId,
    pub duration: Time,
    pub early_start: Time,
    pub early_finish: Time,
    pub late_start: Time,
    pub late_finish: Time,
    pub total_float: Time,
    pub free_float: Time,
    pub is_critical: bool,
}

pub fn activity_timings(
    events: &[Event],
    activities: &[Activity],
    metadata: &ProjectMetadata,
) -> Vec<ActivityTiming> {
    activities
        .iter()
        .enumerate()
        .map(|(idx, activity)| {
            let from = &events[activity.from.0];
            let to = &events[activity.to.0];
            let total_float = activity.total_float(from, to);
            ActivityTiming {
                activity: ActivityId(idx),
                duration: activity.duration,
                early_start: from.early_time,
                early_finish: from.early_time + activity.duration,
                late_start: to.late_time - activity.duration,
                late_finish: to.late_time,
                total_float,
                free_float: activity.free_float(from, to),
                is_critical: metadata.is_zero_slack(total_float),
            }
        })
        .collect()
}
