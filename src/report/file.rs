use super::{ReportResult, ScheduleReport};
use std::fs::File;
use std::path::Path;

pub fn save_report_to_json<P: AsRef<Path>>(report: &ScheduleReport, path: P) -> ReportResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}

/// One CSV row per activity, in registration order.
pub fn save_activities_to_csv<P: AsRef<Path>>(
    report: &ScheduleReport,
    path: P,
) -> ReportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in &report.activities {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
