use super::ScheduleReport;
use chrono::{Datelike, NaiveDate};
use polars::prelude::PlSmallStr;
use polars::prelude::*;

/// Days from 0001-01-01 to 1970-01-01, the polars `Date` epoch.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

fn date_to_i32(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

fn date_series(name: &'static str, dates: Vec<Option<NaiveDate>>) -> PolarsResult<Series> {
    let days: Vec<Option<i32>> = dates.into_iter().map(|d| d.map(date_to_i32)).collect();
    Series::new(PlSmallStr::from_static(name), days).cast(&DataType::Date)
}

impl ScheduleReport {
    /// Events as a table, one row per event in topological order.
    pub fn events_frame(&self) -> PolarsResult<DataFrame> {
        let rows = &self.events;
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        let ordinals: Vec<i64> = rows.iter().map(|r| r.ordinal as i64).collect();
        let early: Vec<f64> = rows.iter().map(|r| r.early_time).collect();
        let late: Vec<f64> = rows.iter().map(|r| r.late_time).collect();
        let slack: Vec<f64> = rows.iter().map(|r| r.slack).collect();
        let critical: Vec<bool> = rows.iter().map(|r| r.is_critical).collect();

        let columns = vec![
            Series::new(PlSmallStr::from_static("name"), names).into_column(),
            Series::new(PlSmallStr::from_static("ordinal"), ordinals).into_column(),
            Series::new(PlSmallStr::from_static("early_time"), early).into_column(),
            Series::new(PlSmallStr::from_static("late_time"), late).into_column(),
            Series::new(PlSmallStr::from_static("slack"), slack).into_column(),
            Series::new(PlSmallStr::from_static("is_critical"), critical).into_column(),
            date_series("early_date", rows.iter().map(|r| r.early_date).collect())?
                .into_column(),
            date_series("late_date", rows.iter().map(|r| r.late_date).collect())?.into_column(),
        ];
        DataFrame::new(columns)
    }

    /// Activities as a table, one row per activity in registration order.
    pub fn activities_frame(&self) -> PolarsResult<DataFrame> {
        let rows = &self.activities;
        let column = |name: &'static str, f: fn(&super::ActivityRow) -> f64| {
            let values: Vec<f64> = rows.iter().map(f).collect();
            Series::new(PlSmallStr::from_static(name), values).into_column()
        };

        let from: Vec<&str> = rows.iter().map(|r| r.from.as_str()).collect();
        let to: Vec<&str> = rows.iter().map(|r| r.to.as_str()).collect();
        let critical: Vec<bool> = rows.iter().map(|r| r.is_critical).collect();

        let columns = vec![
            Series::new(PlSmallStr::from_static("from"), from).into_column(),
            Series::new(PlSmallStr::from_static("to"), to).into_column(),
            column("duration", |r| r.duration),
            column("early_start", |r| r.early_start),
            column("early_finish", |r| r.early_finish),
            column("late_start", |r| r.late_start),
            column("late_finish", |r| r.late_finish),
            column("total_float", |r| r.total_float),
            column("free_float", |r| r.free_float),
            Series::new(PlSmallStr::from_static("is_critical"), critical).into_column(),
        ];
        DataFrame::new(columns)
    }
}
