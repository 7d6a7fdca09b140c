use crate::error::{CpmError, CpmResult};
use crate::event::Time;
use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::ops::Bound::{Excluded, Included};

/// Working-day calendar used to project schedule times onto dates.
///
/// Time offsets are counted in working days from the first working day on or
/// after the project start date.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkCalendar {
    working_days: HashSet<Weekday>,
    holidays: BTreeSet<NaiveDate>,
}

/// Serializable calendar settings carried by [`ProjectMetadata`].
///
/// [`ProjectMetadata`]: crate::ProjectMetadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCalendarConfig {
    working_days: Vec<Weekday>,
    holidays: Vec<NaiveDate>,
}

const WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

impl Default for WorkCalendar {
    fn default() -> Self {
        Self {
            working_days: HashSet::from(WEEKDAYS),
            holidays: BTreeSet::new(),
        }
    }
}

impl WorkCalendar {
    pub fn from_config(config: &WorkCalendarConfig) -> CpmResult<Self> {
        let working_days: HashSet<Weekday> = config.working_days.iter().copied().collect();
        if working_days.is_empty() {
            return Err(CpmError::InvalidCalendar(
                "at least one working day is required".into(),
            ));
        }
        Ok(Self {
            working_days,
            holidays: config.holidays.iter().copied().collect(),
        })
    }

    pub fn is_available(&self, date: NaiveDate) -> bool {
        self.working_days.contains(&date.weekday()) && !self.holidays.contains(&date)
    }

    /// Calendar date of schedule time `time` for a project starting on
    /// `start`. Fractional times round up to the next whole working day.
    /// Returns `None` for negative or non-finite times and for dates beyond
    /// the representable range.
    pub fn date_at(&self, start: NaiveDate, time: Time) -> Option<NaiveDate> {
        if !time.is_finite() || time < 0.0 {
            return None;
        }
        let anchor = self.next_available(start, 0)?;
        // Saturating cast; out-of-range offsets fail in `advance`.
        self.advance(anchor, time.ceil() as i64)
    }

    /// First available date on or after `from`, after skipping `skip`
    /// further available days.
    fn next_available(&self, from: NaiveDate, mut skip: i64) -> Option<NaiveDate> {
        let mut current = from;
        loop {
            if self.is_available(current) {
                if skip == 0 {
                    return Some(current);
                }
                skip -= 1;
            }
            current = current.succ_opt()?;
        }
    }

    /// Moves `days` working days past the available date `from`.
    ///
    /// Whole weeks are jumped at once; holidays inside the jumped span are
    /// made up afterwards one day at a time.
    fn advance(&self, from: NaiveDate, days: i64) -> Option<NaiveDate> {
        if days == 0 {
            return Some(from);
        }
        let per_week = self.working_days.len() as i64;
        let weeks = days / per_week;
        let jumped = from.checked_add_signed(TimeDelta::try_weeks(weeks)?)?;
        let missed = self
            .holidays
            .range((Excluded(from), Included(jumped)))
            .filter(|date| self.working_days.contains(&date.weekday()))
            .count() as i64;

        let remaining = days % per_week + missed;
        if remaining == 0 {
            return Some(jumped);
        }
        self.next_available(jumped.succ_opt()?, remaining - 1)
    }
}

impl WorkCalendarConfig {
    /// Working days are kept Monday first; both lists are deduplicated.
    pub fn new<I, J>(working_days: I, holidays: J) -> Self
    where
        I: IntoIterator<Item = Weekday>,
        J: IntoIterator<Item = NaiveDate>,
    {
        let mut working_days: Vec<Weekday> = working_days.into_iter().collect();
        working_days.sort_by_key(Weekday::num_days_from_monday);
        working_days.dedup();

        let holidays: BTreeSet<NaiveDate> = holidays.into_iter().collect();
        Self {
            working_days,
            holidays: holidays.into_iter().collect(),
        }
    }

    pub fn working_days(&self) -> &[Weekday] {
        &self.working_days
    }

    pub fn holidays(&self) -> &[NaiveDate] {
        &self.holidays
    }
}

impl Default for WorkCalendarConfig {
    fn default() -> Self {
        Self::new(WEEKDAYS, Vec::<NaiveDate>::new())
    }
}
