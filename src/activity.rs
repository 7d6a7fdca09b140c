use crate::event::{Event, EventId, Time};
use std::fmt;

/// Stable handle of an activity, assigned in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActivityId(pub(crate) usize);

impl ActivityId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "activity#{}", self.0)
    }
}

/// Timed work between two events. Endpoints and duration never change after
/// registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub duration: Time,
    pub from: EventId,
    pub to: EventId,
}

impl Activity {
    pub fn new(duration: Time, from: EventId, to: EventId) -> Self {
        Self { duration, from, to }
    }

    /// `to.late - from.early - duration`; zero marks a critical activity.
    pub fn total_float(&self, from: &Event, to: &Event) -> Time {
        to.late_time - from.early_time - self.duration
    }

    /// Float that can be used without delaying the target's earliest time.
    pub fn free_float(&self, from: &Event, to: &Event) -> Time {
        to.early_time - from.early_time - self.duration
    }
}
