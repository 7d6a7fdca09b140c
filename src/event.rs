use crate::activity::ActivityId;
use std::fmt;

/// Unit shared by activity durations and event times.
pub type Time = f64;

/// Stable handle of an event, assigned in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub(crate) usize);

impl EventId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event#{}", self.0)
    }
}

/// A milestone in the project network.
///
/// `predecessors` holds the declared dependency list by name, so an event may
/// name a predecessor that is registered later. `outgoing` and `incoming` are
/// back-references into the project's activity collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    pub ordinal: Option<usize>,
    pub early_time: Time,
    pub late_time: Time,
    pub predecessors: Vec<String>,
    pub outgoing: Vec<ActivityId>,
    pub incoming: Vec<ActivityId>,
}

impl Event {
    pub fn new<I, P>(name: impl Into<String>, predecessors: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            name: name.into(),
            ordinal: None,
            early_time: 0.0,
            late_time: Time::INFINITY,
            predecessors: predecessors.into_iter().map(Into::into).collect(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Latest minus earliest time, once the latest time is known.
    pub fn slack(&self) -> Option<Time> {
        if self.late_time.is_finite() {
            Some(self.late_time - self.early_time)
        } else {
            None
        }
    }

    pub fn is_source(&self) -> bool {
        self.incoming.is_empty() && self.predecessors.is_empty()
    }

    pub fn is_sink(&self) -> bool {
        self.outgoing.is_empty()
    }

    pub(crate) fn reset_times(&mut self) {
        self.early_time = 0.0;
        self.late_time = Time::INFINITY;
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
