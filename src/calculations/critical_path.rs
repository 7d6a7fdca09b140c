use crate::activity::{Activity, ActivityId};
use crate::error::{CpmError, CpmResult};
use crate::event::{Event, EventId, Time};
use crate::metadata::ProjectMetadata;

/// A start-to-terminal chain of zero-slack activities.
#[derive(Debug, Clone, PartialEq)]
pub struct CriticalPath {
    pub events: Vec<EventId>,
    pub activities: Vec<ActivityId>,
    pub duration: Time,
}

impl CriticalPath {
    fn single(event: EventId) -> Self {
        Self {
            events: vec![event],
            activities: Vec::new(),
            duration: 0.0,
        }
    }
}

/// Walks zero-slack activities of a fully propagated schedule.
pub struct CriticalPathExtractor<'a> {
    events: &'a [Event],
    activities: &'a [Activity],
    start: EventId,
    terminal: EventId,
    metadata: &'a ProjectMetadata,
}

impl<'a> CriticalPathExtractor<'a> {
    pub fn new(
        events: &'a [Event],
        activities: &'a [Activity],
        start: EventId,
        terminal: EventId,
        metadata: &'a ProjectMetadata,
    ) -> Self {
        Self {
            events,
            activities,
            start,
            terminal,
            metadata,
        }
    }

    fn is_zero_slack(&self, id: ActivityId) -> bool {
        let activity = &self.activities[id.0];
        let float = activity.total_float(&self.events[activity.from.0], &self.events[activity.to.0]);
        self.metadata.is_zero_slack(float)
    }

    fn critical_outgoing(&self, event: EventId) -> impl Iterator<Item = ActivityId> + '_ {
        self.events[event.0]
            .outgoing
            .iter()
            .copied()
            .filter(|&id| self.is_zero_slack(id))
    }

    fn inconsistent(&self, event: EventId) -> CpmError {
        CpmError::CriticalPathInconsistent {
            event: self.events[event.0].name.clone(),
        }
    }

    /// One witness path: at every branch the first zero-slack activity in
    /// registration order is taken. Does not enumerate other critical paths.
    pub fn witness(&self) -> CpmResult<CriticalPath> {
        let mut path = CriticalPath::single(self.start);
        let mut current = self.start;

        while let Some(next) = self.critical_outgoing(current).next() {
            let activity = &self.activities[next.0];
            path.activities.push(next);
            path.events.push(activity.to);
            path.duration += activity.duration;
            current = activity.to;
        }

        if current != self.terminal {
            return Err(self.inconsistent(current));
        }
        Ok(path)
    }

    /// Every zero-slack path from start to terminal, ordered by the
    /// registration order of the activities taken at each branch.
    ///
    /// The number of paths can grow exponentially with the number of
    /// zero-slack branch points.
    pub fn enumerate(&self) -> CpmResult<Vec<CriticalPath>> {
        let mut paths = Vec::new();
        let mut stack = vec![CriticalPath::single(self.start)];

        while let Some(path) = stack.pop() {
            let current = *path.events.last().unwrap_or(&self.start);
            if current == self.terminal {
                paths.push(path);
                continue;
            }

            let branches: Vec<ActivityId> = self.critical_outgoing(current).collect();
            if branches.is_empty() {
                return Err(self.inconsistent(current));
            }
            for id in branches.into_iter().rev() {
                let activity = &self.activities[id.0];
                let mut branch = path.clone();
                branch.activities.push(id);
                branch.events.push(activity.to);
                branch.duration += activity.duration;
                stack.push(branch);
            }
        }

        Ok(paths)
    }
}
