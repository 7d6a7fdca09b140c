use crate::activity::Activity;
use crate::error::{CpmError, CpmResult};
use crate::event::{Event, EventId, Time};

/// Latest-allowable times, computed over the reverse topological order.
pub struct BackwardPass<'a> {
    events: &'a [Event],
    activities: &'a [Activity],
    order: &'a [EventId],
    early: &'a [Time],
}

impl<'a> BackwardPass<'a> {
    pub fn new(
        events: &'a [Event],
        activities: &'a [Activity],
        order: &'a [EventId],
        early: &'a [Time],
    ) -> Self {
        Self {
            events,
            activities,
            order,
            early,
        }
    }

    /// Returns latest times indexed by event id.
    ///
    /// The terminal event is seeded with its earliest time. Any other event
    /// without outgoing activities cannot reach the terminal and fails the
    /// pass instead of keeping an infinite latest time.
    pub fn execute(&self) -> CpmResult<Vec<Time>> {
        let terminal = *self.order.last().ok_or(CpmError::EmptyProject)?;
        let mut late = vec![Time::INFINITY; self.events.len()];
        late[terminal.0] = self.early[terminal.0];

        for &id in self.order.iter().rev() {
            if id == terminal {
                continue;
            }
            let event = &self.events[id.0];
            if event.outgoing.is_empty() {
                return Err(CpmError::IsolatedSink {
                    event: event.name.clone(),
                    terminal: self.events[terminal.0].name.clone(),
                });
            }

            let latest = event
                .outgoing
                .iter()
                .map(|activity_id| {
                    let activity = &self.activities[activity_id.0];
                    late[activity.to.0] - activity.duration
                })
                .fold(Time::INFINITY, Time::min);
            late[id.0] = latest;
        }

        Ok(late)
    }
}
