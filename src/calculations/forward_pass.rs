use crate::activity::Activity;
use crate::event::{Event, EventId, Time};

/// Earliest-occurrence times, computed over a topological order.
pub struct ForwardPass<'a> {
    events: &'a [Event],
    activities: &'a [Activity],
    order: &'a [EventId],
}

impl<'a> ForwardPass<'a> {
    pub fn new(events: &'a [Event], activities: &'a [Activity], order: &'a [EventId]) -> Self {
        Self {
            events,
            activities,
            order,
        }
    }

    /// Returns earliest times indexed by event id.
    ///
    /// Every predecessor precedes its successors in `order`, so each event is
    /// visited once, after all of its incoming activities are settled.
    pub fn execute(&self) -> Vec<Time> {
        let mut early = vec![0.0; self.events.len()];

        for &id in self.order {
            let event = &self.events[id.0];
            let earliest = event
                .incoming
                .iter()
                .map(|activity_id| {
                    let activity = &self.activities[activity_id.0];
                    early[activity.from.0] + activity.duration
                })
                .fold(None, |acc: Option<Time>, t| {
                    Some(acc.map_or(t, |best| best.max(t)))
                });
            early[id.0] = earliest.unwrap_or(0.0);
        }

        early
    }
}
