use super::schedule_dag::ScheduleDag;
use crate::activity::Activity;
use crate::error::{CpmError, CpmResult};
use crate::event::{Event, EventId};

/// Topological sequencing of events.
///
/// Unplaced events are scanned in registration order and each one is placed
/// as soon as all of its dependencies are, so later events in the same scan
/// see it. Scans repeat until every event is placed or a scan places nothing.
/// A project registered in dependency order keeps its registration order.
pub struct Sequencer<'a> {
    events: &'a [Event],
    activities: &'a [Activity],
}

impl<'a> Sequencer<'a> {
    pub fn new(events: &'a [Event], activities: &'a [Activity]) -> Self {
        Self { events, activities }
    }

    pub fn execute(&self) -> CpmResult<Vec<EventId>> {
        if self.events.is_empty() {
            return Err(CpmError::EmptyProject);
        }
        let dag = ScheduleDag::build(self.events, self.activities)?;

        let mut pending: Vec<usize> = (0..dag.node_count())
            .map(|idx| dag.dependency_count(EventId(idx)))
            .collect();
        let mut placed = vec![false; self.events.len()];
        let mut order = Vec::with_capacity(self.events.len());

        loop {
            let before = order.len();
            for idx in 0..self.events.len() {
                if placed[idx] || pending[idx] > 0 {
                    continue;
                }
                placed[idx] = true;
                order.push(EventId(idx));
                for dependent in dag.dependents(EventId(idx)) {
                    pending[dependent.0] -= 1;
                }
            }
            if order.len() == self.events.len() || order.len() == before {
                break;
            }
        }

        if order.len() < self.events.len() {
            let unresolved = placed
                .iter()
                .enumerate()
                .filter(|(_, placed)| !**placed)
                .map(|(idx, _)| self.events[idx].name.clone())
                .collect();
            let cycle = dag
                .cycle_members()
                .into_iter()
                .map(|id| self.events[id.0].name.clone())
                .collect();
            return Err(CpmError::CyclicDependency { cycle, unresolved });
        }

        Ok(order)
    }
}
