use crate::activity::Activity;
use crate::error::{CpmError, CpmResult};
use crate::event::{Event, EventId};
use petgraph::Direction;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Dependency graph over registered events.
///
/// An edge `u -> v` means `v` may not be placed before `u`. Edges come from
/// each event's declared predecessors and from every activity; parallel edges
/// are collapsed.
pub struct ScheduleDag {
    graph: DiGraph<EventId, ()>,
    nodes: Vec<NodeIndex>,
}

impl ScheduleDag {
    pub fn build(events: &[Event], activities: &[Activity]) -> CpmResult<Self> {
        let mut graph: DiGraph<EventId, ()> =
            DiGraph::with_capacity(events.len(), activities.len());
        let mut names: HashMap<&str, NodeIndex> = HashMap::with_capacity(events.len());
        let mut nodes = Vec::with_capacity(events.len());

        // Add nodes first
        for (idx, event) in events.iter().enumerate() {
            let node_ix = graph.add_node(EventId(idx));
            names.insert(event.name.as_str(), node_ix);
            nodes.push(node_ix);
        }

        // Declared predecessors: pred -> event
        for (idx, event) in events.iter().enumerate() {
            for pred in &event.predecessors {
                let pred_ix = names.get(pred.as_str()).copied().ok_or_else(|| {
                    CpmError::DanglingPredecessor {
                        event: event.name.clone(),
                        predecessor: pred.clone(),
                    }
                })?;
                graph.update_edge(pred_ix, nodes[idx], ());
            }
        }

        // Activities: from -> to
        for activity in activities {
            let (Some(&u), Some(&v)) = (nodes.get(activity.from.0), nodes.get(activity.to.0))
            else {
                return Err(CpmError::UnknownEvent(format!(
                    "{} -> {}",
                    activity.from, activity.to
                )));
            };
            graph.update_edge(u, v, ());
        }

        Ok(Self { graph, nodes })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Distinct dependency edges after collapsing parallel ones.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn dependency_count(&self, id: EventId) -> usize {
        self.graph
            .neighbors_directed(self.nodes[id.0], Direction::Incoming)
            .count()
    }

    pub fn dependents(&self, id: EventId) -> impl Iterator<Item = EventId> + '_ {
        self.graph
            .neighbors_directed(self.nodes[id.0], Direction::Outgoing)
            .map(|node_ix| self.graph[node_ix])
    }

    /// Events that sit on a dependency cycle, in registration order.
    pub fn cycle_members(&self) -> Vec<EventId> {
        let mut members: Vec<EventId> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1 || self.graph.contains_edge(component[0], component[0])
            })
            .flatten()
            .map(|node_ix| self.graph[node_ix])
            .collect();
        members.sort_unstable();
        members
    }
}
