use crate::activity::{Activity, ActivityId};
use crate::calculations::{
    ActivityTiming, BackwardPass, CriticalPath, CriticalPathExtractor, ForwardPass,
    activity_timings,
};
use crate::calendar::WorkCalendar;
use crate::error::{CpmError, CpmResult};
use crate::event::{Event, EventId, Time};
use crate::graph::Sequencer;
use crate::metadata::ProjectMetadata;
use crate::validation;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshSummary {
    pub event_count: usize,
    pub activity_count: usize,
    pub project_duration: Time,
    pub critical_path: Vec<String>,
    pub critical_activity_count: usize,
}

impl RefreshSummary {
    pub fn to_cli_summary(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("events={}", self.event_count));
        parts.push(format!("activities={}", self.activity_count));
        parts.push(format!("duration={}", self.project_duration));
        parts.push(format!("critical={}", self.critical_activity_count));
        if !self.critical_path.is_empty() {
            parts.push(format!("crit_path={}", self.critical_path.join("->")));
        }
        parts.join(", ")
    }
}

/// How far the computation has progressed since the last structural change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Stage {
    Building,
    Sequenced,
    ForwardComplete,
    Propagated,
}

/// A CPM network and its computed schedule.
///
/// Events and activities are stored in registration order and addressed by
/// [`EventId`] / [`ActivityId`]. The topological order produced by
/// [`Project::sequence`] is kept separately.
pub struct Project {
    metadata: ProjectMetadata,
    calendar: WorkCalendar,
    events: Vec<Event>,
    activities: Vec<Activity>,
    names: HashMap<String, EventId>,
    order: Vec<EventId>,
    stage: Stage,
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

impl Project {
    pub fn new() -> Self {
        Self {
            metadata: ProjectMetadata::default(),
            calendar: WorkCalendar::default(),
            events: Vec::new(),
            activities: Vec::new(),
            names: HashMap::new(),
            order: Vec::new(),
            stage: Stage::Building,
        }
    }

    pub fn new_with_metadata(metadata: ProjectMetadata) -> CpmResult<Self> {
        let mut project = Self::new();
        project.set_metadata(metadata)?;
        Ok(project)
    }

    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    pub fn calendar(&self) -> &WorkCalendar {
        &self.calendar
    }

    pub fn set_metadata(&mut self, metadata: ProjectMetadata) -> CpmResult<()> {
        validation::validate_metadata(&metadata)?;
        self.calendar = WorkCalendar::from_config(&metadata.calendar)?;
        self.metadata = metadata;
        Ok(())
    }

    /// Register an event together with the names of the events it depends on.
    /// Predecessors may be registered later; they are resolved when the
    /// project is sequenced.
    pub fn add_event(&mut self, name: &str, predecessors: &[&str]) -> CpmResult<EventId> {
        validation::validate_event_name(name, &self.names)?;
        let id = EventId(self.events.len());
        self.events
            .push(Event::new(name, predecessors.iter().copied()));
        self.names.insert(name.to_string(), id);
        self.invalidate();
        Ok(id)
    }

    /// Register an activity between two registered events.
    pub fn add_activity(
        &mut self,
        duration: Time,
        from: EventId,
        to: EventId,
    ) -> CpmResult<ActivityId> {
        let (Some(from_event), Some(to_event)) = (self.events.get(from.0), self.events.get(to.0))
        else {
            let missing = if self.events.get(from.0).is_none() { from } else { to };
            return Err(CpmError::UnknownEvent(missing.to_string()));
        };
        validation::validate_duration(duration, &from_event.name, &to_event.name)?;

        let id = ActivityId(self.activities.len());
        self.activities.push(Activity::new(duration, from, to));
        self.events[from.0].outgoing.push(id);
        self.events[to.0].incoming.push(id);
        self.invalidate();
        Ok(id)
    }

    pub fn add_activity_between(
        &mut self,
        duration: Time,
        from: &str,
        to: &str,
    ) -> CpmResult<ActivityId> {
        let from_id = self.require_event_id(from)?;
        let to_id = self.require_event_id(to)?;
        self.add_activity(duration, from_id, to_id)
    }

    pub fn event_id(&self, name: &str) -> Option<EventId> {
        self.names.get(name).copied()
    }

    fn require_event_id(&self, name: &str) -> CpmResult<EventId> {
        self.event_id(name)
            .ok_or_else(|| CpmError::UnknownEvent(format!("'{name}'")))
    }

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.get(id.0)
    }

    pub fn activity(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.get(id.0)
    }

    /// Events in registration order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Activities in registration order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Events in topological order.
    pub fn ordered_events(&self) -> CpmResult<Vec<&Event>> {
        self.require_stage(Stage::Sequenced, "ordered event listing")?;
        Ok(self.order.iter().map(|id| &self.events[id.0]).collect())
    }

    pub fn order(&self) -> &[EventId] {
        &self.order
    }

    pub fn start_event(&self) -> CpmResult<EventId> {
        self.require_stage(Stage::Sequenced, "start event lookup")?;
        Ok(self.order[0])
    }

    pub fn terminal_event(&self) -> CpmResult<EventId> {
        self.require_stage(Stage::Sequenced, "terminal event lookup")?;
        Ok(self.order[self.order.len() - 1])
    }

    pub fn is_sequenced(&self) -> bool {
        self.stage >= Stage::Sequenced
    }

    pub fn is_propagated(&self) -> bool {
        self.stage == Stage::Propagated
    }

    fn invalidate(&mut self) {
        if self.stage == Stage::Building {
            return;
        }
        for event in &mut self.events {
            event.ordinal = None;
            event.reset_times();
        }
        self.order.clear();
        self.stage = Stage::Building;
    }

    fn require_stage(&self, required: Stage, operation: &'static str) -> CpmResult<()> {
        if self.stage >= required {
            return Ok(());
        }
        if self.stage < Stage::Sequenced {
            Err(CpmError::NotSequenced { operation })
        } else {
            Err(CpmError::NotPropagated { operation })
        }
    }

    /// Order events topologically and assign ordinals. Recomputes from
    /// scratch on every call; on failure no order is kept.
    pub fn sequence(&mut self) -> CpmResult<()> {
        self.invalidate();
        let order = Sequencer::new(&self.events, &self.activities).execute()?;

        for (ordinal, id) in order.iter().enumerate() {
            self.events[id.0].ordinal = Some(ordinal);
        }
        let start = order[0];
        for &id in &order[1..] {
            let event = &self.events[id.0];
            if event.is_source() {
                tracing::warn!(
                    event = %event.name,
                    start = %self.events[start.0].name,
                    "additional source event; only the start event seeds the critical path"
                );
            }
        }
        tracing::debug!(
            events = order.len(),
            start = %self.events[start.0].name,
            terminal = %self.events[order[order.len() - 1].0].name,
            "project sequenced"
        );

        self.order = order;
        self.stage = Stage::Sequenced;
        Ok(())
    }

    pub fn forward_pass(&mut self) -> CpmResult<()> {
        self.require_stage(Stage::Sequenced, "forward pass")?;
        let early = ForwardPass::new(&self.events, &self.activities, &self.order).execute();

        for (event, early_time) in self.events.iter_mut().zip(early) {
            event.early_time = early_time;
            event.late_time = Time::INFINITY;
        }
        self.stage = Stage::ForwardComplete;
        tracing::debug!(duration = self.terminal_early_time(), "forward pass complete");
        Ok(())
    }

    pub fn backward_pass(&mut self) -> CpmResult<()> {
        self.require_stage(Stage::ForwardComplete, "backward pass")?;
        let early: Vec<Time> = self.events.iter().map(|event| event.early_time).collect();
        let late = BackwardPass::new(&self.events, &self.activities, &self.order, &early)
            .execute()?;

        for (event, late_time) in self.events.iter_mut().zip(late) {
            event.late_time = late_time;
        }
        self.stage = Stage::Propagated;
        tracing::debug!("backward pass complete");
        Ok(())
    }

    /// Forward then backward propagation over an already sequenced project.
    pub fn proceed(&mut self) -> CpmResult<()> {
        self.forward_pass()?;
        self.backward_pass()
    }

    fn terminal_early_time(&self) -> Time {
        self.order
            .last()
            .map(|id| self.events[id.0].early_time)
            .unwrap_or(0.0)
    }

    /// Earliest completion of the whole project: the terminal event's
    /// earliest time.
    pub fn project_duration(&self) -> CpmResult<Time> {
        self.require_stage(Stage::ForwardComplete, "project duration")?;
        Ok(self.terminal_early_time())
    }

    fn extractor(&self, operation: &'static str) -> CpmResult<CriticalPathExtractor<'_>> {
        self.require_stage(Stage::Propagated, operation)?;
        Ok(CriticalPathExtractor::new(
            &self.events,
            &self.activities,
            self.order[0],
            self.order[self.order.len() - 1],
            &self.metadata,
        ))
    }

    /// One critical path witness (first zero-slack branch by registration
    /// order).
    pub fn critical_path(&self) -> CpmResult<CriticalPath> {
        let path = self.extractor("critical path extraction")?.witness()?;
        tracing::debug!(events = path.events.len(), "critical path extracted");
        Ok(path)
    }

    /// All zero-slack start-to-terminal paths.
    pub fn critical_paths(&self) -> CpmResult<Vec<CriticalPath>> {
        self.extractor("critical path enumeration")?.enumerate()
    }

    pub fn activity_timings(&self) -> CpmResult<Vec<ActivityTiming>> {
        self.require_stage(Stage::Propagated, "activity timing")?;
        Ok(activity_timings(&self.events, &self.activities, &self.metadata))
    }

    pub fn path_names<'p>(&'p self, path: &CriticalPath) -> Vec<&'p str> {
        path.events
            .iter()
            .filter_map(|id| self.event(*id))
            .map(|event| event.name.as_str())
            .collect()
    }

    /// Sequence, propagate and extract a critical path in one go.
    pub fn refresh(&mut self) -> CpmResult<RefreshSummary> {
        self.sequence()?;
        self.proceed()?;
        let path = self.critical_path()?;
        let critical_activity_count = self
            .activity_timings()?
            .iter()
            .filter(|timing| timing.is_critical)
            .count();

        Ok(RefreshSummary {
            event_count: self.events.len(),
            activity_count: self.activities.len(),
            project_duration: self.project_duration()?,
            critical_path: self
                .path_names(&path)
                .into_iter()
                .map(ToOwned::to_owned)
                .collect(),
            critical_activity_count,
        })
    }
}
