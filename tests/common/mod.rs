#![allow(dead_code)]

use cpm_schedule::{EventId, Project};

/// Eleven-milestone reference network A..K.
///
/// A -> {B, C, D} -> {E, F, G}; E -> {H, I}; F -> I; G -> {I, J};
/// {H, I, J} -> K.
pub const REFERENCE_ACTIVITIES: [(&str, &str, f64); 20] = [
    ("A", "B", 0.0),
    ("A", "C", 2.0),
    ("A", "D", 1.0),
    ("B", "E", 5.0),
    ("B", "F", 7.0),
    ("B", "G", 8.0),
    ("C", "E", 6.0),
    ("C", "F", 5.0),
    ("C", "G", 2.0),
    ("D", "E", 1.0),
    ("D", "F", 5.0),
    ("D", "G", 6.0),
    ("E", "H", 2.0),
    ("E", "I", 9.0),
    ("F", "I", 1.0),
    ("G", "I", 6.0),
    ("G", "J", 4.0),
    ("H", "K", 7.0),
    ("I", "K", 0.0),
    ("J", "K", 3.0),
];

pub const REFERENCE_EVENTS: [(&str, &[&str]); 11] = [
    ("A", &[]),
    ("B", &["A"]),
    ("C", &["A"]),
    ("D", &["A"]),
    ("E", &["B", "C", "D"]),
    ("F", &["B", "C", "D"]),
    ("G", &["B", "C", "D"]),
    ("H", &["E"]),
    ("I", &["E", "F", "G"]),
    ("J", &["G"]),
    ("K", &["H", "I", "J"]),
];

pub fn reference_project() -> Project {
    build(REFERENCE_EVENTS.iter())
}

/// Same network with events registered in reverse, so every dependent is
/// registered before the predecessors it declares.
pub fn reversed_reference_project() -> Project {
    build(REFERENCE_EVENTS.iter().rev())
}

fn build<'a>(events: impl Iterator<Item = &'a (&'static str, &'static [&'static str])>) -> Project {
    let mut project = Project::new();
    for (name, preds) in events {
        project.add_event(name, preds).unwrap();
    }
    for (from, to, duration) in REFERENCE_ACTIVITIES {
        project.add_activity_between(duration, from, to).unwrap();
    }
    project
}

pub fn minimal_project() -> (Project, EventId, EventId) {
    let mut project = Project::new();
    let a = project.add_event("A", &[]).unwrap();
    let b = project.add_event("B", &["A"]).unwrap();
    project.add_activity(5.0, a, b).unwrap();
    (project, a, b)
}

pub fn event_times(project: &Project, name: &str) -> (f64, f64) {
    let id = project.event_id(name).unwrap();
    let event = project.event(id).unwrap();
    (event.early_time, event.late_time)
}

/// Route `tracing` output through the test harness; `RUST_LOG=debug` shows
/// sequencing and propagation events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
