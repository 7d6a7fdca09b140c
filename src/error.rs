use crate::event::Time;
use thiserror::Error;

/// Configuration and consistency failures of a schedule computation.
///
/// None of these are transient: the project definition (or the computation
/// stage it is in) has to change before the operation can succeed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CpmError {
    #[error("project has no events to schedule")]
    EmptyProject,
    #[error("event name must not be blank")]
    BlankEventName,
    #[error("event '{0}' is already registered")]
    DuplicateEvent(String),
    #[error("unknown event {0}")]
    UnknownEvent(String),
    #[error("activity {from} -> {to} has non-finite duration {duration}")]
    InvalidDuration {
        from: String,
        to: String,
        duration: Time,
    },
    #[error("slack tolerance must be finite and non-negative (got {0})")]
    InvalidTolerance(f64),
    #[error("invalid work calendar: {0}")]
    InvalidCalendar(String),
    #[error("event '{event}' declares unregistered predecessor '{predecessor}'")]
    DanglingPredecessor { event: String, predecessor: String },
    #[error(
        "dependency cycle among [{}]; unresolved events: [{}]",
        .cycle.join(", "),
        .unresolved.join(", ")
    )]
    CyclicDependency {
        cycle: Vec<String>,
        unresolved: Vec<String>,
    },
    #[error("event '{event}' has no outgoing activity and is not the terminal event '{terminal}'")]
    IsolatedSink { event: String, terminal: String },
    #[error("cannot run {operation}: project has not been sequenced")]
    NotSequenced { operation: &'static str },
    #[error("cannot run {operation}: time propagation has not completed")]
    NotPropagated { operation: &'static str },
    #[error(
        "no zero-slack activity leaves event '{event}'; forward and backward results disagree"
    )]
    CriticalPathInconsistent { event: String },
}

pub type CpmResult<T> = Result<T, CpmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_error_names_unresolved_events() {
        let err = CpmError::CyclicDependency {
            cycle: vec!["B".into(), "C".into()],
            unresolved: vec!["B".into(), "C".into(), "D".into()],
        };
        assert_eq!(
            err.to_string(),
            "dependency cycle among [B, C]; unresolved events: [B, C, D]"
        );
    }
}
