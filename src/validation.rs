use crate::error::{CpmError, CpmResult};
use crate::event::Time;
use crate::metadata::ProjectMetadata;
use std::collections::HashMap;

pub(crate) fn validate_event_name<V>(name: &str, registered: &HashMap<String, V>) -> CpmResult<()> {
    if name.trim().is_empty() {
        return Err(CpmError::BlankEventName);
    }
    if registered.contains_key(name) {
        return Err(CpmError::DuplicateEvent(name.to_string()));
    }
    Ok(())
}

/// Non-finite durations are rejected; negative ones are accepted and only
/// reported, the resulting schedule is the caller's responsibility.
pub(crate) fn validate_duration(duration: Time, from: &str, to: &str) -> CpmResult<()> {
    if !duration.is_finite() {
        return Err(CpmError::InvalidDuration {
            from: from.to_string(),
            to: to.to_string(),
            duration,
        });
    }
    if duration < 0.0 {
        tracing::warn!(from, to, duration, "activity registered with negative duration");
    }
    Ok(())
}

pub(crate) fn validate_metadata(metadata: &ProjectMetadata) -> CpmResult<()> {
    let tolerance = metadata.slack_tolerance;
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(CpmError::InvalidTolerance(tolerance));
    }
    Ok(())
}
