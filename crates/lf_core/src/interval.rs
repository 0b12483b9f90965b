use std::time::Duration;

use crate::error::SpawnError;

/// Convert a spawn interval in seconds to a timer duration.
///
/// Rejects anything that does not convert to a non-zero `Duration`: zero,
/// negative, NaN, infinite, overflowing, and positive values so small they
/// round down to zero nanoseconds.
pub fn spawn_interval(secs: f32) -> Result<Duration, SpawnError> {
    match Duration::try_from_secs_f32(secs) {
        Ok(duration) if !duration.is_zero() => Ok(duration),
        _ => Err(SpawnError::InvalidInterval(secs)),
    }
}
