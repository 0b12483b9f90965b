use bevy::prelude::*;
use lf_core::SpawnError;

/// Destination for spawn failures. Each failure is reported exactly once, at
/// the point it is detected, and the failed spawn is skipped.
pub trait FailureSink {
    fn report(&mut self, error: &SpawnError);
}

/// Reports failures through the log at warn level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl FailureSink for LogSink {
    fn report(&mut self, error: &SpawnError) {
        warn!("spawn skipped: {}", error);
    }
}

/// Collects failures for later handling.
impl FailureSink for Vec<SpawnError> {
    fn report(&mut self, error: &SpawnError) {
        self.push(error.clone());
    }
}
