use crate::error::SpawnError;
use crate::spawnable::Spawnable;

/// Trait for flyable creation strategies.
///
/// Each implementation produces instances of one family, closing over its own
/// immutable configuration. Strategies are owned by the host configuration and
/// shared with the registry, so the trait is object-safe and `Send + Sync`.
pub trait CreationStrategy: Send + Sync {
    /// Produce a fresh instance in the `Created` state.
    fn create(&self) -> Box<dyn Spawnable>;

    /// Check the configured template can produce valid instances.
    ///
    /// Run once at startup so a misconfigured template is caught before the
    /// first spawn.
    fn validate(&self) -> Result<(), SpawnError> {
        Ok(())
    }

    /// Returns the name of this strategy for debugging.
    fn name(&self) -> &'static str {
        "CreationStrategy"
    }
}
