use std::time::Duration;

use crate::content::ContentEntry;

/// Lifecycle of a spawned flyable.
///
/// `Created → Initialized → Active → Terminating → Destroyed`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    #[default]
    Created,
    Initialized,
    Active,
    Terminating,
    Destroyed,
}

impl Lifecycle {
    /// True once the instance has finished and can be dropped by its owner.
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Destroyed)
    }
}

/// Capability every instance produced by a [`CreationStrategy`](crate::CreationStrategy) satisfies.
///
/// The spawner only calls `initialize` then `activate`; ownership then passes to the
/// host scene, which drives `update` each frame until the instance is destroyed.
pub trait Spawnable: Send + Sync {
    /// Bind display content. Must be called exactly once, before `activate`.
    fn initialize(&mut self, entry: ContentEntry);

    /// Start the in-flight behaviour. Callers must not call this twice.
    fn activate(&mut self);

    /// Begin end-of-life behaviour. No further calls are expected afterwards
    /// except `update`, which lets the instance finish its exit transition.
    fn terminate(&mut self);

    /// Current lifecycle state.
    fn lifecycle(&self) -> Lifecycle;

    /// Content bound by `initialize`, if any.
    fn content(&self) -> Option<&ContentEntry>;

    /// Per-frame update owned by the host. Instances that leave their bounds
    /// while active call `terminate` on themselves from here.
    fn update(&mut self, delta: Duration);
}
