pub mod content;
pub mod error;
pub mod interval;
pub mod kind;
pub mod spawnable;
pub mod strategy;

pub use content::{ContentEntry, VisualRef};
pub use error::SpawnError;
pub use interval::spawn_interval;
pub use kind::FlyableKind;
pub use spawnable::{Lifecycle, Spawnable};
pub use strategy::CreationStrategy;
