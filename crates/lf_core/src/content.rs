use serde::{Deserialize, Serialize};

/// Opaque reference to a visual asset (sprite, texture) owned by the presentation layer.
///
/// The spawning core never resolves it; it is handed through to instances as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualRef(pub String);

impl VisualRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no asset is referenced.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One unit of display content bound to a flyable at initialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    /// Unique identifier within its content table.
    pub id: String,
    /// Text shown on the flyable.
    pub value: String,
    /// Visual shown alongside the value.
    pub visual: VisualRef,
}

impl ContentEntry {
    pub fn new(id: impl Into<String>, value: impl Into<String>, visual: VisualRef) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            visual,
        }
    }
}
