use crate::kind::FlyableKind;

/// Failures raised while resolving strategies, picking content or creating flyables.
///
/// None of these are fatal to the scheduler: a failed spawn is reported and skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum SpawnError {
    /// No strategy is bound to the requested kind.
    UnregisteredKind(FlyableKind),
    /// Random resolution was attempted with zero bindings.
    EmptyRegistry,
    /// Random content selection was attempted on an empty table.
    EmptyContentTable,
    /// A strategy's template cannot produce a valid instance.
    InvalidTemplate {
        strategy: &'static str,
        reason: String,
    },
    /// Two content entries share the same id.
    DuplicateContentId(String),
    /// Spawn interval must be finite and greater than zero.
    InvalidInterval(f32),
}

impl std::fmt::Display for SpawnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnregisteredKind(kind) => {
                write!(f, "no strategy registered for flyable kind {}", kind)
            }
            Self::EmptyRegistry => write!(f, "random resolution on an empty strategy registry"),
            Self::EmptyContentTable => write!(f, "content selection on an empty content table"),
            Self::InvalidTemplate { strategy, reason } => {
                write!(f, "invalid template for {} strategy: {}", strategy, reason)
            }
            Self::DuplicateContentId(id) => write!(f, "duplicate content id '{}'", id),
            Self::InvalidInterval(secs) => write!(f, "invalid spawn interval {}s", secs),
        }
    }
}

impl std::error::Error for SpawnError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_kind() {
        let err = SpawnError::UnregisteredKind(FlyableKind::Heart);
        assert!(err.to_string().contains("Heart"), "got: {}", err);
    }

    #[test]
    fn display_names_the_failing_strategy() {
        let err = SpawnError::InvalidTemplate {
            strategy: "Bubble",
            reason: "empty prefab".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Bubble") && msg.contains("empty prefab"), "got: {}", msg);
    }
}
