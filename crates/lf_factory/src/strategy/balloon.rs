use lf_core::VisualRef;

use crate::flyable::FlyableConfig;

flyable_strategy!(
    /// Creates plain party balloons.
    BalloonStrategy,
    "Balloon"
);

impl BalloonStrategy {
    /// Template used by [`BalloonStrategy::new`].
    pub fn default_config() -> FlyableConfig {
        FlyableConfig {
            prefab: "flyables/balloon".to_string(),
            sprite: VisualRef::new("sprites/balloon.png"),
            pop_effect: Some(VisualRef::new("effects/balloon_pop")),
            ..FlyableConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lf_core::{CreationStrategy, Lifecycle, SpawnError};

    #[test]
    fn creates_fresh_instances() {
        let strategy = BalloonStrategy::new(42);
        let flyable = strategy.create();
        assert_eq!(flyable.lifecycle(), Lifecycle::Created);
        assert!(flyable.content().is_none());
        assert_eq!(strategy.created(), 1);
    }

    #[test]
    fn inverted_speed_bounds_are_rejected_at_construction() {
        let result = BalloonStrategy::with_config(
            1,
            FlyableConfig {
                min_speed: 3.0,
                max_speed: 1.0,
                ..BalloonStrategy::default_config()
            },
        );
        assert!(matches!(
            result,
            Err(SpawnError::InvalidTemplate { strategy: "Balloon", .. })
        ));
    }
}
