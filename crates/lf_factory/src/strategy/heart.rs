use lf_core::VisualRef;

use crate::flyable::FlyableConfig;

flyable_strategy!(
    /// Creates heart-shaped foil balloons.
    HeartStrategy,
    "Heart"
);

impl HeartStrategy {
    /// Foil hearts rise a little slower and have no pop effect.
    pub fn default_config() -> FlyableConfig {
        FlyableConfig {
            prefab: "flyables/heart".to_string(),
            sprite: VisualRef::new("sprites/heart.png"),
            pop_effect: None,
            min_speed: 1.0,
            max_speed: 1.8,
            ..FlyableConfig::default()
        }
    }
}
