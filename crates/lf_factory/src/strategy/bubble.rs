use lf_core::VisualRef;

use crate::flyable::FlyableConfig;

flyable_strategy!(
    /// Creates soap bubbles: quick, wobbly, and always popping with a splash.
    BubbleStrategy,
    "Bubble"
);

impl BubbleStrategy {
    pub fn default_config() -> FlyableConfig {
        FlyableConfig {
            prefab: "flyables/bubble".to_string(),
            sprite: VisualRef::new("sprites/bubble.png"),
            pop_effect: Some(VisualRef::new("effects/bubble_splash")),
            min_speed: 1.5,
            max_speed: 2.8,
            drift: 0.8,
            ..FlyableConfig::default()
        }
    }
}
