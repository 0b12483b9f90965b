use lf_core::VisualRef;

use crate::flyable::FlyableConfig;

flyable_strategy!(
    /// Creates hot air balloons.
    ///
    /// They rise slowly and almost straight up, and carry their own burner effect
    /// which the presentation layer plays on pop.
    HotAirBalloonStrategy,
    "Hot Air Balloon"
);

impl HotAirBalloonStrategy {
    pub fn default_config() -> FlyableConfig {
        FlyableConfig {
            prefab: "flyables/hot_air_balloon".to_string(),
            sprite: VisualRef::new("sprites/hot_air_balloon.png"),
            pop_effect: Some(VisualRef::new("effects/burner_flare")),
            spawn_pos: [0.0, -7.0, 0.0],
            min_speed: 0.6,
            max_speed: 1.0,
            drift: 0.2,
            ..FlyableConfig::default()
        }
    }
}
