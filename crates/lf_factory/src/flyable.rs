use std::sync::Arc;
use std::time::Duration;

use bevy::prelude::*;
use lf_core::{ContentEntry, Lifecycle, SpawnError, Spawnable, VisualRef};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Time taken to shrink to nothing once popped.
pub const POP_DURATION: Duration = Duration::from_millis(500);

/// Extra time a popped flyable lingers before it is destroyed.
pub const DESPAWN_DELAY: Duration = Duration::from_secs(1);

/// Template a creation strategy stamps instances from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlyableConfig {
    /// Prefab the presentation layer instantiates.
    pub prefab: String,
    /// Sprite assigned on initialization.
    pub sprite: VisualRef,
    /// Effect played when popped, if any.
    pub pop_effect: Option<VisualRef>,
    /// Spawn position in world units.
    pub spawn_pos: [f32; 3],
    /// Lower bound for the launch speed.
    pub min_speed: f32,
    /// Upper bound for the launch speed.
    pub max_speed: f32,
    /// Maximum sideways drift; launch direction is `(x, 1, 0)` with `x` in `[-drift, drift)`.
    pub drift: f32,
    /// Height above which an active flyable terminates itself.
    pub ceiling: f32,
}

impl Default for FlyableConfig {
    fn default() -> Self {
        Self {
            prefab: "flyables/balloon".to_string(),
            sprite: VisualRef::new("sprites/balloon.png"),
            pop_effect: None,
            spawn_pos: [0.0, -6.0, 0.0],
            min_speed: 1.2,
            max_speed: 2.2,
            drift: 0.5,
            ceiling: 10.0,
        }
    }
}

impl FlyableConfig {
    /// Check the template can stamp valid instances.
    pub fn validate(&self, strategy: &'static str) -> Result<(), SpawnError> {
        let invalid = |reason: String| SpawnError::InvalidTemplate { strategy, reason };

        if self.prefab.trim().is_empty() {
            return Err(invalid("prefab is empty".to_string()));
        }
        if !self.min_speed.is_finite() || !self.max_speed.is_finite() || self.min_speed < 0.0 {
            return Err(invalid(format!(
                "speed bounds {}..{} are not finite and non-negative",
                self.min_speed, self.max_speed
            )));
        }
        if self.min_speed > self.max_speed {
            return Err(invalid(format!(
                "min speed {} exceeds max speed {}",
                self.min_speed, self.max_speed
            )));
        }
        if !self.drift.is_finite() || self.drift < 0.0 {
            return Err(invalid(format!("drift {} must be finite and non-negative", self.drift)));
        }
        if !self.ceiling.is_finite() || self.ceiling <= self.spawn_pos[1] {
            return Err(invalid(format!(
                "ceiling {} must lie above spawn height {}",
                self.ceiling, self.spawn_pos[1]
            )));
        }
        Ok(())
    }
}

/// Reference flyable: rises from its spawn point, pops when it leaves the top bound.
pub struct Flyable {
    template: Arc<FlyableConfig>,
    rng: ChaCha8Rng,
    lifecycle: Lifecycle,
    entry: Option<ContentEntry>,
    sprite: Option<VisualRef>,
    position: Vec3,
    direction: Vec3,
    speed: f32,
    scale: f32,
    popped_for: Duration,
}

impl Flyable {
    /// Stamp a new instance from a template. `seed` drives launch randomness.
    pub fn new(template: Arc<FlyableConfig>, seed: u64) -> Self {
        let position = Vec3::from_array(template.spawn_pos);
        Self {
            template,
            rng: ChaCha8Rng::seed_from_u64(seed),
            lifecycle: Lifecycle::Created,
            entry: None,
            sprite: None,
            position,
            direction: Vec3::ZERO,
            speed: 0.0,
            scale: 1.0,
            popped_for: Duration::ZERO,
        }
    }

    pub fn template(&self) -> &FlyableConfig {
        &self.template
    }

    pub fn sprite(&self) -> Option<&VisualRef> {
        self.sprite.as_ref()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Uniform scale, shrinking from 1 to 0 while popping.
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl Spawnable for Flyable {
    fn initialize(&mut self, entry: ContentEntry) {
        if self.lifecycle != Lifecycle::Created {
            warn!("initialize called on {} flyable in state {:?}", self.template.prefab, self.lifecycle);
            return;
        }
        self.sprite = Some(self.template.sprite.clone());
        self.entry = Some(entry);
        self.lifecycle = Lifecycle::Initialized;
    }

    fn activate(&mut self) {
        if self.lifecycle != Lifecycle::Initialized {
            warn!("activate called on {} flyable in state {:?}", self.template.prefab, self.lifecycle);
            return;
        }
        // Bounds may come from an unchecked template.
        let drift = self.template.drift;
        let x = if drift.is_finite() && drift > 0.0 {
            self.rng.gen_range(-drift..drift)
        } else {
            0.0
        };
        let (min, max) = (self.template.min_speed, self.template.max_speed);
        let (low, high) = (min.min(max), min.max(max));
        self.direction = Vec3::new(x, 1.0, 0.0);
        self.speed = if low.is_finite() && high.is_finite() {
            self.rng.gen_range(low..=high)
        } else {
            0.0
        };
        self.lifecycle = Lifecycle::Active;
    }

    fn terminate(&mut self) {
        if matches!(self.lifecycle, Lifecycle::Terminating | Lifecycle::Destroyed) {
            warn!("terminate called on {} flyable in state {:?}", self.template.prefab, self.lifecycle);
            return;
        }
        if let Some(effect) = &self.template.pop_effect {
            debug!("pop effect {} at {}", effect.as_str(), self.position);
        }
        self.lifecycle = Lifecycle::Terminating;
        self.popped_for = Duration::ZERO;
    }

    fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    fn content(&self) -> Option<&ContentEntry> {
        self.entry.as_ref()
    }

    fn update(&mut self, delta: Duration) {
        match self.lifecycle {
            Lifecycle::Active => {
                self.position += self.direction * self.speed * delta.as_secs_f32();
                if self.position.y > self.template.ceiling {
                    self.terminate();
                }
            }
            Lifecycle::Terminating => {
                self.popped_for += delta;
                let shrink = self.popped_for.as_secs_f32() / POP_DURATION.as_secs_f32();
                self.scale = (1.0 - shrink).max(0.0);
                if self.popped_for >= POP_DURATION + DESPAWN_DELAY {
                    self.lifecycle = Lifecycle::Destroyed;
                }
            }
            _ => {}
        }
    }
}
