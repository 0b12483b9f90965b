use std::time::Duration;

use bevy::prelude::*;
use lf_core::{Lifecycle, Spawnable};

/// Owner of launched flyables.
///
/// Once the scheduler hands an instance over it no longer holds a reference;
/// the scene updates it each frame and drops it once destroyed.
#[derive(Resource, Default)]
pub struct FlyableScene {
    flyables: Vec<Box<dyn Spawnable>>,
}

impl FlyableScene {
    /// Take ownership of a launched flyable.
    pub fn adopt(&mut self, flyable: Box<dyn Spawnable>) {
        self.flyables.push(flyable);
    }

    /// Advance every flyable and drop the destroyed ones. Returns how many were dropped.
    pub fn update(&mut self, delta: Duration) -> usize {
        for flyable in &mut self.flyables {
            flyable.update(delta);
        }
        let before = self.flyables.len();
        self.flyables.retain(|flyable| !flyable.lifecycle().is_finished());
        before - self.flyables.len()
    }

    /// Pop every flyable still in flight.
    pub fn terminate_all(&mut self) {
        for flyable in &mut self.flyables {
            if matches!(flyable.lifecycle(), Lifecycle::Initialized | Lifecycle::Active) {
                flyable.terminate();
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Spawnable> {
        self.flyables.iter().map(|flyable| flyable.as_ref())
    }

    pub fn len(&self) -> usize {
        self.flyables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flyables.is_empty()
    }
}
