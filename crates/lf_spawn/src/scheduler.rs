//! Repeating spawn timer and the per-tick spawn procedure.

use std::time::Duration;

use bevy::prelude::*;
use lf_content::ContentTable;
use lf_core::{spawn_interval, FlyableKind, SpawnError, Spawnable};
use lf_factory::StrategyRegistry;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::report::FailureSink;

/// Cancellation token for one run of the spawn timer.
///
/// Issued by [`SpawnScheduler::start`]; invalidated by `stop` or by the next `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

struct ActiveTimer {
    handle: TimerHandle,
    timer: Timer,
}

/// Periodically creates a flyable, binds it to random content and launches it.
///
/// At most one timer is live at a time: starting while running cancels the
/// current timer before the new one begins. Failed spawns are reported and
/// skipped; the scheduler keeps running until stopped.
#[derive(Resource)]
pub struct SpawnScheduler {
    active: Option<ActiveTimer>,
    issued: u64,
    pinned: Option<FlyableKind>,
    rng: ChaCha8Rng,
}

impl Default for SpawnScheduler {
    fn default() -> Self {
        Self::from_rng(ChaCha8Rng::from_entropy())
    }
}

impl SpawnScheduler {
    /// Scheduler with reproducible content and strategy selection.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            active: None,
            issued: 0,
            pinned: None,
            rng,
        }
    }

    /// Begin spawning every `interval_secs`, replacing any running timer.
    pub fn start(&mut self, interval_secs: f32) -> Result<TimerHandle, SpawnError> {
        let interval = spawn_interval(interval_secs)?;

        if let Some(previous) = self.active.take() {
            debug!("cancelled spawn timer {:?}", previous.handle);
        }

        self.issued += 1;
        let handle = TimerHandle(self.issued);
        self.active = Some(ActiveTimer {
            handle,
            timer: Timer::new(interval, TimerMode::Repeating),
        });
        Ok(handle)
    }

    /// Cancel the running timer, if any. Returns the cancelled handle.
    pub fn stop(&mut self) -> Option<TimerHandle> {
        self.active.take().map(|active| active.handle)
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Token of the live timer.
    pub fn active_handle(&self) -> Option<TimerHandle> {
        self.active.as_ref().map(|active| active.handle)
    }

    /// Interval of the live timer.
    pub fn interval(&self) -> Option<Duration> {
        self.active.as_ref().map(|active| active.timer.duration())
    }

    /// Restrict timed spawns to one kind, or `None` to pick randomly.
    pub fn pin_kind(&mut self, kind: Option<FlyableKind>) {
        self.pinned = kind;
    }

    pub fn pinned_kind(&self) -> Option<FlyableKind> {
        self.pinned
    }

    /// Advance the timer by `delta` and run one spawn per elapsed interval.
    ///
    /// Returns the launched flyables; ownership passes to the caller.
    pub fn tick(
        &mut self,
        delta: Duration,
        registry: &StrategyRegistry,
        content: &ContentTable,
        sink: &mut dyn FailureSink,
    ) -> Vec<Box<dyn Spawnable>> {
        let due = match self.active.as_mut() {
            Some(active) => {
                active.timer.tick(delta);
                active.timer.times_finished_this_tick()
            }
            None => 0,
        };

        let pinned = self.pinned;
        (0..due)
            .filter_map(|_| self.spawn(pinned, registry, content, sink))
            .collect()
    }

    /// Spawn once right away, outside the timer.
    pub fn spawn_now(
        &mut self,
        registry: &StrategyRegistry,
        content: &ContentTable,
        sink: &mut dyn FailureSink,
    ) -> Option<Box<dyn Spawnable>> {
        self.spawn(self.pinned, registry, content, sink)
    }

    /// Spawn one flyable of `kind` right away.
    pub fn spawn_kind_now(
        &mut self,
        kind: FlyableKind,
        registry: &StrategyRegistry,
        content: &ContentTable,
        sink: &mut dyn FailureSink,
    ) -> Option<Box<dyn Spawnable>> {
        self.spawn(Some(kind), registry, content, sink)
    }

    fn spawn(
        &mut self,
        kind: Option<FlyableKind>,
        registry: &StrategyRegistry,
        content: &ContentTable,
        sink: &mut dyn FailureSink,
    ) -> Option<Box<dyn Spawnable>> {
        match self.launch(kind, registry, content) {
            Ok(flyable) => Some(flyable),
            Err(error) => {
                sink.report(&error);
                None
            }
        }
    }

    fn launch(
        &mut self,
        kind: Option<FlyableKind>,
        registry: &StrategyRegistry,
        content: &ContentTable,
    ) -> Result<Box<dyn Spawnable>, SpawnError> {
        let entry = content.pick(&mut self.rng)?.clone();
        let mut flyable = match kind {
            Some(kind) => registry.create(kind)?,
            None => registry.create_random(&mut self.rng)?,
        };
        flyable.initialize(entry);
        flyable.activate();
        Ok(flyable)
    }
}
