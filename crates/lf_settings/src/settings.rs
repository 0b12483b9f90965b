//! Serializable spawner configuration and its conversion into runtime objects.

use std::sync::Arc;

use lf_content::{ContentTable, DEFAULT_LOCALE};
use lf_core::{spawn_interval, ContentEntry, CreationStrategy, FlyableKind, SpawnError};
use lf_factory::{
    BalloonStrategy, BubbleStrategy, FlyableConfig, HeartStrategy, HotAirBalloonStrategy,
    StrategyBinding, StrategyRegistry,
};
use serde::{Deserialize, Serialize};

/// Which strategy variant to build, with its template.
///
/// Independent of the kind it is bound under, so one kind can be served by
/// another kind's strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StrategySettings {
    Balloon(FlyableConfig),
    Bubble(FlyableConfig),
    Heart(FlyableConfig),
    HotAirBalloon(FlyableConfig),
}

impl StrategySettings {
    /// The stock strategy and template for `kind`.
    pub fn preset(kind: FlyableKind) -> Self {
        match kind {
            FlyableKind::Balloon => Self::Balloon(BalloonStrategy::default_config()),
            FlyableKind::Bubble => Self::Bubble(BubbleStrategy::default_config()),
            FlyableKind::Heart => Self::Heart(HeartStrategy::default_config()),
            FlyableKind::HotAirBalloon => {
                Self::HotAirBalloon(HotAirBalloonStrategy::default_config())
            }
        }
    }

    /// Build the strategy, rejecting a template that fails validation.
    pub fn build(&self, seed: u64) -> Result<Arc<dyn CreationStrategy>, SpawnError> {
        let strategy: Arc<dyn CreationStrategy> = match self {
            Self::Balloon(config) => Arc::new(BalloonStrategy::with_config(seed, config.clone())?),
            Self::Bubble(config) => Arc::new(BubbleStrategy::with_config(seed, config.clone())?),
            Self::Heart(config) => Arc::new(HeartStrategy::with_config(seed, config.clone())?),
            Self::HotAirBalloon(config) => {
                Arc::new(HotAirBalloonStrategy::with_config(seed, config.clone())?)
            }
        };
        Ok(strategy)
    }
}

/// One kind → strategy pairing, in registry order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingSettings {
    pub kind: FlyableKind,
    pub strategy: StrategySettings,
}

impl BindingSettings {
    pub fn preset(kind: FlyableKind) -> Self {
        Self {
            kind,
            strategy: StrategySettings::preset(kind),
        }
    }
}

/// Content table as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSettings {
    pub locale: String,
    pub entries: Vec<ContentEntry>,
}

impl Default for ContentSettings {
    fn default() -> Self {
        let alphabet = ContentTable::latin_alphabet(DEFAULT_LOCALE);
        Self {
            locale: alphabet.locale().to_string(),
            entries: alphabet.iter().cloned().collect(),
        }
    }
}

/// Everything the host needs to set up spawning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnerSettings {
    /// Seed for content/strategy selection and per-strategy launch randomness.
    pub seed: u64,
    /// Seconds between spawns.
    pub interval_secs: f32,
    /// Start spawning as soon as the app runs.
    pub autostart: bool,
    /// Spawn only this kind instead of picking randomly.
    pub pinned_kind: Option<FlyableKind>,
    /// Strategy bindings; order matters for duplicates and random weighting.
    pub bindings: Vec<BindingSettings>,
    /// Content handed to flyables.
    pub content: ContentSettings,
}

impl Default for SpawnerSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            interval_secs: 0.5,
            autostart: true,
            pinned_kind: None,
            bindings: FlyableKind::all()
                .iter()
                .copied()
                .map(BindingSettings::preset)
                .collect(),
            content: ContentSettings::default(),
        }
    }
}

impl SpawnerSettings {
    /// Build the strategy registry. Each binding gets its own strategy instance
    /// with a seed derived from the settings seed and its position.
    pub fn build_registry(&self) -> Result<StrategyRegistry, SpawnError> {
        let bindings = self
            .bindings
            .iter()
            .enumerate()
            .map(|(i, binding)| {
                let seed = self.seed.wrapping_add((i as u64 + 1).wrapping_mul(2654435761));
                Ok(StrategyBinding::new(binding.kind, binding.strategy.build(seed)?))
            })
            .collect::<Result<Vec<_>, SpawnError>>()?;
        Ok(StrategyRegistry::from_bindings(bindings))
    }

    pub fn build_content(&self) -> Result<ContentTable, SpawnError> {
        ContentTable::new(self.content.locale.clone(), self.content.entries.clone())
    }

    /// Check the interval, every strategy template and the content ids up front.
    pub fn validate(&self) -> Result<(), SpawnError> {
        spawn_interval(self.interval_secs)?;
        self.build_registry()?.validate()?;
        self.build_content()?;
        Ok(())
    }
}
