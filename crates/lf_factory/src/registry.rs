//! Kind → creation strategy lookup, built from an ordered list of bindings.

use std::collections::HashMap;
use std::sync::Arc;

use bevy::prelude::*;
use lf_core::{CreationStrategy, FlyableKind, SpawnError, Spawnable};
use rand::prelude::*;

/// One configured pairing of a kind with the strategy that creates it.
#[derive(Clone)]
pub struct StrategyBinding {
    pub kind: FlyableKind,
    pub strategy: Arc<dyn CreationStrategy>,
}

impl StrategyBinding {
    pub fn new(kind: FlyableKind, strategy: Arc<dyn CreationStrategy>) -> Self {
        Self { kind, strategy }
    }
}

impl std::fmt::Debug for StrategyBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyBinding")
            .field("kind", &self.kind)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

/// Registry resolving flyable kinds to their creation strategies.
///
/// Keeps the bindings in configuration order alongside a deduplicated lookup
/// table. When a kind is bound more than once, the first binding wins lookups,
/// but random selection still draws from the full ordered list, so a kind
/// listed twice is picked twice as often.
#[derive(Resource, Default)]
pub struct StrategyRegistry {
    bindings: Vec<StrategyBinding>,
    lookup: HashMap<FlyableKind, Arc<dyn CreationStrategy>>,
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

impl StrategyRegistry {
    /// Build a registry from bindings in one step.
    pub fn from_bindings(bindings: impl IntoIterator<Item = StrategyBinding>) -> Self {
        let mut registry = Self::default();
        registry.initialize(bindings);
        registry
    }

    /// Clear and rebuild from `bindings`. Safe to call repeatedly; the registry
    /// always reflects the latest call.
    pub fn initialize(&mut self, bindings: impl IntoIterator<Item = StrategyBinding>) {
        self.bindings = bindings.into_iter().collect();
        self.lookup.clear();

        for binding in &self.bindings {
            self.lookup
                .entry(binding.kind)
                .or_insert_with(|| binding.strategy.clone());
        }
    }

    /// Strategy bound to `kind`.
    pub fn resolve(&self, kind: FlyableKind) -> Result<&dyn CreationStrategy, SpawnError> {
        self.lookup
            .get(&kind)
            .map(|strategy| strategy.as_ref())
            .ok_or(SpawnError::UnregisteredKind(kind))
    }

    /// Pick one binding uniformly from the ordered list.
    pub fn resolve_random_binding<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<&StrategyBinding, SpawnError> {
        self.bindings.choose(rng).ok_or(SpawnError::EmptyRegistry)
    }

    /// Strategy of a uniformly picked binding.
    pub fn resolve_random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<&dyn CreationStrategy, SpawnError> {
        self.resolve_random_binding(rng)
            .map(|binding| binding.strategy.as_ref())
    }

    /// Create an instance of `kind`.
    ///
    /// A strategy whose template fails validation yields `InvalidTemplate`
    /// instead of an instance.
    pub fn create(&self, kind: FlyableKind) -> Result<Box<dyn Spawnable>, SpawnError> {
        checked_create(self.resolve(kind)?)
    }

    /// Create an instance from a randomly picked binding.
    pub fn create_random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Box<dyn Spawnable>, SpawnError> {
        checked_create(self.resolve_random(rng)?)
    }

    /// Validate every bound strategy, including ones shadowed by an earlier
    /// binding of the same kind (random selection can still reach them).
    pub fn validate(&self) -> Result<(), SpawnError> {
        for binding in &self.bindings {
            binding.strategy.validate()?;
        }
        Ok(())
    }

    /// Bindings in configuration order.
    pub fn bindings(&self) -> &[StrategyBinding] {
        &self.bindings
    }

    /// Registered kinds in order of first registration.
    pub fn kinds(&self) -> Vec<FlyableKind> {
        let mut kinds: Vec<FlyableKind> = Vec::with_capacity(self.lookup.len());
        for binding in &self.bindings {
            if !kinds.contains(&binding.kind) {
                kinds.push(binding.kind);
            }
        }
        kinds
    }

    pub fn is_registered(&self, kind: FlyableKind) -> bool {
        self.lookup.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn checked_create(strategy: &dyn CreationStrategy) -> Result<Box<dyn Spawnable>, SpawnError> {
    strategy.validate()?;
    Ok(strategy.create())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flyable::{Flyable, FlyableConfig};
    use crate::strategy::{BalloonStrategy, BubbleStrategy, HeartStrategy, HotAirBalloonStrategy};
    use rand_chacha::ChaCha8Rng;

    fn binding(kind: FlyableKind, strategy: impl CreationStrategy + 'static) -> StrategyBinding {
        StrategyBinding::new(kind, Arc::new(strategy))
    }

    /// Strategy around a template that skipped construction-time checks.
    struct Unchecked(Arc<FlyableConfig>);

    impl CreationStrategy for Unchecked {
        fn create(&self) -> Box<dyn Spawnable> {
            Box::new(Flyable::new(self.0.clone(), 0))
        }

        fn validate(&self) -> Result<(), SpawnError> {
            self.0.validate(self.name())
        }

        fn name(&self) -> &'static str {
            "Unchecked"
        }
    }

    fn inverted_speeds() -> Unchecked {
        Unchecked(Arc::new(FlyableConfig {
            min_speed: 5.0,
            max_speed: 1.0,
            ..BubbleStrategy::default_config()
        }))
    }

    fn all_kinds() -> StrategyRegistry {
        StrategyRegistry::from_bindings([
            binding(FlyableKind::Balloon, BalloonStrategy::new(1)),
            binding(FlyableKind::Bubble, BubbleStrategy::new(2)),
            binding(FlyableKind::Heart, HeartStrategy::new(3)),
            binding(FlyableKind::HotAirBalloon, HotAirBalloonStrategy::new(4)),
        ])
    }

    #[test]
    fn resolve_returns_bound_strategy() {
        let registry = all_kinds();
        assert_eq!(registry.resolve(FlyableKind::Balloon).unwrap().name(), "Balloon");
        assert_eq!(registry.resolve(FlyableKind::Bubble).unwrap().name(), "Bubble");
        assert_eq!(registry.resolve(FlyableKind::Heart).unwrap().name(), "Heart");
        assert_eq!(
            registry.resolve(FlyableKind::HotAirBalloon).unwrap().name(),
            "Hot Air Balloon"
        );
    }

    #[test]
    fn duplicate_kind_keeps_first_binding() {
        let registry = StrategyRegistry::from_bindings([
            binding(FlyableKind::Balloon, HeartStrategy::new(1)),
            binding(FlyableKind::Balloon, BalloonStrategy::new(2)),
        ]);
        assert_eq!(registry.resolve(FlyableKind::Balloon).unwrap().name(), "Heart");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.kinds(), vec![FlyableKind::Balloon]);
    }

    #[test]
    fn unregistered_kind_fails() {
        let registry = StrategyRegistry::from_bindings([
            binding(FlyableKind::Balloon, BalloonStrategy::new(1)),
            binding(FlyableKind::Bubble, BubbleStrategy::new(2)),
        ]);
        assert!(!registry.is_registered(FlyableKind::HotAirBalloon));
        assert_eq!(
            registry.create(FlyableKind::HotAirBalloon).err(),
            Some(SpawnError::UnregisteredKind(FlyableKind::HotAirBalloon))
        );
    }

    #[test]
    fn initialize_replaces_previous_bindings() {
        let mut registry = all_kinds();
        registry.initialize([binding(FlyableKind::Bubble, BalloonStrategy::new(9))]);

        assert_eq!(registry.len(), 1);
        assert!(registry.resolve(FlyableKind::Balloon).is_err());
        assert_eq!(registry.resolve(FlyableKind::Bubble).unwrap().name(), "Balloon");

        // Calling again with the same input leaves the same state.
        registry.initialize([binding(FlyableKind::Bubble, BalloonStrategy::new(9))]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.kinds(), vec![FlyableKind::Bubble]);
    }

    #[test]
    fn random_on_empty_registry_fails() {
        let mut registry = all_kinds();
        registry.initialize(Vec::new());
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..10 {
            assert!(matches!(
                registry.resolve_random(&mut rng),
                Err(SpawnError::EmptyRegistry)
            ));
            assert_eq!(registry.create_random(&mut rng).err(), Some(SpawnError::EmptyRegistry));
        }
    }

    // Random selection is weighted by list membership, not by distinct kind:
    // a kind bound twice is drawn twice as often as a kind bound once.
    #[test]
    fn random_frequency_follows_list_membership() {
        let registry = StrategyRegistry::from_bindings([
            binding(FlyableKind::Balloon, BalloonStrategy::new(1)),
            binding(FlyableKind::Balloon, BalloonStrategy::new(2)),
            binding(FlyableKind::Heart, HeartStrategy::new(3)),
        ]);
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        let samples = 30_000;
        let mut per_binding = [0usize; 3];
        let mut balloons = 0usize;

        for _ in 0..samples {
            let chosen = registry.resolve_random_binding(&mut rng).unwrap();
            let index = registry
                .bindings()
                .iter()
                .position(|b| std::ptr::eq(b, chosen))
                .unwrap();
            per_binding[index] += 1;
            if chosen.kind == FlyableKind::Balloon {
                balloons += 1;
            }
        }

        for (index, count) in per_binding.iter().enumerate() {
            let share = *count as f64 / samples as f64;
            assert!(
                (share - 1.0 / 3.0).abs() < 0.02,
                "binding {} drawn with share {}",
                index,
                share
            );
        }
        let balloon_share = balloons as f64 / samples as f64;
        assert!(
            (balloon_share - 2.0 / 3.0).abs() < 0.02,
            "balloon share {}",
            balloon_share
        );
    }

    #[test]
    fn validate_reports_shadowed_bad_template() {
        let registry = StrategyRegistry::from_bindings([
            binding(FlyableKind::Bubble, BubbleStrategy::new(1)),
            binding(FlyableKind::Bubble, inverted_speeds()),
        ]);
        assert!(matches!(
            registry.validate(),
            Err(SpawnError::InvalidTemplate { strategy: "Unchecked", .. })
        ));
        assert!(all_kinds().validate().is_ok());
    }

    #[test]
    fn bad_template_fails_creation_instead_of_producing() {
        let registry =
            StrategyRegistry::from_bindings([binding(FlyableKind::Heart, inverted_speeds())]);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        assert!(matches!(
            registry.create(FlyableKind::Heart),
            Err(SpawnError::InvalidTemplate { strategy: "Unchecked", .. })
        ));
        assert!(matches!(
            registry.create_random(&mut rng),
            Err(SpawnError::InvalidTemplate { .. })
        ));
    }
}
