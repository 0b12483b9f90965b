use std::sync::atomic::{AtomicU64, Ordering};

/// Declares a creation strategy type stamping [`Flyable`](crate::flyable::Flyable)s
/// from one template. The invoking module supplies `default_config()`.
macro_rules! flyable_strategy {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        pub struct $name {
            template: ::std::sync::Arc<$crate::flyable::FlyableConfig>,
            seeds: $crate::strategy::InstanceSeeds,
        }

        impl $name {
            /// Strategy using the stock template for this kind.
            pub fn new(seed: u64) -> Self {
                Self {
                    template: ::std::sync::Arc::new(Self::default_config()),
                    seeds: $crate::strategy::InstanceSeeds::new(seed),
                }
            }

            /// Strategy using a custom template, rejected up front when invalid.
            pub fn with_config(
                seed: u64,
                config: $crate::flyable::FlyableConfig,
            ) -> Result<Self, ::lf_core::SpawnError> {
                config.validate($label)?;
                Ok(Self {
                    template: ::std::sync::Arc::new(config),
                    seeds: $crate::strategy::InstanceSeeds::new(seed),
                })
            }

            pub fn config(&self) -> &$crate::flyable::FlyableConfig {
                &self.template
            }

            /// Number of instances created so far.
            pub fn created(&self) -> u64 {
                self.seeds.created()
            }
        }

        impl ::lf_core::CreationStrategy for $name {
            fn create(&self) -> Box<dyn ::lf_core::Spawnable> {
                Box::new($crate::flyable::Flyable::new(
                    self.template.clone(),
                    self.seeds.next(),
                ))
            }

            fn validate(&self) -> Result<(), ::lf_core::SpawnError> {
                self.template.validate($label)
            }

            fn name(&self) -> &'static str {
                $label
            }
        }
    };
}

mod balloon;
mod bubble;
mod heart;
mod hot_air_balloon;

pub use balloon::BalloonStrategy;
pub use bubble::BubbleStrategy;
pub use heart::HeartStrategy;
pub use hot_air_balloon::HotAirBalloonStrategy;

/// Hands out a distinct, reproducible seed for every instance a strategy creates.
///
/// Strategies are shared behind `Arc`, so the counter is atomic.
pub(crate) struct InstanceSeeds {
    base: u64,
    created: AtomicU64,
}

impl InstanceSeeds {
    pub(crate) fn new(base: u64) -> Self {
        Self {
            base,
            created: AtomicU64::new(0),
        }
    }

    pub(crate) fn next(&self) -> u64 {
        let n = self.created.fetch_add(1, Ordering::Relaxed);
        self.base ^ n.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }

    pub(crate) fn created(&self) -> u64 {
        self.created.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lf_core::CreationStrategy;

    #[test]
    fn seeds_are_distinct_and_counted() {
        let seeds = InstanceSeeds::new(42);
        let a = seeds.next();
        let b = seeds.next();
        assert_ne!(a, b);
        assert_eq!(seeds.created(), 2);
    }

    #[test]
    fn every_stock_template_is_valid() {
        assert!(BalloonStrategy::new(0).validate().is_ok());
        assert!(BubbleStrategy::new(0).validate().is_ok());
        assert!(HeartStrategy::new(0).validate().is_ok());
        assert!(HotAirBalloonStrategy::new(0).validate().is_ok());
    }
}
