pub mod flyable;
pub mod registry;
pub mod strategy;

pub use flyable::{Flyable, FlyableConfig, DESPAWN_DELAY, POP_DURATION};
pub use registry::{StrategyBinding, StrategyRegistry};
pub use strategy::{BalloonStrategy, BubbleStrategy, HeartStrategy, HotAirBalloonStrategy};
