use serde::{Deserialize, Serialize};

/// Family of flyable object a creation strategy is registered under.
///
/// The set is closed: every kind a settings file or host can name is listed here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlyableKind {
    /// Plain party balloon on a string.
    Balloon,
    /// Soap bubble.
    Bubble,
    /// Heart-shaped foil balloon.
    Heart,
    /// Large hot air balloon with a basket.
    HotAirBalloon,
}

impl FlyableKind {
    /// Display name for logs and debug output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Balloon => "Balloon",
            Self::Bubble => "Bubble",
            Self::Heart => "Heart",
            Self::HotAirBalloon => "Hot Air Balloon",
        }
    }

    /// Get all kinds in declaration order.
    pub fn all() -> &'static [FlyableKind] {
        &[
            Self::Balloon,
            Self::Bubble,
            Self::Heart,
            Self::HotAirBalloon,
        ]
    }
}

impl std::fmt::Display for FlyableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
