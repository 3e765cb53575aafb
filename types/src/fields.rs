//! Particle field names and variance keys.

use serde::{Deserialize, Serialize};

/// The optional particle fields governed by persist flags.
///
/// `type`, `animation` and `flippable` are not listed: `type` is always
/// exported, `animation` is gated on `type == "animated"`, and `flippable`
/// self-gates on being true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParticleField {
    Size,
    AngularVelocity,
    Color,
    Fade,
    DestructionTime,
    DestructionAction,
    Position,
    InitialVelocity,
    FinalVelocity,
    Approach,
    Layer,
    TimeToLive,
}

impl ParticleField {
    /// All flagged fields in document order.
    pub const ALL: [ParticleField; 12] = [
        Self::Size,
        Self::AngularVelocity,
        Self::Color,
        Self::Fade,
        Self::DestructionTime,
        Self::DestructionAction,
        Self::Position,
        Self::InitialVelocity,
        Self::FinalVelocity,
        Self::Approach,
        Self::Layer,
        Self::TimeToLive,
    ];

    /// The camelCase document key for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::AngularVelocity => "angularVelocity",
            Self::Color => "color",
            Self::Fade => "fade",
            Self::DestructionTime => "destructionTime",
            Self::DestructionAction => "destructionAction",
            Self::Position => "position",
            Self::InitialVelocity => "initialVelocity",
            Self::FinalVelocity => "finalVelocity",
            Self::Approach => "approach",
            Self::Layer => "layer",
            Self::TimeToLive => "timeToLive",
        }
    }

    /// Parse a document key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == key)
    }
}

/// Particle parameters that may carry a variance specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VarianceKey {
    InitialVelocity,
    TimeToLive,
    Size,
}

impl VarianceKey {
    /// All variance keys.
    pub const ALL: [VarianceKey; 3] = [Self::InitialVelocity, Self::TimeToLive, Self::Size];

    /// Whether this key's variance is a `[min, max]` range rather than a
    /// scalar spread.
    pub fn is_range(self) -> bool {
        matches!(self, Self::InitialVelocity)
    }

    /// The camelCase document key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InitialVelocity => "initialVelocity",
            Self::TimeToLive => "timeToLive",
            Self::Size => "size",
        }
    }

    /// Parse a document key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}
