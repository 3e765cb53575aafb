//! Fixed effect-kind and trigger-category vocabularies.
//!
//! The persisted document always carries exactly four effect kinds, each
//! with exactly three trigger categories. Keys are never added or removed
//! after construction, so both enums double as the canonical key order for
//! export.

use serde::{Deserialize, Serialize};

/// Material kind an effect set is defined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    Organic,
    Robotic,
    Wooden,
    Stone,
}

impl EffectKind {
    /// All kinds in document order.
    pub const ALL: [EffectKind; 4] = [Self::Organic, Self::Robotic, Self::Wooden, Self::Stone];

    /// The document key for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Organic => "organic",
            Self::Robotic => "robotic",
            Self::Wooden => "wooden",
            Self::Stone => "stone",
        }
    }

    /// Parse a document key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "organic" => Some(Self::Organic),
            "robotic" => Some(Self::Robotic),
            "wooden" => Some(Self::Wooden),
            "stone" => Some(Self::Stone),
            _ => None,
        }
    }
}

/// Trigger category within an effect: what kind of impact fires it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerCategory {
    Hit,
    StrongHit,
    Kill,
}

impl TriggerCategory {
    /// All categories in document order.
    pub const ALL: [TriggerCategory; 3] = [Self::Hit, Self::StrongHit, Self::Kill];

    /// The document key for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::StrongHit => "stronghit",
            Self::Kill => "kill",
        }
    }

    /// Parse a document key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "hit" => Some(Self::Hit),
            "stronghit" => Some(Self::StrongHit),
            "kill" => Some(Self::Kill),
            _ => None,
        }
    }
}
