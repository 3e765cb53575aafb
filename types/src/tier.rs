//! Serialization tier selection.

use serde::{Deserialize, Serialize};

/// Output fidelity tier for the serialization codec.
///
/// `None` is the fully expanded pretty-printed form, `Medium` keeps block
/// structure but inlines scalar lists and single-key scalar objects, `Full`
/// strips all insignificant whitespace. For any given document the rendered
/// text never grows as the tier increases.
///
/// # Examples
/// ```
/// use impactfx_types::CompressionTier;
/// assert_eq!(CompressionTier::from_level(1), Some(CompressionTier::Medium));
/// assert_eq!(CompressionTier::from_level(7), None);
/// assert_eq!(CompressionTier::Full.level(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionTier {
    /// Pretty-printed, every field expanded.
    #[default]
    None,
    /// Pretty-printed with inline scalar lists and single-key scalar objects.
    Medium,
    /// Compact, minimal byte size.
    Full,
}

impl CompressionTier {
    /// Parse a numeric tier level. Out-of-range values are rejected rather
    /// than clamped; callers keep their previous tier.
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Self::None),
            1 => Some(Self::Medium),
            2 => Some(Self::Full),
            _ => None,
        }
    }

    /// Numeric level of this tier.
    pub fn level(self) -> i64 {
        match self {
            Self::None => 0,
            Self::Medium => 1,
            Self::Full => 2,
        }
    }
}
