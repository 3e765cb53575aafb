//! Shared types for the IMPACTFX editor core.
//!
//! Dependency-light enums describing the persisted document's fixed
//! vocabulary: effect kinds, trigger categories, particle field names,
//! variance keys, and the serialization tier selector. Both the core and any
//! host layer speak in these types.

pub mod fields;
pub mod kinds;
pub mod tier;

pub use fields::{ParticleField, VarianceKey};
pub use kinds::{EffectKind, TriggerCategory};
pub use tier::CompressionTier;
