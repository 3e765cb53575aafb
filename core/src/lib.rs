//! IMPACTFX core: an in-memory tree of material impact-effect definitions
//! with a tiered text serialization codec.
//!
//! The tree is `Editor` → four `Effect`s (one per material kind) → three
//! `Category`s each (hit/stronghit/kill) → ordered sound entries and
//! `Particle`s. Mutation happens through direct references into the tree;
//! whole-tree replacement goes through [`tree::Editor::load`] and notifies
//! registered `load` listeners. Export produces a canonical
//! `serde_json::Value` document that the codec renders at one of three
//! fidelity tiers, optionally colorized for display by a host layer.

pub mod codec;
pub mod coerce;
pub mod error;
pub mod events;
pub mod registry;
pub mod tree;

// Re-exports for convenience
pub use codec::{colorize, render};
pub use error::{BoxError, CoreError};
pub use events::{Channel, ListenerId};
pub use registry::{EntityKind, IdRegistry};
pub use tree::{Category, Editor, Effect, Particle, SoundEntry};
