//! Entity hierarchy: `Editor` → `Effect` → `Category` → `Particle`.
//!
//! Ownership is strict top-down: the editor exclusively owns its four
//! effects, each effect its three categories, each category its particles.
//! Teardown cascades best-effort; a failing child is logged and never stops
//! its siblings from being destroyed.

mod category;
mod editor;
mod effect;
mod particle;

#[cfg(test)]
mod particle_tests;

pub use category::{Category, SoundEntry};
pub use editor::Editor;
pub use effect::Effect;
pub use particle::{Particle, SaveFlags, VarianceValue};
