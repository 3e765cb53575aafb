//! Tiered text codec for exported documents.
//!
//! Pure functions over the canonical `serde_json::Value` document produced
//! by the tree. Three tiers trade fidelity of layout against byte size; the
//! optional colorizer marks rendered text up for display and is independent
//! of the tier.

mod colorize;
mod render;

#[cfg(test)]
mod codec_tests;

pub use colorize::colorize;
pub use render::render;
