//! Error types for the editor core.
//!
//! Nothing in this crate is fatal: coercion failures fall back to defaults,
//! invalid references surface as `false`/`None`, and teardown or listener
//! failures are logged at the point of the cascade and swallowed.

use thiserror::Error;

/// Boxed error returned by host-registered event listeners.
pub type BoxError = Box<dyn std::error::Error>;

#[derive(Debug, Error)]
pub enum CoreError {
    /// An id was released (or looked up for release) that the registry does
    /// not consider live.
    #[error("id {0} is not registered")]
    IdNotRegistered(u64),
}
