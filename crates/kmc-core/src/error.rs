//! Engine error type.
//!
//! A stalled lattice (no mobile atom) is deliberately *not* an error: the
//! stepper reports it as a normal step outcome so drivers can stop cleanly.
//! Everything here aborts the run.

use thiserror::Error;

use crate::Site;

/// The error type shared by all `kmc-*` crates.
#[derive(Debug, Error)]
pub enum KmcError {
    /// Invalid physical parameters, dimensions, or initial lattice.
    #[error("configuration error: {0}")]
    Config(String),

    /// A rate was requested for a transition the rate model never computed.
    #[error("no rate configured for transition {0}")]
    UnconfiguredTransition(String),

    /// A coordinate outside the lattice was passed to a lattice method.
    #[error("site {0} is outside the lattice")]
    SiteOutOfBounds(Site),

    /// Internal consistency check failed; the physical model is corrupt.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Shorthand result type for all `kmc-*` crates.
pub type KmcResult<T> = Result<T, KmcError>;
