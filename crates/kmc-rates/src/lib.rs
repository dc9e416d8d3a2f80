//! `kmc-rates` — the rate model.
//!
//! # Physics
//!
//! ```text
//! site energy        E(n)  = -n · E_b / 2
//! reaction energy    ΔE    = E(end) - E(start)
//! activation energy  E_a   = E_0 + (1 + α)·ΔE    if ΔE ≥ 0   (uphill)
//!                          = E_0 + α·ΔE          if ΔE < 0   (downhill)
//! rate               k     = f · exp(-E_a / (k_B · T))
//! ```
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`arrhenius`]   | `site_energy`, `activation_energy`, `arrhenius_rate`    |
//! | [`table`]       | `RateTable` — dense 5×5 (start, end) bond-count table   |
//! | [`named`]       | `NamedTransition`, `NamedRates` — per-class rates       |
//!
//! Both rate models are computed once from [`kmc_core::PhysicalParams`] and
//! are immutable afterwards.  A lookup without a precomputed entry is an
//! error, never a silent zero.

pub mod arrhenius;
pub mod named;
pub mod table;

#[cfg(test)]
mod tests;

pub use arrhenius::{activation_energy, arrhenius_rate, site_energy, transition_rate};
pub use named::{NamedRates, NamedTransition};
pub use table::{MAX_BONDS, RateTable};
