//! `RateTable` — count-indexed rate model.

use kmc_core::{KmcError, KmcResult, PhysicalParams};

use crate::transition_rate;

/// Largest possible bond count on a square lattice.
pub const MAX_BONDS: u8 = 4;

const N: usize = MAX_BONDS as usize + 1;

/// Dense `rate[start][end]` table over bond counts `0..=4`.
///
/// `start` is the bond count of the moving atom before the hop, `end` the
/// bond count it will have at the destination.
#[derive(Clone, Debug, PartialEq)]
pub struct RateTable {
    rates: [[f64; N]; N],
}

impl RateTable {
    /// Compute every entry from the physical parameters.
    pub fn from_params(params: &PhysicalParams) -> KmcResult<Self> {
        params.validate()?;
        let mut rates = [[0.0; N]; N];
        for (start, row) in rates.iter_mut().enumerate() {
            for (end, rate) in row.iter_mut().enumerate() {
                *rate = transition_rate(params, start as u8, end as u8)?;
            }
        }
        Ok(Self { rates })
    }

    /// Build a table from an arbitrary `(start, end) -> rate` function.
    ///
    /// # Errors
    /// `Config` if any entry is negative or not finite.
    pub fn from_fn(mut f: impl FnMut(u8, u8) -> f64) -> KmcResult<Self> {
        let mut rates = [[0.0; N]; N];
        for (start, row) in rates.iter_mut().enumerate() {
            for (end, rate) in row.iter_mut().enumerate() {
                let r = f(start as u8, end as u8);
                if !(r.is_finite() && r >= 0.0) {
                    return Err(KmcError::Config(format!(
                        "rate[{start}][{end}] must be finite and non-negative, got {r}"
                    )));
                }
                *rate = r;
            }
        }
        Ok(Self { rates })
    }

    /// Every transition runs at the same rate.
    pub fn uniform(rate: f64) -> KmcResult<Self> {
        Self::from_fn(|_, _| rate)
    }

    /// Rate for a hop from `start` bonds to `end` bonds.
    #[inline]
    pub fn rate(&self, start: u8, end: u8) -> KmcResult<f64> {
        self.rates
            .get(start as usize)
            .and_then(|row| row.get(end as usize))
            .copied()
            .ok_or_else(|| {
                KmcError::UnconfiguredTransition(format!("{start} → {end} bonds"))
            })
    }

    /// The raw table, `[start][end]`.
    pub fn as_array(&self) -> &[[f64; N]; N] {
        &self.rates
    }
}
