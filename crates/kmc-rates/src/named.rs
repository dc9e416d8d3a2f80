//! `NamedRates` — one rate per mobility class of the atom-driven policy.
//!
//! Only the three-bond surface class has a destination-dependent variant.
//! Two-bond edge atoms always hop at a single rate.  The asymmetry is part
//! of the model; do not add a destination refinement for `Edge`.

use std::fmt;

use kmc_core::{KmcError, KmcResult, PhysicalParams};

use crate::transition_rate;

/// A named bonding-class transition.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum NamedTransition {
    /// An isolated atom (0 bonds) hops into any free neighbour.
    Adatom,
    /// A two-bond atom hops into its first free neighbour.
    Edge,
    /// A three-bond surface atom hops out, rate independent of destination.
    SurfaceFixed,
    /// A three-bond surface atom hops to a site with `destination_bonds`
    /// neighbours (moving atom excluded), `0..=3`.
    Surface { destination_bonds: u8 },
}

const SLOTS: usize = 7;

impl NamedTransition {
    /// Every transition [`NamedRates::from_params`] fills.
    pub const ALL: [NamedTransition; SLOTS] = [
        NamedTransition::Adatom,
        NamedTransition::Edge,
        NamedTransition::SurfaceFixed,
        NamedTransition::Surface { destination_bonds: 0 },
        NamedTransition::Surface { destination_bonds: 1 },
        NamedTransition::Surface { destination_bonds: 2 },
        NamedTransition::Surface { destination_bonds: 3 },
    ];

    /// `(start, end)` bond counts the rate is derived from.
    pub const fn bond_pair(self) -> (u8, u8) {
        match self {
            NamedTransition::Adatom => (0, 0),
            NamedTransition::Edge => (2, 2),
            NamedTransition::SurfaceFixed => (3, 3),
            NamedTransition::Surface { destination_bonds } => (3, destination_bonds),
        }
    }

    fn slot(self) -> Option<usize> {
        match self {
            NamedTransition::Adatom => Some(0),
            NamedTransition::Edge => Some(1),
            NamedTransition::SurfaceFixed => Some(2),
            NamedTransition::Surface { destination_bonds: d } if d <= 3 => Some(3 + d as usize),
            NamedTransition::Surface { .. } => None,
        }
    }
}

impl fmt::Display for NamedTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamedTransition::Adatom => f.write_str("adatom"),
            NamedTransition::Edge => f.write_str("edge"),
            NamedTransition::SurfaceFixed => f.write_str("surface"),
            NamedTransition::Surface { destination_bonds } => {
                write!(f, "surface→{destination_bonds}")
            }
        }
    }
}

/// Per-transition rates; entries never configured stay absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NamedRates {
    rates: [Option<f64>; SLOTS],
}

impl NamedRates {
    /// No transitions configured.  Every lookup fails until
    /// [`with_rate`][Self::with_rate] fills it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fill every transition in [`NamedTransition::ALL`] from the physics.
    pub fn from_params(params: &PhysicalParams) -> KmcResult<Self> {
        params.validate()?;
        let mut named = Self::empty();
        for t in NamedTransition::ALL {
            let (start, end) = t.bond_pair();
            named = named.with_rate(t, transition_rate(params, start, end)?)?;
        }
        Ok(named)
    }

    /// Every transition runs at the same rate.
    pub fn uniform(rate: f64) -> KmcResult<Self> {
        NamedTransition::ALL
            .into_iter()
            .try_fold(Self::empty(), |named, t| named.with_rate(t, rate))
    }

    /// Set (or override) the rate of one transition.
    pub fn with_rate(mut self, transition: NamedTransition, rate: f64) -> KmcResult<Self> {
        if !(rate.is_finite() && rate >= 0.0) {
            return Err(KmcError::Config(format!(
                "rate for {transition} must be finite and non-negative, got {rate}"
            )));
        }
        let slot = transition
            .slot()
            .ok_or_else(|| KmcError::Config(format!("transition {transition} does not exist")))?;
        self.rates[slot] = Some(rate);
        Ok(self)
    }

    #[inline]
    pub fn rate(&self, transition: NamedTransition) -> KmcResult<f64> {
        transition
            .slot()
            .and_then(|slot| self.rates[slot])
            .ok_or_else(|| KmcError::UnconfiguredTransition(transition.to_string()))
    }

    pub fn is_configured(&self, transition: NamedTransition) -> bool {
        self.rate(transition).is_ok()
    }
}
