//! Run configuration.
//!
//! Typically constructed by the driver (or deserialised from JSON with the
//! `serde` feature) and handed to `kmc_sim::SimBuilder::from_config`.  All
//! values are validated once at build time; nothing is clamped.

use crate::{Dims, KmcError, KmcResult};

/// Boltzmann constant in eV/K.
pub const BOLTZMANN_EV_PER_K: f64 = 8.617333262145e-5;

// ── PhysicalParams ────────────────────────────────────────────────────────────

/// Inputs to the site-energy → activation-energy → Arrhenius rate chain.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicalParams {
    /// Energy per nearest-neighbour bond, eV.  200 kJ/mol ≈ 2.07 eV.
    pub bond_energy: f64,

    /// Baseline activation energy added to every transition, eV.
    pub e0: f64,

    /// Asymmetry between uphill and downhill transitions.
    pub alpha: f64,

    /// Absolute temperature, K.  Must be positive.
    pub temperature: f64,

    /// Attempt frequency `f` in the Arrhenius prefactor, 1/s.  ~1e13 for metals.
    pub attempt_frequency: f64,
}

impl Default for PhysicalParams {
    fn default() -> Self {
        Self {
            bond_energy:       2.07,
            e0:                0.1,
            alpha:             0.1,
            temperature:       300.0,
            attempt_frequency: 1e13,
        }
    }
}

impl PhysicalParams {
    /// Thermal energy `k_B * T` in eV.
    #[inline]
    pub fn thermal_energy(&self) -> f64 {
        BOLTZMANN_EV_PER_K * self.temperature
    }

    pub fn validate(&self) -> KmcResult<()> {
        if !(self.temperature.is_finite() && self.temperature > 0.0) {
            return Err(KmcError::Config(format!(
                "temperature must be positive and finite, got {}",
                self.temperature
            )));
        }
        if !(self.attempt_frequency.is_finite() && self.attempt_frequency >= 0.0) {
            return Err(KmcError::Config(format!(
                "attempt frequency must be non-negative and finite, got {}",
                self.attempt_frequency
            )));
        }
        for (name, value) in [
            ("bond energy", self.bond_energy),
            ("e0", self.e0),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() {
                return Err(KmcError::Config(format!("{name} must be finite, got {value}")));
            }
        }
        Ok(())
    }
}

// ── PolicyKind ────────────────────────────────────────────────────────────────

/// Which event-enumeration policy the engine runs.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PolicyKind {
    /// Scan vacancies; rate from the (start, end) bond-count table.
    #[default]
    Vacancy,
    /// Scan atoms; fixed rate per mobility class.
    AtomFixed,
    /// Scan atoms; surface hops refined by destination bond count.
    AtomRefined,
}

impl PolicyKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Vacancy     => "vacancy",
            PolicyKind::AtomFixed   => "atom_fixed",
            PolicyKind::AtomRefined => "atom_refined",
        }
    }
}

impl std::str::FromStr for PolicyKind {
    type Err = KmcError;

    fn from_str(s: &str) -> KmcResult<Self> {
        match s {
            "vacancy"      => Ok(PolicyKind::Vacancy),
            "atom_fixed"   => Ok(PolicyKind::AtomFixed),
            "atom_refined" => Ok(PolicyKind::AtomRefined),
            other => Err(KmcError::Config(format!("unknown policy '{other}'"))),
        }
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Stop conditions and observer cadence for `Sim::run`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Maximum accepted steps.
    pub max_steps: u64,

    /// Stop once elapsed simulated time reaches this many seconds.
    pub max_time: Option<f64>,

    /// Call `SimObserver::on_snapshot` every N steps.  0 disables snapshots.
    pub output_interval_steps: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_steps:             10_000,
            max_time:              None,
            output_interval_steps: 0,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> KmcResult<()> {
        if let Some(t) = self.max_time {
            if !(t.is_finite() && t > 0.0) {
                return Err(KmcError::Config(format!(
                    "max_time must be positive and finite, got {t}"
                )));
            }
        }
        Ok(())
    }
}

// ── KmcConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KmcConfig {
    /// Lattice dimensions.  The initial lattice is a fully occupied slab.
    pub dims: Dims,

    pub physics: PhysicalParams,

    pub policy: PolicyKind,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    pub run: RunConfig,
}

impl Default for KmcConfig {
    fn default() -> Self {
        Self {
            dims:    Dims::new(100, 10),
            physics: PhysicalParams::default(),
            policy:  PolicyKind::default(),
            seed:    42,
            run:     RunConfig::default(),
        }
    }
}

impl KmcConfig {
    pub fn validate(&self) -> KmcResult<()> {
        self.dims.validate()?;
        self.physics.validate()?;
        self.run.validate()
    }
}
