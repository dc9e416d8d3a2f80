//! Fluent builder for constructing a [`Sim`].

use log::debug;

use kmc_core::{Dims, KmcConfig, KmcError, KmcResult, RunConfig, SimClock, SimRng};
use kmc_events::{AnyPolicy, Enumerator, EventList, EventPolicy};
use kmc_lattice::Lattice;

use crate::Sim;

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - `P: EventPolicy`: the eligibility policy with its rate model
/// - a seed for the single simulation RNG
/// - either [`dimensions`][Self::dimensions] (fresh slab) or
///   [`lattice`][Self::lattice] (caller-supplied initial state)
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                |
/// |-------------------|------------------------|
/// | `.run_config(r)`  | `RunConfig::default()` |
///
/// # Example
///
/// ```rust,ignore
/// let policy = VacancyDriven::from_params(&PhysicalParams::default())?;
/// let mut sim = SimBuilder::new(policy, 42)
///     .dimensions(Dims::new(100, 10))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: EventPolicy> {
    policy:  P,
    seed:    u64,
    dims:    Option<Dims>,
    lattice: Option<Lattice>,
    run:     RunConfig,
}

impl SimBuilder<AnyPolicy> {
    /// Validate `config` and prepare a builder for a fresh slab run.
    pub fn from_config(config: &KmcConfig) -> KmcResult<Self> {
        config.validate()?;
        let policy = AnyPolicy::from_kind(config.policy, &config.physics)?;
        Ok(Self::new(policy, config.seed)
            .dimensions(config.dims)
            .run_config(config.run.clone()))
    }
}

impl<P: EventPolicy> SimBuilder<P> {
    pub fn new(policy: P, seed: u64) -> Self {
        Self {
            policy,
            seed,
            dims:    None,
            lattice: None,
            run:     RunConfig::default(),
        }
    }

    /// Start from a fully occupied slab of these dimensions.
    pub fn dimensions(mut self, dims: Dims) -> Self {
        self.dims = Some(dims);
        self
    }

    /// Start from an explicit lattice.  Its guard rows must be empty.
    ///
    /// If [`dimensions`][Self::dimensions] is also given, the two must agree.
    pub fn lattice(mut self, lattice: Lattice) -> Self {
        self.lattice = Some(lattice);
        self
    }

    pub fn run_config(mut self, run: RunConfig) -> Self {
        self.run = run;
        self
    }

    /// Validate inputs and return a ready-to-step [`Sim`].
    pub fn build(self) -> KmcResult<Sim<P>> {
        self.run.validate()?;

        let lattice = match (self.lattice, self.dims) {
            (Some(lattice), Some(dims)) if lattice.dims() != dims => {
                return Err(KmcError::Config(format!(
                    "lattice is {}×{} but dimensions say {}×{}",
                    lattice.width(), lattice.height(), dims.width, dims.height
                )));
            }
            (Some(lattice), _) => lattice,
            (None, Some(dims)) => Lattice::slab(dims)?,
            (None, None) => {
                return Err(KmcError::Config(
                    "either a lattice or lattice dimensions are required".into(),
                ));
            }
        };

        let guard_atoms = lattice.guard_atom_count();
        if guard_atoms > 0 {
            return Err(KmcError::Config(format!(
                "initial lattice has {guard_atoms} atom(s) in the guard rows"
            )));
        }

        debug!(
            "built sim: {}×{} lattice, {} atoms, policy {}, seed {}",
            lattice.width(),
            lattice.height(),
            lattice.atom_count(),
            self.policy.name(),
            self.seed,
        );

        Ok(Sim {
            atoms:      lattice.atom_count(),
            lattice,
            enumerator: Enumerator::new(self.policy),
            clock:      SimClock::new(),
            rng:        SimRng::new(self.seed),
            run:        self.run,
            events:     EventList::new(),
            cumulative: Vec::new(),
        })
    }
}
