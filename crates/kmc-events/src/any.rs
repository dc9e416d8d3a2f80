//! `AnyPolicy` — pick a policy from configuration at runtime.

use kmc_core::{KmcResult, PhysicalParams, PolicyKind, Site};
use kmc_lattice::Lattice;

use crate::{AtomDriven, EventList, EventPolicy, SurfaceRefinement, VacancyDriven};

/// One of the built-in policies, chosen by [`PolicyKind`].
///
/// Drivers that know their policy at compile time can use the concrete
/// type directly; `AnyPolicy` exists for config-driven runs.
#[derive(Clone, Debug)]
pub enum AnyPolicy {
    Vacancy(VacancyDriven),
    Atom(AtomDriven),
}

impl AnyPolicy {
    /// Build the policy named by `kind`, computing its rate model from `params`.
    pub fn from_kind(kind: PolicyKind, params: &PhysicalParams) -> KmcResult<Self> {
        Ok(match kind {
            PolicyKind::Vacancy => AnyPolicy::Vacancy(VacancyDriven::from_params(params)?),
            PolicyKind::AtomFixed => {
                AnyPolicy::Atom(AtomDriven::from_params(params, SurfaceRefinement::Fixed)?)
            }
            PolicyKind::AtomRefined => {
                AnyPolicy::Atom(AtomDriven::from_params(params, SurfaceRefinement::ByDestination)?)
            }
        })
    }
}

impl From<VacancyDriven> for AnyPolicy {
    fn from(p: VacancyDriven) -> Self {
        AnyPolicy::Vacancy(p)
    }
}

impl From<AtomDriven> for AnyPolicy {
    fn from(p: AtomDriven) -> Self {
        AnyPolicy::Atom(p)
    }
}

impl EventPolicy for AnyPolicy {
    fn name(&self) -> &'static str {
        match self {
            AnyPolicy::Vacancy(p) => p.name(),
            AnyPolicy::Atom(p) => p.name(),
        }
    }

    #[inline]
    fn propose(&self, lattice: &Lattice, site: Site, out: &mut EventList) -> KmcResult<()> {
        match self {
            AnyPolicy::Vacancy(p) => p.propose(lattice, site, out),
            AnyPolicy::Atom(p) => p.propose(lattice, site, out),
        }
    }
}
