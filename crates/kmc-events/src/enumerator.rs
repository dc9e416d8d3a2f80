//! `Enumerator<P>` — the lattice scan.

use kmc_core::KmcResult;
use kmc_lattice::Lattice;

use crate::{EventList, EventPolicy};

/// Scans every site in row-major order and collects the policy's candidates.
///
/// The scan order is fixed, so for a given lattice the candidate list (and
/// therefore which event a given random draw selects) is reproducible.
///
/// # Type parameter
///
/// `P` is the eligibility policy.  Use a concrete policy for static
/// dispatch or [`AnyPolicy`][crate::AnyPolicy] when it comes from config.
#[derive(Clone, Debug)]
pub struct Enumerator<P: EventPolicy> {
    policy: P,
}

impl<P: EventPolicy> Enumerator<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Replace the contents of `out` with every candidate on `lattice`.
    ///
    /// `out` is empty afterwards if no atom is mobile.
    pub fn enumerate_into(&self, lattice: &Lattice, out: &mut EventList) -> KmcResult<()> {
        out.clear();
        for site in lattice.sites() {
            self.policy.propose(lattice, site, out)?;
        }
        Ok(())
    }

    /// Allocate a fresh list of every candidate on `lattice`.
    pub fn enumerate(&self, lattice: &Lattice) -> KmcResult<EventList> {
        let mut out = EventList::new();
        self.enumerate_into(lattice, &mut out)?;
        Ok(out)
    }
}
