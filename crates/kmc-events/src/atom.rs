//! Atom-driven enumeration with named mobility classes.

use kmc_core::{KmcResult, PhysicalParams, Site};
use kmc_lattice::Lattice;
use kmc_rates::{NamedRates, NamedTransition};

use crate::{Event, EventList, EventPolicy};

/// How three-bond surface hops are rated.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum SurfaceRefinement {
    /// One rate for every surface hop (`NamedTransition::SurfaceFixed`).
    #[default]
    Fixed,
    /// Rate depends on the destination's bond count
    /// (`NamedTransition::Surface { destination_bonds }`).
    ByDestination,
}

/// Scan every atom and classify it by bond count.
///
/// | Bonds | Class    | Candidates                                        |
/// |-------|----------|---------------------------------------------------|
/// | 0     | adatom   | one per in-grid neighbour                         |
/// | 1     | —        | immobile                                          |
/// | 2     | edge     | first vacant in-grid neighbour (left, right, up, down) |
/// | 3     | surface  | the single open neighbour, if in-grid             |
/// | 4     | bulk     | immobile                                          |
///
/// Only the surface class can be refined by destination bond count; edge
/// hops always use one rate.
#[derive(Clone, Debug)]
pub struct AtomDriven {
    pub rates:   NamedRates,
    pub surface: SurfaceRefinement,
}

impl AtomDriven {
    pub fn new(rates: NamedRates, surface: SurfaceRefinement) -> Self {
        Self { rates, surface }
    }

    pub fn from_params(params: &PhysicalParams, surface: SurfaceRefinement) -> KmcResult<Self> {
        Ok(Self::new(NamedRates::from_params(params)?, surface))
    }

    fn surface_transition(&self, lattice: &Lattice, destination: Site) -> NamedTransition {
        match self.surface {
            SurfaceRefinement::Fixed => NamedTransition::SurfaceFixed,
            SurfaceRefinement::ByDestination => NamedTransition::Surface {
                // The source atom neighbours the destination; exclude it.
                destination_bonds: lattice.bond_count(destination).saturating_sub(1),
            },
        }
    }
}

impl EventPolicy for AtomDriven {
    fn name(&self) -> &'static str {
        match self.surface {
            SurfaceRefinement::Fixed => "atom_fixed",
            SurfaceRefinement::ByDestination => "atom_refined",
        }
    }

    fn propose(&self, lattice: &Lattice, site: Site, out: &mut EventList) -> KmcResult<()> {
        if !lattice.is_occupied(site) {
            return Ok(());
        }
        let dims = lattice.dims();
        let neighbors = lattice.neighbors(site);

        // Vacant directions that lead to a real cell other than `site`.
        let mut open = neighbors
            .vacant_directions()
            .filter_map(|d| d.step(site, dims).filter(|&dest| dest != site).map(|dest| (d, dest)));

        match neighbors.count() {
            0 => {
                let rate = self.rates.rate(NamedTransition::Adatom)?;
                for (direction, _) in open {
                    out.push(Event { site, direction, rate });
                }
            }
            2 => {
                if let Some((direction, _)) = open.next() {
                    let rate = self.rates.rate(NamedTransition::Edge)?;
                    out.push(Event { site, direction, rate });
                }
            }
            3 => {
                if let Some((direction, dest)) = open.next() {
                    let rate = self.rates.rate(self.surface_transition(lattice, dest))?;
                    out.push(Event { site, direction, rate });
                }
            }
            _ => {}
        }
        Ok(())
    }
}
