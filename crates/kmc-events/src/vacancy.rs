//! Vacancy-driven enumeration with a count-indexed rate table.

use kmc_core::{KmcResult, PhysicalParams, Site};
use kmc_lattice::Lattice;
use kmc_rates::RateTable;

use crate::{Event, EventList, EventPolicy};

/// Scan every empty cell; each occupied neighbour may hop into it.
///
/// For a vacancy with `k > 0` occupied neighbours, the neighbour atoms are
/// visited in the order left, right, up, down.  Each contributes one event
/// whose rate is `rates[b][k - 1]`, where `b` is the atom's current bond
/// count and `k - 1` is the bond count it would have after the hop (the
/// vacancy's neighbours minus the moving atom itself).
///
/// An atom adjacent to several vacancies appears once per vacancy.
#[derive(Clone, Debug)]
pub struct VacancyDriven {
    pub rates: RateTable,
}

impl VacancyDriven {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    pub fn from_params(params: &PhysicalParams) -> KmcResult<Self> {
        Ok(Self::new(RateTable::from_params(params)?))
    }
}

impl EventPolicy for VacancyDriven {
    fn name(&self) -> &'static str {
        "vacancy"
    }

    fn propose(&self, lattice: &Lattice, site: Site, out: &mut EventList) -> KmcResult<()> {
        if lattice.is_occupied(site) {
            return Ok(());
        }
        let neighbors = lattice.neighbors(site);
        let k = neighbors.count();
        if k == 0 {
            return Ok(());
        }

        let dims = lattice.dims();
        for toward_atom in neighbors.occupied_directions() {
            // Occupied neighbours are always inside the grid.
            let Some(atom) = toward_atom.step(site, dims) else {
                continue;
            };
            let rate = self.rates.rate(lattice.bond_count(atom), k - 1)?;
            out.push(Event {
                site:      atom,
                direction: toward_atom.opposite(),
                rate,
            });
        }
        Ok(())
    }
}
