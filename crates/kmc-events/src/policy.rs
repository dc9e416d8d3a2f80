//! The `EventPolicy` trait — the extension point for eligibility rules.

use kmc_core::{KmcResult, Site};
use kmc_lattice::Lattice;

use crate::EventList;

/// Turns one site of the lattice into zero or more candidate moves.
///
/// The [`Enumerator`][crate::Enumerator] calls `propose` for every site in
/// row-major order; a policy decides which sites it cares about (vacancies,
/// atoms, or both) and pushes candidates onto `out`.  Policies own their
/// rate model and are immutable for the lifetime of a run.
///
/// # Example
///
/// ```rust,ignore
/// struct OnlyUp { rate: f64 }
///
/// impl EventPolicy for OnlyUp {
///     fn name(&self) -> &'static str { "only_up" }
///
///     fn propose(&self, lattice: &Lattice, site: Site, out: &mut EventList) -> KmcResult<()> {
///         if lattice.is_occupied(site) && !lattice.get_toward(site, Direction::Up).is_occupied() {
///             out.push(Event { site, direction: Direction::Up, rate: self.rate });
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait EventPolicy {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Push every candidate contributed by `site`.
    ///
    /// # Errors
    /// Propagates rate-model lookups that have no configured entry.
    fn propose(&self, lattice: &Lattice, site: Site, out: &mut EventList) -> KmcResult<()>;
}
