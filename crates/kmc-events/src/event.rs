//! Candidate events, stored Structure-of-Arrays.

use kmc_core::{Direction, Site};

/// One candidate move: the atom at `site` hops one cell in `direction`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Event {
    pub site:      Site,
    pub direction: Direction,
    /// Transition rate, 1/s.
    pub rate:      f64,
}

/// All candidates of one enumeration pass.
///
/// Three parallel arrays of identical length.  The stepper keeps one list
/// alive across steps and [`clear`][Self::clear]s it before each pass, so
/// the allocation is reused.
#[derive(Clone, Debug, Default)]
pub struct EventList {
    sites:      Vec<Site>,
    directions: Vec<Direction>,
    rates:      Vec<f64>,
}

impl EventList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, event: Event) {
        self.sites.push(event.site);
        self.directions.push(event.direction);
        self.rates.push(event.rate);
    }

    pub fn clear(&mut self) {
        self.sites.clear();
        self.directions.clear();
        self.rates.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// The `i`-th candidate, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<Event> {
        Some(Event {
            site:      *self.sites.get(i)?,
            direction: *self.directions.get(i)?,
            rate:      *self.rates.get(i)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Event> + '_ {
        self.sites
            .iter()
            .zip(&self.directions)
            .zip(&self.rates)
            .map(|((&site, &direction), &rate)| Event { site, direction, rate })
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Sum of all candidate rates, accumulated in list order.
    pub fn total_rate(&self) -> f64 {
        self.rates.iter().sum()
    }
}
