//! Four-neighbour occupancy and bond counting.

use kmc_core::{Direction, Site};

use crate::{Lattice, Occupancy};

/// Occupancy of the four axis-aligned neighbours of one site.
///
/// Columns wrap; a neighbour row outside the grid is `Empty`.  With
/// `width == 1` a site is its own left and right neighbour, and with
/// `width == 2` both horizontal neighbours are the same cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Neighbors {
    pub left:  Occupancy,
    pub up:    Occupancy,
    pub right: Occupancy,
    pub down:  Occupancy,
}

impl Neighbors {
    #[inline]
    pub fn get(&self, direction: Direction) -> Occupancy {
        match direction {
            Direction::Left  => self.left,
            Direction::Right => self.right,
            Direction::Up    => self.up,
            Direction::Down  => self.down,
        }
    }

    /// Bond count: number of occupied neighbours, `0..=4`.
    #[inline]
    pub fn count(&self) -> u8 {
        self.left.as_u8() + self.up.as_u8() + self.right.as_u8() + self.down.as_u8()
    }

    /// Directions whose neighbour is occupied, in preference order.
    pub fn occupied_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.get(d).is_occupied())
    }

    /// Directions whose neighbour is empty, in preference order.
    ///
    /// This includes directions that point outside the grid; callers that
    /// need a destination must still resolve it with [`Direction::step`].
    pub fn vacant_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|&d| !self.get(d).is_occupied())
    }
}

impl Lattice {
    /// Occupancy of the four neighbours of `site`.
    #[inline]
    pub fn neighbors(&self, site: Site) -> Neighbors {
        Neighbors {
            left:  self.get_toward(site, Direction::Left),
            up:    self.get_toward(site, Direction::Up),
            right: self.get_toward(site, Direction::Right),
            down:  self.get_toward(site, Direction::Down),
        }
    }

    /// Number of occupied neighbours of `site`.
    #[inline]
    pub fn bond_count(&self, site: Site) -> u8 {
        self.neighbors(site).count()
    }
}
