//! Lattice coordinates and hop directions.
//!
//! # Axis conventions
//!
//! - **Rows** run from `0` to `height + 1`.  Rows `0` and `height + 1` are the
//!   guard rows (vacuum above and below the slab).  The row axis does not
//!   wrap: stepping past either guard row leaves the grid.
//! - **Columns** run from `0` to `width - 1` and are periodic.
//!
//! `Up` decreases the row index, `Down` increases it.

use std::fmt;

use crate::{KmcError, KmcResult};

// ── Site ──────────────────────────────────────────────────────────────────────

/// A cell address on the lattice.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

impl Site {
    #[inline(always)]
    pub const fn new(row: usize, col: usize) -> Self {
        Site { row, col }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ── Dims ──────────────────────────────────────────────────────────────────────

/// Lattice dimensions: `width` periodic columns × `height` interior rows.
///
/// The stored grid has `height + 2` rows; see [`Dims::rows`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub width:  usize,
    pub height: usize,
}

impl Dims {
    pub const fn new(width: usize, height: usize) -> Self {
        Dims { width, height }
    }

    /// Total stored rows, guard rows included.
    #[inline(always)]
    pub const fn rows(&self) -> usize {
        self.height + 2
    }

    /// Total stored cells.
    #[inline(always)]
    pub const fn cell_count(&self) -> usize {
        self.width * self.rows()
    }

    /// Index of the bottom guard row.
    #[inline(always)]
    pub const fn bottom_guard(&self) -> usize {
        self.height + 1
    }

    #[inline(always)]
    pub const fn is_guard_row(&self, row: usize) -> bool {
        row == 0 || row == self.height + 1
    }

    #[inline(always)]
    pub const fn contains(&self, site: Site) -> bool {
        site.row < self.rows() && site.col < self.width
    }

    /// Row-major cell index.  Caller guarantees `contains(site)`.
    #[inline(always)]
    pub const fn index(&self, site: Site) -> usize {
        site.row * self.width + site.col
    }

    pub fn validate(&self) -> KmcResult<()> {
        if self.width == 0 {
            return Err(KmcError::Config("lattice width must be at least 1".into()));
        }
        if self.height == 0 {
            return Err(KmcError::Config("lattice height must be at least 1".into()));
        }
        Ok(())
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// An axis-aligned hop direction.
///
/// Each variant knows its axis and sign; [`Direction::step`] is the single
/// coordinate transform shared by event enumeration and move application.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions in preference order.  Wherever a single direction must
    /// be picked among several candidates, the first match in this order wins.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// The neighbouring site one hop from `site` in this direction.
    ///
    /// Columns wrap modulo `dims.width`.  Returns `None` when the row would
    /// leave `[0, height + 1]`; there is nothing outside the grid.
    #[inline]
    pub fn step(self, site: Site, dims: Dims) -> Option<Site> {
        let w = dims.width;
        match self {
            Direction::Left  => Some(Site::new(site.row, (site.col + w - 1) % w)),
            Direction::Right => Some(Site::new(site.row, (site.col + 1) % w)),
            Direction::Up    => site.row.checked_sub(1).map(|r| Site::new(r, site.col)),
            Direction::Down  => {
                let r = site.row + 1;
                (r < dims.rows()).then(|| Site::new(r, site.col))
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Left  => "left",
            Direction::Right => "right",
            Direction::Up    => "up",
            Direction::Down  => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
