//! `Lattice` — row-major occupancy grid.

use std::fmt;

use kmc_core::{Dims, Direction, KmcError, KmcResult, Site};

// ── Occupancy ─────────────────────────────────────────────────────────────────

/// State of one lattice cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupancy {
    /// Vacancy (inside the slab) or vacuum (guard rows).
    #[default]
    Empty,
    /// An atom.
    Occupied,
}

impl Occupancy {
    #[inline(always)]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Occupancy::Occupied)
    }

    /// `1` for an atom, `0` otherwise; the unit of bond counting.
    #[inline(always)]
    pub const fn as_u8(self) -> u8 {
        self.is_occupied() as u8
    }

    /// Character used by [`Lattice::from_rows`] and the `Display` impl.
    pub const fn symbol(self) -> char {
        match self {
            Occupancy::Occupied => '#',
            Occupancy::Empty    => '.',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '#' | 'o' | '●' => Some(Occupancy::Occupied),
            '.' | ' '       => Some(Occupancy::Empty),
            _ => None,
        }
    }
}

// ── Lattice ───────────────────────────────────────────────────────────────────

/// A finite slab on a 2D square lattice.
///
/// Cells are stored row-major in one `Vec`; the atom count is maintained
/// incrementally so occupancy conservation can be checked per step in O(1).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Lattice {
    dims:  Dims,
    cells: Vec<Occupancy>,
    atoms: usize,
}

impl Lattice {
    /// A lattice with every cell empty.
    pub fn empty(dims: Dims) -> KmcResult<Self> {
        dims.validate()?;
        Ok(Self {
            dims,
            cells: vec![Occupancy::Empty; dims.cell_count()],
            atoms: 0,
        })
    }

    /// The initial state of a run: interior rows occupied, guard rows empty.
    pub fn slab(dims: Dims) -> KmcResult<Self> {
        let mut lattice = Self::empty(dims)?;
        let w = dims.width;
        lattice.cells[w..w * (dims.height + 1)].fill(Occupancy::Occupied);
        lattice.atoms = w * dims.height;
        Ok(lattice)
    }

    /// Parse a lattice from text rows, guard rows included.
    ///
    /// `#`, `o` or `●` is an atom; `.` or a space is empty.  At least three
    /// rows are required (two guards plus one interior row) and every row
    /// must have the same non-zero width.
    ///
    /// ```rust
    /// use kmc_lattice::Lattice;
    ///
    /// let lattice = Lattice::from_rows(&["...", "###", "#.#", "..."]).unwrap();
    /// assert_eq!(lattice.height(), 2);
    /// assert_eq!(lattice.atom_count(), 5);
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> KmcResult<Self> {
        if rows.len() < 3 {
            return Err(KmcError::Config(format!(
                "need at least 3 rows (two guard rows + one interior row), got {}",
                rows.len()
            )));
        }
        let width = rows[0].as_ref().chars().count();
        let dims = Dims::new(width, rows.len() - 2);
        let mut lattice = Self::empty(dims)?;

        for (r, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            if text.chars().count() != width {
                return Err(KmcError::Config(format!(
                    "row {r} has width {}, expected {width}",
                    text.chars().count()
                )));
            }
            for (c, ch) in text.chars().enumerate() {
                let occ = Occupancy::from_symbol(ch).ok_or_else(|| {
                    KmcError::Config(format!("unknown cell symbol {ch:?} at row {r}, column {c}"))
                })?;
                lattice.set(Site::new(r, c), occ)?;
            }
        }
        Ok(lattice)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline(always)]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.dims.width
    }

    /// Interior rows (guard rows excluded).
    #[inline(always)]
    pub fn height(&self) -> usize {
        self.dims.height
    }

    /// Stored rows (guard rows included).
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.dims.rows()
    }

    /// Occupancy at `site`.
    ///
    /// # Panics
    /// Panics if `site` is outside the grid; use [`try_get`][Self::try_get]
    /// for unchecked input.
    #[inline]
    pub fn get(&self, site: Site) -> Occupancy {
        assert!(self.dims.contains(site), "site {site} outside lattice");
        self.cells[self.dims.index(site)]
    }

    #[inline]
    pub fn try_get(&self, site: Site) -> Option<Occupancy> {
        self.dims
            .contains(site)
            .then(|| self.cells[self.dims.index(site)])
    }

    #[inline]
    pub fn is_occupied(&self, site: Site) -> bool {
        self.get(site).is_occupied()
    }

    /// Occupancy one hop from `site`; outside the grid reads as `Empty`.
    #[inline]
    pub fn get_toward(&self, site: Site, direction: Direction) -> Occupancy {
        direction
            .step(site, self.dims)
            .map_or(Occupancy::Empty, |n| self.cells[self.dims.index(n)])
    }

    /// One full row, guard rows included.
    pub fn row(&self, row: usize) -> &[Occupancy] {
        let w = self.dims.width;
        &self.cells[row * w..(row + 1) * w]
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Occupancy] {
        &self.cells
    }

    /// Number of occupied cells.
    #[inline(always)]
    pub fn atom_count(&self) -> usize {
        self.atoms
    }

    /// Atoms currently sitting in the two guard rows.
    pub fn guard_atom_count(&self) -> usize {
        let bottom = self.dims.bottom_guard();
        self.row(0)
            .iter()
            .chain(self.row(bottom))
            .filter(|c| c.is_occupied())
            .count()
    }

    /// Every site in row-major order, the fixed scan order of enumeration.
    pub fn sites(&self) -> impl Iterator<Item = Site> + use<> {
        let Dims { width, .. } = self.dims;
        let rows = self.dims.rows();
        (0..rows).flat_map(move |r| (0..width).map(move |c| Site::new(r, c)))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Overwrite one cell, keeping the atom count in sync.
    pub fn set(&mut self, site: Site, occupancy: Occupancy) -> KmcResult<()> {
        if !self.dims.contains(site) {
            return Err(KmcError::SiteOutOfBounds(site));
        }
        let cell = &mut self.cells[self.dims.index(site)];
        match (cell.is_occupied(), occupancy.is_occupied()) {
            (false, true) => self.atoms += 1,
            (true, false) => self.atoms -= 1,
            _ => {}
        }
        *cell = occupancy;
        Ok(())
    }

    /// Move the atom at `source` one hop in `direction`; returns the destination.
    ///
    /// Exactly two cells change.  A horizontal hop that wraps onto its own
    /// column (`width == 1`) is a no-op displacement.
    ///
    /// # Errors
    /// `InvariantViolation` if `source` is vacant, the hop leaves the grid,
    /// or the destination is already occupied.
    pub fn apply_move(&mut self, source: Site, direction: Direction) -> KmcResult<Site> {
        if !self.dims.contains(source) {
            return Err(KmcError::SiteOutOfBounds(source));
        }
        if !self.is_occupied(source) {
            return Err(KmcError::InvariantViolation(format!(
                "move {direction} from vacant site {source}"
            )));
        }
        let destination = direction.step(source, self.dims).ok_or_else(|| {
            KmcError::InvariantViolation(format!(
                "move {direction} from {source} leaves the lattice"
            ))
        })?;
        if destination == source {
            return Ok(destination);
        }
        if self.is_occupied(destination) {
            return Err(KmcError::InvariantViolation(format!(
                "move {direction} from {source} onto occupied site {destination}"
            )));
        }

        let src = self.dims.index(source);
        let dst = self.dims.index(destination);
        self.cells[src] = Occupancy::Empty;
        self.cells[dst] = Occupancy::Occupied;
        Ok(destination)
    }
}

impl fmt::Display for Lattice {
    /// One line per stored row using the [`Occupancy::symbol`] alphabet.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            for cell in self.row(r) {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
