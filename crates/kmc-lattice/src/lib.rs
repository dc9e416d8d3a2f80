//! `kmc-lattice` — the lattice state and neighbour counter.
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`lattice`]    | `Occupancy`, `Lattice` (grid, atom count, moves)      |
//! | [`neighbors`]  | `Neighbors` — four-neighbour occupancy of one site    |
//!
//! The grid is `width` periodic columns × `height + 2` rows.  Rows `0` and
//! `height + 1` are guard rows that start empty; atoms may hop into them
//! but never past them.

pub mod lattice;
pub mod neighbors;


pub use lattice::{Lattice, Occupancy};
pub use neighbors::Neighbors;
