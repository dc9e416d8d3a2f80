//! `kmc-core` — foundational types for the `surface_kmc` workspace.
//!
//! This crate is a dependency of every other `kmc-*` crate.  It has no
//! `kmc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`site`]    | `Site`, `Dims`, `Direction`                               |
//! | [`time`]    | `SimClock` (elapsed physical time + step counter)         |
//! | [`rng`]     | `SimRng` (single seeded stream for the whole run)         |
//! | [`config`]  | `PhysicalParams`, `RunConfig`, `PolicyKind`, `KmcConfig`  |
//! | [`error`]   | `KmcError`, `KmcResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and coordinate    |
//! |         | types so drivers can load runs from JSON/TOML.             |

pub mod config;
pub mod error;
pub mod rng;
pub mod site;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BOLTZMANN_EV_PER_K, KmcConfig, PhysicalParams, PolicyKind, RunConfig};
pub use error::{KmcError, KmcResult};
pub use rng::SimRng;
pub use site::{Dims, Direction, Site};
pub use time::SimClock;
