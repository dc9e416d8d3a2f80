//! `kmc-events` — candidate-event enumeration.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`event`]       | `Event`, `EventList` (parallel site/direction/rate arrays) |
//! | [`policy`]      | `EventPolicy` trait — per-site candidate generation       |
//! | [`vacancy`]     | `VacancyDriven` — scan vacancies, (start, end) rate table |
//! | [`atom`]        | `AtomDriven` — scan atoms, named mobility classes         |
//! | [`any`]         | `AnyPolicy` — runtime selection from `PolicyKind`         |
//! | [`enumerator`]  | `Enumerator<P>` — row-major scan driving a policy         |
//!
//! # Design notes
//!
//! The three eligibility rules (vacancy-driven, atom-driven with fixed
//! surface rate, atom-driven with destination-refined surface rate) are
//! configurations of one engine: each is an [`EventPolicy`] that turns one
//! site and its neighbour geometry into zero or more candidates.  The
//! [`Enumerator`] owns the scan order, so every policy is reproducible for
//! a given lattice state.

pub mod any;
pub mod atom;
pub mod enumerator;
pub mod event;
pub mod policy;
pub mod vacancy;


pub use any::AnyPolicy;
pub use atom::{AtomDriven, SurfaceRefinement};
pub use enumerator::Enumerator;
pub use event::{Event, EventList};
pub use policy::EventPolicy;
pub use vacancy::VacancyDriven;
