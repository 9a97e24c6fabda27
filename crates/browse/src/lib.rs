//! Core state for a movie search front-end: a paginated search session and a
//! single-shot detail lookup, both driven against a pluggable movie service.
//!
//! The UI layer owns one `SearchSession` per active search and one
//! `DetailLookup` per detail view; it reads state snapshots after every
//! mutating call resolves and renders them however it likes.

mod detail;
pub mod mocks;
mod service;
mod session;

pub use detail::{DetailLookup, DetailRequest};
pub use service::{MovieService, OmdbService};
pub use session::{PageRequest, SearchSession, Status, TypeFilter};
