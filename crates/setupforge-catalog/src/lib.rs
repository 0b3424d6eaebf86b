//! SetupForge car and track catalog.
//!
//! The inventory ships embedded as YAML and is parsed once per process.
//! Ids are 1-based positions in declaration order.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod car;
pub mod catalog;
pub mod track;

pub use car::Car;
pub use catalog::{CARS_YAML, Catalog, TRACKS_YAML};
pub use track::Track;
