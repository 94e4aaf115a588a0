//! Test-only adapters that live inside the domain crate for convenience.
//!
//! These are intended purely for unit testing and local demos. Real adapters
//! (EPSG pseudo-factory, implementation-under-test bridges) live in separate
//! crates.

pub mod simple_factory;
