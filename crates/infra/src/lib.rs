//! `catalog-infra` — storage implementations of the repository contract.
//!
//! Currently the in-memory backend (tests/dev and the reference wiring).
//! A persistent backend plugs in by implementing the same contract.

pub mod in_memory;


pub use in_memory::{CategoryInMemoryRepository, InMemoryRepository};
