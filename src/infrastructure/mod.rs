//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `persistence/` - EntityManager implementations (in-memory, TOML file)
//! - `random` - RandomSource backed by the thread RNG

pub mod persistence;
pub mod random;

// Re-export for convenience
pub use persistence::{InMemoryEntityManager, TomlEnclosureStore};
pub use random::ThreadRandom;
