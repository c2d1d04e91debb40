//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod dinosaur_factory;
pub mod entity_manager;
pub mod random_source;

pub use dinosaur_factory::DinosaurFactory;
pub use entity_manager::{EntityManager, PersistError, PersistResult};
pub use random_source::RandomSource;
