//! Dinopark - enclosure builder and admission rules for a dinosaur park
//!
//! Dinosaurs live in enclosures. An enclosure only admits a dinosaur while at
//! least one of its securities is active, and never mixes carnivores with
//! herbivores. `EnclosureBuilderService` assembles secured, populated
//! enclosures and hands them to an `EntityManager` for persistence.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::EnclosureBuilderService;
pub use config::Config;
pub use domain::entities::{AdmissionError, Dinosaur, Enclosure, Security};
pub use domain::ports::{DinosaurFactory, EntityManager, PersistError, RandomSource};
pub use domain::services::Hatchery;
pub use domain::value_objects::{Diet, EnclosureId};
pub use error::{DinoparkError, DinoparkResult};
