//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `EnclosureBuilderService` - Secures, persists and populates a new enclosure

pub mod build_enclosure;

pub use build_enclosure::EnclosureBuilderService;
