//! Domain Layer
//!
//! The core of dinopark - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Dinosaur, Security, Enclosure (with its admission rules)
//! - `value_objects/` - Immutable value types (Diet, EnclosureId)
//! - `services/` - Domain services (Hatchery)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **No logging** - Failures are returned to the caller, never reported here
//! 3. **Ports & Adapters** - All I/O and randomness go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
