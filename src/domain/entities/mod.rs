//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Dinosaur` - genus, diet and a mutable length
//! - `Security` - a safety device guarding an enclosure
//! - `Enclosure` - dinosaurs behind securities, with admission rules

mod dinosaur;
mod enclosure;
mod security;

pub use dinosaur::{Dinosaur, UNKNOWN_GENUS};
pub use enclosure::{AdmissionError, Enclosure};
pub use security::{Security, BASIC_SECURITY_NAME};
