//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod diet;
mod enclosure_id;

pub use diet::Diet;
pub use enclosure_id::EnclosureId;
