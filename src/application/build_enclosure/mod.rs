//! Build Enclosure Use Case
//!
//! Orchestrates the assembly of a populated, secured enclosure.
//!
//! This module handles:
//! - Attaching randomly named, active security devices
//! - Handing the secured enclosure to the entity manager (persist + flush)
//! - Growing dinosaurs from the factory and admitting them one by one

mod use_case;

pub use use_case::EnclosureBuilderService;
