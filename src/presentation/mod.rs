//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Enclosure rendering and NDJSON emission
//!
//! ## Usage
//!
//! ```ignore
//! use dinopark::presentation::factory;
//!
//! // Builder wired to the TOML store named by the configuration
//! let builder = factory::create_builder(&config, None);
//! let enclosure = builder.build_enclosure(2, 3)?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{create_builder, create_dry_run_builder};
pub use output::OutputFormat;
