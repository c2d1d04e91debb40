//! Persistence Implementations
//!
//! Concrete implementations of the `EntityManager` port.

mod memory;
mod toml_store;

pub use memory::InMemoryEntityManager;
pub use toml_store::TomlEnclosureStore;
