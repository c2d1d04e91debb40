//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::EnclosureBuilderService;
use crate::config::Config;
use crate::domain::ports::EntityManager;
use crate::domain::services::Hatchery;
use crate::infrastructure::{InMemoryEntityManager, ThreadRandom, TomlEnclosureStore};

/// Builder writing to the TOML store
pub type StoreBuilder = EnclosureBuilderService<Hatchery, TomlEnclosureStore, ThreadRandom>;

/// Builder that never touches the disk
pub type DryRunBuilder = EnclosureBuilderService<Hatchery, InMemoryEntityManager, ThreadRandom>;

/// Open the store at `store_override`, or at the configured path
pub fn create_store(config: &Config, store_override: Option<&Path>) -> TomlEnclosureStore {
    let path = store_override.unwrap_or(config.storage.path.as_path());
    TomlEnclosureStore::with_path(path)
}

/// Create a builder around any entity manager, configured from `config`
pub fn create_builder_with<EM: EntityManager>(
    config: &Config,
    entity_manager: EM,
) -> EnclosureBuilderService<Hatchery, EM, ThreadRandom> {
    EnclosureBuilderService::new(Hatchery::new(), entity_manager, ThreadRandom::new())
        .with_config(&config.builder)
}

/// Create a builder persisting into the TOML store
pub fn create_builder(config: &Config, store_override: Option<&Path>) -> StoreBuilder {
    create_builder_with(config, create_store(config, store_override))
}

/// Create a builder persisting into memory only
pub fn create_dry_run_builder(config: &Config) -> DryRunBuilder {
    create_builder_with(config, InMemoryEntityManager::new())
}
