//! Enclosure builder use case

use tracing::{debug, info};

use crate::config::{BuilderConfig, DEFAULT_BASE_LENGTH, DEFAULT_SECURITY_NAMES};
use crate::domain::entities::{Enclosure, Security};
use crate::domain::ports::{DinosaurFactory, EntityManager, RandomSource};
use crate::error::{DinoparkError, DinoparkResult};

/// Builds enclosures with a requested number of securities and dinosaurs
pub struct EnclosureBuilderService<F, EM, R>
where
    F: DinosaurFactory,
    EM: EntityManager,
    R: RandomSource,
{
    dinosaur_factory: F,
    entity_manager: EM,
    random: R,
    security_names: Vec<String>,
    base_length: i64,
}

impl<F, EM, R> EnclosureBuilderService<F, EM, R>
where
    F: DinosaurFactory,
    EM: EntityManager,
    R: RandomSource,
{
    /// Create a builder using the default security names and base length
    pub fn new(dinosaur_factory: F, entity_manager: EM, random: R) -> Self {
        Self {
            dinosaur_factory,
            entity_manager,
            random,
            security_names: DEFAULT_SECURITY_NAMES.iter().map(|s| s.to_string()).collect(),
            base_length: DEFAULT_BASE_LENGTH,
        }
    }

    /// Builder: replace the pool security names are drawn from.
    ///
    /// An empty list keeps the current pool.
    pub fn with_security_names(mut self, names: Vec<String>) -> Self {
        if !names.is_empty() {
            self.security_names = names;
        }
        self
    }

    /// Builder: length of the first grown dinosaur
    pub fn with_base_length(mut self, base_length: i64) -> Self {
        self.base_length = base_length;
        self
    }

    /// Builder: apply the `[builder]` configuration section
    pub fn with_config(self, config: &BuilderConfig) -> Self {
        self.with_security_names(config.security_names.clone())
            .with_base_length(config.base_length)
    }

    pub fn security_names(&self) -> &[String] {
        &self.security_names
    }

    pub fn entity_manager(&self) -> &EM {
        &self.entity_manager
    }

    /// Build an enclosure.
    ///
    /// Securities are attached and the enclosure is persisted and flushed
    /// before any dinosaur is added, so the persisted snapshot holds no
    /// dinosaurs. Dinosaur `i` is grown at `base_length + i` meters.
    pub fn build_enclosure(
        &self,
        num_securities: usize,
        num_dinosaurs: usize,
    ) -> DinoparkResult<Enclosure> {
        info!(num_securities, num_dinosaurs, "building enclosure");

        let mut enclosure = Enclosure::new();

        self.add_security_systems(num_securities, &mut enclosure)?;
        self.add_dinosaurs(num_dinosaurs, &mut enclosure)?;

        info!(
            enclosure = %enclosure.id(),
            securities = enclosure.securities().len(),
            dinosaurs = enclosure.dinosaurs().len(),
            "enclosure built"
        );

        Ok(enclosure)
    }

    fn add_security_systems(
        &self,
        num_securities: usize,
        enclosure: &mut Enclosure,
    ) -> DinoparkResult<()> {
        for _ in 0..num_securities {
            let index = self.random.pick_index(self.security_names.len());
            let name = &self.security_names[index];

            debug!(enclosure = %enclosure.id(), security = %name, "attaching security");
            enclosure.add_security(Security::new(name.as_str(), true, enclosure.id()));
        }

        self.entity_manager.persist(enclosure)?;
        self.entity_manager.flush()?;
        debug!(enclosure = %enclosure.id(), "enclosure persisted");

        Ok(())
    }

    fn add_dinosaurs(&self, num_dinosaurs: usize, enclosure: &mut Enclosure) -> DinoparkResult<()> {
        for i in 0..num_dinosaurs {
            let length = i64::try_from(i)
                .ok()
                .and_then(|offset| self.base_length.checked_add(offset))
                .ok_or(DinoparkError::LengthOverflow {
                    base_length: self.base_length,
                    index: i,
                })?;
            let dinosaur = self.dinosaur_factory.grow_velociraptor(length);

            debug!(
                enclosure = %enclosure.id(),
                genus = dinosaur.genus(),
                length = dinosaur.length(),
                "admitting dinosaur"
            );
            enclosure.add_dinosaur(dinosaur)?;
        }

        Ok(())
    }
}
