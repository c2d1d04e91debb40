//! Enclosure entity and its admission rules
//!
//! A dinosaur is admitted only when:
//! 1. at least one attached security device is active, and
//! 2. its diet matches the diet of the dinosaurs already inside.
//!
//! The first admitted dinosaur fixes the enclosure's diet. The diet is kept
//! as a cached field instead of being re-derived from the occupants.

use thiserror::Error;

use super::{Dinosaur, Security, BASIC_SECURITY_NAME};
use crate::domain::value_objects::{Diet, EnclosureId};

/// Reasons a dinosaur is refused entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdmissionError {
    /// No active security device: the dinosaurs would run rampant
    #[error("Are you crazy!? The enclosure has no active security")]
    UnsecuredEnclosure,

    /// Mixing diets turns the enclosure into a buffet
    #[error("not a buffet: {candidate} dinosaur cannot join a {enclosure} enclosure")]
    DietMismatch { enclosure: Diet, candidate: Diet },
}

/// An enclosure holding dinosaurs behind security devices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosure {
    id: EnclosureId,
    /// Admission order is preserved
    dinosaurs: Vec<Dinosaur>,
    securities: Vec<Security>,
    /// Set by the first admitted dinosaur
    diet: Option<Diet>,
}

impl Enclosure {
    /// Create a bare enclosure: no security, no dinosaurs
    pub fn new() -> Self {
        Self::with_id(EnclosureId::new())
    }

    /// Create an enclosure guarded by a single active fence
    pub fn with_basic_security() -> Self {
        let mut enclosure = Self::new();
        enclosure.attach_basic_security();
        enclosure
    }

    /// Create an enclosure and admit the initial dinosaurs in order.
    ///
    /// The basic fence (if requested) is attached before any dinosaur is
    /// admitted. If any admission fails, no enclosure is returned.
    pub fn try_new(
        with_basic_security: bool,
        dinosaurs: impl IntoIterator<Item = Dinosaur>,
    ) -> Result<Self, AdmissionError> {
        let mut enclosure = Self::new();
        if with_basic_security {
            enclosure.attach_basic_security();
        }

        for dinosaur in dinosaurs {
            enclosure.add_dinosaur(dinosaur)?;
        }

        Ok(enclosure)
    }

    /// Rebuild a stored enclosure under its original id.
    ///
    /// Securities are attached first, then every dinosaur goes through the
    /// regular admission rules.
    pub fn restore(
        id: EnclosureId,
        securities: impl IntoIterator<Item = Security>,
        dinosaurs: impl IntoIterator<Item = Dinosaur>,
    ) -> Result<Self, AdmissionError> {
        let mut enclosure = Self::with_id(id);
        for security in securities {
            enclosure.add_security(security);
        }
        for dinosaur in dinosaurs {
            enclosure.add_dinosaur(dinosaur)?;
        }
        Ok(enclosure)
    }

    fn with_id(id: EnclosureId) -> Self {
        Self {
            id,
            dinosaurs: Vec::new(),
            securities: Vec::new(),
            diet: None,
        }
    }

    fn attach_basic_security(&mut self) {
        let fence = Security::new(BASIC_SECURITY_NAME, true, self.id);
        self.add_security(fence);
    }

    // --- Getters ---

    pub fn id(&self) -> EnclosureId {
        self.id
    }

    /// Dinosaurs in admission order
    pub fn dinosaurs(&self) -> &[Dinosaur] {
        &self.dinosaurs
    }

    pub fn securities(&self) -> &[Security] {
        &self.securities
    }

    /// Diet shared by every occupant, `None` while the enclosure is empty
    pub fn diet(&self) -> Option<Diet> {
        self.diet
    }

    // --- Admission ---

    /// Admit a dinosaur.
    ///
    /// On error the dinosaur is not added and the enclosure is unchanged.
    pub fn add_dinosaur(&mut self, dinosaur: Dinosaur) -> Result<&mut Self, AdmissionError> {
        if !self.is_security_active() {
            return Err(AdmissionError::UnsecuredEnclosure);
        }

        if let Some(diet) = self.diet {
            if dinosaur.diet() != diet {
                return Err(AdmissionError::DietMismatch {
                    enclosure: diet,
                    candidate: dinosaur.diet(),
                });
            }
        }

        self.diet = Some(dinosaur.diet());
        self.dinosaurs.push(dinosaur);

        Ok(self)
    }

    /// Attach a security device.
    ///
    /// The device's enclosure back-reference is not checked against this
    /// enclosure.
    pub fn add_security(&mut self, security: Security) {
        self.securities.push(security);
    }

    /// True if any attached security device is active
    pub fn is_security_active(&self) -> bool {
        self.securities.iter().any(Security::is_active)
    }
}

impl Default for Enclosure {
    fn default() -> Self {
        Self::new()
    }
}
