//! Security entity - a safety device guarding an enclosure

use crate::domain::value_objects::EnclosureId;

/// Name of the device attached by `Enclosure::with_basic_security`
pub const BASIC_SECURITY_NAME: &str = "Fence";

/// A named safety device.
///
/// `enclosure` records which enclosure the device was made for. It is a
/// plain relation; the enclosure that actually holds the device owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Security {
    name: String,
    is_active: bool,
    enclosure: EnclosureId,
}

impl Security {
    pub fn new(name: impl Into<String>, is_active: bool, enclosure: EnclosureId) -> Self {
        Self {
            name: name.into(),
            is_active,
            enclosure,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn enclosure(&self) -> EnclosureId {
        self.enclosure
    }
}
