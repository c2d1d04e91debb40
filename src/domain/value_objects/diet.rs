//! Diet value object - what a dinosaur eats
//!
//! - `Herbivorous`: plant eaters (the default for an unspecified dinosaur)
//! - `Carnivorous`: meat eaters

use serde::{Deserialize, Serialize};

/// Diet class of a dinosaur, and by extension of the enclosure holding it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    /// Plant eaters
    #[default]
    Herbivorous,
    /// Meat eaters
    Carnivorous,
}

impl Diet {
    /// Map the carnivorous flag onto a diet
    pub fn from_carnivorous(is_carnivorous: bool) -> Self {
        if is_carnivorous {
            Diet::Carnivorous
        } else {
            Diet::Herbivorous
        }
    }

    /// Returns true if this is a meat-eating diet
    pub fn is_carnivorous(&self) -> bool {
        matches!(self, Diet::Carnivorous)
    }

    /// Word used in dinosaur descriptions
    pub fn label(&self) -> &'static str {
        match self {
            Diet::Carnivorous => "carnivorous",
            Diet::Herbivorous => "non-carnivorous",
        }
    }
}

impl From<bool> for Diet {
    fn from(is_carnivorous: bool) -> Self {
        Diet::from_carnivorous(is_carnivorous)
    }
}

impl std::fmt::Display for Diet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
